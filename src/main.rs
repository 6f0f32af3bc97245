use clap::Parser;
use select_index::cli::commands::{cmd_audit, cmd_build, cmd_diff, cmd_resolve};
use select_index::cli::config::{load_config, Cli, Commands};
use select_index::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    let tracer = TraceLogger::from_config(config.trace.as_deref());

    match cli.command {
        Commands::Build {
            catalog,
            kind,
            format,
            output,
        } => {
            // CLI flag > config > default
            let format = format.as_deref().unwrap_or(&config.build.format);
            cmd_build(
                &catalog,
                kind.as_deref(),
                format,
                output.as_deref(),
                &config,
                cli.verbose,
                &tracer,
            )?;
        }
        Commands::Resolve {
            catalog,
            stored,
            token,
            kind,
        } => {
            cmd_resolve(
                &catalog,
                stored.as_deref(),
                token.as_deref(),
                kind.as_deref(),
                &config,
                cli.verbose,
                &tracer,
            )?;
        }
        Commands::Audit {
            catalog,
            format,
            output,
        } => {
            let format = format.as_deref().unwrap_or(&config.audit.format);
            let output = output.as_deref().or(config.audit.output.as_deref());
            let clean = cmd_audit(&catalog, format, output, &config, cli.verbose, &tracer)?;
            if !clean {
                std::process::exit(1);
            }
        }
        Commands::Diff {
            before,
            after,
            kind,
            selected,
        } => {
            cmd_diff(
                &before,
                &after,
                kind.as_deref(),
                &selected,
                &config,
                cli.verbose,
                &tracer,
            )?;
        }
    }

    Ok(())
}
