use std::collections::BTreeSet;
use std::time::Duration;

use crate::catalog::loader::load_source;
use crate::catalog::record::{Catalog, ProjectionTable, ResourceRecord};
use crate::cli::config::AppConfig;
use crate::report::audit::audit_catalog;
use crate::report::console::format_audit_report;
use crate::report::json::render_json_report;
use crate::report::junit::generate_junit_xml;
use crate::select::diff::{diff_options, unchanged};
use crate::select::index::build;
use crate::select::option_model::{to_stored_value, SelectIndex};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

// ============================================================================
// build subcommand
// ============================================================================

pub fn cmd_build(
    catalog_source: &str,
    kind: Option<&str>,
    format: &str,
    output: Option<&str>,
    config: &AppConfig,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog_source(catalog_source, config, verbose, tracer)?;

    let by_kind = catalog.by_kind();
    let kinds: Vec<&str> = match kind {
        Some(k) => vec![k],
        None => by_kind.keys().copied().collect(),
    };

    let mut console_out = String::new();
    let mut json_out = serde_json::Map::new();

    for kind in kinds {
        let records = by_kind.get(kind).cloned().unwrap_or_default();
        let index = kind_index(&records, kind, &config.projections);

        tracer.log(TraceEvent::OptionsBuilt {
            kind: kind.to_string(),
            total: index.len(),
            duplicates: index.options().iter().filter(|o| o.duplicate).count(),
            fingerprint: index.fingerprint().to_string(),
        });

        match format {
            "json" => {
                json_out.insert(kind.to_string(), serde_json::to_value(index.options())?);
            }
            _ => {
                console_out.push_str(&format_option_list(kind, &index));
            }
        }
    }

    let output_content = match format {
        "json" => serde_json::to_string_pretty(&serde_json::Value::Object(json_out))?,
        _ => console_out,
    };

    write_or_print(output, &output_content)?;
    Ok(())
}

/// Format one kind's option list for terminal output.
fn format_option_list<T>(kind: &str, index: &SelectIndex<'_, T>) -> String {
    let duplicates = index.options().iter().filter(|o| o.duplicate).count();

    let mut out = format!(
        "=== {} ({} options, {} duplicate labels) ===\n",
        kind,
        index.len(),
        duplicates
    );

    for opt in index.options() {
        out.push_str(&format!("  {:<24} \"{}\"\n", opt.key, opt.label));
    }

    out.push('\n');
    out
}

// ============================================================================
// resolve subcommand
// ============================================================================

/// Convert between stored values and selection tokens against a freshly
/// built batch. Lookup misses print a note and succeed; they are not
/// errors.
pub fn cmd_resolve(
    catalog_source: &str,
    stored: Option<&str>,
    token: Option<&str>,
    kind: Option<&str>,
    config: &AppConfig,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(token) = token {
        let value = to_stored_value(token);

        tracer.log(TraceEvent::TokenResolved {
            token: token.to_string(),
            stored: value.to_string(),
            hit: !value.is_empty(),
        });

        if value.is_empty() {
            println!("Token '{}' carries no stored value", token);
        } else {
            println!("{}", value);
        }

        // With a kind we can also check the token against the current batch
        if let Some(kind) = kind {
            let catalog = load_catalog_source(catalog_source, config, verbose, tracer)?;
            let records = catalog.of_kind(kind);
            let index = kind_index(&records, kind, &config.projections);

            match index.resolve(token) {
                Some(record) => println!("Resolves to {} '{}'", record.kind, record.id),
                None => println!("Token is not valid against the current batch"),
            }
        }

        return Ok(());
    }

    let stored = match stored {
        Some(s) => s,
        None => return Err("resolve needs either --stored or --token".into()),
    };
    let kind = match kind {
        Some(k) => k,
        None => return Err("--stored needs --kind to pick the batch".into()),
    };

    let catalog = load_catalog_source(catalog_source, config, verbose, tracer)?;
    let records = catalog.of_kind(kind);
    let index = kind_index(&records, kind, &config.projections);

    match index.token_for(stored) {
        Some(token) => {
            tracer.log(TraceEvent::TokenResolved {
                token: token.to_string(),
                stored: stored.to_string(),
                hit: true,
            });
            println!("{}", token);
        }
        None => {
            tracer.log(TraceEvent::TokenResolved {
                token: String::new(),
                stored: stored.to_string(),
                hit: false,
            });
            println!("No {} record with stored value '{}'", kind, stored);
        }
    }

    Ok(())
}

// ============================================================================
// audit subcommand
// ============================================================================

/// Audit a catalog for label collisions and return whether it was clean.
pub fn cmd_audit(
    catalog_source: &str,
    format: &str,
    output: Option<&str>,
    config: &AppConfig,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<bool, Box<dyn std::error::Error>> {
    let catalog = load_catalog_source(catalog_source, config, verbose, tracer)?;

    if verbose > 0 {
        eprintln!(
            "Auditing {} records across {} kinds...",
            catalog.len(),
            catalog.by_kind().len()
        );
    }

    let start = std::time::Instant::now();
    let report = audit_catalog(catalog_source, &catalog, &config.projections)
        .with_duration(start.elapsed().as_millis());

    tracer.log(TraceEvent::AuditCompleted {
        kinds: report.kinds,
        collision_groups: report.collision_groups,
        clean: report.clean(),
    });

    let output_content = match format {
        "json" => render_json_report(&report)?,
        "junit" => generate_junit_xml(&report),
        _ => format_audit_report(&report),
    };

    write_or_print(output, &output_content)?;
    Ok(report.clean())
}

// ============================================================================
// diff subcommand
// ============================================================================

pub fn cmd_diff(
    before_source: &str,
    after_source: &str,
    kind: Option<&str>,
    selected: &[String],
    config: &AppConfig,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let before = load_catalog_source(before_source, config, verbose, tracer)?;
    let after = load_catalog_source(after_source, config, verbose, tracer)?;

    let kinds: Vec<String> = match kind {
        Some(k) => vec![k.to_string()],
        None => {
            // Union of both catalogs' kinds, so disappearing kinds show up
            let mut set: BTreeSet<&str> = before.by_kind().keys().copied().collect();
            set.extend(after.by_kind().keys().copied());
            set.iter().map(|k| k.to_string()).collect()
        }
    };

    for kind in &kinds {
        let before_records = before.of_kind(kind);
        let after_records = after.of_kind(kind);

        let before_index = kind_index(&before_records, kind, &config.projections);
        let after_index = kind_index(&after_records, kind, &config.projections);

        if unchanged(&before_index, &after_index) {
            println!("{}: unchanged", kind);
            continue;
        }

        let diff = diff_options(&before_index, &after_index, selected);

        println!(
            "{}: +{} -{} ~{}",
            kind,
            diff.added.len(),
            diff.removed.len(),
            diff.relabelled.len()
        );

        for stored in &diff.added {
            println!("  + {}", stored);
        }
        for stored in &diff.removed {
            println!("  - {}", stored);
        }
        for r in &diff.relabelled {
            println!("  ~ {}: \"{}\" → \"{}\"", r.stored, r.before_label, r.after_label);
        }
        for stored in &diff.stale_selections {
            println!("  ! stale selection: {}", stored);
        }
    }

    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn load_catalog_source(
    source: &str,
    config: &AppConfig,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<Catalog, Box<dyn std::error::Error>> {
    if verbose > 0 {
        eprintln!("Loading catalog from {}...", source);
    }

    let timeout = Duration::from_secs(config.remote.timeout_secs);
    let catalog = load_source(source, timeout)?;

    tracer.log(TraceEvent::CatalogLoaded {
        source: source.to_string(),
        records: catalog.len(),
    });

    Ok(catalog)
}

fn write_or_print(output: Option<&str>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => std::fs::write(path, content)?,
        None => print!("{}", content),
    }
    Ok(())
}

/// Build the selection index for one kind with the configured projections.
pub fn kind_index<'a>(
    records: &'a [&'a ResourceRecord],
    kind: &str,
    projections: &ProjectionTable,
) -> SelectIndex<'a, &'a ResourceRecord> {
    let projection = projections.for_kind(kind);
    build(
        records,
        |r| projection.stored_of(r),
        |r| projection.label_of(r),
    )
}
