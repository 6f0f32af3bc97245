use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::catalog::record::ProjectionTable;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "select-index",
    version,
    about = "Duplicate-safe selection lists for console resource catalogs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: select-index.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build disambiguated option lists from a catalog
    Build {
        /// Catalog file, directory, or http(s) endpoint
        #[arg(long)]
        catalog: String,

        /// Only build options for this resource kind
        #[arg(long)]
        kind: Option<String>,

        /// Output format: console, json
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Convert between stored values and selection tokens
    Resolve {
        /// Catalog file, directory, or http(s) endpoint
        #[arg(long)]
        catalog: String,

        /// Stored value to convert into a token (first match by position)
        #[arg(long, conflicts_with = "token")]
        stored: Option<String>,

        /// Token to convert back into a stored value
        #[arg(long)]
        token: Option<String>,

        /// Resource kind to resolve against (required with --stored)
        #[arg(long)]
        kind: Option<String>,
    },

    /// Audit a catalog for label collisions
    Audit {
        /// Catalog file, directory, or http(s) endpoint
        #[arg(long)]
        catalog: String,

        /// Output format: console, json, junit
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Compare option lists across a catalog refresh
    Diff {
        /// Catalog before the refresh
        #[arg(long)]
        before: String,

        /// Catalog after the refresh
        #[arg(long)]
        after: String,

        /// Only diff this resource kind
        #[arg(long)]
        kind: Option<String>,

        /// Persisted stored values to check for staleness (comma-separated)
        #[arg(long, value_delimiter = ',')]
        selected: Vec<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `select-index.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub projections: ProjectionTable,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub audit: AuditConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    /// JSONL trace file; tracing is off when unset
    pub trace: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_console")]
    pub format: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    #[serde(default = "default_console")]
    pub format: String,

    pub output: Option<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
            output: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self { timeout_secs: 10 }
    }
}

// Serde default helpers
fn default_console() -> String { "console".to_string() }
fn default_timeout() -> u64 { 10 }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or
/// malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("select-index.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
