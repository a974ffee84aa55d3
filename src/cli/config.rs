use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::view::config::ReportConfig;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "report-lens",
    version,
    about = "Filterable report rendering for JSON test results"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: report-lens.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render reports from results JSON files
    Generate {
        /// Path to a results JSON file or a directory of results files
        #[arg(long)]
        results: String,

        /// Output format: html, console, junit, json
        #[arg(long)]
        format: Option<String>,

        /// Output directory for file formats
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Report title override
        #[arg(long)]
        report_title: Option<String>,

        /// Hook display mode: failed, always, never, context
        #[arg(long)]
        show_hooks: Option<String>,

        /// Outcome filter spec, e.g. passed+failed
        #[arg(long)]
        filter: Option<String>,

        /// Render per-suite pass-rate bars in HTML output
        #[arg(long)]
        charts: bool,

        /// Include projection internals in rendered output
        #[arg(long)]
        dev: bool,
    },

    /// Check that results files load and validate cleanly
    Check {
        /// Path to a results JSON file or a directory of results files
        #[arg(long)]
        results: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `report-lens.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_html")]
    pub format: String,

    #[serde(default = "default_reports_dir")]
    pub output_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "html".to_string(),
            output_dir: "reports".to_string(),
        }
    }
}

// Serde default helpers
fn default_html() -> String {
    "html".to_string()
}
fn default_reports_dir() -> String {
    "reports".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("report-lens.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Resolution (merge CLI args with config file)
// ============================================================================

/// Merge CLI view flags over the config file's report section. A flag
/// given on the command line wins; otherwise the file value is kept.
pub fn resolve_report_config(
    file: &ReportConfig,
    report_title: Option<String>,
    show_hooks: Option<String>,
    filter: Option<String>,
    charts: bool,
    dev: bool,
) -> ReportConfig {
    ReportConfig {
        report_title: report_title.or_else(|| file.report_title.clone()),
        show_hooks: show_hooks.or_else(|| file.show_hooks.clone()),
        filter: filter.or_else(|| file.filter.clone()),
        enable_charts: charts || file.enable_charts,
        dev: dev || file.dev,
    }
}
