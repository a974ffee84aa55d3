use std::path::Path;

use serde::Serialize;

use crate::diag::logger::{ConsoleSink, DiagnosticSink, warn_invalid_option};
use crate::report::console::format_console_report;
use crate::report::html::generate_html_report;
use crate::report::junit::generate_junit_xml;
use crate::results::loader::load_documents;
use crate::results::results_model::{Suite, TestStats};
use crate::view::config::ReportConfig;
use crate::view::session::ReportSession;

// ============================================================================
// Output formats
// ============================================================================

/// Output format for the generate subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Html,
    Junit,
    Json,
}

impl OutputFormat {
    pub const OPTIONS: [&'static str; 4] = ["console", "html", "junit", "json"];

    /// Resolve a format name. An unknown name warns and falls back to
    /// HTML rather than aborting the run.
    pub fn from_name(name: &str, sink: &dyn DiagnosticSink) -> Self {
        match name {
            "console" => OutputFormat::Console,
            "html" => OutputFormat::Html,
            "junit" => OutputFormat::Junit,
            "json" => OutputFormat::Json,
            _ => {
                warn_invalid_option(sink, "format", name, &Self::OPTIONS);
                OutputFormat::Html
            }
        }
    }

    /// File extension for formats that write files; console goes to
    /// stdout.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            OutputFormat::Console => None,
            OutputFormat::Html => Some("html"),
            OutputFormat::Junit => Some("xml"),
            OutputFormat::Json => Some("json"),
        }
    }
}

// ============================================================================
// generate subcommand
// ============================================================================

/// Render a report for each results file and return whether every input
/// loaded cleanly. A file that fails to load is reported and skipped;
/// the rest of the batch still renders.
pub fn cmd_generate(
    results_path: &str,
    format_name: &str,
    output_dir: &str,
    config: &ReportConfig,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let sink = ConsoleSink;
    let format = OutputFormat::from_name(format_name, &sink);

    let outcomes = load_documents(Path::new(results_path));
    if outcomes.is_empty() {
        eprintln!("No results files found at: {}", results_path);
        return Ok(true);
    }

    if verbose > 0 {
        eprintln!("Rendering {} results file(s)...", outcomes.len());
    }

    if format.extension().is_some() {
        std::fs::create_dir_all(output_dir)?;
    }

    let mut all_ok = true;
    let mut written = 0usize;
    for outcome in outcomes {
        match outcome.result {
            Ok(document) => {
                let session = ReportSession::new(document, config);
                let content = render(&session, format)?;
                match format.extension() {
                    Some(extension) => {
                        let filename = output_file_name(&outcome.path, extension);
                        let path = Path::new(output_dir).join(&filename);
                        std::fs::write(&path, &content)?;
                        written += 1;
                        if verbose > 0 {
                            eprintln!("  Wrote: {}", path.display());
                        }
                    }
                    None => print!("{}", content),
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                all_ok = false;
            }
        }
    }

    if written > 0 {
        println!("Generated {} report(s) in {}/", written, output_dir);
    }

    Ok(all_ok)
}

// ============================================================================
// check subcommand
// ============================================================================

/// Validate results files and return whether all of them loaded cleanly.
pub fn cmd_check(results_path: &str, verbose: u8) -> Result<bool, Box<dyn std::error::Error>> {
    let outcomes = load_documents(Path::new(results_path));
    if outcomes.is_empty() {
        eprintln!("No results files found at: {}", results_path);
        return Ok(true);
    }

    if verbose > 0 {
        eprintln!("Checking {} results file(s)...", outcomes.len());
    }

    let mut all_ok = true;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(document) => {
                println!(
                    "\u{2713} {} ({} tests, {} suites)",
                    outcome.path.display(),
                    document.stats.tests,
                    document.stats.suites
                );
            }
            Err(e) => {
                println!("\u{2717} {}", outcome.path.display());
                println!("    {}", e);
                all_ok = false;
            }
        }
    }

    Ok(all_ok)
}

// ============================================================================
// Helpers
// ============================================================================

/// Dispatch to the renderer for the chosen format.
fn render(
    session: &ReportSession,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Console => Ok(format_console_report(session)),
        OutputFormat::Html => Ok(generate_html_report(session)),
        OutputFormat::Junit => Ok(generate_junit_xml(session)),
        OutputFormat::Json => Ok(export_json(session)?),
    }
}

/// Machine-readable export of the session's current view. Keyed the same
/// way as the input documents so downstream tooling can reuse parsers.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    report_title: Option<&'a str>,
    stats: &'a TestStats,
    suites: &'a [Suite],
}

pub fn export_json(session: &ReportSession) -> Result<String, serde_json::Error> {
    let suites = session.suites();
    let export = JsonExport {
        report_title: session.report_title(),
        stats: session.stats(),
        suites: &suites,
    };
    serde_json::to_string_pretty(&export)
}

/// Derive the output filename from the input file's stem.
fn output_file_name(input: &Path, extension: &str) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    format!("{}.{}", stem, extension)
}
