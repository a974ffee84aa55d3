use clap::Parser;
use report_lens::cli::commands::{OutputFormat, cmd_check, cmd_generate};
use report_lens::cli::config::{AppConfig, Cli, Commands, load_config, resolve_report_config};
use report_lens::diag::logger::MemorySink;
use report_lens::view::config::ReportConfig;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_generate_minimal() {
    let cli = Cli::parse_from(["report-lens", "generate", "--results", "results.json"]);
    match cli.command {
        Commands::Generate {
            results,
            format,
            output_dir,
            report_title,
            show_hooks,
            filter,
            charts,
            dev,
        } => {
            assert_eq!(results, "results.json");
            assert!(format.is_none());
            assert!(output_dir.is_none());
            assert!(report_title.is_none());
            assert!(show_hooks.is_none());
            assert!(filter.is_none());
            assert!(!charts);
            assert!(!dev);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn cli_parse_generate_all_args() {
    let cli = Cli::parse_from([
        "report-lens",
        "generate",
        "--results",
        "out/results.json",
        "--format",
        "junit",
        "-o",
        "out/reports",
        "--report-title",
        "Nightly Run",
        "--show-hooks",
        "always",
        "--filter",
        "passed+failed",
        "--charts",
        "--dev",
    ]);
    match cli.command {
        Commands::Generate {
            results,
            format,
            output_dir,
            report_title,
            show_hooks,
            filter,
            charts,
            dev,
        } => {
            assert_eq!(results, "out/results.json");
            assert_eq!(format, Some("junit".to_string()));
            assert_eq!(output_dir, Some("out/reports".to_string()));
            assert_eq!(report_title, Some("Nightly Run".to_string()));
            assert_eq!(show_hooks, Some("always".to_string()));
            assert_eq!(filter, Some("passed+failed".to_string()));
            assert!(charts);
            assert!(dev);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn cli_parse_check() {
    let cli = Cli::parse_from(["report-lens", "check", "--results", "results/"]);
    match cli.command {
        Commands::Check { results } => {
            assert_eq!(results, "results/");
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_parse_global_verbose() {
    let cli = Cli::parse_from(["report-lens", "-v", "check", "--results", "r.json"]);
    assert_eq!(cli.verbose, 1);

    let cli2 = Cli::parse_from(["report-lens", "-vvv", "check", "--results", "r.json"]);
    assert_eq!(cli2.verbose, 3);
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::parse_from([
        "report-lens",
        "--config",
        "custom.yaml",
        "generate",
        "--results",
        "r.json",
    ]);
    assert_eq!(cli.config, Some("custom.yaml".to_string()));
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn config_load_missing_file() {
    let config = load_config(Some("nonexistent_file_that_does_not_exist.yaml"));
    // Should return defaults without error
    assert_eq!(config.output.format, "html");
    assert_eq!(config.output.output_dir, "reports");
    assert!(config.report.report_title.is_none());
}

#[test]
fn config_default_values() {
    let config = AppConfig::default();
    assert!(config.report.report_title.is_none());
    assert!(config.report.show_hooks.is_none());
    assert!(config.report.filter.is_none());
    assert!(!config.report.enable_charts);
    assert!(!config.report.dev);
    assert_eq!(config.output.format, "html");
    assert_eq!(config.output.output_dir, "reports");
}

#[test]
fn config_yaml_roundtrip() {
    let config = AppConfig::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: AppConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed.output.format, config.output.format);
    assert_eq!(parsed.output.output_dir, config.output.output_dir);
    assert_eq!(parsed.report.show_hooks, config.report.show_hooks);
}

#[test]
fn config_partial_yaml() {
    let yaml = r#"
report:
  filter: "failed"
output:
  format: "junit"
"#;
    let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.report.filter, Some("failed".to_string()));
    // Other report fields get defaults
    assert!(config.report.show_hooks.is_none());
    assert!(!config.report.enable_charts);
    // Output dir keeps its default
    assert_eq!(config.output.format, "junit");
    assert_eq!(config.output.output_dir, "reports");
}

#[test]
fn config_unknown_keys_ignored() {
    let yaml = r#"
report:
  show_hooks: "never"
  legacy_flag: 7
theme: "dark"
"#;
    let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.report.show_hooks, Some("never".to_string()));
    assert_eq!(config.output.format, "html");
}

#[test]
fn config_load_from_file() {
    use std::io::Write;

    let dir = std::env::temp_dir().join("report_lens_cli_config");
    std::fs::create_dir_all(&dir).unwrap();
    let config_path = dir.join("report-lens.yaml");

    let yaml = r#"
report:
  report_title: "Nightly"
  show_hooks: "always"
  enable_charts: true
output:
  format: "junit"
  output_dir: "ci-reports"
"#;

    let mut f = std::fs::File::create(&config_path).unwrap();
    f.write_all(yaml.as_bytes()).unwrap();

    let config = load_config(config_path.to_str());
    assert_eq!(config.report.report_title, Some("Nightly".to_string()));
    assert_eq!(config.report.show_hooks, Some("always".to_string()));
    assert!(config.report.enable_charts);
    assert_eq!(config.output.format, "junit");
    assert_eq!(config.output.output_dir, "ci-reports");

    // Cleanup
    std::fs::remove_file(&config_path).ok();
    std::fs::remove_dir(&dir).ok();
}

#[test]
fn config_load_malformed_falls_back() {
    use std::io::Write;

    let dir = std::env::temp_dir().join("report_lens_cli_malformed");
    std::fs::create_dir_all(&dir).unwrap();
    let config_path = dir.join("report-lens.yaml");

    let mut f = std::fs::File::create(&config_path).unwrap();
    f.write_all(b"report: [not: valid").unwrap();

    let config = load_config(config_path.to_str());
    assert_eq!(config.output.format, "html");
    assert!(config.report.show_hooks.is_none());

    // Cleanup
    std::fs::remove_file(&config_path).ok();
    std::fs::remove_dir(&dir).ok();
}

// ============================================================================
// Config Resolution Tests
// ============================================================================

#[test]
fn resolve_report_config_cli_wins() {
    let file = ReportConfig {
        report_title: Some("From File".to_string()),
        show_hooks: Some("never".to_string()),
        filter: Some("failed".to_string()),
        enable_charts: false,
        dev: false,
    };

    let resolved = resolve_report_config(
        &file,
        Some("From CLI".to_string()),
        Some("always".to_string()),
        Some("passed".to_string()),
        true,
        true,
    );
    assert_eq!(resolved.report_title, Some("From CLI".to_string()));
    assert_eq!(resolved.show_hooks, Some("always".to_string()));
    assert_eq!(resolved.filter, Some("passed".to_string()));
    assert!(resolved.enable_charts);
    assert!(resolved.dev);
}

#[test]
fn resolve_report_config_file_fallback() {
    let file = ReportConfig {
        report_title: Some("From File".to_string()),
        show_hooks: Some("never".to_string()),
        filter: None,
        enable_charts: true,
        dev: false,
    };

    let resolved = resolve_report_config(&file, None, None, None, false, false);
    assert_eq!(resolved.report_title, Some("From File".to_string()));
    assert_eq!(resolved.show_hooks, Some("never".to_string()));
    assert!(resolved.filter.is_none());
    assert!(resolved.enable_charts, "File-enabled flags stay on");
    assert!(!resolved.dev);
}

// ============================================================================
// Output Format Tests
// ============================================================================

#[test]
fn output_format_from_name() {
    let sink = MemorySink::new();
    assert_eq!(OutputFormat::from_name("console", &sink), OutputFormat::Console);
    assert_eq!(OutputFormat::from_name("html", &sink), OutputFormat::Html);
    assert_eq!(OutputFormat::from_name("junit", &sink), OutputFormat::Junit);
    assert_eq!(OutputFormat::from_name("json", &sink), OutputFormat::Json);
    assert!(sink.messages().is_empty());
}

#[test]
fn output_format_unknown_falls_back_to_html() {
    let sink = MemorySink::new();
    assert_eq!(OutputFormat::from_name("pdf", &sink), OutputFormat::Html);

    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("'pdf' is not a valid option for property: 'format'"));
    assert!(messages[0].contains("console, html, junit, json"));
}

#[test]
fn output_format_extensions() {
    assert_eq!(OutputFormat::Console.extension(), None);
    assert_eq!(OutputFormat::Html.extension(), Some("html"));
    assert_eq!(OutputFormat::Junit.extension(), Some("xml"));
    assert_eq!(OutputFormat::Json.extension(), Some("json"));
}

// ============================================================================
// Subcommand Integration Tests
// ============================================================================

const MINIMAL_RESULTS: &str = r#"{
  "stats": { "suites": 1, "tests": 1, "passes": 1, "duration": 12 },
  "suites": {
    "uuid": "r1",
    "title": "Root",
    "tests": [{ "uuid": "t1", "title": "works", "pass": true, "duration": 12 }]
  }
}"#;

#[test]
fn cmd_check_valid_and_broken_files() {
    let dir = std::env::temp_dir().join("report_lens_cli_check");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("valid.json"), MINIMAL_RESULTS).unwrap();

    let all_ok = cmd_check(dir.to_str().unwrap(), 0).unwrap();
    assert!(all_ok);

    std::fs::write(dir.join("broken.json"), "{ not json").unwrap();
    let all_ok = cmd_check(dir.to_str().unwrap(), 0).unwrap();
    assert!(!all_ok);

    // Cleanup
    std::fs::remove_file(dir.join("valid.json")).ok();
    std::fs::remove_file(dir.join("broken.json")).ok();
    std::fs::remove_dir(&dir).ok();
}

#[test]
fn cmd_generate_writes_html_report() {
    let dir = std::env::temp_dir().join("report_lens_cli_generate");
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("results.json");
    std::fs::write(&input, MINIMAL_RESULTS).unwrap();
    let out_dir = dir.join("out");

    let all_ok = cmd_generate(
        input.to_str().unwrap(),
        "html",
        out_dir.to_str().unwrap(),
        &ReportConfig::default(),
        0,
    )
    .unwrap();
    assert!(all_ok);

    let report = std::fs::read_to_string(out_dir.join("results.html")).unwrap();
    assert!(report.contains("<!DOCTYPE html>"));
    assert!(report.contains("works"));

    // Cleanup
    std::fs::remove_file(out_dir.join("results.html")).ok();
    std::fs::remove_dir(&out_dir).ok();
    std::fs::remove_file(&input).ok();
    std::fs::remove_dir(&dir).ok();
}

#[test]
fn cmd_generate_console_writes_no_files() {
    let dir = std::env::temp_dir().join("report_lens_cli_console");
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("results.json");
    std::fs::write(&input, MINIMAL_RESULTS).unwrap();
    let out_dir = dir.join("out");

    let all_ok = cmd_generate(
        input.to_str().unwrap(),
        "console",
        out_dir.to_str().unwrap(),
        &ReportConfig::default(),
        0,
    )
    .unwrap();
    assert!(all_ok);
    assert!(!out_dir.exists(), "Console output goes to stdout only");

    // Cleanup
    std::fs::remove_file(&input).ok();
    std::fs::remove_dir(&dir).ok();
}

#[test]
fn cmd_generate_skips_broken_files_but_reports_failure() {
    let dir = std::env::temp_dir().join("report_lens_cli_generate_mixed");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("good.json"), MINIMAL_RESULTS).unwrap();
    std::fs::write(dir.join("bad.json"), "{ nope").unwrap();
    let out_dir = dir.join("out");

    let all_ok = cmd_generate(
        dir.to_str().unwrap(),
        "json",
        out_dir.to_str().unwrap(),
        &ReportConfig::default(),
        0,
    )
    .unwrap();
    assert!(!all_ok, "A broken input fails the batch");
    assert!(
        out_dir.join("good.json").exists(),
        "Healthy inputs still render"
    );
    assert!(!out_dir.join("bad.json").exists());

    // Cleanup
    std::fs::remove_file(out_dir.join("good.json")).ok();
    std::fs::remove_dir(&out_dir).ok();
    std::fs::remove_file(dir.join("good.json")).ok();
    std::fs::remove_file(dir.join("bad.json")).ok();
    std::fs::remove_dir(&dir).ok();
}
