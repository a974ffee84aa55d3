use clap::Parser;
use report_lens::cli::commands::{cmd_check, cmd_generate};
use report_lens::cli::config::{Cli, Commands, load_config, resolve_report_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

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
            // Resolve output settings: CLI > config > defaults
            let format = format.unwrap_or(config.output.format);
            let output_dir = output_dir.unwrap_or(config.output.output_dir);
            let report_config =
                resolve_report_config(&config.report, report_title, show_hooks, filter, charts, dev);

            let all_ok = cmd_generate(&results, &format, &output_dir, &report_config, cli.verbose)?;
            if !all_ok {
                std::process::exit(1);
            }
        }
        Commands::Check { results } => {
            let all_ok = cmd_check(&results, cli.verbose)?;
            if !all_ok {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
