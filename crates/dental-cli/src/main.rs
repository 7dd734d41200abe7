//! Dental chart CLI.

use clap::{ColorChoice, Parser};
use dental_chart::Labels;
use dental_cli::commands::{run_chart, run_document, run_select};
use dental_cli::logging::{LogConfig, LogFormat, init_logging};
use dental_cli::render::{document_json, print_chart};
use dental_model::{ChartOptions, LegacyMatching, SummaryLanguage};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, DocumentFormatArg, LanguageArg, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let options = chart_options_from_cli(&cli);
    let labels = Labels::for_language(options.language);
    let exit_code = match &cli.command {
        Command::Document(args) => match run_document(&args.order, &options) {
            Ok(document) => match args.format {
                DocumentFormatArg::Text => {
                    println!("{}", document.to_text());
                    0
                }
                DocumentFormatArg::Json => match document_json(&document) {
                    Ok(json) => {
                        println!("{json}");
                        0
                    }
                    Err(error) => {
                        eprintln!("error: {error}");
                        1
                    }
                },
            },
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Chart(args) => match run_chart(&args.order, &options) {
            Ok(chart) => {
                print_chart(&chart, args.compact, labels);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Select(args) => match run_select(&args.tooth, &args.refs, &options) {
            Ok(selected) => {
                let status = if selected { "selected" } else { "not selected" };
                println!("{}: {status}", args.tooth.trim());
                if selected { 0 } else { 2 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn chart_options_from_cli(cli: &Cli) -> ChartOptions {
    let language = match cli.language {
        LanguageArg::English => SummaryLanguage::English,
        LanguageArg::Korean => SummaryLanguage::Korean,
    };
    let legacy_matching = if cli.no_legacy_match {
        LegacyMatching::Disabled
    } else {
        LegacyMatching::Enabled
    };
    ChartOptions::new()
        .with_language(language)
        .with_legacy_matching(legacy_matching)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    // File logs carry timestamps and module targets.
    let to_file = cli.log_file.is_some();
    config = config
        .with_timestamps(to_file)
        .with_target(to_file)
        .with_log_file(cli.log_file.clone());
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_logging_enables_timestamps_and_targets() {
        let cli = Cli::parse_from([
            "dental", "--log-file", "dental.log", "--color", "never", "select", "--tooth", "11",
            "11",
        ]);
        let config = log_config_from_cli(&cli);
        assert!(config.with_timestamps);
        assert!(config.with_target);
        assert!(!config.with_ansi);

        let cli = Cli::parse_from(["dental", "select", "--tooth", "11", "11"]);
        let config = log_config_from_cli(&cli);
        assert!(!config.with_timestamps);
        assert!(!config.with_target);
    }
}
