//! CLI argument definitions for the dental chart tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dental-cli",
    version,
    about = "Render dental prosthesis charts and order summaries",
    long_about = "Render dental prosthesis charts and order summaries.\n\n\
                  Reads an order record (JSON) and prints the printed-document\n\
                  summary lines or the 32-slot tooth chart."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr, with timestamps and module targets.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Label language for rendered summaries.
    #[arg(long = "language", value_enum, default_value = "english", global = true)]
    pub language: LanguageArg,

    /// Only match two-digit tooth ids.
    ///
    /// By default a bare single-digit tooth number (legacy data) selects that
    /// position in every quadrant.
    #[arg(long = "no-legacy-match", global = true)]
    pub no_legacy_match: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the order document summary lines.
    Document(DocumentArgs),

    /// Print the tooth chart for an order.
    Chart(ChartArgs),

    /// Check whether a tooth is selected by a list of references.
    Select(SelectArgs),
}

#[derive(Parser)]
pub struct DocumentArgs {
    /// Path to the order record (JSON).
    #[arg(value_name = "ORDER_JSON")]
    pub order: PathBuf,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: DocumentFormatArg,
}

#[derive(Parser)]
pub struct ChartArgs {
    /// Path to the order record (JSON).
    #[arg(value_name = "ORDER_JSON")]
    pub order: PathBuf,

    /// Print only the selection grid.
    #[arg(long = "compact")]
    pub compact: bool,
}

#[derive(Parser)]
pub struct SelectArgs {
    /// Two-digit tooth id to check (e.g. 23).
    #[arg(long = "tooth", value_name = "ID")]
    pub tooth: String,

    /// Selected tooth references, in any stored encoding.
    #[arg(value_name = "REF", required = true)]
    pub refs: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DocumentFormatArg {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    English,
    Korean,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
