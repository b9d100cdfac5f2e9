//! CLI argument definitions for the tracker migration tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use trackmig_cli::types::MigratePaths;

#[derive(Parser)]
#[command(
    name = "trackmig",
    version,
    about = "Convert Jira CSV exports into an Azure DevOps work item import file",
    long_about = "Convert Jira CSV exports into an Azure DevOps work item import file.\n\n\
                  Joins the default-fields export with the all-fields export by issue key,\n\
                  translates Jira markup to Markdown, remaps priorities and normalizes dates."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Join both exports and write the import file.
    Migrate(MigrateArgs),

    /// Rewrite the Description column of a single export as Markdown.
    CleanDescriptions(CleanArgs),

    /// Show the priority mapping table.
    Priorities,
}

#[derive(Parser)]
pub struct MigrateArgs {
    /// Export with the core issue fields (Issue key, Summary, Priority, ...).
    #[arg(
        long = "default-fields",
        value_name = "CSV",
        default_value = "input/default_fields.csv"
    )]
    pub default_fields: PathBuf,

    /// Export with Description, Environment and Attachment columns.
    #[arg(
        long = "all-fields",
        value_name = "CSV",
        default_value = "input/all_fields.csv"
    )]
    pub all_fields: PathBuf,

    /// Import file to write.
    #[arg(
        long = "output",
        short = 'o',
        value_name = "CSV",
        default_value = "output/azure_output.csv"
    )]
    pub output: PathBuf,
}

impl From<&MigrateArgs> for MigratePaths {
    fn from(args: &MigrateArgs) -> Self {
        Self {
            default_fields: args.default_fields.clone(),
            all_fields: args.all_fields.clone(),
            output: args.output.clone(),
        }
    }
}

#[derive(Parser)]
pub struct CleanArgs {
    /// CSV export with a Description column.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the cleaned CSV.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
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
