//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use prospector_extractor::SegmentStrategy;

/// Prospector CLI - Extract prospect records from agent reports.
#[derive(Debug, Parser)]
#[command(name = "prospector")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PROSPECTOR_CONFIG")]
    pub config: Option<String>,

    /// Use the strict extraction and validation presets
    #[arg(long, global = true)]
    pub strict: bool,

    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (company names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract prospect records from one or more reports
    Extract(ExtractArgs),

    /// Report whether a file looks like a structured agent report
    Detect(DetectArgs),

    /// Show the candidate blocks a report splits into
    Segment(SegmentArgs),

    /// Show the effective configuration
    Config(ConfigArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Report files to process
    pub files: Vec<String>,

    /// Read a single report from stdin
    #[arg(long, conflicts_with = "files")]
    pub stdin: bool,

    /// Append records as JSON lines to this file
    #[arg(short, long)]
    pub output: Option<String>,

    /// Also list blocks that were dropped, with the reason
    #[arg(long)]
    pub show_dropped: bool,
}

/// Arguments for the detect command.
#[derive(Debug, Parser)]
pub struct DetectArgs {
    /// Report file
    pub file: String,
}

/// Arguments for the segment command.
#[derive(Debug, Parser)]
pub struct SegmentArgs {
    /// Report file
    pub file: String,

    /// Run one strategy instead of the configured priority list
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// Write the effective configuration to the config file
    #[arg(long)]
    pub save: bool,
}

/// Segmentation strategy argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StrategyArg {
    /// `1. **Company**` headings
    Numbered,
    /// `**Company**` heading lines
    Emphasis,
    /// Names with a corporate or industry suffix
    Suffix,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<StrategyArg> for SegmentStrategy {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::Numbered => SegmentStrategy::NumberedEmphasis,
            StrategyArg::Emphasis => SegmentStrategy::Emphasis,
            StrategyArg::Suffix => SegmentStrategy::CompanySuffix,
        }
    }
}
