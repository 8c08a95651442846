use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::ReportFormat;

/// Report formats reachable from the command line. The library-level
/// `ReportFormat::Unknown` fallback is intentionally not exposed here.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Html,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => ReportFormat::Csv,
            OutputFormat::Html => ReportFormat::Html,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "relato")]
#[command(about = "Role-aware report generator for priced item collections", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a report from a request file
    Generate {
        /// Report request (JSON file with user and items)
        request: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
