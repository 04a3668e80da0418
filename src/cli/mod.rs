//! Command-line interface module

use clap::{Parser, ValueEnum};

use crate::config::Settings;
use crate::conversion::BatchSummary;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "utf8conv")]
#[command(about = "Convert files from a source charset to UTF-8")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Source file, directory, or glob pattern such as 'in/*.dat'
    #[arg()]
    pub source: String,

    /// Destination file or directory
    #[arg(short, long)]
    pub output: String,

    /// Regular expression applied to candidate file names, e.g. '.*\.txt'
    /// (default: match every name)
    #[arg(long)]
    pub filter: Option<String>,

    /// Charset the source files are encoded in, e.g. ISO-8859-1 or Shift_JIS
    #[arg(short, long)]
    pub charset: String,

    /// Keep converting remaining files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,

    /// Output a run summary
    #[arg(long)]
    pub stats: bool,

    /// Summary format used with --stats
    #[arg(long, value_enum, default_value_t = StatsFormat::Plain)]
    pub stats_format: StatsFormat,
}

/// Output format for the run summary
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsFormat {
    Plain,
    Json,
}

impl Args {
    /// Raw settings for the configuration validator
    pub fn to_settings(&self) -> Settings {
        Settings {
            source_path: self.source.clone(),
            dest_path: self.output.clone(),
            file_filter: self.filter.clone(),
            source_charset: self.charset.clone(),
            continue_on_error: self.continue_on_error,
        }
    }
}

/// Print the run summary in the requested format
pub fn print_summary(summary: &BatchSummary, format: StatsFormat) -> anyhow::Result<()> {
    match format {
        StatsFormat::Plain => {
            println!("\nConversion summary:");
            println!("Files resolved: {}", summary.files_resolved);
            println!("Files converted: {}", summary.files_converted);
            if summary.files_skipped > 0 {
                println!("Files skipped: {}", summary.files_skipped);
            }
            if summary.files_failed > 0 {
                println!("Files failed: {}", summary.files_failed);
            }
            if summary.files_lossy > 0 {
                println!("Files with replacement characters: {}", summary.files_lossy);
            }
            println!("Bytes read: {}", summary.bytes_read);
            println!("Bytes written: {}", summary.bytes_written);
            println!("Elapsed: {}ms", summary.elapsed_ms);
        }
        StatsFormat::Json => {
            println!("{}", summary.to_json()?);
        }
    }
    Ok(())
}
