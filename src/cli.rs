//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - output format options
//! - [`init_tracing`] - stderr logging for the binary

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::config::ArchiveConfig;
use crate::core::models::OutputConfig;

/// Default output path. Its extension follows `--format` when kept.
pub const DEFAULT_OUTPUT: &str = "archive.html";

/// Produce a browsable history of a WhatsApp conversation export.
#[derive(Parser, Debug, Clone)]
#[command(name = "whatsarchive")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    whatsarchive \"WhatsApp Chat with Hiking Crew.txt\"
    whatsarchive chat.txt -o hiking.html -t
    whatsarchive chat.txt --format jsonl --colors --direction
    whatsarchive chat.txt --skip-invalid-dates --lf-fallback -v")]
pub struct Args {
    /// Path to the exported .txt transcript
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    pub format: OutputFormat,

    /// Include timestamps in output
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Include author colors in data formats
    #[arg(long)]
    pub colors: bool,

    /// Include text direction in data formats
    #[arg(long)]
    pub direction: bool,

    /// Skip records whose date or time cannot be parsed instead of failing
    #[arg(long)]
    pub skip_invalid_dates: bool,

    /// Re-split on line feeds when the file has no CR LF record boundaries
    #[arg(long)]
    pub lf_fallback: bool,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Pipeline configuration from the flags.
    pub fn archive_config(&self) -> ArchiveConfig {
        ArchiveConfig::new()
            .with_skip_invalid_timestamps(self.skip_invalid_dates)
            .with_line_feed_fallback(self.lf_fallback)
    }

    /// Writer configuration from the flags.
    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.timestamps {
            config = config.with_timestamps();
        }
        if self.colors {
            config = config.with_colors();
        }
        if self.direction {
            config = config.with_direction();
        }
        config
    }

    /// Default log directive for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Installs a stderr subscriber. `RUST_LOG` takes precedence over
/// `default_level`. Does nothing if a subscriber is already set.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Output format options.
///
/// # Example
///
/// ```rust
/// use whatsarchive::cli::OutputFormat;
///
/// let format = OutputFormat::Jsonl;
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Browsable HTML page (default)
    #[default]
    Html,

    /// JSON object with the name and messages
    Json,

    /// JSON Lines - one message per line
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        crate::format::OutputFormat::from(*self).extension()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Html => crate::format::OutputFormat::Html,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("whatsarchive").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["chat.txt"]);
        assert_eq!(args.input, "chat.txt");
        assert_eq!(args.output, DEFAULT_OUTPUT);
        assert_eq!(args.format, OutputFormat::Html);
        assert_eq!(args.archive_config(), ArchiveConfig::default());
        assert_eq!(args.output_config(), OutputConfig::default());
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn test_flags() {
        let args = parse(&[
            "chat.txt",
            "-f",
            "csv",
            "-t",
            "--colors",
            "--skip-invalid-dates",
            "--lf-fallback",
            "-vv",
        ]);
        assert_eq!(args.format, OutputFormat::Csv);
        assert!(args.output_config().include_timestamps);
        assert!(args.output_config().include_colors);
        assert!(!args.output_config().include_direction);
        assert_eq!(args.archive_config(), ArchiveConfig::lenient());
        assert_eq!(args.log_level(), "debug");
    }

    #[test]
    fn test_missing_input_is_error() {
        assert!(Args::try_parse_from(["whatsarchive"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        let lib: crate::format::OutputFormat = OutputFormat::Jsonl.into();
        assert_eq!(lib, crate::format::OutputFormat::Jsonl);
        assert_eq!(OutputFormat::Html.to_string(), "HTML");
        assert_eq!(OutputFormat::Csv.extension(), "csv");
    }
}
