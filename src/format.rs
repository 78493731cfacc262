//! Output format selection.
//!
//! These types don't depend on the CLI, so library users can pick a writer
//! by name or by file extension.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "html-output")]
//! # fn example() -> whatsarchive::Result<()> {
//! use whatsarchive::core::models::{Conversation, OutputConfig};
//! use whatsarchive::format::{OutputFormat, to_format_string};
//!
//! let conversation = Conversation::new("chat.txt", vec![]);
//! let html = to_format_string(&conversation, OutputFormat::Html, &OutputConfig::new())?;
//! assert!(html.contains("WhatsApp archive chat.txt"));
//!
//! let format = OutputFormat::from_path("archive.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::models::{Conversation, OutputConfig};
use crate::error::ArchiveError;

/// Output format for a converted transcript.
///
/// Parses from any of its names, case-insensitively:
///
/// ```rust
/// use whatsarchive::format::OutputFormat;
///
/// let format: OutputFormat = "NDJSON".parse().unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Standalone browsable HTML page (default)
    #[default]
    Html,

    /// JSON object with the name and a message array
    Json,

    /// JSON Lines, one message object per line
    Jsonl,

    /// Semicolon-delimited CSV
    Csv,
}

struct FormatInfo {
    format: OutputFormat,
    label: &'static str,
    /// First entry is the canonical extension.
    names: &'static [&'static str],
    mime: &'static str,
    feature: &'static str,
}

static FORMATS: [FormatInfo; 4] = [
    FormatInfo {
        format: OutputFormat::Html,
        label: "HTML",
        names: &["html", "htm"],
        mime: "text/html",
        feature: "html-output",
    },
    FormatInfo {
        format: OutputFormat::Json,
        label: "JSON",
        names: &["json"],
        mime: "application/json",
        feature: "json-output",
    },
    FormatInfo {
        format: OutputFormat::Jsonl,
        label: "JSONL",
        names: &["jsonl", "ndjson"],
        mime: "application/x-ndjson",
        feature: "json-output",
    },
    FormatInfo {
        format: OutputFormat::Csv,
        label: "CSV",
        names: &["csv"],
        mime: "text/csv",
        feature: "csv-output",
    },
];

const ALL: [OutputFormat; 4] = [
    OutputFormat::Html,
    OutputFormat::Json,
    OutputFormat::Jsonl,
    OutputFormat::Csv,
];

const ALL_NAMES: [&str; 6] = ["html", "htm", "json", "jsonl", "ndjson", "csv"];

impl OutputFormat {
    fn info(self) -> &'static FormatInfo {
        match self {
            OutputFormat::Html => &FORMATS[0],
            OutputFormat::Json => &FORMATS[1],
            OutputFormat::Jsonl => &FORMATS[2],
            OutputFormat::Csv => &FORMATS[3],
        }
    }

    fn lookup(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        FORMATS
            .iter()
            .find(|info| info.names.contains(&name.as_str()))
            .map(|info| info.format)
    }

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        self.info().names[0]
    }

    /// Every name and alias accepted by `parse` and `from_path`.
    pub fn all_names() -> &'static [&'static str] {
        &ALL_NAMES
    }

    pub fn all() -> &'static [OutputFormat] {
        &ALL
    }

    pub fn mime_type(&self) -> &'static str {
        self.info().mime
    }

    /// Name of the cargo feature that provides this writer.
    pub fn feature(&self) -> &'static str {
        self.info().feature
    }

    /// Picks the format from the extension of `path`.
    ///
    /// ```rust
    /// use whatsarchive::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("archive.htm").unwrap(), OutputFormat::Html);
    /// assert!(OutputFormat::from_path("archive.txt").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ArchiveError> {
        let ext = std::path::Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        Self::lookup(ext).ok_or_else(|| {
            ArchiveError::invalid_format(
                "output",
                format!(
                    "no format for extension '.{ext}', expected one of: {}",
                    ALL_NAMES.join(", ")
                ),
            )
        })
    }

    fn unavailable(self) -> ArchiveError {
        ArchiveError::invalid_format(
            "output",
            format!("{self} output needs the '{}' feature", self.feature()),
        )
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.info().label)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ArchiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| {
            ArchiveError::invalid_format(
                "output",
                format!("unknown format '{s}', expected one of: {}", ALL_NAMES.join(", ")),
            )
        })
    }
}

/// Writes `conversation` to `path` with the writer for `format`.
///
/// Fails with [`ArchiveError::InvalidFormat`] when that writer's feature is
/// compiled out, or with an IO error when the file cannot be written.
#[allow(unused_variables)]
pub fn write_to_format(
    conversation: &Conversation,
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ArchiveError> {
    match format {
        #[cfg(feature = "html-output")]
        OutputFormat::Html => crate::core::output::write_html(conversation, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(conversation, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(conversation, path, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(conversation, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(format.unavailable()),
    }
}

/// Same as [`write_to_format`], rendering into a string.
#[allow(unused_variables)]
pub fn to_format_string(
    conversation: &Conversation,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ArchiveError> {
    match format {
        #[cfg(feature = "html-output")]
        OutputFormat::Html => Ok(crate::core::output::to_html(conversation, config)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(conversation, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(conversation, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(conversation, config),
        #[allow(unreachable_patterns)]
        _ => Err(format.unavailable()),
    }
}
