//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::Message;
use crate::core::models::{Conversation, OutputConfig};
use crate::error::Result;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: depend on `OutputConfig`, in this order:
///   `Timestamp`?, `Author`, `Color`?, `Direction`?, `Body`
/// - Encoding: UTF-8
pub fn write_csv(conversation: &Conversation, output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(file, conversation, config)
}

/// Converts messages to a CSV string.
pub fn to_csv(conversation: &Conversation, config: &OutputConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_records(&mut buf, conversation, config)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_records<W: Write>(out: W, conversation: &Conversation, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(build_header(config))?;
    for msg in &conversation.messages {
        writer.write_record(build_record(msg, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_timestamps {
        header.push("Timestamp");
    }
    header.push("Author");
    if config.include_colors {
        header.push("Color");
    }
    if config.include_direction {
        header.push("Direction");
    }
    header.push("Body");

    header
}

/// Build CSV record for a single message.
fn build_record(msg: &Message, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::new();

    if config.include_timestamps {
        record.push(msg.timestamp().format(TIMESTAMP_FORMAT).to_string());
    }
    record.push(msg.author().to_string());
    if config.include_colors {
        record.push(msg.color().to_string());
    }
    if config.include_direction {
        record.push(msg.direction().to_string());
    }
    record.push(msg.body().to_string());

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Direction;
    use chrono::{TimeZone, Utc};
    use tempfile::NamedTempFile;

    fn conversation() -> Conversation {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap();
        Conversation::new(
            "chat.txt",
            vec![
                Message::new(ts, "Alice", "hsl(288, 76%, 36%)", "Hello; world", Direction::Ltr),
                Message::new(ts, "Dana", "hsl(10, 76%, 36%)", "שלום", Direction::Rtl),
            ],
        )
    }

    #[test]
    fn test_csv_basic() {
        let csv = to_csv(&conversation(), &OutputConfig::new()).unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("Author;Body"));
        assert_eq!(lines.next(), Some("Alice;\"Hello; world\""));
        assert_eq!(lines.next(), Some("Dana;שלום"));
    }

    #[test]
    fn test_csv_all_columns() {
        let csv = to_csv(&conversation(), &OutputConfig::all()).unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("Timestamp;Author;Color;Direction;Body"));
        assert_eq!(
            lines.nth(1),
            Some("2024-06-15 12:30:00;Dana;hsl(10, 76%, 36%);rtl;שלום")
        );
    }

    #[test]
    fn test_write_csv_reads_back() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        write_csv(&conversation(), path, &OutputConfig::new()).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(path)
            .unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "Hello; world");
    }
}
