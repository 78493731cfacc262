//! JSON Lines (JSONL) output writer.
//!
//! One message object per line. The conversation name is not part of the
//! stream.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::json_writer::JsonMessage;
use crate::core::models::{Conversation, OutputConfig};
use crate::error::Result;

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"author":"Alice","body":"Hello"}
/// {"author":"Bob","body":"Hi"}
/// ```
pub fn write_jsonl(conversation: &Conversation, output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, conversation, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string, one object per line.
pub fn to_jsonl(conversation: &Conversation, config: &OutputConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_lines(&mut buf, conversation, config)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_lines<W: Write>(writer: &mut W, conversation: &Conversation, config: &OutputConfig) -> Result<()> {
    for msg in &conversation.messages {
        let line = serde_json::to_string(&JsonMessage::from_message(msg, config))?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
