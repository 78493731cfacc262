//! JSON output writer.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use crate::Message;
use crate::core::models::{Conversation, OutputConfig};
use crate::error::Result;

pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Minimal message structure for JSON output.
/// Only includes fields enabled in `OutputConfig`.
#[derive(Serialize)]
pub(crate) struct JsonMessage<'a> {
    author: &'a str,
    body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<&'static str>,
}

impl<'a> JsonMessage<'a> {
    pub(crate) fn from_message(msg: &'a Message, config: &OutputConfig) -> Self {
        Self {
            author: msg.author(),
            body: msg.body(),
            timestamp: config
                .include_timestamps
                .then(|| msg.timestamp().format(TIMESTAMP_FORMAT).to_string()),
            color: config.include_colors.then(|| msg.color()),
            direction: config.include_direction.then(|| msg.direction().as_str()),
        }
    }
}

#[derive(Serialize)]
struct JsonConversation<'a> {
    name: &'a str,
    messages: Vec<JsonMessage<'a>>,
}

/// Writes the conversation to a JSON file.
///
/// # Format
/// ```json
/// {
///   "name": "Hiking Crew",
///   "messages": [
///     {"author": "Alice", "body": "Hello"},
///     {"author": "Bob", "body": "Hi"}
///   ]
/// }
/// ```
pub fn write_json(conversation: &Conversation, output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(conversation, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the conversation to a pretty-printed JSON string.
pub fn to_json(conversation: &Conversation, config: &OutputConfig) -> Result<String> {
    let doc = JsonConversation {
        name: &conversation.name,
        messages: conversation
            .messages
            .iter()
            .map(|m| JsonMessage::from_message(m, config))
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&doc)?)
}
