//! HTML page writer.

use std::fmt::Write as _;
use std::fs;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::core::models::{Conversation, OutputConfig};
use crate::core::processor::group_by_author;
use crate::error::Result;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const STYLE: &str = r"
.container {
  max-width: 300px;
  position: relative;
  text-align: center;
  color: white;
}
.centered {
  position: absolute;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  font-size: large;
}
video {
  width: 100%;
}
img {
  max-width: 300px;
}
body {
  font-family: sans-serif;
  font-size: 10px;
}
ol.users, ol.messages {
  list-style-type: none;
  list-style-position: inside;
  margin: 0;
  padding: 0;
}
ol.messages li {
  margin-left: 1em;
  font-size: 12px;
}
span.date {
  color: gray;
}
";

/// Writes the conversation as a standalone HTML page.
pub fn write_html(conversation: &Conversation, output_path: &str, config: &OutputConfig) -> Result<()> {
    fs::write(output_path, to_html(conversation, config))?;
    Ok(())
}

/// Renders the conversation as a standalone HTML page.
///
/// Messages are grouped into author runs. Each run shows the author in
/// their color and the run's first timestamp; each message is a list item
/// with its `dir` attribute. Bodies are already sanitized and are inserted
/// verbatim. With `include_timestamps`, each item also carries its own
/// timestamp as a tooltip.
pub fn to_html(conversation: &Conversation, config: &OutputConfig) -> String {
    let name = encode_text(&conversation.name);
    let mut out = String::with_capacity(4096 + conversation.messages.len() * 128);

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    let _ = writeln!(out, "<title>WhatsApp archive {name}</title>");
    out.push_str("<meta charset=\"utf-8\"/>\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<style>{STYLE}</style>");
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(out, "<h1>{name}</h1>");
    out.push_str("<ol class=\"users\">\n");

    for run in group_by_author(&conversation.messages) {
        out.push_str("<li>\n");
        let _ = writeln!(
            out,
            "<span class=\"username\" style=\"color: {}\">{}</span>",
            encode_double_quoted_attribute(run.color),
            encode_text(run.author)
        );
        if let Some(started) = run.started_at() {
            let _ = writeln!(out, "<span class=\"date\">{}</span>", started.format(DATE_FORMAT));
        }
        out.push_str("<ol class=\"messages\">\n");
        for msg in run.messages {
            let _ = write!(out, "<li dir=\"{}\"", msg.direction());
            if config.include_timestamps {
                let _ = write!(out, " title=\"{}\"", msg.timestamp().format(DATE_FORMAT));
            }
            let _ = writeln!(out, ">{}</li>", msg.body());
        }
        out.push_str("</ol>\n</li>\n");
    }

    out.push_str("</ol>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;
    use crate::message::Direction;
    use chrono::{TimeZone, Utc};
    use tempfile::NamedTempFile;

    fn conversation() -> Conversation {
        let ts = Utc.with_ymd_and_hms(2021, 8, 12, 14, 3, 0).unwrap();
        Conversation::new(
            "Hiking <Crew>",
            vec![
                Message::new(ts, "Alice", "hsl(288, 76%, 36%)", "Hello &lt;there&gt;", Direction::Ltr),
                Message::new(ts, "Alice", "hsl(288, 76%, 36%)", "again", Direction::Ltr),
                Message::new(ts, "Dana", "hsl(10, 76%, 36%)", "שלום", Direction::Rtl),
            ],
        )
    }

    #[test]
    fn test_title_and_heading_escaped() {
        let html = to_html(&conversation(), &OutputConfig::new());
        assert!(html.contains("<title>WhatsApp archive Hiking &lt;Crew&gt;</title>"));
        assert!(html.contains("<h1>Hiking &lt;Crew&gt;</h1>"));
    }

    #[test]
    fn test_runs_and_direction() {
        let html = to_html(&conversation(), &OutputConfig::new());
        assert_eq!(html.matches("class=\"username\"").count(), 2);
        assert!(html.contains("style=\"color: hsl(288, 76%, 36%)\">Alice</span>"));
        assert!(html.contains("<span class=\"date\">2021-08-12 14:03:00</span>"));
        assert!(html.contains("<li dir=\"ltr\">Hello &lt;there&gt;</li>"));
        assert!(html.contains("<li dir=\"rtl\">שלום</li>"));
        assert!(!html.contains("title=\""));
    }

    #[test]
    fn test_timestamp_tooltips() {
        let html = to_html(&conversation(), &OutputConfig::new().with_timestamps());
        assert!(html.contains("<li dir=\"ltr\" title=\"2021-08-12 14:03:00\">again</li>"));
    }

    #[test]
    fn test_write_html() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        write_html(&conversation(), path, &OutputConfig::new()).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("<!DOCTYPE html>"));
        assert!(content.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_empty_conversation() {
        let html = to_html(&Conversation::new("chat.txt", vec![]), &OutputConfig::new());
        assert!(html.contains("<ol class=\"users\">\n</ol>"));
    }
}
