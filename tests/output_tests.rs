//! Output writer tests over parsed transcripts.

use std::fs;
use tempfile::tempdir;
use whatsarchive::format::{OutputFormat, to_format_string, write_to_format};
use whatsarchive::prelude::*;

fn conversation() -> Conversation {
    let text = concat!(
        "\u{200E}Alice created group \"Crew & Co\"\r\n",
        "12/08/2021, 14:00 - Alice: Hello <all>\r\n",
        "12/08/2021, 14:01 - Alice: line one\nline two\r\n",
        "12/08/2021, 14:02 - Dana: שלום\r\n",
    );
    ArchiveParser::new().parse_str(text, "chat.txt").unwrap()
}

#[test]
fn test_json_document() {
    let json = to_json(&conversation(), &OutputConfig::all()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["name"], "Crew & Co");
    let messages = value["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0]["author"], "Alice");
    assert_eq!(messages[0]["body"], "Hello &lt;all&gt;");
    assert_eq!(messages[0]["timestamp"], "2021-08-12T14:00:00Z");
    assert_eq!(messages[0]["color"], "hsl(288, 76%, 36%)");
    assert_eq!(messages[1]["body"], "line one<br>line two");
    assert_eq!(messages[2]["direction"], "rtl");
}

#[test]
fn test_json_minimal_fields() {
    let json = to_json(&conversation(), &OutputConfig::new()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first = value["messages"][0].as_object().unwrap();

    let mut keys: Vec<&str> = first.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["author", "body"]);
}

#[test]
fn test_jsonl_lines() {
    let jsonl = to_jsonl(&conversation(), &OutputConfig::new().with_direction()).unwrap();
    let lines: Vec<&str> = jsonl.lines().collect();

    assert_eq!(lines.len(), 3);
    for line in &lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value["direction"].is_string());
    }
}

#[test]
fn test_csv_round_trip_through_reader() {
    let csv_text = to_csv(&conversation(), &OutputConfig::new().with_timestamps()).unwrap();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["Timestamp", "Author", "Body"]);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "2021-08-12 14:00:00");
    assert_eq!(&rows[1][2], "line one<br>line two");
}

#[test]
fn test_html_page() {
    let html = to_html(&conversation(), &OutputConfig::new().with_timestamps());

    assert!(html.contains("<title>WhatsApp archive Crew &amp; Co</title>"));
    assert!(html.contains("<h1>Crew &amp; Co</h1>"));
    assert_eq!(html.matches("<span class=\"username\"").count(), 2);
    assert!(html.contains("<li dir=\"ltr\" title=\"2021-08-12 14:01:00\">line one<br>line two</li>"));
    assert!(html.contains("<li dir=\"rtl\" title=\"2021-08-12 14:02:00\">שלום</li>"));
    assert!(!html.contains("<all>"));
}

#[test]
fn test_write_to_format_every_format() {
    let dir = tempdir().unwrap();
    let conv = conversation();

    for format in OutputFormat::all() {
        let path = dir.path().join(format!("archive.{}", format.extension()));
        let path = path.to_str().unwrap();
        write_to_format(&conv, path, *format, &OutputConfig::new()).unwrap();

        let written = fs::read_to_string(path).unwrap();
        let rendered = to_format_string(&conv, *format, &OutputConfig::new()).unwrap();
        assert_eq!(written, rendered, "{format}");
        assert!(written.contains("Alice"), "{format}");
    }
}

#[test]
fn test_write_to_unwritable_path() {
    let err = write_to_format(
        &conversation(),
        "/nonexistent/dir/archive.html",
        OutputFormat::Html,
        &OutputConfig::new(),
    )
    .unwrap_err();
    assert!(err.is_io());
}
