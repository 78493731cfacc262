//! Record grammar and classification.
//!
//! A record is tested against two independent groups of matchers:
//!
//! 1. **Group-name matchers** look for system messages that reveal the
//!    conversation's name. They never decide whether a record is a message.
//! 2. **Message matchers** are tried in priority order and the first match
//!    wins:
//!    - sender form: `[12/08/2021, 14:03:00] Alice: Hello`
//!    - first-line form (no author): `12/08/2021, 14:03 - Messages and calls are...`
//!
//! A record that matches nothing in either group is
//! [`ClassifiedRecord::Unrecognized`].

use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::message::NOBODY;
use crate::parsing::timestamp;

/// Optional left-to-right or right-to-left mark.
pub(crate) const DIRECTIONAL_MARK: &str = r"[\x{200E}\x{200F}]?";

/// Date token: digits separated by `/`, `-` or `.`.
pub(crate) const DATE: &str = r"(?P<date>\d{1,4}[/.\-]\d{1,2}[/.\-]\d{1,4})";

/// Time token: `H:MM`, `HH:MM:SS`, `10.30`, with an optional AM/PM suffix.
const TIME: &str = r"(?P<time>\d{1,2}[:.]\d{2}(?:[:.]\d{2})?(?:[ \x{202F}]?[AaPp]\.?[Mm]\.?)?)";

/// Separator between the timestamp and the rest of the record.
const SEPARATOR: &str = r"(?: - |: | )";

fn datetime_prefix() -> String {
    [r"^", DIRECTIONAL_MARK, r"\[?", DATE, r",? ", TIME, r"\]?", SEPARATOR].concat()
}

/// Outcome of classifying one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedRecord<'a> {
    /// A message with an author field.
    SenderMessage {
        timestamp: DateTime<Utc>,
        author: &'a str,
        body: &'a str,
    },
    /// A message without an author field, such as the export's first line.
    AnonymousMessage {
        timestamp: DateTime<Utc>,
        body: &'a str,
    },
    /// A system message naming the conversation.
    GroupNameChange { new_name: &'a str },
    /// Nothing matched.
    Unrecognized { raw: &'a str },
}

impl<'a> ClassifiedRecord<'a> {
    /// Returns `true` for the two message variants.
    pub fn is_message(&self) -> bool {
        matches!(
            self,
            ClassifiedRecord::SenderMessage { .. } | ClassifiedRecord::AnonymousMessage { .. }
        )
    }

    /// Returns the author, or [`NOBODY`] for anonymous messages.
    pub fn author(&self) -> Option<&'a str> {
        match self {
            ClassifiedRecord::SenderMessage { author, .. } => Some(*author),
            ClassifiedRecord::AnonymousMessage { .. } => Some(NOBODY),
            _ => None,
        }
    }
}

/// A named rule that attempts to classify a record.
pub trait RecordMatcher: Send + Sync {
    /// Identifier used in logs.
    fn name(&self) -> &'static str;

    /// Returns `Ok(None)` when the rule does not apply to `record`.
    ///
    /// Fails only when the rule matched but captured a timestamp that is not
    /// a real instant.
    fn classify<'a>(&self, record: &'a str) -> Result<Option<ClassifiedRecord<'a>>>;
}

/// `date time sep author: body`
pub struct SenderForm {
    regex: Regex,
}

impl SenderForm {
    pub fn new() -> Result<Self> {
        let pattern = [
            "(?s)",
            &datetime_prefix(),
            r"(?P<author>[^:]+): ",
            DIRECTIONAL_MARK,
            r"(?P<body>.*)$",
        ]
        .concat();
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }
}

impl RecordMatcher for SenderForm {
    fn name(&self) -> &'static str {
        "sender"
    }

    fn classify<'a>(&self, record: &'a str) -> Result<Option<ClassifiedRecord<'a>>> {
        let Some(caps) = self.regex.captures(record) else {
            return Ok(None);
        };
        let date = caps.name("date").map_or("", |m| m.as_str());
        let time = caps.name("time").map_or("", |m| m.as_str());
        let author = caps.name("author").map_or("", |m| m.as_str());
        let body = caps.name("body").map_or("", |m| m.as_str());

        Ok(Some(ClassifiedRecord::SenderMessage {
            timestamp: timestamp::normalize(date, time)?,
            author: author.trim_matches(['\u{200E}', '\u{200F}']),
            body,
        }))
    }
}

/// `date time sep body`, the author-less first line of an export.
pub struct FirstLineForm {
    regex: Regex,
}

impl FirstLineForm {
    pub fn new() -> Result<Self> {
        let pattern = ["(?s)", &datetime_prefix(), r"(?P<body>.*)$"].concat();
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }
}

impl RecordMatcher for FirstLineForm {
    fn name(&self) -> &'static str {
        "first-line"
    }

    fn classify<'a>(&self, record: &'a str) -> Result<Option<ClassifiedRecord<'a>>> {
        let Some(caps) = self.regex.captures(record) else {
            return Ok(None);
        };
        let date = caps.name("date").map_or("", |m| m.as_str());
        let time = caps.name("time").map_or("", |m| m.as_str());
        let body = caps.name("body").map_or("", |m| m.as_str());

        Ok(Some(ClassifiedRecord::AnonymousMessage {
            timestamp: timestamp::normalize(date, time)?,
            body,
        }))
    }
}

/// `... created group "Name"` anywhere in the record.
pub struct GroupCreated {
    regex: Regex,
}

impl GroupCreated {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(r#"created group ["“](?P<name>[^"”]*)["”]"#)?,
        })
    }
}

impl RecordMatcher for GroupCreated {
    fn name(&self) -> &'static str {
        "group-created"
    }

    fn classify<'a>(&self, record: &'a str) -> Result<Option<ClassifiedRecord<'a>>> {
        Ok(self
            .regex
            .captures(record)
            .and_then(|caps| caps.name("name"))
            .map(|m| ClassifiedRecord::GroupNameChange {
                new_name: m.as_str(),
            }))
    }
}

/// `date time sep Name: ... Messages to this group are now secured ...`
pub struct GroupSecured {
    regex: Regex,
}

impl GroupSecured {
    pub fn new() -> Result<Self> {
        let pattern = [
            "(?s)",
            &datetime_prefix(),
            r"(?P<name>[^:]+): .*Messages to this group are now secured",
        ]
        .concat();
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }
}

impl RecordMatcher for GroupSecured {
    fn name(&self) -> &'static str {
        "group-secured"
    }

    fn classify<'a>(&self, record: &'a str) -> Result<Option<ClassifiedRecord<'a>>> {
        Ok(self
            .regex
            .captures(record)
            .and_then(|caps| caps.name("name"))
            .map(|m| ClassifiedRecord::GroupNameChange {
                new_name: m.as_str().trim_matches(['\u{200E}', '\u{200F}']),
            }))
    }
}

/// Applies the ordered grammar to records.
///
/// # Example
///
/// ```rust
/// use whatsarchive::parsing::grammar::LineClassifier;
///
/// let classifier = LineClassifier::new()?;
/// let outcomes = classifier.classify("12/08/2021, 14:03 - Alice: Hello")?;
///
/// assert_eq!(outcomes.len(), 1);
/// assert_eq!(outcomes[0].author(), Some("Alice"));
/// # Ok::<(), whatsarchive::ArchiveError>(())
/// ```
pub struct LineClassifier {
    group_matchers: Vec<Box<dyn RecordMatcher>>,
    message_matchers: Vec<Box<dyn RecordMatcher>>,
}

impl LineClassifier {
    /// Builds the standard grammar.
    pub fn new() -> Result<Self> {
        Ok(Self {
            group_matchers: vec![Box::new(GroupCreated::new()?), Box::new(GroupSecured::new()?)],
            message_matchers: vec![Box::new(SenderForm::new()?), Box::new(FirstLineForm::new()?)],
        })
    }

    /// Names of the message matchers, in priority order.
    pub fn message_matcher_names(&self) -> Vec<&'static str> {
        self.message_matchers.iter().map(|m| m.name()).collect()
    }

    /// Returns every group-name change the record announces, in matcher order.
    pub fn group_names<'a>(&self, record: &'a str) -> Result<Vec<ClassifiedRecord<'a>>> {
        let mut changes = Vec::new();
        for matcher in &self.group_matchers {
            if let Some(change) = matcher.classify(record)? {
                debug!(matcher = matcher.name(), "group name matched");
                changes.push(change);
            }
        }
        Ok(changes)
    }

    /// Returns the first message matcher's outcome, if any applies.
    pub fn message<'a>(&self, record: &'a str) -> Result<Option<ClassifiedRecord<'a>>> {
        for matcher in &self.message_matchers {
            if let Some(message) = matcher.classify(record)? {
                debug!(matcher = matcher.name(), "message matched");
                return Ok(Some(message));
            }
        }
        Ok(None)
    }

    /// Classifies a record: group-name changes first, then at most one
    /// message. Yields a single `Unrecognized` when nothing applies.
    pub fn classify<'a>(&self, record: &'a str) -> Result<Vec<ClassifiedRecord<'a>>> {
        let mut outcomes = self.group_names(record)?;
        if let Some(message) = self.message(record)? {
            outcomes.push(message);
        }
        if outcomes.is_empty() {
            outcomes.push(ClassifiedRecord::Unrecognized { raw: record });
        }
        Ok(outcomes)
    }
}
