//! Message body sanitization.
//!
//! Raw bodies are turned into markup that can be dropped into a page as-is.
//! The steps run in a fixed order:
//!
//! 1. HTML-escape `&`, `<` and `>`
//! 2. Turn `http://` and `https://` URLs into anchors
//! 3. Replace attachment markers with embedded media
//! 4. Replace line feeds with `<br>`
//!
//! Escaping comes first, so every later step works on escaped text and no
//! markup from the transcript survives. Step 1 leaves `"` alone, so the
//! link and filename patterns never match across a double quote. That
//! keeps captured text inside the `href` and `src` values it is placed in.

use std::borrow::Cow;

use regex::Regex;
use tracing::debug;

use crate::error::Result;

/// URL inside escaped text. Ends at whitespace or at any entity other than
/// `&amp;`, so an escaped `<` or `>` after a URL is not swallowed. Also ends
/// at `"`.
const LINK: &str = r#"https?://(?:[^\s<&"]|&amp;)+"#;

/// Attachment filename inside an escaped `<attached: ...>` marker.
const MARKER_NAME: &str = r#"(?:[^\n&"]|&amp;)+?"#;

const IMAGE_EXT: &str = r"jpe?g|png|gif|webp";
const VIDEO_EXT: &str = r"mp4|mov|3gp";
const AUDIO_EXT: &str = r"opus";

const IMAGE_TEMPLATE: &str = r#"<a href="${filename}"><img src="${filename}"></a>"#;
const VIDEO_TEMPLATE: &str = r#"<a href="${filename}"><div class="container"><video src="${filename}"></video><div class="centered">PLAY</div></div></a>"#;
const AUDIO_TEMPLATE: &str =
    r#"<a href="${filename}"><audio controls><source src="${filename}" /></audio></a>"#;

/// Media category of an attachment rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    Image,
    Video,
    Audio,
}

/// One entry of the attachment table.
#[derive(Debug, Clone)]
pub struct AttachmentRule {
    kind: AttachmentKind,
    pattern: Regex,
    template: &'static str,
}

impl AttachmentRule {
    /// iOS form: `<attached: NAME.EXT>`, seen here already escaped.
    fn bracketed(kind: AttachmentKind, extensions: &str, template: &'static str) -> Result<Self> {
        let pattern = format!(
            r"(?i)&lt;attached: (?P<filename>{MARKER_NAME}\.(?:{extensions}))&gt;"
        );
        Ok(Self {
            kind,
            pattern: Regex::new(&pattern)?,
            template,
        })
    }

    /// Android form: `NAME.EXT (file attached)`.
    fn file_attached(
        kind: AttachmentKind,
        extensions: &str,
        template: &'static str,
    ) -> Result<Self> {
        let pattern = format!(r#"(?i)(?P<filename>[^\s"]+?\.(?:{extensions})) \(file attached\)"#);
        Ok(Self {
            kind,
            pattern: Regex::new(&pattern)?,
            template,
        })
    }

    pub fn kind(&self) -> AttachmentKind {
        self.kind
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Replaces every occurrence of this rule's marker.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.template)
    }
}

/// Escapes, links and embeds message bodies.
///
/// # Example
///
/// ```rust
/// use whatsarchive::core::sanitize::ContentSanitizer;
///
/// let sanitizer = ContentSanitizer::new()?;
///
/// assert_eq!(sanitizer.sanitize("a < b"), "a &lt; b");
/// assert_eq!(
///     sanitizer.sanitize("<attached: photo.JPG>"),
///     r#"<a href="photo.JPG"><img src="photo.JPG"></a>"#,
/// );
/// # Ok::<(), whatsarchive::ArchiveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ContentSanitizer {
    link: Regex,
    attachments: Vec<AttachmentRule>,
}

impl ContentSanitizer {
    /// Builds the sanitizer with the standard attachment table.
    ///
    /// Categories are tried as image, video, then audio. Within a category
    /// the bracketed marker is tried before the `(file attached)` form.
    pub fn new() -> Result<Self> {
        use AttachmentKind::{Audio, Image, Video};

        Ok(Self {
            link: Regex::new(LINK)?,
            attachments: vec![
                AttachmentRule::bracketed(Image, IMAGE_EXT, IMAGE_TEMPLATE)?,
                AttachmentRule::file_attached(Image, IMAGE_EXT, IMAGE_TEMPLATE)?,
                AttachmentRule::bracketed(Video, VIDEO_EXT, VIDEO_TEMPLATE)?,
                AttachmentRule::file_attached(Video, VIDEO_EXT, VIDEO_TEMPLATE)?,
                AttachmentRule::bracketed(Audio, AUDIO_EXT, AUDIO_TEMPLATE)?,
                AttachmentRule::file_attached(Audio, AUDIO_EXT, AUDIO_TEMPLATE)?,
            ],
        })
    }

    /// Attachment rules in the order they are tried.
    pub fn attachment_rules(&self) -> &[AttachmentRule] {
        &self.attachments
    }

    /// Sanitizes one raw message body.
    pub fn sanitize(&self, raw: &str) -> String {
        let escaped = html_escape::encode_text(raw);
        let linked = self.link.replace_all(&escaped, r#"<a href="${0}">${0}</a>"#);
        let embedded = self.embed_attachment(&linked);
        embedded.replace('\n', "<br>")
    }

    /// Applies the first attachment rule that matches. Later rules never
    /// run, even if they would also match.
    fn embed_attachment<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.attachments.iter().find(|rule| rule.is_match(text)) {
            Some(rule) => {
                debug!(kind = ?rule.kind(), "attachment embedded");
                rule.apply(text)
            }
            None => Cow::Borrowed(text),
        }
    }
}
