//! # Presentation Adapter
//!
//! Turns "the cursor now points at entry E" into text and hands it to an
//! [`AnnouncementSink`]. This is the only place engine output leaves the core.
//!
//! ```text
//! NavigationEngine ──► Presenter ──► EntryReader  ("HP: 30/30")
//!                          │
//!                          ├──► GroupNames        ("Status. HP: 30/30")
//!                          │
//!                          └──► AnnouncementSink  (speech, transcript, log)
//! ```
//!
//! Reader failures never escape: they are logged and replaced by the
//! configured `read_error` message.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use log::{info, warn};

use super::entry::{Entry, GroupTag};

pub const DEFAULT_FALLBACK_GROUP: &str = "Other";
pub const DEFAULT_UNAVAILABLE_MESSAGE: &str = "Navigation not available";
pub const DEFAULT_READ_ERROR_MESSAGE: &str = "Error reading stat";
pub const DEFAULT_ENTRY_FORMAT: &str = "{label}: {value}";

// ============================================================================
// Sinks
// ============================================================================

/// Receives one formatted string per successful read.
///
/// `interrupt` asks the sink to cancel anything still pending before
/// speaking this text. Traversal reads interrupt; passive reads don't.
pub trait AnnouncementSink {
    fn announce(&mut self, text: &str, interrupt: bool);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub interrupt: bool,
    /// Set when a later interrupting announcement cut this one off.
    pub superseded: bool,
}

/// Bounded in-memory history of announcements, oldest first.
#[derive(Debug)]
pub struct Transcript {
    items: VecDeque<Announcement>,
    capacity: usize,
}

impl Transcript {
    pub const DEFAULT_CAPACITY: usize = 50;

    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&Announcement> {
        self.items.back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Announcement> {
        self.items.iter()
    }

    /// Announcement texts, oldest first.
    pub fn texts(&self) -> Vec<&str> {
        self.items.iter().map(|a| a.text.as_str()).collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl AnnouncementSink for Transcript {
    fn announce(&mut self, text: &str, interrupt: bool) {
        if interrupt {
            for item in self.items.iter_mut() {
                item.superseded = true;
            }
        }
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(Announcement {
            text: text.to_string(),
            interrupt,
            superseded: false,
        });
    }
}

/// Writes every announcement to the log. Handy when running headless.
pub struct LogSink;

impl AnnouncementSink for LogSink {
    fn announce(&mut self, text: &str, interrupt: bool) {
        info!("announce (interrupt={}): {}", interrupt, text);
    }
}

// ============================================================================
// Entry Readers
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// Both label and value are empty; there is nothing to say.
    Blank,
    /// The entry format template is malformed.
    Template(String),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Blank => write!(f, "entry has no label or value"),
            ReadError::Template(msg) => write!(f, "bad entry format: {msg}"),
        }
    }
}

impl std::error::Error for ReadError {}

/// Formats a single entry (without any group prefix).
pub trait EntryReader<G> {
    fn read(&self, entry: &Entry<G>) -> Result<String, ReadError>;
}

fn ensure_not_blank<G>(entry: &Entry<G>) -> Result<(), ReadError>
where
    G: GroupTag,
{
    if entry.label().trim().is_empty() && entry.value().trim().is_empty() {
        return Err(ReadError::Blank);
    }
    Ok(())
}

/// `"{label}: {value}"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LabelValueReader;

impl<G: GroupTag> EntryReader<G> for LabelValueReader {
    fn read(&self, entry: &Entry<G>) -> Result<String, ReadError> {
        ensure_not_blank(entry)?;
        Ok(format!("{}: {}", entry.label(), entry.value()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Label,
    Value,
}

/// Formats entries with a user template such as `"{label} is {value}"`.
#[derive(Debug, Clone)]
pub struct TemplateReader {
    segments: Vec<Segment>,
}

impl TemplateReader {
    /// Parses `template`. Only `{label}` and `{value}` are recognized;
    /// anything else inside braces, or an unclosed brace, is rejected.
    pub fn parse(template: &str) -> Result<Self, ReadError> {
        let mut segments = Vec::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| ReadError::Template(format!("unclosed '{{' in {template:?}")))?;
            match &after[..close] {
                "label" => segments.push(Segment::Label),
                "value" => segments.push(Segment::Value),
                other => {
                    return Err(ReadError::Template(format!("unknown placeholder {{{other}}}")));
                }
            }
            rest = &after[close + 1..];
        }
        if rest.contains('}') {
            return Err(ReadError::Template(format!("stray '}}' in {template:?}")));
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }
}

impl<G: GroupTag> EntryReader<G> for TemplateReader {
    fn read(&self, entry: &Entry<G>) -> Result<String, ReadError> {
        ensure_not_blank(entry)?;
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Label => out.push_str(entry.label()),
                Segment::Value => out.push_str(entry.value()),
            }
        }
        Ok(out)
    }
}

// ============================================================================
// Group Names & Messages
// ============================================================================

/// Group tag → human-readable name, with a fallback for unmapped tags.
#[derive(Debug, Clone)]
pub struct GroupNames<G> {
    names: HashMap<G, String>,
    fallback: String,
}

impl<G: GroupTag> GroupNames<G> {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            names: HashMap::new(),
            fallback: fallback.into(),
        }
    }

    pub fn with(mut self, tag: G, name: impl Into<String>) -> Self {
        self.insert(tag, name);
        self
    }

    pub fn insert(&mut self, tag: G, name: impl Into<String>) {
        self.names.insert(tag, name.into());
    }

    pub fn display(&self, tag: &G) -> &str {
        self.names
            .get(tag)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl<G: GroupTag> Default for GroupNames<G> {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_GROUP)
    }
}

/// Fixed phrases the presenter speaks on its own behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub unavailable: String,
    pub read_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            unavailable: DEFAULT_UNAVAILABLE_MESSAGE.to_string(),
            read_error: DEFAULT_READ_ERROR_MESSAGE.to_string(),
        }
    }
}

// ============================================================================
// Presenter
// ============================================================================

/// Bundles everything needed to turn an entry into an announcement.
pub struct Presenter<G> {
    pub names: GroupNames<G>,
    pub messages: Messages,
    reader: Box<dyn EntryReader<G>>,
}

impl<G: GroupTag> Presenter<G> {
    pub fn new(names: GroupNames<G>) -> Self {
        Self {
            names,
            messages: Messages::default(),
            reader: Box::new(LabelValueReader),
        }
    }

    pub fn with_reader(mut self, reader: impl EntryReader<G> + 'static) -> Self {
        self.reader = Box::new(reader);
        self
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// `"{label}: {value}"` (or whatever the reader produces).
    pub fn plain(&self, entry: &Entry<G>) -> Result<String, ReadError> {
        self.reader.read(entry)
    }

    /// `"{group}. {label}: {value}"`.
    pub fn grouped(&self, entry: &Entry<G>) -> Result<String, ReadError> {
        let body = self.reader.read(entry)?;
        Ok(format!("{}. {}", self.names.display(entry.group()), body))
    }

    /// Sends a formatted read to `sink`, substituting the read-error message
    /// when formatting failed.
    pub fn deliver(
        &self,
        read: Result<String, ReadError>,
        sink: &mut dyn AnnouncementSink,
        interrupt: bool,
    ) {
        match read {
            Ok(text) => sink.announce(&text, interrupt),
            Err(e) => {
                warn!("Failed to read entry: {}", e);
                sink.announce(&self.messages.read_error, interrupt);
            }
        }
    }

    pub fn unavailable(&self, sink: &mut dyn AnnouncementSink, interrupt: bool) {
        sink.announce(&self.messages.unavailable, interrupt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_value_reader() {
        let entry = Entry::new("HP", "30/30", 0u8);
        assert_eq!(LabelValueReader.read(&entry).unwrap(), "HP: 30/30");
    }

    #[test]
    fn test_blank_entry_is_a_read_error() {
        let entry = Entry::new("  ", "", 0u8);
        assert_eq!(LabelValueReader.read(&entry), Err(ReadError::Blank));
    }

    #[test]
    fn test_template_reader_formats_placeholders() {
        let reader = TemplateReader::parse("{label} is {value}.").unwrap();
        let entry = Entry::new("Level", "12", 0u8);
        assert_eq!(reader.read(&entry).unwrap(), "Level is 12.");
    }

    #[test]
    fn test_template_reader_matches_default_format() {
        let reader = TemplateReader::parse(DEFAULT_ENTRY_FORMAT).unwrap();
        let entry = Entry::new("Gil", "100", 0u8);
        assert_eq!(reader.read(&entry).unwrap(), "Gil: 100");
    }

    #[test]
    fn test_template_rejects_unknown_placeholder() {
        let err = TemplateReader::parse("{label}: {amount}").unwrap_err();
        assert!(matches!(err, ReadError::Template(msg) if msg.contains("amount")));
    }

    #[test]
    fn test_template_rejects_unbalanced_braces() {
        assert!(TemplateReader::parse("{label: {value}").is_err());
        assert!(TemplateReader::parse("{label}: value}").is_err());
        assert!(TemplateReader::parse("{label").is_err());
    }

    #[test]
    fn test_group_names_fallback() {
        let names = GroupNames::default().with('a', "Status");
        assert_eq!(names.display(&'a'), "Status");
        assert_eq!(names.display(&'z'), "Other");
        assert_eq!(names.fallback(), DEFAULT_FALLBACK_GROUP);
    }

    #[test]
    fn test_presenter_through_log_sink() {
        let presenter = Presenter::new(GroupNames::new("Misc"));
        let entry = Entry::new("Gil", "100", 'g');
        // LogSink has no observable state; this checks the trait object path
        presenter.deliver(presenter.grouped(&entry), &mut LogSink, true);
        assert_eq!(presenter.grouped(&entry).unwrap(), "Misc. Gil: 100");
    }

    #[test]
    fn test_presenter_grouped_read() {
        let presenter = Presenter::new(GroupNames::default().with('s', "Status"));
        let entry = Entry::new("Level", "12", 's');
        assert_eq!(presenter.grouped(&entry).unwrap(), "Status. Level: 12");
        assert_eq!(presenter.plain(&entry).unwrap(), "Level: 12");
    }

    #[test]
    fn test_presenter_delivers_read_error_message() {
        let presenter = Presenter::<char>::new(GroupNames::default());
        let mut transcript = Transcript::default();
        presenter.deliver(Err(ReadError::Blank), &mut transcript, true);
        assert_eq!(transcript.texts(), vec![DEFAULT_READ_ERROR_MESSAGE]);
    }

    #[test]
    fn test_transcript_interrupt_supersedes_earlier() {
        let mut transcript = Transcript::default();
        transcript.announce("one", false);
        transcript.announce("two", false);
        assert!(transcript.iter().all(|a| !a.superseded));

        transcript.announce("three", true);
        let flags: Vec<bool> = transcript.iter().map(|a| a.superseded).collect();
        assert_eq!(flags, vec![true, true, false]);
        assert!(transcript.last().unwrap().interrupt);
    }

    #[test]
    fn test_transcript_drops_oldest_at_capacity() {
        let mut transcript = Transcript::new(2);
        transcript.announce("a", false);
        transcript.announce("b", false);
        transcript.announce("c", false);
        assert_eq!(transcript.texts(), vec!["b", "c"]);
    }
}
