//! The payload a [`Node`](crate::Node) carries alongside its kind.

use std::borrow::Cow;

/// A node carries exactly one of: nothing, literal text, or a numeric index.
///
/// The active variant is fixed at construction time and never changes —
/// callers that need to change a payload replace the whole node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Payload {
    None,
    Text(Box<str>),
    Index(u64),
}

impl Payload {
    pub fn text(s: impl Into<Box<str>>) -> Self {
        Payload::Text(s.into())
    }

    /// Builds a text payload from raw bytes, lossily repairing invalid UTF-8.
    ///
    /// Mangled identifiers are specified as UTF-8 byte sequences;
    /// this is the one place a byte slice crosses into a `Payload`.
    pub fn text_from_bytes(bytes: &[u8]) -> Self {
        match String::from_utf8(bytes.to_vec()) {
            Ok(s) => Payload::Text(s.into_boxed_str()),
            Err(e) => Payload::Text(String::from_utf8_lossy(e.as_bytes()).into_owned().into()),
        }
    }

    pub const fn index(value: u64) -> Self {
        Payload::Index(value)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_index(&self) -> Option<u64> {
        match self {
            Payload::Index(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Payload::None)
    }

    /// Cheap, infallible textual view for diagnostics/debug dumps.
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            Payload::None => Cow::Borrowed(""),
            Payload::Text(s) => Cow::Borrowed(s),
            Payload::Index(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl Default for Payload {
    fn default() -> Self {
        Payload::None
    }
}
