//! Fenced-block extraction from free-form model output.

use std::sync::LazyLock;

use regex::Regex;

/// Labels of the fenced blocks read from model responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fence {
    /// `json`, in semantic extraction responses.
    Json,
    /// `sql`, in synthesis responses.
    Sql,
}

static JSON_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json\r?\n(.*?)\r?\n```").expect("json fence pattern")
});

static SQL_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```sql\r?\n(.*?)\r?\n```").expect("sql fence pattern"));

impl Fence {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Sql => "sql",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Self::Json => &JSON_FENCE_RE,
            Self::Sql => &SQL_FENCE_RE,
        }
    }
}

/// Return the body of the first block fenced with `fence`, if any.
///
/// A block opens with three backticks immediately followed by the label and a
/// newline, and closes with a newline followed by three backticks. The body
/// is returned without the surrounding newlines.
pub fn extract_fenced(text: &str, fence: Fence) -> Option<&str> {
    fence
        .pattern()
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// The block fenced with `fence`, or the whole text when there is none.
pub fn fenced_or_whole(text: &str, fence: Fence) -> &str {
    extract_fenced(text, fence).unwrap_or(text)
}
