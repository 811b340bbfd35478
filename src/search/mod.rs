//! Line-level keyword search
//!
//! Splits text on `\n` and keeps every line that contains the keyword,
//! compared case-insensitively. Lines are reported with their 1-based
//! position and their exact original text.
//!
//! Only `\n` delimits lines. A `\r` left over from CRLF endings stays in
//! the line content.

use serde::{Deserialize, Serialize};

/// Represents a single matching line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMatch {
    /// 1-based line number
    pub line: usize,
    /// Original line text, untouched
    pub content: String,
}

impl LineMatch {
    pub fn new(line: usize, content: impl Into<String>) -> Self {
        Self {
            line,
            content: content.into(),
        }
    }
}

/// Serialized search outcome: the match count plus the ordered matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub matches: usize,
    pub results: Vec<LineMatch>,
}

impl SearchReport {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl From<Vec<LineMatch>> for SearchReport {
    fn from(results: Vec<LineMatch>) -> Self {
        Self {
            matches: results.len(),
            results,
        }
    }
}

/// Return every line of `text` that contains `keyword`, ignoring case.
///
/// Empty `text` has no lines. An empty keyword matches every line.
///
/// # Examples
/// ```
/// use file_search::search::{search, LineMatch};
///
/// let hits = search("foo\nbar\nFOO", "foo");
/// assert_eq!(hits, vec![LineMatch::new(1, "foo"), LineMatch::new(3, "FOO")]);
/// ```
pub fn search(text: &str, keyword: &str) -> Vec<LineMatch> {
    if text.is_empty() {
        return Vec::new();
    }

    let needle = keyword.to_lowercase();

    text.split('\n')
        .enumerate()
        .filter(|(_, line)| line.to_lowercase().contains(&needle))
        .map(|(idx, line)| LineMatch::new(idx + 1, line))
        .collect()
}

/// Same as [`search`], packaged as a [`SearchReport`].
pub fn search_report(text: &str, keyword: &str) -> SearchReport {
    SearchReport::from(search(text, keyword))
}
