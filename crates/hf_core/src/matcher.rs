//! Whole-word, case-insensitive keyword matching against story titles.
//!
//! An occurrence of a keyword counts only when it is flanked on both sides by
//! a string boundary or a non-alphanumeric character. Hyphens, underscores and
//! punctuation are therefore separators (`"AI-powered"` contains `AI`), but the
//! keyword itself is compared literally, so the phrase `Machine Learning` does
//! not match `machine-learning`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A non-empty, case-insensitive search term. May contain spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Keyword {
    raw: String,
    folded: String,
}

impl Keyword {
    pub fn new(keyword: impl AsRef<str>) -> Result<Self> {
        let raw = keyword.as_ref().trim();
        if raw.is_empty() {
            return Err(Error::Config("keyword must not be empty".to_string()));
        }
        Ok(Self {
            raw: raw.to_string(),
            folded: raw.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercased form used for comparison and deduplication.
    pub fn folded(&self) -> &str {
        &self.folded
    }

    pub fn matches(&self, title: &str) -> bool {
        contains_bounded(&title.to_lowercase(), &self.folded)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Keyword {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Keyword {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> Self {
        keyword.raw
    }
}

/// Returns true when `keyword` occurs in `title` as a whole word or phrase.
///
/// Empty input on either side never matches.
pub fn matches(title: &str, keyword: &str) -> bool {
    let keyword = keyword.trim();
    if title.is_empty() || keyword.is_empty() {
        return false;
    }
    contains_bounded(&title.to_lowercase(), &keyword.to_lowercase())
}

fn contains_bounded(haystack: &str, needle: &str) -> bool {
    if haystack.is_empty() || needle.is_empty() {
        return false;
    }

    let mut start = 0;
    while let Some(offset) = haystack[start..].find(needle) {
        let at = start + offset;
        let end = at + needle.len();

        let before_ok = haystack[..at]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());

        if before_ok && after_ok {
            return true;
        }

        // advance one char so overlapping occurrences are still tried
        start = at + haystack[at..].chars().next().map_or(1, char::len_utf8);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_never_match() {
        assert!(!matches("", "AI"));
        assert!(!matches("New AI tool", ""));
        assert!(!matches("", ""));
        assert!(!matches("New AI tool", "   "));
    }

    #[test]
    fn test_whole_word() {
        assert!(matches("New AI tool launched", "AI"));
        assert!(matches("AI regulation", "AI"));
        assert!(!matches("Delta Airlines announces new routes", "AI"));
        assert!(!matches("How to maintain a codebase", "AI"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(matches("new ai tool", "AI"));
        assert!(matches("NEW AI TOOL", "ai"));
    }

    #[test]
    fn test_phrase() {
        assert!(matches("Best Machine Learning course", "Machine Learning"));
        assert!(matches("machine learning at scale", "Machine Learning"));
        assert!(!matches("Machine Learnings", "Machine Learning"));
    }

    #[test]
    fn test_hyphen_is_a_boundary_but_not_a_space() {
        assert!(matches("GPT-5 released", "GPT"));
        assert!(matches("AI-powered search", "AI"));
        assert!(!matches("machine-learning pipeline", "Machine Learning"));
    }

    #[test]
    fn test_punctuation_boundaries() {
        assert!(matches("Is this AI?", "AI"));
        assert!(matches("(AI) in 2025", "AI"));
        assert!(matches("Ask HN: LLM tooling", "LLM"));
        assert!(matches("OpenAI's \"GPT\" models", "GPT"));
    }

    #[test]
    fn test_later_occurrence_is_found() {
        // first hit is inside a word, second is standalone
        assert!(matches("Airbus adopts AI", "AI"));
        assert!(matches("aaa aa", "aa"));
    }

    #[test]
    fn test_unicode_boundaries() {
        assert!(!matches("naïve approach", "ve"));
        assert!(matches("Über AI", "über"));
    }

    #[test]
    fn test_keyword_type() {
        assert!(Keyword::new("  ").is_err());
        let keyword: Keyword = " LLM ".parse().unwrap();
        assert_eq!(keyword.as_str(), "LLM");
        assert_eq!(keyword.folded(), "llm");
        assert!(keyword.matches("New LLM benchmark"));
        assert!(!keyword.matches(""));
    }
}
