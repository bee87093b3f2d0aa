//! Whole-word keyword matching for free-text search

use crate::index::types::KeywordSet;
use regex::{Regex, RegexBuilder};

/// Precompiled matcher for one keyword set.
///
/// Matches when any keyword occurs in the text as a whole word, ignoring
/// case: each side of the keyword is either a non-word character or the end
/// of the text. Keywords are matched literally, so `c++` and `#rust` work.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    regex: Option<Regex>,
}

impl KeywordMatcher {
    pub fn new(keywords: &KeywordSet) -> Result<Self, regex::Error> {
        let alternatives: Vec<String> = keywords
            .iter()
            .filter(|k| !k.is_empty())
            .map(|k| regex::escape(k))
            .collect();

        if alternatives.is_empty() {
            return Ok(Self { regex: None });
        }

        // Keywords may start or end with punctuation, so no `\b`
        let pattern = format!(r"(?:^|\W)({})(?:\W|$)", alternatives.join("|"));
        let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;

        Ok(Self { regex: Some(regex) })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|r| r.is_match(text))
    }

    /// Byte range of the first matching keyword
    pub fn find(&self, text: &str) -> Option<(usize, usize)> {
        self.regex
            .as_ref()
            .and_then(|r| r.captures(text))
            .and_then(|caps| caps.get(1))
            .map(|m| (m.start(), m.end()))
    }
}
