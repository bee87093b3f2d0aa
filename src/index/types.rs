use serde::{Deserialize, Serialize};

/// Ordered, case-insensitive aliases mapped to one fact list.
///
/// Order is kept for display and for index-key derivation; matching
/// compares keywords case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<String>);

/// Facts served under one keyword set, in file order
pub type FactList = Vec<String>;

/// Key under which a keyword set's facts are stored in the fact index
pub type IndexKey = String;

impl KeywordSet {
    pub fn new(keywords: Vec<String>) -> Self {
        Self(keywords)
    }

    pub fn keywords(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Case-insensitive membership test
    pub fn contains(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.0.iter().any(|k| k.to_lowercase() == needle)
    }

    /// Derive the fact index key: lower-cased keywords joined with `_`.
    ///
    /// The key is positional: `[go, golang]` and `[golang, go]` are different
    /// entries.
    pub fn index_key(&self) -> IndexKey {
        self.0.join("_").to_lowercase()
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for KeywordSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

/// Limits applied while loading a facts directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Files at or above this size (bytes) are skipped
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// Fact lines beyond this count are dropped
    #[serde(default = "default_max_facts_per_file")]
    pub max_facts_per_file: usize,

    /// Keywords beyond this count are dropped
    #[serde(default = "default_max_keywords_per_file")]
    pub max_keywords_per_file: usize,

    /// Shortest keyword accepted by exact lookup (in characters)
    #[serde(default = "default_min_keyword_len")]
    pub min_keyword_len: usize,

    /// Field label stripped from the keyword line
    #[serde(default = "default_keyword_label")]
    pub keyword_label: String,
}

fn default_max_file_size() -> u64 {
    100_000 // ~100KB
}

fn default_max_facts_per_file() -> usize {
    100
}

fn default_max_keywords_per_file() -> usize {
    10
}

fn default_min_keyword_len() -> usize {
    2
}

fn default_keyword_label() -> String {
    "keywords:".to_string()
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            max_facts_per_file: default_max_facts_per_file(),
            max_keywords_per_file: default_max_keywords_per_file(),
            min_keyword_len: default_min_keyword_len(),
            keyword_label: default_keyword_label(),
        }
    }
}
