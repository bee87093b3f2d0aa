use crate::error::{FactsError, FactsResult};
use crate::index::loader::list_fact_files;
use crate::index::parser::parse_fact_file;
use crate::index::types::{FactList, IndexKey, KeywordSet, LibraryConfig};
use crate::query::matcher::KeywordMatcher;
use ahash::AHashMap;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Counters collected while loading a facts directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Directory entries before filtering
    pub entries: usize,
    /// Files that passed the loader's filters
    pub files_listed: usize,
    /// Files that produced a keyword set
    pub files_loaded: usize,
    /// Listed files dropped by the parser
    pub files_skipped: usize,
    /// Distinct index keys
    pub keys: usize,
}

/// Immutable collection of keyword sets and their facts.
///
/// Built once from a directory; queries only read from it, so a `Library`
/// can be shared across threads freely.
#[derive(Debug)]
pub struct Library {
    root: PathBuf,
    config: LibraryConfig,
    /// Keyword sets in load order; duplicates are kept
    keyword_sets: Vec<KeywordSet>,
    /// One matcher per entry of `keyword_sets`
    matchers: Vec<KeywordMatcher>,
    facts: AHashMap<IndexKey, FactList>,
    stats: LoadStats,
}

impl Library {
    /// Load every fact file in `dir` with the default limits
    pub fn load(dir: impl AsRef<Path>) -> FactsResult<Self> {
        Self::load_with_config(dir, LibraryConfig::default())
    }

    /// Load every fact file in `dir`.
    ///
    /// Files that fail to parse or lack keywords or facts are skipped. If a
    /// later file derives the same index key as an earlier one, its facts
    /// replace the earlier ones.
    pub fn load_with_config(dir: impl AsRef<Path>, config: LibraryConfig) -> FactsResult<Self> {
        let dir = dir.as_ref();
        let listing = list_fact_files(dir, config.max_file_size)?;

        let mut keyword_sets = Vec::new();
        let mut matchers = Vec::new();
        let mut facts: AHashMap<IndexKey, FactList> = AHashMap::new();
        let mut stats = LoadStats {
            entries: listing.total_entries,
            files_listed: listing.files.len(),
            ..LoadStats::default()
        };

        for file in &listing.files {
            let (keywords, file_facts) = match parse_fact_file(dir, file, &config) {
                Ok(parsed) => parsed,
                Err(e) => {
                    debug!(file = ?file, error = %e, "skipping unparsable file");
                    stats.files_skipped += 1;
                    continue;
                }
            };

            if keywords.is_empty() || file_facts.is_empty() {
                debug!(
                    file = ?file,
                    keywords = keywords.len(),
                    facts = file_facts.len(),
                    "skipping file without keywords or facts"
                );
                stats.files_skipped += 1;
                continue;
            }

            let matcher = match KeywordMatcher::new(&keywords) {
                Ok(m) => m,
                Err(e) => {
                    debug!(file = ?file, error = %e, "skipping file with unmatchable keywords");
                    stats.files_skipped += 1;
                    continue;
                }
            };

            let key = keywords.index_key();
            if facts.insert(key.clone(), file_facts).is_some() {
                debug!(file = ?file, key = %key, "replacing facts for existing key");
            }
            keyword_sets.push(keywords);
            matchers.push(matcher);
            stats.files_loaded += 1;
        }

        if keyword_sets.is_empty() || facts.is_empty() {
            return Err(FactsError::EmptyFacts {
                path: dir.to_path_buf(),
            });
        }

        stats.keys = facts.len();
        info!(
            path = %dir.display(),
            files = stats.files_listed,
            keyword_sets = keyword_sets.len(),
            skipped = stats.files_skipped,
            "facts library loaded"
        );

        Ok(Self {
            root: dir.to_path_buf(),
            config,
            keyword_sets,
            matchers,
            facts,
            stats,
        })
    }

    /// Directory the library was loaded from
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// Keyword sets in load order
    pub fn keyword_sets(&self) -> &[KeywordSet] {
        &self.keyword_sets
    }

    /// Number of keyword sets
    pub fn len(&self) -> usize {
        self.keyword_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyword_sets.is_empty()
    }

    /// Facts stored under a keyword set's index key
    pub fn facts_for(&self, keywords: &KeywordSet) -> Option<&[String]> {
        self.facts.get(&keywords.index_key()).map(Vec::as_slice)
    }

    /// First keyword set containing `keyword`, ignoring case
    pub fn match_keyword(&self, keyword: &str) -> Option<&KeywordSet> {
        self.keyword_sets.iter().find(|set| set.contains(keyword))
    }

    /// First keyword set with a keyword occurring in `text` as a whole word
    pub fn match_text(&self, text: &str) -> Option<&KeywordSet> {
        self.keyword_sets
            .iter()
            .zip(&self.matchers)
            .find(|(_, matcher)| matcher.is_match(text))
            .map(|(set, _)| set)
    }

    /// Like [`Library::match_text`], also returning the byte range of the
    /// matched keyword within `text`
    pub fn locate_text(&self, text: &str) -> Option<(&KeywordSet, (usize, usize))> {
        self.keyword_sets
            .iter()
            .zip(&self.matchers)
            .find_map(|(set, matcher)| matcher.find(text).map(|span| (set, span)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FactsErrorKind;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_load_collects_sets_in_file_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, "b_rust.txt", "keywords: rust, ferris\nrust fact\n");
        write(&dir, "a_go.txt", "keywords: Go, Golang\ngo fact 1\ngo fact 2\n");

        let library = Library::load(dir.path()).unwrap();
        assert_eq!(library.len(), 2);
        assert_eq!(library.keyword_sets()[0].keywords(), ["Go", "Golang"]);
        assert_eq!(library.keyword_sets()[1].keywords(), ["rust", "ferris"]);
        assert_eq!(
            library.facts_for(&library.keyword_sets()[0]),
            Some(&["go fact 1".to_string(), "go fact 2".to_string()][..])
        );
        assert_eq!(library.root(), dir.path());
    }

    #[test]
    fn test_skips_unusable_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "empty.txt", "");
        write(&dir, "no_facts.txt", "keywords: lonely\n");
        write(&dir, "label_only.txt", "keywords:\nfact without keywords\n");
        write(&dir, "good.txt", "keywords: go\nfact\n");

        let library = Library::load(dir.path()).unwrap();
        assert_eq!(library.len(), 1);

        let stats = library.stats();
        assert_eq!(stats.entries, 4);
        assert_eq!(stats.files_listed, 4);
        assert_eq!(stats.files_loaded, 1);
        assert_eq!(stats.files_skipped, 3);
        assert_eq!(stats.keys, 1);
    }

    #[test]
    fn test_invalid_utf8_content_still_loads() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("a.txt"),
            b"keywords: cafe\nCaf\xe9 au lait is milky\ngood fact\n",
        )
        .unwrap();
        write(&dir, "b.txt", "keywords: tea\nTea is a leaf\n");

        let library = Library::load(dir.path()).unwrap();
        assert_eq!(library.len(), 2);
        assert_eq!(library.stats().files_skipped, 0);

        let cafe = library.match_keyword("cafe").unwrap();
        let facts = library.facts_for(cafe).unwrap();
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[1], "good fact");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_file_name_loads() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let name = OsStr::from_bytes(b"caf\xe9.txt");
        fs::write(dir.path().join(name), "keywords: cafe\ncoffee fact\n").unwrap();

        let library = Library::load(dir.path()).unwrap();
        assert_eq!(library.stats().files_loaded, 1);
        assert!(library.match_keyword("cafe").is_some());
    }

    #[test]
    fn test_punctuated_keywords_match_text() {
        let dir = TempDir::new().unwrap();
        write(&dir, "langs.txt", "keywords: c++, #rust, .net\nfact\n");

        let library = Library::load(dir.path()).unwrap();
        for text in ["I love c++", "c++ rocks", "tagged #rust today", "using .net now"] {
            assert!(library.match_text(text).is_some(), "{:?} should match", text);
        }
        assert!(library.match_text("c++17").is_none());
    }

    #[test]
    fn test_last_write_wins_on_same_key() {
        let dir = TempDir::new().unwrap();
        write(&dir, "1.txt", "keywords: Go\nold fact\n");
        write(&dir, "2.txt", "keywords: go\nnew fact\n");

        let library = Library::load(dir.path()).unwrap();
        assert_eq!(library.len(), 2);
        assert_eq!(library.stats().keys, 1);
        assert_eq!(
            library.facts_for(&library.keyword_sets()[0]),
            Some(&["new fact".to_string()][..])
        );
    }

    #[test]
    fn test_reordered_keywords_are_distinct_entries() {
        let dir = TempDir::new().unwrap();
        write(&dir, "1.txt", "keywords: go, golang\nfirst\n");
        write(&dir, "2.txt", "keywords: golang, go\nsecond\n");

        let library = Library::load(dir.path()).unwrap();
        assert_eq!(library.stats().keys, 2);
    }

    #[test]
    fn test_no_usable_files_is_empty_facts() {
        let dir = TempDir::new().unwrap();
        write(&dir, "empty.txt", "\n\n");
        fs::create_dir(dir.path().join("sub")).unwrap();

        let err = Library::load(dir.path()).unwrap_err();
        assert_eq!(err.kind(), FactsErrorKind::EmptyFacts);
    }

    #[test]
    fn test_loader_errors_propagate() {
        let dir = TempDir::new().unwrap();
        let err = Library::load(dir.path()).unwrap_err();
        assert_eq!(err.kind(), FactsErrorKind::EmptyDirectory);

        let err = Library::load(dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), FactsErrorKind::DirectoryUnreadable);
    }

    #[test]
    fn test_custom_config_limits() {
        let dir = TempDir::new().unwrap();
        write(&dir, "go.txt", "topics: go, golang\n1\n2\n3\n");

        let config = LibraryConfig {
            max_facts_per_file: 2,
            keyword_label: "topics:".to_string(),
            ..LibraryConfig::default()
        };
        let library = Library::load_with_config(dir.path(), config).unwrap();
        let set = &library.keyword_sets()[0];
        assert_eq!(set.keywords(), ["go", "golang"]);
        assert_eq!(library.facts_for(set).map(|f| f.len()), Some(2));
    }

    #[test]
    fn test_match_helpers() {
        let dir = TempDir::new().unwrap();
        write(&dir, "go.txt", "keywords: go, golang\nfact\n");

        let library = Library::load(dir.path()).unwrap();
        assert!(library.match_keyword("GOLANG").is_some());
        assert!(library.match_keyword("gopher").is_none());
        assert!(library.match_text("I write Go daily").is_some());
        assert!(library.match_text("algorithm").is_none());

        let (set, span) = library.locate_text("I write Go daily").unwrap();
        assert_eq!(set.keywords(), ["go", "golang"]);
        assert_eq!(span, (8, 10));
        assert!(library.locate_text("algorithm").is_none());
    }

    #[test]
    fn test_library_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Library>();
    }
}
