//! Fact file parsing
//!
//! A fact file is line oriented. The first non-blank line lists the keywords,
//! optionally prefixed by a `keywords:` label; every following non-blank line
//! is one fact.
//!
//! ```text
//! keywords: Go, Golang
//! Go was announced in 2009.
//!
//! Go has no exceptions.
//! ```

use crate::error::{FactsError, FactsResult};
use crate::index::types::{FactList, KeywordSet, LibraryConfig};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse `dir/file_name` into its keyword set and facts.
///
/// An empty file yields two empty collections; the caller decides whether
/// that is usable.
pub fn parse_fact_file(
    dir: &Path,
    file_name: &OsStr,
    config: &LibraryConfig,
) -> FactsResult<(KeywordSet, FactList)> {
    let path = dir.join(file_name);
    let file = File::open(&path).map_err(|source| FactsError::FileOpen {
        path: path.clone(),
        source,
    })?;

    parse_fact_reader(BufReader::new(file), config)
        .map_err(|source| FactsError::FileRead { path, source })
}

/// Parse fact file contents from any buffered reader.
///
/// Lines are split on `\n` with a trailing `\r` removed. Invalid UTF-8 is
/// replaced rather than rejected, so only real I/O failures are errors.
pub fn parse_fact_reader<R: BufRead>(
    mut reader: R,
    config: &LibraryConfig,
) -> std::io::Result<(KeywordSet, FactList)> {
    let mut keywords: Option<KeywordSet> = None;
    let mut facts = FactList::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }

        let line = String::from_utf8_lossy(&buf);
        if is_blank(&line) {
            continue;
        }

        if keywords.is_none() {
            keywords = Some(parse_keyword_line(&line, config));
        } else if facts.len() < config.max_facts_per_file {
            facts.push(line.into_owned());
        }
    }

    Ok((keywords.unwrap_or_else(|| KeywordSet::new(Vec::new())), facts))
}

/// Split a keyword line into a keyword set.
///
/// The first occurrence of the label is removed, the rest is split on commas
/// and each token trimmed of spaces. Empty tokens are dropped and at most
/// `max_keywords_per_file` keywords are kept.
pub fn parse_keyword_line(line: &str, config: &LibraryConfig) -> KeywordSet {
    let line = if config.keyword_label.is_empty() {
        line.to_string()
    } else {
        line.replacen(&config.keyword_label, "", 1)
    };

    let keywords = line
        .split(',')
        .map(|token| token.trim_matches(' '))
        .filter(|token| !token.is_empty())
        .take(config.max_keywords_per_file)
        .map(str::to_string)
        .collect();

    KeywordSet::new(keywords)
}

/// Only space characters count as blank, matching the keyword trim
fn is_blank(line: &str) -> bool {
    line.trim_matches(' ').is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FactsErrorKind;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn parse(content: &str) -> (KeywordSet, FactList) {
        parse_fact_reader(Cursor::new(content), &LibraryConfig::default()).unwrap()
    }

    #[test]
    fn test_parse_basic_file() {
        let (keywords, facts) = parse("keywords: Go, Golang\nfact1\nfact2\n");
        assert_eq!(keywords.keywords(), ["Go", "Golang"]);
        assert_eq!(facts, vec!["fact1", "fact2"]);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let (keywords, facts) = parse("\n   \nkeywords:rust\n\nfact1\n  \nfact2\n\n");
        assert_eq!(keywords.keywords(), ["rust"]);
        assert_eq!(facts, vec!["fact1", "fact2"]);
    }

    #[test]
    fn test_label_is_optional() {
        let (keywords, facts) = parse("go, golang\nfact");
        assert_eq!(keywords.keywords(), ["go", "golang"]);
        assert_eq!(facts, vec!["fact"]);
    }

    #[test]
    fn test_only_first_label_removed() {
        let config = LibraryConfig::default();
        let keywords = parse_keyword_line("keywords: go, keywords:", &config);
        assert_eq!(keywords.keywords(), ["go", "keywords:"]);
    }

    #[test]
    fn test_facts_keep_surrounding_whitespace() {
        let (_, facts) = parse("keywords: go\n  indented fact\r\n");
        assert_eq!(facts, vec!["  indented fact"]);
    }

    #[test]
    fn test_fact_cap() {
        let mut content = String::from("keywords: go\n");
        for i in 0..150 {
            content.push_str(&format!("fact {}\n", i));
        }
        let (_, facts) = parse(&content);
        assert_eq!(facts.len(), 100);
        assert_eq!(facts.last().map(String::as_str), Some("fact 99"));
    }

    #[test]
    fn test_keyword_cap_and_empty_tokens() {
        let config = LibraryConfig::default();
        let line = "keywords: a1,,a2,a3,a4,a5,a6,a7,a8,a9,a10,a11,";
        let keywords = parse_keyword_line(line, &config);
        assert_eq!(keywords.len(), 10);
        assert_eq!(keywords.keywords()[1], "a2");
        assert_eq!(keywords.keywords()[9], "a10");
    }

    #[test]
    fn test_empty_file() {
        let (keywords, facts) = parse("");
        assert!(keywords.is_empty());
        assert!(facts.is_empty());
    }

    #[test]
    fn test_keywords_without_facts() {
        let (keywords, facts) = parse("keywords: lonely\n\n");
        assert_eq!(keywords.keywords(), ["lonely"]);
        assert!(facts.is_empty());
    }

    #[test]
    fn test_parse_fact_file_missing() {
        let dir = TempDir::new().unwrap();
        let err = parse_fact_file(dir.path(), OsStr::new("absent.txt"), &LibraryConfig::default())
            .unwrap_err();
        assert_eq!(err.kind(), FactsErrorKind::FileOpen);
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn test_parse_fact_file_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("cafe.txt"),
            b"keywords: cafe\nCaf\xe9 au lait\ngood fact\n",
        )
        .unwrap();

        let (keywords, facts) =
            parse_fact_file(dir.path(), OsStr::new("cafe.txt"), &LibraryConfig::default()).unwrap();
        assert_eq!(keywords.keywords(), ["cafe"]);
        assert_eq!(facts, vec!["Caf\u{FFFD} au lait", "good fact"]);
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let (keywords, facts) = parse("keywords: go\r\nfirst\r\n\r\nlast\r");
        assert_eq!(keywords.keywords(), ["go"]);
        assert_eq!(facts, vec!["first", "last"]);
    }
}
