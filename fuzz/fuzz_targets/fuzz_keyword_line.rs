#![no_main]

use facts::LibraryConfig;
use facts::index::parse_keyword_line;
use facts::query::KeywordMatcher;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    // Arbitrary keyword lines must parse within limits and compile to a matcher
    let (line, text) = data;
    let config = LibraryConfig::default();
    let keywords = parse_keyword_line(line, &config);
    assert!(keywords.len() <= config.max_keywords_per_file);
    assert!(keywords.iter().all(|k| !k.is_empty()));
    if let Ok(matcher) = KeywordMatcher::new(&keywords) {
        let _ = matcher.is_match(text);
    }
});
