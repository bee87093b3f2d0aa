#![no_main]

use facts::LibraryConfig;
use facts::index::parse_fact_reader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Whole-file parsing never panics and respects the fact cap
    let config = LibraryConfig::default();
    if let Ok((_, facts)) = parse_fact_reader(data, &config) {
        assert!(facts.len() <= config.max_facts_per_file);
    }
});
