pub mod build;
pub mod loader;
pub mod parser;
pub mod types;

pub use build::{Library, LoadStats};
pub use loader::{FileListing, list_fact_files};
pub use parser::{parse_fact_file, parse_fact_reader, parse_keyword_line};
pub use types::*;
