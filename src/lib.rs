//! # facts - keyword-to-fact lookup
//!
//! Loads a directory of small text files, each mapping a set of keywords to a
//! list of facts, and answers two kinds of queries with a randomly chosen
//! fact from the matching list.
//!
//! ## Fact files
//!
//! ```text
//! keywords: Go, Golang
//! Go was announced by Google in 2009.
//! Go's mascot is a gopher.
//! ```
//!
//! The first non-blank line holds comma-separated keywords (the `keywords:`
//! label is optional); every later non-blank line is a fact.
//!
//! ## Modules
//!
//! - [`index`] - Directory loading, file parsing and the [`Library`]
//! - [`query`] - Exact lookup, whole-word search and random selection
//! - [`output`] - Terminal and JSON rendering used by the CLI
//! - [`utils`] - Config file handling
//!
//! ## Quick Start
//!
//! ```no_run
//! use facts::Library;
//!
//! let library = Library::load("./facts").unwrap();
//!
//! // Exact keyword, any case
//! let fact = library.get_fact("golang").unwrap();
//! println!("{}", fact);
//!
//! // Any registered keyword appearing as a whole word
//! let fact = library.find_fact("I started learning Go today").unwrap();
//! println!("{}", fact);
//! ```
//!
//! For reproducible picks, drive queries through a [`QueryEngine`] with a
//! seeded RNG.

pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;

pub use error::{FactsError, FactsErrorKind, FactsResult};
pub use index::{FactList, KeywordSet, Library, LibraryConfig, LoadStats};
pub use query::QueryEngine;
