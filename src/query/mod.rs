pub mod executor;
pub mod matcher;
pub mod selector;

pub use executor::QueryEngine;
pub use matcher::KeywordMatcher;
pub use selector::select_fact;
