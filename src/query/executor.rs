use crate::error::{FactsError, FactsResult};
use crate::index::build::Library;
use crate::index::types::KeywordSet;
use crate::query::selector::select_fact;
use rand::Rng;
use rand::rngs::ThreadRng;

/// Query engine over a loaded library.
///
/// Owns its random source so callers can inject a seeded RNG; the library
/// itself is only borrowed.
pub struct QueryEngine<'a, R: Rng = ThreadRng> {
    library: &'a Library,
    rng: R,
}

impl<'a> QueryEngine<'a, ThreadRng> {
    pub fn new(library: &'a Library) -> Self {
        Self::with_rng(library, rand::thread_rng())
    }
}

impl<'a, R: Rng> QueryEngine<'a, R> {
    /// Create an engine drawing facts from `rng`
    pub fn with_rng(library: &'a Library, rng: R) -> Self {
        Self { library, rng }
    }

    pub fn library(&self) -> &'a Library {
        self.library
    }

    /// Random fact for an exact keyword, ignoring case
    pub fn get_fact(&mut self, keyword: &str) -> FactsResult<&'a str> {
        let min_len = self.library.config().min_keyword_len;
        if keyword.chars().count() < min_len {
            return Err(FactsError::InvalidKeyword {
                keyword: keyword.to_string(),
                min_len,
            });
        }

        let keywords = self
            .library
            .match_keyword(keyword)
            .ok_or(FactsError::FactNotFound)?;
        self.pick(keywords)
    }

    /// Random fact for the first keyword set with a keyword in `text`
    pub fn find_fact(&mut self, text: &str) -> FactsResult<&'a str> {
        if text.is_empty() {
            return Err(FactsError::EmptyInput);
        }

        let keywords = self
            .library
            .match_text(text)
            .ok_or(FactsError::FactNotFound)?;
        self.pick(keywords)
    }

    fn pick(&mut self, keywords: &KeywordSet) -> FactsResult<&'a str> {
        select_fact(self.library.facts_for(keywords), &mut self.rng).ok_or(FactsError::FactNotFound)
    }
}

impl Library {
    /// Random fact for an exact keyword, ignoring case.
    ///
    /// Fails with `InvalidKeyword` for keywords shorter than the configured
    /// minimum and `FactNotFound` when no keyword set contains it.
    pub fn get_fact(&self, keyword: &str) -> FactsResult<&str> {
        QueryEngine::new(self).get_fact(keyword)
    }

    /// Random fact for free text.
    ///
    /// The first keyword set (in load order) with any keyword appearing in
    /// `text` as a whole word wins.
    pub fn find_fact(&self, text: &str) -> FactsResult<&str> {
        QueryEngine::new(self).find_fact(text)
    }
}
