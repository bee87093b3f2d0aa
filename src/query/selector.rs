//! Random fact selection

use rand::Rng;
use rand::seq::SliceRandom;

/// Pick one fact uniformly at random from the whole list.
///
/// Every index, including the last, can be returned. `None` for an empty or
/// absent list.
pub fn select_fact<'a, R: Rng + ?Sized>(facts: Option<&'a [String]>, rng: &mut R) -> Option<&'a str> {
    facts?.choose(rng).map(String::as_str)
}
