//! Deck legality comparison.

use std::fmt;

use crate::names::LegalNames;

/// A deck entry that is not in the legal card pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The card name as written in the decklist.
    pub card_name: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}-- is not a legal card in heritage.", self.card_name)
    }
}

/// Return a violation for each deck entry missing from `legal`, in deck
/// order. Matching ignores case and nothing else.
pub fn check_entries<S: AsRef<str>>(legal: &LegalNames, entries: &[S]) -> Vec<Violation> {
    entries
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !legal.contains(name))
        .map(|name| Violation {
            card_name: name.to_string(),
        })
        .collect()
}
