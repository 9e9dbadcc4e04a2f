//! The set of card names legal in the format.
//!
//! Deck tools disagree on how to name multi-faced cards: some write the full
//! `Front // Back` name, others only the front face. Both forms go into the
//! set so either spelling matches.

use std::collections::HashSet;

use crate::models::CardRecord;

/// Lowercased legal card names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalNames {
    names: HashSet<String>,
}

impl LegalNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from card records, adding the full name and the front
    /// face name of each.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CardRecord>,
    {
        let mut names = Self::new();
        for record in records {
            names.insert_card(record);
        }
        names
    }

    pub fn insert_card(&mut self, record: &CardRecord) {
        self.names.insert(record.name.to_lowercase());
        self.names.insert(record.front_face_name().to_lowercase());
    }

    /// Case-insensitive membership test. No other normalization is applied.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for LegalNames {
    /// Collect already-known names; each is lowercased but not split.
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().map(|s| s.into().to_lowercase()).collect(),
        }
    }
}
