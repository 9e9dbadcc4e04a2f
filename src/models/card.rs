use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CardRecord — One card object as returned by the Scryfall search API
// ---------------------------------------------------------------------------

/// A card as delivered by the search API.
///
/// Only `name` is interpreted; every other field is carried through untouched
/// so the cache file holds exactly what the API sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Card name. Multi-faced cards join their face names with `//`.
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CardRecord {
    /// Build a record carrying nothing but a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// The name up to the first `//`, trimmed. Single-faced cards return
    /// their whole name.
    pub fn front_face_name(&self) -> &str {
        self.name
            .split("//")
            .next()
            .unwrap_or(&self.name)
            .trim()
    }
}
