use serde::{Deserialize, Serialize};

use super::card::CardRecord;

// ---------------------------------------------------------------------------
// SearchPage — One page of a paginated card search
// ---------------------------------------------------------------------------

/// A search response. Every field but `next_page` must be present; an error
/// object or an empty body fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    pub data: Vec<CardRecord>,
    pub has_more: bool,
    pub next_page: Option<String>,
    pub total_cards: u64,
}
