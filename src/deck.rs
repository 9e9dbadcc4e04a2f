//! Magic Online style decklist reader.
//!
//! Each line is `<quantity> <card name>`. The first blank line ends the
//! mainboard; the sideboard after it is not read.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Read a decklist file and return its mainboard card names.
pub fn load_decklist<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    log::debug!("Reading decklist {}", path.display());
    let content = fs::read_to_string(path)?;
    Ok(parse_decklist(&content))
}

/// Parse decklist text into card names, one per mainboard line.
///
/// The first space-separated token of each line is dropped as the quantity
/// and the remaining tokens are rejoined with single spaces. The quantity is
/// not checked to be numeric.
pub fn parse_decklist(content: &str) -> Vec<String> {
    let mut cards = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            break;
        }
        let name = line.trim_end().split(' ').skip(1).collect::<Vec<_>>().join(" ");
        cards.push(name);
    }
    cards
}
