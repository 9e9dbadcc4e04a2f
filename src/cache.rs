//! Local card cache: a single JSON file holding every fetched card record.
//!
//! The file is considered fresh while its modification time is no more than
//! a configured number of whole days old. A stale cache is replaced
//! wholesale, never patched.

use crate::error::Result;
use crate::models::CardRecord;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Reads, writes and ages the card cache file.
pub struct CacheManager {
    /// Location of the cache file.
    pub path: PathBuf,
    /// Maximum age, in whole days, before the cache is refetched.
    pub max_age_days: u64,
}

impl CacheManager {
    pub fn new<P: AsRef<Path>>(path: P, max_age_days: u64) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            max_age_days,
        }
    }

    /// Age of the cache file at `now`, in whole days (rounded down).
    ///
    /// Returns `None` if the file does not exist. A modification time later
    /// than `now` counts as zero days old.
    pub fn age_days_at(&self, now: SystemTime) -> Option<u64> {
        let modified = fs::metadata(&self.path).ok()?.modified().ok()?;
        let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
        Some(age.as_secs() / SECONDS_PER_DAY)
    }

    /// Check freshness against an explicit clock reading.
    pub fn is_fresh_at(&self, now: SystemTime) -> bool {
        match self.age_days_at(now) {
            Some(days) => days <= self.max_age_days,
            None => false,
        }
    }

    /// Check freshness against the system clock.
    pub fn is_fresh(&self) -> bool {
        self.is_fresh_at(SystemTime::now())
    }

    /// Serialize `cards` as one JSON array, overwriting any existing file.
    ///
    /// Creates the parent directory if it does not exist. The write is not
    /// atomic: an interrupted write leaves a truncated file, which the next
    /// [`read`](Self::read) reports as a JSON error.
    pub fn write(&self, cards: &[CardRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        log::debug!("Writing {} cards to {}", cards.len(), self.path.display());
        let mut writer = BufWriter::new(fs::File::create(&self.path)?);
        serde_json::to_writer(&mut writer, cards)?;
        writer.flush()?;
        Ok(())
    }

    /// Load the cached card records in the order they were written.
    pub fn read(&self) -> Result<Vec<CardRecord>> {
        log::debug!("Reading card cache {}", self.path.display());
        let reader = BufReader::new(fs::File::open(&self.path)?);
        let cards = serde_json::from_reader(reader)?;
        Ok(cards)
    }
}
