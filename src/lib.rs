//! Commander heritage deck checker.
//!
//! Downloads the commander heritage card pool (core and expansion sets, no
//! digital-only cards, legal in commander) from the Scryfall search API,
//! caches it locally as JSON, and reports which cards of a Magic Online
//! style decklist fall outside it.
//!
//! # Quick start
//!
//! ```no_run
//! use heritage_check::HeritageChecker;
//!
//! let mut checker = HeritageChecker::builder().build();
//!
//! for violation in checker.run("deck.txt").unwrap() {
//!     println!("{}", violation);
//! }
//! ```

pub mod cache;
pub mod checker;
pub mod config;
pub mod deck;
pub mod error;
pub mod fetch;
pub mod models;
pub mod names;

pub use cache::CacheManager;
pub use checker::{check_entries, Violation};
pub use config::Config;
pub use error::{HeritageError, Result};
pub use fetch::{fetch_all, HttpPageSource, PageSource};
pub use models::{CardRecord, SearchPage};
pub use names::LegalNames;

use std::fmt;
use std::path::Path;
use std::time::Duration;

// ---------------------------------------------------------------------------
// HeritageCheckerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`HeritageChecker`].
///
/// Use [`HeritageChecker::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](HeritageCheckerBuilder::build) to create the
/// checker.
#[derive(Debug, Clone, Default)]
pub struct HeritageCheckerBuilder {
    config: Config,
}

impl HeritageCheckerBuilder {
    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the cache file location.
    ///
    /// Defaults to `commander_heritage.json` under the platform cache
    /// directory (e.g. `~/.cache/heritage-check` on Linux).
    pub fn cache_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.cache_path = path.as_ref().to_path_buf();
        self
    }

    /// Set the maximum cache age in whole days. Defaults to 7.
    pub fn max_age_days(mut self, days: u64) -> Self {
        self.config.max_age_days = days;
        self
    }

    /// Set the card search endpoint.
    pub fn search_url(mut self, url: impl Into<String>) -> Self {
        self.config.search_url = url.into();
        self
    }

    /// Set the search query sent as the `q` parameter.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.config.query = query.into();
        self
    }

    /// Set the pause between page requests. Defaults to 200 ms.
    pub fn page_delay(mut self, delay: Duration) -> Self {
        self.config.page_delay = delay;
        self
    }

    /// Set the HTTP request timeout. Defaults to 60 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header sent to the API.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Build a checker that fetches over HTTP.
    pub fn build(self) -> HeritageChecker<HttpPageSource> {
        let source = HttpPageSource::new(self.config.timeout, self.config.user_agent.clone());
        self.build_with_source(source)
    }

    /// Build a checker that reads search pages from `source`.
    pub fn build_with_source<S: PageSource>(self, source: S) -> HeritageChecker<S> {
        let cache = CacheManager::new(&self.config.cache_path, self.config.max_age_days);
        HeritageChecker {
            config: self.config,
            cache,
            source,
            wait: Box::new(std::thread::sleep),
        }
    }
}

// ---------------------------------------------------------------------------
// HeritageChecker
// ---------------------------------------------------------------------------

/// Checks decklists against the cached commander heritage card pool.
///
/// Created via [`HeritageChecker::builder()`].
pub struct HeritageChecker<S: PageSource = HttpPageSource> {
    config: Config,
    cache: CacheManager,
    source: S,
    wait: Box<dyn FnMut(Duration)>,
}

impl HeritageChecker<HttpPageSource> {
    /// Create a new builder for configuring the checker.
    pub fn builder() -> HeritageCheckerBuilder {
        HeritageCheckerBuilder::default()
    }
}

impl<S: PageSource> HeritageChecker<S> {
    /// Replace the function used to pause between page requests.
    ///
    /// Defaults to [`std::thread::sleep`].
    pub fn with_wait<W: FnMut(Duration) + 'static>(mut self, wait: W) -> Self {
        self.wait = Box::new(wait);
        self
    }

    /// Return the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Return the cache manager.
    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }

    /// Make sure the cache file is fresh, refetching the whole card pool if
    /// it is stale or missing.
    ///
    /// Returns `true` if a fetch happened.
    pub fn ensure_cache(&mut self) -> Result<bool> {
        if self.cache.is_fresh() {
            log::info!("Existing local card database is up to date.");
            return Ok(false);
        }
        log::info!("Refreshing local card database - will take a while.");
        let cards = fetch_all(
            &mut self.source,
            &self.config.search_url,
            &self.config.query,
            self.config.page_delay,
            &mut self.wait,
        )?;
        self.cache.write(&cards)?;
        Ok(true)
    }

    /// Load the cache and build the legal name set from it.
    pub fn legal_names(&self) -> Result<LegalNames> {
        let cards = self.cache.read()?;
        let names = LegalNames::from_records(&cards);
        log::debug!("{} cards give {} legal names", cards.len(), names.len());
        Ok(names)
    }

    /// Check a decklist file, refreshing the cache first if needed.
    ///
    /// Returns one [`Violation`] per mainboard entry that is not in the
    /// heritage pool, in deck order.
    pub fn run<P: AsRef<Path>>(&mut self, deck_path: P) -> Result<Vec<Violation>> {
        self.ensure_cache()?;
        let legal = self.legal_names()?;
        let entries = deck::load_decklist(deck_path)?;
        Ok(check_entries(&legal, &entries))
    }

    /// Consume the checker and return its page source.
    pub fn into_source(self) -> S {
        self.source
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl<S: PageSource> fmt::Display for HeritageChecker<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HeritageChecker(cache_path={}, max_age_days={}, search_url={})",
            self.cache.path.display(),
            self.cache.max_age_days,
            self.config.search_url
        )
    }
}
