use std::path::PathBuf;
use std::time::Duration;

pub const SEARCH_URL: &str = "https://api.scryfall.com/cards/search";

/// Scryfall search query for the commander heritage pool. Not URL encoded;
/// the HTTP client encodes it as the `q` parameter.
pub const HERITAGE_QUERY: &str = "(st:core OR st:expansion) -is:digital format:commander";

pub const CACHE_FILE_NAME: &str = "commander_heritage.json";
pub const MAX_CACHE_AGE_DAYS: u64 = 7;
pub const PAGE_DELAY: Duration = Duration::from_millis(200);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub fn default_user_agent() -> String {
    format!("heritage-check/{}", env!("CARGO_PKG_VERSION"))
}

pub fn default_cache_path() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("heritage-check").join(CACHE_FILE_NAME)
    } else {
        PathBuf::from(".").join(CACHE_FILE_NAME)
    }
}

/// Everything the checker needs to know about where cards come from and
/// where they are kept.
#[derive(Debug, Clone)]
pub struct Config {
    pub search_url: String,
    pub query: String,
    pub cache_path: PathBuf,
    /// Maximum cache age in whole days.
    pub max_age_days: u64,
    pub page_delay: Duration,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: SEARCH_URL.to_string(),
            query: HERITAGE_QUERY.to_string(),
            cache_path: default_cache_path(),
            max_age_days: MAX_CACHE_AGE_DAYS,
            page_delay: PAGE_DELAY,
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}
