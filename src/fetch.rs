//! Paginated card search against the Scryfall API.
//!
//! The first request carries the search query; every following request goes
//! to the `next_page` URL the API handed back. Pages are fetched one at a
//! time with a fixed pause in between to stay inside the API's rate limits.

use crate::error::{HeritageError, Result};
use crate::models::{CardRecord, SearchPage};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::time::Duration;

// ---------------------------------------------------------------------------
// PageSource
// ---------------------------------------------------------------------------

/// Where search pages come from.
pub trait PageSource {
    /// Run the initial search: `url` with `query` as the `q` parameter.
    fn search(&mut self, url: &str, query: &str) -> Result<SearchPage>;

    /// Follow a `next_page` URL exactly as the API supplied it.
    fn next(&mut self, url: &str) -> Result<SearchPage>;
}

// ---------------------------------------------------------------------------
// HttpPageSource
// ---------------------------------------------------------------------------

/// [`PageSource`] backed by a blocking `reqwest` client.
pub struct HttpPageSource {
    timeout: Duration,
    user_agent: String,
    client: Option<Client>,
}

impl HttpPageSource {
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> Self {
        Self {
            timeout,
            user_agent: user_agent.into(),
            client: None,
        }
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> Result<&Client> {
        let client = match self.client.take() {
            Some(client) => client,
            None => {
                let mut headers = HeaderMap::new();
                headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
                Client::builder()
                    .timeout(self.timeout)
                    .user_agent(self.user_agent.clone())
                    .default_headers(headers)
                    .build()?
            }
        };
        Ok(self.client.insert(client))
    }
}

impl PageSource for HttpPageSource {
    fn search(&mut self, url: &str, query: &str) -> Result<SearchPage> {
        log::debug!("GET {} q={}", url, query);
        let resp = self
            .client()?
            .get(url)
            .query(&[("q", query)])
            .send()?
            .error_for_status()?;
        decode_page(resp)
    }

    fn next(&mut self, url: &str) -> Result<SearchPage> {
        log::debug!("GET {}", url);
        let resp = self.client()?.get(url).send()?.error_for_status()?;
        decode_page(resp)
    }
}

/// Decode a page body. A body that is not a search page is a
/// [`HeritageError::Json`].
fn decode_page(resp: Response) -> Result<SearchPage> {
    let text = resp.text()?;
    Ok(serde_json::from_str(&text)?)
}

// ---------------------------------------------------------------------------
// fetch_all
// ---------------------------------------------------------------------------

/// Fetch every page of a search and return all records in arrival order.
///
/// `wait` is called with `delay` before each follow-up request; pass
/// `std::thread::sleep` for real use. Any failure aborts the whole fetch.
pub fn fetch_all<S, W>(
    source: &mut S,
    url: &str,
    query: &str,
    delay: Duration,
    mut wait: W,
) -> Result<Vec<CardRecord>>
where
    S: PageSource + ?Sized,
    W: FnMut(Duration),
{
    let mut cards = Vec::new();
    let mut page = source.search(url, query)?;

    loop {
        let SearchPage {
            data,
            has_more,
            next_page,
            total_cards,
        } = page;
        cards.extend(data);
        log::info!("Reading {} of {} cards.", cards.len(), total_cards);

        if !has_more {
            break;
        }
        let next_url = next_page.ok_or_else(|| {
            HeritageError::Api("search page has more results but no next_page URL".to_string())
        })?;

        wait(delay);
        page = source.next(&next_url)?;
    }

    Ok(cards)
}
