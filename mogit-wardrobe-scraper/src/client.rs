use mogit_wardrobe_core::ItemSet;

use crate::error::ScrapeError;
use crate::extract::extract_item_sets;

/// Browser user agent sent with every request. The listing pages serve
/// different markup to clients they do not recognise as browsers.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.3; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/71.0.3578.98 Safari/537.36";

/// Source of listing pages, keyed by URL.
pub trait PageFetcher {
    /// Return the body of the page at `url`.
    fn fetch(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Blocking HTTP fetcher.
///
/// Each call builds its own client, so no connection outlives the request
/// that opened it.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    user_agent: String,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    pub fn with_user_agent(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(self.user_agent.as_str())
            .build()?;

        let response = http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::ServerError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text()?;
        log::debug!("Fetched {} bytes from {url}", body.len());
        Ok(body)
    }
}

/// Fetch one listing page and extract its sets.
pub fn fetch_item_sets(fetcher: &dyn PageFetcher, url: &str) -> Result<Vec<ItemSet>, ScrapeError> {
    let html = fetcher.fetch(url)?;
    extract_item_sets(&html, url)
}
