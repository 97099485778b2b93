/// Errors that can occur while fetching or reading a set listing.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error (HTTP {status}) for {url}")]
    ServerError { status: u16, url: String },

    #[error("Invalid CSS selector {selector:?}: {message}")]
    Selector { selector: String, message: String },

    #[error("No text/javascript script block in page from {0}")]
    ScriptNotFound(String),

    #[error("No 'var transmogSets' assignment in page from {0}")]
    AssignmentNotFound(String),

    #[error("Malformed set listing from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "{url} returned exactly {count} sets, the listing is capped; split this query into narrower filters"
    )]
    CappedResults { url: String, count: usize },
}

impl ScrapeError {
    pub fn selector(selector: &str, message: impl std::fmt::Display) -> Self {
        Self::Selector {
            selector: selector.to_string(),
            message: message.to_string(),
        }
    }

    pub fn script_not_found(url: impl Into<String>) -> Self {
        Self::ScriptNotFound(url.into())
    }

    pub fn assignment_not_found(url: impl Into<String>) -> Self {
        Self::AssignmentNotFound(url.into())
    }

    pub fn json(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            url: url.into(),
            source,
        }
    }
}
