pub mod client;
pub mod error;
pub mod extract;
pub mod sources;

pub use client::{DEFAULT_USER_AGENT, HttpFetcher, PageFetcher, fetch_item_sets};
pub use error::ScrapeError;
pub use extract::{ASSIGNMENT_PREFIX, RESULT_CAP, extract_item_sets};
pub use sources::{CategorySource, WOWHEAD_CATALOG, source_for};
