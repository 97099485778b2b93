//! Pipeline for generating the MogIt wardrobe data files.
//!
//! Fetches each category's listings, orders and deduplicates the sets,
//! and writes one Lua data file per category. The CLI is a thin layer over
//! [`run_catalog`].

pub mod error;
pub mod export;
pub mod progress;
pub mod run;
pub mod settings;

pub use error::RunError;
pub use export::{render_category, write_category_file};
pub use progress::RunProgress;
pub use run::{CategoryReport, RunOptions, RunSummary, collect_category, run_catalog};
pub use settings::{Resolved, SettingSource, Settings};

// Re-export the types callers need alongside the pipeline.
pub use mogit_wardrobe_core::{ArmorType, ItemSet, file_name};
pub use mogit_wardrobe_scraper::{
    CategorySource, HttpFetcher, PageFetcher, ScrapeError, WOWHEAD_CATALOG,
};
