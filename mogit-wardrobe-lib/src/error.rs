use std::path::PathBuf;

use mogit_wardrobe_core::ArmorType;
use mogit_wardrobe_scraper::ScrapeError;
use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum RunError {
    /// A listing for this category could not be fetched or read
    #[error("{armor}: {source}")]
    Scrape {
        armor: ArmorType,
        #[source]
        source: ScrapeError,
    },

    /// The category's data file could not be written
    #[error("{armor}: failed to write {}: {source}", .path.display())]
    Write {
        armor: ArmorType,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    /// The category that was being processed when the run stopped.
    pub fn armor(&self) -> ArmorType {
        match self {
            Self::Scrape { armor, .. } | Self::Write { armor, .. } => *armor,
        }
    }
}
