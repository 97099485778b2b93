use std::path::PathBuf;

use mogit_wardrobe_core::ArmorType;

/// Progress update sent during a generation run.
#[derive(Debug, Clone)]
pub enum RunProgress {
    /// Starting a category
    CategoryStarted { armor: ArmorType, url_count: usize },

    /// About to request a listing page
    Fetching {
        armor: ArmorType,
        url: String,
        index: usize,
        total: usize,
    },

    /// A listing page was read
    Fetched {
        armor: ArmorType,
        url: String,
        count: usize,
    },

    /// A category is done. `path` is `None` on a dry run.
    CategoryFinished {
        armor: ArmorType,
        fetched: usize,
        written: usize,
        path: Option<PathBuf>,
    },

    /// All selected categories are done
    Done,
}

impl RunProgress {
    pub fn fetching(armor: ArmorType, url: impl Into<String>, index: usize, total: usize) -> Self {
        Self::Fetching {
            armor,
            url: url.into(),
            index,
            total,
        }
    }

    pub fn fetched(armor: ArmorType, url: impl Into<String>, count: usize) -> Self {
        Self::Fetched {
            armor,
            url: url.into(),
            count,
        }
    }
}
