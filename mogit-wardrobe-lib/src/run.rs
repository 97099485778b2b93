use std::path::PathBuf;

use mogit_wardrobe_core::{ArmorType, ItemSet, aggregate, file_name};
use mogit_wardrobe_scraper::{CategorySource, PageFetcher, fetch_item_sets};

use crate::error::RunError;
use crate::export::write_category_file;
use crate::progress::RunProgress;

/// Options controlling a generation run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory receiving the `<Category>.lua` files
    pub out_dir: PathBuf,
    /// Restrict the run to these categories (catalog order is kept)
    pub only: Option<Vec<ArmorType>>,
    /// Fetch and aggregate, but write nothing
    pub dry_run: bool,
}

impl RunOptions {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            only: None,
            dry_run: false,
        }
    }

    fn includes(&self, armor: ArmorType) -> bool {
        self.only.as_ref().is_none_or(|only| only.contains(&armor))
    }
}

/// Outcome for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub armor: ArmorType,
    /// Sets read from all of the category's listings
    pub fetched: usize,
    /// Sets written after ordering and deduplication
    pub written: usize,
    /// File written, `None` on a dry run
    pub path: Option<PathBuf>,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub categories: Vec<CategoryReport>,
}

impl RunSummary {
    pub fn total_written(&self) -> usize {
        self.categories.iter().map(|c| c.written).sum()
    }

    pub fn files_written(&self) -> Vec<&PathBuf> {
        self.categories.iter().filter_map(|c| c.path.as_ref()).collect()
    }
}

/// Fetch every listing of one category, in order, and aggregate them.
///
/// Returns the number of sets fetched and the ordered, deduplicated sets.
pub fn collect_category(
    source: &CategorySource,
    fetcher: &dyn PageFetcher,
    progress: &dyn Fn(RunProgress),
) -> Result<(usize, Vec<ItemSet>), RunError> {
    let armor = source.armor;
    let total = source.urls.len();
    let mut batches = Vec::with_capacity(total);

    for (i, url) in source.urls.iter().enumerate() {
        progress(RunProgress::fetching(armor, *url, i, total));
        log::debug!("{armor}: fetching {url}");

        let sets = fetch_item_sets(fetcher, url)
            .map_err(|source| RunError::Scrape { armor, source })?;

        progress(RunProgress::fetched(armor, *url, sets.len()));
        log::debug!("{armor}: {} sets from {url}", sets.len());
        batches.push(sets);
    }

    let fetched = batches.iter().map(Vec::len).sum();
    Ok((fetched, aggregate(batches)))
}

/// Run the pipeline over `catalog`: for each selected category, fetch its
/// listings, aggregate them, and write its data file.
///
/// Categories are processed one after another in catalog order. The first
/// error stops the run; files already written for earlier categories are
/// left in place.
pub fn run_catalog(
    catalog: &[CategorySource],
    fetcher: &dyn PageFetcher,
    options: &RunOptions,
    progress: &dyn Fn(RunProgress),
) -> Result<RunSummary, RunError> {
    if let Some(only) = &options.only {
        for armor in only {
            if !catalog.iter().any(|s| s.armor == *armor) {
                log::warn!("No sources configured for {armor}, skipping");
            }
        }
    }

    let mut summary = RunSummary::default();

    for source in catalog.iter().filter(|s| options.includes(s.armor)) {
        let armor = source.armor;
        progress(RunProgress::CategoryStarted {
            armor,
            url_count: source.urls.len(),
        });

        let (fetched, sets) = collect_category(source, fetcher, progress)?;

        let path = if options.dry_run {
            None
        } else {
            let path = write_category_file(&options.out_dir, armor, &sets).map_err(|e| {
                RunError::Write {
                    armor,
                    path: options.out_dir.join(file_name(armor)),
                    source: e,
                }
            })?;
            log::debug!("{armor}: wrote {} sets to {}", sets.len(), path.display());
            Some(path)
        };

        progress(RunProgress::CategoryFinished {
            armor,
            fetched,
            written: sets.len(),
            path: path.clone(),
        });
        summary.categories.push(CategoryReport {
            armor,
            fetched,
            written: sets.len(),
            path,
        });
    }

    progress(RunProgress::Done);
    Ok(summary)
}
