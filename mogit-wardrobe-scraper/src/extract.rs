//! Pulls the embedded set listing out of a listing page.
//!
//! The page carries its data in an inline script as a single line of the
//! form `var transmogSets = [...]`. The array is JSON.

use mogit_wardrobe_core::ItemSet;
use scraper::{Html, Selector};

use crate::error::ScrapeError;

/// Start of the line holding the listing.
pub const ASSIGNMENT_PREFIX: &str = "var transmogSets = ";

/// Page size of the source listing. A page with exactly this many sets has
/// almost certainly been truncated.
pub const RESULT_CAP: usize = 500;

const SCRIPT_SELECTOR: &str = r#"script[type="text/javascript"]"#;

/// Extract the sets listed in `html`. `url` is only used in error messages.
pub fn extract_item_sets(html: &str, url: &str) -> Result<Vec<ItemSet>, ScrapeError> {
    let json = find_assignment(html, url)?;
    let sets: Vec<ItemSet> =
        serde_json::from_str(&json).map_err(|e| ScrapeError::json(url, e))?;

    if sets.len() == RESULT_CAP {
        return Err(ScrapeError::CappedResults {
            url: url.to_string(),
            count: sets.len(),
        });
    }

    for set in sets.iter().filter(|s| s.name.is_empty()) {
        log::warn!("Set {} from {url} has an empty name", set.id);
    }

    Ok(sets)
}

/// Find the JSON array assigned to `transmogSets` in the page's scripts.
fn find_assignment(html: &str, url: &str) -> Result<String, ScrapeError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(SCRIPT_SELECTOR)
        .map_err(|e| ScrapeError::selector(SCRIPT_SELECTOR, e))?;

    let mut saw_script = false;
    for script in document.select(&selector) {
        saw_script = true;
        let text: String = script.text().collect();
        if let Some(json) = assignment_value(&text) {
            return Ok(json.to_string());
        }
    }

    if saw_script {
        Err(ScrapeError::assignment_not_found(url))
    } else {
        Err(ScrapeError::script_not_found(url))
    }
}

/// The value part of the first `var transmogSets = ...` line in `script`,
/// without a trailing `;`.
fn assignment_value(script: &str) -> Option<&str> {
    script
        .split('\n')
        .filter(|line| !line.is_empty())
        .find_map(|line| line.trim_start().strip_prefix(ASSIGNMENT_PREFIX))
        .map(|value| {
            let value = value.trim_end();
            value.strip_suffix(';').unwrap_or(value).trim_end()
        })
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
