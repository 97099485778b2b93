//! Ordering and deduplication of a category's sets before output.
//!
//! Sets sharing a short name (a base set and its recolors or tier
//! variants) form a family. Families are kept adjacent and ordered by
//! their earliest member's id; within a family, sets are ordered by name.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use icu_collator::{Collator, CollatorOptions};

use crate::item_set::ItemSet;

/// Concatenate per-URL batches, order them and drop duplicate lines.
pub fn aggregate(batches: Vec<Vec<ItemSet>>) -> Vec<ItemSet> {
    let all: Vec<ItemSet> = batches.into_iter().flatten().collect();
    let total = all.len();
    let ordered = dedup_by_line(order_item_sets(all));
    if ordered.len() < total {
        log::debug!("Dropped {} duplicate set(s)", total - ordered.len());
    }
    ordered
}

/// Group sets into families and flatten them back in output order.
///
/// Every input set appears exactly once in the result. The result does not
/// depend on the input order: sets are first sorted by name with id, pieces
/// and class breaking ties, and families with the same lowest id are
/// ordered by short name.
///
/// Names compare by collation order, so accented and lowercase names sit
/// next to their unaccented and capitalized neighbours
/// (`azur < Élite < Zèle`). Byte order only breaks collation ties.
pub fn order_item_sets(mut sets: Vec<ItemSet>) -> Vec<ItemSet> {
    let names = NameOrder::new();
    sets.sort_by(|a, b| {
        names
            .compare(&a.name, &b.name)
            .then(a.id.cmp(&b.id))
            .then_with(|| a.pieces.cmp(&b.pieces))
            .then(a.req_class.cmp(&b.req_class))
    });

    let mut families: Vec<(String, Vec<ItemSet>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for set in sets {
        let key = set.short_name().to_string();
        match index.get(&key) {
            Some(&i) => families[i].1.push(set),
            None => {
                index.insert(key.clone(), families.len());
                families.push((key, vec![set]));
            }
        }
    }

    families.sort_by(|(a_key, a_sets), (b_key, b_sets)| {
        min_id(a_sets)
            .cmp(&min_id(b_sets))
            .then_with(|| names.compare(a_key, b_key))
    });

    families.into_iter().flat_map(|(_, sets)| sets).collect()
}

/// Total order on set names: Unicode collation first, bytes second.
struct NameOrder {
    collator: Option<Collator>,
}

impl NameOrder {
    fn new() -> Self {
        let collator = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(c) => Some(c),
            Err(e) => {
                log::warn!("Collation data unavailable, sorting names by code point: {e}");
                None
            }
        };
        Self { collator }
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        let collated = match &self.collator {
            Some(c) => c.compare(a, b),
            None => Ordering::Equal,
        };
        collated.then_with(|| a.cmp(b))
    }
}

/// Remove sets whose serialized line was already seen, keeping the first.
pub fn dedup_by_line(sets: Vec<ItemSet>) -> Vec<ItemSet> {
    let mut seen = HashSet::new();
    sets.into_iter()
        .filter(|set| seen.insert(set.to_lua_line()))
        .collect()
}

fn min_id(sets: &[ItemSet]) -> u32 {
    sets.iter().map(|s| s.id).min().unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "tests/aggregate_tests.rs"]
mod tests;
