use mogit_wardrobe_core::ArmorType;

/// The listing URLs that together cover one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySource {
    pub armor: ArmorType,
    pub urls: &'static [&'static str],
}

/// Wowhead listings for each category.
///
/// A single listing is capped at 500 sets, so each category is split by
/// required level into two queries. Both include level 90; sets listed by
/// both are collapsed when the category is aggregated.
pub const WOWHEAD_CATALOG: &[CategorySource] = &[
    CategorySource {
        armor: ArmorType::Cloth,
        urls: &[
            "https://fr.wowhead.com/transmog-sets/max-req-level:90/type:1",
            "https://fr.wowhead.com/transmog-sets/min-req-level:90/type:1",
        ],
    },
    CategorySource {
        armor: ArmorType::Leather,
        urls: &[
            "https://fr.wowhead.com/transmog-sets/max-req-level:90/type:2",
            "https://fr.wowhead.com/transmog-sets/min-req-level:90/type:2",
        ],
    },
    CategorySource {
        armor: ArmorType::Mail,
        urls: &[
            "https://fr.wowhead.com/transmog-sets/max-req-level:90/type:3",
            "https://fr.wowhead.com/transmog-sets/min-req-level:90/type:3",
        ],
    },
    CategorySource {
        armor: ArmorType::Plate,
        urls: &[
            "https://fr.wowhead.com/transmog-sets/max-req-level:90/type:4",
            "https://fr.wowhead.com/transmog-sets/min-req-level:90/type:4",
        ],
    },
];

/// Look up the source entry for a category in `catalog`.
pub fn source_for(catalog: &[CategorySource], armor: ArmorType) -> Option<&CategorySource> {
    catalog.iter().find(|s| s.armor == armor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_armor_type_has_one_entry_in_order() {
        let armors: Vec<ArmorType> = WOWHEAD_CATALOG.iter().map(|s| s.armor).collect();
        assert_eq!(armors, ArmorType::all());
    }

    #[test]
    fn urls_filter_on_the_category_type() {
        for source in WOWHEAD_CATALOG {
            let suffix = format!("/type:{}", source.armor.type_id());
            for url in source.urls {
                assert!(url.ends_with(&suffix), "{url} should end with {suffix}");
            }
        }
    }

    #[test]
    fn each_category_splits_into_max_and_min_level_queries() {
        for source in WOWHEAD_CATALOG {
            assert_eq!(source.urls.len(), 2, "{}", source.armor);
            assert!(source.urls[0].contains("/max-req-level:"));
            assert!(source.urls[1].contains("/min-req-level:"));
        }
    }

    #[test]
    fn source_for_finds_entry() {
        let plate = source_for(WOWHEAD_CATALOG, ArmorType::Plate).unwrap();
        assert_eq!(plate.armor, ArmorType::Plate);
        assert!(source_for(&WOWHEAD_CATALOG[..1], ArmorType::Mail).is_none());
    }
}
