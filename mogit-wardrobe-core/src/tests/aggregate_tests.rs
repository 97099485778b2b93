use super::*;

fn set(id: u32, name: &str) -> ItemSet {
    ItemSet::new(id, name, vec![id * 10, id * 10 + 1], None)
}

fn ids(sets: &[ItemSet]) -> Vec<u32> {
    sets.iter().map(|s| s.id).collect()
}

/// A family of four (base plus three variants), a singleton, and a
/// family whose oldest member sorts last by name.
fn sample() -> Vec<ItemSet> {
    vec![
        set(300, "4Warlord's Battlegear (Recolor)"),
        set(20, "4Embersilk Robe"),
        set(15, "4Vestments (Tier 1)"),
        set(40, "4Embersilk Robe (Recolor)"),
        set(120, "4Vestments (Tier 1) (Elite)"),
        set(290, "4Warlord's Battlegear"),
        set(16, "4Vestments (Tier 2)"),
        set(500, "3Alone"),
    ]
}

#[test]
fn families_ordered_by_lowest_id() {
    let ordered = order_item_sets(sample());
    assert_eq!(ids(&ordered), vec![15, 120, 16, 20, 40, 290, 300, 500]);
}

#[test]
fn family_members_ordered_by_full_name() {
    let ordered = order_item_sets(vec![
        set(9, "4Robe (Z)"),
        set(3, "4Robe (B)"),
        set(7, "4Robe (A)"),
    ]);
    assert_eq!(ids(&ordered), vec![7, 3, 9]);
}

#[test]
fn family_members_follow_collation_order() {
    let ordered = order_item_sets(vec![
        set(9, "4Robe (Zèle)"),
        set(3, "4Robe (Élite)"),
        set(7, "4Robe (azur)"),
    ]);
    let names: Vec<&str> = ordered.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["4Robe (azur)", "4Robe (Élite)", "4Robe (Zèle)"]);
}

#[test]
fn accented_name_sorts_beside_its_unaccented_form() {
    let ordered = order_item_sets(vec![
        set(4, "4Garde (F)"),
        set(2, "4Garde (Étoile)"),
        set(3, "4Garde (E)"),
    ]);
    assert_eq!(ids(&ordered), vec![3, 2, 4]);
}

#[test]
fn collation_ties_fall_back_to_bytes() {
    let a = order_item_sets(vec![set(1, "4Robe (b)"), set(1, "4Robe (B)")]);
    let b = order_item_sets(vec![set(1, "4Robe (B)"), set(1, "4Robe (b)")]);
    assert_eq!(a, b);
}

#[test]
fn ordering_keeps_every_record_once() {
    let input = sample();
    let ordered = order_item_sets(input.clone());
    assert_eq!(ordered.len(), input.len());
    for s in &input {
        assert_eq!(ordered.iter().filter(|o| *o == s).count(), 1, "{:?}", s);
    }
}

#[test]
fn ordering_keeps_exact_duplicates() {
    let ordered = order_item_sets(vec![set(5, "1B"), set(5, "1B")]);
    assert_eq!(ordered.len(), 2);
}

#[test]
fn ordering_is_independent_of_input_order() {
    let expected = order_item_sets(sample());

    let mut reversed = sample();
    reversed.reverse();
    assert_eq!(order_item_sets(reversed), expected);

    for shift in 1..sample().len() {
        let mut rotated = sample();
        rotated.rotate_left(shift);
        assert_eq!(order_item_sets(rotated), expected, "rotation {shift}");
    }
}

#[test]
fn same_name_different_ids_order_by_id() {
    let a = order_item_sets(vec![set(8, "4Robe"), set(2, "4Robe")]);
    assert_eq!(ids(&a), vec![2, 8]);
}

#[test]
fn families_with_equal_lowest_id_order_by_short_name() {
    let ordered = order_item_sets(vec![set(1, "4Zeta"), set(1, "4Alpha")]);
    assert_eq!(ordered[0].name, "4Alpha");
    assert_eq!(ordered[1].name, "4Zeta");
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(order_item_sets(Vec::new()).is_empty());
    assert!(aggregate(Vec::new()).is_empty());
}

#[test]
fn dedup_keeps_first_occurrence_in_order() {
    let deduped = dedup_by_line(vec![set(1, "4A"), set(2, "4B"), set(1, "4A"), set(3, "4C")]);
    assert_eq!(ids(&deduped), vec![1, 2, 3]);
}

#[test]
fn dedup_compares_serialized_lines() {
    // Only the first character differs, and it is dropped from the output.
    let deduped = dedup_by_line(vec![set(1, "4Robe"), set(1, "3Robe")]);
    assert_eq!(deduped.len(), 1);
    assert_eq!(deduped[0].name, "4Robe");
}

#[test]
fn dedup_is_idempotent() {
    let mut input = sample();
    input.extend(sample());
    let once = dedup_by_line(input);
    let twice = dedup_by_line(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn aggregate_merges_batches_and_collapses_duplicates() {
    let first = vec![set(5, "1B"), set(7, "1C")];
    let second = vec![set(5, "1B"), set(6, "1A")];
    let merged = aggregate(vec![first, second]);
    assert_eq!(ids(&merged), vec![5, 6, 7]);
}

#[test]
fn aggregate_of_identical_single_batches_has_one_record() {
    let batch = vec![ItemSet::new(5, "B", vec![], None)];
    let merged = aggregate(vec![batch.clone(), batch]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].to_lua_line(), r#"s(5,"",{},nil)"#);
}
