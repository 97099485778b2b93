use super::*;

#[test]
fn short_name_strips_parenthesized_suffix() {
    let set = ItemSet::new(1, "Embersilk Robe (Recolor)", vec![], None);
    assert_eq!(set.short_name(), "Embersilk Robe");
}

#[test]
fn short_name_without_parenthesis_is_unchanged() {
    let set = ItemSet::new(1, "Embersilk Robe", vec![], None);
    assert_eq!(set.short_name(), "Embersilk Robe");
}

#[test]
fn short_name_cuts_at_first_parenthesis() {
    let set = ItemSet::new(1, "Vestments (Tier 1) (Recolor)", vec![], None);
    assert_eq!(set.short_name(), "Vestments");
}

#[test]
fn short_name_of_leading_parenthesis_is_empty() {
    let set = ItemSet::new(1, "(Unnamed)", vec![], None);
    assert_eq!(set.short_name(), "");
}

#[test]
fn display_name_drops_first_char() {
    let set = ItemSet::new(1, "4Embersilk Robe", vec![], None);
    assert_eq!(set.display_name(), "Embersilk Robe");
}

#[test]
fn display_name_drops_multibyte_first_char_whole() {
    let set = ItemSet::new(1, "\u{FFFF}Test Set", vec![], None);
    assert_eq!(set.display_name(), "Test Set");
}

#[test]
fn display_name_of_empty_or_single_char_is_empty() {
    assert_eq!(ItemSet::new(1, "", vec![], None).display_name(), "");
    assert_eq!(ItemSet::new(1, "B", vec![], None).display_name(), "");
}

#[test]
fn deserializes_source_keys() {
    let json = r#"{"id":100,"name":"4Test Set","pieces":[1,2,3],"reqclass":4,"quality":4}"#;
    let set: ItemSet = serde_json::from_str(json).unwrap();
    assert_eq!(set, ItemSet::new(100, "4Test Set", vec![1, 2, 3], Some(4)));
}

#[test]
fn deserializes_camel_case_class_key() {
    let json = r#"{"id":100,"name":"4Test Set","pieces":[],"reqClass":8}"#;
    let set: ItemSet = serde_json::from_str(json).unwrap();
    assert_eq!(set.req_class, Some(8));
}

#[test]
fn missing_pieces_and_class_default_to_empty() {
    let set: ItemSet = serde_json::from_str(r#"{"id":5,"name":"B"}"#).unwrap();
    assert!(set.pieces.is_empty());
    assert_eq!(set.req_class, None);
}

#[test]
fn null_class_is_no_restriction() {
    let set: ItemSet = serde_json::from_str(r#"{"id":5,"name":"B","reqclass":null}"#).unwrap();
    assert_eq!(set.req_class, None);
}

#[test]
fn null_pieces_is_empty_list() {
    let set: ItemSet = serde_json::from_str(r#"{"id":5,"name":"B","pieces":null}"#).unwrap();
    assert!(set.pieces.is_empty());
}
