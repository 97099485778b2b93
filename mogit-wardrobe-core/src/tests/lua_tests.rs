use super::*;

#[test]
fn line_without_class_ends_in_nil() {
    let set = ItemSet::new(100, "\u{FFFF}Test Set", vec![1, 2, 3], None);
    assert_eq!(lua_line(&set), r#"s(100,"Test Set",{1,2,3},nil)"#);
}

#[test]
fn line_with_class_ends_in_class_id() {
    let set = ItemSet::new(100, "\u{FFFF}Test Set", vec![1, 2, 3], Some(4));
    assert_eq!(lua_line(&set), r#"s(100,"Test Set",{1,2,3},4)"#);
}

#[test]
fn empty_pieces_render_as_empty_table() {
    let set = ItemSet::new(5, "B", vec![], None);
    assert_eq!(lua_line(&set), r#"s(5,"",{},nil)"#);
}

#[test]
fn quotes_and_backslashes_are_escaped() {
    let set = ItemSet::new(7, "1The \"Dread\" Set\\", vec![9], None);
    assert_eq!(lua_line(&set), r#"s(7,"The \"Dread\" Set\\",{9},nil)"#);
}

#[test]
fn accented_names_pass_through() {
    let set = ItemSet::new(8, "3Tenue de l'Érudit", vec![1], None);
    assert_eq!(lua_line(&set), r#"s(8,"Tenue de l'Érudit",{1},nil)"#);
}

#[test]
fn item_set_method_matches_free_function() {
    let set = ItemSet::new(3, "2Robe", vec![4, 5], Some(1));
    assert_eq!(set.to_lua_line(), lua_line(&set));
}

#[test]
fn header_names_category_add_function() {
    assert_eq!(
        header_lines(ArmorType::Cloth),
        ["local a,t=...".to_string(), "local s=t.AddCloth".to_string()]
    );
    assert_eq!(header_lines(ArmorType::Plate)[1], "local s=t.AddPlate");
}

#[test]
fn file_name_uses_category_name() {
    assert_eq!(file_name(ArmorType::Leather), "Leather.lua");
    assert_eq!(file_name(ArmorType::Mail), "Mail.lua");
}
