//! Text format of the generated addon data files.
//!
//! Each file starts with two header lines that bind the category's
//! registration function to `s`, followed by one `s(...)` call per set:
//!
//! ```text
//! local a,t=...
//! local s=t.AddCloth
//! s(100,"Test Set",{1,2,3},nil)
//! ```

use crate::armor::ArmorType;
use crate::item_set::ItemSet;

/// Line terminator used throughout the generated files.
pub const LINE_ENDING: &str = "\r\n";

/// File name of a category's data file, e.g. `Cloth.lua`.
pub fn file_name(armor: ArmorType) -> String {
    format!("{}.lua", armor.name())
}

/// The two header lines for a category's data file.
pub fn header_lines(armor: ArmorType) -> [String; 2] {
    [
        "local a,t=...".to_string(),
        format!("local s=t.Add{}", armor.name()),
    ]
}

/// Format one set as an `s(id,"name",{pieces},class)` call.
pub fn lua_line(set: &ItemSet) -> String {
    let pieces = set
        .pieces
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let class = match set.req_class {
        Some(c) => c.to_string(),
        None => "nil".to_string(),
    };
    format!(
        "s({},\"{}\",{{{}}},{})",
        set.id,
        escape_lua_string(set.display_name()),
        pieces,
        class
    )
}

/// Escape a value for a double-quoted Lua string literal.
fn escape_lua_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/lua_tests.rs"]
mod tests;
