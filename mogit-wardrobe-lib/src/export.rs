use std::fs;
use std::path::{Path, PathBuf};

use mogit_wardrobe_core::{ArmorType, ItemSet, LINE_ENDING, file_name, header_lines};

/// Full text of a category's data file: the two header lines, then one
/// line per set in the given order.
pub fn render_category(armor: ArmorType, sets: &[ItemSet]) -> String {
    let mut out = String::new();
    for line in header_lines(armor) {
        out.push_str(&line);
        out.push_str(LINE_ENDING);
    }
    for set in sets {
        out.push_str(&set.to_lua_line());
        out.push_str(LINE_ENDING);
    }
    out
}

/// Create or overwrite `<dir>/<Category>.lua`, creating `dir` if needed.
/// Returns the path written to.
///
/// The write is not atomic: a failure part way leaves a truncated file.
pub fn write_category_file(
    dir: &Path,
    armor: ArmorType,
    sets: &[ItemSet],
) -> std::io::Result<PathBuf> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(file_name(armor));
    fs::write(&path, render_category(armor, sets))?;
    Ok(path)
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
