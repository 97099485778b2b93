//! Core types for the MogIt wardrobe generator.
//!
//! This crate knows nothing about the network or the filesystem. It holds
//! the item-set record as it arrives from the source listing, the armor
//! categories the addon is split into, the ordering rules applied before
//! output, and the Lua text format of the generated data files.

pub mod aggregate;
pub mod armor;
pub mod item_set;
pub mod lua;

pub use aggregate::{aggregate, dedup_by_line, order_item_sets};
pub use armor::{ArmorType, ArmorTypeParseError};
pub use item_set::ItemSet;
pub use lua::{LINE_ENDING, file_name, header_lines, lua_line};
