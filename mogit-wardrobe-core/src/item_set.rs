use serde::{Deserialize, Deserializer};

/// One transmog set as listed by the source site.
///
/// Field names follow the embedded JSON payload (`id`, `name`, `pieces`,
/// `reqclass`). Keys not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ItemSet {
    pub id: u32,

    /// Display name exactly as listed. The first character is a
    /// source-side prefix and is not part of the visible name.
    pub name: String,

    /// Item ids belonging to the set.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pieces: Vec<u32>,

    /// Class restriction, if any.
    #[serde(default, rename = "reqclass", alias = "reqClass")]
    pub req_class: Option<u32>,
}

impl ItemSet {
    pub fn new(id: u32, name: impl Into<String>, pieces: Vec<u32>, req_class: Option<u32>) -> Self {
        Self {
            id,
            name: name.into(),
            pieces,
            req_class,
        }
    }

    /// Family key: everything before the first `(`, trimmed, or the whole
    /// name when there is no parenthesis.
    ///
    /// `"Embersilk Robe (Recolor)"` and `"Embersilk Robe"` share the key
    /// `"Embersilk Robe"`.
    pub fn short_name(&self) -> &str {
        match self.name.find('(') {
            Some(idx) => self.name[..idx].trim(),
            None => &self.name,
        }
    }

    /// The name with its leading prefix character removed.
    pub fn display_name(&self) -> &str {
        let mut chars = self.name.chars();
        chars.next();
        chars.as_str()
    }

    /// Serialized line for the generated Lua file (without line ending).
    pub fn to_lua_line(&self) -> String {
        crate::lua::lua_line(self)
    }
}

/// Listings occasionally carry `"pieces": null`; treat it like a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<u32>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "tests/item_set_tests.rs"]
mod tests;
