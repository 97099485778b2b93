/// Armor categories the wardrobe data is split into.
///
/// Each category gets its own data file and its own registration function
/// in the addon (`t.AddCloth`, `t.AddLeather`, ...). The numeric type id is
/// the `type:N` filter the source site uses for the same category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArmorType {
    Cloth,
    Leather,
    Mail,
    Plate,
}

/// All categories in output order.
const ALL_ARMOR_TYPES: &[ArmorType] = &[
    ArmorType::Cloth,
    ArmorType::Leather,
    ArmorType::Mail,
    ArmorType::Plate,
];

impl ArmorType {
    /// Name used in file names and in the addon's `Add<Name>` function.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cloth => "Cloth",
            Self::Leather => "Leather",
            Self::Mail => "Mail",
            Self::Plate => "Plate",
        }
    }

    /// The source site's `type:N` filter value.
    pub fn type_id(&self) -> u8 {
        match self {
            Self::Cloth => 1,
            Self::Leather => 2,
            Self::Mail => 3,
            Self::Plate => 4,
        }
    }

    pub fn all() -> &'static [ArmorType] {
        ALL_ARMOR_TYPES
    }
}

impl std::fmt::Display for ArmorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string cannot be parsed into an `ArmorType`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown armor type: '{0}' (expected cloth, leather, mail, plate or 1-4)")]
pub struct ArmorTypeParseError(pub String);

impl std::str::FromStr for ArmorType {
    type Err = ArmorTypeParseError;

    /// Case-insensitive name or the numeric type id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        for &armor in ALL_ARMOR_TYPES {
            if armor.name().eq_ignore_ascii_case(needle) || armor.type_id().to_string() == needle {
                return Ok(armor);
            }
        }
        Err(ArmorTypeParseError(s.to_string()))
    }
}
