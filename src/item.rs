// src/item.rs
//
// The canonical catalog record. Every list field is always present
// (possibly empty); normalization guarantees a non-empty `name`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recycle {
    pub safe: String,
    pub outputs: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub rarity: String,
    pub category: String,
    pub uses: Vec<String>,
    pub recycle: Recycle,
    pub notes: String,
    pub sources: Vec<String>,
}

/// Display class for the rarity pill. Unknown rarities get no class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RarityClass {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl RarityClass {
    pub fn of(rarity: &str) -> Option<Self> {
        match rarity.trim().to_lowercase().as_str() {
            "common" => Some(RarityClass::Common),
            "uncommon" => Some(RarityClass::Uncommon),
            "rare" => Some(RarityClass::Rare),
            "epic" => Some(RarityClass::Epic),
            "legendary" => Some(RarityClass::Legendary),
            _ => None,
        }
    }
}

/// Display class for the "safe to recycle" cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecycleClass {
    Yes,
    No,
    Keep,
}

impl RecycleClass {
    pub fn of(safe: &str) -> Self {
        match safe.trim().to_lowercase().as_str() {
            "yes" => RecycleClass::Yes,
            "no" => RecycleClass::No,
            _ => RecycleClass::Keep,
        }
    }
}

impl Item {
    pub fn rarity_class(&self) -> Option<RarityClass> {
        RarityClass::of(&self.rarity)
    }

    pub fn recycle_class(&self) -> RecycleClass {
        RecycleClass::of(&self.recycle.safe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_case_insensitive() {
        assert_eq!(RarityClass::of("LEGENDARY"), Some(RarityClass::Legendary));
        assert_eq!(RarityClass::of("mythic"), None);
        assert_eq!(RecycleClass::of("Yes"), RecycleClass::Yes);
        assert_eq!(RecycleClass::of(" no "), RecycleClass::No);
        assert_eq!(RecycleClass::of("Unknown"), RecycleClass::Keep);
    }

    #[test]
    fn json_shape_nests_recycle() {
        let it = Item {
            name: s!("ARC Alloy"),
            recycle: Recycle { safe: s!("Yes"), outputs: list!["Metal Parts ×2"] },
            ..Item::default()
        };
        let v = serde_json::to_value(&it).unwrap();
        assert_eq!(v["recycle"]["safe"], "Yes");
        assert_eq!(v["recycle"]["outputs"][0], "Metal Parts ×2");
        assert!(v["uses"].as_array().unwrap().is_empty());
    }
}
