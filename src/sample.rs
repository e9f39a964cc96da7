// src/sample.rs
// Built-in last-resort catalog; never empty.

use crate::item::{Item, Recycle};
use crate::normalize::sort_by_name;

pub fn items() -> Vec<Item> {
    let mut items = vec![
        Item {
            name: s!("Dog Collar"),
            rarity: s!("Rare"),
            category: s!("Special / Scrappy"),
            uses: list!["Train Scrappy to Level 2"],
            recycle: Recycle { safe: s!("Keep"), outputs: list!["Fabric", "Metal Parts"] },
            notes: s!("Needed for companion upgrade. Keep until upgrade complete."),
            sources: list![],
        },
        Item {
            name: s!("ARC Alloy"),
            rarity: s!("Uncommon"),
            category: s!("Topside Material"),
            uses: list!["Explosives/Medical/Utility Station I unlocks", "Projects I ×80"],
            recycle: Recycle { safe: s!("Yes"), outputs: list!["Metal Parts ×2"] },
            notes: s!("Common mid-tier crafting material."),
            sources: list![],
        },
    ];
    sort_by_name(&mut items);
    items
}
