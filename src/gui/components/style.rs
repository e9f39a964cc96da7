// src/gui/components/style.rs
//
// Colors for the rarity pill and the "safe to recycle" cell.

use eframe::egui::{Color32, RichText};

use crate::item::{RarityClass, RecycleClass};

pub fn rarity_color(class: Option<RarityClass>) -> Option<Color32> {
    class.map(|c| match c {
        RarityClass::Common => Color32::from_rgb(0xB0, 0xB0, 0xB0),
        RarityClass::Uncommon => Color32::from_rgb(0x5C, 0xC8, 0x5C),
        RarityClass::Rare => Color32::from_rgb(0x64, 0xB4, 0xFF),
        RarityClass::Epic => Color32::from_rgb(0xB4, 0x6E, 0xFF),
        RarityClass::Legendary => Color32::from_rgb(0xFF, 0xA5, 0x00),
    })
}

pub fn recycle_color(class: RecycleClass) -> Color32 {
    match class {
        RecycleClass::Yes => Color32::from_rgb(0x5C, 0xC8, 0x5C),
        RecycleClass::No => Color32::from_rgb(0xDC, 0x61, 0x49),
        RecycleClass::Keep => Color32::from_rgb(0xF0, 0xD2, 0x3C),
    }
}

pub fn rarity_text(rarity: &str, class: Option<RarityClass>) -> RichText {
    let rt = RichText::new(rarity);
    match rarity_color(class) {
        Some(c) => rt.color(c),
        None => rt,
    }
}

pub fn recycle_text(safe: &str, class: RecycleClass) -> RichText {
    RichText::new(safe).color(recycle_color(class))
}
