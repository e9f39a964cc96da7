// src/gui/components/detail_panel.rs
//
// Full record for the selected item.

use eframe::egui::{self, RichText};

use super::style;
use crate::gui::app::App;

fn kv(ui: &mut egui::Ui, key: &str, add_value: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(key).strong());
        add_value(ui);
    });
    ui.add_space(4.0);
}

fn dash(ui: &mut egui::Ui) {
    ui.label(RichText::new("none").weak());
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(it) = app.store.selected() else {
        ui.add_space(8.0);
        ui.label(RichText::new("Select an item to see its details.").weak());
        return;
    };

    egui::ScrollArea::vertical().id_salt("detail_scroll").show(ui, |ui| {
        ui.heading(it.name.as_str());
        ui.separator();

        kv(ui, "Rarity", |ui| {
            ui.label(style::rarity_text(&it.rarity, it.rarity_class()));
        });
        kv(ui, "Category", |ui| {
            ui.label(it.category.as_str());
        });
        kv(ui, "Uses", |ui| {
            if it.uses.is_empty() {
                dash(ui);
            }
            let pill = ui.visuals().faint_bg_color;
            for u in &it.uses {
                ui.label(RichText::new(u.as_str()).background_color(pill));
            }
        });
        kv(ui, "Safe to recycle?", |ui| {
            ui.label(style::recycle_text(&it.recycle.safe, it.recycle_class()));
        });
        kv(ui, "Recycles into", |ui| {
            if it.recycle.outputs.is_empty() {
                dash(ui);
            } else {
                ui.label(it.recycle.outputs.join(", "));
            }
        });
        kv(ui, "Notes", |ui| {
            ui.label(it.notes.as_str());
        });
        kv(ui, "Sources", |ui| {
            if it.sources.is_empty() {
                dash(ui);
            }
            for s in &it.sources {
                if s.starts_with("http://") || s.starts_with("https://") {
                    ui.hyperlink_to(s.as_str(), s.as_str());
                } else {
                    ui.label(s.as_str());
                }
            }
        });
    });
}
