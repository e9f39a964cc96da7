// src/gui/components/item_table.rs
//
// Draws the filtered view. Purely a view; a clicked row goes through
// App::select so the share link stays in sync.

use eframe::egui::{self, Align, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use super::style;
use crate::gui::app::App;

const HEADERS: [&str; 5] = ["Name", "Rarity", "Category", "Safe to recycle?", "Recycles into"];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.store.is_loaded() && app.store.filtered_len() == 0 {
        ui.add_space(8.0);
        ui.label(RichText::new("No items match your search.").weak());
        return;
    }

    let selected = app.store.selected_index();
    let mut clicked: Option<usize> = None;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .sense(egui::Sense::click())
        .min_scrolled_height(0.0)
        .column(Column::initial(200.0).resizable(true).clip(true).at_least(60.0))
        .column(Column::initial(90.0).resizable(true).clip(true))
        .column(Column::initial(160.0).resizable(true).clip(true))
        .column(Column::initial(110.0).resizable(true).clip(true))
        .column(Column::remainder().clip(true));

    if app.scroll_to_selected {
        if let Some(i) = selected {
            table = table.scroll_to_row(i, Some(Align::Center));
        }
        app.scroll_to_selected = false;
    }

    let store = &app.store;
    table
        .header(22.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, store.filtered_len(), |mut row| {
                let i = row.index();
                let Some(it) = store.filtered_item(i) else { return };
                row.set_selected(selected == Some(i));

                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.label(RichText::new(&it.name).strong());
                });
                row.col(|ui| {
                    ui.label(style::rarity_text(&it.rarity, it.rarity_class()));
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.label(it.category.as_str());
                });
                row.col(|ui| {
                    ui.label(style::recycle_text(&it.recycle.safe, it.recycle_class()));
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.label(it.recycle.outputs.join(", "));
                });

                if row.response().clicked() {
                    clicked = Some(i);
                }
            });
        });

    if let Some(i) = clicked {
        logd!("UI: row clicked {}", i);
        app.select(i);
    }
}
