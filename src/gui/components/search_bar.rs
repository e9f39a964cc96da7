// src/gui/components/search_bar.rs
//
// Search box (debounced), Clear, count badge, status banner.

use std::time::Instant;

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Search:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.search_text)
                .hint_text("name, category, rarity, uses, outputs, notes…")
                .desired_width(420.0),
        );
        if resp.changed() {
            app.debounce.input(&app.state.gui.search_text, Instant::now());
            logd!("UI: search text → {:?}", app.state.gui.search_text);
        }

        if ui.button("Clear").clicked() {
            app.clear_search();
            resp.request_focus();
            logd!("UI: search cleared");
        }

        ui.separator();
        ui.strong(app.store.count_label());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.checkbox(&mut app.state.gui.show_detail, "Details");
        });
    });

    ui.horizontal(|ui| {
        if app.loading.is_some() {
            ui.add(egui::Spinner::new().size(14.0));
        }
        ui.label(egui::RichText::new(app.status_text()).italics());
    });
    ui.add_space(2.0);
}
