// src/gui/components/action_buttons.rs
//
// Export path, list separator, export/copy buttons and the share link.

use eframe::egui;

use crate::{
    config::options::ListDelim,
    export::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);

    // --- Output field + list separator ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(320.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        ui.separator();
        ui.label("Lists:");
        let before = app.state.options.export.list_delim;
        let delim = &mut app.state.options.export.list_delim;
        ui.selectable_value(delim, ListDelim::Semicolon, "a; b");
        ui.selectable_value(delim, ListDelim::Pipe, "a | b");
        if *delim != before {
            logf!("UI: list delimiter → {:?}", delim);
            app.save_config();
        }
    });

    // --- Actions (Export CSV / Export JSON / Copy) ---
    ui.horizontal(|ui| {
        let has_data = app.store.is_loaded();
        let target = if app.store.filtered_len() > 0 { "view" } else { "all" };

        if ui
            .add_enabled(has_data, egui::Button::new("Export CSV"))
            .on_hover_text(format!("Write the {target} as {}", ExportFormat::Csv.mime()))
            .clicked()
        {
            actions::export(app, ExportFormat::Csv);
        }
        if ui
            .add_enabled(has_data, egui::Button::new("Export JSON"))
            .on_hover_text(format!("Write the {target} as {}", ExportFormat::Json.mime()))
            .clicked()
        {
            actions::export(app, ExportFormat::Json);
        }
        if ui.add_enabled(has_data, egui::Button::new("Copy CSV")).clicked() {
            actions::copy_csv(app, ui.ctx());
        }

        ui.separator();

        if ui.button("Copy link").clicked() {
            actions::copy_link(app, ui.ctx());
        }
        ui.add(egui::Label::new(egui::RichText::new(app.link.as_str()).monospace().weak()).truncate());
    });
    ui.add_space(4.0);
}
