// src/gui/actions/copy.rs
use eframe::egui;

use crate::{export, gui::app::App};

/// CSV of the export view → clipboard.
pub fn copy_csv(app: &mut App, ctx: &egui::Context) {
    let items = app.store.export_view();
    if items.is_empty() {
        logd!("Copy: Clicked, but there's nothing to copy");
        app.status("Nothing to copy");
        return;
    }
    let n = items.len();
    let txt = export::to_csv(items, app.state.options.export.list_delim);
    ctx.copy_text(txt);
    logf!("Copy: csv rows={}", n);
    app.status(format!("Copied {n} item(s) as CSV"));
}

/// Share link → clipboard.
pub fn copy_link(app: &mut App, ctx: &egui::Context) {
    app.refresh_link();
    ctx.copy_text(app.link.clone());
    logf!("Copy: link {}", app.link);
    app.status("Link copied");
}
