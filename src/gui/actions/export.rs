// src/gui/actions/export.rs
use crate::{export::ExportFormat, file, gui::app::App};

pub fn export(app: &mut App, format: ExportFormat) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!("Export: Out path set → {}", app.state.options.export.out_path(format).display());
        app.out_path_dirty = false;
        app.save_config();
    }

    let items = app.store.export_view();
    if items.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    logf!("Export: Begin format={:?} rows={}", format, items.len());
    let n = items.len();
    let msg = match file::write_export(&app.state.options.export, format, items) {
        Ok(path) => format!("Exported {n} item(s) → {}", path.display()),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
