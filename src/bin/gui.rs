// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use arc_items::{config::state::GuiState, gui, log, share::ShareState};
use eframe::egui::{IconData, ViewportBuilder};

fn app_icon() -> Option<IconData> {
    let img = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/arc_items.png"
    )))
    .ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    log::init();

    let dims = GuiState::default();
    let mut viewport =
        ViewportBuilder::default().with_inner_size([dims.window_w as f32, dims.window_h as f32]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    // Optional share link, e.g. `arc_items "arc-items://catalog/?q=rare#item=Dog+Collar"`
    let share = std::env::args().nth(1).and_then(|arg| match ShareState::from_link(&arg) {
        Ok(st) => Some(st),
        Err(e) => {
            eprintln!("Ignoring link {arg:?}: {e}");
            None
        }
    });

    if let Err(e) = gui::run(options, gui::Launch { share, ..Default::default() }) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
