// src/gui/actions/load.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    gui::{app::App, progress::GuiProgress},
    loader,
    source::NetFetch,
};

/// Kick off the tiered load on a worker thread. The result comes back over
/// a channel and is installed by the UI thread, so the store has one writer.
pub fn start_load(app: &mut App, ctx: &egui::Context) {
    if app.loading.is_some() {
        return;
    }
    let (tx, rx) = mpsc::channel();
    let sources = app.state.options.sources.clone();
    let status = app.status.clone();
    let ctx2 = ctx.clone();

    logf!("Load: Begin primary={} secondary={}", sources.primary, sources.secondary);
    app.status("Loading…");

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status, ctx2.clone());
        let loaded = loader::load(&NetFetch, &sources, Some(&mut prog));
        if tx.send(loaded).is_err() {
            logd!("Load: window closed before result arrived");
        }
        ctx2.request_repaint();
    });

    app.loading = Some(rx);
}
