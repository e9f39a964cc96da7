// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::loader::Provenance;
use crate::progress::Progress;

/// Mirrors loader progress into the status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    tried: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, tried: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, tiers: usize) {
        self.total = tiers;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn tier_done(&mut self, tier: Provenance, accepted: bool) {
        self.tried += 1;
        logd!("GUI: tier {} accepted={} ({}/{})", tier, accepted, self.tried, self.total);
    }
    fn finish(&mut self, tier: Provenance) {
        self.set_status(format!("Load complete ({tier})"));
    }
}
