// src/gui/progress.rs
use std::sync::{ Arc, Mutex };

use eframe::egui;

use crate::progress::Progress;

/// Worker-side progress: writes the shared status line and pokes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    collected: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, collected: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self) {
        self.set_status("Scrolling results…");
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn pass_done(&mut self, pass: u32, visible: usize, collected: usize, stalls: u32) {
        self.collected = collected;
        let stalled = if stalls > 0 { format!(", no growth ×{stalls}") } else { s!() };
        self.set_status(format!("Pass {pass}: {visible} visible, {collected} collected{stalled}"));
    }
    fn finish(&mut self) {
        self.set_status(format!("Scrape complete ({} collected)", self.collected));
    }
}
