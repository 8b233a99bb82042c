// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    engine::ScrapeOutcome,
    session::Session,
};

/// Where the scrape worker drops its result for the UI thread to pick up.
pub type ScrapeSlot = Arc<Mutex<Option<Result<ScrapeOutcome, String>>>>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Maps Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // options + raw text fields (UI thread only)
    pub state: AppState,

    // page check, table, export gate
    pub session: Session,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: ScrapeSlot,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let session = Session::open(&state.gui.page_url_text);
        logf!("Init: page='{}' can_scrape={}", session.page_url(), session.can_scrape());

        Self {
            state,
            session,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Address field changed → re-run the page check.
    pub fn page_url_changed(&mut self) {
        self.session.check_page(&self.state.gui.page_url_text);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::actions::collect_scrape(self);

        egui::TopBottomPanel::top("page").show(ctx, |ui| {
            super::components::page_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::action_bar::draw(ui, self);

            ui.separator();

            super::components::data_table::draw(ui, self);
        });
    }
}
