// src/gui/actions/scrape.rs
use std::{error::Error, thread};

use eframe::egui;

use crate::{
    browser::{BrowserManager, ChromeSource},
    config::options::AppOptions,
    engine::{self, ScrapeOutcome},
    gui::{app::App, progress::GuiProgress},
    progress::Progress,
    source::ThreadWaiter,
};

/// Launch the browser, open the page and run the scroll loop.
fn scrape_in_browser(
    url: &str,
    opts: &AppOptions,
    progress: &mut dyn Progress,
) -> Result<ScrapeOutcome, Box<dyn Error>> {
    progress.log("Starting browser…");
    let manager = BrowserManager::launch(opts.browser.clone())?;
    progress.log("Loading results…");
    let mut feed = ChromeSource::open(&manager, url)?;
    let outcome = engine::scrape_with_scroll(&mut feed, &mut ThreadWaiter, &opts.scrape, Some(progress))?;
    Ok(outcome)
}

/// Start a scrape on a worker thread. One at a time.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running {
        logd!("Scrape: Clicked while running, ignored");
        return;
    }
    if !app.session.can_scrape() {
        app.status("Open a Google Maps search page first");
        return;
    }

    let url = s!(app.session.page_url());
    let opts = app.state.options.clone();
    let status = app.status.clone();
    let slot = app.pending.clone();
    let ctx = ctx.clone();

    logf!("Scrape: Begin url={} opts={:?}", url, opts.scrape);
    app.running = true;
    app.status("Starting…");

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status, ctx.clone());
        let res = scrape_in_browser(&url, &opts, &mut prog).map_err(|e| e.to_string());
        if let Ok(mut s) = slot.lock() {
            *s = Some(res);
        }
        ctx.request_repaint();
    });
}

/// Pick up a finished scrape (if any) and render it.
pub fn collect_scrape(app: &mut App) {
    if !app.running {
        return;
    }
    let Some(res) = app.pending.lock().ok().and_then(|mut s| s.take()) else {
        return;
    };
    app.running = false;

    // address moved off the search page mid-run; controls are hidden
    if !app.session.can_scrape() {
        logd!("Scrape: result discarded, page is now {}", app.session.page_url());
        app.status("Page changed; results discarded");
        return;
    }

    match res {
        Ok(outcome) => {
            logf!(
                "Scrape: OK rows={} passes={} stop={:?}",
                outcome.listings.len(),
                outcome.passes,
                outcome.stop
            );
            let n = outcome.listings.len();
            app.session.apply_results(Some(outcome.listings));
            app.status(format!("Ready: {n} row(s)"));
        }
        Err(e) => {
            loge!("Scrape: Error: {}", e);
            app.session.apply_results(None);
            app.status(format!("Error: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::state::AppState, engine::StopReason, listing::Listing};

    fn finished_app(url: &str) -> App {
        let mut state = AppState::default();
        state.gui.page_url_text = s!(url);
        let mut app = App::new(state);
        app.running = true;
        *app.pending.lock().unwrap() = Some(Ok(ScrapeOutcome {
            listings: vec![Listing::with_href("https://www.google.com/maps/place/a")],
            passes: 1,
            stop: StopReason::EndOfList,
        }));
        app
    }

    #[test]
    fn result_fills_table_on_search_page() {
        let mut app = finished_app("https://www.google.com/maps/search/tea");
        collect_scrape(&mut app);
        assert!(!app.running);
        assert_eq!(app.session.table().nrows(), 1);
        assert!(app.session.can_export());
    }

    #[test]
    fn result_dropped_after_leaving_search_page() {
        let mut app = finished_app("https://www.google.com/maps/search/tea");
        app.state.gui.page_url_text = s!("https://www.google.com/maps/place/a");
        app.page_url_changed();
        collect_scrape(&mut app);
        assert!(!app.running);
        assert!(app.session.table().is_empty());
        assert!(!app.session.can_export());
        assert_eq!(app.status_text(), "Page changed; results discarded");
    }
}
