// src/session.rs
//! One popup session: the page we're pointed at, what the action controls
//! allow, and the table currently on screen. Frontends own a `Session` and
//! pass it around; nothing here is global.

use std::path::PathBuf;

use crate::{
    config::{
        consts::{NAV_LINK_TEXT, READY_MESSAGE, SEARCH_URL_BASE, SEARCH_URL_PATTERN},
        options::{ExportOptions, ScrapeOptions},
    },
    csv, engine::{self, ScrapeError, ScrapeOutcome}, file,
    listing::Listing,
    progress::Progress,
    source::{ListingSource, Waiter},
    table::TableData,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageStatus {
    /// On a search results page; scraping allowed
    Ready { message: String },
    /// Anywhere else; show a link instead and hide the controls
    WrongPage { link_url: String, link_text: String },
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("not a Google Maps search page: {0}")]
    NotOnSearchPage(String),
    #[error("nothing to export")]
    NothingToExport,
    #[error(transparent)]
    Scrape(#[from] ScrapeError),
    #[error("export failed: {0}")]
    Write(String),
}

#[derive(Clone, Debug)]
pub struct Session {
    page_url: String,
    status: PageStatus,
    listings: Vec<Listing>,
    table: TableData,
    export_enabled: bool,
}

impl Session {
    pub fn open(page_url: &str) -> Self {
        let mut s = Self {
            page_url: s!(),
            status: PageStatus::Ready { message: s!() },
            listings: Vec::new(),
            table: TableData::empty(),
            export_enabled: false,
        };
        s.check_page(page_url);
        s
    }

    pub fn is_search_page(url: &str) -> bool {
        url.contains(SEARCH_URL_PATTERN)
    }

    /// Re-evaluate the page address and gate the controls accordingly.
    pub fn check_page(&mut self, page_url: &str) {
        self.page_url = s!(page_url.trim());
        self.status = if Self::is_search_page(&self.page_url) {
            PageStatus::Ready { message: s!(READY_MESSAGE) }
        } else {
            PageStatus::WrongPage {
                link_url: s!(SEARCH_URL_BASE),
                link_text: s!(NAV_LINK_TEXT),
            }
        };
        logd!("Session: page={} status={:?}", self.page_url, self.status);
    }

    pub fn page_url(&self) -> &str { &self.page_url }
    pub fn status(&self) -> &PageStatus { &self.status }
    pub fn table(&self) -> &TableData { &self.table }
    pub fn listings(&self) -> &[Listing] { &self.listings }

    pub fn can_scrape(&self) -> bool {
        matches!(self.status, PageStatus::Ready { .. })
    }

    /// Scrape/export/filename controls are shown only on a search page.
    pub fn controls_visible(&self) -> bool {
        self.can_scrape()
    }

    pub fn can_export(&self) -> bool {
        self.can_scrape() && self.export_enabled
    }

    /// Results arrived: clear the old table, rebuild the header, add one row
    /// per record. `None` (no result from the run) leaves headers only.
    pub fn apply_results(&mut self, results: Option<Vec<Listing>>) {
        self.table.reset_with_header();
        self.listings.clear();

        let Some(listings) = results else {
            self.export_enabled = false;
            logd!("Session: no results returned");
            return;
        };

        for l in &listings {
            self.table.push_listing(l);
        }
        self.export_enabled = !listings.is_empty();
        self.listings = listings;
        logf!("Session: table rows={} export_enabled={}", self.table.nrows(), self.export_enabled);
    }

    /// Run the scroll loop against `source` and render what it returns.
    /// On failure the table keeps only its header and export stays off.
    pub fn scrape(
        &mut self,
        source: &mut dyn ListingSource,
        waiter: &mut dyn Waiter,
        opts: &ScrapeOptions,
        progress: Option<&mut dyn Progress>,
    ) -> Result<ScrapeOutcome, SessionError> {
        if !self.can_scrape() {
            return Err(SessionError::NotOnSearchPage(self.page_url.clone()));
        }

        match engine::scrape_with_scroll(source, waiter, opts, progress) {
            Ok(outcome) => {
                self.apply_results(Some(outcome.listings.clone()));
                Ok(outcome)
            }
            Err(e) => {
                loge!("Session: scrape failed: {}", e);
                self.apply_results(None);
                Err(e.into())
            }
        }
    }

    /// The rendered table as CSV text.
    pub fn to_csv(&self, export: &ExportOptions) -> String {
        csv::table_to_csv(&self.table.rendered_rows(), export.escape_quotes)
    }

    /// Sanitize `filename_input`, serialize the table and save it.
    pub fn export(&self, filename_input: &str, export: &ExportOptions) -> Result<PathBuf, SessionError> {
        if !self.can_export() {
            return Err(SessionError::NothingToExport);
        }
        let filename = file::sanitize_filename(filename_input);
        let text = self.to_csv(export);
        file::write_download(export.out_dir(), &filename, &text)
            .map_err(|e| SessionError::Write(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH: &str = "https://www.google.com/maps/search/pizza+near+soho/@40.72,-74.00,15z";

    #[test]
    fn search_page_is_ready() {
        let s = Session::open(SEARCH);
        assert!(s.can_scrape());
        assert!(!s.can_export());
        assert_eq!(s.status(), &PageStatus::Ready { message: s!("Let's scrape Google Maps!") });
    }

    #[test]
    fn other_page_shows_link_and_hides_controls() {
        let s = Session::open("https://www.google.com/maps/place/Somewhere");
        assert!(!s.controls_visible());
        assert_eq!(s.status(), &PageStatus::WrongPage {
            link_url: s!("https://www.google.com/maps/search/"),
            link_text: s!("Go to Google Maps Search."),
        });
    }

    #[test]
    fn missing_results_leave_headers_only() {
        let mut s = Session::open(SEARCH);
        s.apply_results(None);
        assert_eq!(s.table().headers.as_ref().map(|h| h.len()), Some(6));
        assert!(s.table().is_empty());
        assert!(!s.can_export());
    }

    #[test]
    fn empty_results_keep_export_disabled() {
        let mut s = Session::open(SEARCH);
        s.apply_results(Some(vec![Listing::with_href("https://www.google.com/maps/place/a")]));
        assert!(s.can_export());
        s.apply_results(Some(Vec::new()));
        assert!(!s.can_export());
    }

    #[test]
    fn export_refused_when_disabled() {
        let s = Session::open(SEARCH);
        let err = s.export("x", &ExportOptions::default()).unwrap_err();
        assert!(matches!(err, SessionError::NothingToExport));
    }
}
