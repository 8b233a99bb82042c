// src/browser/source.rs
use std::sync::Arc;

use headless_chrome::{protocol::cdp::Runtime::RemoteObject, Tab};
use url::Url;

use super::manager::{BrowserError, BrowserManager};
use crate::{
    config::consts::{FEED_SELECTOR, SEARCH_URL_BASE},
    extract::Snapshot,
    listing::Listing,
    source::{ListingSource, SourceResult},
};

/// `https://www.google.com/maps/search/<query>` with the query percent-encoded.
pub fn search_url(query: &str) -> Result<String, BrowserError> {
    let q = query.trim();
    if q.is_empty() {
        return Err(BrowserError::Query(s!("empty query")));
    }
    let mut url = Url::parse(SEARCH_URL_BASE).map_err(|e| BrowserError::Query(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| BrowserError::Query(s!("base URL cannot take a path")))?
        .pop_if_empty()
        .push(q);
    Ok(url.into())
}

fn scroll_script() -> String {
    format!(
        "(() => {{ const f = document.querySelector('{FEED_SELECTOR}'); \
         if (!f) return false; f.scrollTo(0, f.scrollHeight); return true; }})()"
    )
}

fn height_script() -> String {
    format!(
        "(() => {{ const f = document.querySelector('{FEED_SELECTOR}'); \
         return f ? f.scrollHeight : -1; }})()"
    )
}

/// The results feed of one live tab.
///
/// DOM reads go through a serialized snapshot taken after the latest scroll;
/// listings and the end marker of one pass come from the same snapshot.
pub struct ChromeSource {
    tab: Arc<Tab>,
    url: String,
    snapshot: Option<String>,
}

impl ChromeSource {
    /// Open `url` in a fresh tab and wait for the results feed.
    pub fn open(manager: &BrowserManager, url: &str) -> Result<Self, BrowserError> {
        let tab = manager.new_tab()?;

        tab.navigate_to(url)
            .map_err(|e| BrowserError::Navigation(format!("{url}: {e}")))?;
        tab.wait_until_navigated()
            .map_err(|e| BrowserError::Navigation(format!("{url}: {e}")))?;

        tab.wait_for_element_with_custom_timeout(FEED_SELECTOR, manager.config().feed_timeout())
            .map_err(|_| BrowserError::FeedMissing(s!(url)))?;

        logf!("Browser: feed ready on {}", url);
        Ok(Self { tab, url: s!(url), snapshot: None })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn eval(&self, script: &str) -> Result<RemoteObject, BrowserError> {
        self.tab
            .evaluate(script, false)
            .map_err(|e| BrowserError::JavaScript(e.to_string()))
    }

    fn snapshot(&mut self) -> Result<&str, BrowserError> {
        if self.snapshot.is_none() {
            let html = self
                .tab
                .get_content()
                .map_err(|e| BrowserError::Content(e.to_string()))?;
            self.snapshot = Some(html);
        }
        Ok(self.snapshot.as_deref().unwrap_or_default())
    }
}

impl ListingSource for ChromeSource {
    fn scroll_to_end(&mut self) -> SourceResult<()> {
        self.snapshot = None;
        let scrolled = self
            .eval(&scroll_script())?
            .value
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if !scrolled {
            return Err(BrowserError::FeedMissing(self.url.clone()).into());
        }
        Ok(())
    }

    fn content_height(&mut self) -> SourceResult<u64> {
        let height = self
            .eval(&height_script())?
            .value
            .and_then(|v| v.as_f64())
            .unwrap_or(-1.0);
        if height < 0.0 {
            return Err(BrowserError::FeedMissing(self.url.clone()).into());
        }
        Ok(height as u64)
    }

    fn visible_listings(&mut self) -> SourceResult<Vec<Listing>> {
        let url = self.url.clone();
        let html = self.snapshot()?;
        Ok(Snapshot::parse_at(html, &url).listings())
    }

    fn end_of_list_reached(&mut self) -> SourceResult<bool> {
        let html = self.snapshot()?;
        Ok(Snapshot::parse(html).end_of_list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_query() {
        assert_eq!(
            search_url("pizza near soho").unwrap(),
            "https://www.google.com/maps/search/pizza%20near%20soho"
        );
    }

    #[test]
    fn search_url_rejects_blank() {
        assert!(matches!(search_url("  "), Err(BrowserError::Query(_))));
    }

    #[test]
    fn scripts_target_the_feed() {
        assert!(scroll_script().contains(r#"document.querySelector('[role="feed"]')"#));
        assert!(height_script().contains("scrollHeight"));
    }

    #[test]
    #[ignore] // Requires Chrome and network access
    fn live_search_yields_listings() {
        use crate::browser::BrowserConfig;
        let manager = BrowserManager::launch(BrowserConfig::default()).unwrap();
        let url = search_url("coffee seattle").unwrap();
        let mut feed = ChromeSource::open(&manager, &url).unwrap();
        feed.scroll_to_end().unwrap();
        assert!(feed.content_height().unwrap() > 0);
        assert!(!feed.visible_listings().unwrap().is_empty());
    }
}
