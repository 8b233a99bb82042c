// src/browser/config.rs
use std::time::Duration;

use crate::config::consts::{FEED_TIMEOUT_SECS, NAV_TIMEOUT_SECS};

/// Configuration for the automated browser
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Run without a visible window
    pub headless: bool,

    pub window_size: (u32, u32),

    /// Custom user agent; `None` keeps Chrome's own
    pub user_agent: Option<String>,

    /// Page navigation timeout in seconds
    pub nav_timeout_secs: u64,

    /// How long to wait for the results feed to show up
    pub feed_timeout_secs: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_size: (1280, 1024),
            user_agent: None,
            nav_timeout_secs: NAV_TIMEOUT_SECS,
            feed_timeout_secs: FEED_TIMEOUT_SECS,
        }
    }
}

impl BrowserConfig {
    /// Visible browser window; handy when Google shows a consent screen
    /// that has to be clicked through by hand.
    pub fn headed() -> Self {
        Self { headless: false, ..Self::default() }
    }

    pub fn nav_timeout(&self) -> Duration {
        Duration::from_secs(self.nav_timeout_secs)
    }

    pub fn feed_timeout(&self) -> Duration {
        Duration::from_secs(self.feed_timeout_secs)
    }
}
