// src/browser/manager.rs
use std::sync::Arc;

use headless_chrome::{Browser, LaunchOptions, Tab};

use super::config::BrowserConfig;

/// Owns the Chrome process and hands out tabs
pub struct BrowserManager {
    browser: Browser,
    config: BrowserConfig,
}

impl BrowserManager {
    pub fn launch(config: BrowserConfig) -> Result<Self, BrowserError> {
        let launch_options = Self::build_launch_options(&config)?;

        let browser = Browser::new(launch_options)
            .map_err(|e| BrowserError::Launch(e.to_string()))?;

        logf!("Browser: launched headless={} window={:?}", config.headless, config.window_size);
        Ok(Self { browser, config })
    }

    fn build_launch_options(config: &BrowserConfig) -> Result<LaunchOptions<'static>, BrowserError> {
        LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some(config.window_size))
            .build()
            .map_err(|e| BrowserError::Configuration(e.to_string()))
    }

    pub fn new_tab(&self) -> Result<Arc<Tab>, BrowserError> {
        let tab = self
            .browser
            .new_tab()
            .map_err(|e| BrowserError::Tab(e.to_string()))?;

        tab.set_default_timeout(self.config.nav_timeout());
        if let Some(ua) = &self.config.user_agent {
            tab.set_user_agent(ua, None, None)
                .map_err(|e| BrowserError::Tab(e.to_string()))?;
        }
        Ok(tab)
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }
}

/// Errors that can occur while driving the browser
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("browser launch failed: {0}")]
    Launch(String),

    #[error("browser configuration error: {0}")]
    Configuration(String),

    #[error("tab creation failed: {0}")]
    Tab(String),

    #[error("navigation error: {0}")]
    Navigation(String),

    #[error("results feed not found on {0}")]
    FeedMissing(String),

    #[error("JavaScript evaluation error: {0}")]
    JavaScript(String),

    #[error("page content error: {0}")]
    Content(String),

    #[error("invalid search query: {0}")]
    Query(String),
}
