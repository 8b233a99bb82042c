//! Browser automation: drives Chrome/Chromium to the search results page and
//! exposes the live feed as a [`crate::source::ListingSource`].
//!
//! # Example
//!
//! ```no_run
//! use maps_scrape::browser::{BrowserConfig, BrowserManager, ChromeSource};
//! use maps_scrape::config::options::ScrapeOptions;
//! use maps_scrape::engine::scrape_with_scroll;
//! use maps_scrape::source::ThreadWaiter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = BrowserManager::launch(BrowserConfig::default())?;
//! let mut feed = ChromeSource::open(&manager, "https://www.google.com/maps/search/pizza")?;
//! let out = scrape_with_scroll(&mut feed, &mut ThreadWaiter, &ScrapeOptions::default(), None)?;
//! println!("{} listings", out.listings.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod manager;
pub mod source;

pub use config::BrowserConfig;
pub use manager::{BrowserError, BrowserManager};
pub use source::{search_url, ChromeSource};
