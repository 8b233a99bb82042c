// src/engine/mod.rs
//! The auto-scroll-and-extract loop.

mod scroll;
mod types;

pub use scroll::scrape_with_scroll;
pub use types::{ScrapeError, ScrapeOutcome, StopReason};
