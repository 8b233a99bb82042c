// src/gui/actions/mod.rs
//
// Button actions for the action bar; layout stays in components/.

mod export;  // src/gui/actions/export.rs
mod scrape;  // src/gui/actions/scrape.rs

pub use export::export;
pub use scrape::{collect_scrape, scrape};
