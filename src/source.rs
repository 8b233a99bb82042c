// src/source.rs
//! Capabilities the scroll loop needs from the outside world.
//! The browser implements [`ListingSource`]; tests use scripted fakes.

use std::error::Error;
use std::time::Duration;

use crate::listing::Listing;

pub type SourceResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// A live, lazily-loading results feed.
pub trait ListingSource {
    /// Scroll the feed to its current maximum offset.
    fn scroll_to_end(&mut self) -> SourceResult<()>;

    /// Current content height of the feed.
    fn content_height(&mut self) -> SourceResult<u64>;

    /// Every listing visible right now, not just the new ones.
    fn visible_listings(&mut self) -> SourceResult<Vec<Listing>>;

    /// Whether the "end of the list" marker is on the page.
    fn end_of_list_reached(&mut self) -> SourceResult<bool>;
}

/// Suspension point between scroll and re-read.
pub trait Waiter {
    fn wait(&mut self, delay: Duration);
}

/// Real time.
pub struct ThreadWaiter;

impl Waiter for ThreadWaiter {
    fn wait(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Records requested delays without sleeping.
#[derive(Default, Debug)]
pub struct RecordingWaiter {
    pub waits: Vec<Duration>,
}

impl Waiter for RecordingWaiter {
    fn wait(&mut self, delay: Duration) {
        self.waits.push(delay);
    }
}

impl RecordingWaiter {
    pub fn total(&self) -> Duration {
        self.waits.iter().sum()
    }
}
