// src/engine/types.rs
use crate::listing::Listing;
use crate::source::SourceResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The feed showed its end-of-list heading
    EndOfList,
    /// Height didn't change for `stall_limit` consecutive waits
    Stalled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOutcome {
    pub listings: Vec<Listing>,
    pub passes: u32,
    pub stop: StopReason,
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("results feed error on pass {pass}: {source}")]
    Source {
        pass: u32,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub(super) trait AtPass<T> {
    fn at_pass(self, pass: u32) -> Result<T, ScrapeError>;
}

impl<T> AtPass<T> for SourceResult<T> {
    fn at_pass(self, pass: u32) -> Result<T, ScrapeError> {
        self.map_err(|source| ScrapeError::Source { pass, source })
    }
}
