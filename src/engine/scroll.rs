// src/engine/scroll.rs
use std::collections::HashSet;

use crate::{
    config::options::ScrapeOptions,
    listing::Listing,
    progress::Progress,
    source::{ListingSource, Waiter},
};

use super::types::{AtPass, ScrapeError, ScrapeOutcome, StopReason};

/// Scroll the feed until it ends or stalls, collecting every visible listing
/// after each wait.
///
/// Per pass: scroll to the bottom, wait `opts.delay()`, compare the height to
/// the previous reading (equal → stall counter + 1, otherwise reset), re-scan
/// everything visible, then stop on the end-of-list marker or when the stall
/// counter reaches `opts.stall_limit`.
///
/// Records are appended as seen. A listing visible in several passes shows up
/// several times unless `opts.dedup` is set.
pub fn scrape_with_scroll(
    source: &mut dyn ListingSource,
    waiter: &mut dyn Waiter,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScrapeOutcome, ScrapeError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin();
    }

    let mut listings: Vec<Listing> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut previous_height = source.content_height().at_pass(0)?;
    let mut stalls = 0u32;
    let mut pass = 0u32;

    logd!(
        "Scroll: start height={} delay={}ms stall_limit={} dedup={}",
        previous_height, opts.delay_ms, opts.stall_limit, opts.dedup
    );

    let stop = loop {
        pass += 1;

        source.scroll_to_end().at_pass(pass)?;
        waiter.wait(opts.delay());

        let height = source.content_height().at_pass(pass)?;
        if height == previous_height {
            stalls += 1;
        } else {
            stalls = 0;
        }
        previous_height = height;

        let batch = source.visible_listings().at_pass(pass)?;
        let visible = batch.len();
        if opts.dedup {
            listings.extend(batch.into_iter().filter(|l| seen.insert(l.href.clone())));
        } else {
            listings.extend(batch);
        }

        logd!(
            "Scroll: pass={} height={} stalls={} visible={} collected={}",
            pass, height, stalls, visible, listings.len()
        );
        if let Some(p) = progress.as_deref_mut() {
            p.pass_done(pass, visible, listings.len(), stalls);
        }

        if source.end_of_list_reached().at_pass(pass)? {
            break StopReason::EndOfList;
        }
        if stalls >= opts.stall_limit {
            break StopReason::Stalled;
        }
    };

    logf!("Scroll: done after {} pass(es), reason={:?}, records={}", pass, stop, listings.len());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(ScrapeOutcome { listings, passes: pass, stop })
}
