// src/listing.rs
//! One scraped business entry from the results feed.

/// Column titles of the rendered table, in field order.
pub const HEADERS: [&str; 6] = ["Title", "Rating", "Reviews", "Phone", "Website", "Google Maps Link"];

/// Flat record; any field the page didn't expose is an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    pub title: String,
    pub rating: String,
    /// Parenthesized, e.g. `(120)`
    pub review_count: String,
    pub phone: String,
    pub website: String,
    /// Map-entry permalink. Always set on extracted records.
    pub href: String,
}

impl Listing {
    pub fn with_href(href: impl Into<String>) -> Self {
        Self { href: href.into(), ..Self::default() }
    }

    /// Cells in `HEADERS` order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.rating.clone(),
            self.review_count.clone(),
            self.phone.clone(),
            self.website.clone(),
            self.href.clone(),
        ]
    }
}

pub fn header_row() -> Vec<String> {
    HEADERS.iter().map(|h| s!(*h)).collect()
}
