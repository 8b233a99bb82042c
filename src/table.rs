// src/table.rs
//! TableData: the rendered results table.
//!
//! Holds exactly what the user sees (the fixed six-column header plus one row
//! per listing), so Copy/Export serialize the view rather than re-deriving it
//! from records.

use crate::listing::{header_row, Listing};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn empty() -> Self {
        Self { headers: None, rows: Vec::new() }
    }

    /// Drop everything, then put back the fixed listing header.
    pub fn reset_with_header(&mut self) {
        self.headers = Some(header_row());
        self.rows.clear();
    }

    pub fn push_listing(&mut self, l: &Listing) {
        self.rows.push(l.to_row());
    }

    pub fn from_listings(listings: &[Listing]) -> Self {
        let mut t = Self::empty();
        t.reset_with_header();
        for l in listings {
            t.push_listing(l);
        }
        t
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Header (if any) followed by data rows, as rendered.
    pub fn rendered_rows(&self) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);
        if let Some(h) = &self.headers {
            out.push(h.clone());
        }
        out.extend(self.rows.iter().cloned());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::HEADERS;

    #[test]
    fn from_listings_puts_header_first() {
        let t = TableData::from_listings(&[Listing::with_href("https://www.google.com/maps/place/x")]);
        assert_eq!(t.ncols(), 6);
        assert_eq!(t.nrows(), 1);
        let all = t.rendered_rows();
        assert_eq!(all[0], HEADERS.iter().map(|h| s!(*h)).collect::<Vec<_>>());
        assert_eq!(all[1][0], "");
        assert_eq!(all[1][5], "https://www.google.com/maps/place/x");
    }

    #[test]
    fn reset_clears_old_rows() {
        let mut t = TableData::from_listings(&[Listing::default(), Listing::default()]);
        t.reset_with_header();
        assert!(t.is_empty());
        assert!(t.headers.is_some());
    }
}
