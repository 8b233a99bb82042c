// src/extract.rs
//! # Listing extraction
//!
//! Reads a serialized snapshot of the results page and pulls one [`Listing`]
//! out of every visible place link. Pure functions over HTML, so everything
//! here is testable offline against captured fixtures.
//!
//! ## Where the data lives
//! - every listing has an anchor `a[href^="https://www.google.com/maps/place"]`
//! - its card is the nearest element (anchor included) whose `jsaction`
//!   mentions `mouseover:pane`
//! - title: `.fontHeadlineSmall`
//! - rating + reviews: `aria-label` of the card's first `[role="img"]`,
//!   shaped like `"4.5 stars 120 Reviews"`
//! - website: first card link that is not a place permalink, compared after
//!   resolving against the page address (relative links included)
//! - phone: first phone-shaped run in the card's text content
//!
//! Anything missing degrades to an empty field. A missing card still yields a
//! record carrying just the permalink.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config::consts::*;
use crate::listing::Listing;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

struct Selectors {
    anchor: Selector,
    title: Selector,
    rating_img: Selector,
    any_link: Selector,
    end_heading: Selector,
}

impl Selectors {
    fn new() -> Self {
        Self {
            anchor: selector(LISTING_ANCHOR_SELECTOR),
            title: selector(TITLE_SELECTOR),
            rating_img: selector(RATING_IMG_SELECTOR),
            any_link: selector("a[href]"),
            end_heading: selector(END_HEADING_SELECTOR),
        }
    }
}

/// Parsed page snapshot.
pub struct Snapshot {
    doc: Html,
    sel: Selectors,
    base: Option<Url>,
}

impl Snapshot {
    /// Links are taken as written.
    pub fn parse(html: &str) -> Self {
        Self { doc: Html::parse_document(html), sel: Selectors::new(), base: None }
    }

    /// Links resolve against `page_url`, the way the live DOM reports them.
    /// An unparseable address behaves like [`Snapshot::parse`].
    pub fn parse_at(html: &str, page_url: &str) -> Self {
        let mut snap = Self::parse(html);
        snap.base = Url::parse(page_url).ok();
        snap
    }

    fn resolve(&self, raw: &str) -> String {
        self.base
            .as_ref()
            .and_then(|b| b.join(raw).ok())
            .map(String::from)
            .unwrap_or_else(|| s!(raw))
    }

    /// One record per listing anchor, in document order. No dedup.
    pub fn listings(&self) -> Vec<Listing> {
        self.doc
            .select(&self.sel.anchor)
            .map(|link| self.listing_for(link))
            .collect()
    }

    /// True once the feed shows its closing "end of the list" heading.
    pub fn end_of_list(&self) -> bool {
        self.doc
            .select(&self.sel.end_heading)
            .any(|h| text_content(h).contains(END_OF_LIST_TEXT))
    }

    fn listing_for(&self, link: ElementRef<'_>) -> Listing {
        let href = self.resolve(link.value().attr("href").unwrap_or_default());

        let Some(card) = listing_card(link) else {
            return Listing::with_href(href);
        };

        let title = card
            .select(&self.sel.title)
            .next()
            .map(text_content)
            .unwrap_or_default();

        let (rating, review_count) = card
            .select(&self.sel.rating_img)
            .next()
            .and_then(|img| img.value().attr("aria-label"))
            .and_then(parse_rating_label)
            .unwrap_or_default();

        let place_prefix = join!(PLACE_URL_PREFIX, "/");
        let website = card
            .select(&self.sel.any_link)
            .filter_map(|a| a.value().attr("href"))
            .map(|h| self.resolve(h))
            .find(|h| !h.starts_with(place_prefix.as_str()))
            .unwrap_or_default();

        let phone = find_phone(&text_content(card));

        Listing { title, rating, review_count, phone, website, href }
    }
}

/// Convenience: parse and extract in one go.
pub fn parse_listings(html: &str) -> Vec<Listing> {
    Snapshot::parse(html).listings()
}

/// Nearest element, starting at `el` itself, carrying the listing marker.
fn listing_card(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    std::iter::once(el)
        .chain(el.ancestors().filter_map(ElementRef::wrap))
        .find(|e| {
            e.value()
                .attr(LISTING_MARKER_ATTR)
                .is_some_and(|v| v.contains(LISTING_MARKER_VALUE))
        })
}

/// Concatenated text nodes, like the DOM's `textContent`.
fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// `"4.5 stars 120 Reviews"` → `("4.5", "(120)")`.
/// Labels without "stars" are not ratings.
pub fn parse_rating_label(label: &str) -> Option<(String, String)> {
    if !label.contains("stars") {
        return None;
    }
    let parts: Vec<&str> = label.split(' ').collect();
    let rating = s!(parts[0]);
    let reviews = match parts.get(2) {
        Some(n) if !n.is_empty() => format!("({n})"),
        _ => s!(),
    };
    Some((rating, reviews))
}

/// First phone-shaped substring, or empty.
pub fn find_phone(text: &str) -> String {
    PHONE_RE
        .find(text)
        .map(|m| s!(m.as_str()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(inner: &str) -> String {
        format!(
            r#"<html><body><div role="feed">
            <div jsaction="mouseover:pane.wfvdle5;mouseout:pane.wfvdle5">{inner}</div>
            </div></body></html>"#
        )
    }

    #[test]
    fn rating_label_splits_rating_and_reviews() {
        assert_eq!(
            parse_rating_label("4.5 stars 120 Reviews"),
            Some((s!("4.5"), s!("(120)")))
        );
    }

    #[test]
    fn rating_label_without_count_has_empty_reviews() {
        assert_eq!(parse_rating_label("4.0 stars"), Some((s!("4.0"), s!())));
    }

    #[test]
    fn non_rating_label_is_ignored() {
        assert_eq!(parse_rating_label("Photo of the storefront"), None);
    }

    #[test]
    fn phone_variants() {
        assert_eq!(find_phone("Open · (555) 123-4567 · Closes 9"), "(555) 123-4567");
        assert_eq!(find_phone("call +1 555.123.4567 now"), "+1 555.123.4567");
        assert_eq!(find_phone("5551234567"), "5551234567");
    }

    #[test]
    fn phone_digits_are_ascii_only() {
        assert_eq!(find_phone("tel \u{665}\u{665}\u{665}\u{661}\u{662}\u{663}\u{664}\u{665}\u{666}\u{667}"), "");
    }

    #[test]
    fn missing_phone_is_empty_string() {
        let html = card(
            r#"<a href="https://www.google.com/maps/place/Quiet+Shop"></a>
               <div class="fontHeadlineSmall">Quiet Shop</div><span>No phone here</span>"#,
        );
        let got = parse_listings(&html);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].phone, "");
        assert_eq!(got[0].title, "Quiet Shop");
    }

    #[test]
    fn full_card_extracts_every_field() {
        let html = card(
            r#"<a href="https://www.google.com/maps/place/Joe%27s+Pizza/data=!4m7"></a>
               <div class="fontHeadlineSmall">Joe's Pizza</div>
               <span role="img" aria-label="4.5 stars 120 Reviews"></span>
               <span>Pizza · 7 Carmine St</span><span>(212) 366-1182</span>
               <a href="https://www.joespizzanyc.com/">Website</a>"#,
        );
        let got = parse_listings(&html);
        assert_eq!(got, vec![Listing {
            title: s!("Joe's Pizza"),
            rating: s!("4.5"),
            review_count: s!("(120)"),
            phone: s!("(212) 366-1182"),
            website: s!("https://www.joespizzanyc.com/"),
            href: s!("https://www.google.com/maps/place/Joe%27s+Pizza/data=!4m7"),
        }]);
    }

    #[test]
    fn relative_place_link_is_not_the_website() {
        let html = card(
            r#"<a href="https://www.google.com/maps/place/A/data=!4m7"></a>
               <a href="/maps/place/A/reviews">Reviews</a>
               <a href="https://a.example/">Website</a>"#,
        );
        let got = Snapshot::parse_at(&html, "https://www.google.com/maps/search/a").listings();
        assert_eq!(got[0].website, "https://a.example/");
        assert_eq!(got[0].href, "https://www.google.com/maps/place/A/data=!4m7");
    }

    #[test]
    fn relative_website_gets_scheme_and_host() {
        let html = card(
            r#"<a href="https://www.google.com/maps/place/B"></a>
               <a href="/url?q=https://b.example/">Website</a>"#,
        );
        let got = Snapshot::parse_at(&html, "https://www.google.com/maps/search/b").listings();
        assert_eq!(got[0].website, "https://www.google.com/url?q=https://b.example/");
    }

    #[test]
    fn link_outside_card_keeps_only_href() {
        let html = r#"<html><body>
            <a href="https://www.google.com/maps/place/Loose">x</a>
            </body></html>"#;
        let got = parse_listings(html);
        assert_eq!(got, vec![Listing::with_href("https://www.google.com/maps/place/Loose")]);
    }

    #[test]
    fn end_heading_detected_only_with_text() {
        let done = r#"<div role="heading" aria-level="3"><span>You've reached the end of the list.</span></div>"#;
        let other = r#"<div role="heading" aria-level="3">Results</div>"#;
        assert!(Snapshot::parse(done).end_of_list());
        assert!(!Snapshot::parse(other).end_of_list());
    }
}
