// src/config/consts.rs

// Target page
pub const SEARCH_URL_PATTERN: &str = "://www.google.com/maps/search";
pub const SEARCH_URL_BASE: &str = "https://www.google.com/maps/search/";
pub const PLACE_URL_PREFIX: &str = "https://www.google.com/maps/place";

// Popup messages
pub const READY_MESSAGE: &str = "Let's scrape Google Maps!";
pub const NAV_LINK_TEXT: &str = "Go to Google Maps Search.";

// DOM selectors (owned by a third party; expect drift)
pub const FEED_SELECTOR: &str = r#"[role="feed"]"#;
pub const LISTING_ANCHOR_SELECTOR: &str = r#"a[href^="https://www.google.com/maps/place"]"#;
pub const LISTING_MARKER_ATTR: &str = "jsaction";
pub const LISTING_MARKER_VALUE: &str = "mouseover:pane";
pub const TITLE_SELECTOR: &str = ".fontHeadlineSmall";
pub const RATING_IMG_SELECTOR: &str = r#"[role="img"]"#;
pub const END_HEADING_SELECTOR: &str = r#"[role="heading"][aria-level="3"]"#;
pub const END_OF_LIST_TEXT: &str = "You've reached the end of the list";
pub const PHONE_PATTERN: &str = r"(\+[0-9]{1,2}\s)?\(?[0-9]{3}\)?[\s.-]?[0-9]{3}[\s.-]?[0-9]{4}";

// Scroll loop
pub const SCROLL_DELAY_MS: u64 = 2000;
pub const STALL_LIMIT: u32 = 5;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE_STEM: &str = "google-maps-data";
pub const CSV_EXT: &str = "csv";
pub const CSV_MIME: &str = "text/csv";

// Local files
pub const LOG_FILE: &str = ".store/debug.log";

// Browser
pub const NAV_TIMEOUT_SECS: u64 = 30;
pub const FEED_TIMEOUT_SECS: u64 = 20;
