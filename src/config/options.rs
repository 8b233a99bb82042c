// src/config/options.rs
use std::path::{ Path, PathBuf };
use std::time::Duration;

use super::consts::*;
use crate::browser::BrowserConfig;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
    pub browser: BrowserConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Pause after each scroll so lazy-loaded entries can render
    pub delay_ms: u64,
    /// Consecutive no-growth waits before giving up
    pub stall_limit: u32,
    /// Skip records whose map link was already collected.
    /// Off by default: every pass re-appends everything visible.
    pub dedup: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            delay_ms: SCROLL_DELAY_MS,
            stall_limit: STALL_LIMIT,
            dedup: false,
        }
    }
}

impl ScrapeOptions {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// Where "downloads" land
    out_dir: PathBuf,
    /// Double embedded quotes. Off keeps the plain `"cell"` output.
    pub escape_quotes: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            escape_quotes: false,
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI/CLI text into the download directory. Blank keeps the default.
    pub fn set_out_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(crate::file::normalize_separators(s))
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_extension_behavior() {
        let o = AppOptions::default();
        assert_eq!(o.scrape.delay(), Duration::from_millis(2000));
        assert_eq!(o.scrape.stall_limit, 5);
        assert!(!o.scrape.dedup);
        assert!(!o.export.escape_quotes);
        assert_eq!(o.export.out_dir(), Path::new("out"));
    }

    #[test]
    fn blank_out_dir_resets_to_default() {
        let mut e = ExportOptions::default();
        e.set_out_dir("  exports ");
        assert_eq!(e.out_dir(), Path::new("exports"));
        e.set_out_dir("   ");
        assert_eq!(e.out_dir(), Path::new(DEFAULT_OUT_DIR));
    }
}
