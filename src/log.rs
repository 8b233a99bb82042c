// src/log.rs
//! Append-only debug log at `.store/debug.log`.
//!
//! One line per event: `[hh:mm:ss.mmm][LEVEL] message`, time counted from the
//! first write of the process. Browser errors often span several lines; they
//! are folded so every entry stays on one line. Logging never fails the caller.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::LOG_FILE;

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
    Error,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Error => "ERROR",
        }
    }
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// One log line, newline-terminated. Embedded line breaks become ` | `.
pub fn format_line(level: Level, elapsed_ms: u128, msg: &str) -> String {
    let flat = msg.trim_end().lines().map(str::trim_end).collect::<Vec<_>>().join(" | ");
    format!("[{}][{}] {}\n", fmt_elapsed(elapsed_ms), level.tag(), flat)
}

pub fn write_log(level: Level, msg: &str) {
    let mut first = false;
    let start = *START.get_or_init(|| {
        first = true;
        Instant::now()
    });
    let mut text = String::new();
    if first {
        text.push_str(&format!("---- maps_scrape {} ----\n", env!("CARGO_PKG_VERSION")));
    }
    text.push_str(&format_line(level, start.elapsed().as_millis(), msg));

    let Ok(_guard) = LOG_LOCK.lock() else { return };
    if let Some(parent) = Path::new(LOG_FILE).parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        let _ = file.write_all(text.as_bytes());
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Debug, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::Error, &format!($($arg)*))
    };
}
