// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::{CSV_EXT, CSV_MIME, DEFAULT_FILE_STEM};

/// User filename input → download filename.
/// Blank → `google-maps-data.csv`; otherwise every non-ASCII-alphanumeric
/// code unit becomes `_`, the rest is lowercased, and `.csv` is appended.
pub fn sanitize_filename(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return join!(DEFAULT_FILE_STEM, ".", CSV_EXT);
    }

    let mut out = String::with_capacity(trimmed.len() + 4);
    for ch in trimmed.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else {
            // one underscore per UTF-16 unit, like the browser-side regex
            for _ in 0..ch.len_utf16() { out.push('_'); }
        }
    }
    join!(out, ".", CSV_EXT)
}

/// Save `csv` as `filename` in `dir`, the way a browser download would:
/// create the directory if needed and never clobber an existing file
/// (`name (1).csv`, `name (2).csv`, …). Returns the path written.
pub fn write_download(dir: &Path, filename: &str, csv: &str) -> Result<PathBuf, Box<dyn Error>> {
    ensure_directory(dir)?;
    let path = unique_path(dir, filename);
    fs::write(&path, csv.as_bytes())?;
    logf!("Download: {} ({}, {} bytes)", path.display(), CSV_MIME, csv.len());
    Ok(path)
}

/// First free `dir/filename`, then `dir/<stem> (N).<ext>` with N from 1.
pub fn unique_path(dir: &Path, filename: &str) -> PathBuf {
    let first = dir.join(filename);
    if !first.exists() {
        return first;
    }

    let p = Path::new(filename);
    let stem = p.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let ext = p.extension().map(|s| s.to_string_lossy().into_owned());

    let mut n = 1usize;
    loop {
        let name = match &ext {
            Some(ext) => format!("{stem} ({n}).{ext}"),
            None => format!("{stem} ({n})"),
        };
        let candidate = dir.join(name);
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.as_os_str().is_empty() { return Ok(()); }
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
