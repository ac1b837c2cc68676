//! Utility functions for logging, URL handling and file system checks.
//!
//! This module provides helper functions used throughout the application:
//! - String truncation for log previews
//! - Site key derivation from article URLs
//! - File system validation for output directories

use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Truncate a string for logging purposes.
///
/// Long strings are cut after at most `max` bytes, backing off to the
/// previous character boundary so accented text never splits a character,
/// and a byte count indicator is appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log("a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Derive the site key from an article URL.
///
/// The key is the host name without a leading `www.`, which is how sites
/// are registered in the scraper and config tables.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(site_from_url("https://www.lemonde.fr/a"), Some("lemonde.fr".to_string()));
/// assert_eq!(site_from_url("not a url"), None);
/// ```
pub fn site_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    let site = host.strip_prefix("www.").unwrap_or(&host);
    if site.is_empty() {
        None
    } else {
        Some(site.to_string())
    }
}

/// Ensure a directory exists and is writable.
///
/// This function creates the directory if it doesn't exist, then performs
/// a write test by creating and immediately deleting a marker file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    // Try a small sync write using std fs (simpler error surface)
    let marker_path = path.join("..__write_check__");
    stdfs::File::create(&marker_path)?;
    let _ = stdfs::remove_file(&marker_path);
    info!("Output directory is writable");
    Ok(())
}
