//! Formatting helpers used by the decoder and the outputs.
//!
//! - Publication date normalization (`yyyy-MM-ddTHH:mm:ssZ` to `dd-MM-yyyy`)
//! - Contributor line building with truncation
//! - String truncation and slugification for logs and file names
//! - File system validation for output directories

use crate::error::{NewsError, Result};
use chrono::NaiveDateTime;
use itertools::Itertools;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Input format of `webPublicationDate`. The trailing `Z` is literal; the
/// timestamp is always UTC.
const PUBLICATION_DATE_IN: &str = "%Y-%m-%dT%H:%M:%SZ";
/// Display format of an article date.
const PUBLICATION_DATE_OUT: &str = "%d-%m-%Y";
/// Length of `yyyy-MM-ddTHH:mm:ssZ`.
const PUBLICATION_DATE_LEN: usize = 20;

/// Contributors named before the line is cut with `", (...)"`.
pub const MAX_LISTED_CONTRIBUTORS: usize = 5;

/// Convert a Guardian publication timestamp to the display date.
///
/// # Arguments
///
/// * `value` - The `webPublicationDate` text, e.g. `"2020-01-02T03:04:05Z"`
///
/// # Returns
///
/// The date as `dd-MM-yyyy`, read as UTC.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_publication_date("2020-01-02T03:04:05Z")?, "02-01-2020");
/// ```
///
/// # Errors
///
/// [`NewsError::Format`] when `value` does not match `yyyy-MM-ddTHH:mm:ssZ`
/// exactly: every field zero-padded, no sign, no surrounding whitespace, no
/// fractional seconds or offsets, and no leap second.
pub fn format_publication_date(value: &str) -> Result<String> {
    let format_error = |reason: String| NewsError::Format {
        value: value.to_string(),
        reason,
    };

    check_publication_date_shape(value).map_err(|reason| format_error(reason.to_string()))?;
    let parsed = NaiveDateTime::parse_from_str(value, PUBLICATION_DATE_IN)
        .map_err(|e| format_error(e.to_string()))?;
    Ok(parsed.and_utc().format(PUBLICATION_DATE_OUT).to_string())
}

/// Reject anything that is not exactly `dddd-dd-ddTdd:dd:ddZ` before chrono
/// sees it; chrono alone accepts unpadded fields, signs and leap seconds.
fn check_publication_date_shape(value: &str) -> std::result::Result<(), &'static str> {
    let bytes = value.as_bytes();
    if bytes.len() != PUBLICATION_DATE_LEN {
        return Err("expected 20 characters");
    }
    for (i, &b) in bytes.iter().enumerate() {
        let ok = match i {
            4 | 7 => b == b'-',
            10 => b == b'T',
            13 | 16 => b == b':',
            19 => b == b'Z',
            _ => b.is_ascii_digit(),
        };
        if !ok {
            return Err("does not match yyyy-MM-ddTHH:mm:ssZ");
        }
    }
    if &bytes[17..19] >= b"60".as_slice() {
        return Err("seconds out of range");
    }
    Ok(())
}

/// Build the contributor line for an article.
///
/// # Arguments
///
/// * `names` - Contributor names in the order the API listed them
///
/// # Returns
///
/// `None` for an empty slice. Otherwise the names joined with `", "` after
/// a `"by "` prefix. With more than [`MAX_LISTED_CONTRIBUTORS`] names only
/// the first five are listed, followed by `", (...)"`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_authors(&["A", "B", "C"]), Some("by A, B, C".to_string()));
/// assert_eq!(
///     format_authors(&["A", "B", "C", "D", "E", "F"]),
///     Some("by A, B, C, D, E, (...)".to_string())
/// );
/// ```
pub fn format_authors<S: AsRef<str>>(names: &[S]) -> Option<String> {
    if names.is_empty() {
        return None;
    }

    let listed = names
        .iter()
        .take(MAX_LISTED_CONTRIBUTORS)
        .map(AsRef::as_ref)
        .join(", ");

    if names.len() > MAX_LISTED_CONTRIBUTORS {
        Some(format!("by {}, (...)", listed))
    } else {
        Some(format!("by {}", listed))
    }
}

/// Truncate a string for logging purposes.
///
/// # Arguments
///
/// * `s` - The string to potentially truncate
/// * `max` - Maximum number of bytes to keep
///
/// # Returns
///
/// The original string if it fits, otherwise at most `max` bytes (cut on a
/// char boundary) with `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Detect if a serde_json error indicates truncated/incomplete JSON.
///
/// A body cut off mid-transfer fails with an EOF error rather than a syntax
/// error; the decoder logs the two differently.
pub fn looks_truncated(e: &serde_json::Error) -> bool {
    use serde_json::error::Category;
    matches!(e.classify(), Category::Eof)
}

/// Convert a topic to a file-name-friendly slug.
///
/// ```ignore
/// assert_eq!(slugify("Stock Markets"), "stock-markets");
/// ```
pub fn slugify(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .replace(|c: char| !c.is_alphanumeric() && c != ' ' && c != '-', "")
        .replace(' ', "-")
}

/// Capitalize the first character of a string.
pub fn upcase(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then creates and removes a scratch file in it.
///
/// # Errors
///
/// [`NewsError::Io`] if the directory cannot be created or written to.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<()> {
    fs::create_dir_all(path).await?;
    let scratch_path = format!("{}/..__write_check__", path.trim_end_matches('/'));
    stdfs::File::create(&scratch_path)?;
    let _ = stdfs::remove_file(&scratch_path);
    info!("Output directory is writable");
    Ok(())
}
