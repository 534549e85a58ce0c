//! Decoding of Guardian search responses into [`BusinessNews`] records.
//!
//! The expected shape is:
//!
//! ```text
//! { "response": { "results": [
//!     { "webTitle": "...", "sectionName": "...", "webUrl": "...",
//!       "webPublicationDate": "2020-01-02T03:04:05Z",
//!       "tags": [ { "webTitle": "Jane Doe" }, ... ] },
//!     ...
//! ] } }
//! ```
//!
//! Every field access is checked. A missing or `null` text field becomes an
//! empty string, a missing `tags` array means no author. Only the envelope
//! (`response.results`) is mandatory.
//!
//! A result that is not an object, or whose publication date cannot be
//! normalized, is skipped with a warning; the rest of the page is kept in
//! API order.

use crate::error::{NewsError, Result};
use crate::models::BusinessNews;
use crate::utils::{format_authors, format_publication_date, looks_truncated, truncate_for_log};
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

const RESPONSE: &str = "response";
const RESULTS: &str = "results";
const WEB_TITLE: &str = "webTitle";
const SECTION_NAME: &str = "sectionName";
const WEB_URL: &str = "webUrl";
const PUBLICATION_DATE: &str = "webPublicationDate";
const TAGS: &str = "tags";

/// Decode a response body, mapping every failure to `None`.
///
/// # Arguments
///
/// * `response` - The whole response body as text
///
/// # Returns
///
/// - `Some(articles)` in API order; `Some(vec![])` when the API answered
///   with zero results
/// - `None` for empty text (no parse attempt), malformed JSON, or a body
///   without `response.results`
///
/// # Examples
///
/// ```ignore
/// let body = r#"{"response":{"results":[]}}"#;
/// assert_eq!(extract_business_news(body), Some(vec![]));
/// assert_eq!(extract_business_news("{oops"), None);
/// ```
#[instrument(level = "debug", skip_all, fields(bytes = response.len()))]
pub fn extract_business_news(response: &str) -> Option<Vec<BusinessNews>> {
    if response.trim().is_empty() {
        debug!("Empty response body; nothing to decode");
        return None;
    }

    match decode_results(response) {
        Ok(news) => Some(news),
        Err(NewsError::Decode(e)) if looks_truncated(&e) => {
            warn!(
                error = %e,
                response_preview = %truncate_for_log(response, 300),
                "Response body ends early; discarding"
            );
            None
        }
        Err(e) => {
            warn!(
                error = %e,
                response_preview = %truncate_for_log(response, 300),
                "Could not decode search response"
            );
            None
        }
    }
}

/// Decode a response body into articles, in API order.
///
/// # Errors
///
/// - [`NewsError::Decode`] if `response` is not JSON
/// - [`NewsError::MissingField`] if `response` or `response.results` is
///   missing or has the wrong JSON type
pub fn decode_results(response: &str) -> Result<Vec<BusinessNews>> {
    let root: Value = serde_json::from_str(response)?;

    let results = root
        .get(RESPONSE)
        .and_then(Value::as_object)
        .ok_or(NewsError::MissingField(RESPONSE))?
        .get(RESULTS)
        .and_then(Value::as_array)
        .ok_or(NewsError::MissingField(RESULTS))?;

    let mut news = Vec::with_capacity(results.len());
    for (index, result) in results.iter().enumerate() {
        let Some(fields) = result.as_object() else {
            warn!(index, "Search result is not an object; skipping");
            continue;
        };
        match decode_result(fields) {
            Ok(article) => news.push(article),
            Err(e) => warn!(index, error = %e, "Skipping search result"),
        }
    }

    debug!(
        results = results.len(),
        decoded = news.len(),
        "Decoded search results"
    );
    Ok(news)
}

/// Build one article from a single entry of `results`.
fn decode_result(fields: &Map<String, Value>) -> Result<BusinessNews> {
    let title = opt_string(fields, WEB_TITLE);
    let section_name = opt_string(fields, SECTION_NAME);
    let url = opt_string(fields, WEB_URL);
    let date = format_publication_date(&opt_string(fields, PUBLICATION_DATE))?;

    let contributors: Vec<String> = fields
        .get(TAGS)
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_object)
                .map(|tag| opt_string(tag, WEB_TITLE))
                .collect()
        })
        .unwrap_or_default();
    let author = format_authors(&contributors);

    Ok(BusinessNews::new(title, section_name, author, date, url))
}

/// Text value of `key`; `""` when the key is missing or `null`. Numbers and
/// booleans come back as their JSON text.
fn opt_string(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
