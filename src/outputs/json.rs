//! JSON output of fetched pages.
//!
//! Files are organized by the date of the fetch, one file per topic:
//! `{json_output_dir}/{local_date}/{topic-slug}.json`. A later fetch of the
//! same topic on the same day replaces the earlier file.

use crate::error::Result;
use crate::models::NewsPage;
use crate::utils::slugify;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize a page to pretty-printed JSON.
///
/// # Errors
///
/// [`crate::error::NewsError::Decode`] if serialization fails.
pub fn to_json(page: &NewsPage) -> Result<String> {
    Ok(serde_json::to_string_pretty(page)?)
}

/// Write a [`NewsPage`] to a JSON file with a date-based directory structure.
///
/// # Arguments
///
/// * `page` - The fetched page to serialize
/// * `json_output_dir` - Base directory for JSON output
///
/// # Returns
///
/// The path written: `{json_output_dir}/{local_date}/{topic-slug}.json`,
/// with `search.json` when the topic has no usable characters.
///
/// # Errors
///
/// [`crate::error::NewsError::Io`] if the directory cannot be created or
/// the file cannot be written.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir.as_ref().display()))]
pub async fn write_news_page(
    page: &NewsPage,
    json_output_dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let json = to_json(page)?;

    let full_json_dir = json_output_dir.as_ref().join(&page.local_date);
    info!(full_json_dir = %full_json_dir.display(), "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(full_json_dir = %full_json_dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let mut file_stem = slugify(&page.topic);
    if file_stem.is_empty() {
        file_stem.push_str("search");
    }
    let output_json_filename = full_json_dir.join(format!("{}.json", file_stem));

    fs::write(&output_json_filename, json).await?;
    info!(path = %output_json_filename.display(), articles = page.articles.len(), "Wrote JSON file");

    Ok(output_json_filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BusinessNews;

    fn page(topic: &str) -> NewsPage {
        NewsPage {
            local_date: "2025-05-06".to_string(),
            local_time: "08:00:00".to_string(),
            topic: topic.to_string(),
            articles: vec![BusinessNews::new(
                "T".to_string(),
                "Business".to_string(),
                Some("by Jane".to_string()),
                "02-01-2020".to_string(),
                "http://x".to_string(),
            )],
        }
    }

    #[tokio::test]
    async fn test_write_news_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_news_page(&page("Interest Rates"), dir.path()).await.unwrap();

        assert_eq!(path, dir.path().join("2025-05-06").join("interest-rates.json"));
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        let back: NewsPage = serde_json::from_str(&written).unwrap();
        assert_eq!(back.topic, "Interest Rates");
        assert_eq!(back.articles.len(), 1);
        assert_eq!(back.articles[0].author(), Some("by Jane"));
    }

    #[tokio::test]
    async fn test_write_news_page_empty_slug() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_news_page(&page("!!!"), dir.path()).await.unwrap();
        assert!(path.ends_with("2025-05-06/search.json"));
    }
}
