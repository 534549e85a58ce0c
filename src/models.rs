//! Data models for fetched articles and the list that displays them.
//!
//! - [`BusinessNews`]: one decoded article, immutable once built
//! - [`NewsList`]: the caller-owned collection the outputs render
//! - [`NewsPage`]: a serializable snapshot of one fetch, written as JSON

use chrono::Local;
use serde::{Deserialize, Serialize};

/// A single article as decoded from a Guardian search result.
///
/// Built only by the response decoder. Missing text fields are stored as
/// empty strings; a missing contributor list is stored as `None` for
/// `author`, never as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessNews {
    title: String,
    section_name: String,
    author: Option<String>,
    date: String,
    url: String,
}

impl BusinessNews {
    /// Create an article from already-formatted fields.
    ///
    /// # Arguments
    ///
    /// * `title` - Headline, `""` when the API omitted it
    /// * `section_name` - Guardian section, e.g. "Business"
    /// * `author` - Contributor line from [`crate::utils::format_authors`],
    ///   `None` when there are no contributors
    /// * `date` - Publication date as `dd-MM-yyyy`
    /// * `url` - Web URL of the article
    pub fn new(
        title: String,
        section_name: String,
        author: Option<String>,
        date: String,
        url: String,
    ) -> Self {
        Self {
            title,
            section_name,
            author,
            date,
            url,
        }
    }

    /// The article headline.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The Guardian section, e.g. "Business".
    pub fn section_name(&self) -> &str {
        &self.section_name
    }

    /// The contributor line, e.g. "by Jane Doe, John Roe".
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Publication date as `dd-MM-yyyy`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Web URL of the article; the target when the article is opened.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Empty-state text shown while nothing is loaded yet.
pub const LOADING_MESSAGE: &str = "Loading…";
/// Empty-state text shown after a fetch produced nothing to display.
pub const NO_NEWS_MESSAGE: &str = "No business news found.";

/// The list of articles on screen.
///
/// Articles are appended in bulk when a fetch completes and cleared in bulk
/// on reset. Individual articles are never removed.
#[derive(Debug)]
pub struct NewsList {
    articles: Vec<BusinessNews>,
    loading: bool,
}

impl Default for NewsList {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsList {
    /// An empty list in the loading state.
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            loading: true,
        }
    }

    /// Apply the outcome of one fetch. An absent result and an empty one
    /// both leave the list untouched and switch to the "no news" message.
    pub fn apply(&mut self, result: Option<Vec<BusinessNews>>) {
        self.loading = false;
        if let Some(articles) = result {
            self.articles.extend(articles);
        }
    }

    /// Drop every article and go back to the loading state.
    pub fn reset(&mut self) {
        self.articles.clear();
        self.loading = true;
    }

    /// All articles, in the order the API returned them.
    pub fn articles(&self) -> &[BusinessNews] {
        &self.articles
    }

    /// Article at a zero-based position.
    pub fn get(&self, index: usize) -> Option<&BusinessNews> {
        self.articles.get(index)
    }

    /// Number of articles on screen.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// True until the first [`NewsList::apply`] after creation or reset.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Text to show in place of the list when it is empty.
    pub fn empty_message(&self) -> &'static str {
        if self.loading {
            LOADING_MESSAGE
        } else {
            NO_NEWS_MESSAGE
        }
    }
}

/// One fetched page of results, as written to the JSON output.
#[derive(Debug, Deserialize, Serialize)]
pub struct NewsPage {
    /// The date of the fetch in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The local time of the fetch.
    pub local_time: String,
    /// The search topic the page was fetched for.
    pub topic: String,
    pub articles: Vec<BusinessNews>,
}

impl NewsPage {
    /// Snapshot the list as fetched now, stamped with the local date and time.
    ///
    /// # Arguments
    ///
    /// * `topic` - The search topic the list was fetched for
    /// * `list` - The list to copy the articles from
    pub fn capture(topic: &str, list: &NewsList) -> Self {
        let now = Local::now();
        Self {
            local_date: now.date_naive().to_string(),
            local_time: now.time().format("%H:%M:%S").to_string(),
            topic: topic.to_string(),
            articles: list.articles().to_vec(),
        }
    }
}
