//! # Business News
//!
//! Client for The Guardian's content search API: builds the search URL,
//! performs one GET, and decodes the JSON response into
//! [`models::BusinessNews`] records ready for display.
//!
//! ```ignore
//! let client = guardian::fetch::build_client()?;
//! let url = config::Settings::default().query().to_url()?;
//! let articles = guardian::fetch::fetch_business_news_data(&client, url.as_str()).await;
//! ```
//!
//! Every failure (bad URL, network, non-200, malformed JSON) is logged and
//! returned as `None`. Results are never retried or cached.

pub mod cli;
pub mod config;
pub mod error;
pub mod guardian;
pub mod loader;
pub mod models;
pub mod outputs;
pub mod utils;
