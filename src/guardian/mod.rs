//! Client for The Guardian's content search API.
//!
//! A search goes through three steps:
//!
//! 1. **Query**: [`query::QuerySettings`] builds the search URL
//! 2. **Fetch**: [`fetch::fetch_business_news_data`] performs one GET with
//!    fixed connect/read timeouts and reads the whole body
//! 3. **Decode**: [`decode::extract_business_news`] turns the JSON body into
//!    [`crate::models::BusinessNews`] records, keeping API order
//!
//! Failures at any step are logged and surface as `None`.

pub mod decode;
pub mod fetch;
pub mod query;
