//! Search settings: topic, ordering, API key and endpoint.
//!
//! Settings come from an optional YAML file and are then overridden by
//! whatever the command line (or its environment variables) provides.
//!
//! ```yaml
//! topic: business
//! order_by: newest
//! api_key: test
//! endpoint: https://content.guardianapis.com/search
//! ```

use crate::cli::Cli;
use crate::error::Result;
use crate::guardian::query::{DEFAULT_ENDPOINT, OrderBy, QuerySettings};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument};

/// Topic searched when none is configured.
pub const DEFAULT_TOPIC: &str = "business";
/// The Guardian's public developer key.
pub const DEFAULT_API_KEY: &str = "test";

/// Search settings; every key is optional in the YAML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub topic: String,
    pub order_by: OrderBy,
    pub api_key: String,
    pub endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            topic: DEFAULT_TOPIC.to_string(),
            order_by: OrderBy::default(),
            api_key: DEFAULT_API_KEY.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from a YAML file. Keys that are absent keep their
    /// defaults.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = tokio::fs::read_to_string(path.as_ref()).await?;
        let settings = Self::from_yaml(&text)?;
        info!(topic = %settings.topic, order_by = %settings.order_by, "Loaded settings file");
        Ok(settings)
    }

    /// Parse settings from YAML text.
    ///
    /// # Arguments
    ///
    /// * `text` - YAML mapping with any of `topic`, `order_by`, `api_key`,
    ///   `endpoint`; empty text yields the defaults
    ///
    /// # Errors
    ///
    /// [`crate::error::NewsError::Config`] when the text is not a valid
    /// mapping or a value has the wrong type (e.g. an unknown `order_by`).
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Apply command-line values on top of these settings.
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(topic) = &cli.topic {
            self.topic = topic.clone();
        }
        if let Some(order_by) = cli.order_by {
            self.order_by = order_by;
        }
        if let Some(api_key) = &cli.api_key {
            self.api_key = api_key.clone();
        }
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        self
    }

    /// Borrow these settings as URL-building parameters.
    pub fn query(&self) -> QuerySettings<'_> {
        QuerySettings {
            endpoint: &self.endpoint,
            topic: &self.topic,
            order_by: self.order_by,
            api_key: &self.api_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NewsError;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.topic, "business");
        assert_eq!(settings.order_by, OrderBy::Newest);
        assert_eq!(settings.api_key, "test");
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml("topic: economics\norder_by: relevance\n").unwrap();
        assert_eq!(settings.topic, "economics");
        assert_eq!(settings.order_by, OrderBy::Relevance);
        assert_eq!(settings.api_key, DEFAULT_API_KEY);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Settings::from_yaml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = Settings::from_yaml("order_by: sideways").unwrap_err();
        assert!(matches!(err, NewsError::Config(_)));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = Settings::from_yaml("topic: economics\napi_key: from-file\n").unwrap();
        let cli = Cli::parse_from(["business_news", "--topic", "markets", "--order-by", "oldest"]);
        let settings = file.merge_cli(&cli);
        assert_eq!(settings.topic, "markets");
        assert_eq!(settings.order_by, OrderBy::Oldest);
        assert_eq!(settings.api_key, "from-file");
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        tokio::fs::write(&path, "topic: banking\n").await.unwrap();

        let settings = Settings::load(&path).await.unwrap();
        assert_eq!(settings.topic, "banking");
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = Settings::load("/definitely/not/here.yaml").await.unwrap_err();
        assert!(matches!(err, NewsError::Io(_)));
    }

    #[test]
    fn test_query_uses_settings() {
        let settings = Settings {
            topic: "banking".to_string(),
            ..Settings::default()
        };
        let url = settings.query().to_url().unwrap();
        assert!(url.as_str().contains("q=banking"));
    }
}
