//! Command-line interface definitions for business_news.
//!
//! Search settings given here override the settings file. The API key and
//! topic can also come from the environment.

use crate::guardian::query::OrderBy;
use clap::{Parser, ValueEnum};

/// How the fetched list is printed on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered plain-text listing
    #[default]
    Text,
    /// Markdown document with linked headlines
    Markdown,
    /// The fetched page as JSON
    Json,
}

/// Command-line arguments for business_news.
///
/// # Examples
///
/// ```sh
/// # Latest business news with the public test key
/// business_news
///
/// # Most relevant "interest rates" articles, as Markdown
/// business_news --topic "interest rates" --order-by relevance -f markdown
///
/// # Open the third article in the browser
/// business_news --open 3
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search topic (the `q` parameter)
    #[arg(short, long, env = "GUARDIAN_TOPIC")]
    pub topic: Option<String>,

    /// Result ordering
    #[arg(short, long, value_enum)]
    pub order_by: Option<OrderBy>,

    /// Guardian API key
    #[arg(long, env = "GUARDIAN_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Search endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Optional path to a YAML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format for stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the fetched page as JSON under this directory
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Open the N-th listed article (1-based) in the default browser
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub open: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["business_news"]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.order_by.is_none());
        assert!(cli.json_output_dir.is_none());
        assert!(cli.open.is_none());
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "business_news",
            "--topic",
            "interest rates",
            "--order-by",
            "relevance",
            "--format",
            "markdown",
            "--json-output-dir",
            "./json",
            "--open",
            "3",
        ]);

        assert_eq!(cli.topic.as_deref(), Some("interest rates"));
        assert_eq!(cli.order_by, Some(OrderBy::Relevance));
        assert_eq!(cli.format, OutputFormat::Markdown);
        assert_eq!(cli.json_output_dir.as_deref(), Some("./json"));
        assert_eq!(cli.open, Some(3));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["business_news", "-t", "banking", "-o", "oldest", "-f", "json", "-c", "s.yaml"]);

        assert_eq!(cli.topic.as_deref(), Some("banking"));
        assert_eq!(cli.order_by, Some(OrderBy::Oldest));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.config.as_deref(), Some("s.yaml"));
    }

    #[test]
    fn test_cli_rejects_zero_index() {
        assert!(Cli::try_parse_from(["business_news", "--open", "0"]).is_err());
    }
}
