//! # Business News
//!
//! Searches The Guardian's content API for a topic and lists the matching
//! articles with their section, contributors and publication date.
//!
//! ## Usage
//!
//! ```sh
//! business_news --topic business --order-by newest
//! business_news -f markdown -j ./json
//! business_news --open 1
//! ```
//!
//! ## Architecture
//!
//! 1. **Settings**: defaults, then the YAML file, then CLI flags
//! 2. **Query**: build the search URL from the settings
//! 3. **Load**: fetch and decode on a background task
//! 4. **Output**: print the list, optionally write JSON, optionally open an
//!    article in the browser
//!
//! Logs go to stderr so stdout carries only the rendered list.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use business_news::cli::{Cli, OutputFormat};
use business_news::config::Settings;
use business_news::guardian::fetch::build_client;
use business_news::loader::NewsLoader;
use business_news::models::{NewsList, NewsPage};
use business_news::outputs::{json, listing, markdown};
use business_news::utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("business_news starting up");

    let args = Cli::parse();
    debug!(?args.config, ?args.format, ?args.json_output_dir, "Parsed CLI arguments");

    // ---- Settings ----
    let settings = match &args.config {
        Some(path) => Settings::load(path).await?,
        None => Settings::default(),
    }
    .merge_cli(&args);
    let request_url = settings.query().to_url()?;
    info!(topic = %settings.topic, order_by = %settings.order_by, endpoint = %settings.endpoint, "Search configured");

    // Early check: ensure JSON output dir is writable
    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e.into());
        }
    }

    // ---- Load ----
    let mut loader = NewsLoader::new(build_client()?);
    let mut list = NewsList::new();
    loader.start(request_url.as_str());
    list.apply(loader.finish().await);
    info!(count = list.len(), "Articles loaded");

    // ---- Output ----
    let page = NewsPage::capture(&settings.topic, &list);
    match args.format {
        OutputFormat::Text => print!("{}", listing::render(&list)),
        OutputFormat::Markdown => print!("{}", markdown::render(&page)),
        OutputFormat::Json => println!("{}", json::to_json(&page)?),
    }

    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = json::write_news_page(&page, dir).await {
            error!(error = %e, "Failed to write JSON output");
        }
    }

    // ---- Click-through ----
    if let Some(n) = args.open {
        let article = usize::try_from(n - 1).ok().and_then(|i| list.get(i));
        match article {
            Some(article) => {
                info!(url = %article.url(), "Opening article in browser");
                if let Err(e) = open::that(article.url()) {
                    error!(url = %article.url(), error = %e, "Could not open browser");
                }
            }
            None => warn!(requested = n, available = list.len(), "No article at that position"),
        }
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, millis = elapsed.as_millis() as u64, "Execution complete");

    Ok(())
}
