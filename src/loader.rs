//! Background loading of search results.
//!
//! [`NewsLoader`] runs the fetch pipeline on its own tokio task so the caller
//! stays responsive, and hands the result back when asked. Starting a new
//! load aborts the one still in flight, so a stale page is never delivered.

use crate::guardian::fetch::fetch_business_news_data;
use crate::models::BusinessNews;
use reqwest::Client;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

type LoadResult = Option<Vec<BusinessNews>>;

/// Owns at most one in-flight search.
#[derive(Debug)]
pub struct NewsLoader {
    client: Client,
    in_flight: Option<JoinHandle<LoadResult>>,
    loads_started: u64,
}

impl NewsLoader {
    /// Create an idle loader that will use `client` for every load.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            in_flight: None,
            loads_started: 0,
        }
    }

    /// Start loading `url` in the background, cancelling any earlier load.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(level = "info", skip_all, fields(%url))]
    pub fn start(&mut self, url: &str) {
        if let Some(previous) = self.in_flight.take() {
            if !previous.is_finished() {
                info!("Cancelling stale in-flight load");
            }
            previous.abort();
        }

        let url = url.to_string();
        let client = self.client.clone();
        self.loads_started += 1;
        debug!(load = self.loads_started, "Spawning load");
        self.in_flight = Some(tokio::spawn(async move {
            fetch_business_news_data(&client, &url).await
        }));
    }

    /// Wait for the current load and take its result.
    ///
    /// Returns `None` when nothing was started, or when the task was
    /// cancelled or panicked.
    pub async fn finish(&mut self) -> LoadResult {
        let handle = self.in_flight.take()?;
        match handle.await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Load task did not complete");
                None
            }
        }
    }

    /// Whether a load is currently running or waiting to be collected.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Number of loads started over the lifetime of this loader.
    pub fn loads_started(&self) -> u64 {
        self.loads_started
    }
}

impl Drop for NewsLoader {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
