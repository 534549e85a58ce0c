//! One search request against the Guardian API.
//!
//! [`fetch_business_news_data`] is the single entry point the list layer
//! uses. It performs exactly one GET, reads the whole body into memory, and
//! decodes it. Every failure is logged and reported as `None`; nothing is
//! retried.

use crate::error::{NewsError, Result};
use crate::guardian::decode::extract_business_news;
use crate::guardian::query::parse_http_url;
use crate::models::BusinessNews;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{error, info, instrument, warn};
use url::Url;

/// Time allowed to establish the connection.
pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(15_000);
/// Time allowed between reads once connected.
pub const READ_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Build the HTTP client used for search requests, with the standard
/// [`CONNECT_TIMEOUT`] and [`READ_TIMEOUT`].
///
/// # Errors
///
/// [`NewsError::Network`] if the TLS backend cannot be initialised.
pub fn build_client() -> Result<Client> {
    build_client_with(CONNECT_TIMEOUT, READ_TIMEOUT)
}

/// Build a search client with explicit timeouts.
///
/// # Arguments
///
/// * `connect` - Time allowed to establish the connection
/// * `read` - Time allowed for each read, including waiting for the headers
///
/// # Returns
///
/// A [`Client`] that can be cloned cheaply and shared between loads.
pub fn build_client_with(connect: Duration, read: Duration) -> Result<Client> {
    let client = Client::builder()
        .connect_timeout(connect)
        .read_timeout(read)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;
    Ok(client)
}

/// Query the Guardian API and return the decoded articles.
///
/// # Arguments
///
/// * `client` - Client from [`build_client`]; carries the timeouts
/// * `request_url` - Fully built search URL, see
///   [`crate::guardian::query::QuerySettings::to_url`]
///
/// # Returns
///
/// - `Some(articles)` in API order when the request succeeded and the body
///   decoded (possibly zero articles)
/// - `None` when the URL is malformed (no request is made), the request
///   failed or timed out, the status was not 200, or the body did not decode
#[instrument(level = "info", skip_all, fields(url = %request_url))]
pub async fn fetch_business_news_data(
    client: &Client,
    request_url: &str,
) -> Option<Vec<BusinessNews>> {
    let url = match parse_http_url(request_url) {
        Ok(url) => url,
        Err(e) => {
            error!(error = %e, "Problem building the URL");
            return None;
        }
    };

    let body = match make_http_request(client, url).await {
        Ok(body) => body,
        Err(e) if e.is_network() => {
            warn!(error = %e, "Problem making the HTTP request");
            return None;
        }
        Err(e) => {
            error!(error = %e, "Problem retrieving the search results");
            return None;
        }
    };

    let news = extract_business_news(&body);
    match &news {
        Some(articles) => info!(count = articles.len(), "Fetched business news"),
        None => warn!("Search response produced no articles"),
    }
    news
}

/// Perform the GET and return the full body as text.
///
/// The response is owned by this function, so its connection is released
/// on every return path.
///
/// # Errors
///
/// - [`NewsError::Network`] on connect, timeout, or body read failures
/// - [`NewsError::Status`] for any status other than 200; the body is not read
pub async fn make_http_request(client: &Client, url: Url) -> Result<String> {
    let t0 = Instant::now();
    let response = client.get(url).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(NewsError::Status(status.as_u16()));
    }

    let bytes = response.bytes().await?;
    let body = String::from_utf8_lossy(&bytes).into_owned();
    info!(
        bytes = body.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Received search response"
    );
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SAMPLE: &str = r#"{"response":{"results":[{"webTitle":"T","sectionName":"Business","webUrl":"http://x","webPublicationDate":"2020-01-02T03:04:05Z","tags":[{"webTitle":"Jane"}]}]}}"#;

    async fn serve(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(template)
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = serve(ResponseTemplate::new(200).set_body_string(SAMPLE)).await;
        let client = build_client().unwrap();

        let news = fetch_business_news_data(&client, &format!("{}/search", server.uri()))
            .await
            .unwrap();

        assert_eq!(news.len(), 1);
        assert_eq!(news[0].title(), "T");
        assert_eq!(news[0].author(), Some("by Jane"));
        assert_eq!(news[0].date(), "02-01-2020");
    }

    #[tokio::test]
    async fn test_fetch_sends_query_string() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "business"))
            .and(query_param("show-tags", "contributor"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE))
            .expect(1)
            .mount(&server)
            .await;
        let client = build_client().unwrap();

        let url = format!("{}/search?q=business&show-tags=contributor", server.uri());
        assert!(fetch_business_news_data(&client, &url).await.is_some());
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_absent() {
        let server = serve(ResponseTemplate::new(404).set_body_string(SAMPLE)).await;
        let client = build_client().unwrap();

        let news = fetch_business_news_data(&client, &format!("{}/search", server.uri())).await;
        assert!(news.is_none());
    }

    #[tokio::test]
    async fn test_non_ok_status_is_reported() {
        let server = serve(ResponseTemplate::new(500)).await;
        let client = build_client().unwrap();

        let url = Url::parse(&format!("{}/search", server.uri())).unwrap();
        let err = make_http_request(&client, url).await.unwrap_err();
        assert!(matches!(err, NewsError::Status(500)));
    }

    #[tokio::test]
    async fn test_other_success_statuses_are_failures() {
        let server = serve(ResponseTemplate::new(203).set_body_string(SAMPLE)).await;
        let client = build_client().unwrap();

        let news = fetch_business_news_data(&client, &format!("{}/search", server.uri())).await;
        assert!(news.is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_absent() {
        let server = serve(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;
        let client = build_client().unwrap();

        let news = fetch_business_news_data(&client, &format!("{}/search", server.uri())).await;
        assert!(news.is_none());
    }

    #[tokio::test]
    async fn test_empty_body_is_absent() {
        let server = serve(ResponseTemplate::new(200)).await;
        let client = build_client().unwrap();

        let news = fetch_business_news_data(&client, &format!("{}/search", server.uri())).await;
        assert!(news.is_none());
    }

    #[tokio::test]
    async fn test_malformed_url_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE))
            .expect(0)
            .mount(&server)
            .await;
        let client = build_client().unwrap();

        assert!(fetch_business_news_data(&client, "not a url").await.is_none());
        assert!(fetch_business_news_data(&client, "").await.is_none());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[test]
    fn test_standard_timeouts() {
        assert_eq!(CONNECT_TIMEOUT, Duration::from_millis(15_000));
        assert_eq!(READ_TIMEOUT, Duration::from_millis(10_000));
        assert!(build_client().is_ok());
    }

    #[tokio::test]
    async fn test_read_timeout_is_absent() {
        let server = serve(
            ResponseTemplate::new(200)
                .set_body_string(SAMPLE)
                .set_delay(Duration::from_secs(2)),
        )
        .await;
        let client = build_client_with(CONNECT_TIMEOUT, Duration::from_millis(200)).unwrap();

        let started = Instant::now();
        let news = fetch_business_news_data(&client, &format!("{}/search", server.uri())).await;
        assert!(news.is_none());
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_read_timeout_is_network_error() {
        let server = serve(
            ResponseTemplate::new(200)
                .set_body_string(SAMPLE)
                .set_delay(Duration::from_secs(2)),
        )
        .await;
        let client = build_client_with(CONNECT_TIMEOUT, Duration::from_millis(200)).unwrap();

        let url = Url::parse(&format!("{}/search", server.uri())).unwrap();
        let err = make_http_request(&client, url).await.unwrap_err();
        assert!(matches!(&err, NewsError::Network(e) if e.is_timeout()));
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_connection_refused_is_absent() {
        let server = MockServer::start().await;
        let uri = format!("{}/search", server.uri());
        drop(server);
        let client = build_client().unwrap();

        assert!(fetch_business_news_data(&client, &uri).await.is_none());
    }
}
