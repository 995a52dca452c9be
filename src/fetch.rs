//! Markup fetching.
//!
//! One GET per call, no retry and no caching: every request to the API
//! re-fetches the upstream page. Only transport failures and unreadable
//! bodies are errors; a non-2xx reply is returned like any other page.

use crate::config::{Config, USER_AGENT};
use crate::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Source of raw page markup
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches pages over HTTP(S) with a shared client
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: reqwest::Client,
}

impl HttpPageSource {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(FetchError::Request)?;

        Ok(Self { client })
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(config.fetch_timeout())
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(%url, "Fetching page");

        let resp = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout { url: url.to_string() }
            } else {
                FetchError::Request(e)
            }
        })?;

        // Error pages are still parsed; an empty one yields the placeholder
        let status = resp.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Upstream returned non-success status");
        }

        let html = resp.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout { url: url.to_string() }
            } else {
                FetchError::Body(e)
            }
        })?;

        debug!(%url, bytes = html.len(), "Fetched page");
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::Redirect;
    use axum::routing::get;
    use axum::Router;

    const PAGE: &str =
        "<table><tbody><tr><td>Harvard</td><td>x</td><td>5-1</td></tr></tbody></table>";

    /// Serve a small upstream on an ephemeral port, returning its base URL
    async fn spawn_upstream() -> String {
        let app = Router::new()
            .route("/standings", get(|| async { PAGE }))
            .route("/missing", get(|| async { (StatusCode::NOT_FOUND, PAGE) }))
            .route("/down", get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "") }))
            .route(
                "/agent",
                get(|headers: HeaderMap| async move {
                    headers
                        .get("user-agent")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string()
                }),
            )
            .route("/moved", get(|| async { Redirect::temporary("/standings") }))
            .route("/loop", get(|| async { Redirect::temporary("/loop") }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn source() -> HttpPageSource {
        HttpPageSource::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let base = spawn_upstream().await;
        let html = source().fetch(&format!("{}/standings", base)).await.unwrap();
        assert_eq!(html, PAGE);
    }

    #[tokio::test]
    async fn test_non_success_status_still_returns_body() {
        let base = spawn_upstream().await;
        let html = source().fetch(&format!("{}/missing", base)).await.unwrap();
        assert_eq!(html, PAGE);

        let html = source().fetch(&format!("{}/down", base)).await.unwrap();
        assert_eq!(html, "");
    }

    #[tokio::test]
    async fn test_not_found_page_with_rows_still_parses() {
        let base = spawn_upstream().await;
        let url = format!("{}/missing", base);
        let standings = crate::scrapers::scrape_standings(&source(), &url).await.unwrap();
        assert_eq!(standings["Harvard"], crate::types::Record { wins: 5, losses: 1 });
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let base = spawn_upstream().await;
        let agent = source().fetch(&format!("{}/agent", base)).await.unwrap();
        assert_eq!(agent, USER_AGENT);
    }

    #[tokio::test]
    async fn test_fetch_follows_redirects_up_to_limit() {
        let base = spawn_upstream().await;
        let html = source().fetch(&format!("{}/moved", base)).await.unwrap();
        assert_eq!(html, PAGE);

        let result = source().fetch(&format!("{}/loop", base)).await;
        assert!(matches!(result, Err(FetchError::Request(_))));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        // Port 9 on localhost is the discard port; nothing listens there in CI
        let result = source().fetch("http://127.0.0.1:9/standings").await;
        assert!(matches!(
            result,
            Err(FetchError::Request(_)) | Err(FetchError::Timeout { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_url_is_fetch_error() {
        assert!(source().fetch("not a url").await.is_err());
    }
}
