use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::Serialize;
use std::fmt;

/// Upstream page could not be retrieved
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("could not read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Failure anywhere in a fetch -> parse pipeline
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("invalid selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },
    #[error("parse task failed: {0}")]
    Join(String),
}

/// Resource named in the client-facing error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Standings,
    Schedule,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Standings => write!(f, "standings"),
            Resource::Schedule => write!(f, "schedule"),
        }
    }
}

/// Error returned from a handler. Carries no upstream detail.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unable to fetch {0}")]
    Unavailable(Resource),
}

#[derive(Debug, Serialize)]
struct ErrBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match self {
            ApiError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (code, Json(ErrBody { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_names_resource() {
        assert_eq!(
            ApiError::Unavailable(Resource::Standings).to_string(),
            "Unable to fetch standings"
        );
        assert_eq!(
            ApiError::Unavailable(Resource::Schedule).to_string(),
            "Unable to fetch schedule"
        );
    }

    #[test]
    fn test_api_error_status() {
        let resp = ApiError::Unavailable(Resource::Schedule).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_scrape_error_wraps_fetch_error() {
        let err: ScrapeError = FetchError::Timeout {
            url: "https://example.com".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "request to https://example.com timed out");
    }
}
