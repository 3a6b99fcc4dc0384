//! Same-origin image proxy.
//!
//! Fetches a remote image once (no retry) so the browser can read it without
//! cross-origin restrictions. Upstream failures map onto JSON error bodies.

use std::time::Duration;

use axum::{
    body::Bytes,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use reqwest::{Client, Url};
use serde_json::json;
use tracing::{debug, warn};

pub const USER_AGENT: &str = "StoryboardPro/1.0";
pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";
pub const CACHE_CONTROL: &str = "public, max-age=3600";

/// Proxy errors
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Missing url parameter")]
    MissingUrl,
    #[error("Invalid url: {0}")]
    InvalidUrl(String),
    #[error("Upstream error: {status}")]
    Upstream { status: u16 },
    #[error("Upstream request timed out")]
    Timeout,
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingUrl | ProxyError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ProxyError::Timeout | ProxyError::Http(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// A fetched image.
#[derive(Debug, Clone)]
pub struct ProxiedImage {
    pub content_type: String,
    pub bytes: Bytes,
}

impl IntoResponse for ProxiedImage {
    fn into_response(self) -> Response {
        (
            [
                (header::CONTENT_TYPE, self.content_type),
                (header::CACHE_CONTROL, CACHE_CONTROL.to_string()),
            ],
            self.bytes,
        )
            .into_response()
    }
}

/// HTTP client for upstream image fetches
#[derive(Debug, Clone)]
pub struct ImageProxy {
    client: Client,
}

impl ImageProxy {
    /// Create a proxy whose fetches give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, ProxyError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// GET the image at `raw_url`
    pub async fn fetch(&self, raw_url: &str) -> Result<ProxiedImage, ProxyError> {
        let url = parse_url(raw_url)?;
        debug!(%url, "Proxying image");

        let resp = self.client.get(url).send().await.map_err(classify)?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            warn!(status, "Upstream image fetch failed");
            return Err(ProxyError::Upstream { status });
        }

        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let bytes = resp.bytes().await.map_err(classify)?;

        Ok(ProxiedImage {
            content_type,
            bytes,
        })
    }
}

fn parse_url(raw: &str) -> Result<Url, ProxyError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ProxyError::MissingUrl);
    }
    let url = Url::parse(raw).map_err(|e| ProxyError::InvalidUrl(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ProxyError::InvalidUrl(format!("unsupported scheme '{}'", other))),
    }
}

fn classify(err: reqwest::Error) -> ProxyError {
    if err.is_timeout() {
        ProxyError::Timeout
    } else {
        ProxyError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url() {
        assert!(parse_url("https://cdn.example.com/a.jpg").is_ok());
        assert!(matches!(parse_url("   "), Err(ProxyError::MissingUrl)));
        assert!(matches!(parse_url("not a url"), Err(ProxyError::InvalidUrl(_))));
        assert!(matches!(parse_url("file:///etc/passwd"), Err(ProxyError::InvalidUrl(_))));
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(ProxyError::MissingUrl.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ProxyError::Upstream { status: 404 }.status(), StatusCode::NOT_FOUND);
        assert_eq!(ProxyError::Upstream { status: 503 }.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(ProxyError::Timeout.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ProxyError::MissingUrl.to_string(), "Missing url parameter");
        assert_eq!(ProxyError::Upstream { status: 404 }.to_string(), "Upstream error: 404");
    }
}
