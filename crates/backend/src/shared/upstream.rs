//! HTTP-клиент внешнего REST backend.
//!
//! Relay работает через trait [`Upstream`], поэтому в тестах
//! реальный клиент подменяется записывающим фейком.

use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::{Method, StatusCode};
use std::time::Duration;

use crate::shared::config::UpstreamConfig;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid upstream url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Запрос к upstream: путь относительно base_url
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamRequest {
    pub method: Method,
    pub path: String,
    /// Заголовок Authorization в исходном виде
    pub authorization: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

#[async_trait]
pub trait Upstream: Send + Sync {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError>;
}

/// Реальный клиент на reqwest
pub struct HttpUpstream {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUpstream {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError> {
        let raw_url = format!("{}{}", self.base_url, request.path);
        let url = reqwest::Url::parse(&raw_url).map_err(|e| UpstreamError::InvalidUrl {
            url: raw_url.clone(),
            reason: e.to_string(),
        })?;
        tracing::debug!("upstream {} {}", request.method, url);

        // axum и reqwest используют один и тот же crate http
        let mut builder = self.client.request(request.method.clone(), url);
        if let Some(auth) = &request.authorization {
            builder = builder.header(reqwest::header::AUTHORIZATION, auth);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(UpstreamResponse { status, body })
    }
}
