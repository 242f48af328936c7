//! HTTP transport abstraction.

use async_trait::async_trait;
use basisdata_core::{QueryParams, Route};
use reqwest::{header, Client, ClientBuilder, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};

/// One fully resolved upstream GET.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    /// Route the URL was built from
    pub route: Route,
    /// Query parameters encoded into the URL
    pub params: QueryParams,
    /// Absolute URL including query string
    pub url: Url,
    /// Bearer token
    pub token: String,
    /// Request timeout
    pub timeout: Duration,
}

/// Sends upstream requests and decodes the JSON body.
///
/// Non-2xx statuses must come back as [`ClientError::Status`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the request.
    async fn get(&self, request: UpstreamRequest) -> Result<Value>;
}

/// reqwest-backed transport.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a default timeout.
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: ClientBuilder::new()
                .timeout(timeout)
                .user_agent(concat!("basisdata-mcp/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, request: UpstreamRequest) -> Result<Value> {
        debug!("GET {} ({} params)", request.route, request.params.len());

        let response = self
            .client
            .get(request.url.clone())
            .header(header::AUTHORIZATION, format!("Bearer {}", request.token))
            .header(header::ACCEPT, "application/json")
            .timeout(request.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Upstream {} returned {}", request.route, status);
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: request.url.to_string(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
