//! BasisData API client.

use basisdata_core::{ApiConfig, Envelope, QueryParams, Route, MISSING_API_KEY_MESSAGE};
use reqwest::Url;
use std::sync::Arc;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::transport::{ReqwestTransport, Transport, UpstreamRequest};

/// Authenticated client for the BasisData REST API.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ApiConfig>,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Create a client that talks HTTP through reqwest.
    pub fn new(config: ApiConfig) -> Self {
        let transport = ReqwestTransport::new(config.timeout);
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client over a custom transport.
    pub fn with_transport(config: ApiConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET `route` with `params` and classify the response.
    ///
    /// Without a credential this returns the instructional failure and
    /// never touches the transport.
    pub async fn fetch(&self, route: Route, params: QueryParams) -> Result<Envelope> {
        let Some(token) = self.config.api_key.clone() else {
            debug!("No API key configured, skipping {}", route);
            return Ok(Envelope::Failure(MISSING_API_KEY_MESSAGE.to_string()));
        };

        let url = self.build_url(&route, &params)?;
        let request = UpstreamRequest {
            route,
            params,
            url,
            token,
            timeout: self.config.timeout,
        };

        let body = self.transport.get(request).await?;
        Ok(Envelope::from_body(body))
    }

    /// Resolve `route` and `params` against the configured base URL.
    pub fn build_url(&self, route: &Route, params: &QueryParams) -> Result<Url> {
        let base = &self.config.base_url;
        let mut url = Url::parse(base).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base, e)))?;

        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(base.clone()))?
            .pop_if_empty()
            .extend(route.segments());

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.to_pairs());
        }

        Ok(url)
    }
}
