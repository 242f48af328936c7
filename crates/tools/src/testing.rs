//! Fakes shared by the tool tests.

use async_trait::async_trait;
use basisdata_client::{ApiClient, ClientError, Transport, UpstreamRequest};
use basisdata_core::ApiConfig;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Records every request and answers with one canned outcome.
pub(crate) struct RecordingTransport {
    calls: Mutex<Vec<UpstreamRequest>>,
    status: Option<u16>,
    body: Value,
}

impl RecordingTransport {
    pub(crate) fn returning(body: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            status: None,
            body,
        })
    }

    pub(crate) fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            status: Some(status),
            body: Value::Null,
        })
    }

    pub(crate) fn calls(&self) -> Vec<UpstreamRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> UpstreamRequest {
        self.calls().pop().expect("no request recorded")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, request: UpstreamRequest) -> basisdata_client::Result<Value> {
        let url = request.url.to_string();
        self.calls.lock().unwrap().push(request);
        match self.status {
            Some(status) => Err(ClientError::Status {
                status,
                url,
                body: String::new(),
            }),
            None => Ok(self.body.clone()),
        }
    }
}

/// Client with a key over `transport`.
pub(crate) fn keyed_client(transport: Arc<RecordingTransport>) -> ApiClient {
    let config = ApiConfig::default().with_api_key(Some("test-key".to_string()));
    ApiClient::with_transport(config, transport)
}

/// Client without a key over `transport`.
pub(crate) fn unkeyed_client(transport: Arc<RecordingTransport>) -> ApiClient {
    ApiClient::with_transport(ApiConfig::default(), transport)
}
