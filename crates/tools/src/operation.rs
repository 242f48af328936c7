//! Shared shape of every API-backed tool.
//!
//! An [`Operation`] is the typed argument struct of one tool. It knows
//! its upstream route and query parameters and how to render a payload.
//! [`ApiTool`] wires an operation to the client: decode arguments, fetch,
//! hand back upstream errors verbatim, otherwise render.

use async_trait::async_trait;
use basisdata_client::ApiClient;
use basisdata_core::{Envelope, QueryParams, Route};
use basisdata_format::format_json;
use serde::de::{DeserializeOwned, Error as _, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::{json, Number, Value};
use std::marker::PhantomData;
use tracing::debug;

use crate::r#trait::{Tool, ToolError};

/// Typed arguments of one tool plus its request mapping.
pub trait Operation: DeserializeOwned + Send + Sync + 'static {
    /// Tool name exposed over MCP.
    const NAME: &'static str;

    /// Tool description exposed over MCP.
    const DESCRIPTION: &'static str;

    /// JSON Schema for the arguments.
    fn input_schema() -> Value;

    /// Upstream route and query parameters for these arguments.
    fn request(&self) -> (Route, QueryParams);

    /// Render a successful response body.
    fn render(&self, body: &Value) -> String {
        format_json(body)
    }
}

/// A [`Tool`] backed by one [`Operation`].
pub struct ApiTool<O> {
    client: ApiClient,
    _operation: PhantomData<fn() -> O>,
}

impl<O: Operation> ApiTool<O> {
    /// Create the tool over a shared client.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _operation: PhantomData,
        }
    }

    /// Decode raw call arguments. A missing argument object counts as `{}`.
    pub fn parse(arguments: Value) -> Result<O, ToolError> {
        let arguments = if arguments.is_null() { json!({}) } else { arguments };
        serde_json::from_value(arguments).map_err(|source| ToolError::InvalidArguments {
            tool: O::NAME.to_string(),
            source,
        })
    }

    /// Run an already decoded operation.
    pub async fn run(&self, operation: &O) -> Result<String, ToolError> {
        let (route, params) = operation.request();
        debug!("{} -> {}", O::NAME, route);

        match self.client.fetch(route, params).await? {
            Envelope::Failure(message) => {
                debug!("{} returned upstream error: {}", O::NAME, message);
                Ok(message)
            }
            Envelope::Success(body) => Ok(operation.render(&body)),
        }
    }
}

/// Deserialize an optional integer argument.
///
/// Integral floats such as `10.0` are integers in JSON Schema and are
/// accepted. Fractional values are rejected.
pub fn optional_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(n) = number.as_i64() {
        return Ok(Some(n));
    }

    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(Some(f as i64)),
        Some(f) => Err(D::Error::invalid_type(Unexpected::Float(f), &"an integer")),
        None => Err(D::Error::custom(format!("integer out of range: {}", number))),
    }
}

#[async_trait]
impl<O: Operation> Tool for ApiTool<O> {
    fn name(&self) -> &str {
        O::NAME
    }

    fn description(&self) -> &str {
        O::DESCRIPTION
    }

    fn input_schema(&self) -> Value {
        O::input_schema()
    }

    async fn call(&self, arguments: Value) -> Result<String, ToolError> {
        let operation = Self::parse(arguments)?;
        self.run(&operation).await
    }
}
