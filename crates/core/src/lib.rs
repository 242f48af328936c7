//! BasisData core data model.
//!
//! Shared types for the BasisData MCP gateway: the immutable API
//! configuration, request parameters and the upstream response envelope.

#![warn(missing_docs)]

mod config;
mod envelope;
mod params;
mod route;

pub use config::{
    ApiConfig, API_KEY_ENV, API_BASE_ENV, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS,
    MISSING_API_KEY_MESSAGE, TIMEOUT_ENV,
};
pub use envelope::Envelope;
pub use params::{ParamValue, QueryParams};
pub use route::Route;
