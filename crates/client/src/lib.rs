//! Upstream client for the BasisData REST API.
//!
//! Issues one authenticated GET per call and classifies the response
//! into an [`Envelope`](basisdata_core::Envelope).

#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod transport;

pub use client::ApiClient;
pub use error::{ClientError, Result};
pub use transport::{ReqwestTransport, Transport, UpstreamRequest};
