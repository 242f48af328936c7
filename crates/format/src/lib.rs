//! Response formatting.
//!
//! Turns upstream JSON into the plain text handed back to the agent:
//! pretty-printed JSON for most tools and compact tables for company
//! search and screening.

#![warn(missing_docs)]

mod companies;
mod json;
mod metrics;

pub use companies::{format_company_search, format_screener, total_matches};
pub use json::{format_json, unwrap_data};
pub use metrics::{format_margin, format_revenue};
