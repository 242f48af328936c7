//! BasisData tool gateway.
//!
//! The nine MCP tools over the BasisData API. Each tool maps typed
//! arguments to one upstream GET and formats the response as text.

#![warn(missing_docs)]

pub mod r#trait;
pub mod operation;
pub mod companies;
pub mod screener;
pub mod filings;
pub mod builtin;
pub mod registry;

#[cfg(test)]
mod testing;

pub use r#trait::{Tool, ToolError, ToolSchema};
pub use operation::{ApiTool, Operation};
pub use companies::{
    CompareCompanies, GetAnnualFinancials, GetCompany, GetFinancials, GetRatios, SearchCompanies,
};
pub use screener::ScreenCompanies;
pub use filings::{GetFiling, SearchFilings};
pub use builtin::builtin_registry;
pub use registry::ToolRegistry;
