//! Built-in BasisData tools.

use basisdata_client::ApiClient;

use crate::companies::{
    CompareCompanies, GetAnnualFinancials, GetCompany, GetFinancials, GetRatios, SearchCompanies,
};
use crate::filings::{GetFiling, SearchFilings};
use crate::operation::ApiTool;
use crate::registry::ToolRegistry;
use crate::screener::ScreenCompanies;

/// Registry holding all nine BasisData tools over `client`.
pub fn builtin_registry(client: ApiClient) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(ApiTool::<SearchCompanies>::new(client.clone()));
    registry.register(ApiTool::<GetCompany>::new(client.clone()));
    registry.register(ApiTool::<GetFinancials>::new(client.clone()));
    registry.register(ApiTool::<GetAnnualFinancials>::new(client.clone()));
    registry.register(ApiTool::<GetRatios>::new(client.clone()));
    registry.register(ApiTool::<CompareCompanies>::new(client.clone()));
    registry.register(ApiTool::<ScreenCompanies>::new(client.clone()));
    registry.register(ApiTool::<SearchFilings>::new(client.clone()));
    registry.register(ApiTool::<GetFiling>::new(client));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#trait::ToolError;
    use crate::testing::{keyed_client, unkeyed_client, RecordingTransport};
    use basisdata_core::MISSING_API_KEY_MESSAGE;
    use serde_json::{json, Value};

    /// Minimal valid arguments for every tool.
    fn sample_calls() -> Vec<(&'static str, Value)> {
        vec![
            ("search_companies", json!({"query": "apple"})),
            ("get_company", json!({"ticker": "AAPL"})),
            ("get_financials", json!({"ticker": "AAPL"})),
            ("get_annual_financials", json!({"ticker": "AAPL"})),
            ("get_ratios", json!({"ticker": "AAPL"})),
            ("compare_companies", json!({"tickers": "AAPL,MSFT"})),
            ("screen_companies", json!({})),
            ("search_filings", json!({})),
            ("get_filing", json!({"accession_number": "0000320193-24-000123"})),
        ]
    }

    #[test]
    fn test_all_tools_registered() {
        let registry = builtin_registry(keyed_client(RecordingTransport::returning(Value::Null)));

        let mut expected: Vec<&str> = sample_calls().into_iter().map(|(name, _)| name).collect();
        expected.sort_unstable();
        assert_eq!(registry.names(), expected);
    }

    #[test]
    fn test_schemas_are_objects() {
        let registry = builtin_registry(keyed_client(RecordingTransport::returning(Value::Null)));

        for schema in registry.schemas() {
            assert_eq!(schema.input_schema["type"], "object", "{}", schema.name);
            assert!(!schema.description.is_empty());
        }
    }

    #[tokio::test]
    async fn test_every_tool_reports_missing_key() {
        let transport = RecordingTransport::returning(json!({"data": []}));
        let registry = builtin_registry(unkeyed_client(transport.clone()));

        for (name, arguments) in sample_calls() {
            let out = registry.call(name, arguments).await.unwrap();
            assert_eq!(out, MISSING_API_KEY_MESSAGE, "{}", name);
        }
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_every_tool_returns_upstream_error_verbatim() {
        let message = "Rate limit exceeded. Upgrade at https://basisdata.dev/pricing";
        let transport = RecordingTransport::returning(json!({"error": message}));
        let registry = builtin_registry(keyed_client(transport.clone()));

        for (name, arguments) in sample_calls() {
            let out = registry.call(name, arguments).await.unwrap();
            assert_eq!(out, message, "{}", name);
        }
        assert_eq!(transport.calls().len(), 9);
    }

    #[tokio::test]
    async fn test_every_tool_propagates_http_failure() {
        let registry = builtin_registry(keyed_client(RecordingTransport::failing(502)));

        for (name, arguments) in sample_calls() {
            let result = registry.call(name, arguments).await;
            assert!(matches!(result, Err(ToolError::Upstream(_))), "{}", name);
        }
    }
}
