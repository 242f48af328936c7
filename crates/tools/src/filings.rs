//! SEC filing search and lookup.

use basisdata_core::{ParamValue, QueryParams, Route};
use basisdata_format::{format_json, unwrap_data};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::companies::DEFAULT_LIMIT;
use crate::operation::{optional_integer, Operation};

/// `search_filings`: full-text filing search across all companies.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchFilings {
    /// Search terms
    pub query: Option<String>,
    /// Form type such as `10-K`
    pub form_type: Option<String>,
    /// Lower bound on filing date (YYYY-MM-DD)
    pub filed_after: Option<String>,
    /// Upper bound on filing date (YYYY-MM-DD)
    pub filed_before: Option<String>,
    /// Max results
    #[serde(default, deserialize_with = "optional_integer")]
    pub limit: Option<i64>,
}

impl Operation for SearchFilings {
    const NAME: &'static str = "search_filings";
    const DESCRIPTION: &'static str = "Search SEC filings across all companies.";

    fn input_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {"type": "string", "default": "", "description": "Search terms to find in filing descriptions"},
                "form_type": {"type": "string", "default": "", "description": "Filter by form type (e.g., \"10-K\", \"10-Q\", \"8-K\")"},
                "filed_after": {"type": "string", "default": "", "description": "Only filings after this date (YYYY-MM-DD)"},
                "filed_before": {"type": "string", "default": "", "description": "Only filings before this date (YYYY-MM-DD)"},
                "limit": {"type": "integer", "default": DEFAULT_LIMIT, "description": "Max results (default 25)"}
            }
        })
    }

    fn request(&self) -> (Route, QueryParams) {
        let text = |value: &Option<String>| value.clone().map(ParamValue::from);

        let mut params = QueryParams::new().with("limit", self.limit.unwrap_or(DEFAULT_LIMIT));
        params.extend_present([
            ("q", text(&self.query)),
            ("form_type", text(&self.form_type)),
            ("filed_after", text(&self.filed_after)),
            ("filed_before", text(&self.filed_before)),
        ]);
        (Route::new("v1/filings/search"), params)
    }
}

/// `get_filing`: one filing by accession number, with document URLs.
#[derive(Debug, Clone, Deserialize)]
pub struct GetFiling {
    /// SEC accession number
    pub accession_number: String,
}

impl Operation for GetFiling {
    const NAME: &'static str = "get_filing";
    const DESCRIPTION: &'static str = "Get details of a specific SEC filing by its accession number, including document URLs.";

    fn input_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "accession_number": {"type": "string", "description": "SEC filing accession number (e.g., \"0000320193-24-000123\")"}
            },
            "required": ["accession_number"]
        })
    }

    fn request(&self) -> (Route, QueryParams) {
        (Route::new("v1/filings").segment(self.accession_number.as_str()), QueryParams::new())
    }

    fn render(&self, body: &Value) -> String {
        format_json(unwrap_data(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::ApiTool;
    use crate::r#trait::Tool;
    use crate::testing::{keyed_client, unkeyed_client, RecordingTransport};
    use basisdata_core::MISSING_API_KEY_MESSAGE;

    #[test]
    fn test_search_defaults_send_only_limit() {
        let (route, params) = SearchFilings::default().request();

        assert_eq!(route.to_string(), "/v1/filings/search");
        assert_eq!(params, QueryParams::new().with("limit", 25i64));
    }

    #[test]
    fn test_search_maps_query_to_q() {
        let op: SearchFilings = serde_json::from_value(json!({
            "query": "goodwill impairment",
            "form_type": "10-K",
            "filed_after": "2024-01-01",
            "filed_before": "",
            "limit": 3
        }))
        .unwrap();

        let (_, params) = op.request();

        assert_eq!(
            params,
            QueryParams::new()
                .with("limit", 3i64)
                .with("q", "goodwill impairment")
                .with("form_type", "10-K")
                .with("filed_after", "2024-01-01")
        );
    }

    #[test]
    fn test_get_filing_route() {
        let op = GetFiling { accession_number: "0000320193-24-000123".into() };
        let (route, params) = op.request();

        assert_eq!(route.to_string(), "/v1/filings/0000320193-24-000123");
        assert!(params.is_empty());
    }

    #[tokio::test]
    async fn test_get_filing_unwraps_data() {
        let transport = RecordingTransport::returning(json!({
            "data": {"form_type": "10-K", "documents": [{"url": "https://www.sec.gov/Archives/x.htm"}]}
        }));
        let tool = ApiTool::<GetFiling>::new(keyed_client(transport.clone()));

        let out = tool.call(json!({"accession_number": "0000320193-24-000123"})).await.unwrap();

        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["form_type"], "10-K");
        assert_eq!(
            transport.last().url.as_str(),
            "https://api.basisdata.dev/v1/filings/0000320193-24-000123"
        );
    }

    #[tokio::test]
    async fn test_search_filings_error_verbatim() {
        let transport = RecordingTransport::returning(json!({"error": "Invalid date: 2024-13-01"}));
        let tool = ApiTool::<SearchFilings>::new(keyed_client(transport));

        let out = tool.call(json!({"filed_after": "2024-13-01"})).await.unwrap();

        assert_eq!(out, "Invalid date: 2024-13-01");
    }

    #[tokio::test]
    async fn test_get_filing_without_key() {
        let transport = RecordingTransport::returning(json!({}));
        let tool = ApiTool::<GetFiling>::new(unkeyed_client(transport.clone()));

        let out = tool.call(json!({"accession_number": "0000320193-24-000123"})).await.unwrap();

        assert_eq!(out, MISSING_API_KEY_MESSAGE);
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_integral_float_limit() {
        let transport = RecordingTransport::returning(json!({"data": []}));
        let tool = ApiTool::<SearchFilings>::new(keyed_client(transport.clone()));

        tool.call(json!({"query": "goodwill", "limit": 3.0})).await.unwrap();

        assert_eq!(
            transport.last().url.as_str(),
            "https://api.basisdata.dev/v1/filings/search?limit=3&q=goodwill"
        );
    }
}
