//! Company screener.

use basisdata_core::{ParamValue, QueryParams, Route};
use basisdata_format::format_screener;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::companies::DEFAULT_LIMIT;
use crate::operation::{optional_integer, Operation};

/// Default screener sort field.
pub const DEFAULT_SORT_BY: &str = "revenue";

/// Numeric screener filters and their descriptions.
const NUMERIC_FILTERS: [(&str, &str); 11] = [
    ("revenue_gt", "Min revenue in USD"),
    ("revenue_lt", "Max revenue in USD"),
    ("net_income_gt", "Min net income in USD"),
    ("ebitda_gt", "Min EBITDA in USD"),
    ("net_margin_gt", "Min net margin (decimal, 0.1 = 10%)"),
    ("net_margin_lt", "Max net margin"),
    ("gross_margin_gt", "Min gross margin"),
    ("operating_margin_gt", "Min operating margin"),
    ("roe_gt", "Min return on equity"),
    ("current_ratio_gt", "Min current ratio"),
    ("debt_to_equity_lt", "Max debt-to-equity ratio"),
];

/// `screen_companies`: filter the universe by financial thresholds.
///
/// Every filter is optional and only sent when supplied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScreenCompanies {
    /// Min revenue (USD)
    pub revenue_gt: Option<f64>,
    /// Max revenue (USD)
    pub revenue_lt: Option<f64>,
    /// Min net income (USD)
    pub net_income_gt: Option<f64>,
    /// Min EBITDA (USD)
    pub ebitda_gt: Option<f64>,
    /// Min net margin (decimal)
    pub net_margin_gt: Option<f64>,
    /// Max net margin (decimal)
    pub net_margin_lt: Option<f64>,
    /// Min gross margin (decimal)
    pub gross_margin_gt: Option<f64>,
    /// Min operating margin (decimal)
    pub operating_margin_gt: Option<f64>,
    /// Min return on equity
    pub roe_gt: Option<f64>,
    /// Min current ratio
    pub current_ratio_gt: Option<f64>,
    /// Max debt-to-equity
    pub debt_to_equity_lt: Option<f64>,
    /// Exchange (NYSE, Nasdaq)
    pub exchange: Option<String>,
    /// Sort field
    pub sort_by: Option<String>,
    /// Max results
    #[serde(default, deserialize_with = "optional_integer")]
    pub limit: Option<i64>,
}

impl ScreenCompanies {
    /// The twelve filters paired with their wire names.
    fn filters(&self) -> Vec<(&'static str, Option<ParamValue>)> {
        let numeric = [
            self.revenue_gt,
            self.revenue_lt,
            self.net_income_gt,
            self.ebitda_gt,
            self.net_margin_gt,
            self.net_margin_lt,
            self.gross_margin_gt,
            self.operating_margin_gt,
            self.roe_gt,
            self.current_ratio_gt,
            self.debt_to_equity_lt,
        ];

        NUMERIC_FILTERS
            .iter()
            .zip(numeric)
            .map(|(&(name, _), value)| (name, value.map(ParamValue::from)))
            .chain([("exchange", self.exchange.clone().map(ParamValue::from))])
            .collect()
    }
}

impl Operation for ScreenCompanies {
    const NAME: &'static str = "screen_companies";
    const DESCRIPTION: &'static str = "Screen companies by financial criteria. All numeric filters are optional and can be combined. Revenue/income values are in USD (e.g., 1000000000 = $1B). Margin/ratio values are decimals (e.g., 0.1 = 10%).";

    fn input_schema() -> Value {
        let mut properties = Map::new();
        for (name, description) in NUMERIC_FILTERS {
            properties.insert(name.to_string(), json!({"type": "number", "description": description}));
        }
        properties.insert(
            "exchange".to_string(),
            json!({"type": "string", "description": "Filter by exchange (NYSE, Nasdaq)"}),
        );
        properties.insert(
            "sort_by".to_string(),
            json!({"type": "string", "default": DEFAULT_SORT_BY, "description": "Sort field (default: revenue)"}),
        );
        properties.insert(
            "limit".to_string(),
            json!({"type": "integer", "default": DEFAULT_LIMIT, "description": "Max results (default 25, max 100)"}),
        );

        json!({"type": "object", "properties": properties})
    }

    fn request(&self) -> (Route, QueryParams) {
        let sort_by = self
            .sort_by
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SORT_BY);

        let mut params = QueryParams::new()
            .with("sort_by", sort_by)
            .with("limit", self.limit.unwrap_or(DEFAULT_LIMIT));
        params.extend_present(self.filters());
        (Route::new("v1/screener"), params)
    }

    fn render(&self, body: &Value) -> String {
        format_screener(body)
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
    fn test_single_filter_request() {
        let op: ScreenCompanies = serde_json::from_value(json!({"revenue_gt": 1_000_000_000})).unwrap();
        let (route, params) = op.request();

        assert_eq!(route.to_string(), "/v1/screener");
        assert_eq!(
            params,
            QueryParams::new()
                .with("sort_by", "revenue")
                .with("limit", 25i64)
                .with("revenue_gt", 1_000_000_000.0)
        );
        assert_eq!(params.get("revenue_gt").unwrap().to_string(), "1000000000");
    }

    #[test]
    fn test_no_filters() {
        let (_, params) = ScreenCompanies::default().request();
        let names: Vec<&str> = params.names().collect();
        assert_eq!(names, vec!["limit", "sort_by"]);
    }

    #[test]
    fn test_all_filters() {
        let op: ScreenCompanies = serde_json::from_value(json!({
            "revenue_gt": 1e8, "revenue_lt": 1e11, "net_income_gt": 0,
            "ebitda_gt": 5e7, "net_margin_gt": 0.05, "net_margin_lt": 0.5,
            "gross_margin_gt": 0.3, "operating_margin_gt": 0.1, "roe_gt": 0.15,
            "current_ratio_gt": 1.5, "debt_to_equity_lt": 2, "exchange": "NYSE",
            "sort_by": "net_margin", "limit": 10
        }))
        .unwrap();

        let (_, params) = op.request();

        assert_eq!(params.len(), 14);
        assert_eq!(params.get("net_income_gt"), Some(&ParamValue::Float(0.0)));
        assert_eq!(params.get("exchange"), Some(&ParamValue::from("NYSE")));
        assert_eq!(params.get("sort_by"), Some(&ParamValue::from("net_margin")));
        assert_eq!(params.get("limit"), Some(&ParamValue::Int(10)));
    }

    #[test]
    fn test_null_filters_are_dropped() {
        let op: ScreenCompanies =
            serde_json::from_value(json!({"roe_gt": null, "exchange": "", "debt_to_equity_lt": 1.0})).unwrap();
        let (_, params) = op.request();

        assert!(!params.contains("roe_gt"));
        assert!(!params.contains("exchange"));
        assert!(params.contains("debt_to_equity_lt"));
    }

    #[test]
    fn test_schema_lists_every_filter() {
        let schema = ScreenCompanies::input_schema();
        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 14);
        assert!(schema.get("required").is_none());
    }

    #[tokio::test]
    async fn test_screen_tool_renders_table() {
        let transport = RecordingTransport::returning(json!({
            "data": [{"ticker": "AAPL", "name": "Apple Inc.", "revenue": 2_500_000_000i64, "net_margin": 0.153}],
            "meta": {"total": 7}
        }));
        let tool = ApiTool::<ScreenCompanies>::new(keyed_client(transport.clone()));

        let out = tool.call(json!({"revenue_gt": 1_000_000_000})).await.unwrap();

        assert!(out.starts_with("Found 7 companies (showing 1):\n\n"));
        assert!(out.contains("Rev: $2.5B"));
        assert!(out.ends_with("Margin: 15.3%"));
        assert_eq!(
            transport.last().url.query(),
            Some("limit=25&revenue_gt=1000000000&sort_by=revenue")
        );
    }

    #[tokio::test]
    async fn test_screen_tool_empty() {
        let transport = RecordingTransport::returning(json!({"data": [], "meta": {"total": 0}}));
        let tool = ApiTool::<ScreenCompanies>::new(keyed_client(transport));

        let out = tool.call(Value::Null).await.unwrap();

        assert_eq!(out, "No companies match those criteria");
    }

    #[tokio::test]
    async fn test_screen_tool_without_key() {
        let transport = RecordingTransport::returning(json!({"data": []}));
        let tool = ApiTool::<ScreenCompanies>::new(unkeyed_client(transport.clone()));

        assert_eq!(tool.call(json!({})).await.unwrap(), MISSING_API_KEY_MESSAGE);
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_integral_float_limit() {
        let transport = RecordingTransport::returning(json!({"data": [], "meta": {"total": 0}}));
        let tool = ApiTool::<ScreenCompanies>::new(keyed_client(transport.clone()));

        tool.call(json!({"limit": 10.0})).await.unwrap();

        assert_eq!(
            transport.last().url.as_str(),
            "https://api.basisdata.dev/v1/screener?limit=10&sort_by=revenue"
        );
    }
}
