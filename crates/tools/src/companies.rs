//! Company lookup, financial statements, ratios and comparison.

use basisdata_core::{ParamValue, QueryParams, Route};
use basisdata_format::{format_company_search, format_json, unwrap_data};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::operation::{optional_integer, Operation};

/// Default page size for list endpoints.
pub const DEFAULT_LIMIT: i64 = 25;

/// Default number of periods for `get_financials`.
pub const DEFAULT_PERIODS: i64 = 8;

/// Default period type for `get_financials`.
pub const DEFAULT_PERIOD_TYPE: &str = "Q";

/// Default number of years for `get_annual_financials`.
pub const DEFAULT_YEARS: i64 = 5;

fn company(ticker: &str) -> Route {
    Route::new("v1/companies").segment(ticker)
}

fn ticker_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "ticker": {"type": "string", "description": "Stock ticker symbol (e.g., AAPL, MSFT)"}
        },
        "required": ["ticker"]
    })
}

/// `search_companies`: find companies by name, ticker or CIK.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchCompanies {
    /// Name, ticker symbol or CIK number
    pub query: String,
    /// Max results
    #[serde(default, deserialize_with = "optional_integer")]
    pub limit: Option<i64>,
}

impl Operation for SearchCompanies {
    const NAME: &'static str = "search_companies";
    const DESCRIPTION: &'static str = "Search for companies by name, ticker, or CIK number.";

    fn input_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {"type": "string", "description": "Company name, ticker symbol, or CIK number to search for"},
                "limit": {"type": "integer", "default": DEFAULT_LIMIT, "description": "Max results to return (default 25, max 100)"}
            },
            "required": ["query"]
        })
    }

    fn request(&self) -> (Route, QueryParams) {
        let params = QueryParams::new()
            .with("search", self.query.as_str())
            .with("limit", self.limit.unwrap_or(DEFAULT_LIMIT));
        (Route::new("v1/companies"), params)
    }

    fn render(&self, body: &Value) -> String {
        format_company_search(&self.query, body)
    }
}

/// `get_company`: company metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct GetCompany {
    /// Stock ticker symbol
    pub ticker: String,
}

impl Operation for GetCompany {
    const NAME: &'static str = "get_company";
    const DESCRIPTION: &'static str = "Get detailed company metadata including SIC code, exchange, fiscal year end, and data availability.";

    fn input_schema() -> Value {
        ticker_schema()
    }

    fn request(&self) -> (Route, QueryParams) {
        (company(&self.ticker), QueryParams::new())
    }

    fn render(&self, body: &Value) -> String {
        format_json(unwrap_data(body))
    }
}

/// `get_financials`: standardized statements for recent periods.
#[derive(Debug, Clone, Deserialize)]
pub struct GetFinancials {
    /// Stock ticker symbol
    pub ticker: String,
    /// Number of periods
    #[serde(default, deserialize_with = "optional_integer")]
    pub periods: Option<i64>,
    /// `Q` for quarterly, `A` for annual
    #[serde(default)]
    pub period_type: Option<String>,
}

impl Operation for GetFinancials {
    const NAME: &'static str = "get_financials";
    const DESCRIPTION: &'static str = "Get standardized financial statements (income statement, balance sheet, cash flow).";

    fn input_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "ticker": {"type": "string", "description": "Stock ticker symbol"},
                "periods": {"type": "integer", "default": DEFAULT_PERIODS, "description": "Number of periods to return (default 8)"},
                "period_type": {"type": "string", "default": DEFAULT_PERIOD_TYPE, "description": "'Q' for quarterly (default), 'A' for annual"}
            },
            "required": ["ticker"]
        })
    }

    fn request(&self) -> (Route, QueryParams) {
        let period_type = self
            .period_type
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PERIOD_TYPE);

        let params = QueryParams::new()
            .with("period_type", period_type)
            .with("limit", self.periods.unwrap_or(DEFAULT_PERIODS));
        (company(&self.ticker).segment("financials"), params)
    }
}

/// `get_annual_financials`: multi-year annual statements.
#[derive(Debug, Clone, Deserialize)]
pub struct GetAnnualFinancials {
    /// Stock ticker symbol
    pub ticker: String,
    /// Number of years
    #[serde(default, deserialize_with = "optional_integer")]
    pub years: Option<i64>,
}

impl Operation for GetAnnualFinancials {
    const NAME: &'static str = "get_annual_financials";
    const DESCRIPTION: &'static str = "Get annual financial statements for multi-year trend analysis.";

    fn input_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "ticker": {"type": "string", "description": "Stock ticker symbol"},
                "years": {"type": "integer", "default": DEFAULT_YEARS, "description": "Number of years to return (default 5)"}
            },
            "required": ["ticker"]
        })
    }

    fn request(&self) -> (Route, QueryParams) {
        let params = QueryParams::new().with("years", self.years.unwrap_or(DEFAULT_YEARS));
        (company(&self.ticker).segment("financials").segment("annual"), params)
    }
}

/// `get_ratios`: computed ratios and valuation metrics.
#[derive(Debug, Clone, Deserialize)]
pub struct GetRatios {
    /// Stock ticker symbol
    pub ticker: String,
}

impl Operation for GetRatios {
    const NAME: &'static str = "get_ratios";
    const DESCRIPTION: &'static str = "Get computed financial ratios and valuation metrics: P/E, EV/EBITDA, margins, growth rates, leverage, ROE, FCF yield. Uses TTM financials plus live market data.";

    fn input_schema() -> Value {
        ticker_schema()
    }

    fn request(&self) -> (Route, QueryParams) {
        (company(&self.ticker).segment("ratios"), QueryParams::new())
    }

    fn render(&self, body: &Value) -> String {
        format_json(unwrap_data(body))
    }
}

/// `compare_companies`: side-by-side metrics for several tickers.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareCompanies {
    /// Comma-separated tickers
    pub tickers: String,
    /// Comma-separated metric names
    #[serde(default)]
    pub metrics: Option<String>,
}

impl Operation for CompareCompanies {
    const NAME: &'static str = "compare_companies";
    const DESCRIPTION: &'static str = "Compare 2-10 companies side-by-side on key financial metrics.";

    fn input_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "tickers": {"type": "string", "description": "Comma-separated ticker symbols (e.g., \"AAPL,MSFT,GOOGL\")"},
                "metrics": {"type": "string", "default": "", "description": "Optional comma-separated metrics to compare (e.g., \"revenue,net_income,ev_ebitda\")"}
            },
            "required": ["tickers"]
        })
    }

    fn request(&self) -> (Route, QueryParams) {
        let mut params = QueryParams::new()
            .with("tickers", self.tickers.as_str())
            .with("format", "rows");
        params.extend_present([("metrics", self.metrics.clone().map(ParamValue::from))]);
        (Route::new("v1/compare"), params)
    }
}
