//! Tabular layouts for company lists.

use serde_json::Value;

use crate::metrics::{format_margin, format_revenue};

/// Records in the `data` array of a list response.
fn records(body: &Value) -> &[Value] {
    body.get("data")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Text of a scalar field; absent, null and empty fields yield `None`.
fn text(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn number(record: &Value, key: &str) -> Option<f64> {
    record.get(key).and_then(Value::as_f64)
}

/// Total match count from `meta.total`, or `shown` when missing.
pub fn total_matches(body: &Value, shown: usize) -> String {
    match body.get("meta").and_then(|meta| meta.get("total")) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => shown.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Render a company search response, one company per line.
pub fn format_company_search(query: &str, body: &Value) -> String {
    let results = records(body);
    if results.is_empty() {
        return format!("No companies found for '{}'", query);
    }

    let mut lines: Vec<String> = results
        .iter()
        .map(|company| {
            let ticker = text(company, "ticker").unwrap_or_else(|| "N/A".to_string());
            let name = text(company, "name").unwrap_or_else(|| "Unknown".to_string());
            let mut line = format!("{:<6}  {}", ticker, name);

            let hints: Vec<String> = ["exchange", "sic_description"]
                .iter()
                .filter_map(|key| text(company, key))
                .collect();
            if !hints.is_empty() {
                line.push_str(&format!("  ({})", hints.join(", ")));
            }
            line
        })
        .collect();

    lines.push(format!("\n{} total matches", total_matches(body, results.len())));
    lines.join("\n")
}

/// Render a screener response with revenue and margin columns.
pub fn format_screener(body: &Value) -> String {
    let results = records(body);
    if results.is_empty() {
        return "No companies match those criteria".to_string();
    }

    let total = total_matches(body, results.len());
    let mut lines = vec![format!("Found {} companies (showing {}):\n", total, results.len())];

    for company in results {
        let ticker = text(company, "ticker").unwrap_or_else(|| "???".to_string());
        let name = text(company, "name").unwrap_or_else(|| "Unknown".to_string());

        let revenue = format_revenue(number(company, "revenue"));
        let revenue = if revenue.is_empty() { revenue } else { format!("Rev: {}", revenue) };
        let margin = format_margin(number(company, "net_margin"));
        let margin = if margin.is_empty() { margin } else { format!("Margin: {}", margin) };

        lines.push(format!("  {:<6}  {:<40}  {:<16}  {}", ticker, name, revenue, margin));
    }

    lines.join("\n")
}
