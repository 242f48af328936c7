//! Human-readable financial figures.

/// Render revenue as `$X.XB` above one billion, `$XM` otherwise.
///
/// Absent revenue renders empty. Zero is a real figure and renders `$0M`.
pub fn format_revenue(revenue: Option<f64>) -> String {
    match revenue {
        Some(rev) if rev > 1e9 => format!("${:.1}B", rev / 1e9),
        Some(rev) => format!("${:.0}M", rev / 1e6),
        None => String::new(),
    }
}

/// Render a decimal margin as a percentage with one decimal.
pub fn format_margin(margin: Option<f64>) -> String {
    match margin {
        Some(m) => format!("{:.1}%", m * 100.0),
        None => String::new(),
    }
}
