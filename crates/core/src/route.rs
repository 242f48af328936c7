//! Upstream API routes.

use std::fmt;

/// A relative API route, kept as raw path segments.
///
/// Segments are encoded by the client when the URL is built, so a
/// caller-supplied ticker or accession number stays a single segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    segments: Vec<String>,
}

impl Route {
    /// Start a route from a fixed `/`-separated prefix such as `v1/companies`.
    pub fn new(prefix: &str) -> Self {
        Self {
            segments: prefix
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Append one segment verbatim.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Raw path segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}
