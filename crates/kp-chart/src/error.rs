use thiserror::Error;

/// Message shown when the upstream service reports failure without one.
pub const NO_CHART_DATA: &str = "No chart data returned";

/// Errors that can occur while turning upstream data into a chart
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// The chart service reported failure, or returned no data.
    #[error("Chart calculation failed: {}", .0.as_deref().unwrap_or(NO_CHART_DATA))]
    Upstream(Option<String>),
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Unknown chart style: {0}")]
    UnknownStyle(String),
}

impl ChartError {
    /// Upstream message, if this error carries one.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            ChartError::Upstream(message) => message.as_deref(),
            _ => None,
        }
    }
}
