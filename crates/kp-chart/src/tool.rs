//! View state for the "createChart" assistant tool: loading, failure, or a
//! ready chart with its summary.

use serde::{Deserialize, Serialize};

use crate::chart::{ChartResult, ChartSnapshot};
use crate::error::NO_CHART_DATA;
use crate::layout::{LayoutGeometry, NorthIndianLayout};
use crate::rendering::{ErrorPanel, Shape, VisualConfig};
use crate::zodiac;

pub const SELECT_HINT: &str = "Tap on any planet to see details";

/// Outer frame and the two diamonds of the North diagram
const SKELETON_SHAPES: usize = 3;

/// Arguments the assistant calls the tool with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateChartArgs {
    pub dob: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Running,
    Incomplete,
    Complete,
}

/// Headline signs shown under the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSummary {
    pub ascendant: Option<&'static str>,
    pub moon_sign: Option<&'static str>,
    pub sun_sign: Option<&'static str>,
    pub place: Option<String>,
}

impl ChartSummary {
    pub fn from_snapshot(snapshot: &ChartSnapshot) -> Self {
        Self {
            ascendant: zodiac::sign_name(snapshot.ascendant_sign),
            moon_sign: zodiac::sign_name(snapshot.moon_sign),
            sun_sign: zodiac::sign_name(snapshot.sun_sign),
            place: snapshot.place().map(str::to_string),
        }
    }

    /// e.g. "Birth Chart • Pune"
    pub fn heading(&self) -> String {
        match &self.place {
            Some(place) => format!("Birth Chart • {place}"),
            None => "Birth Chart".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToolView {
    Loading { caption: String, skeleton: Vec<Shape> },
    Error(ErrorPanel),
    Ready {
        snapshot: ChartSnapshot,
        summary: ChartSummary,
    },
}

impl ToolView {
    pub fn from_status(
        args: &CreateChartArgs,
        status: ToolStatus,
        result: Option<&ChartResult>,
    ) -> Self {
        match status {
            ToolStatus::Running => ToolView::Loading {
                caption: loading_caption(args.place.as_deref()),
                skeleton: loading_skeleton(&VisualConfig::default()),
            },
            ToolStatus::Incomplete => {
                ToolView::Error(ErrorPanel::new(result.and_then(|r| r.error.clone())))
            }
            ToolStatus::Complete => match result.map(ChartResult::snapshot) {
                Some(Ok(snapshot)) => ToolView::Ready {
                    summary: ChartSummary::from_snapshot(snapshot),
                    snapshot: snapshot.clone(),
                },
                Some(Err(err)) => ToolView::Error(ErrorPanel::new(Some(
                    err.upstream_message().unwrap_or(NO_CHART_DATA).to_string(),
                ))),
                None => ToolView::Error(ErrorPanel::new(Some(NO_CHART_DATA.to_string()))),
            },
        }
    }

    /// Prompt shown under a ready chart.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ToolView::Ready { .. } => Some(SELECT_HINT),
            _ => None,
        }
    }
}

pub fn loading_caption(place: Option<&str>) -> String {
    match place {
        Some(place) => format!("Calculating chart for {place}..."),
        None => "Calculating chart...".to_string(),
    }
}

/// Placeholder outline drawn while the chart is calculated.
pub fn loading_skeleton(visual: &VisualConfig) -> Vec<Shape> {
    NorthIndianLayout
        .skeleton(visual)
        .into_iter()
        .take(SKELETON_SHAPES)
        .collect()
}
