use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

/// Regional diagram convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartStyle {
    /// Diamond layout, houses fixed in place
    #[default]
    North,
    /// 4x4 grid, signs fixed in place
    South,
}

impl ChartStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartStyle::North => "north",
            ChartStyle::South => "south",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartStyle::North => "North",
            ChartStyle::South => "South",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ChartStyle::North => ChartStyle::South,
            ChartStyle::South => ChartStyle::North,
        }
    }
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartStyle {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" => Ok(ChartStyle::North),
            "south" => Ok(ChartStyle::South),
            other => Err(ChartError::UnknownStyle(other.to_string())),
        }
    }
}

/// Render options recognised by the chart renderer. Every field is optional
/// in serialized form and falls back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartOptions {
    pub style: ChartStyle,
    /// Edge length of the square chart in pixels
    pub size: f32,
    pub show_house_numbers: bool,
    pub show_sign_names: bool,
    pub enable_hover: bool,
}

impl ChartOptions {
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            style: ChartStyle::North,
            size: 320.0,
            show_house_numbers: true,
            show_sign_names: true,
            enable_hover: true,
        }
    }
}
