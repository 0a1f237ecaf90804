use crate::chart::ChartStyle;
use crate::error::NO_CHART_DATA;
use crate::rendering::primitives::{polygon_contains, Color, Point, Rect, Shape};
use serde::{Deserialize, Serialize};

/// Side of the square coordinate system all chart geometry is expressed in.
pub const VIEW_BOX: f32 = 300.0;

/// Per-region summary of a rendered chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionMetadata {
    /// Primary index: house for North charts, sign for South charts
    pub index: u8,
    pub house: u8,
    pub sign: u8,
    pub is_ascendant: bool,
    pub is_hovered: bool,
    pub planets: Vec<String>,
}

/// Chart metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub ascendant_sign: u8,
    pub regions: Vec<RegionMetadata>,
}

impl ChartMetadata {
    pub fn region(&self, index: u8) -> Option<&RegionMetadata> {
        self.regions.iter().find(|r| r.index == index)
    }
}

/// What a pointer lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HitTarget {
    Region { index: u8, house: u8 },
    /// `planet_index` indexes the snapshot's planet list
    Planet { region: u8, planet_index: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HitArea {
    Polygon { points: Vec<Point> },
    Rect { rect: Rect },
}

impl HitArea {
    pub fn contains(&self, p: Point) -> bool {
        match self {
            HitArea::Polygon { points } => polygon_contains(points, p),
            HitArea::Rect { rect } => rect.contains(p),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitRegion {
    pub target: HitTarget,
    pub area: HitArea,
}

/// Chart specification - declarative description of chart to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Rendered size in pixels
    pub width: f32,
    pub height: f32,
    pub view_box: f32,
    pub style: ChartStyle,
    pub background_color: Color,
    /// Draw order, back to front
    pub shapes: Vec<Shape>,
    /// Interactive areas, back to front
    pub hit_regions: Vec<HitRegion>,
    pub metadata: ChartMetadata,
}

impl ChartSpec {
    /// Create a new empty chart spec
    pub fn new(size: f32, style: ChartStyle) -> Self {
        Self {
            width: size,
            height: size,
            view_box: VIEW_BOX,
            style,
            background_color: Color::WHITE,
            shapes: Vec::new(),
            hit_regions: Vec::new(),
            metadata: ChartMetadata {
                ascendant_sign: 1,
                regions: Vec::new(),
            },
        }
    }

    /// Convert a pixel position to view-box units.
    pub fn to_view(&self, pixel: Point) -> Point {
        if self.width <= 0.0 || self.height <= 0.0 {
            return pixel;
        }
        Point::new(
            pixel.x * self.view_box / self.width,
            pixel.y * self.view_box / self.height,
        )
    }

    /// Top-most target under a point given in view-box units.
    pub fn hit_test(&self, point: Point) -> Option<HitTarget> {
        self.hit_regions
            .iter()
            .rev()
            .find(|h| h.area.contains(point))
            .map(|h| h.target)
    }

    pub fn badge_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::PlanetBadge { .. }))
            .count()
    }
}

/// Shown in place of the chart when no chart can be drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPanel {
    pub title: String,
    pub message: Option<String>,
}

impl ErrorPanel {
    pub const TITLE: &'static str = "Failed to generate chart";

    pub fn new(message: Option<String>) -> Self {
        Self {
            title: Self::TITLE.to_string(),
            message,
        }
    }

    /// Message, or the generic fallback.
    pub fn display_message(&self) -> &str {
        self.message.as_deref().unwrap_or(NO_CHART_DATA)
    }
}

/// Outcome of a render request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Rendered {
    Chart(ChartSpec),
    Error(ErrorPanel),
}

impl Rendered {
    pub fn chart(&self) -> Option<&ChartSpec> {
        match self {
            Rendered::Chart(spec) => Some(spec),
            Rendered::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorPanel> {
        match self {
            Rendered::Chart(_) => None,
            Rendered::Error(panel) => Some(panel),
        }
    }
}
