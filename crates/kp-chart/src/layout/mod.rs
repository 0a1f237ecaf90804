pub mod grouping;
pub mod north;
pub mod south;
pub mod types;

pub use grouping::{group_planets, PlanetBuckets};
pub use north::NorthIndianLayout;
pub use south::SouthIndianLayout;
pub use types::{
    BadgeMetrics, ContentBox, IndexKind, LabelPlacement, LayoutGeometry, Outline, Region,
    TextPlacement, VerticalAlign,
};

use crate::chart::ChartStyle;

/// Geometry provider for a chart style.
pub fn geometry_for(style: ChartStyle) -> &'static dyn LayoutGeometry {
    match style {
        ChartStyle::North => &NorthIndianLayout,
        ChartStyle::South => &SouthIndianLayout,
    }
}
