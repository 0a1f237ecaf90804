pub mod generator;
pub mod primitives;
pub mod spec;
pub mod svg;
pub mod visual_config;

pub use generator::{badge_rects, badge_title, render_result, ChartSpecGenerator};
pub use primitives::{Color, Point, Rect, Shape, Stroke, TextAnchor};
pub use spec::{
    ChartMetadata, ChartSpec, ErrorPanel, HitArea, HitRegion, HitTarget, RegionMetadata,
    Rendered, VIEW_BOX,
};
pub use visual_config::VisualConfig;
