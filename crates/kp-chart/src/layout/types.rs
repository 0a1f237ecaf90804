use serde::{Deserialize, Serialize};

use crate::chart::{ChartSnapshot, ChartStyle};
use crate::rendering::primitives::{Point, Rect, Shape, TextAnchor};
use crate::rendering::visual_config::VisualConfig;
use crate::zodiac;

/// Which number a layout's regions are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    House,
    Sign,
}

/// Screen geometry of a region
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Polygon(Vec<Point>),
    Cell(Rect),
}

impl Outline {
    pub fn points(&self) -> Vec<Point> {
        match self {
            Outline::Polygon(points) => points.clone(),
            Outline::Cell(r) => vec![
                Point::new(r.x, r.y),
                Point::new(r.x + r.width, r.y),
                Point::new(r.x + r.width, r.y + r.height),
                Point::new(r.x, r.y + r.height),
            ],
        }
    }

    /// Axis-aligned bounding box.
    pub fn bounds(&self) -> Rect {
        match self {
            Outline::Cell(r) => *r,
            Outline::Polygon(points) => {
                let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
                let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
                for p in points {
                    min_x = min_x.min(p.x);
                    min_y = min_y.min(p.y);
                    max_x = max_x.max(p.x);
                    max_y = max_y.max(p.y);
                }
                if points.is_empty() {
                    return Rect::new(0.0, 0.0, 0.0, 0.0);
                }
                Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
}

/// Area planet badges are flowed into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentBox {
    pub rect: Rect,
    pub align: VerticalAlign,
}

/// One of the twelve interactive regions of a layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// House (North) or sign (South) this region is fixed to
    pub index: u8,
    pub outline: Outline,
    pub label_anchor: Point,
    pub content: ContentBox,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPlacement {
    pub position: Point,
    pub anchor: TextAnchor,
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub house_number: TextPlacement,
    pub sign_name: TextPlacement,
}

/// Badge box dimensions in view-box units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeMetrics {
    pub width: f32,
    pub height: f32,
    pub gap: f32,
    pub font_size: f32,
}

impl BadgeMetrics {
    pub const COMPACT: BadgeMetrics = BadgeMetrics {
        width: 16.0,
        height: 12.0,
        gap: 2.0,
        font_size: 10.0,
    };

    pub const REGULAR: BadgeMetrics = BadgeMetrics {
        width: 20.0,
        height: 14.0,
        gap: 2.0,
        font_size: 12.0,
    };
}

/// Fixed geometry of one chart convention. Both conventions share the
/// sign/house mapper and the grouping engine.
pub trait LayoutGeometry: Sync {
    fn style(&self) -> ChartStyle;

    /// Whether regions are keyed by house or by sign.
    fn primary_index(&self) -> IndexKind;

    /// The twelve regions, ordered by index.
    fn regions(&self) -> Vec<Region>;

    fn region(&self, index: u8) -> Option<Region> {
        self.regions().into_iter().find(|r| r.index == index)
    }

    /// Grid lines and borders drawn above the region fills.
    fn skeleton(&self, visual: &VisualConfig) -> Vec<Shape>;

    fn labels(&self, region: &Region, has_planets: bool) -> LabelPlacement;

    /// Drawn on the region holding the first house.
    fn ascendant_marker(&self, region: &Region, visual: &VisualConfig) -> Shape;

    /// Chart-level information drawn in the middle of the diagram.
    fn center(&self, snapshot: &ChartSnapshot, visual: &VisualConfig) -> Vec<Shape>;

    fn badge_metrics(&self, size_px: f32) -> BadgeMetrics;

    /// `(house, sign)` shown by the region fixed to `index`.
    fn resolve(&self, index: u8, ascendant_sign: u8) -> (u8, u8) {
        match self.primary_index() {
            IndexKind::House => (index, zodiac::sign_for_house(index, ascendant_sign)),
            IndexKind::Sign => (zodiac::house_for_sign(index, ascendant_sign), index),
        }
    }
}

/// Trim `text` to `max_chars`, ending with an ellipsis when shortened.
pub(crate) fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

pub(crate) fn points(raw: &[(f32, f32)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Pune", 10), "Pune");
        assert_eq!(truncate_label("Thiruvananthapuram", 8), "Thiruva…");
    }

    #[test]
    fn test_cell_outline_points() {
        let outline = Outline::Cell(Rect::new(0.0, 0.0, 10.0, 5.0));
        assert_eq!(outline.points().len(), 4);
        assert_eq!(outline.points()[2], Point::new(10.0, 5.0));
        assert_eq!(outline.bounds(), Rect::new(0.0, 0.0, 10.0, 5.0));
    }

    #[test]
    fn test_polygon_bounds() {
        let outline = Outline::Polygon(points(&[(2.0, 2.0), (150.0, 25.0), (100.0, 150.0)]));
        assert_eq!(outline.bounds(), Rect::new(2.0, 2.0, 148.0, 148.0));
    }
}
