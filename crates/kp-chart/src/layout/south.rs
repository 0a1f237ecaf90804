//! South Indian grid layout. Signs hold fixed cells on the rim of a 4x4 grid
//! and the house numbers rotate with the ascendant. The inner 2x2 block is a
//! single metadata area.

use crate::chart::{ChartSnapshot, ChartStyle};
use crate::layout::types::{
    points, truncate_label, BadgeMetrics, ContentBox, IndexKind, LabelPlacement, LayoutGeometry,
    Outline, Region, TextPlacement, VerticalAlign,
};
use crate::rendering::primitives::{Point, Rect, Shape, Stroke, TextAnchor};
use crate::rendering::spec::VIEW_BOX;
use crate::rendering::visual_config::VisualConfig;

const GRID: f32 = 4.0;
const CELL: f32 = VIEW_BOX / GRID;

/// Grid cell (row, col) of each sign, Aries first.
const SIGN_CELLS: [(u8, u8); 12] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 3),
    (2, 3),
    (3, 3),
    (3, 2),
    (3, 1),
    (3, 0),
    (2, 0),
    (1, 0),
    (0, 0),
];

const LABEL_INSET: f32 = 4.0;
const LABEL_BASELINE: f32 = 12.0;
const LABEL_SIZE: f32 = 10.0;
/// Top of the badge area, below the label row
const CONTENT_TOP: f32 = 16.0;
const MARKER_SIZE: f32 = 12.0;
/// Below this pixel cell edge badges switch to the compact size
const COMPACT_CELL_PX: f32 = 80.0;
const CENTER_MAX_CHARS: usize = 24;

#[derive(Debug, Clone, Copy, Default)]
pub struct SouthIndianLayout;

impl SouthIndianLayout {
    /// `(row, col)` of the cell fixed to `sign`.
    pub fn cell_of(sign: u8) -> Option<(u8, u8)> {
        let idx = usize::from(sign).checked_sub(1)?;
        SIGN_CELLS.get(idx).copied()
    }

    /// Sign fixed to the cell at `(row, col)`, if it is a rim cell.
    pub fn sign_at(row: u8, col: u8) -> Option<u8> {
        SIGN_CELLS
            .iter()
            .position(|&cell| cell == (row, col))
            .map(|i| i as u8 + 1)
    }

    pub fn center_rect() -> Rect {
        Rect::new(CELL, CELL, 2.0 * CELL, 2.0 * CELL)
    }

    fn cell_rect(row: u8, col: u8) -> Rect {
        Rect::new(f32::from(col) * CELL, f32::from(row) * CELL, CELL, CELL)
    }
}

impl LayoutGeometry for SouthIndianLayout {
    fn style(&self) -> ChartStyle {
        ChartStyle::South
    }

    fn primary_index(&self) -> IndexKind {
        IndexKind::Sign
    }

    fn regions(&self) -> Vec<Region> {
        SIGN_CELLS
            .iter()
            .enumerate()
            .map(|(i, &(row, col))| {
                let rect = Self::cell_rect(row, col);
                Region {
                    index: i as u8 + 1,
                    outline: Outline::Cell(rect),
                    label_anchor: Point::new(rect.x, rect.y),
                    content: ContentBox {
                        rect: Rect::new(
                            rect.x + LABEL_INSET,
                            rect.y + CONTENT_TOP,
                            rect.width - 2.0 * LABEL_INSET,
                            rect.height - CONTENT_TOP - LABEL_INSET,
                        ),
                        align: VerticalAlign::Center,
                    },
                }
            })
            .collect()
    }

    fn skeleton(&self, visual: &VisualConfig) -> Vec<Shape> {
        let stroke = Stroke::solid(visual.stroke_color, visual.stroke_width);
        let mut shapes: Vec<Shape> = SIGN_CELLS
            .iter()
            .map(|&(row, col)| Shape::Rect {
                rect: Self::cell_rect(row, col),
                corner_radius: 0.0,
                fill: None,
                stroke: Some(stroke.clone()),
            })
            .collect();
        shapes.push(Shape::Rect {
            rect: Self::center_rect(),
            corner_radius: 0.0,
            fill: None,
            stroke: Some(stroke),
        });
        shapes.push(Shape::Rect {
            rect: Rect::new(0.0, 0.0, VIEW_BOX, VIEW_BOX),
            corner_radius: 8.0,
            fill: None,
            stroke: Some(Stroke::solid(visual.stroke_color, visual.outer_stroke_width)),
        });
        shapes
    }

    fn labels(&self, region: &Region, _has_planets: bool) -> LabelPlacement {
        let rect = region.outline.bounds();
        let y = rect.y + LABEL_BASELINE;
        LabelPlacement {
            house_number: TextPlacement {
                position: Point::new(rect.x + rect.width - LABEL_INSET, y),
                anchor: TextAnchor::End,
                size: LABEL_SIZE,
            },
            sign_name: TextPlacement {
                position: Point::new(rect.x + LABEL_INSET, y),
                anchor: TextAnchor::Start,
                size: LABEL_SIZE,
            },
        }
    }

    fn ascendant_marker(&self, region: &Region, visual: &VisualConfig) -> Shape {
        let rect = region.outline.bounds();
        Shape::Path {
            points: points(&[
                (rect.x, rect.y),
                (rect.x + MARKER_SIZE, rect.y),
                (rect.x, rect.y + MARKER_SIZE),
            ]),
            closed: true,
            fill: Some(visual.marker_color),
            stroke: None,
        }
    }

    fn center(&self, snapshot: &ChartSnapshot, visual: &VisualConfig) -> Vec<Shape> {
        let center = Self::center_rect().center();
        let title = snapshot.place().unwrap_or("KP Chart");
        let mut shapes = vec![Shape::Text {
            position: Point::new(center.x, center.y - 4.0),
            content: truncate_label(title, CENTER_MAX_CHARS),
            size: 12.0,
            color: visual.label_color,
            anchor: TextAnchor::Middle,
            bold: false,
        }];
        if let Some(birth) = &snapshot.birth_data {
            shapes.push(Shape::Text {
                position: Point::new(center.x, center.y + 12.0),
                content: birth.display_date(),
                size: 10.0,
                color: visual.label_color,
                anchor: TextAnchor::Middle,
                bold: false,
            });
        }
        shapes
    }

    fn badge_metrics(&self, size_px: f32) -> BadgeMetrics {
        if size_px / GRID < COMPACT_CELL_PX {
            BadgeMetrics::COMPACT
        } else {
            BadgeMetrics::REGULAR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signs_hold_fixed_cells() {
        assert_eq!(SouthIndianLayout::cell_of(12), Some((0, 0)));
        assert_eq!(SouthIndianLayout::cell_of(1), Some((0, 1)));
        assert_eq!(SouthIndianLayout::cell_of(4), Some((1, 3)));
        assert_eq!(SouthIndianLayout::cell_of(5), Some((2, 3)));
        assert_eq!(SouthIndianLayout::cell_of(9), Some((3, 0)));
        assert_eq!(SouthIndianLayout::cell_of(13), None);
    }

    #[test]
    fn test_center_cells_hold_no_sign() {
        for (row, col) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            assert_eq!(SouthIndianLayout::sign_at(row, col), None);
        }
        assert_eq!(SouthIndianLayout::sign_at(3, 3), Some(6));
    }

    #[test]
    fn test_regions_do_not_overlap_center() {
        let center = SouthIndianLayout::center_rect();
        for region in SouthIndianLayout.regions() {
            let c = region.outline.bounds().center();
            assert!(!center.contains(c), "sign {} overlaps center", region.index);
        }
    }

    #[test]
    fn test_resolve_rotates_houses() {
        assert_eq!(SouthIndianLayout.resolve(4, 4), (1, 4));
        assert_eq!(SouthIndianLayout.resolve(5, 4), (2, 5));
        assert_eq!(SouthIndianLayout.resolve(3, 4), (12, 3));
    }

    #[test]
    fn test_badge_metrics_by_size() {
        assert_eq!(SouthIndianLayout.badge_metrics(300.0), BadgeMetrics::COMPACT);
        assert_eq!(SouthIndianLayout.badge_metrics(320.0), BadgeMetrics::REGULAR);
    }

    #[test]
    fn test_labels_sit_in_opposite_corners() {
        let region = SouthIndianLayout.region(1).unwrap();
        let labels = SouthIndianLayout.labels(&region, true);
        assert!(labels.sign_name.position.x < labels.house_number.position.x);
        assert!(labels.sign_name.position.y < region.content.rect.y);
    }
}
