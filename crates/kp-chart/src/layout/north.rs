//! North Indian diamond layout. Houses are fixed in place and the signs
//! rotate through them with the ascendant.

use crate::chart::{ChartSnapshot, ChartStyle};
use crate::layout::types::{
    points, truncate_label, BadgeMetrics, ContentBox, IndexKind, LabelPlacement, LayoutGeometry,
    Outline, Region, TextPlacement, VerticalAlign,
};
use crate::rendering::primitives::{Point, Rect, Shape, Stroke, TextAnchor};
use crate::rendering::visual_config::VisualConfig;

/// Region outlines and label anchors, by house.
const HOUSE_REGIONS: [(u8, &[(f32, f32)], (f32, f32)); 12] = [
    (1, &[(100.0, 150.0), (150.0, 100.0), (200.0, 150.0)], (150.0, 130.0)),
    (2, &[(150.0, 25.0), (200.0, 150.0), (150.0, 100.0)], (170.0, 85.0)),
    (3, &[(150.0, 25.0), (298.0, 2.0), (200.0, 150.0)], (215.0, 55.0)),
    (4, &[(200.0, 150.0), (298.0, 2.0), (298.0, 150.0)], (265.0, 100.0)),
    (5, &[(200.0, 150.0), (298.0, 150.0), (298.0, 298.0)], (265.0, 200.0)),
    (6, &[(200.0, 150.0), (298.0, 298.0), (150.0, 275.0)], (215.0, 240.0)),
    (7, &[(100.0, 150.0), (200.0, 150.0), (150.0, 200.0)], (150.0, 170.0)),
    (8, &[(100.0, 150.0), (150.0, 200.0), (150.0, 275.0)], (130.0, 210.0)),
    (9, &[(2.0, 298.0), (150.0, 275.0), (100.0, 150.0)], (80.0, 240.0)),
    (10, &[(2.0, 150.0), (100.0, 150.0), (2.0, 298.0)], (35.0, 200.0)),
    (11, &[(2.0, 2.0), (100.0, 150.0), (2.0, 150.0)], (35.0, 100.0)),
    (12, &[(2.0, 2.0), (150.0, 25.0), (150.0, 100.0), (100.0, 150.0)], (80.0, 60.0)),
];

/// Planet badge anchors, by house.
const PLANET_ANCHORS: [(f32, f32); 12] = [
    (150.0, 135.0),
    (170.0, 90.0),
    (220.0, 50.0),
    (260.0, 105.0),
    (260.0, 195.0),
    (220.0, 245.0),
    (150.0, 165.0),
    (130.0, 215.0),
    (80.0, 245.0),
    (40.0, 195.0),
    (40.0, 105.0),
    (80.0, 55.0),
];

const CONTENT_WIDTH: f32 = 60.0;
const CONTENT_HEIGHT: f32 = 30.0;
const ASCENDANT_MARKER: (f32, f32) = (150.0, 115.0);
const CENTER_CAPTION: (f32, f32) = (150.0, 148.0);
const CAPTION_MAX_CHARS: usize = 22;

#[derive(Debug, Clone, Copy, Default)]
pub struct NorthIndianLayout;

impl LayoutGeometry for NorthIndianLayout {
    fn style(&self) -> ChartStyle {
        ChartStyle::North
    }

    fn primary_index(&self) -> IndexKind {
        IndexKind::House
    }

    fn regions(&self) -> Vec<Region> {
        HOUSE_REGIONS
            .iter()
            .zip(PLANET_ANCHORS.iter())
            .map(|(&(house, outline, (lx, ly)), &(px, py))| Region {
                index: house,
                outline: Outline::Polygon(points(outline)),
                label_anchor: Point::new(lx, ly),
                content: ContentBox {
                    rect: Rect::new(
                        px - CONTENT_WIDTH / 2.0,
                        py - 10.0,
                        CONTENT_WIDTH,
                        CONTENT_HEIGHT,
                    ),
                    align: VerticalAlign::Top,
                },
            })
            .collect()
    }

    fn skeleton(&self, visual: &VisualConfig) -> Vec<Shape> {
        let stroke = |width: f32| Stroke::solid(visual.stroke_color, width);
        let line = |x1: f32, y1: f32, x2: f32, y2: f32| Shape::Line {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
            stroke: stroke(visual.stroke_width),
        };

        vec![
            Shape::Rect {
                rect: Rect::new(2.0, 2.0, 296.0, 296.0),
                corner_radius: 6.0,
                fill: None,
                stroke: Some(stroke(visual.outer_stroke_width)),
            },
            // Inner diamond
            Shape::Path {
                points: points(&[(150.0, 25.0), (275.0, 150.0), (150.0, 275.0), (25.0, 150.0)]),
                closed: true,
                fill: None,
                stroke: Some(stroke(1.5)),
            },
            // Center diamond
            Shape::Path {
                points: points(&[(150.0, 100.0), (200.0, 150.0), (150.0, 200.0), (100.0, 150.0)]),
                closed: true,
                fill: None,
                stroke: Some(stroke(visual.stroke_width)),
            },
            line(25.0, 150.0, 275.0, 150.0),
            line(150.0, 25.0, 150.0, 275.0),
            line(2.0, 2.0, 100.0, 150.0),
            line(298.0, 2.0, 200.0, 150.0),
            line(2.0, 298.0, 100.0, 150.0),
            line(298.0, 298.0, 200.0, 150.0),
        ]
    }

    fn labels(&self, region: &Region, has_planets: bool) -> LabelPlacement {
        let Point { x, y } = region.label_anchor;
        let (house_dy, sign_dy) = if has_planets { (-12.0, 18.0) } else { (0.0, 10.0) };
        LabelPlacement {
            house_number: TextPlacement {
                position: Point::new(x, y + house_dy),
                anchor: TextAnchor::Middle,
                size: 10.0,
            },
            sign_name: TextPlacement {
                position: Point::new(x, y + sign_dy),
                anchor: TextAnchor::Middle,
                size: 8.0,
            },
        }
    }

    fn ascendant_marker(&self, _region: &Region, visual: &VisualConfig) -> Shape {
        Shape::Circle {
            center: Point::new(ASCENDANT_MARKER.0, ASCENDANT_MARKER.1),
            radius: 4.0,
            fill: Some(visual.marker_color),
            stroke: None,
        }
    }

    fn center(&self, snapshot: &ChartSnapshot, visual: &VisualConfig) -> Vec<Shape> {
        let caption = snapshot.place().unwrap_or("Chart");
        vec![Shape::Text {
            position: Point::new(CENTER_CAPTION.0, CENTER_CAPTION.1),
            content: truncate_label(caption, CAPTION_MAX_CHARS),
            size: 8.0,
            color: visual.label_color,
            anchor: TextAnchor::Middle,
            bold: false,
        }]
    }

    fn badge_metrics(&self, _size_px: f32) -> BadgeMetrics {
        BadgeMetrics::COMPACT
    }
}
