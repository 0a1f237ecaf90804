//! Standalone SVG output for rendered charts.

use crate::rendering::primitives::{Color, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::{ChartSpec, ErrorPanel, VIEW_BOX};
use crate::rendering::visual_config::VisualConfig;

const FONT_FAMILY: &str = "ui-sans-serif, system-ui, sans-serif";
const RETROGRADE_FONT_SIZE: f32 = 6.0;

/// Serialize a chart spec to an SVG document.
pub fn to_svg(spec: &ChartSpec) -> String {
    let mut svg = header(spec.width, spec.height);
    svg.push_str(&format!(
        "  <g class=\"kp-chart-{}\" font-family=\"{}\">\n",
        spec.style, FONT_FAMILY
    ));
    for shape in &spec.shapes {
        write_shape(&mut svg, shape);
    }
    svg.push_str("  </g>\n</svg>\n");
    svg
}

/// Serialize the error panel. No chart geometry is drawn.
pub fn error_to_svg(panel: &ErrorPanel, size: f32, visual: &VisualConfig) -> String {
    let mut svg = header(size, size);
    let mid = VIEW_BOX / 2.0;
    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{v}\" height=\"{v}\" rx=\"8\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
        css(visual.error_color.with_opacity(0.05)),
        css(visual.error_color.with_opacity(0.2)),
        v = VIEW_BOX
    ));
    svg.push_str(&format!(
        "  <text x=\"{mid}\" y=\"{}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"12\" font-weight=\"bold\" fill=\"{}\">{}</text>\n",
        mid - 8.0,
        FONT_FAMILY,
        css(visual.error_color),
        escape(&panel.title)
    ));
    svg.push_str(&format!(
        "  <text x=\"{mid}\" y=\"{}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"10\" fill=\"{}\">{}</text>\n",
        mid + 10.0,
        FONT_FAMILY,
        css(visual.label_color),
        escape(panel.display_message())
    ));
    svg.push_str("</svg>\n");
    svg
}

fn header(width: f32, height: f32) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {v} {v}\">\n",
        v = VIEW_BOX
    )
}

fn write_shape(svg: &mut String, shape: &Shape) {
    match shape {
        Shape::Rect {
            rect,
            corner_radius,
            fill,
            stroke,
        } => {
            let rx = if *corner_radius > 0.0 {
                format!(" rx=\"{corner_radius}\"")
            } else {
                String::new()
            };
            svg.push_str(&format!(
                "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{rx}{}/>\n",
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                paint(*fill, stroke.as_ref())
            ));
        }
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            svg.push_str(&format!(
                "    <circle cx=\"{}\" cy=\"{}\" r=\"{radius}\"{}/>\n",
                center.x,
                center.y,
                paint(*fill, stroke.as_ref())
            ));
        }
        Shape::Line { from, to, stroke } => {
            svg.push_str(&format!(
                "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>\n",
                from.x,
                from.y,
                to.x,
                to.y,
                stroke_attrs(stroke)
            ));
        }
        Shape::Path {
            points,
            closed,
            fill,
            stroke,
        } => {
            let tag = if *closed { "polygon" } else { "polyline" };
            svg.push_str(&format!(
                "    <{tag} points=\"{}\"{}/>\n",
                point_list(points),
                paint(*fill, stroke.as_ref())
            ));
        }
        Shape::Text {
            position,
            content,
            size,
            color,
            anchor,
            bold,
        } => {
            let weight = if *bold { " font-weight=\"bold\"" } else { "" };
            svg.push_str(&format!(
                "    <text x=\"{}\" y=\"{}\" text-anchor=\"{}\" dominant-baseline=\"middle\" font-size=\"{size}\"{weight} fill=\"{}\">{}</text>\n",
                position.x,
                position.y,
                anchor_attr(*anchor),
                css(*color),
                escape(content)
            ));
        }
        Shape::PlanetBadge {
            rect,
            planet_id,
            symbol,
            font_size,
            color,
            background,
            retrograde,
            retrograde_color,
            title,
        } => {
            let center = rect.center();
            svg.push_str(&format!(
                "    <g class=\"kp-chart-planet\" data-planet=\"{}\">\n",
                escape(planet_id)
            ));
            svg.push_str(&format!("      <title>{}</title>\n", escape(title)));
            svg.push_str(&format!(
                "      <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"2\" fill=\"{}\"/>\n",
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                css(*background)
            ));
            svg.push_str(&format!(
                "      <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-size=\"{font_size}\" font-weight=\"bold\" fill=\"{}\">{}</text>\n",
                center.x,
                center.y,
                css(*color),
                escape(symbol)
            ));
            if *retrograde {
                svg.push_str(&format!(
                    "      <text x=\"{}\" y=\"{}\" text-anchor=\"end\" font-size=\"{RETROGRADE_FONT_SIZE}\" font-weight=\"bold\" fill=\"{}\">R</text>\n",
                    rect.x + rect.width + 1.0,
                    rect.y + 1.0,
                    css(*retrograde_color)
                ));
            }
            svg.push_str("    </g>\n");
        }
    }
}

fn paint(fill: Option<Color>, stroke: Option<&Stroke>) -> String {
    let mut attrs = match fill {
        Some(color) => format!(" fill=\"{}\"", css(color)),
        None => " fill=\"none\"".to_string(),
    };
    if let Some(stroke) = stroke {
        attrs.push_str(&stroke_attrs(stroke));
    }
    attrs
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut attrs = format!(
        " stroke=\"{}\" stroke-width=\"{}\"",
        css(stroke.color),
        stroke.width
    );
    if let Some(dashes) = &stroke.dash_array {
        let dashes: Vec<String> = dashes.iter().map(f32::to_string).collect();
        attrs.push_str(&format!(" stroke-dasharray=\"{}\"", dashes.join(" ")));
    }
    attrs
}

fn point_list(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn anchor_attr(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn css(color: Color) -> String {
    color.to_css_string()
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartStyle;
    use crate::rendering::primitives::Rect;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<Tom & \"Jerry\">"), "&lt;Tom &amp; &quot;Jerry&quot;&gt;");
    }

    #[test]
    fn test_document_shape() {
        let mut spec = ChartSpec::new(320.0, ChartStyle::South);
        spec.shapes.push(Shape::Text {
            position: Point::new(10.0, 10.0),
            content: "A&B".to_string(),
            size: 10.0,
            color: Color::BLACK,
            anchor: TextAnchor::Start,
            bold: true,
        });
        spec.shapes.push(Shape::Rect {
            rect: Rect::new(0.0, 0.0, 75.0, 75.0),
            corner_radius: 0.0,
            fill: None,
            stroke: Some(Stroke::solid(Color::BLACK, 1.0)),
        });
        let svg = to_svg(&spec);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("viewBox=\"0 0 300 300\""));
        assert!(svg.contains("width=\"320\""));
        assert!(svg.contains("kp-chart-south"));
        assert!(svg.contains(">A&amp;B</text>"));
        assert!(svg.contains("fill=\"none\" stroke=\"rgb(0, 0, 0)\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_error_document_has_no_geometry() {
        let panel = ErrorPanel::new(Some("timeout".to_string()));
        let svg = error_to_svg(&panel, 320.0, &VisualConfig::default());
        assert!(svg.contains("Failed to generate chart"));
        assert!(svg.contains(">timeout</text>"));
        assert!(!svg.contains("<polygon"));
        assert!(!svg.contains("<line"));
    }
}
