use crate::chart::{ChartOptions, ChartResult, ChartSnapshot, PlanetPlacement};
use crate::layout::{
    geometry_for, group_planets, BadgeMetrics, ContentBox, LayoutGeometry, Outline, TextPlacement,
    VerticalAlign,
};
use crate::rendering::primitives::{Color, Rect, Shape};
use crate::rendering::spec::{
    ChartMetadata, ChartSpec, ErrorPanel, HitArea, HitRegion, HitTarget, RegionMetadata,
    Rendered, VIEW_BOX,
};
use crate::rendering::visual_config::VisualConfig;
use crate::zodiac;

/// ChartSpec generator - converts a chart snapshot to a ChartSpec
#[derive(Debug, Clone, Default)]
pub struct ChartSpecGenerator {
    visual_config: VisualConfig,
}

impl ChartSpecGenerator {
    /// Create a new generator with the default palette
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(visual_config: VisualConfig) -> Self {
        Self { visual_config }
    }

    pub fn visual_config(&self) -> &VisualConfig {
        &self.visual_config
    }

    /// Render a result envelope: the chart on success, the error panel
    /// otherwise.
    pub fn render(
        &self,
        result: &ChartResult,
        options: &ChartOptions,
        hovered: Option<u8>,
    ) -> Rendered {
        match result.snapshot() {
            Ok(snapshot) => Rendered::Chart(self.generate(snapshot, options, hovered)),
            Err(err) => Rendered::Error(ErrorPanel::new(err.upstream_message().map(str::to_string))),
        }
    }

    /// Generate the ChartSpec for one snapshot. `hovered` is the primary
    /// index (house for North, sign for South) of the highlighted region and
    /// is ignored when hover is disabled.
    pub fn generate(
        &self,
        snapshot: &ChartSnapshot,
        options: &ChartOptions,
        hovered: Option<u8>,
    ) -> ChartSpec {
        if snapshot.cusps.len() != usize::from(zodiac::SIGN_COUNT) {
            log::warn!(
                "Chart snapshot carries {} house cusps, expected {}",
                snapshot.cusps.len(),
                zodiac::SIGN_COUNT
            );
        }
        for placement in &snapshot.planets {
            if zodiac::sign_from_longitude(placement.longitude) != placement.sign {
                log::debug!(
                    "{} longitude {:.2} is outside sign {}",
                    placement.planet,
                    placement.longitude,
                    placement.sign
                );
            }
        }

        let visual = &self.visual_config;
        let geometry = geometry_for(options.style);
        let buckets = group_planets(&snapshot.planets, geometry.primary_index());
        let hovered = hovered.filter(|_| options.enable_hover);
        let metrics = geometry.badge_metrics(options.size);
        let regions = geometry.regions();

        let mut spec = ChartSpec::new(options.size, geometry.style());
        spec.background_color = visual.background_color;
        spec.metadata = ChartMetadata {
            ascendant_sign: snapshot.ascendant_sign,
            regions: Vec::with_capacity(regions.len()),
        };

        spec.shapes.push(Shape::Rect {
            rect: Rect::new(0.0, 0.0, VIEW_BOX, VIEW_BOX),
            corner_radius: 8.0,
            fill: Some(visual.background_color),
            stroke: None,
        });

        // Region fills sit under the grid lines
        for region in &regions {
            let (house, _) = geometry.resolve(region.index, snapshot.ascendant_sign);
            let fill = if hovered == Some(region.index) {
                Some(visual.hover_fill)
            } else if house == 1 {
                Some(visual.ascendant_fill)
            } else {
                None
            };
            if let Some(fill) = fill {
                spec.shapes.push(region_fill(&region.outline, fill));
            }
        }

        spec.shapes.extend(geometry.skeleton(visual));

        let mut badges = Vec::new();
        let mut badge_hits = Vec::new();
        let mut ascendant_region = None;
        for region in &regions {
            let (house, sign) = geometry.resolve(region.index, snapshot.ascendant_sign);
            let occupants = buckets.indices(region.index);
            let is_ascendant = house == 1;
            if is_ascendant {
                ascendant_region = Some(region);
            }

            let labels = geometry.labels(region, !occupants.is_empty());
            if options.show_house_numbers {
                spec.shapes.push(text(
                    labels.house_number,
                    house.to_string(),
                    if is_ascendant {
                        visual.ascendant_label_color
                    } else {
                        visual.label_color
                    },
                    true,
                ));
            }
            if options.show_sign_names {
                if let Some(name) = zodiac::sign_abbreviation(sign) {
                    spec.shapes
                        .push(text(labels.sign_name, name.to_string(), visual.label_color, false));
                }
            }

            spec.hit_regions.push(HitRegion {
                target: HitTarget::Region {
                    index: region.index,
                    house,
                },
                area: region_area(&region.outline),
            });

            let rects = badge_rects(&region.content, occupants.len(), metrics);
            for (&planet_index, rect) in occupants.iter().zip(rects) {
                let placement = &snapshot.planets[planet_index];
                badges.push(self.badge(placement, rect, metrics));
                badge_hits.push(HitRegion {
                    target: HitTarget::Planet {
                        region: region.index,
                        planet_index,
                    },
                    area: HitArea::Rect { rect },
                });
            }

            spec.metadata.regions.push(RegionMetadata {
                index: region.index,
                house,
                sign,
                is_ascendant,
                is_hovered: hovered == Some(region.index),
                planets: occupants
                    .iter()
                    .map(|&i| snapshot.planets[i].planet.name().to_string())
                    .collect(),
            });
        }

        if let Some(region) = ascendant_region {
            spec.shapes.push(geometry.ascendant_marker(region, visual));
        }
        spec.shapes.extend(geometry.center(snapshot, visual));
        spec.shapes.extend(badges);
        // Content boxes overhang neighbouring regions, so every badge has to
        // sit above every region area.
        spec.hit_regions.extend(badge_hits);

        spec
    }

    fn badge(&self, placement: &PlanetPlacement, rect: Rect, metrics: BadgeMetrics) -> Shape {
        let color = self.visual_config.planet_color(&placement.planet);
        Shape::PlanetBadge {
            rect,
            planet_id: placement.planet.name().to_string(),
            symbol: placement.planet.symbol(),
            font_size: metrics.font_size,
            color,
            background: color.with_opacity(self.visual_config.badge_opacity),
            retrograde: placement.is_retrograde,
            retrograde_color: self.visual_config.retrograde_color,
            title: badge_title(placement),
        }
    }
}

/// Render with the default palette and nothing hovered.
pub fn render_result(result: &ChartResult, options: &ChartOptions) -> Rendered {
    ChartSpecGenerator::new().render(result, options, None)
}

/// Hover text, e.g. "MARS (R) - Cancer 95.50°".
pub fn badge_title(placement: &PlanetPlacement) -> String {
    format!(
        "{}{} - {} {:.2}°",
        placement.planet,
        if placement.is_retrograde { " (R)" } else { "" },
        placement.display_sign_name().unwrap_or_default(),
        placement.longitude
    )
}

/// Lay `count` badges out in rows inside `content`. Rows fill left to right
/// and are centred horizontally; overflow continues below the box.
pub fn badge_rects(content: &ContentBox, count: usize, metrics: BadgeMetrics) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let area = content.rect;
    let step_x = metrics.width + metrics.gap;
    let step_y = metrics.height + metrics.gap;
    let per_row = (((area.width + metrics.gap) / step_x).floor() as usize).max(1);
    let rows = count.div_ceil(per_row);
    let block_height = rows as f32 * step_y - metrics.gap;
    let top = match content.align {
        VerticalAlign::Top => area.y,
        VerticalAlign::Center => area.y + (area.height - block_height) / 2.0,
    };

    let mut rects = Vec::with_capacity(count);
    for row in 0..rows {
        let in_row = per_row.min(count - row * per_row);
        let row_width = in_row as f32 * step_x - metrics.gap;
        let left = area.x + (area.width - row_width) / 2.0;
        let y = top + row as f32 * step_y;
        for col in 0..in_row {
            rects.push(Rect::new(
                left + col as f32 * step_x,
                y,
                metrics.width,
                metrics.height,
            ));
        }
    }
    rects
}

fn region_fill(outline: &Outline, fill: Color) -> Shape {
    match outline {
        Outline::Cell(rect) => Shape::Rect {
            rect: *rect,
            corner_radius: 0.0,
            fill: Some(fill),
            stroke: None,
        },
        Outline::Polygon(points) => Shape::Path {
            points: points.clone(),
            closed: true,
            fill: Some(fill),
            stroke: None,
        },
    }
}

fn region_area(outline: &Outline) -> HitArea {
    match outline {
        Outline::Cell(rect) => HitArea::Rect { rect: *rect },
        Outline::Polygon(points) => HitArea::Polygon {
            points: points.clone(),
        },
    }
}

fn text(placement: TextPlacement, content: String, color: Color, bold: bool) -> Shape {
    Shape::Text {
        position: placement.position,
        content,
        size: placement.size,
        color,
        anchor: placement.anchor,
        bold,
    }
}
