use kp_chart::chart::{
    load_chart_result_from_json, ChartOptions, ChartResult, ChartSnapshot, ChartStyle, HouseCusp,
    LordChain, Planet, PlanetPlacement,
};
use kp_chart::layout::{LayoutGeometry, NorthIndianLayout};
use kp_chart::rendering::primitives::{polygon_contains, Color, Point, Shape};
use kp_chart::rendering::spec::HitTarget;
use kp_chart::rendering::svg::{error_to_svg, to_svg};
use kp_chart::rendering::{render_result, ChartSpecGenerator, VisualConfig};

const CHART_JSON: &str = include_str!("data/chart_result.json");

fn lords() -> LordChain {
    LordChain {
        sign: "MARS".to_string(),
        star: "KETU".to_string(),
        sub: "VENUS".to_string(),
        sub_sub: None,
    }
}

fn fixture() -> ChartResult {
    load_chart_result_from_json(CHART_JSON).unwrap()
}

/// Aries rising, twelve cusps.
fn aries_snapshot(planets: Vec<PlanetPlacement>) -> ChartSnapshot {
    ChartSnapshot {
        birth_data: None,
        calculated_at: None,
        ayanamsa: None,
        planets,
        cusps: (1..=12)
            .map(|house| HouseCusp {
                house,
                longitude: f64::from(house - 1) * 30.0,
                sign: house,
                sign_name: None,
                lords: lords(),
            })
            .collect(),
        ascendant_sign: 1,
        moon_sign: 1,
        sun_sign: 1,
    }
}

fn placement(planet: Planet, sign: u8, house: u8) -> PlanetPlacement {
    PlanetPlacement {
        planet,
        longitude: f64::from(sign - 1) * 30.0 + 10.0,
        is_retrograde: false,
        sign,
        sign_name: None,
        nakshatra: 1,
        nakshatra_name: None,
        house,
        lords: lords(),
    }
}

fn badge_rects(shapes: &[Shape]) -> Vec<(String, Point)> {
    shapes
        .iter()
        .filter_map(|s| match s {
            Shape::PlanetBadge { rect, planet_id, .. } => Some((planet_id.clone(), rect.center())),
            _ => None,
        })
        .collect()
}

#[test]
fn test_chartspec_size_and_view_box() {
    let options = ChartOptions::default().with_size(480.0);
    let rendered = render_result(&fixture(), &options);
    let spec = rendered.chart().unwrap();
    assert_eq!(spec.width, 480.0);
    assert_eq!(spec.height, 480.0);
    assert_eq!(spec.view_box, 300.0);
    assert_eq!(spec.to_view(Point::new(240.0, 480.0)), Point::new(150.0, 300.0));
}

#[test]
fn test_error_state_has_no_chart() {
    let rendered = render_result(&ChartResult::failed("timeout"), &ChartOptions::default());
    let panel = rendered.error().expect("error panel");
    assert_eq!(panel.title, "Failed to generate chart");
    assert_eq!(panel.message.as_deref(), Some("timeout"));
    assert!(rendered.chart().is_none());

    let svg = error_to_svg(panel, 320.0, &VisualConfig::default());
    assert!(svg.contains("timeout"));
    assert!(!svg.contains("<polygon"));
}

#[test]
fn test_missing_data_is_an_error() {
    let result = ChartResult {
        success: true,
        data: None,
        error: None,
    };
    let rendered = render_result(&result, &ChartOptions::default());
    let panel = rendered.error().unwrap();
    assert_eq!(panel.message, None);
    assert_eq!(panel.display_message(), "No chart data returned");
}

#[test]
fn test_empty_chart_renders_skeleton_and_labels() {
    let snapshot = aries_snapshot(Vec::new());
    for style in [ChartStyle::North, ChartStyle::South] {
        let options = ChartOptions::default().with_style(style);
        let spec = ChartSpecGenerator::new().generate(&snapshot, &options, None);
        assert_eq!(spec.metadata.regions.len(), 12);
        assert_eq!(spec.badge_count(), 0);
        assert_eq!(spec.hit_regions.len(), 12);

        let house_labels: Vec<String> = spec
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text { content, bold: true, .. } => Some(content.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(house_labels.len(), 12, "{style}");
        for house in 1..=12 {
            assert!(house_labels.contains(&house.to_string()));
        }
        for abbr in ["Ari", "Can", "Pis"] {
            assert!(spec
                .shapes
                .iter()
                .any(|s| matches!(s, Shape::Text { content, .. } if content == abbr)));
        }
    }
}

#[test]
fn test_labels_can_be_hidden() {
    let snapshot = aries_snapshot(Vec::new());
    let options = ChartOptions {
        show_house_numbers: false,
        show_sign_names: false,
        ..ChartOptions::default()
    };
    let spec = ChartSpecGenerator::new().generate(&snapshot, &options, None);
    let texts = spec
        .shapes
        .iter()
        .filter(|s| matches!(s, Shape::Text { .. }))
        .count();
    // only the centre caption remains
    assert_eq!(texts, 1);
}

#[test]
fn test_north_first_and_seventh_house() {
    let snapshot = aries_snapshot(vec![
        placement(Planet::Sun, 1, 1),
        placement(Planet::Saturn, 7, 7),
    ]);
    let spec = ChartSpecGenerator::new().generate(&snapshot, &ChartOptions::default(), None);

    let first = spec.metadata.region(1).unwrap();
    assert!(first.is_ascendant);
    assert_eq!(first.planets, vec!["SUN"]);
    assert_eq!(spec.metadata.region(7).unwrap().planets, vec!["SATURN"]);
    assert!(spec.metadata.regions.iter().filter(|r| r.is_ascendant).count() == 1);

    assert!(spec.shapes.iter().any(|s| matches!(
        s,
        Shape::Circle { center, .. } if *center == Point::new(150.0, 115.0)
    )));

    let badges = badge_rects(&spec.shapes);
    let house_one = NorthIndianLayout.region(1).unwrap().outline.points();
    let house_seven = NorthIndianLayout.region(7).unwrap().outline.points();
    let (_, sun) = badges.iter().find(|(id, _)| id == "SUN").unwrap();
    let (_, saturn) = badges.iter().find(|(id, _)| id == "SATURN").unwrap();
    assert!(polygon_contains(&house_one, *sun));
    assert!(polygon_contains(&house_seven, *saturn));
    assert!(sun.y < 150.0 && saturn.y > 150.0);
}

#[test]
fn test_south_cancer_rising() {
    let options = ChartOptions::default().with_style(ChartStyle::South);
    let spec = render_result(&fixture(), &options).chart().cloned().unwrap();

    let cancer = spec.metadata.region(4).unwrap();
    assert_eq!(cancer.house, 1);
    assert!(cancer.is_ascendant);
    assert_eq!(cancer.planets, vec!["MARS", "JUPITER"]);

    let leo = spec.metadata.region(5).unwrap();
    assert_eq!(leo.house, 2);
    assert_eq!(leo.planets, vec!["KETU"]);

    assert_eq!(spec.metadata.region(3).unwrap().house, 12);
    assert_eq!(spec.badge_count(), 9);

    // corner marker on the Cancer cell
    assert!(spec.shapes.iter().any(|s| matches!(
        s,
        Shape::Path { points, fill: Some(_), .. } if points.first() == Some(&Point::new(225.0, 75.0)) && points.len() == 3
    )));
}

#[test]
fn test_south_center_shows_place_and_date() {
    let options = ChartOptions::default().with_style(ChartStyle::South);
    let spec = render_result(&fixture(), &options).chart().cloned().unwrap();
    let texts: Vec<&str> = spec
        .shapes
        .iter()
        .filter_map(|s| match s {
            Shape::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect();
    assert!(texts.contains(&"Pune, India"));
    assert!(texts.contains(&"5 Mar 1990"));
}

#[test]
fn test_badges_come_after_everything_else() {
    let spec = render_result(&fixture(), &ChartOptions::default())
        .chart()
        .cloned()
        .unwrap();
    let first_badge = spec
        .shapes
        .iter()
        .position(|s| matches!(s, Shape::PlanetBadge { .. }))
        .unwrap();
    assert!(spec.shapes[first_badge..]
        .iter()
        .all(|s| matches!(s, Shape::PlanetBadge { .. })));
    assert_eq!(spec.shapes.len() - first_badge, 9);
}

#[test]
fn test_badge_hit_regions_are_on_top() {
    let spec = render_result(&fixture(), &ChartOptions::default().with_size(300.0))
        .chart()
        .cloned()
        .unwrap();
    for (id, center) in badge_rects(&spec.shapes) {
        match spec.hit_test(center) {
            Some(HitTarget::Planet { planet_index, .. }) => {
                let snapshot = fixture().into_snapshot().unwrap();
                assert_eq!(snapshot.planets[planet_index].planet.name(), id);
            }
            other => panic!("{id} badge hit {other:?}"),
        }
    }
}

#[test]
fn test_crowded_region_badges_stay_on_top() {
    let generator = ChartSpecGenerator::new();
    for style in [ChartStyle::North, ChartStyle::South] {
        let options = ChartOptions::default().with_style(style);
        for house in 1..=12u8 {
            for count in 3..=6 {
                // Aries rising, so sign and house coincide
                let planets: Vec<PlanetPlacement> = Planet::ALL[..count]
                    .iter()
                    .map(|p| placement(p.clone(), house, house))
                    .collect();
                let snapshot = aries_snapshot(planets);
                let spec = generator.generate(&snapshot, &options, None);
                let badges = badge_rects(&spec.shapes);
                assert_eq!(badges.len(), count);
                for (id, center) in badges {
                    match spec.hit_test(center) {
                        Some(HitTarget::Planet { region, planet_index }) => {
                            assert_eq!(snapshot.planets[planet_index].planet.name(), id);
                            assert_eq!(region, house);
                        }
                        other => panic!("{style} house {house}: {id} badge hit {other:?}"),
                    }
                }
            }
        }
    }
}

#[test]
fn test_retrograde_and_colour() {
    let spec = render_result(&fixture(), &ChartOptions::default())
        .chart()
        .cloned()
        .unwrap();
    let saturn = spec
        .shapes
        .iter()
        .find(|s| matches!(s, Shape::PlanetBadge { planet_id, .. } if planet_id == "SATURN"))
        .unwrap();
    match saturn {
        Shape::PlanetBadge {
            symbol,
            retrograde,
            title,
            color,
            background,
            ..
        } => {
            assert_eq!(symbol, "Sa");
            assert!(*retrograde);
            assert_eq!(title, "SATURN (R) - Capricorn 296.90°");
            assert_eq!(*color, Color::rgb(0x57, 0x53, 0x4E));
            assert_eq!(background.a, 38);
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_hover_highlights_one_region() {
    let snapshot = fixture().into_snapshot().unwrap();
    let spec = ChartSpecGenerator::new().generate(&snapshot, &ChartOptions::default(), Some(6));
    let hovered: Vec<u8> = spec
        .metadata
        .regions
        .iter()
        .filter(|r| r.is_hovered)
        .map(|r| r.index)
        .collect();
    assert_eq!(hovered, vec![6]);
}

#[test]
fn test_style_switch_is_idempotent() {
    let result = fixture();
    let north = ChartOptions::default();
    let south = north.with_style(ChartStyle::South);
    let first = render_result(&result, &north);
    let _ = render_result(&result, &south);
    let again = render_result(&result, &north);
    assert_eq!(first, again);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&again).unwrap()
    );
}

#[test]
fn test_out_of_range_planets_are_skipped() {
    let snapshot = aries_snapshot(vec![
        placement(Planet::Sun, 1, 1),
        placement(Planet::Moon, 1, 0),
        placement(Planet::Other("CHIRON".to_string()), 13, 13),
    ]);
    let north = ChartSpecGenerator::new().generate(&snapshot, &ChartOptions::default(), None);
    assert_eq!(north.badge_count(), 1);
    let south = ChartSpecGenerator::new().generate(
        &snapshot,
        &ChartOptions::default().with_style(ChartStyle::South),
        None,
    );
    // the moon's sign is valid even though its house is not
    assert_eq!(south.badge_count(), 2);
}

#[test]
fn test_svg_output() {
    let spec = render_result(&fixture(), &ChartOptions::default())
        .chart()
        .cloned()
        .unwrap();
    let svg = to_svg(&spec);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("viewBox=\"0 0 300 300\""));
    assert_eq!(svg.matches("class=\"kp-chart-planet\"").count(), 9);
    assert!(svg.contains("<title>MERCURY (R) - Aquarius 305.10°</title>"));
    assert!(svg.contains(">Pune, India</text>"));
}

#[test]
fn test_chartspec_json_shape() {
    let rendered = render_result(&fixture(), &ChartOptions::default());
    let value = serde_json::to_value(&rendered).unwrap();
    assert_eq!(value["state"], "chart");
    assert_eq!(value["style"], "north");
    assert_eq!(value["shapes"][0]["type"], "Rect");
    assert_eq!(value["metadata"]["regions"].as_array().unwrap().len(), 12);

    let error = serde_json::to_value(render_result(
        &ChartResult::failed("timeout"),
        &ChartOptions::default(),
    ))
    .unwrap();
    assert_eq!(error["state"], "error");
    assert_eq!(error["message"], "timeout");
}

#[test]
fn test_custom_visual_config() {
    let visual = VisualConfig {
        hover_fill: Color::rgb(1, 2, 3),
        ..VisualConfig::default()
    };
    let snapshot = aries_snapshot(Vec::new());
    let spec = ChartSpecGenerator::with_config(visual).generate(
        &snapshot,
        &ChartOptions::default(),
        Some(2),
    );
    assert!(spec.shapes.iter().any(|s| matches!(
        s,
        Shape::Path { fill: Some(c), .. } if *c == Color::rgb(1, 2, 3)
    )));
}
