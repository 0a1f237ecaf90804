use crate::chart::Planet;
use crate::rendering::primitives::Color;
use std::collections::HashMap;

/// Visual styling configuration for chart elements
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    pub background_color: Color,
    pub stroke_color: Color,
    pub outer_stroke_width: f32,
    pub stroke_width: f32,
    pub label_color: Color,
    pub ascendant_label_color: Color,
    pub ascendant_fill: Color,
    pub hover_fill: Color,
    pub marker_color: Color,
    pub retrograde_color: Color,
    /// Used for bodies missing from `planet_colors`
    pub default_planet_color: Color,
    /// Keyed by lower-case planet name
    pub planet_colors: HashMap<String, Color>,
    /// Badge background opacity relative to the planet colour
    pub badge_opacity: f32,
    pub error_color: Color,
}

impl VisualConfig {
    pub fn planet_color(&self, planet: &Planet) -> Color {
        self.planet_colors
            .get(&planet.key())
            .copied()
            .unwrap_or(self.default_planet_color)
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        // Stone neutrals with gold accents
        let gold_400 = Color::rgb(0xE0, 0xB8, 0x4A);
        let gold_500 = Color::rgb(0xD4, 0xAF, 0x37);
        let stone_400 = Color::rgb(0xA8, 0xA2, 0x9E);
        let stone_500 = Color::rgb(0x78, 0x71, 0x6C);
        let stone_600 = Color::rgb(0x57, 0x53, 0x4E);
        let stone_700 = Color::rgb(0x44, 0x40, 0x3C);
        let error = Color::rgb(0xDC, 0x26, 0x26);
        let success = Color::rgb(0x16, 0xA3, 0x4A);
        let info = Color::rgb(0x25, 0x63, 0xEB);

        let mut planet_colors = HashMap::new();
        planet_colors.insert("sun".to_string(), gold_500);
        planet_colors.insert("moon".to_string(), stone_400);
        planet_colors.insert("mars".to_string(), error);
        planet_colors.insert("mercury".to_string(), success);
        planet_colors.insert("jupiter".to_string(), gold_400);
        planet_colors.insert("venus".to_string(), info);
        planet_colors.insert("saturn".to_string(), stone_600);
        planet_colors.insert("rahu".to_string(), stone_500);
        planet_colors.insert("ketu".to_string(), stone_500);
        planet_colors.insert("uranus".to_string(), info);
        planet_colors.insert("neptune".to_string(), info);
        planet_colors.insert("pluto".to_string(), stone_700);

        Self {
            background_color: Color::rgb(0xFA, 0xFA, 0xF9),
            stroke_color: Color::rgb(0xD6, 0xD3, 0xD1),
            outer_stroke_width: 2.0,
            stroke_width: 1.0,
            label_color: stone_400,
            ascendant_label_color: gold_500,
            ascendant_fill: Color::rgb(0xFB, 0xF6, 0xE4),
            hover_fill: Color::rgb(0xF5, 0xF5, 0xF4),
            marker_color: gold_400,
            retrograde_color: error,
            default_planet_color: Color::rgb(0x1C, 0x19, 0x17),
            planet_colors,
            badge_opacity: 0.15,
            error_color: error,
        }
    }
}
