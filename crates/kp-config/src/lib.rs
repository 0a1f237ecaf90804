use kp_chart::chart::{ChartOptions, ChartStyle};
use kp_chart::rendering::{Color, VisualConfig};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Render options and palette resolved from `chart.toml`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSettings {
    pub options: ChartOptions,
    pub visual: VisualConfig,
    /// File the settings came from, if any
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartToml {
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    size: Option<f32>,
    #[serde(default)]
    show_house_numbers: Option<bool>,
    #[serde(default)]
    show_sign_names: Option<bool>,
    #[serde(default)]
    enable_hover: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeToml {
    #[serde(default)]
    background: Option<String>,
    #[serde(default)]
    grid_stroke: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    ascendant_label: Option<String>,
    #[serde(default)]
    ascendant_fill: Option<String>,
    #[serde(default)]
    hover_fill: Option<String>,
    #[serde(default)]
    marker: Option<String>,
    #[serde(default)]
    badge_text: Option<String>,
    /// Keyed by planet name, any case
    #[serde(default)]
    planets: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    chart: Option<ChartToml>,
    #[serde(default)]
    theme: Option<ThemeToml>,
}

pub const CHART_TOML_PATHS: [&str; 2] = ["configs/chart.toml", "../../configs/chart.toml"];

/// Try the usual relative locations of `configs/chart.toml`.
pub fn read_chart_toml_text() -> anyhow::Result<(PathBuf, String)> {
    for p in &CHART_TOML_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok((PathBuf::from(p), c));
        }
    }
    anyhow::bail!("Could not load chart.toml from {:?}", CHART_TOML_PATHS);
}

/// Load from `path`, or from the default locations when `path` is `None`.
/// Without an explicit path a missing file yields the defaults.
pub fn load_chart_settings(path: Option<&Path>) -> anyhow::Result<ChartSettings> {
    let (source, text) = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
            (path.to_path_buf(), text)
        }
        None => match read_chart_toml_text() {
            Ok(found) => found,
            Err(_) => return Ok(ChartSettings::default()),
        },
    };
    let mut settings = parse_chart_settings(&text)
        .map_err(|e| anyhow::anyhow!("Invalid chart config {}: {e}", source.display()))?;
    settings.source = Some(source);
    Ok(settings)
}

pub fn parse_chart_settings(text: &str) -> anyhow::Result<ChartSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse chart.toml: {e}"))?;
    let options = apply_chart(ChartOptions::default(), root.chart.unwrap_or_default())?;
    let visual = apply_theme(VisualConfig::default(), root.theme.unwrap_or_default())?;
    Ok(ChartSettings {
        options,
        visual,
        source: None,
    })
}

fn apply_chart(mut options: ChartOptions, chart: ChartToml) -> anyhow::Result<ChartOptions> {
    if let Some(style) = chart.style {
        options.style = style
            .parse::<ChartStyle>()
            .map_err(|e| anyhow::anyhow!("chart.style: {e}"))?;
    }
    if let Some(size) = chart.size {
        if !size.is_finite() || size <= 0.0 {
            anyhow::bail!("chart.size must be a positive number, got {size}");
        }
        options.size = size;
    }
    if let Some(v) = chart.show_house_numbers {
        options.show_house_numbers = v;
    }
    if let Some(v) = chart.show_sign_names {
        options.show_sign_names = v;
    }
    if let Some(v) = chart.enable_hover {
        options.enable_hover = v;
    }
    Ok(options)
}

fn apply_theme(mut visual: VisualConfig, theme: ThemeToml) -> anyhow::Result<VisualConfig> {
    let slots: [(&str, Option<String>, &mut Color); 8] = [
        ("background", theme.background, &mut visual.background_color),
        ("grid_stroke", theme.grid_stroke, &mut visual.stroke_color),
        ("label", theme.label, &mut visual.label_color),
        ("ascendant_label", theme.ascendant_label, &mut visual.ascendant_label_color),
        ("ascendant_fill", theme.ascendant_fill, &mut visual.ascendant_fill),
        ("hover_fill", theme.hover_fill, &mut visual.hover_fill),
        ("marker", theme.marker, &mut visual.marker_color),
        ("badge_text", theme.badge_text, &mut visual.default_planet_color),
    ];
    for (key, value, slot) in slots {
        if let Some(value) = value {
            *slot = parse_color(&format!("theme.{key}"), &value)?;
        }
    }
    for (planet, value) in theme.planets {
        let key = planet.trim().to_ascii_lowercase();
        let color = parse_color(&format!("theme.planets.{key}"), &value)?;
        visual.planet_colors.insert(key, color);
    }
    Ok(visual)
}

fn parse_color(key: &str, value: &str) -> anyhow::Result<Color> {
    Color::from_hex(value.trim())
        .ok_or_else(|| anyhow::anyhow!("{key} is not a hex colour: {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kp_chart::chart::Planet;
    use std::io::Write;

    #[test]
    fn test_empty_text_gives_defaults() {
        let settings = parse_chart_settings("").unwrap();
        assert_eq!(settings.options, ChartOptions::default());
        assert_eq!(settings.visual, VisualConfig::default());
    }

    #[test]
    fn test_chart_section() {
        let settings = parse_chart_settings(
            r#"
            [chart]
            style = "south"
            size = 400
            show_sign_names = false
            "#,
        )
        .unwrap();
        assert_eq!(settings.options.style, ChartStyle::South);
        assert_eq!(settings.options.size, 400.0);
        assert!(!settings.options.show_sign_names);
        assert!(settings.options.show_house_numbers);
    }

    #[test]
    fn test_theme_section() {
        let settings = parse_chart_settings(
            r##"
            [theme]
            background = "#101010"
            marker = "#FFD70080"

            [theme.planets]
            SUN = "#FF8800"
            chiron = "#00FF00"
            "##,
        )
        .unwrap();
        assert_eq!(settings.visual.background_color, Color::rgb(0x10, 0x10, 0x10));
        assert_eq!(settings.visual.marker_color.a, 0x80);
        assert_eq!(
            settings.visual.planet_color(&Planet::Sun),
            Color::rgb(0xFF, 0x88, 0x00)
        );
        assert_eq!(
            settings.visual.planet_color(&Planet::Other("CHIRON".to_string())),
            Color::rgb(0x00, 0xFF, 0x00)
        );
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let err = parse_chart_settings("[chart]\nstyle = \"east\"\n").unwrap_err();
        assert!(err.to_string().contains("chart.style"));

        let err = parse_chart_settings("[theme]\nlabel = \"gold\"\n").unwrap_err();
        assert!(err.to_string().contains("theme.label"));

        assert!(parse_chart_settings("[chart]\nsize = -1\n").is_err());
        assert!(parse_chart_settings("[chart]\nwidth = 3\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chart]\nenable_hover = false").unwrap();
        let settings = load_chart_settings(Some(file.path())).unwrap();
        assert!(!settings.options.enable_hover);
        assert_eq!(settings.source.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.toml");
        fs::write(&path, "[theme]\nhover_fill = \"#zzzzzz\"\n").unwrap();
        let err = load_chart_settings(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("chart.toml"));

        let missing = dir.path().join("missing.toml");
        assert!(load_chart_settings(Some(&missing)).is_err());
    }
}
