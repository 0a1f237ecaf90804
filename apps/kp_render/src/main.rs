use anyhow::Context;
use clap::{Parser, ValueEnum};
use kp_chart::chart::{load_chart_result_from_json, ChartStyle, Planet};
use kp_chart::rendering::svg::{error_to_svg, to_svg};
use kp_chart::rendering::{ChartSpecGenerator, Rendered};
use kp_chart::PlanetDetails;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Standalone SVG document.
    Svg,
    /// The declarative chart description as JSON.
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleArg {
    North,
    South,
}

impl From<StyleArg> for ChartStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::North => ChartStyle::North,
            StyleArg::South => ChartStyle::South,
        }
    }
}

/// Render a KP chart result as a North or South Indian chart.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Chart config (defaults to configs/chart.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    style: Option<StyleArg>,

    /// Edge length in pixels.
    #[arg(long)]
    size: Option<f32>,

    #[arg(long, default_value_t = false)]
    no_house_numbers: bool,

    #[arg(long, default_value_t = false)]
    no_sign_names: bool,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Print the details of this planet to stderr.
    #[arg(long)]
    select: Option<String>,

    /// Output file (stdout when omitted).
    #[arg(long, short)]
    output: Option<PathBuf>,

    #[arg(help = "Chart result JSON (`-` for stdin)")]
    input: PathBuf,
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read chart result from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let settings = kp_config::load_chart_settings(args.config.as_deref())?;
    match &settings.source {
        Some(path) => log::info!("Loaded chart config from {}", path.display()),
        None => log::info!("No chart config found, using defaults"),
    }

    let mut options = settings.options;
    if let Some(style) = args.style {
        options.style = style.into();
    }
    if let Some(size) = args.size {
        if !size.is_finite() || size <= 0.0 {
            anyhow::bail!("--size must be a positive number, got {size}");
        }
        options.size = size;
    }
    if args.no_house_numbers {
        options.show_house_numbers = false;
    }
    if args.no_sign_names {
        options.show_sign_names = false;
    }

    log::info!("Reading chart result from {}", args.input.display());
    let text = read_input(&args.input)?;
    let result = load_chart_result_from_json(&text)
        .with_context(|| format!("Malformed chart result in {}", args.input.display()))?;

    let generator = ChartSpecGenerator::with_config(settings.visual.clone());
    let rendered = generator.render(&result, &options, None);
    if let Rendered::Error(panel) = &rendered {
        log::warn!("Chart unavailable: {}", panel.display_message());
    }

    if let Some(name) = &args.select {
        let planet = Planet::from(name.as_str());
        match result.data.as_ref().and_then(|s| s.find_planet(&planet)) {
            Some(placement) => eprint!("{}", PlanetDetails::from_placement(placement)),
            None => log::warn!("No planet {} in chart", planet),
        }
    }

    let body = match (args.format, &rendered) {
        (Format::Svg, Rendered::Chart(spec)) => to_svg(spec),
        (Format::Svg, Rendered::Error(panel)) => {
            error_to_svg(panel, options.size, generator.visual_config())
        }
        (Format::Json, rendered) => {
            let mut json = serde_json::to_string_pretty(rendered)?;
            json.push('\n');
            json
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{body}"),
    }
    Ok(())
}
