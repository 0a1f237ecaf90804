//! KP (Krishnamurti Paddhati) chart layout and rendering.
//!
//! Lays a precomputed chart snapshot out as a North Indian diamond or a South
//! Indian grid, produces a declarative [`rendering::ChartSpec`], and tracks
//! hover and selection through [`interaction::KpChart`].

pub mod chart;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod panel;
pub mod rendering;
pub mod switcher;
pub mod tool;
pub mod zodiac;

pub use chart::{
    load_chart_result_from_json, BirthData, ChartOptions, ChartResult, ChartSnapshot, ChartStyle,
    HouseCusp, LordChain, Planet, PlanetPlacement,
};
pub use error::ChartError;
pub use interaction::{ChartConfig, ClickOutcome, KpChart, PointerEvent};
pub use panel::{PlanetDetails, PlanetDetailsPanel};
pub use rendering::{render_result, ChartSpec, ChartSpecGenerator, Rendered, VisualConfig};
pub use switcher::StyleSwitcher;
pub use zodiac::{house_for_sign, sign_for_house};
