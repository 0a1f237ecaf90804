pub mod data;
pub mod settings;

pub use data::{
    load_chart_result_from_json, BirthData, ChartResult, ChartSnapshot, HouseCusp, LordChain,
    Planet, PlanetPlacement,
};
pub use settings::{ChartOptions, ChartStyle};
