//! Stateful chart: owns hover and selection and routes pointer input to the
//! click callbacks.

use std::fmt;

use crate::chart::{ChartOptions, ChartResult, ChartSnapshot, ChartStyle, Planet, PlanetPlacement};
use crate::error::ChartError;
use crate::layout::{geometry_for, group_planets};
use crate::panel::PlanetDetails;
use crate::rendering::{
    ChartSpec, ChartSpecGenerator, ErrorPanel, HitTarget, Point, Rendered, VisualConfig,
};
use crate::zodiac;

pub type PlanetClickHandler<'a> = Box<dyn FnMut(&PlanetPlacement) + 'a>;
pub type HouseClickHandler<'a> = Box<dyn FnMut(u8, &[&PlanetPlacement]) + 'a>;

/// Render options plus the click callbacks.
#[derive(Default)]
pub struct ChartConfig<'a> {
    pub options: ChartOptions,
    pub on_planet_click: Option<PlanetClickHandler<'a>>,
    /// Receives the house number and the planets in that house
    pub on_house_click: Option<HouseClickHandler<'a>>,
}

impl<'a> ChartConfig<'a> {
    pub fn new(options: ChartOptions) -> Self {
        Self {
            options,
            on_planet_click: None,
            on_house_click: None,
        }
    }

    pub fn on_planet_click(mut self, callback: impl FnMut(&PlanetPlacement) + 'a) -> Self {
        self.on_planet_click = Some(Box::new(callback));
        self
    }

    pub fn on_house_click(mut self, callback: impl FnMut(u8, &[&PlanetPlacement]) + 'a) -> Self {
        self.on_house_click = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for ChartConfig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartConfig")
            .field("options", &self.options)
            .field("on_planet_click", &self.on_planet_click.is_some())
            .field("on_house_click", &self.on_house_click.is_some())
            .finish()
    }
}

/// Pointer input in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move(Point),
    Leave,
    Click(Point),
}

/// What a click resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    None,
    House { house: u8, planets: Vec<Planet> },
    Planet(Planet),
}

pub struct KpChart<'a> {
    outcome: Result<ChartSnapshot, ChartError>,
    config: ChartConfig<'a>,
    generator: ChartSpecGenerator,
    /// Primary index of the hovered region
    hovered: Option<u8>,
    /// Position of the selected planet in the snapshot's planet list
    selected: Option<usize>,
    /// Geometry used for hit testing; hover does not change it
    hit_spec: Option<ChartSpec>,
}

impl<'a> KpChart<'a> {
    pub fn new(result: ChartResult, config: ChartConfig<'a>) -> Self {
        Self::with_generator(result, config, ChartSpecGenerator::new())
    }

    pub fn with_visual_config(
        result: ChartResult,
        config: ChartConfig<'a>,
        visual_config: VisualConfig,
    ) -> Self {
        Self::with_generator(result, config, ChartSpecGenerator::with_config(visual_config))
    }

    fn with_generator(
        result: ChartResult,
        config: ChartConfig<'a>,
        generator: ChartSpecGenerator,
    ) -> Self {
        let mut chart = Self {
            outcome: result.into_snapshot(),
            config,
            generator,
            hovered: None,
            selected: None,
            hit_spec: None,
        };
        chart.rebuild_hit_spec();
        chart
    }

    fn rebuild_hit_spec(&mut self) {
        self.hit_spec = self
            .outcome
            .as_ref()
            .ok()
            .map(|snapshot| self.generator.generate(snapshot, &self.config.options, None));
    }

    pub fn render(&self) -> Rendered {
        match &self.outcome {
            Ok(snapshot) => Rendered::Chart(self.generator.generate(
                snapshot,
                &self.config.options,
                self.hovered,
            )),
            Err(err) => Rendered::Error(ErrorPanel::new(err.upstream_message().map(str::to_string))),
        }
    }

    pub fn snapshot(&self) -> Option<&ChartSnapshot> {
        self.outcome.as_ref().ok()
    }

    pub fn is_error(&self) -> bool {
        self.outcome.is_err()
    }

    pub fn options(&self) -> &ChartOptions {
        &self.config.options
    }

    pub fn style(&self) -> ChartStyle {
        self.config.options.style
    }

    pub fn visual_config(&self) -> &VisualConfig {
        self.generator.visual_config()
    }

    /// Switch layouts. Hover and selection do not carry over.
    pub fn set_style(&mut self, style: ChartStyle) {
        self.config.options.style = style;
        self.hovered = None;
        self.selected = None;
        self.rebuild_hit_spec();
    }

    pub fn hovered(&self) -> Option<u8> {
        self.hovered
    }

    pub fn dispatch(&mut self, event: PointerEvent) -> ClickOutcome {
        match event {
            PointerEvent::Move(point) => {
                self.pointer_move(point);
                ClickOutcome::None
            }
            PointerEvent::Leave => {
                self.pointer_leave();
                ClickOutcome::None
            }
            PointerEvent::Click(point) => self.click(point),
        }
    }

    /// Top-most target under a pixel position.
    pub fn target_at(&self, pixel: Point) -> Option<HitTarget> {
        let spec = self.hit_spec.as_ref()?;
        spec.hit_test(spec.to_view(pixel))
    }

    pub fn pointer_move(&mut self, pixel: Point) {
        match self.target_at(pixel) {
            Some(HitTarget::Region { index, .. }) | Some(HitTarget::Planet { region: index, .. }) => {
                self.enter_region(index)
            }
            None => self.pointer_leave(),
        }
    }

    pub fn pointer_leave(&mut self) {
        if let Some(index) = self.hovered {
            self.leave_region(index);
        }
    }

    pub fn click(&mut self, pixel: Point) -> ClickOutcome {
        match self.target_at(pixel) {
            Some(HitTarget::Planet { planet_index, .. }) => self.click_planet(planet_index),
            Some(HitTarget::Region { index, .. }) => self.click_region(index),
            None => ClickOutcome::None,
        }
    }

    /// The pointer entered the region with this primary index. The most
    /// recently entered region is the hovered one.
    pub fn enter_region(&mut self, index: u8) {
        if self.is_error() || !self.config.options.enable_hover || !zodiac::is_valid_index(index) {
            return;
        }
        if self.hovered != Some(index) {
            log::trace!("Hover {} region {}", self.style(), index);
            self.hovered = Some(index);
        }
    }

    /// Only clears the hover if `index` is still the hovered region.
    pub fn leave_region(&mut self, index: u8) {
        if self.hovered == Some(index) {
            log::trace!("Leave {} region {}", self.style(), index);
            self.hovered = None;
        }
    }

    /// Click on the region with this primary index. The house callback gets
    /// the resolved house number whichever way the layout is keyed.
    pub fn click_region(&mut self, index: u8) -> ClickOutcome {
        let Ok(snapshot) = &self.outcome else {
            return ClickOutcome::None;
        };
        if !zodiac::is_valid_index(index) {
            return ClickOutcome::None;
        }
        let geometry = geometry_for(self.config.options.style);
        let (house, _) = geometry.resolve(index, snapshot.ascendant_sign);
        let buckets = group_planets(&snapshot.planets, geometry.primary_index());
        let planets = buckets.planets(index);

        if let Some(callback) = self.config.on_house_click.as_mut() {
            callback(house, &planets);
        }
        ClickOutcome::House {
            house,
            planets: planets.iter().map(|p| p.planet.clone()).collect(),
        }
    }

    /// Click on a planet badge. Selects the planet; the house callback is
    /// not invoked.
    pub fn click_planet(&mut self, planet_index: usize) -> ClickOutcome {
        let Ok(snapshot) = &self.outcome else {
            return ClickOutcome::None;
        };
        let Some(placement) = snapshot.planets.get(planet_index) else {
            return ClickOutcome::None;
        };
        self.selected = Some(planet_index);
        if let Some(callback) = self.config.on_planet_click.as_mut() {
            callback(placement);
        }
        ClickOutcome::Planet(placement.planet.clone())
    }

    pub fn selected_planet(&self) -> Option<&PlanetPlacement> {
        let snapshot = self.snapshot()?;
        snapshot.planets.get(self.selected?)
    }

    pub fn details_panel(&self) -> Option<PlanetDetails> {
        self.selected_planet().map(PlanetDetails::from_placement)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

impl fmt::Debug for KpChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KpChart")
            .field("outcome", &self.outcome.as_ref().map(|s| s.planets.len()))
            .field("config", &self.config)
            .field("hovered", &self.hovered)
            .field("selected", &self.selected)
            .finish()
    }
}
