//! Planet details panel.

use std::fmt;

use crate::chart::PlanetPlacement;

/// Decimal places shown for longitudes.
pub const LONGITUDE_PRECISION: usize = 4;

/// One labelled value of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl DetailRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Display model for a selected planet. Optional fields that are missing
/// are left out rather than shown empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetDetails {
    pub planet: String,
    pub retrograde: bool,
    pub attributes: Vec<DetailRow>,
    /// Sign, star and sub lords, then sub-sub when known
    pub significators: Vec<DetailRow>,
}

impl PlanetDetails {
    pub fn from_placement(placement: &PlanetPlacement) -> Self {
        let mut attributes = Vec::with_capacity(4);
        if let Some(sign) = placement.display_sign_name() {
            attributes.push(DetailRow::new("Sign", sign));
        }
        attributes.push(DetailRow::new("Longitude", format_longitude(placement.longitude)));
        if let Some(nakshatra) = placement.display_nakshatra_name() {
            attributes.push(DetailRow::new("Nakshatra", nakshatra));
        }
        attributes.push(DetailRow::new("House", placement.house.to_string()));

        let lords = &placement.lords;
        let mut significators = vec![
            DetailRow::new("Sign Lord", lords.sign.as_str()),
            DetailRow::new("Star Lord", lords.star.as_str()),
            DetailRow::new("Sub Lord", lords.sub.as_str()),
        ];
        if let Some(sub_sub) = &lords.sub_sub {
            significators.push(DetailRow::new("Sub-Sub", sub_sub.as_str()));
        }

        Self {
            planet: placement.planet.name().to_string(),
            retrograde: placement.is_retrograde,
            attributes,
            significators,
        }
    }

    /// Header text, e.g. "SATURN (R)".
    pub fn heading(&self) -> String {
        if self.retrograde {
            format!("{} (R)", self.planet)
        } else {
            self.planet.clone()
        }
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.attributes
            .iter()
            .chain(self.significators.iter())
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

impl fmt::Display for PlanetDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading())?;
        for row in &self.attributes {
            writeln!(f, "  {}: {}", row.label, row.value)?;
        }
        writeln!(f, "  KP Significators")?;
        for row in &self.significators {
            writeln!(f, "    {}: {}", row.label, row.value)?;
        }
        Ok(())
    }
}

pub fn format_longitude(longitude: f64) -> String {
    format!("{:.*}°", LONGITUDE_PRECISION, longitude)
}

/// Shows the details of at most one planet and reports when the user closes
/// it.
pub struct PlanetDetailsPanel<'a> {
    planet: Option<&'a PlanetPlacement>,
    on_close: Box<dyn FnMut() + 'a>,
}

impl<'a> PlanetDetailsPanel<'a> {
    pub fn new(planet: Option<&'a PlanetPlacement>, on_close: impl FnMut() + 'a) -> Self {
        Self {
            planet,
            on_close: Box::new(on_close),
        }
    }

    /// Nothing is shown without a planet.
    pub fn view(&self) -> Option<PlanetDetails> {
        self.planet.map(PlanetDetails::from_placement)
    }

    pub fn close(&mut self) {
        (self.on_close)();
    }
}

impl fmt::Debug for PlanetDetailsPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanetDetailsPanel")
            .field("planet", &self.planet.map(|p| p.planet.name()))
            .finish_non_exhaustive()
    }
}
