use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ChartError;
use crate::zodiac;

/// Bodies placed on a KP chart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
    Uranus,
    Neptune,
    Pluto,
    /// Any body the chart service sends that is not in the list above.
    Other(String),
}

impl Planet {
    pub const ALL: [Planet; 12] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mars,
        Planet::Mercury,
        Planet::Jupiter,
        Planet::Venus,
        Planet::Saturn,
        Planet::Rahu,
        Planet::Ketu,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    /// Upper-case identity as used on the wire.
    pub fn name(&self) -> &str {
        match self {
            Planet::Sun => "SUN",
            Planet::Moon => "MOON",
            Planet::Mars => "MARS",
            Planet::Mercury => "MERCURY",
            Planet::Jupiter => "JUPITER",
            Planet::Venus => "VENUS",
            Planet::Saturn => "SATURN",
            Planet::Rahu => "RAHU",
            Planet::Ketu => "KETU",
            Planet::Uranus => "URANUS",
            Planet::Neptune => "NEPTUNE",
            Planet::Pluto => "PLUTO",
            Planet::Other(name) => name,
        }
    }

    /// Two-letter badge symbol.
    pub fn symbol(&self) -> String {
        let symbol = match self {
            Planet::Sun => "Su",
            Planet::Moon => "Mo",
            Planet::Mars => "Ma",
            Planet::Mercury => "Me",
            Planet::Jupiter => "Ju",
            Planet::Venus => "Ve",
            Planet::Saturn => "Sa",
            Planet::Rahu => "Ra",
            Planet::Ketu => "Ke",
            Planet::Uranus => "Ur",
            Planet::Neptune => "Ne",
            Planet::Pluto => "Pl",
            Planet::Other(name) => return name.chars().take(2).collect(),
        };
        symbol.to_string()
    }

    /// Lower-case key for colour tables.
    pub fn key(&self) -> String {
        self.name().to_ascii_lowercase()
    }
}

impl From<String> for Planet {
    fn from(value: String) -> Self {
        Planet::ALL
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(value.trim()))
            .cloned()
            .unwrap_or(Planet::Other(value))
    }
}

impl From<&str> for Planet {
    fn from(value: &str) -> Self {
        Planet::from(value.to_string())
    }
}

impl From<Planet> for String {
    fn from(planet: Planet) -> Self {
        planet.name().to_string()
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// KP ownership chain of a zodiac position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LordChain {
    pub sign: String,
    pub star: String,
    pub sub: String,
    #[serde(rename = "subSub", default, skip_serializing_if = "Option::is_none")]
    pub sub_sub: Option<String>,
}

/// One planet's state at the chart's reference moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPlacement {
    pub planet: Planet,
    /// Longitude in degrees (0-360)
    pub longitude: f64,
    #[serde(default)]
    pub is_retrograde: bool,
    pub sign: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_name: Option<String>,
    pub nakshatra: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nakshatra_name: Option<String>,
    pub house: u8,
    pub lords: LordChain,
}

impl PlanetPlacement {
    /// Sign name as supplied, else from the sign table.
    pub fn display_sign_name(&self) -> Option<&str> {
        self.sign_name
            .as_deref()
            .or_else(|| zodiac::sign_name(self.sign))
    }

    pub fn display_nakshatra_name(&self) -> Option<&str> {
        self.nakshatra_name
            .as_deref()
            .or_else(|| zodiac::nakshatra_name(self.nakshatra))
    }
}

/// Boundary of a house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseCusp {
    pub house: u8,
    pub longitude: f64,
    pub sign: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_name: Option<String>,
    pub lords: LordChain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub dob: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

impl BirthData {
    /// Birth date as e.g. "5 Mar 1990", or the raw string if it cannot be
    /// parsed.
    pub fn display_date(&self) -> String {
        let dob = self.dob.trim();
        let date = DateTime::parse_from_rfc3339(dob)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDateTime::parse_from_str(dob, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
            .or_else(|_| NaiveDateTime::parse_from_str(dob, "%Y-%m-%dT%H:%M").map(|dt| dt.date()))
            .or_else(|_| NaiveDate::parse_from_str(dob, "%Y-%m-%d"));
        match date {
            Ok(date) => date.format("%-d %b %Y").to_string(),
            Err(_) => self.dob.clone(),
        }
    }
}

/// Everything a chart render needs. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_data: Option<BirthData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ayanamsa: Option<f64>,
    #[serde(default)]
    pub planets: Vec<PlanetPlacement>,
    #[serde(default)]
    pub cusps: Vec<HouseCusp>,
    pub ascendant_sign: u8,
    pub moon_sign: u8,
    pub sun_sign: u8,
}

impl ChartSnapshot {
    pub fn place(&self) -> Option<&str> {
        self.birth_data.as_ref().and_then(|b| b.place.as_deref())
    }

    pub fn find_planet(&self, planet: &Planet) -> Option<&PlanetPlacement> {
        self.planets.iter().find(|p| &p.planet == planet)
    }
}

/// Envelope returned by the chart calculation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ChartSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChartResult {
    pub fn ok(snapshot: ChartSnapshot) -> Self {
        Self {
            success: true,
            data: Some(snapshot),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Borrowing form of [`ChartResult::into_snapshot`].
    pub fn snapshot(&self) -> Result<&ChartSnapshot, ChartError> {
        match (self.success, &self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(ChartError::Upstream(self.error.clone())),
        }
    }

    /// The snapshot, or the upstream failure. A result with `success` but no
    /// data is treated as a failure too.
    pub fn into_snapshot(self) -> Result<ChartSnapshot, ChartError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(ChartError::Upstream(self.error)),
        }
    }
}

/// Parse a chart result envelope from JSON
pub fn load_chart_result_from_json(json: &str) -> Result<ChartResult, ChartError> {
    serde_json::from_str(json).map_err(|e| ChartError::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_parse_is_case_insensitive() {
        assert_eq!(Planet::from("sun"), Planet::Sun);
        assert_eq!(Planet::from("Rahu"), Planet::Rahu);
        assert_eq!(Planet::from("CHIRON"), Planet::Other("CHIRON".to_string()));
    }

    #[test]
    fn test_planet_symbols() {
        assert_eq!(Planet::Mercury.symbol(), "Me");
        assert_eq!(Planet::Ketu.symbol(), "Ke");
        assert_eq!(Planet::Other("CHIRON".to_string()).symbol(), "CH");
        assert_eq!(Planet::Other("X".to_string()).symbol(), "X");
    }

    #[test]
    fn test_placement_wire_format() {
        let json = r#"{
            "planet": "MARS",
            "longitude": 95.5,
            "isRetrograde": true,
            "sign": 4,
            "nakshatra": 8,
            "house": 1,
            "lords": { "sign": "MOON", "star": "SATURN", "sub": "MERCURY" }
        }"#;
        let placement: PlanetPlacement = serde_json::from_str(json).unwrap();
        assert_eq!(placement.planet, Planet::Mars);
        assert!(placement.is_retrograde);
        assert_eq!(placement.lords.sub_sub, None);
        assert_eq!(placement.display_sign_name(), Some("Cancer"));
        assert_eq!(placement.display_nakshatra_name(), Some("Pushya"));

        let out = serde_json::to_value(&placement).unwrap();
        assert_eq!(out["planet"], "MARS");
        assert_eq!(out["isRetrograde"], true);
        assert!(out["lords"].get("subSub").is_none());
    }

    #[test]
    fn test_birth_date_display() {
        let birth = |dob: &str| BirthData {
            dob: dob.to_string(),
            lat: 18.52,
            lon: 73.85,
            place: None,
        };
        assert_eq!(birth("1990-03-05").display_date(), "5 Mar 1990");
        assert_eq!(birth("1990-03-05T14:30:00").display_date(), "5 Mar 1990");
        assert_eq!(birth("1990-03-05T14:30:00+05:30").display_date(), "5 Mar 1990");
        assert_eq!(birth("sometime in spring").display_date(), "sometime in spring");
    }

    #[test]
    fn test_into_snapshot_failure() {
        let result = ChartResult::failed("timeout");
        assert_eq!(
            result.into_snapshot(),
            Err(ChartError::Upstream(Some("timeout".to_string())))
        );

        let result = ChartResult {
            success: true,
            data: None,
            error: None,
        };
        assert_eq!(result.into_snapshot(), Err(ChartError::Upstream(None)));
    }

    #[test]
    fn test_load_invalid_json() {
        let err = load_chart_result_from_json("{ nope").unwrap_err();
        assert!(matches!(err, ChartError::InvalidJson(_)));
    }
}
