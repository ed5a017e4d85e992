//! Categorical planet classification

use std::fmt;

use serde::{Deserialize, Serialize};

/// Observable planet category
///
/// Drawn uniformly during catalog generation; the physical correlations
/// (radius from mass bracket, temperature from period and stellar type)
/// are carried by the continuous attributes instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanetType {
    /// Rocky planet more massive than Earth
    SuperEarth,
    /// Small volatile-rich planet with a thick envelope
    MiniNeptune,
    /// Jupiter-class gas-dominated planet
    GasGiant,
    /// Earth-class rocky planet
    Terrestrial,
    /// Close-in, strongly irradiated gas giant
    HotJupiter,
    /// Uranus/Neptune-class volatile planet
    IceGiant,
    /// Rocky body smaller than Earth
    SubEarth,
    /// Inflated low-density planet
    PuffyPlanet,
    /// Surface dominated by a global ocean
    OceanWorld,
    /// Dry rocky planet with little surface volatiles
    DesertWorld,
}

impl PlanetType {
    /// All planet types in catalog draw order.
    pub const ALL: [PlanetType; 10] = [
        Self::SuperEarth,
        Self::MiniNeptune,
        Self::GasGiant,
        Self::Terrestrial,
        Self::HotJupiter,
        Self::IceGiant,
        Self::SubEarth,
        Self::PuffyPlanet,
        Self::OceanWorld,
        Self::DesertWorld,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::SuperEarth => "Super Earth",
            Self::MiniNeptune => "Mini-Neptune",
            Self::GasGiant => "Gas Giant",
            Self::Terrestrial => "Terrestrial",
            Self::HotJupiter => "Hot Jupiter",
            Self::IceGiant => "Ice Giant",
            Self::SubEarth => "Sub-Earth",
            Self::PuffyPlanet => "Puffy Planet",
            Self::OceanWorld => "Ocean World",
            Self::DesertWorld => "Desert World",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
