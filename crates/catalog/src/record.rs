//! Catalog record type and its categorical vocabularies
//!
//! A `PlanetRecord` is immutable after generation: the catalog is built once
//! from a fixed seed and selection only reads. All attributes are either
//! drawn in a fixed order or derived from drawn values (see
//! `generation.rs` for the draw sequence).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use units::{Length, Mass};

use crate::atmosphere::Atmosphere;
use crate::planet_type::PlanetType;
use crate::stellar::StellarType;

/// Detection technique that produced the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscoveryMethod {
    TransitPhotometry,
    RadialVelocity,
    DirectImaging,
    GravitationalMicrolensing,
    Astrometry,
    TransitTimingVariations,
    PulsarTiming,
}

impl DiscoveryMethod {
    /// All methods in catalog draw order.
    pub const ALL: [DiscoveryMethod; 7] = [
        Self::TransitPhotometry,
        Self::RadialVelocity,
        Self::DirectImaging,
        Self::GravitationalMicrolensing,
        Self::Astrometry,
        Self::TransitTimingVariations,
        Self::PulsarTiming,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TransitPhotometry => "Transit Photometry",
            Self::RadialVelocity => "Radial Velocity",
            Self::DirectImaging => "Direct Imaging",
            Self::GravitationalMicrolensing => "Gravitational Microlensing",
            Self::Astrometry => "Astrometry",
            Self::TransitTimingVariations => "Transit Timing Variations",
            Self::PulsarTiming => "Pulsar Timing",
        }
    }
}

impl fmt::Display for DiscoveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Broad climate regime label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClimateZone {
    Hot,
    Temperate,
    Cold,
    TidallyLockedHot,
    TidallyLockedCold,
    Variable,
    ExtremeGreenhouse,
    Snowball,
}

impl ClimateZone {
    /// All climate zones in catalog draw order.
    pub const ALL: [ClimateZone; 8] = [
        Self::Hot,
        Self::Temperate,
        Self::Cold,
        Self::TidallyLockedHot,
        Self::TidallyLockedCold,
        Self::Variable,
        Self::ExtremeGreenhouse,
        Self::Snowball,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hot => "Hot",
            Self::Temperate => "Temperate",
            Self::Cold => "Cold",
            Self::TidallyLockedHot => "Tidally Locked Hot",
            Self::TidallyLockedCold => "Tidally Locked Cold",
            Self::Variable => "Variable",
            Self::ExtremeGreenhouse => "Extreme Greenhouse",
            Self::Snowball => "Snowball",
        }
    }
}

impl fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Observing instrument identifier
///
/// Keys into the fixed instrument-profile table (see the `spectra` crate);
/// also the catalog's discovery-instrument attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InstrumentId {
    Hubble,
    Kepler,
    Jwst,
    Tess,
    Spitzer,
    Chandra,
}

impl InstrumentId {
    /// All instruments in catalog draw order.
    pub const ALL: [InstrumentId; 6] = [
        Self::Hubble,
        Self::Kepler,
        Self::Jwst,
        Self::Tess,
        Self::Spitzer,
        Self::Chandra,
    ];

    /// Short lookup key
    pub fn key(&self) -> &'static str {
        match self {
            Self::Hubble => "hubble",
            Self::Kepler => "kepler",
            Self::Jwst => "jwst",
            Self::Tess => "tess",
            Self::Spitzer => "spitzer",
            Self::Chandra => "chandra",
        }
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Whether the record is a confirmed planet or a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmationStatus {
    Confirmed,
    Candidate,
}

/// Likelihood label for surface or atmospheric water
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterPresence {
    Likely,
    Unknown,
}

/// Heuristic biosignature tier assigned at generation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiosignaturePotential {
    Low,
    Medium,
    High,
}

/// Research-priority tier derived from habitability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResearchPriority {
    Critical,
    High,
    Medium,
    Low,
}

/// One generated exoplanet record
///
/// Continuous attributes keep the precision they were generated at, so two
/// equal-seed catalogs compare equal field-for-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetRecord {
    /// Sequential identifier, 1-based
    pub id: u32,
    /// Planet designation
    pub name: String,
    /// Host star designation, the name's segment before the first dash
    pub host_star: String,
    pub stellar_type: StellarType,
    pub discovery_year: u16,
    pub discovery_method: DiscoveryMethod,
    pub planet_type: PlanetType,
    /// Planet mass (always positive)
    pub mass: Mass,
    /// Planet radius (always positive)
    pub radius: Length,
    /// Orbital period in days (always positive)
    pub orbital_period_days: f64,
    /// Distance from the Sun (always positive)
    pub distance: Length,
    /// Equilibrium temperature in Kelvin
    pub temperature: i32,
    pub climate_zone: ClimateZone,
    /// Composite habitability score in [0, 1], 3-decimal precision
    pub habitability_score: f64,
    pub atmosphere: Atmosphere,
    /// Component percentages summing to 100 when the atmosphere is known
    pub atmosphere_composition: BTreeMap<String, u32>,
    /// Surface pressure in bar, present iff the atmosphere is known
    pub atmospheric_pressure_bar: Option<f64>,
    /// Field strength in gauss when detected
    pub magnetic_field_gauss: Option<f64>,
    pub discovery_instrument: InstrumentId,
    /// Classifier confidence in [0.7, 1.0]
    pub ai_confidence: f64,
    pub follow_up_observations: u32,
    /// Fractional transit depth, present iff discovered by transit photometry
    pub transit_depth: Option<f64>,
    pub stellar_magnitude: f64,
    /// Habitability weighted by a drawn scheduling factor
    pub priority_score: f64,
    pub orbital_eccentricity: f64,
    /// Incident flux in Earth-flux units
    pub insolation: f64,
    pub tidally_locked: bool,
    pub water_presence: WaterPresence,
    pub biosignature_potential: BiosignaturePotential,
    /// Days since the most recent observation
    pub last_observed_days_ago: u16,
    pub confirmed_status: ConfirmationStatus,
    pub research_priority: ResearchPriority,
}

impl PlanetRecord {
    /// Whether any spectral constraint on the atmosphere exists.
    pub fn has_atmosphere(&self) -> bool {
        self.atmosphere != Atmosphere::Unknown
    }

    /// Distance in light-years.
    pub fn distance_ly(&self) -> f64 {
        self.distance.to_light_years()
    }
}
