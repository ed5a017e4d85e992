//! Atmosphere vocabulary, temperature-banded selection, and composition
//!
//! Atmosphere labels are a fixed vocabulary. A label decomposes into one or
//! more component names (split on `/`), and each component strips its
//! qualifier suffix ("-rich", "-dominated") to yield a molecule symbol for
//! spectral synthesis. Multi-component atmospheres carry integer percentage
//! shares that sum to exactly 100.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rng::Lcg;

/// Atmosphere label vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Atmosphere {
    /// Primordial hydrogen/helium envelope
    HydrogenHelium,
    /// Water-vapor dominated
    WaterRich,
    /// Venus-like CO₂ atmosphere
    Co2Dominated,
    /// Methane-rich, Titan-like
    MethaneRich,
    /// Earth-like nitrogen/oxygen mix
    NitrogenOxygen,
    /// Volcanic sulfur-dioxide atmosphere
    So2Rich,
    /// Ammonia-rich, cold-giant chemistry
    AmmoniaRich,
    /// Inert noble-gas remnant
    NobleGases,
    /// Mineral vapor condensing to silicate clouds
    SilicateClouds,
    /// No spectral constraint available
    Unknown,
}

impl Atmosphere {
    /// Catalog label, matching the observation-archive vocabulary.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HydrogenHelium => "H2/He",
            Self::WaterRich => "H2O-rich",
            Self::Co2Dominated => "CO2-dominated",
            Self::MethaneRich => "CH4-rich",
            Self::NitrogenOxygen => "N2/O2",
            Self::So2Rich => "SO2-rich",
            Self::AmmoniaRich => "NH3-rich",
            Self::NobleGases => "Noble gases",
            Self::SilicateClouds => "Silicate clouds",
            Self::Unknown => "Unknown",
        }
    }

    /// Raw label components, split on `/`, qualifier suffixes kept.
    ///
    /// These are the keys of the generated composition map.
    pub fn components(&self) -> Vec<&'static str> {
        self.label().split('/').map(str::trim).collect()
    }

    /// Component molecule symbols with "-rich"/"-dominated" qualifiers
    /// stripped, for matching against the molecular line catalog.
    /// Non-molecular components ("Noble gases", "Silicate clouds",
    /// "Unknown") pass through unchanged and simply match nothing.
    pub fn component_symbols(&self) -> Vec<&'static str> {
        self.label()
            .split('/')
            .map(|c| {
                c.trim_end_matches("-rich")
                    .trim_end_matches("-dominated")
                    .trim()
            })
            .collect()
    }

    /// Select an atmosphere label from the temperature-banded candidate
    /// lists, consuming draws from the shared catalog generator.
    ///
    /// Five bands: silicate/primordial above 1500 K, hot chemistry above
    /// 800 K, warm volatiles above 400 K, temperate mixes above 200 K, and
    /// a cold band that is unconstrained 70% of the time.
    pub fn select_for_temperature(temperature: i32, rng: &mut Lcg) -> Self {
        if temperature > 1500 {
            if rng.draw() > 0.5 {
                Self::SilicateClouds
            } else {
                Self::HydrogenHelium
            }
        } else if temperature > 800 {
            *rng.pick(&[Self::HydrogenHelium, Self::So2Rich, Self::NobleGases])
        } else if temperature > 400 {
            *rng.pick(&[Self::Co2Dominated, Self::WaterRich, Self::MethaneRich])
        } else if temperature > 200 {
            *rng.pick(&[
                Self::NitrogenOxygen,
                Self::Co2Dominated,
                Self::MethaneRich,
                Self::AmmoniaRich,
            ])
        } else if rng.draw() > 0.3 {
            Self::Unknown
        } else {
            *rng.pick(&[Self::MethaneRich, Self::AmmoniaRich])
        }
    }

    /// Decompose the label into integer percentage shares summing to 100.
    ///
    /// Each component but the last draws from the unallocated percentage
    /// with a floor of 20 × (components still to place); the final
    /// component absorbs the remainder. Unknown atmospheres have no
    /// composition.
    pub fn composition(&self, rng: &mut Lcg) -> BTreeMap<String, u32> {
        let mut composition = BTreeMap::new();
        if *self == Self::Unknown {
            return composition;
        }

        let components = self.components();
        let count = components.len();
        let mut remaining: u32 = 100;
        let mut shares = Vec::with_capacity(count);
        for placed in 0..count.saturating_sub(1) {
            let reserve = 20 * (count - placed - 1) as u32;
            let share = (rng.draw() * (remaining - reserve) as f64 + 20.0) as u32;
            shares.push(share);
            remaining -= share;
        }
        shares.push(remaining);

        for (component, share) in components.into_iter().zip(shares) {
            composition.insert(component.to_string(), share);
        }
        composition
    }
}

impl fmt::Display for Atmosphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
