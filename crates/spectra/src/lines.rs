//! Molecular line catalog
//!
//! Fixed tables mapping each molecule to the wavelengths at which it
//! absorbs, used both to inject features during synthesis and to search
//! for them during detection. Line centers are in nanometers; entries
//! beyond the synthesized 400-5000 nm band are kept for completeness and
//! simply never contribute.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Molecule vocabulary, ordered by detection priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Molecule {
    H2O,
    CO2,
    CH4,
    CO,
    NH3,
    O2,
    N2,
    H2,
    He,
}

impl Molecule {
    /// All molecules in the vocabulary
    pub const ALL: [Molecule; 9] = [
        Self::H2O,
        Self::CO2,
        Self::CH4,
        Self::CO,
        Self::NH3,
        Self::O2,
        Self::N2,
        Self::H2,
        Self::He,
    ];

    /// Chemical symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::H2O => "H2O",
            Self::CO2 => "CO2",
            Self::CH4 => "CH4",
            Self::CO => "CO",
            Self::NH3 => "NH3",
            Self::O2 => "O2",
            Self::N2 => "N2",
            Self::H2 => "H2",
            Self::He => "He",
        }
    }

    /// Parse a chemical symbol, case-insensitively.
    ///
    /// Non-molecular atmosphere components ("Noble gases", "Silicate
    /// clouds", "Unknown", "SO2") return `None` and inject nothing.
    pub fn from_symbol(symbol: &str) -> Option<Molecule> {
        Self::ALL
            .into_iter()
            .find(|m| m.symbol().eq_ignore_ascii_case(symbol))
    }

    /// Absorption line centers injected during synthesis, in nm.
    pub fn absorption_lines(&self) -> &'static [f64] {
        match self {
            // Near-infrared water bands
            Self::H2O => &[
                1134.0, 1177.0, 1368.0, 1400.0, 1454.0, 1500.0, 1560.0, 1620.0, 1650.0, 1700.0,
                1750.0, 1800.0, 1900.0, 1950.0, 2700.0, 2800.0, 2900.0, 3000.0, 3200.0, 3400.0,
                3600.0, 3800.0, 4000.0, 4200.0,
            ],
            Self::CO2 => &[
                1430.0, 1600.0, 2000.0, 2070.0, 2080.0, 4300.0, 4600.0, 14800.0, 15000.0,
            ],
            Self::CH4 => &[
                1170.0, 1240.0, 1320.0, 1660.0, 2200.0, 2300.0, 2400.0, 3300.0, 7700.0, 8900.0,
            ],
            Self::CO => &[1580.0, 2300.0, 4600.0, 4700.0],
            Self::NH3 => &[1500.0, 2000.0, 6450.0, 10500.0],
            // Oxygen A-band plus longer features
            Self::O2 => &[760.0, 1270.0, 13120.0],
            // Collision-induced absorption
            Self::N2 => &[4100.0, 4300.0],
            Self::H2 => &[17000.0, 20000.0, 28000.0],
            Self::He => &[10830.0, 5876.0],
        }
    }

    /// Line half-search width in nm: a feature contributes when the sample
    /// wavelength is within this distance of a line center.
    pub fn line_width_nm(&self) -> f64 {
        match self {
            Self::H2O => 50.0,
            Self::CO2 => 30.0,
            _ => 25.0,
        }
    }

    /// Relative line strength scaling the injected Gaussian profile
    pub fn line_strength(&self) -> f64 {
        match self {
            Self::H2O => 0.0003,
            Self::CO2 => 0.0002,
            Self::CH4 => 0.00015,
            Self::CO => 0.0001,
            Self::NH3 => 0.0001,
            Self::O2 => 0.00008,
            Self::N2 => 0.00005,
            Self::H2 => 0.00003,
            Self::He => 0.00002,
        }
    }

    /// Target wavelengths the detector scans for this molecule, in nm.
    ///
    /// A subset of the synthesis catalog; H2 and He have no reliable
    /// signature in the scanned band and are never reported.
    pub fn detection_signature(&self) -> &'static [f64] {
        match self {
            Self::H2O => &[1134.0, 1368.0, 1400.0, 1800.0, 2700.0, 3200.0],
            Self::CO2 => &[1430.0, 1600.0, 2070.0, 4300.0],
            Self::CH4 => &[1170.0, 1660.0, 2300.0, 3300.0],
            Self::CO => &[1580.0, 2300.0, 4700.0],
            Self::NH3 => &[1500.0, 6450.0],
            Self::O2 => &[760.0, 1270.0],
            Self::N2 => &[4300.0],
            Self::H2 | Self::He => &[],
        }
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
