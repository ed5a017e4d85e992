//! Host-star spectral classification

use std::fmt;

use serde::{Deserialize, Serialize};

/// Spectral classification of a planet's host star
///
/// The catalog draws stellar types uniformly; the type feeds the
/// equilibrium-temperature derivation through `base_temperature()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StellarType {
    /// Red dwarf, the most common stellar class
    MDwarf,
    /// Orange dwarf
    KDwarf,
    /// Yellow dwarf (solar analog)
    GDwarf,
    /// Yellow-white dwarf
    FDwarf,
    /// Hot white main-sequence star
    AType,
    /// Two gravitationally bound stars
    BinarySystem,
    /// Evolved giant off the main sequence
    RedGiant,
    /// Degenerate stellar remnant
    WhiteDwarf,
}

impl StellarType {
    /// All stellar types in catalog draw order.
    pub const ALL: [StellarType; 8] = [
        Self::MDwarf,
        Self::KDwarf,
        Self::GDwarf,
        Self::FDwarf,
        Self::AType,
        Self::BinarySystem,
        Self::RedGiant,
        Self::WhiteDwarf,
    ];

    /// Reference photospheric temperature in Kelvin used for the planet
    /// equilibrium-temperature derivation.
    ///
    /// M-dwarfs 3500 K, K-dwarfs 4500 K, G-dwarfs 5500 K, everything
    /// hotter or more exotic 6500 K.
    pub fn base_temperature(&self) -> f64 {
        match self {
            Self::MDwarf => 3500.0,
            Self::KDwarf => 4500.0,
            Self::GDwarf => 5500.0,
            _ => 6500.0,
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::MDwarf => "M-dwarf",
            Self::KDwarf => "K-dwarf",
            Self::GDwarf => "G-dwarf",
            Self::FDwarf => "F-dwarf",
            Self::AType => "A-type",
            Self::BinarySystem => "Binary System",
            Self::RedGiant => "Red Giant",
            Self::WhiteDwarf => "White Dwarf",
        }
    }
}

impl fmt::Display for StellarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
