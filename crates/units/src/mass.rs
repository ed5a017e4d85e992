use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Mass of the Earth in kilograms (5.972 × 10²⁴ kg)
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Jupiter mass in Earth masses: 1 M_J = 317.8 M⊕
pub const JUPITER_TO_EARTH_MASSES: f64 = 317.8;

/// A planetary mass quantity using f64 precision.
///
/// The `Mass` struct represents mass values with Earth masses as the base
/// unit, the natural scale for an exoplanet catalog spanning sub-Earths to
/// super-Jupiters.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let earth = Mass::from_earth_masses(1.0);
/// let jupiter = Mass::from_jupiter_masses(1.0);
///
/// assert!(jupiter.to_earth_masses() > 300.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Earth masses

impl Mass {
    /// Creates a new `Mass` from a value in Earth masses.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Jupiter masses.
    pub fn from_jupiter_masses(value: f64) -> Self {
        Self(value * JUPITER_TO_EARTH_MASSES)
    }

    /// Creates a new `Mass` from a value in kilograms.
    pub fn from_kg(value: f64) -> Self {
        Self(value / EARTH_MASS_KG)
    }

    /// Returns the mass in Earth masses.
    pub fn to_earth_masses(&self) -> f64 {
        self.0
    }

    /// Returns the mass in Jupiter masses.
    pub fn to_jupiter_masses(&self) -> f64 {
        self.0 / JUPITER_TO_EARTH_MASSES
    }

    /// Returns the mass in kilograms.
    pub fn to_kg(&self) -> f64 {
        self.0 * EARTH_MASS_KG
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}
