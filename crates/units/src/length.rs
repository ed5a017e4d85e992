use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Nominal solar radius in kilometers
pub const SOLAR_RADIUS_KM: f64 = 695_700.0;

/// Kilometers per light-year (9.4607 × 10¹² km)
pub const KM_PER_LIGHT_YEAR: f64 = 9.4607e12;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with kilometers as the base
/// unit, which keeps planet radii, stellar radii, and interstellar distances
/// in one type. Transit depths are radius ratios, so `Length / Length`
/// returning a dimensionless `f64` is the operation the synthesizer leans on.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let planet = Length::from_earth_radii(1.0);
/// let star = Length::from_solar_radii(1.0);
///
/// let depth = (planet / star).powi(2);
/// assert!(depth < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: kilometers

impl Length {
    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in Earth radii.
    pub fn from_earth_radii(value: f64) -> Self {
        Self(value * EARTH_RADIUS_KM)
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_KM)
    }

    /// Creates a new `Length` from a value in light-years.
    pub fn from_light_years(value: f64) -> Self {
        Self(value * KM_PER_LIGHT_YEAR)
    }

    /// Returns the length in kilometers.
    pub fn to_km(&self) -> f64 {
        self.0
    }

    /// Returns the length in Earth radii.
    pub fn to_earth_radii(&self) -> f64 {
        self.0 / EARTH_RADIUS_KM
    }

    /// Returns the length in solar radii.
    pub fn to_solar_radii(&self) -> f64 {
        self.0 / SOLAR_RADIUS_KM
    }

    /// Returns the length in light-years.
    pub fn to_light_years(&self) -> f64 {
        self.0 / KM_PER_LIGHT_YEAR
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}
