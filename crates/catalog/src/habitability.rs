//! Composite habitability scoring
//!
//! The score is a product of three independent factor scores in (0, 1]:
//! temperature, mass, and distance. Each factor is 1.0 inside its
//! preferred range and decays exponentially outside it. A small drawn
//! jitter models measurement spread; the final score is clamped to [0, 1]
//! and kept at 3-decimal precision.

/// Temperature suitability factor.
///
/// 1.0 inside the liquid-water band (273, 373) K, otherwise
/// `exp(-|T - 310| / 100)`.
pub fn temperature_factor(temperature: i32) -> f64 {
    if temperature > 273 && temperature < 373 {
        1.0
    } else {
        (-((temperature - 310).abs() as f64) / 100.0).exp()
    }
}

/// Mass suitability factor.
///
/// 1.0 inside (0.5, 5) Earth masses, otherwise `exp(-|m - 1| / 2)`.
pub fn mass_factor(mass_earth: f64) -> f64 {
    if mass_earth > 0.5 && mass_earth < 5.0 {
        1.0
    } else {
        (-(mass_earth - 1.0).abs() / 2.0).exp()
    }
}

/// Observability factor favoring nearby systems: `exp(-d / 200)`.
pub fn distance_factor(distance_ly: f64) -> f64 {
    (-distance_ly / 200.0).exp()
}

/// Combined habitability score at 3-decimal precision, clamped to [0, 1].
///
/// `jitter` is the catalog's drawn spread factor in [0.8, 1.2).
pub fn score(temperature: i32, mass_earth: f64, distance_ly: f64, jitter: f64) -> f64 {
    let raw = temperature_factor(temperature)
        * mass_factor(mass_earth)
        * distance_factor(distance_ly)
        * jitter;
    ((raw * 1000.0).round() / 1000.0).clamp(0.0, 1.0)
}
