//! Fixed-axis atmospheric profile for radar-style display
//!
//! Maps a record and its detection result onto nine molecule axes with a
//! three-tier fallback chain per axis: the record's own composition entry
//! first, then the detector's confidence, then a deterministic pseudo-value
//! keyed by the planet's name and id. With no planet selected every axis
//! sits at a flat baseline.

use std::collections::HashMap;

use serde::Serialize;

use catalog::{PlanetRecord, StringLcg};

use crate::detection::DetectionResult;
use crate::lines::Molecule;

/// Axis order of the profile
pub const PROFILE_AXES: [Molecule; 9] = [
    Molecule::H2O,
    Molecule::CO2,
    Molecule::CH4,
    Molecule::N2,
    Molecule::O2,
    Molecule::H2,
    Molecule::He,
    Molecule::NH3,
    Molecule::CO,
];

/// Axis value when no planet is selected
pub const BASELINE_VALUE: u32 = 20;

/// One profile axis with its resolved value in [5, 100] (or the baseline)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileAxis {
    pub molecule: Molecule,
    pub value: u32,
}

/// Merge composition entries into a per-symbol map with uppercase keys.
///
/// Compound keys split on non-alphanumeric separators and divide their
/// value evenly across every part; qualifier parts ("RICH", "DOMINATED")
/// receive a share too but never match an axis, so they drop out.
fn normalize_composition(composition: &std::collections::BTreeMap<String, u32>) -> HashMap<String, f64> {
    let mut normalized = HashMap::new();
    for (key, &value) in composition {
        let parts: Vec<&str> = key
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .collect();
        if parts.len() == 1 {
            normalized.insert(parts[0].to_ascii_uppercase(), value as f64);
        } else if !parts.is_empty() {
            let share = value as f64 / parts.len() as f64;
            for part in parts {
                *normalized.entry(part.to_ascii_uppercase()).or_insert(0.0) += share;
            }
        }
    }
    normalized
}

/// Resolve the nine-axis profile for a selected record.
///
/// `detection` may be absent (analysis still running); the chain then
/// skips straight from composition to the seeded fallback.
pub fn atmospheric_profile(
    record: Option<&PlanetRecord>,
    detection: Option<&DetectionResult>,
) -> Vec<ProfileAxis> {
    let Some(record) = record else {
        return PROFILE_AXES
            .iter()
            .map(|&molecule| ProfileAxis {
                molecule,
                value: BASELINE_VALUE,
            })
            .collect();
    };

    let normalized = normalize_composition(&record.atmosphere_composition);
    // Keyed by name and id so the same planet always resolves the same
    // fallback values, regardless of call order
    let mut fallback = StringLcg::from_key(&format!("{}-{}", record.name, record.id));

    PROFILE_AXES
        .iter()
        .map(|&molecule| {
            let key = molecule.symbol().to_ascii_uppercase();
            let value = if let Some(&share) = normalized.get(&key) {
                (share.round() as i64).clamp(0, 100).max(5) as u32
            } else if let Some(&conf) = detection.and_then(|d| d.confidence.get(&molecule)) {
                (((conf * 100.0).round() as i64).min(100)).max(5) as u32
            } else {
                // Deterministic per-planet pseudo-value in [10, 85];
                // drawn only when the axis actually falls through
                (10.0 + fallback.draw() * 75.0).round() as u32
            };
            ProfileAxis { molecule, value }
        })
        .collect()
}
