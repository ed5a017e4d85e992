//! Molecular detection and biosignature assessment
//!
//! Scans a synthesized spectrum against each molecule's detection
//! signature, accumulates a confidence per molecule, and derives a
//! biosignature verdict from the detected set. Priority-ordered rule
//! table, first match wins:
//!
//! | Level  | Score | Condition                                 |
//! |--------|-------|-------------------------------------------|
//! | High   | 0.85  | O2 and H2O both detected                  |
//! | Medium | 0.6   | O2 detected, or CH4 and H2O both detected |
//! | Medium | 0.5   | H2O detected, T ∈ (273, 373) K            |
//! | Low    | 0     | everything else                           |

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use catalog::PlanetRecord;

use crate::lines::Molecule;
use crate::synthesis::SpectralSample;

/// Wavelength window around a signature target, nm
const SIGNATURE_WINDOW_NM: f64 = 30.0;

/// Minimum SNR for a sample to count toward a detection
const MIN_DETECTION_SNR: f64 = 3.0;

/// Minimum depth/uncertainty ratio for a feature to register
const MIN_SIGNAL_STRENGTH: f64 = 2.0;

/// Confidence threshold for reporting a molecule as detected
const DETECTION_CONFIDENCE_THRESHOLD: f64 = 0.3;

/// Biosignature assessment tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BiosignatureLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for BiosignatureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        write!(f, "{}", name)
    }
}

/// Biosignature verdict with its triggering rule spelled out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiosignatureVerdict {
    pub level: BiosignatureLevel,
    pub reason: &'static str,
    pub score: f64,
}

/// Qualitative atmospheric pressure class from detection count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PressureClass {
    Thin,
    Moderate,
    Dense,
}

/// Result of scanning one spectrum
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// Molecules passing the confidence threshold, in detection-scan order
    pub detected_molecules: Vec<Molecule>,
    /// Confidence per detected molecule, in [0, 1]
    pub confidence: BTreeMap<Molecule, f64>,
    pub biosignature: BiosignatureVerdict,
    /// Mean SNR across all samples
    pub spectral_quality: f64,
    pub pressure: PressureClass,
    pub recommended_follow_up: &'static str,
}

/// Scan a spectrum for the catalogued molecular signatures.
pub fn detect(spectrum: &[SpectralSample], record: &PlanetRecord) -> DetectionResult {
    let mut detected_molecules = Vec::new();
    let mut confidence = BTreeMap::new();

    for molecule in Molecule::ALL {
        let targets = molecule.detection_signature();
        if targets.is_empty() {
            continue;
        }

        let mut score = 0.0;
        let mut matched = 0usize;
        for &target in targets {
            let feature = spectrum.iter().find(|sample| {
                (sample.wavelength_nm - target).abs() < SIGNATURE_WINDOW_NM
                    && sample.atmospheric_absorption
            });
            if let Some(sample) = feature
                && sample.snr > MIN_DETECTION_SNR
            {
                let signal_strength = sample.transit_depth / sample.uncertainty;
                if signal_strength > MIN_SIGNAL_STRENGTH {
                    score += (signal_strength / 5.0).min(1.0);
                    matched += 1;
                }
            }
        }

        if matched > 0 {
            let total = targets.len() as f64;
            let molecule_confidence = (score / total) * (matched as f64 / total);
            if molecule_confidence > DETECTION_CONFIDENCE_THRESHOLD {
                detected_molecules.push(molecule);
                confidence.insert(molecule, molecule_confidence);
            }
        }
    }

    let biosignature = biosignature_verdict(&detected_molecules, record.temperature);

    let spectral_quality = if spectrum.is_empty() {
        0.0
    } else {
        spectrum.iter().map(|sample| sample.snr).sum::<f64>() / spectrum.len() as f64
    };

    let pressure = match detected_molecules.len() {
        0 => PressureClass::Thin,
        1 | 2 => PressureClass::Moderate,
        _ => PressureClass::Dense,
    };

    let recommended_follow_up = match biosignature.level {
        BiosignatureLevel::High => "Immediate multi-telescope campaign",
        BiosignatureLevel::Medium => "Extended JWST observations",
        BiosignatureLevel::Low => "Continue routine monitoring",
    };

    DetectionResult {
        detected_molecules,
        confidence,
        biosignature,
        spectral_quality,
        pressure,
        recommended_follow_up,
    }
}

/// Apply the priority-ordered biosignature rule table.
pub fn biosignature_verdict(detected: &[Molecule], temperature: i32) -> BiosignatureVerdict {
    let has = |molecule| detected.contains(&molecule);

    if has(Molecule::O2) && has(Molecule::H2O) {
        BiosignatureVerdict {
            level: BiosignatureLevel::High,
            reason: "O2 + H2O co-detection suggests possible photosynthesis",
            score: 0.85,
        }
    } else if has(Molecule::O2) || (has(Molecule::CH4) && has(Molecule::H2O)) {
        BiosignatureVerdict {
            level: BiosignatureLevel::Medium,
            reason: "Single biosignature gas detected, follow-up needed",
            score: 0.6,
        }
    } else if has(Molecule::H2O) && temperature > 273 && temperature < 373 {
        BiosignatureVerdict {
            level: BiosignatureLevel::Medium,
            reason: "Water vapor in habitable temperature range",
            score: 0.5,
        }
    } else {
        BiosignatureVerdict {
            level: BiosignatureLevel::Low,
            reason: "No biosignature molecules detected",
            score: 0.0,
        }
    }
}
