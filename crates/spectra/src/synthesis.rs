//! Transmission-spectrum synthesis
//!
//! For a (record, instrument) pair, produces a dense wavelength-indexed
//! spectrum: a baseline transit depth from the radius ratio, Gaussian
//! absorption features for every catalogued molecule in the atmosphere,
//! and three noise components (stellar activity, systematics, photon
//! noise). Spectra are rebuilt from scratch on every call; nothing is
//! cached across pairs.
//!
//! Noise draws come from a `ChaChaRng` seeded by (record id, instrument),
//! three draws per wavelength bin in a fixed order, so the same pair
//! always synthesizes the same spectrum.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use serde::Serialize;
use units::Length;

use catalog::{InstrumentId, PlanetRecord};

use crate::instrument::Instrument;
use crate::lines::Molecule;

/// Shortest synthesized wavelength, nm
pub const WAVELENGTH_MIN_NM: f64 = 400.0;
/// Longest synthesized wavelength, nm
pub const WAVELENGTH_MAX_NM: f64 = 5000.0;
/// Wavelength bin width, nm
pub const WAVELENGTH_STEP_NM: f64 = 2.0;
/// Samples per spectrum: 400..=5000 nm inclusive at 2 nm steps
pub const SAMPLES_PER_SPECTRUM: usize = 2301;

/// One point of a synthesized transmission spectrum
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectralSample {
    pub wavelength_nm: f64,
    /// Relative flux in [0.0001, 1.0]
    pub flux: f64,
    /// Total fractional transit depth at this wavelength
    pub transit_depth: f64,
    /// Signal-to-noise ratio, floored at 3
    pub snr: f64,
    /// Instrument throughput applied at this wavelength
    pub instrument_efficiency: f64,
    /// Stellar-activity noise magnitude
    pub stellar_noise: f64,
    /// Systematic noise magnitude
    pub systematic_noise: f64,
    /// Photon noise magnitude
    pub photon_noise: f64,
    /// Whether a molecular line contributed at this wavelength
    pub atmospheric_absorption: bool,
    /// Depth uncertainty estimate, floored at 1e-5
    pub uncertainty: f64,
}

/// Seed for the per-pair noise generator.
fn noise_seed(record: &PlanetRecord, instrument: InstrumentId) -> u64 {
    ((record.id as u64) << 8) | instrument as u64
}

/// Synthesize the transmission spectrum for one (record, instrument) pair.
///
/// Degrades gracefully on unconstrained atmospheres: with no catalogued
/// molecules the baseline-plus-noise spectrum is still produced and no
/// sample carries the absorption flag.
pub fn synthesize(record: &PlanetRecord, instrument: InstrumentId) -> Vec<SpectralSample> {
    let profile = Instrument::profile(instrument);
    let mut noise = ChaChaRng::seed_from_u64(noise_seed(record, instrument));

    // (Rp/Rs)² against a solar-radius reference star
    let baseline_depth = (record.radius / Length::from_solar_radii(1.0)).powi(2);

    let molecules: Vec<Molecule> = record
        .atmosphere
        .component_symbols()
        .iter()
        .filter_map(|symbol| Molecule::from_symbol(symbol))
        .collect();

    let mut samples = Vec::with_capacity(SAMPLES_PER_SPECTRUM);
    for bin in 0..SAMPLES_PER_SPECTRUM {
        let wavelength = WAVELENGTH_MIN_NM + bin as f64 * WAVELENGTH_STEP_NM;
        let efficiency = profile.throughput(wavelength);

        // Gaussian line contributions from every nearby catalogued line
        let mut line_depth = 0.0;
        for molecule in &molecules {
            let width = molecule.line_width_nm();
            let strength = molecule.line_strength();
            for &center in molecule.absorption_lines() {
                if (wavelength - center).abs() < width {
                    let gaussian =
                        (-0.5 * ((wavelength - center) / (width / 3.0)).powi(2)).exp();
                    line_depth += baseline_depth * strength * gaussian * 1000.0;
                }
            }
        }

        // Three independent noise terms, drawn in fixed order
        let stellar_activity = 1e-5 * (wavelength / 100.0).sin() * noise.random::<f64>();
        let systematic = 2e-5 * (noise.random::<f64>() - 0.5);
        let photon = 1e-5 * (1.0 / efficiency).sqrt() * (noise.random::<f64>() - 0.5);

        let total_depth = baseline_depth + line_depth + stellar_activity + systematic + photon;
        let flux = (1.0 - total_depth).clamp(0.0001, 1.0);

        // Photon-count proxy with a wavelength-banded collection factor
        let band_factor = if wavelength < 1000.0 {
            1.0
        } else if wavelength < 2000.0 {
            0.8
        } else {
            0.5
        };
        let photon_count = efficiency * 1_000_000.0 * band_factor;
        let total_noise = (photon_count + (systematic * 1_000_000.0).powi(2)).sqrt();
        let snr = (photon_count / total_noise).max(3.0);

        samples.push(SpectralSample {
            wavelength_nm: wavelength,
            flux,
            transit_depth: total_depth,
            snr,
            instrument_efficiency: efficiency,
            stellar_noise: stellar_activity.abs(),
            systematic_noise: systematic.abs(),
            photon_noise: photon.abs(),
            atmospheric_absorption: line_depth > 0.0,
            uncertainty: (total_depth / snr).max(1e-5),
        });
    }

    samples
}
