//! Spectral synthesis and detection for the exoplanet catalog
//!
//! Given a catalog record and an observing instrument, this crate
//! synthesizes a transmission spectrum with physically-motivated molecular
//! absorption features, runs a detection scan that recovers candidate
//! molecules and a biosignature verdict, and maps the results onto a
//! fixed-axis atmospheric profile.
//!
//! All entry points are pure functions of their arguments: spectra and
//! detection results are recomputed on every call and never cached.

pub mod detection;
pub mod instrument;
pub mod lines;
pub mod profile;
pub mod synthesis;

// Re-export key types at crate root
pub use detection::{
    BiosignatureLevel, BiosignatureVerdict, DetectionResult, PressureClass, biosignature_verdict,
    detect,
};
pub use instrument::{INSTRUMENTS, Instrument, InstrumentCategory, InstrumentId, InstrumentStatus};
pub use lines::Molecule;
pub use profile::{BASELINE_VALUE, PROFILE_AXES, ProfileAxis, atmospheric_profile};
pub use synthesis::{
    SAMPLES_PER_SPECTRUM, SpectralSample, WAVELENGTH_MAX_NM, WAVELENGTH_MIN_NM,
    WAVELENGTH_STEP_NM, synthesize,
};

#[cfg(test)]
mod instrument_test;
#[cfg(test)]
mod synthesis_test;
