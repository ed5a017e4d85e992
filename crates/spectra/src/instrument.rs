//! Fixed observing-instrument reference table
//!
//! Six space observatories with hard-coded profiles. The table is read-only
//! reference data: nothing updates it at runtime, and the synthesizer only
//! consumes `throughput()`.

use serde::Serialize;

pub use catalog::InstrumentId;

/// Broad detector category, driving the wavelength-dependent throughput curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InstrumentCategory {
    /// Optical/UV imaging and spectroscopy
    Optical,
    /// Infrared spectroscopy
    Infrared,
    /// High-energy astrophysics
    XRay,
    /// Broadband transit photometry
    Photometric,
}

/// Operational state; retired instruments keep a zero efficiency entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InstrumentStatus {
    Active,
    Retired,
}

/// One observatory profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Instrument {
    pub id: InstrumentId,
    pub name: &'static str,
    pub category: InstrumentCategory,
    pub launched: u16,
    pub status: InstrumentStatus,
    /// Operational efficiency percentage; 0 when retired
    pub efficiency: f64,
    /// Human-readable bandpass description
    pub bandpass: &'static str,
}

/// The reference table, indexed by `InstrumentId` discriminant order
pub const INSTRUMENTS: [Instrument; 6] = [
    Instrument {
        id: InstrumentId::Hubble,
        name: "Hubble Space Telescope",
        category: InstrumentCategory::Optical,
        launched: 1990,
        status: InstrumentStatus::Active,
        efficiency: 94.2,
        bandpass: "115-2500 nm",
    },
    Instrument {
        id: InstrumentId::Kepler,
        name: "Kepler Space Telescope",
        category: InstrumentCategory::Photometric,
        launched: 2009,
        status: InstrumentStatus::Retired,
        efficiency: 0.0,
        bandpass: "420-900 nm",
    },
    Instrument {
        id: InstrumentId::Jwst,
        name: "James Webb Space Telescope",
        category: InstrumentCategory::Infrared,
        launched: 2021,
        status: InstrumentStatus::Active,
        efficiency: 98.7,
        bandpass: "600 nm - 28.3 um",
    },
    Instrument {
        id: InstrumentId::Tess,
        name: "TESS (Transiting Exoplanet Survey Satellite)",
        category: InstrumentCategory::Photometric,
        launched: 2018,
        status: InstrumentStatus::Active,
        efficiency: 91.8,
        bandpass: "600-1000 nm",
    },
    Instrument {
        id: InstrumentId::Spitzer,
        name: "Spitzer Space Telescope",
        category: InstrumentCategory::Infrared,
        launched: 2003,
        status: InstrumentStatus::Retired,
        efficiency: 0.0,
        bandpass: "3.6-160 um",
    },
    Instrument {
        id: InstrumentId::Chandra,
        name: "Chandra X-ray Observatory",
        category: InstrumentCategory::XRay,
        launched: 1999,
        status: InstrumentStatus::Active,
        efficiency: 89.3,
        bandpass: "0.1-10 keV",
    },
];

/// Base efficiency substituted when an instrument's stored efficiency is 0
/// (retired instruments still synthesize at a nominal throughput)
const DEFAULT_EFFICIENCY_PCT: f64 = 90.0;

impl Instrument {
    /// Look up the fixed profile for an instrument id.
    pub fn profile(id: InstrumentId) -> &'static Instrument {
        &INSTRUMENTS[id as usize]
    }

    /// Fractional throughput at a wavelength, combining the base efficiency
    /// with the category's band-dependent multiplier.
    ///
    /// Infrared instruments are attenuated below 1000 nm and recover past
    /// 2000 nm; optical instruments are attenuated below 350 nm and decline
    /// gently past 1000 nm. Other categories keep the base efficiency.
    pub fn throughput(&self, wavelength_nm: f64) -> f64 {
        let base_pct = if self.efficiency > 0.0 {
            self.efficiency
        } else {
            DEFAULT_EFFICIENCY_PCT
        };
        let base = base_pct / 100.0;

        match self.category {
            InstrumentCategory::Infrared => {
                if wavelength_nm < 1000.0 {
                    base * 0.3
                } else if wavelength_nm < 2000.0 {
                    base * 0.8
                } else {
                    base * (0.9 + (wavelength_nm - 2000.0) / 10000.0).min(1.2)
                }
            }
            InstrumentCategory::Optical => {
                if wavelength_nm < 350.0 {
                    base * 0.1
                } else if wavelength_nm < 1000.0 {
                    base * 1.1
                } else {
                    base * (1.1 - (wavelength_nm - 1000.0) / 2000.0).max(0.2)
                }
            }
            InstrumentCategory::XRay | InstrumentCategory::Photometric => base,
        }
    }
}
