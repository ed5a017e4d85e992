//! Deterministic exoplanet catalog generation
//!
//! This crate builds a fixed-size, internally consistent exoplanet catalog
//! from a fixed seed: correlated physical attributes (mass → radius
//! bracket, period + stellar class → equilibrium temperature), a composite
//! habitability score, atmosphere labels with percentage compositions, and
//! a heuristic mission-priority assessment.
//!
//! Everything is pure arithmetic over the seed: generation has no failure
//! mode and two equal-seed builds produce identical record streams.

pub mod atmosphere;
pub mod generation;
pub mod habitability;
pub mod mission;
pub mod planet_type;
pub mod record;
pub mod rng;
pub mod stellar;

// Re-export key types at crate root
pub use atmosphere::Atmosphere;
pub use generation::{CATALOG_SEED, CATALOG_SIZE, generate, generate_catalog};
pub use mission::{MissionAssessment, Urgency, assess};
pub use planet_type::PlanetType;
pub use record::{
    BiosignaturePotential, ClimateZone, ConfirmationStatus, DiscoveryMethod, InstrumentId,
    PlanetRecord, ResearchPriority, WaterPresence,
};
pub use rng::{Lcg, StringLcg};
pub use stellar::StellarType;

#[cfg(test)]
mod generation_test;
#[cfg(test)]
mod mission_test;
#[cfg(test)]
mod rng_test;
