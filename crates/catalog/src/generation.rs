//! One-pass deterministic catalog generation
//!
//! A single `Lcg` seeded with `CATALOG_SEED` drives the whole build. Every
//! record consumes its draws in a fixed sequence, so a given (seed, size)
//! pair always produces an identical record stream. The draw order below is
//! load-bearing: inserting or reordering a draw changes every record after
//! the edit point.
//!
//! Draw sequence per record: instrument, stellar type, planet type,
//! discovery method, mass (branch + value), radius, period (branch +
//! value), distance (branch + value), temperature jitter, habitability
//! jitter, atmosphere band draws, climate zone, composition shares,
//! discovery year, surface pressure (if atmosphere known), magnetic field
//! (presence, then value if present), AI confidence, follow-up count,
//! transit depth (if transit photometry), stellar magnitude, priority
//! weight, eccentricity, insolation, tidal locking, last-observed offset,
//! confirmation status.

use units::{Length, Mass};

use crate::atmosphere::Atmosphere;
use crate::habitability;
use crate::planet_type::PlanetType;
use crate::record::{
    BiosignaturePotential, ClimateZone, ConfirmationStatus, DiscoveryMethod, InstrumentId,
    PlanetRecord, ResearchPriority, WaterPresence,
};
use crate::rng::Lcg;
use crate::stellar::StellarType;

/// Number of records in the generated catalog
pub const CATALOG_SIZE: usize = 12000;

/// Fixed seed for the canonical catalog build
pub const CATALOG_SEED: u64 = 42;

/// Real exoplanet designations, cycled with a numeric suffix once exhausted
pub const REAL_PLANET_NAMES: [&str; 60] = [
    "Kepler-442b",
    "HD 40307g",
    "Gliese 667Cc",
    "Kepler-438b",
    "Kepler-296e",
    "Wolf 1061c",
    "Kepler-62f",
    "Kepler-283c",
    "Kepler-296f",
    "Kepler-440b",
    "TRAPPIST-1e",
    "TRAPPIST-1f",
    "TRAPPIST-1g",
    "Proxima Centauri b",
    "LHS 1140b",
    "TOI-715b",
    "K2-18b",
    "WASP-121b",
    "HD 209458b",
    "CoRoT-1b",
    "HD 85512b",
    "Gliese 163c",
    "Tau Ceti e",
    "Tau Ceti f",
    "Kepler-186f",
    "Kepler-452b",
    "TRAPPIST-1d",
    "TOI-849b",
    "WASP-96b",
    "HAT-P-11b",
    "Kepler-22b",
    "Kepler-69c",
    "Kepler-1649c",
    "TOI-2109b",
    "WASP-189b",
    "KELT-9b",
    "HD 189733b",
    "WASP-43b",
    "GJ 1214b",
    "Kepler-16b",
    "PSR B1257+12 b",
    "PSR B1257+12 c",
    "51 Eridani b",
    "HR 8799e",
    "Beta Pictoris b",
    "Fomalhaut b",
    "2M1207b",
    "GQ Lupi b",
    "AB Pictoris b",
    "HD 106906b",
    "WASP-17b",
    "WASP-12b",
    "TrES-4b",
    "WASP-79b",
    "HAT-P-32b",
    "Kepler-7b",
    "CoRoT-3b",
    "XO-3b",
    "WASP-18b",
    "HAT-P-2b",
];

/// Round to a fixed number of decimal places.
///
/// Generated magnitudes are stored at the precision they are published at,
/// which also makes equal-seed catalogs compare equal field-for-field.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Build the canonical catalog: `CATALOG_SIZE` records from `CATALOG_SEED`.
pub fn generate_catalog() -> Vec<PlanetRecord> {
    generate(CATALOG_SEED, CATALOG_SIZE)
}

/// Build a catalog of `count` records from an arbitrary seed.
///
/// Pure arithmetic over the seed: this cannot fail, and two calls with the
/// same arguments produce identical output.
pub fn generate(seed: u64, count: usize) -> Vec<PlanetRecord> {
    let mut rng = Lcg::new(seed);
    (0..count).map(|i| generate_record(i, &mut rng)).collect()
}

/// Planet designation for a catalog index: the real-name list first, then
/// the list again with an incrementing numeric suffix.
fn planet_name(index: usize) -> String {
    let names = &REAL_PLANET_NAMES;
    if index < names.len() {
        names[index].to_string()
    } else {
        format!("{} {}", names[index % names.len()], index / names.len() + 1)
    }
}

fn generate_record(index: usize, rng: &mut Lcg) -> PlanetRecord {
    let name = planet_name(index);
    let host_star = name.split('-').next().unwrap_or(&name).to_string();

    let discovery_instrument = *rng.pick(&InstrumentId::ALL);
    let stellar_type = *rng.pick(&StellarType::ALL);
    let planet_type = *rng.pick(&PlanetType::ALL);
    let discovery_method = *rng.pick(&DiscoveryMethod::ALL);

    // Mass in Earth masses: three-branch piecewise distribution standing in
    // for the observed log-normal. Offsets keep every branch positive.
    let mass_branch = rng.draw();
    let mass_earth = if mass_branch < 0.3 {
        round_to(rng.draw() * 2.0 + 0.1, 3) // sub-Earth to super-Earth
    } else if mass_branch < 0.6 {
        round_to(rng.draw() * 15.0 + 2.0, 2) // mini-Neptune range
    } else {
        round_to(rng.draw() * 300.0 + 15.0, 1) // gas giant range
    };

    // Radius in Earth radii, monotonic in the mass bracket
    let radius_earth = if mass_earth < 2.0 {
        round_to(rng.draw() * 1.5 + 0.3, 3)
    } else if mass_earth < 17.0 {
        round_to(rng.draw() * 3.0 + 1.5, 3)
    } else {
        round_to(rng.draw() * 12.0 + 3.0, 2)
    };

    // Orbital period in days, skewed toward short periods (transit bias)
    let period_branch = rng.draw();
    let orbital_period_days = if period_branch < 0.4 {
        round_to(rng.draw() * 10.0 + 0.5, 3) // hot, close-in
    } else if period_branch < 0.7 {
        round_to(rng.draw() * 365.0 + 10.0, 2) // habitable-zone periods
    } else {
        round_to(rng.draw() * 4000.0 + 365.0, 1) // long period
    };

    // Distance in light-years, weighted toward nearby systems
    let distance_branch = rng.draw();
    let distance_ly = if distance_branch < 0.2 {
        round_to(rng.draw() * 25.0 + 4.0, 1)
    } else if distance_branch < 0.5 {
        round_to(rng.draw() * 100.0 + 25.0, 1)
    } else if distance_branch < 0.8 {
        round_to(rng.draw() * 500.0 + 100.0, 0)
    } else {
        round_to(rng.draw() * 3000.0 + 500.0, 0)
    };

    // Equilibrium temperature from stellar class and period, T ∝ P^-0.5
    let temperature = (stellar_type.base_temperature()
        * (orbital_period_days / 365.0).powf(-0.5)
        * (rng.draw() * 0.4 + 0.8))
        .floor() as i32;

    let habitability_score =
        habitability::score(temperature, mass_earth, distance_ly, rng.draw() * 0.4 + 0.8);

    let atmosphere = Atmosphere::select_for_temperature(temperature, rng);
    let climate_zone = *rng.pick(&ClimateZone::ALL);
    let atmosphere_composition = atmosphere.composition(rng);

    let discovery_year = 1995 + (rng.draw() * 29.0) as u16;

    let atmospheric_pressure_bar = if atmosphere != Atmosphere::Unknown {
        Some(round_to(rng.draw() * 100.0 + 0.1, 2))
    } else {
        None
    };

    let magnetic_field_gauss = if rng.draw() > 0.6 {
        Some(round_to(rng.draw() * 10.0, 2))
    } else {
        None
    };

    let ai_confidence = round_to(rng.draw() * 0.3 + 0.7, 3);
    let follow_up_observations = (rng.draw() * 25.0) as u32 + 1;

    let transit_depth = if discovery_method == DiscoveryMethod::TransitPhotometry {
        Some(round_to(rng.draw() * 0.05, 5))
    } else {
        None
    };

    let stellar_magnitude = round_to(rng.draw() * 12.0 + 6.0, 2);
    let priority_score = habitability_score * round_to(rng.draw() * 0.3 + 0.7, 2);
    let orbital_eccentricity = round_to(rng.draw(), 3);
    let insolation = round_to(rng.draw() * 5.0 + 0.1, 2);

    // Short-period planets are usually locked; wide orbits rarely are
    let tidally_locked = if orbital_period_days < 50.0 {
        rng.draw() > 0.3
    } else {
        rng.draw() > 0.8
    };

    let water_presence =
        if habitability_score > 0.5 && atmosphere.label().contains("H2O") {
            WaterPresence::Likely
        } else {
            WaterPresence::Unknown
        };

    let biosignature_potential =
        if habitability_score > 0.7 && atmosphere == Atmosphere::NitrogenOxygen {
            BiosignaturePotential::High
        } else if habitability_score > 0.5 {
            BiosignaturePotential::Medium
        } else {
            BiosignaturePotential::Low
        };

    let last_observed_days_ago = (rng.draw() * 365.0) as u16;

    let confirmed_status = if rng.draw() > 0.15 {
        ConfirmationStatus::Confirmed
    } else {
        ConfirmationStatus::Candidate
    };

    let research_priority = if habitability_score > 0.8 {
        ResearchPriority::Critical
    } else if habitability_score > 0.6 {
        ResearchPriority::High
    } else if habitability_score > 0.4 {
        ResearchPriority::Medium
    } else {
        ResearchPriority::Low
    };

    PlanetRecord {
        id: index as u32 + 1,
        name,
        host_star,
        stellar_type,
        discovery_year,
        discovery_method,
        planet_type,
        mass: Mass::from_earth_masses(mass_earth),
        radius: Length::from_earth_radii(radius_earth),
        orbital_period_days,
        distance: Length::from_light_years(distance_ly),
        temperature,
        climate_zone,
        habitability_score,
        atmosphere,
        atmosphere_composition,
        atmospheric_pressure_bar,
        magnetic_field_gauss,
        discovery_instrument,
        ai_confidence,
        follow_up_observations,
        transit_depth,
        stellar_magnitude,
        priority_score,
        orbital_eccentricity,
        insolation,
        tidally_locked,
        water_presence,
        biosignature_potential,
        last_observed_days_ago,
        confirmed_status,
        research_priority,
    }
}
