//! Run the full analysis pipeline for one catalog record
//!
//! Usage: cargo run -p spectra --example analyze_planet
//!
//! Generates the canonical catalog, synthesizes a JWST transmission
//! spectrum for the first record, runs detection, and prints the verdict
//! with the mission assessment and radar profile.

use catalog::{InstrumentId, assess, generate_catalog};
use spectra::{atmospheric_profile, detect, synthesize};

fn main() {
    let catalog = generate_catalog();
    let record = &catalog[0];

    println!(
        "{} ({}), {} K, habitability {:.3}, atmosphere {}",
        record.name,
        record.planet_type,
        record.temperature,
        record.habitability_score,
        record.atmosphere,
    );

    let spectrum = synthesize(record, InstrumentId::Jwst);
    let result = detect(&spectrum, record);

    println!(
        "samples: {}, mean SNR {:.1}, pressure {:?}",
        spectrum.len(),
        result.spectral_quality,
        result.pressure,
    );
    for molecule in &result.detected_molecules {
        println!("  detected {} ({:.2})", molecule, result.confidence[molecule]);
    }
    println!(
        "biosignature: {} ({:.2}) - {}",
        result.biosignature.level, result.biosignature.score, result.biosignature.reason,
    );
    println!("follow-up: {}", result.recommended_follow_up);

    let assessment = assess(record);
    println!(
        "mission: {} ({}) - {}",
        assessment.recommendation, assessment.urgency, assessment.reasoning,
    );

    println!("atmospheric profile:");
    for axis in atmospheric_profile(Some(record), Some(&result)) {
        println!("  {:>3} {}", axis.value, axis.molecule);
    }
}
