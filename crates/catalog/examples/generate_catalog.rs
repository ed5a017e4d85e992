//! Dump the canonical catalog as CSV
//!
//! Usage: cargo run -p catalog --example generate_catalog
//!
//! Output: one row per record on stdout

use catalog::generate_catalog;

fn main() {
    let catalog = generate_catalog();

    // CSV header
    println!(
        "id,name,host_star,stellar_type,planet_type,method,mass_earth,radius_earth,period_days,distance_ly,temp_k,habitability,atmosphere,confirmed"
    );

    for record in &catalog {
        println!(
            "{},{},{},{},{},{},{:.3},{:.3},{:.3},{:.1},{},{:.3},{},{:?}",
            record.id,
            record.name,
            record.host_star,
            record.stellar_type,
            record.planet_type,
            record.discovery_method,
            record.mass.to_earth_masses(),
            record.radius.to_earth_radii(),
            record.orbital_period_days,
            record.distance.to_light_years(),
            record.temperature,
            record.habitability_score,
            record.atmosphere,
            record.confirmed_status,
        );
    }

    eprintln!("Generated {} records", catalog.len());
}
