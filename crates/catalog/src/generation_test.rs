mod tests {
    use crate::atmosphere::Atmosphere;
    use crate::generation::{CATALOG_SEED, CATALOG_SIZE, generate, generate_catalog};
    use crate::record::DiscoveryMethod;

    #[test]
    fn test_catalog_reproducibility() {
        let a = generate(CATALOG_SEED, 500);
        let b = generate(CATALOG_SEED, 500);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = generate(42, 50);
        let b = generate(43, 50);
        assert_ne!(a, b);
    }

    #[test]
    fn test_canonical_catalog_shape() {
        let catalog = generate_catalog();
        assert_eq!(catalog.len(), CATALOG_SIZE);

        let first = &catalog[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.name, "Kepler-442b");
        assert_eq!(first.host_star, "Kepler");
    }

    #[test]
    fn test_name_cycling_with_suffix() {
        let catalog = generate_catalog();
        assert_eq!(catalog[60].name, "Kepler-442b 2");
        assert_eq!(catalog[119].name, "HAT-P-2b 2");
        assert_eq!(catalog[120].name, "Kepler-442b 3");
        // Suffixed HD names have no dash, so the host is the full name
        assert_eq!(catalog[61].host_star, "HD 40307g 2");
    }

    #[test]
    fn test_range_invariants() {
        for record in generate_catalog() {
            assert!(record.mass.to_earth_masses() > 0.0);
            assert!(record.radius.to_earth_radii() > 0.0);
            assert!(record.orbital_period_days > 0.0);
            assert!(record.distance.to_light_years() > 0.0);
            assert!(record.temperature > 0);
            assert!((0.0..=1.0).contains(&record.habitability_score));
            assert!((0.7..=1.0).contains(&record.ai_confidence));
            assert!((0.0..=1.0).contains(&record.orbital_eccentricity));
            assert!((1..=25).contains(&record.follow_up_observations));
            assert!((1995..=2023).contains(&record.discovery_year));
            assert!(record.last_observed_days_ago < 365);
        }
    }

    #[test]
    fn test_composition_invariant() {
        for record in generate_catalog() {
            if record.atmosphere == Atmosphere::Unknown {
                assert!(record.atmosphere_composition.is_empty());
                assert!(record.atmospheric_pressure_bar.is_none());
            } else {
                let total: u32 = record.atmosphere_composition.values().sum();
                assert_eq!(total, 100, "record {} composition must sum to 100", record.id);
                assert!(record.atmospheric_pressure_bar.is_some());
            }
        }
    }

    #[test]
    fn test_transit_depth_follows_method() {
        for record in generate_catalog().iter().take(2000) {
            assert_eq!(
                record.transit_depth.is_some(),
                record.discovery_method == DiscoveryMethod::TransitPhotometry
            );
            if let Some(depth) = record.transit_depth {
                assert!((0.0..0.05001).contains(&depth));
            }
        }
    }

    #[test]
    fn test_radius_follows_mass_bracket() {
        for record in generate_catalog().iter().take(2000) {
            let mass = record.mass.to_earth_masses();
            let radius = record.radius.to_earth_radii();
            if mass < 2.0 {
                assert!((0.3..=1.8).contains(&radius));
            } else if mass < 17.0 {
                assert!((1.5..=4.5).contains(&radius));
            } else {
                assert!((3.0..=15.0).contains(&radius));
            }
        }
    }

    #[test]
    fn test_confirmation_split_is_mostly_confirmed() {
        use crate::record::ConfirmationStatus;

        let catalog = generate_catalog();
        let confirmed = catalog
            .iter()
            .filter(|r| r.confirmed_status == ConfirmationStatus::Confirmed)
            .count();
        let fraction = confirmed as f64 / catalog.len() as f64;
        assert!((0.80..0.90).contains(&fraction), "confirmed fraction {fraction}");
    }
}
