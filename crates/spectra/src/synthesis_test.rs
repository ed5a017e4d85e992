mod tests {
    use std::collections::BTreeMap;

    use catalog::{
        Atmosphere, BiosignaturePotential, ClimateZone, ConfirmationStatus, DiscoveryMethod,
        InstrumentId, PlanetRecord, PlanetType, ResearchPriority, StellarType, WaterPresence,
    };
    use units::{Length, Mass};

    use crate::synthesis::{
        SAMPLES_PER_SPECTRUM, WAVELENGTH_MAX_NM, WAVELENGTH_MIN_NM, WAVELENGTH_STEP_NM,
        synthesize,
    };

    fn record_with(atmosphere: Atmosphere, temperature: i32) -> PlanetRecord {
        PlanetRecord {
            id: 7,
            name: "K2-18b".to_string(),
            host_star: "K2".to_string(),
            stellar_type: StellarType::MDwarf,
            discovery_year: 2015,
            discovery_method: DiscoveryMethod::TransitPhotometry,
            planet_type: PlanetType::MiniNeptune,
            mass: Mass::from_earth_masses(8.6),
            radius: Length::from_earth_radii(2.6),
            orbital_period_days: 32.9,
            distance: Length::from_light_years(124.0),
            temperature,
            climate_zone: ClimateZone::Temperate,
            habitability_score: 0.6,
            atmosphere,
            atmosphere_composition: BTreeMap::new(),
            atmospheric_pressure_bar: Some(2.0),
            magnetic_field_gauss: None,
            discovery_instrument: InstrumentId::Kepler,
            ai_confidence: 0.9,
            follow_up_observations: 8,
            transit_depth: Some(0.003),
            stellar_magnitude: 10.4,
            priority_score: 0.5,
            orbital_eccentricity: 0.09,
            insolation: 1.1,
            tidally_locked: false,
            water_presence: WaterPresence::Unknown,
            biosignature_potential: BiosignaturePotential::Medium,
            last_observed_days_ago: 12,
            confirmed_status: ConfirmationStatus::Confirmed,
            research_priority: ResearchPriority::High,
        }
    }

    #[test]
    fn test_spectrum_shape() {
        let record = record_with(Atmosphere::WaterRich, 290);
        let spectrum = synthesize(&record, InstrumentId::Jwst);

        assert_eq!(spectrum.len(), SAMPLES_PER_SPECTRUM);
        assert_eq!(spectrum[0].wavelength_nm, WAVELENGTH_MIN_NM);
        assert_eq!(spectrum[spectrum.len() - 1].wavelength_nm, WAVELENGTH_MAX_NM);

        for window in spectrum.windows(2) {
            assert_eq!(
                window[1].wavelength_nm - window[0].wavelength_nm,
                WAVELENGTH_STEP_NM
            );
        }

        for sample in &spectrum {
            assert!(sample.snr >= 3.0);
            assert!((0.0001..=1.0).contains(&sample.flux));
            assert!(sample.uncertainty >= 1e-5);
            assert!(sample.instrument_efficiency > 0.0);
        }
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let record = record_with(Atmosphere::WaterRich, 290);
        let a = synthesize(&record, InstrumentId::Jwst);
        let b = synthesize(&record, InstrumentId::Jwst);
        assert_eq!(a, b);
    }

    #[test]
    fn test_instrument_changes_spectrum() {
        let record = record_with(Atmosphere::WaterRich, 290);
        let jwst = synthesize(&record, InstrumentId::Jwst);
        let hubble = synthesize(&record, InstrumentId::Hubble);
        assert_ne!(jwst, hubble);
    }

    #[test]
    fn test_unknown_atmosphere_is_baseline_only() {
        let record = record_with(Atmosphere::Unknown, 150);
        let spectrum = synthesize(&record, InstrumentId::Jwst);

        assert_eq!(spectrum.len(), SAMPLES_PER_SPECTRUM);
        assert!(spectrum.iter().all(|s| !s.atmospheric_absorption));
    }

    #[test]
    fn test_non_molecular_atmosphere_is_baseline_only() {
        let record = record_with(Atmosphere::SilicateClouds, 1800);
        let spectrum = synthesize(&record, InstrumentId::Jwst);
        assert!(spectrum.iter().all(|s| !s.atmospheric_absorption));
    }

    #[test]
    fn test_water_features_flagged_near_1368() {
        let record = record_with(Atmosphere::WaterRich, 290);
        let spectrum = synthesize(&record, InstrumentId::Jwst);

        let flagged = spectrum
            .iter()
            .filter(|s| (s.wavelength_nm - 1368.0).abs() < 30.0)
            .all(|s| s.atmospheric_absorption);
        assert!(flagged, "samples within 30 nm of the 1368 nm water band must be flagged");
    }

    #[test]
    fn test_retired_instrument_still_synthesizes() {
        let record = record_with(Atmosphere::WaterRich, 290);
        let spectrum = synthesize(&record, InstrumentId::Kepler);

        assert_eq!(spectrum.len(), SAMPLES_PER_SPECTRUM);
        // Photometric category, zero stored efficiency: flat 90% default
        for sample in &spectrum {
            assert_eq!(sample.instrument_efficiency, 0.9);
        }
    }

    #[test]
    fn test_absorption_raises_depth_over_baseline() {
        let record = record_with(Atmosphere::WaterRich, 290);
        let spectrum = synthesize(&record, InstrumentId::Jwst);
        let baseline = (record.radius / Length::from_solar_radii(1.0)).powi(2);

        // At a strong water line center the depth clearly exceeds baseline
        // plus the worst-case noise sum (~4e-5)
        let at_line = spectrum
            .iter()
            .find(|s| s.wavelength_nm == 1368.0)
            .expect("1368 nm bin exists");
        assert!(at_line.transit_depth > baseline);
    }
}
