mod tests {
    use std::collections::BTreeMap;

    use units::{Length, Mass};

    use crate::atmosphere::Atmosphere;
    use crate::mission::{Urgency, assess};
    use crate::planet_type::PlanetType;
    use crate::record::{
        BiosignaturePotential, ClimateZone, ConfirmationStatus, DiscoveryMethod, InstrumentId,
        PlanetRecord, ResearchPriority, WaterPresence,
    };
    use crate::stellar::StellarType;

    /// A temperate nearby super-Earth with a known atmosphere
    fn base_record() -> PlanetRecord {
        let mut composition = BTreeMap::new();
        composition.insert("N2".to_string(), 78);
        composition.insert("O2".to_string(), 22);
        PlanetRecord {
            id: 1,
            name: "Kepler-442b".to_string(),
            host_star: "Kepler".to_string(),
            stellar_type: StellarType::KDwarf,
            discovery_year: 2015,
            discovery_method: DiscoveryMethod::TransitPhotometry,
            planet_type: PlanetType::SuperEarth,
            mass: Mass::from_earth_masses(2.3),
            radius: Length::from_earth_radii(1.34),
            orbital_period_days: 112.3,
            distance: Length::from_light_years(40.0),
            temperature: 300,
            climate_zone: ClimateZone::Temperate,
            habitability_score: 0.85,
            atmosphere: Atmosphere::NitrogenOxygen,
            atmosphere_composition: composition,
            atmospheric_pressure_bar: Some(1.2),
            magnetic_field_gauss: Some(0.5),
            discovery_instrument: InstrumentId::Kepler,
            ai_confidence: 0.93,
            follow_up_observations: 12,
            transit_depth: Some(0.0012),
            stellar_magnitude: 9.8,
            priority_score: 0.7,
            orbital_eccentricity: 0.04,
            insolation: 0.9,
            tidally_locked: false,
            water_presence: WaterPresence::Likely,
            biosignature_potential: BiosignaturePotential::High,
            last_observed_days_ago: 30,
            confirmed_status: ConfirmationStatus::Confirmed,
            research_priority: ResearchPriority::Critical,
        }
    }

    #[test]
    fn test_critical_tier() {
        let record = base_record();
        let assessment = assess(&record);
        assert_eq!(assessment.urgency, Urgency::Critical);
        assert_eq!(assessment.recommendation, "Immediate Priority Target");
        assert_eq!(assessment.next_steps.len(), 4);
        assert_eq!(assessment.next_steps[0], "Emergency JWST time allocation");
        assert_eq!(assessment.confidence, record.ai_confidence);
        assert!(assessment.risk_factors.is_empty());
        assert_eq!(
            assessment.opportunities,
            vec!["Atmospheric characterization possible"]
        );
    }

    #[test]
    fn test_high_tier_when_too_hot_for_critical() {
        let mut record = base_record();
        record.temperature = 450; // outside the liquid-water band
        record.habitability_score = 0.65;
        let assessment = assess(&record);
        assert_eq!(assessment.urgency, Urgency::High);
        assert_eq!(assessment.recommendation, "High Priority Target");
    }

    #[test]
    fn test_medium_tier_on_atmosphere_alone() {
        let mut record = base_record();
        record.habitability_score = 0.1;
        record.temperature = 900;
        record.distance = Length::from_light_years(450.0);
        let assessment = assess(&record);
        assert_eq!(assessment.urgency, Urgency::Medium);
    }

    #[test]
    fn test_low_tier() {
        let mut record = base_record();
        record.habitability_score = 0.2;
        record.temperature = 1500;
        record.atmosphere = Atmosphere::Unknown;
        record.atmosphere_composition.clear();
        let assessment = assess(&record);
        assert_eq!(assessment.urgency, Urgency::Low);
        assert_eq!(assessment.recommendation, "Research Target");
        assert!(assessment.opportunities.is_empty());
    }

    #[test]
    fn test_distance_risk_factors() {
        let mut record = base_record();
        record.distance = Length::from_light_years(600.0);
        assert_eq!(assess(&record).risk_factors, vec!["Very distant"]);

        record.distance = Length::from_light_years(1500.0);
        assert_eq!(assess(&record).risk_factors, vec!["Extremely distant"]);

        record.distance = Length::from_light_years(80.0);
        assert!(assess(&record).risk_factors.is_empty());
    }
}
