mod tests {
    use approx::assert_relative_eq;

    use crate::instrument::{INSTRUMENTS, Instrument, InstrumentId, InstrumentStatus};

    #[test]
    fn test_profile_lookup_matches_id() {
        for id in InstrumentId::ALL {
            assert_eq!(Instrument::profile(id).id, id);
        }
        assert_eq!(INSTRUMENTS.len(), InstrumentId::ALL.len());
    }

    #[test]
    fn test_retired_instruments_have_zero_efficiency() {
        for instrument in &INSTRUMENTS {
            match instrument.status {
                InstrumentStatus::Retired => assert_eq!(instrument.efficiency, 0.0),
                InstrumentStatus::Active => assert!(instrument.efficiency > 0.0),
            }
        }
    }

    #[test]
    fn test_infrared_throughput_curve() {
        let jwst = Instrument::profile(InstrumentId::Jwst);
        assert_relative_eq!(jwst.throughput(500.0), 0.987 * 0.3);
        assert_relative_eq!(jwst.throughput(1500.0), 0.987 * 0.8);
        // Past 2000 nm the curve recovers linearly, capped at 1.2
        assert_relative_eq!(jwst.throughput(3000.0), 0.987 * 1.0);
        assert_relative_eq!(jwst.throughput(5000.0), 0.987 * 1.2);
    }

    #[test]
    fn test_optical_throughput_curve() {
        let hubble = Instrument::profile(InstrumentId::Hubble);
        assert_relative_eq!(hubble.throughput(500.0), 0.942 * 1.1);
        // Gentle decline past 1000 nm, floored at 0.2
        assert_relative_eq!(hubble.throughput(1400.0), 0.942 * 0.9);
        assert_relative_eq!(hubble.throughput(4000.0), 0.942 * 0.2);
    }

    #[test]
    fn test_flat_categories_keep_base_efficiency() {
        let chandra = Instrument::profile(InstrumentId::Chandra);
        assert_relative_eq!(chandra.throughput(400.0), 0.893);
        assert_relative_eq!(chandra.throughput(5000.0), 0.893);
    }

    #[test]
    fn test_retired_instrument_synthesizes_at_default() {
        // Stored efficiency is 0; throughput substitutes the 90% default
        let kepler = Instrument::profile(InstrumentId::Kepler);
        assert_relative_eq!(kepler.throughput(700.0), 0.9);
    }
}
