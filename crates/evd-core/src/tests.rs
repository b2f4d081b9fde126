//! Unit tests for evd-core primitives.

#[cfg(test)]
mod ids {
    use crate::{TicketId, VehicleId};

    #[test]
    fn index_roundtrip() {
        let id = VehicleId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VehicleId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(VehicleId(0) < VehicleId(1));
        assert!(TicketId(100) > TicketId(99));
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{CoreError, SimClock, SimConfig, SimTime};

    #[test]
    fn after_adds_positive_durations() {
        let t = SimTime::from_minutes(480.0);
        assert_eq!(t.after(25.5), SimTime::from_minutes(505.5));
        assert_eq!(t.after(25.5).since(t), 25.5);
    }

    #[test]
    fn after_never_moves_backwards() {
        let t = SimTime::from_minutes(100.0);
        assert_eq!(t.after(0.0), t);
        assert_eq!(t.after(-3.0), t);
    }

    #[test]
    fn ordering_matches_numeric() {
        let a = SimTime::from_minutes(1.5);
        let b = SimTime::from_minutes(2.0);
        assert!(a < b);
        assert_eq!(a.max(b), b);
        assert_eq!(SimTime::ZERO, SimTime::from_minutes(0.0));
    }

    #[test]
    #[should_panic]
    fn nan_is_rejected() {
        let _ = SimTime::from_minutes(f64::NAN);
    }

    #[test]
    fn display_is_clock_time() {
        assert_eq!(SimTime::from_minutes(0.0).to_string(), "0:00:00");
        assert_eq!(SimTime::from_minutes(505.75).to_string(), "8:25:45");
        assert_eq!(SimTime::from_minutes(1439.0).to_string(), "23:59:00");
    }

    #[test]
    fn clock_advances_forward_only() {
        let mut clock = SimClock::new();
        assert_eq!(clock.now(), SimTime::ZERO);
        clock.advance_to(SimTime::from_minutes(10.0)).unwrap();
        clock.advance_to(SimTime::from_minutes(10.0)).unwrap();
        assert_eq!(clock.now(), SimTime::from_minutes(10.0));

        let err = clock.advance_to(SimTime::from_minutes(9.0)).unwrap_err();
        assert!(matches!(err, CoreError::TimeWentBackwards { .. }));
        assert_eq!(clock.now(), SimTime::from_minutes(10.0));
    }

    #[test]
    fn default_config_is_reference_scenario() {
        let config = SimConfig::default();
        assert_eq!(config.fleet_size, 30_000);
        assert_eq!(config.station_capacity, 200);
        assert_eq!(config.horizon, SimTime::from_minutes(1439.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn horizon_beyond_one_day_rejected() {
        let config = SimConfig { horizon: SimTime::from_minutes(2000.0), ..SimConfig::default() };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn non_finite_horizon_rejected() {
        // Only reachable through deserialization; `from_minutes` refuses NaN.
        let config = SimConfig { horizon: SimTime(f64::NAN), ..SimConfig::default() };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
        let config = SimConfig { horizon: SimTime(f64::INFINITY), ..SimConfig::default() };
        assert!(config.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{CoreError, Sampler, VehicleId, VehicleRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = VehicleRng::new(7, VehicleId(3));
        let mut b = VehicleRng::new(7, VehicleId(3));
        for _ in 0..10 {
            assert_eq!(a.normal(5.0, 2.0).unwrap(), b.normal(5.0, 2.0).unwrap());
            assert_eq!(a.gamma(1.5, 2.0).unwrap(), b.gamma(1.5, 2.0).unwrap());
        }
    }

    #[test]
    fn different_vehicles_differ() {
        let mut a = VehicleRng::new(7, VehicleId(0));
        let mut b = VehicleRng::new(7, VehicleId(1));
        let xs: Vec<f64> = (0..5).map(|_| a.gamma(8.0, 60.0).unwrap()).collect();
        let ys: Vec<f64> = (0..5).map(|_| b.gamma(8.0, 60.0).unwrap()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn gamma_draws_are_positive() {
        let mut rng = VehicleRng::new(1, VehicleId(0));
        for _ in 0..1_000 {
            assert!(rng.gamma(1.5, 2.0).unwrap() > 0.0);
        }
    }

    #[test]
    fn normal_sample_mean_is_close() {
        let mut rng = VehicleRng::new(99, VehicleId(5));
        let n = 20_000;
        let mean: f64 = (0..n).map(|_| rng.normal(540.0, 90.0).unwrap()).sum::<f64>() / n as f64;
        assert!((mean - 540.0).abs() < 5.0, "got {mean}");
    }

    #[test]
    fn invalid_parameters_are_errors() {
        let mut rng = VehicleRng::new(0, VehicleId(0));
        assert!(matches!(rng.normal(0.0, -1.0), Err(CoreError::Distribution { distribution: "normal", .. })));
        assert!(matches!(rng.gamma(-1.0, 1.0), Err(CoreError::Distribution { distribution: "gamma", .. })));
    }
}
