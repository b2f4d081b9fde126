//! Unit tests for evd-fleet.

use std::collections::VecDeque;

use evd_core::{CoreResult, Sampler};

use crate::VehicleParams;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Replays a fixed sequence of draws regardless of the requested distribution.
struct Scripted(VecDeque<f64>);

impl Scripted {
    fn new(values: &[f64]) -> Self {
        Scripted(values.iter().copied().collect())
    }

    fn next(&mut self) -> f64 {
        self.0.pop_front().expect("script exhausted")
    }
}

impl Sampler for Scripted {
    fn normal(&mut self, _mean: f64, _std_dev: f64) -> CoreResult<f64> {
        Ok(self.next())
    }

    fn gamma(&mut self, _shape: f64, _scale: f64) -> CoreResult<f64> {
        Ok(self.next())
    }
}

/// Draw order for one candidate: power, distance, battery, speed, time at
/// work, work start.
fn candidate(power: f64, distance: f64, battery: f64, speed: f64, at_work: f64, start: f64) -> [f64; 6] {
    [power, distance, battery, speed, at_work, start]
}

/// The single-vehicle reference commute.
fn reference_vehicle() -> VehicleParams {
    VehicleParams::derive(10.0, 23.3, 540.0, 10.0, 480.0)
}

// ── Derived values ────────────────────────────────────────────────────────────

#[cfg(test)]
mod params {
    use super::*;
    use crate::{ControllerParams, mean_travel_speed_kmh, range_for_capacity_km};

    #[test]
    fn range_is_linear_in_capacity() {
        assert!((range_for_capacity_km(10.0) - 52.0).abs() < 1e-9);
        assert!((range_for_capacity_km(25.0) - 130.0).abs() < 1e-9);
    }

    #[test]
    fn mean_speed_is_clamped() {
        assert_eq!(mean_travel_speed_kmh(0.5), 6.0);
        assert!((mean_travel_speed_kmh(6.0) - 14.0).abs() < 1e-9);
        assert_eq!(mean_travel_speed_kmh(40.0), 35.0);
    }

    #[test]
    fn reference_commute_derivations() {
        let v = reference_vehicle();
        assert!((v.range_km - 52.0).abs() < 1e-9);
        assert!((v.travel_time_to_work_min - 25.751).abs() < 1e-3);
        // 10 kWh over 52 km, driven 10 km.
        assert!((v.commute_energy_kwh() - 10.0 / 52.0 * 10.0).abs() < 1e-12);
    }

    #[test]
    fn charge_duration() {
        let c = ControllerParams { continuous_input_power_kw: 4.0 };
        assert!((c.charge_duration_min(2.0) - 30.0).abs() < 1e-12);
    }

    #[test]
    fn named_values_follow_field_names() {
        let v = reference_vehicle();
        let named = v.named_values();
        assert_eq!(named[0], ("Distance to workplace [km]", 10.0));
        assert_eq!(named[4].1, 480.0);
        for ((name, _), expected) in named.iter().zip(VehicleParams::FIELD_NAMES) {
            assert_eq!(*name, expected);
        }
    }
}

// ── Sanity filter ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod sanity {
    use super::*;
    use crate::{SanityBounds, SanityViolation};

    #[test]
    fn reference_vehicle_accepted() {
        assert!(SanityBounds::default().accepts(&reference_vehicle()));
    }

    #[test]
    fn predicate_is_pure() {
        let bounds = SanityBounds::default();
        let v = reference_vehicle();
        let before = v.clone();
        assert!(bounds.accepts(&v));
        assert!(bounds.accepts(&v));
        assert_eq!(v, before);
    }

    #[test]
    fn each_range_rejects() {
        let bounds = SanityBounds::default();
        let cases = [
            VehicleParams::derive(0.4, 23.3, 540.0, 10.0, 480.0),
            VehicleParams::derive(10.0, 23.3, 540.0, 10.0, 5.0),
            VehicleParams::derive(10.0, 23.3, 540.0, 10.0, 1439.5),
            VehicleParams::derive(10.0, 0.4, 540.0, 10.0, 480.0),
            VehicleParams::derive(10.0, 51.0, 540.0, 10.0, 480.0),
            VehicleParams::derive(10.0, 23.3, 29.0, 10.0, 480.0),
            VehicleParams::derive(10.0, 23.3, 901.0, 10.0, 480.0),
            VehicleParams::derive(10.0, 23.3, 540.0, 4.9, 480.0),
            VehicleParams::derive(10.0, 23.3, 540.0, 101.0, 480.0),
        ];
        for v in cases {
            assert!(
                matches!(bounds.check(&v), Err(SanityViolation::OutOfRange { .. })),
                "expected rejection for {v:?}"
            );
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = SanityBounds::default();
        assert!(bounds.accepts(&VehicleParams::derive(0.5, 0.5, 30.0, 5.0, 6.0)));
        assert!(bounds.accepts(&VehicleParams::derive(10.0, 50.0, 900.0, 100.0, 1439.0)));
    }

    #[test]
    fn round_trip_must_fit_range() {
        // 5 kWh → 26 km range; 14 km each way is 28 km.
        let v = VehicleParams::derive(14.0, 30.0, 540.0, 5.0, 480.0);
        assert!(matches!(
            SanityBounds::default().check(&v),
            Err(SanityViolation::InsufficientRange { .. })
        ));
        // Exactly the range is fine.
        let v = VehicleParams::derive(13.0, 30.0, 540.0, 5.0, 480.0);
        assert!(SanityBounds::default().accepts(&v));
    }

    #[test]
    fn nan_is_rejected() {
        let v = VehicleParams::derive(f64::NAN, 23.3, 540.0, 10.0, 480.0);
        assert!(!SanityBounds::default().accepts(&v));
    }
}

// ── Distributions ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod distributions {
    use evd_core::VehicleId;

    use super::*;
    use crate::{FleetDistributions, FleetError};

    #[test]
    fn defaults_are_valid() {
        assert!(FleetDistributions::default().validate().is_ok());
        assert!((FleetDistributions::default().work_start_min.mean() - 480.0).abs() < 1e-9);
    }

    #[test]
    fn negative_std_dev_rejected() {
        let mut d = FleetDistributions::default();
        d.time_at_work_min.std_dev = -1.0;
        assert!(matches!(d.validate(), Err(FleetError::Config(_))));
    }

    #[test]
    fn zero_gamma_shape_rejected() {
        let mut d = FleetDistributions::default();
        d.distance_km.shape = 0.0;
        assert!(matches!(d.validate(), Err(FleetError::Config(_))));
    }

    #[test]
    fn controller_power_redrawn_until_above_floor() {
        let d = FleetDistributions::default();
        let mut s = Scripted::new(&[1.0, 2.0, 4.5]);
        let c = d.sample_controller(&mut s, VehicleId(0), 10).unwrap();
        assert_eq!(c.continuous_input_power_kw, 4.5);
    }

    #[test]
    fn controller_power_gives_up() {
        let d = FleetDistributions::default();
        let mut s = Scripted::new(&[1.0, 1.5]);
        let err = d.sample_controller(&mut s, VehicleId(3), 2).unwrap_err();
        assert!(matches!(err, FleetError::PowerFloorUnreachable { attempts: 2, .. }));
    }

    #[test]
    fn vehicle_draw_order() {
        let d = FleetDistributions::default();
        let mut s = Scripted::new(&[10.0, 10.0, 23.3, 540.0, 480.0]);
        let v = d.sample_vehicle(&mut s).unwrap();
        assert_eq!(v, reference_vehicle());
    }
}

// ── FleetBuilder ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;
    use crate::{FleetBuilder, FleetError, SanityBounds};

    #[test]
    fn builds_exact_size() {
        let fleet = FleetBuilder::new(500, 7).build().unwrap();
        assert_eq!(fleet.len(), 500);
        assert_eq!(fleet.controllers().len(), 500);
    }

    #[test]
    fn every_accepted_vehicle_is_sane() {
        let bounds = SanityBounds::default();
        let fleet = FleetBuilder::new(2_000, 11).build().unwrap();
        for (id, v, c) in fleet.iter() {
            assert!(bounds.accepts(v), "{id} failed: {:?}", bounds.check(v));
            assert!(c.continuous_input_power_kw > 2.0);
        }
    }

    #[test]
    fn same_seed_same_fleet() {
        let a = FleetBuilder::new(50, 3).build().unwrap();
        let b = FleetBuilder::new(50, 3).build().unwrap();
        assert_eq!(a.vehicles(), b.vehicles());
        assert_eq!(a.controllers(), b.controllers());
        assert_eq!(a.rejected, b.rejected);
    }

    #[test]
    fn rejected_candidate_is_resampled() {
        let mut script = Vec::new();
        script.extend(candidate(5.0, 0.1, 10.0, 6.0, 540.0, 480.0)); // too close
        script.extend(candidate(6.0, 10.0, 10.0, 23.3, 540.0, 480.0));
        let fleet = FleetBuilder::new(1, 0).build_with(|_| Scripted::new(&script)).unwrap();
        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet.rejected, 1);
        assert_eq!(fleet.vehicles()[0], reference_vehicle());
        assert_eq!(fleet.controllers()[0].continuous_input_power_kw, 6.0);
    }

    #[test]
    fn impossible_bounds_hit_the_attempt_cap() {
        let bounds = SanityBounds { distance_km: 1_000.0..=2_000.0, ..SanityBounds::default() };
        let err = FleetBuilder::new(1, 0).bounds(bounds).max_attempts(50).build().unwrap_err();
        assert!(matches!(err, FleetError::RejectionLimit { attempts: 50, .. }));
    }

    #[test]
    fn reference_fleet_size() {
        let fleet = FleetBuilder::new(30_000, 42).build().unwrap();
        assert_eq!(fleet.len(), 30_000);
    }
}

// ── Fleet & stats ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod fleet_and_stats {
    use evd_core::VehicleId;

    use super::*;
    use crate::{ControllerParams, Fleet, FleetError, describe};

    fn power(kw: f64) -> ControllerParams {
        ControllerParams { continuous_input_power_kw: kw }
    }

    #[test]
    fn from_parts_length_mismatch() {
        assert!(Fleet::from_parts(vec![reference_vehicle()], vec![]).is_err());
    }

    #[test]
    fn from_parts_rejects_unrunnable_parameters() {
        let err = Fleet::from_parts(vec![reference_vehicle()], vec![power(0.0)]).unwrap_err();
        assert!(matches!(err, FleetError::Config(_)));
        assert!(Fleet::from_parts(vec![reference_vehicle()], vec![power(f64::NAN)]).is_err());
        assert!(Fleet::from_parts(vec![reference_vehicle()], vec![power(-1.0)]).is_err());

        // Zero speed: infinite travel time.
        let parked = VehicleParams::derive(10.0, 0.0, 540.0, 10.0, 480.0);
        let err = Fleet::from_parts(vec![parked], vec![power(5.0)]).unwrap_err();
        assert!(err.to_string().contains("Travel time to work"));

        // Zero capacity: zero range, NaN energy per km.
        let empty = VehicleParams::derive(10.0, 23.3, 540.0, 0.0, 480.0);
        assert!(Fleet::from_parts(vec![empty], vec![power(5.0)]).is_err());
    }

    #[test]
    fn iter_yields_ids_in_order() {
        let fleet = Fleet::from_parts(
            vec![reference_vehicle(), reference_vehicle()],
            vec![power(3.0), power(4.0)],
        )
        .unwrap();
        let ids: Vec<VehicleId> = fleet.iter().map(|(id, _, _)| id).collect();
        assert_eq!(ids, vec![VehicleId(0), VehicleId(1)]);
        assert_eq!(fleet.controller(VehicleId(1)).continuous_input_power_kw, 4.0);
    }

    #[test]
    fn describe_min_max_mean() {
        let fleet = Fleet::from_parts(
            vec![
                VehicleParams::derive(2.0, 10.0, 500.0, 20.0, 400.0),
                VehicleParams::derive(4.0, 10.0, 600.0, 30.0, 500.0),
            ],
            vec![power(3.0), power(5.0)],
        )
        .unwrap();
        let stats = describe(&fleet);
        assert_eq!(stats.len(), 8);

        let distance = &stats[0];
        assert_eq!(distance.name, "Distance to workplace [km]");
        assert_eq!((distance.min, distance.max, distance.mean), (2.0, 4.0, 3.0));
        assert_eq!(distance.values, vec![2.0, 4.0]);

        let power = stats.last().unwrap();
        assert_eq!(power.name, ControllerParams::FIELD_NAME);
        assert_eq!(power.mean, 4.0);
    }

    #[test]
    fn describe_empty_fleet() {
        let stats = describe(&Fleet::default());
        assert!(stats.iter().all(|s| s.values.is_empty() && s.mean == 0.0));
    }
}
