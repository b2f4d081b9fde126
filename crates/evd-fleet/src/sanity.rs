//! The acceptance predicate over sampled vehicle parameters.
//!
//! [`SanityBounds::check`] is a pure function of its inputs: the same
//! parameters always produce the same verdict, and nothing is mutated.

use std::fmt;
use std::ops::RangeInclusive;

use crate::VehicleParams;

/// The first constraint a candidate failed.
#[derive(Clone, Debug, PartialEq)]
pub enum SanityViolation {
    OutOfRange { parameter: &'static str, value: f64 },
    /// Round trip longer than the battery's range.
    InsufficientRange { round_trip_km: f64, range_km: f64 },
}

impl fmt::Display for SanityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanityViolation::OutOfRange { parameter, value } => {
                write!(f, "{parameter} out of range: {value:.3}")
            }
            SanityViolation::InsufficientRange { round_trip_km, range_km } => {
                write!(f, "round trip {round_trip_km:.1} km exceeds range {range_km:.1} km")
            }
        }
    }
}

/// Plausible ranges for each sampled parameter (all inclusive).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SanityBounds {
    pub distance_km:          RangeInclusive<f64>,
    pub work_start_min:       RangeInclusive<f64>,
    pub speed_kmh:            RangeInclusive<f64>,
    pub time_at_work_min:     RangeInclusive<f64>,
    pub battery_capacity_kwh: RangeInclusive<f64>,
}

impl Default for SanityBounds {
    fn default() -> Self {
        Self {
            distance_km:          0.5..=100.0,
            work_start_min:       0.1 * 60.0..=24.0 * 60.0 - 1.0,
            speed_kmh:            0.5..=50.0,
            time_at_work_min:     0.5 * 60.0..=15.0 * 60.0,
            battery_capacity_kwh: 5.0..=100.0,
        }
    }
}

impl SanityBounds {
    /// `Ok(())` if every constraint holds, otherwise the first violation.
    pub fn check(&self, p: &VehicleParams) -> Result<(), SanityViolation> {
        let ranged = [
            (VehicleParams::FIELD_NAMES[0], p.distance_to_work_km, &self.distance_km),
            (VehicleParams::FIELD_NAMES[4], p.work_start_min, &self.work_start_min),
            (VehicleParams::FIELD_NAMES[1], p.avg_travel_speed_kmh, &self.speed_kmh),
            (VehicleParams::FIELD_NAMES[2], p.time_at_work_min, &self.time_at_work_min),
            (VehicleParams::FIELD_NAMES[3], p.battery_capacity_kwh, &self.battery_capacity_kwh),
        ];
        for (parameter, value, range) in ranged {
            // `contains` is false for NaN, which is what we want.
            if !range.contains(&value) {
                return Err(SanityViolation::OutOfRange { parameter, value });
            }
        }

        let round_trip_km = 2.0 * p.distance_to_work_km;
        if round_trip_km > p.range_km {
            return Err(SanityViolation::InsufficientRange { round_trip_km, range_km: p.range_km });
        }
        Ok(())
    }

    #[inline]
    pub fn accepts(&self, p: &VehicleParams) -> bool {
        self.check(p).is_ok()
    }
}
