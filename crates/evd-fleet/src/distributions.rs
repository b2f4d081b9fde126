//! The sampling recipe for vehicle and controller parameters.
//!
//! | Parameter              | Distribution                         | Mean        |
//! |------------------------|--------------------------------------|-------------|
//! | time at work           | Normal(540, 90) min                  | 9 h         |
//! | work start             | Gamma(8, 60) min since midnight      | 08:00       |
//! | distance to work       | Gamma(1.5, 2) km                     | 3 km        |
//! | travel speed           | Normal(mean_speed(distance), 1.2)    | —           |
//! | battery capacity       | Gamma(8.6, 25 / 8.6) kWh             | 25 kWh      |
//! | controller input power | Normal(5, 2) kW, redrawn until > 2.0 | —           |

use evd_core::{Sampler, VehicleId};

use crate::{ControllerParams, FleetError, FleetResult, VehicleParams, mean_travel_speed_kmh};

/// Normal(`mean`, `std_dev`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalParams {
    pub mean:    f64,
    pub std_dev: f64,
}

/// Gamma(`shape`, `scale`); mean = `shape * scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GammaParams {
    pub shape: f64,
    pub scale: f64,
}

impl GammaParams {
    #[inline]
    pub fn mean(&self) -> f64 {
        self.shape * self.scale
    }
}

/// Distribution parameters for every sampled quantity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetDistributions {
    pub time_at_work_min:          NormalParams,
    pub work_start_min:            GammaParams,
    pub distance_km:               GammaParams,
    /// Spread around [`mean_travel_speed_kmh`].
    pub speed_std_dev_kmh:         f64,
    pub battery_capacity_kwh:      GammaParams,
    pub controller_power_kw:       NormalParams,
    /// Controller power draws at or below this are discarded and redrawn.
    pub controller_power_floor_kw: f64,
}

impl Default for FleetDistributions {
    fn default() -> Self {
        Self {
            time_at_work_min:          NormalParams { mean: 9.0 * 60.0, std_dev: 90.0 },
            work_start_min:            GammaParams { shape: 8.0, scale: 8.0 * 60.0 / 8.0 },
            distance_km:               GammaParams { shape: 1.5, scale: 3.0 / 1.5 },
            speed_std_dev_kmh:         1.2,
            battery_capacity_kwh:      GammaParams { shape: 8.6, scale: 25.0 / 8.6 },
            controller_power_kw:       NormalParams { mean: 5.0, std_dev: 2.0 },
            controller_power_floor_kw: 2.0,
        }
    }
}

impl FleetDistributions {
    /// Check every parameter before any sampling happens.
    pub fn validate(&self) -> FleetResult<()> {
        let normals = [
            ("time_at_work_min", self.time_at_work_min),
            ("controller_power_kw", self.controller_power_kw),
        ];
        for (name, n) in normals {
            if !n.mean.is_finite() || !(n.std_dev.is_finite() && n.std_dev >= 0.0) {
                return Err(FleetError::Config(format!(
                    "{name}: normal needs a finite mean and std_dev >= 0, got {n:?}"
                )));
            }
        }

        let gammas = [
            ("work_start_min", self.work_start_min),
            ("distance_km", self.distance_km),
            ("battery_capacity_kwh", self.battery_capacity_kwh),
        ];
        for (name, g) in gammas {
            if !(g.shape.is_finite() && g.shape > 0.0 && g.scale.is_finite() && g.scale > 0.0) {
                return Err(FleetError::Config(format!(
                    "{name}: gamma needs shape > 0 and scale > 0, got {g:?}"
                )));
            }
        }

        if !(self.speed_std_dev_kmh.is_finite() && self.speed_std_dev_kmh >= 0.0) {
            return Err(FleetError::Config(format!(
                "speed_std_dev_kmh must be finite and >= 0, got {}",
                self.speed_std_dev_kmh
            )));
        }
        if !self.controller_power_floor_kw.is_finite() {
            return Err(FleetError::Config("controller_power_floor_kw must be finite".into()));
        }
        Ok(())
    }

    /// Draw one candidate vehicle.  The result has not been sanity-checked.
    pub fn sample_vehicle<S: Sampler>(&self, sampler: &mut S) -> FleetResult<VehicleParams> {
        let distance = sampler.gamma(self.distance_km.shape, self.distance_km.scale)?;
        let battery = sampler.gamma(self.battery_capacity_kwh.shape, self.battery_capacity_kwh.scale)?;
        let speed = sampler.normal(mean_travel_speed_kmh(distance), self.speed_std_dev_kmh)?;
        let at_work = sampler.normal(self.time_at_work_min.mean, self.time_at_work_min.std_dev)?;
        let start = sampler.gamma(self.work_start_min.shape, self.work_start_min.scale)?;
        Ok(VehicleParams::derive(distance, speed, at_work, battery, start))
    }

    /// Draw a controller rating, redrawing until it exceeds the power floor.
    ///
    /// Gives up with [`FleetError::PowerFloorUnreachable`] after
    /// `max_attempts` draws.
    pub fn sample_controller<S: Sampler>(
        &self,
        sampler:      &mut S,
        vehicle:      VehicleId,
        max_attempts: u32,
    ) -> FleetResult<ControllerParams> {
        let NormalParams { mean, std_dev } = self.controller_power_kw;
        for _ in 0..max_attempts {
            let power = sampler.normal(mean, std_dev)?;
            if power > self.controller_power_floor_kw {
                return Ok(ControllerParams { continuous_input_power_kw: power });
            }
        }
        Err(FleetError::PowerFloorUnreachable {
            vehicle,
            floor_kw: self.controller_power_floor_kw,
            attempts: max_attempts,
        })
    }
}
