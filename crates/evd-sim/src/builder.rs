//! Builder for constructing a ready-to-run [`Sim`].

use evd_core::{SimConfig, SimTime};
use evd_fleet::Fleet;
use evd_schedule::ProcessId;
use tracing::debug;

use crate::{BatteryController, Sim, SimContext, SimError, SimResult, Vehicle};

/// Builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: horizon, seed, station capacity, fleet size
/// - [`Fleet`]: accepted parameters from [`evd_fleet::FleetBuilder`]
///
/// # Example
///
/// ```rust,ignore
/// let fleet = FleetBuilder::new(config.fleet_size, config.seed).build()?;
/// let mut sim = SimBuilder::new(config, fleet).build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    fleet:  Fleet,
}

impl SimBuilder {
    pub fn new(config: SimConfig, fleet: Fleet) -> Self {
        Self { config, fleet }
    }

    /// Validate inputs, create one controller and one vehicle per fleet
    /// entry, and make every vehicle ready at midnight in creation order.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        if self.fleet.len() != self.config.fleet_size {
            return Err(SimError::FleetSizeMismatch {
                expected: self.config.fleet_size,
                got:      self.fleet.len(),
            });
        }

        let mut ctx = SimContext::new(self.fleet.len(), self.config.station_capacity);
        let mut controllers = Vec::with_capacity(self.fleet.len());
        let mut vehicles = Vec::with_capacity(self.fleet.len());

        for (id, params, rating) in self.fleet.iter() {
            controllers.push(BatteryController::new(id, *rating));
            vehicles.push(Vehicle::new(id, params.clone()));
            ctx.queue.push(SimTime::ZERO, ProcessId::Vehicle(id));
        }
        debug!(
            vehicles = vehicles.len(),
            station_capacity = self.config.station_capacity,
            horizon = %self.config.horizon,
            "simulation built"
        );

        Ok(Sim {
            config: self.config,
            fleet: self.fleet,
            vehicles,
            controllers,
            ctx,
        })
    }
}
