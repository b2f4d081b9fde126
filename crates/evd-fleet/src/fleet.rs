//! `Fleet` — the accepted vehicles and their controllers, indexed by `VehicleId`.

use evd_core::VehicleId;

use crate::{ControllerParams, FleetError, FleetResult, VehicleParams};

/// Parallel arrays of accepted parameters.
///
/// `vehicles[i]` and `controllers[i]` belong to `VehicleId(i)`; both vectors
/// always have the same length.
#[derive(Clone, Debug, Default)]
pub struct Fleet {
    vehicles:    Vec<VehicleParams>,
    controllers: Vec<ControllerParams>,
    /// Candidates discarded by the sanity filter while building.
    pub rejected: u64,
}

impl Fleet {
    /// Assemble a fleet from explicit parameters (no sampling, no sanity
    /// filtering).
    ///
    /// Still rejects values the engine cannot run with: any non-finite
    /// parameter (a zero speed gives an infinite travel time), a battery
    /// without capacity, or a controller that draws no power.
    pub fn from_parts(
        vehicles:    Vec<VehicleParams>,
        controllers: Vec<ControllerParams>,
    ) -> FleetResult<Self> {
        if vehicles.len() != controllers.len() {
            return Err(FleetError::Config(format!(
                "{} vehicles but {} controllers",
                vehicles.len(),
                controllers.len()
            )));
        }
        if u32::try_from(vehicles.len()).is_err() {
            return Err(FleetError::Config(format!("fleet of {} exceeds u32 ids", vehicles.len())));
        }
        for (i, (vehicle, controller)) in vehicles.iter().zip(&controllers).enumerate() {
            check_runnable(VehicleId(i as u32), vehicle, controller)?;
        }
        Ok(Self { vehicles, controllers, rejected: 0 })
    }

    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            vehicles:    Vec::with_capacity(n),
            controllers: Vec::with_capacity(n),
            rejected:    0,
        }
    }

    pub(crate) fn push(&mut self, vehicle: VehicleParams, controller: ControllerParams) {
        self.vehicles.push(vehicle);
        self.controllers.push(controller);
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn vehicles(&self) -> &[VehicleParams] {
        &self.vehicles
    }

    pub fn controllers(&self) -> &[ControllerParams] {
        &self.controllers
    }

    #[inline]
    pub fn vehicle(&self, id: VehicleId) -> &VehicleParams {
        &self.vehicles[id.index()]
    }

    #[inline]
    pub fn controller(&self, id: VehicleId) -> &ControllerParams {
        &self.controllers[id.index()]
    }

    /// `(id, vehicle, controller)` in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (VehicleId, &VehicleParams, &ControllerParams)> {
        self.vehicles
            .iter()
            .zip(&self.controllers)
            .enumerate()
            .map(|(i, (v, c))| (VehicleId(i as u32), v, c))
    }
}

fn check_runnable(id: VehicleId, vehicle: &VehicleParams, controller: &ControllerParams) -> FleetResult<()> {
    if let Some((name, value)) = vehicle.named_values().into_iter().find(|(_, v)| !v.is_finite()) {
        return Err(FleetError::Config(format!("{id}: {name} is {value}")));
    }
    if vehicle.battery_capacity_kwh <= 0.0 {
        return Err(FleetError::Config(format!(
            "{id}: battery capacity must be positive, got {} kWh",
            vehicle.battery_capacity_kwh
        )));
    }
    let power = controller.continuous_input_power_kw;
    if !power.is_finite() || power <= 0.0 {
        return Err(FleetError::Config(format!("{id}: controller power must be positive, got {power} kW")));
    }
    Ok(())
}
