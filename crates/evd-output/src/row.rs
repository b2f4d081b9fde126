//! Plain data row types written by output backends.

use evd_core::VehicleId;
use evd_fleet::{ControllerParams, VehicleParams};

/// One demand-ledger sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandRow {
    pub time_min:  f64,
    pub demand_kw: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeEdge {
    Start,
    Stop,
}

impl ChargeEdge {
    pub fn as_str(self) -> &'static str {
        match self {
            ChargeEdge::Start => "start",
            ChargeEdge::Stop => "stop",
        }
    }
}

/// A controller switching on or off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeEventRow {
    pub time_min:   f64,
    pub vehicle_id: u32,
    pub edge:       ChargeEdge,
    pub power_kw:   f64,
    /// Fleet-wide demand after the change.
    pub total_kw:   f64,
}

/// The accepted parameters of one vehicle and its controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleRow {
    pub vehicle_id:              u32,
    pub distance_to_work_km:     f64,
    pub avg_travel_speed_kmh:    f64,
    pub time_at_work_min:        f64,
    pub battery_capacity_kwh:    f64,
    pub work_start_min:          f64,
    pub range_km:                f64,
    pub travel_time_to_work_min: f64,
    pub controller_power_kw:     f64,
}

impl VehicleRow {
    pub fn new(id: VehicleId, vehicle: &VehicleParams, controller: &ControllerParams) -> Self {
        Self {
            vehicle_id:              id.0,
            distance_to_work_km:     vehicle.distance_to_work_km,
            avg_travel_speed_kmh:    vehicle.avg_travel_speed_kmh,
            time_at_work_min:        vehicle.time_at_work_min,
            battery_capacity_kwh:    vehicle.battery_capacity_kwh,
            work_start_min:          vehicle.work_start_min,
            range_km:                vehicle.range_km,
            travel_time_to_work_min: vehicle.travel_time_to_work_min,
            controller_power_kw:     controller.continuous_input_power_kw,
        }
    }
}
