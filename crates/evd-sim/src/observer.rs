//! Simulation observer trait for progress reporting and data collection.

use evd_core::{SimTime, VehicleId};

use crate::DemandLedger;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as events happen.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: active-set tracker
///
/// ```rust,ignore
/// struct Active(HashSet<VehicleId>);
///
/// impl SimObserver for Active {
///     fn on_charge_start(&mut self, _: SimTime, v: VehicleId, _: f64, _: f64) {
///         self.0.insert(v);
///     }
///     fn on_charge_stop(&mut self, _: SimTime, v: VehicleId, _: f64, _: f64) {
///         self.0.remove(&v);
///     }
/// }
/// ```
pub trait SimObserver {
    /// The clock reached `now` with `ready` processes due.
    fn on_instant(&mut self, _now: SimTime, _ready: usize) {}

    /// A controller started drawing `power_kw`; `total_kw` is the ledger
    /// value after the change.
    fn on_charge_start(&mut self, _now: SimTime, _vehicle: VehicleId, _power_kw: f64, _total_kw: f64) {}

    /// A controller stopped drawing `power_kw`.
    fn on_charge_stop(&mut self, _now: SimTime, _vehicle: VehicleId, _power_kw: f64, _total_kw: f64) {}

    /// A vehicle arrived at work and checked for a free public slot.
    /// `held` is the number of slots in use after the check.
    fn on_public_slot(&mut self, _now: SimTime, _vehicle: VehicleId, _granted: bool, _held: usize) {}

    /// A vehicle posted its home charge request and finished its day.
    fn on_vehicle_done(&mut self, _now: SimTime, _vehicle: VehicleId) {}

    /// Called once after the last processed instant.
    fn on_sim_end(&mut self, _final_time: SimTime, _ledger: &DemandLedger) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
