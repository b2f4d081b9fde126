//! Identifiers for the two kinds of simulated process.

use std::fmt;

use evd_core::VehicleId;

/// A schedulable process.
///
/// Each vehicle runs two processes: its behavioral sequence and its battery
/// controller.  Both share the vehicle's index.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ProcessId {
    Vehicle(VehicleId),
    Controller(VehicleId),
}

impl ProcessId {
    /// The vehicle this process belongs to.
    #[inline]
    pub fn vehicle(self) -> VehicleId {
        match self {
            ProcessId::Vehicle(v) | ProcessId::Controller(v) => v,
        }
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::Vehicle(v) => write!(f, "vehicle/{}", v.0),
            ProcessId::Controller(v) => write!(f, "controller/{}", v.0),
        }
    }
}
