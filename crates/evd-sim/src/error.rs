use evd_core::{CoreError, SimTime, TicketId, VehicleId};
use evd_schedule::ProcessId;
use thiserror::Error;

/// Everything that can abort a run.
///
/// Apart from `FleetSizeMismatch` (raised while building) and `Core`, each
/// variant is an invariant violation inside the model: the run stops rather
/// than continue from a corrupt state.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("fleet has {got} vehicles but the configuration asks for {expected}")]
    FleetSizeMismatch { expected: usize, got: usize },

    #[error("slot {ticket} released by {holder} is not held at this station")]
    SlotNotHeld { ticket: TicketId, holder: VehicleId },

    #[error("{vehicle}: charge requested while a previous request is still pending")]
    ActivationOverlap { vehicle: VehicleId },

    #[error("{vehicle}: charge request for non-positive deficit {deficit_kwh} kWh")]
    NonPositiveDeficit { vehicle: VehicleId, deficit_kwh: f64 },

    #[error("{vehicle}: battery overdrawn to {charge_kwh:.3} kWh")]
    BatteryOverdraw { vehicle: VehicleId, charge_kwh: f64 },

    #[error("{process}: {activity} wait of {duration_min} minutes is not finite")]
    InvalidDuration { process: ProcessId, activity: &'static str, duration_min: f64 },

    #[error("{process} woken with nothing to do")]
    SpuriousWake { process: ProcessId },

    #[error("ledger sample at {requested} precedes last sample at {last}")]
    LedgerOutOfOrder { last: SimTime, requested: SimTime },

    #[error("ledger stop of {power_kw} kW at {at} with no charger active")]
    LedgerUnderflow { at: SimTime, power_kw: f64 },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
