use evd_core::{CoreError, VehicleId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("fleet configuration error: {0}")]
    Config(String),

    #[error("{vehicle}: no candidate passed the sanity filter after {attempts} attempts")]
    RejectionLimit { vehicle: VehicleId, attempts: u32 },

    #[error("{vehicle}: controller power never exceeded {floor_kw} kW after {attempts} draws")]
    PowerFloorUnreachable {
        vehicle:  VehicleId,
        floor_kw: f64,
        attempts: u32,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type FleetResult<T> = Result<T, FleetError>;
