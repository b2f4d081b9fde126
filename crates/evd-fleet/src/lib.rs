//! `evd-fleet` — vehicle parameter sampling, sanity filtering and fleet
//! construction.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                 |
//! |-------------------|----------------------------------------------------------|
//! | [`params`]        | `VehicleParams`, `ControllerParams`, derived-value math  |
//! | [`distributions`] | `FleetDistributions` — the sampling recipe               |
//! | [`sanity`]        | `SanityBounds`, `SanityViolation` — the acceptance test  |
//! | [`builder`]       | `FleetBuilder` (generate → validate → retry)             |
//! | [`fleet`]         | `Fleet` — the accepted vehicles and controllers          |
//! | [`stats`]         | `ParameterStats`, `describe` — per-parameter summaries   |
//! | [`error`]         | `FleetError`, `FleetResult<T>`                           |
//!
//! Nothing in this crate touches the simulation clock.  A rejected candidate
//! is plain data and is simply dropped.

pub mod builder;
pub mod distributions;
pub mod error;
pub mod fleet;
pub mod params;
pub mod sanity;
pub mod stats;

#[cfg(test)]
mod tests;

pub use builder::FleetBuilder;
pub use distributions::FleetDistributions;
pub use error::{FleetError, FleetResult};
pub use fleet::Fleet;
pub use params::{ControllerParams, VehicleParams, mean_travel_speed_kmh, range_for_capacity_km};
pub use sanity::{SanityBounds, SanityViolation};
pub use stats::{ParameterStats, describe};
