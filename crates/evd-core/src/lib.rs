//! `evd-core` — foundational types for the EV charging-demand simulator.
//!
//! This crate is a dependency of every other `evd-*` crate.  It has no
//! `evd-*` dependencies and only a few external ones (`rand`, `rand_distr`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                 |
//! |-----------|----------------------------------------------------------|
//! | [`ids`]   | `VehicleId`, `TicketId`                                  |
//! | [`time`]  | `SimTime` (minutes since midnight), `SimClock`, `SimConfig` |
//! | [`rng`]   | `VehicleRng` (per-vehicle), `Sampler` trait              |
//! | [`error`] | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{TicketId, VehicleId};
pub use rng::{Sampler, VehicleRng};
pub use time::{MINUTES_PER_DAY, SimClock, SimConfig, SimTime};
