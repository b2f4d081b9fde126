//! `evd-sim` — the discrete-event engine for the EV charging-demand model.
//!
//! # Processes
//!
//! Every vehicle contributes two cooperative processes that share one
//! virtual clock:
//!
//! | Process             | Suspends on                                     |
//! |---------------------|-------------------------------------------------|
//! | [`Vehicle`]         | departure time, commutes, the work shift        |
//! | [`BatteryController`] | a charge request, the charge duration         |
//!
//! Vehicles contend for [`ChargingStation`] slots (non-blocking) and post
//! [`ChargeRequest`]s to their own controller.  Controllers report every
//! power change to the shared [`DemandLedger`].
//!
//! Everything shared lives in [`SimContext`]; the loop in [`Sim`] pops the
//! earliest instant from the queue and resumes whatever is due.  All of it
//! runs on one thread, so nothing needs locking.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use evd_core::SimConfig;
//! use evd_fleet::FleetBuilder;
//! use evd_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::default();
//! let fleet = FleetBuilder::new(config.fleet_size, config.seed).build()?;
//! let mut sim = SimBuilder::new(config, fleet).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("{report}");
//! ```

pub mod builder;
pub mod context;
pub mod controller;
pub mod error;
pub mod ledger;
pub mod observer;
pub mod report;
pub mod sim;
pub mod station;
pub mod vehicle;


pub use builder::SimBuilder;
pub use context::SimContext;
pub use controller::{BatteryController, ChargeRequest, ControllerState};
pub use error::{SimError, SimResult};
pub use ledger::{DemandLedger, DemandSample};
pub use observer::{NoopObserver, SimObserver};
pub use report::{RunCounters, RunReport};
pub use sim::Sim;
pub use station::{Acquire, ChargingStation, Grant, SlotHandle};
pub use vehicle::{Vehicle, VehiclePhase};
