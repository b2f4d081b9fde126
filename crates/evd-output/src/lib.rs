//! `evd-output` — run output writers for the EV demand simulator.
//!
//! | Backend | Files created                                   |
//! |---------|-------------------------------------------------|
//! | CSV     | `demand.csv`, `charge_events.csv`, `fleet.csv`  |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `evd_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use evd_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! obs.write_fleet(&sim.fleet);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ChargeEdge, ChargeEventRow, DemandRow, VehicleRow};
pub use writer::OutputWriter;
