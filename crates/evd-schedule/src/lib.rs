//! `evd-schedule` — the time-ordered wake-up queue behind the simulation clock.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`process`]     | `ProcessId` (`Vehicle` / `Controller`)                |
//! | [`event_queue`] | `EventQueue` (`BTreeMap<SimTime, Vec<ProcessId>>`)    |
//!
//! # Ordering model (summary)
//!
//! ```text
//! next instant      = smallest SimTime with at least one queued process
//! same-instant order = order in which the processes were pushed (FIFO)
//! ```
//!
//! A process that becomes ready at the instant currently being drained is
//! queued behind everything already drained, so it runs later in the same
//! instant, never earlier.

pub mod event_queue;
pub mod process;

#[cfg(test)]
mod tests;

pub use event_queue::EventQueue;
pub use process::ProcessId;
