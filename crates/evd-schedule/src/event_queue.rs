//! `EventQueue` — sparse, time-ordered process activation queue.
//!
//! Processes spend nearly all of their life suspended (waiting for departure,
//! at work, charging).  Instead of polling every process, a suspending
//! process registers the instant at which it needs attention next, and the
//! simulation drains only the processes due at the earliest instant.
//!
//! `BTreeMap` gives O(log W) insert and pop where W is the number of distinct
//! pending instants.  Sampled times are continuous, so W is close to the
//! number of pending processes; the constant is still small.

use std::collections::BTreeMap;

use evd_core::SimTime;

use crate::ProcessId;

/// A priority queue mapping simulation instants → processes to resume.
#[derive(Default)]
pub struct EventQueue {
    inner: BTreeMap<SimTime, Vec<ProcessId>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `process` to resume at `at`.
    ///
    /// Processes pushed for the same instant resume in push order.
    pub fn push(&mut self, at: SimTime, process: ProcessId) {
        self.inner.entry(at).or_default().push(process);
        self.total += 1;
    }

    /// Remove and return the earliest instant and every process due then.
    ///
    /// Returns `None` once the queue is empty.
    pub fn pop_next(&mut self) -> Option<(SimTime, Vec<ProcessId>)> {
        let (at, processes) = self.inner.pop_first()?;
        self.total -= processes.len();
        Some((at, processes))
    }

    /// The earliest instant with at least one queued process, or `None` if empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    /// Total number of (instant, process) entries.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct future instants that have at least one queued process.
    pub fn instant_count(&self) -> usize {
        self.inner.len()
    }
}
