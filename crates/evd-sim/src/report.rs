//! Run counters and the end-of-run summary.

use std::fmt;

use evd_core::SimTime;

use crate::ledger::DemandSample;

/// Tallies kept by the context while the run progresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunCounters {
    pub instants:         u64,
    pub dispatches:       u64,
    pub charge_starts:    u64,
    pub charge_stops:     u64,
    pub public_granted:   u64,
    pub public_missed:    u64,
    /// Waits whose sampled duration was zero or negative.
    pub degenerate_waits: u64,
    pub vehicles_done:    u64,
}

/// What a finished run looked like.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub final_time:          SimTime,
    pub counters:            RunCounters,
    pub peak_demand:         Option<DemandSample>,
    pub final_demand_kw:     f64,
    pub peak_slots_held:     usize,
    /// Controllers still drawing power when the run stopped.
    pub chargers_active_end: usize,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.counters;
        writeln!(f, "final time        : {}", self.final_time)?;
        writeln!(f, "charge starts     : {}", c.charge_starts)?;
        writeln!(f, "charge stops      : {}", c.charge_stops)?;
        writeln!(f, "public slots      : {} granted, {} missed", c.public_granted, c.public_missed)?;
        writeln!(f, "peak slots held   : {}", self.peak_slots_held)?;
        match self.peak_demand {
            Some(p) => writeln!(f, "peak demand       : {:.1} kW at {}", p.demand_kw, p.time)?,
            None => writeln!(f, "peak demand       : none")?,
        }
        writeln!(f, "demand at end     : {:.1} kW ({} chargers)", self.final_demand_kw, self.chargers_active_end)?;
        writeln!(f, "vehicles done     : {}", c.vehicles_done)?;
        write!(f, "degenerate waits  : {}", c.degenerate_waits)
    }
}
