//! The `Sim` struct and its event loop.

use evd_core::{SimConfig, SimTime, VehicleId};
use evd_fleet::Fleet;
use evd_schedule::ProcessId;
use tracing::info;

use crate::{BatteryController, RunReport, SimContext, SimObserver, SimResult, Vehicle};

/// The main simulation runner.
///
/// Each iteration of the loop:
///
/// 1. **Advance**: pop the earliest pending instant and move the clock there.
/// 2. **Dispatch**: resume every process due at that instant, in the order
///    they became ready.  A process that becomes ready at the same instant
///    while this batch runs (a controller receiving a request, a zero-length
///    wait) is queued behind the batch and runs in a later pass at the same
///    instant.
///
/// The loop ends when the queue is empty or the next instant reaches the
/// horizon.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,

    /// The accepted parameters the run was built from.
    pub fleet: Fleet,

    /// Per-vehicle processes, indexed by `VehicleId`.
    pub vehicles: Vec<Vehicle>,

    /// Per-vehicle battery controllers, indexed by `VehicleId`.
    pub controllers: Vec<BatteryController>,

    /// Clock, queue, station, ledger, and mailboxes.
    pub ctx: SimContext,
}

impl Sim {
    /// Run to `config.horizon`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunReport> {
        self.run_until(self.config.horizon, observer)?;
        observer.on_sim_end(self.ctx.now(), &self.ctx.ledger);

        let report = self.report();
        info!(
            final_time = %report.final_time,
            charge_starts = report.counters.charge_starts,
            public_granted = report.counters.public_granted,
            peak_kw = report.peak_demand.map_or(0.0, |p| p.demand_kw),
            "simulation finished"
        );
        Ok(report)
    }

    /// Process every instant strictly before `until` (and before the
    /// horizon).  Can be called repeatedly to step through a run.
    pub fn run_until<O: SimObserver>(&mut self, until: SimTime, observer: &mut O) -> SimResult<()> {
        let stop = until.min(self.config.horizon);
        while let Some(next) = self.ctx.queue.next_time() {
            if next >= stop {
                break;
            }
            let Some((now, ready)) = self.ctx.queue.pop_next() else {
                break;
            };
            self.ctx.clock.advance_to(now)?;
            self.ctx.counters.instants += 1;
            observer.on_instant(now, ready.len());

            for process in ready {
                self.dispatch(process, observer)?;
            }
        }
        Ok(())
    }

    pub fn now(&self) -> SimTime {
        self.ctx.now()
    }

    pub fn vehicle(&self, id: VehicleId) -> &Vehicle {
        &self.vehicles[id.index()]
    }

    pub fn controller(&self, id: VehicleId) -> &BatteryController {
        &self.controllers[id.index()]
    }

    /// Snapshot of the counters and headline figures so far.
    pub fn report(&self) -> RunReport {
        RunReport {
            final_time:          self.ctx.now(),
            counters:            self.ctx.counters,
            peak_demand:         self.ctx.ledger.peak(),
            final_demand_kw:     self.ctx.ledger.current_kw(),
            peak_slots_held:     self.ctx.station().peak_held(),
            chargers_active_end: self.ctx.ledger.active_chargers(),
        }
    }

    fn dispatch<O: SimObserver>(&mut self, process: ProcessId, observer: &mut O) -> SimResult<()> {
        self.ctx.counters.dispatches += 1;
        match process {
            ProcessId::Vehicle(v) => self.vehicles[v.index()].step(&mut self.ctx, observer),
            ProcessId::Controller(v) => self.controllers[v.index()].step(&mut self.ctx, observer),
        }
    }
}
