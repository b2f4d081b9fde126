//! The simulation context handed to every process step.
//!
//! `SimContext` owns everything processes share: the clock, the wake-up
//! queue, the public station, the demand ledger, and the per-vehicle
//! mailboxes through which vehicles talk to their controllers.  Processes
//! never reach each other directly; every interaction goes through here.
//!
//! The station is only reachable through the non-blocking
//! [`try_acquire_slot`](SimContext::try_acquire_slot), so nobody is ever
//! queued for a slot during a run and a release never hands a slot over.

use evd_core::{SimClock, SimTime, VehicleId};
use evd_schedule::{EventQueue, ProcessId};
use tracing::warn;

use crate::controller::{ChargeRequest, Mailbox};
use crate::station::{ChargingStation, SlotHandle};
use crate::{DemandLedger, RunCounters, SimError, SimResult};

pub struct SimContext {
    pub clock:    SimClock,
    pub queue:    EventQueue,
    pub ledger:   DemandLedger,
    pub counters: RunCounters,
    station:      ChargingStation,
    mailboxes:    Vec<Mailbox>,
}

impl SimContext {
    pub fn new(vehicle_count: usize, station_capacity: usize) -> Self {
        Self {
            clock:     SimClock::new(),
            queue:     EventQueue::new(),
            ledger:    DemandLedger::new(),
            counters:  RunCounters::default(),
            station:   ChargingStation::new(station_capacity),
            mailboxes: (0..vehicle_count).map(|_| Mailbox::default()).collect(),
        }
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    /// Suspend `process` for `duration_min` minutes and return the wake-up
    /// instant.
    ///
    /// A non-positive duration is logged and counted, then treated as a
    /// zero-length wait: the process resumes later in the same instant.  A
    /// NaN or infinite duration is an error.
    pub fn wait(
        &mut self,
        process:      ProcessId,
        duration_min: f64,
        activity:     &'static str,
    ) -> SimResult<SimTime> {
        let now = self.now();
        if !duration_min.is_finite() {
            return Err(SimError::InvalidDuration { process, activity, duration_min });
        }
        if duration_min <= 0.0 {
            warn!(%process, %now, duration_min, activity, "non-positive wait");
            self.counters.degenerate_waits += 1;
        }
        let at = now.after(duration_min);
        self.queue.push(at, process);
        Ok(at)
    }

    /// Make `process` ready at the current instant, behind everything
    /// already queued for it.
    pub fn ready_now(&mut self, process: ProcessId) {
        self.queue.push(self.now(), process);
    }

    // ── Controller mailboxes ──────────────────────────────────────────────

    /// Post a charge request to `vehicle`'s controller.
    ///
    /// Rejects a non-positive deficit and a second request while one is
    /// still outstanding.
    pub fn request_charge(&mut self, vehicle: VehicleId, deficit_kwh: f64) -> SimResult<()> {
        if deficit_kwh <= 0.0 || deficit_kwh.is_nan() {
            return Err(SimError::NonPositiveDeficit { vehicle, deficit_kwh });
        }
        let mailbox = &mut self.mailboxes[vehicle.index()];
        if mailbox.pending.is_some() {
            return Err(SimError::ActivationOverlap { vehicle });
        }
        mailbox.pending = Some(ChargeRequest { deficit_kwh });
        if mailbox.listening {
            mailbox.listening = false;
            self.ready_now(ProcessId::Controller(vehicle));
        }
        Ok(())
    }

    pub(crate) fn take_charge_request(&mut self, vehicle: VehicleId) -> Option<ChargeRequest> {
        self.mailboxes[vehicle.index()].pending.take()
    }

    /// The controller is idle and waiting for the next request.
    pub(crate) fn listen(&mut self, vehicle: VehicleId) {
        self.mailboxes[vehicle.index()].listening = true;
    }

    /// `true` if a request is posted but not yet picked up.
    pub fn has_pending_request(&self, vehicle: VehicleId) -> bool {
        self.mailboxes[vehicle.index()].pending.is_some()
    }

    // ── Public station ────────────────────────────────────────────────────

    /// Read-only view of the public station.
    pub fn station(&self) -> &ChargingStation {
        &self.station
    }

    /// Non-blocking slot check.
    pub fn try_acquire_slot(&mut self, vehicle: VehicleId) -> Option<SlotHandle> {
        self.station.try_acquire(vehicle)
    }

    /// Return a slot taken with [`try_acquire_slot`](Self::try_acquire_slot).
    pub fn release_slot(&mut self, handle: SlotHandle) -> SimResult<()> {
        let handed_over = self.station.release(handle)?;
        debug_assert!(handed_over.is_none(), "no vehicle queues for a slot");
        Ok(())
    }
}
