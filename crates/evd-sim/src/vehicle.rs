//! The vehicle's daily behavioral process.
//!
//! ```text
//! Created ─▶ AwaitingDeparture ─▶ CommutingToWork ─▶ [PublicCharging] ─▶ AtWork
//!                                                                          │
//!                         Done ◀─ HomeCharging ◀─ CommutingHome ◀──────────┘
//! ```
//!
//! `PublicCharging` and `HomeCharging` are instantaneous: the vehicle posts a
//! charge request to its controller and moves on.  The energy is credited to
//! the battery at once; only the controller's timeline (and so the demand
//! ledger) reflects the gradual draw.  Public charging is opportunistic: the
//! vehicle takes a slot only if one is free on arrival and never queues.

use evd_core::VehicleId;
use evd_fleet::VehicleParams;
use evd_schedule::ProcessId;
use tracing::{debug, trace};

use crate::station::SlotHandle;
use crate::{SimContext, SimError, SimObserver, SimResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehiclePhase {
    /// Not yet dispatched.
    Created,
    AwaitingDeparture,
    CommutingToWork,
    PublicCharging,
    AtWork,
    CommutingHome,
    HomeCharging,
    Done,
}

pub struct Vehicle {
    id:         VehicleId,
    params:     VehicleParams,
    phase:      VehiclePhase,
    charge_kwh: f64,
    slot:       Option<SlotHandle>,
    /// Whether a public slot was obtained today.
    pub charged_at_work: bool,
}

impl Vehicle {
    pub fn new(id: VehicleId, params: VehicleParams) -> Self {
        let charge_kwh = params.battery_capacity_kwh;
        Self {
            id,
            params,
            phase: VehiclePhase::Created,
            charge_kwh,
            slot: None,
            charged_at_work: false,
        }
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn params(&self) -> &VehicleParams {
        &self.params
    }

    pub fn phase(&self) -> VehiclePhase {
        self.phase
    }

    pub fn charge_kwh(&self) -> f64 {
        self.charge_kwh
    }

    pub fn holds_slot(&self) -> bool {
        self.slot.is_some()
    }

    /// Resume the vehicle at the current instant and run it to its next
    /// suspension point.
    pub(crate) fn step<O: SimObserver>(
        &mut self,
        ctx: &mut SimContext,
        observer: &mut O,
    ) -> SimResult<()> {
        let me = ProcessId::Vehicle(self.id);
        match self.phase {
            VehiclePhase::Created => {
                // The run starts at midnight, so departure is a plain wait.
                ctx.wait(me, self.params.work_start_min, "departure")?;
                self.enter(VehiclePhase::AwaitingDeparture, ctx);
            }
            VehiclePhase::AwaitingDeparture => {
                ctx.wait(me, self.params.travel_time_to_work_min, "commute to work")?;
                self.enter(VehiclePhase::CommutingToWork, ctx);
            }
            VehiclePhase::CommutingToWork => {
                self.drive_commute_leg()?;

                let slot = ctx.try_acquire_slot(self.id);
                let granted = slot.is_some();
                if granted {
                    ctx.counters.public_granted += 1;
                } else {
                    ctx.counters.public_missed += 1;
                }
                observer.on_public_slot(ctx.now(), self.id, granted, ctx.station().held());

                if let Some(handle) = slot {
                    self.enter(VehiclePhase::PublicCharging, ctx);
                    self.slot = Some(handle);
                    self.charged_at_work = true;
                    self.top_up(ctx)?;
                }

                ctx.wait(me, self.params.time_at_work_min, "work")?;
                self.enter(VehiclePhase::AtWork, ctx);
            }
            VehiclePhase::AtWork => {
                // Held for the whole shift; the controller is not interrupted.
                if let Some(handle) = self.slot.take() {
                    ctx.release_slot(handle)?;
                }
                ctx.wait(me, self.params.travel_time_to_work_min, "commute home")?;
                self.enter(VehiclePhase::CommutingHome, ctx);
            }
            VehiclePhase::CommutingHome => {
                self.drive_commute_leg()?;
                self.enter(VehiclePhase::HomeCharging, ctx);
                self.top_up(ctx)?;
                self.enter(VehiclePhase::Done, ctx);
                ctx.counters.vehicles_done += 1;
                observer.on_vehicle_done(ctx.now(), self.id);
            }
            VehiclePhase::PublicCharging | VehiclePhase::HomeCharging | VehiclePhase::Done => {
                return Err(SimError::SpuriousWake { process: me });
            }
        }
        Ok(())
    }

    fn enter(&mut self, phase: VehiclePhase, ctx: &SimContext) {
        trace!(vehicle = %self.id, now = %ctx.now(), from = ?self.phase, to = ?phase, "transition");
        self.phase = phase;
    }

    /// One commute leg's worth of energy leaves the battery.
    fn drive_commute_leg(&mut self) -> SimResult<()> {
        self.charge_kwh -= self.params.commute_energy_kwh();
        if self.charge_kwh < 0.0 {
            return Err(SimError::BatteryOverdraw { vehicle: self.id, charge_kwh: self.charge_kwh });
        }
        Ok(())
    }

    /// Ask the controller for the missing energy and credit a full battery.
    ///
    /// A full battery posts nothing: the controller never sees an empty
    /// request.
    fn top_up(&mut self, ctx: &mut SimContext) -> SimResult<()> {
        let deficit = self.params.battery_capacity_kwh - self.charge_kwh;
        if deficit > 0.0 {
            ctx.request_charge(self.id, deficit)?;
        } else {
            debug!(vehicle = %self.id, now = %ctx.now(), "battery already full, no charge requested");
        }
        self.charge_kwh = self.params.battery_capacity_kwh;
        Ok(())
    }
}
