//! The home battery controller process.
//!
//! ```text
//!            charge request            duration elapsed
//!   Idle ─────────────────────▶ Charging ─────────────────▶ Idle
//! ```
//!
//! A vehicle asks for energy by posting a [`ChargeRequest`] to its
//! controller's single-slot [`Mailbox`] through the [`SimContext`].  If the
//! controller is idle it is made ready at the current instant.  If it is busy
//! the request is latched and picked up when the running charge ends.  Only
//! one request may be outstanding; posting a second one before the first has
//! been picked up is a protocol violation.

use evd_core::{SimTime, VehicleId};
use evd_fleet::ControllerParams;
use evd_schedule::ProcessId;
use tracing::trace;

use crate::{SimContext, SimError, SimObserver, SimResult};

/// "Put `deficit_kwh` back into the battery."
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChargeRequest {
    pub deficit_kwh: f64,
}

/// One controller's inbox.
#[derive(Debug)]
pub(crate) struct Mailbox {
    pub(crate) pending:   Option<ChargeRequest>,
    /// `true` while the controller is idle and waiting for a request.
    pub(crate) listening: bool,
}

impl Default for Mailbox {
    fn default() -> Self {
        Self { pending: None, listening: true }
    }
}

/// A request that arrives during `Charging` is latched and started when the
/// running charge stops, never dropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControllerState {
    Idle,
    Charging { deficit_kwh: f64, until: SimTime },
}

pub struct BatteryController {
    id:     VehicleId,
    params: ControllerParams,
    state:  ControllerState,
    /// Charges that ran to completion.
    pub completed: u32,
}

impl BatteryController {
    pub fn new(id: VehicleId, params: ControllerParams) -> Self {
        Self { id, params, state: ControllerState::Idle, completed: 0 }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn power_kw(&self) -> f64 {
        self.params.continuous_input_power_kw
    }

    pub fn is_charging(&self) -> bool {
        matches!(self.state, ControllerState::Charging { .. })
    }

    /// Resume the controller at the current instant.
    pub(crate) fn step<O: SimObserver>(
        &mut self,
        ctx: &mut SimContext,
        observer: &mut O,
    ) -> SimResult<()> {
        match self.state {
            ControllerState::Idle => {
                let request = ctx
                    .take_charge_request(self.id)
                    .ok_or(SimError::SpuriousWake { process: ProcessId::Controller(self.id) })?;
                self.start(request, ctx, observer)
            }
            ControllerState::Charging { until, .. } => {
                if ctx.now() < until {
                    return Err(SimError::SpuriousWake { process: ProcessId::Controller(self.id) });
                }
                self.finish(ctx, observer)?;
                match ctx.take_charge_request(self.id) {
                    Some(request) => self.start(request, ctx, observer),
                    None => {
                        ctx.listen(self.id);
                        Ok(())
                    }
                }
            }
        }
    }

    fn start<O: SimObserver>(
        &mut self,
        request:  ChargeRequest,
        ctx:      &mut SimContext,
        observer: &mut O,
    ) -> SimResult<()> {
        let now = ctx.now();
        let power = self.power_kw();
        let duration = self.params.charge_duration_min(request.deficit_kwh);
        let until = ctx.wait(ProcessId::Controller(self.id), duration, "charge")?;

        ctx.ledger.record_start(now, power)?;
        ctx.counters.charge_starts += 1;
        observer.on_charge_start(now, self.id, power, ctx.ledger.current_kw());
        self.state = ControllerState::Charging { deficit_kwh: request.deficit_kwh, until };
        trace!(controller = %self.id, %now, deficit_kwh = request.deficit_kwh, duration, "charging");
        Ok(())
    }

    fn finish<O: SimObserver>(&mut self, ctx: &mut SimContext, observer: &mut O) -> SimResult<()> {
        let now = ctx.now();
        let power = self.power_kw();
        ctx.ledger.record_stop(now, power)?;
        ctx.counters.charge_stops += 1;
        observer.on_charge_stop(now, self.id, power, ctx.ledger.current_kw());
        self.state = ControllerState::Idle;
        self.completed += 1;
        trace!(controller = %self.id, %now, "idle");
        Ok(())
    }
}
