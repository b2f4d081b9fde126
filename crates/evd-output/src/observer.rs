//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use evd_core::{SimTime, VehicleId};
use evd_fleet::Fleet;
use evd_sim::{DemandLedger, SimObserver};

use crate::row::{ChargeEdge, ChargeEventRow, DemandRow, VehicleRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams charge events to any [`OutputWriter`] and
/// dumps the demand ledger when the run ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Write one row per vehicle in `fleet`.  Call before the run.
    pub fn write_fleet(&mut self, fleet: &Fleet) {
        let rows: Vec<VehicleRow> =
            fleet.iter().map(|(id, v, c)| VehicleRow::new(id, v, c)).collect();
        if !rows.is_empty() {
            let result = self.writer.write_vehicles(&rows);
            self.store_err(result);
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn charge_event(&mut self, now: SimTime, vehicle: VehicleId, edge: ChargeEdge, power_kw: f64, total_kw: f64) {
        let row = ChargeEventRow {
            time_min: now.minutes(),
            vehicle_id: vehicle.0,
            edge,
            power_kw,
            total_kw,
        };
        let result = self.writer.write_charge_event(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_charge_start(&mut self, now: SimTime, vehicle: VehicleId, power_kw: f64, total_kw: f64) {
        self.charge_event(now, vehicle, ChargeEdge::Start, power_kw, total_kw);
    }

    fn on_charge_stop(&mut self, now: SimTime, vehicle: VehicleId, power_kw: f64, total_kw: f64) {
        self.charge_event(now, vehicle, ChargeEdge::Stop, power_kw, total_kw);
    }

    fn on_sim_end(&mut self, _final_time: SimTime, ledger: &DemandLedger) {
        let rows: Vec<DemandRow> = ledger
            .samples()
            .iter()
            .map(|s| DemandRow { time_min: s.time.minutes(), demand_kw: s.demand_kw })
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_demand(&rows);
            self.store_err(result);
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}
