//! The `OutputWriter` trait implemented by backend writers.

use crate::{ChargeEventRow, DemandRow, OutputResult, VehicleRow};

/// A sink for run output.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of demand samples.
    fn write_demand(&mut self, rows: &[DemandRow]) -> OutputResult<()>;

    /// Write one controller start or stop.
    fn write_charge_event(&mut self, row: &ChargeEventRow) -> OutputResult<()>;

    /// Write the fleet's parameters.
    fn write_vehicles(&mut self, rows: &[VehicleRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
