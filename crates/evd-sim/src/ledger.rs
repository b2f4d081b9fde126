//! `DemandLedger` — the aggregate charging-power time series.

use evd_core::SimTime;

use crate::{SimError, SimResult};

/// Total charging power from `time` until the next sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemandSample {
    pub time:      SimTime,
    pub demand_kw: f64,
}

/// Append-only record of total power draw.
///
/// One sample is appended per start and per stop.  Timestamps never
/// decrease; several samples may share an instant, in which case the last
/// one is the demand from that instant on.
#[derive(Debug, Default)]
pub struct DemandLedger {
    samples:    Vec<DemandSample>,
    current_kw: f64,
    active:     usize,
    peak:       Option<DemandSample>,
}

impl DemandLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A charger started drawing `power_kw` at `now`.
    pub fn record_start(&mut self, now: SimTime, power_kw: f64) -> SimResult<()> {
        self.check_order(now)?;
        self.current_kw += power_kw;
        self.active += 1;
        self.append(now);
        Ok(())
    }

    /// A charger drawing `power_kw` stopped at `now`.
    pub fn record_stop(&mut self, now: SimTime, power_kw: f64) -> SimResult<()> {
        self.check_order(now)?;
        if self.active == 0 {
            return Err(SimError::LedgerUnderflow { at: now, power_kw });
        }
        self.current_kw -= power_kw;
        self.active -= 1;
        self.append(now);
        Ok(())
    }

    pub fn samples(&self) -> &[DemandSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Demand right now.
    pub fn current_kw(&self) -> f64 {
        self.current_kw
    }

    /// Chargers currently drawing power.
    pub fn active_chargers(&self) -> usize {
        self.active
    }

    /// First sample at which the highest demand was reached.
    pub fn peak(&self) -> Option<DemandSample> {
        self.peak
    }

    /// Demand in effect at `time`, reconstructed from the samples.
    pub fn demand_at(&self, time: SimTime) -> f64 {
        let idx = self.samples.partition_point(|s| s.time <= time);
        if idx == 0 { 0.0 } else { self.samples[idx - 1].demand_kw }
    }

    fn check_order(&self, now: SimTime) -> SimResult<()> {
        match self.samples.last() {
            Some(last) if now < last.time => {
                Err(SimError::LedgerOutOfOrder { last: last.time, requested: now })
            }
            _ => Ok(()),
        }
    }

    fn append(&mut self, now: SimTime) {
        let sample = DemandSample { time: now, demand_kw: self.current_kw };
        self.samples.push(sample);
        if self.peak.is_none_or(|p| sample.demand_kw > p.demand_kw) {
            self.peak = Some(sample);
        }
    }
}
