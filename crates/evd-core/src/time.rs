//! Simulation time model.
//!
//! # Design
//!
//! Time is a continuous number of minutes since midnight of the simulated
//! day, wrapped in `SimTime`.  Commute and charging durations come straight
//! out of continuous distributions (a 25.75 minute drive is normal), so the
//! axis is `f64` rather than an integer tick count.
//!
//! `SimTime` is totally ordered via `f64::total_cmp`.  Constructors reject
//! non-finite values, so the ordering always agrees with ordinary numeric
//! comparison for every value the simulator can hold.

use std::cmp::Ordering;
use std::fmt;

use crate::{CoreError, CoreResult};

/// Minutes in one simulated day.
pub const MINUTES_PER_DAY: f64 = 1_440.0;

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute simulation instant, in minutes since midnight.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub(crate) f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Wrap a minute count.
    ///
    /// # Panics
    /// Panics if `minutes` is NaN or infinite.
    #[inline]
    pub fn from_minutes(minutes: f64) -> SimTime {
        assert!(minutes.is_finite(), "SimTime must be finite, got {minutes}");
        SimTime(minutes)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> f64 {
        self.0
    }

    /// The instant `duration_min` minutes after `self`.
    ///
    /// Non-positive durations yield `self`: simulation time never moves
    /// backwards, whatever the sampled duration.
    #[inline]
    pub fn after(self, duration_min: f64) -> SimTime {
        if duration_min > 0.0 {
            SimTime::from_minutes(self.0 + duration_min)
        } else {
            self
        }
    }

    /// Minutes elapsed from `earlier` to `self` (negative if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for SimTime {
    /// `H:MM:SS` since midnight, truncated to whole seconds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_secs = (self.0 * 60.0).max(0.0) as u64;
        let hours = total_secs / 3_600;
        let minutes = (total_secs % 3_600) / 60;
        let seconds = total_secs % 60;
        write!(f, "{hours}:{minutes:02}:{seconds:02}")
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The single virtual time axis shared by every simulated process.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    now: SimTime,
}

impl SimClock {
    /// A clock at midnight.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Move the clock forward to `to`.
    ///
    /// Staying at the same instant is allowed; moving backwards is an error.
    pub fn advance_to(&mut self, to: SimTime) -> CoreResult<()> {
        if to < self.now {
            return Err(CoreError::TimeWentBackwards { now: self.now, requested: to });
        }
        self.now = to;
        Ok(())
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.now)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// The defaults are the reference scenario: 30 000 vehicles, one public
/// station with 200 slots, a run that stops one minute before midnight.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Events at or after this instant are not processed.
    pub horizon: SimTime,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Number of slots in the shared public charging station.
    pub station_capacity: usize,

    /// Number of accepted vehicles to build.
    pub fleet_size: usize,
}

impl SimConfig {
    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        let minutes = self.horizon.minutes();
        if !minutes.is_finite() || minutes <= 0.0 || minutes > MINUTES_PER_DAY {
            return Err(CoreError::Config(format!(
                "horizon must lie in (0, {MINUTES_PER_DAY}] minutes, got {minutes}"
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            horizon:          SimTime::from_minutes(MINUTES_PER_DAY - 1.0),
            seed:             42,
            station_capacity: 200,
            fleet_size:       30_000,
        }
    }
}
