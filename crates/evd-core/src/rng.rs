//! Deterministic per-vehicle RNG and the `Sampler` service.
//!
//! # Determinism strategy
//!
//! Each vehicle slot gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (vehicle_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive IDs uniformly across the seed space.  Because a
//! slot keeps drawing from its own stream while it rejects candidates, the
//! number of rejections in one slot never shifts the parameters of another.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Gamma, Normal};

use crate::{CoreError, CoreResult, VehicleId};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── Sampler ───────────────────────────────────────────────────────────────────

/// Random-variate source used when vehicles and controllers are constructed.
///
/// The simulator only ever needs two families.  Tests substitute scripted
/// implementations to pin exact parameter values.
pub trait Sampler {
    /// One draw from Normal(`mean`, `std_dev`).
    fn normal(&mut self, mean: f64, std_dev: f64) -> CoreResult<f64>;

    /// One draw from Gamma(`shape`, `scale`); the mean is `shape * scale`.
    fn gamma(&mut self, shape: f64, scale: f64) -> CoreResult<f64>;
}

// ── VehicleRng ────────────────────────────────────────────────────────────────

/// Per-vehicle deterministic RNG.
pub struct VehicleRng(SmallRng);

impl VehicleRng {
    /// Seed deterministically from the run's global seed and a vehicle slot.
    pub fn new(global_seed: u64, vehicle: VehicleId) -> Self {
        let seed = global_seed ^ (vehicle.0 as u64).wrapping_mul(MIXING_CONSTANT);
        VehicleRng(SmallRng::seed_from_u64(seed))
    }
}

impl Sampler for VehicleRng {
    fn normal(&mut self, mean: f64, std_dev: f64) -> CoreResult<f64> {
        let dist = Normal::new(mean, std_dev).map_err(|e| CoreError::Distribution {
            distribution: "normal",
            reason:       e.to_string(),
        })?;
        Ok(dist.sample(&mut self.0))
    }

    fn gamma(&mut self, shape: f64, scale: f64) -> CoreResult<f64> {
        let dist = Gamma::new(shape, scale).map_err(|e| CoreError::Distribution {
            distribution: "gamma",
            reason:       e.to_string(),
        })?;
        Ok(dist.sample(&mut self.0))
    }
}
