//! Per-parameter summaries over an accepted fleet.

use crate::{ControllerParams, Fleet, VehicleParams};

/// Min, max and mean of one parameter across the fleet, plus the raw values
/// (in `VehicleId` order) for histogramming.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterStats {
    pub name:   &'static str,
    pub min:    f64,
    pub max:    f64,
    pub mean:   f64,
    pub values: Vec<f64>,
}

impl ParameterStats {
    fn new(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            mean: 0.0,
            values: Vec::with_capacity(capacity),
        }
    }

    fn observe(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.values.push(value);
    }

    fn finish(&mut self) {
        if !self.values.is_empty() {
            self.mean = self.values.iter().sum::<f64>() / self.values.len() as f64;
        }
    }
}

/// Summarise every vehicle parameter and the controller rating.
///
/// Entries follow [`VehicleParams::FIELD_NAMES`] order with the controller
/// power last.  An empty fleet yields entries with no values, `mean == 0`,
/// and infinite min/max.
pub fn describe(fleet: &Fleet) -> Vec<ParameterStats> {
    let n = fleet.len();
    let mut stats: Vec<ParameterStats> = VehicleParams::FIELD_NAMES
        .iter()
        .chain(std::iter::once(&ControllerParams::FIELD_NAME))
        .map(|&name| ParameterStats::new(name, n))
        .collect();

    for (_, vehicle, controller) in fleet.iter() {
        for (entry, (_, value)) in stats.iter_mut().zip(vehicle.named_values()) {
            entry.observe(value);
        }
        if let Some(last) = stats.last_mut() {
            last.observe(controller.continuous_input_power_kw);
        }
    }

    stats.iter_mut().for_each(ParameterStats::finish);
    stats
}
