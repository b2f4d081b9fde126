//! Sampled vehicle and controller parameters and the values derived from them.

/// Mean travel speed for a commute of `distance_km`.
///
/// Linear in distance (35 km/h at 15 km), clamped to [6, 35] km/h.
pub fn mean_travel_speed_kmh(distance_km: f64) -> f64 {
    (35.0 / 15.0 * distance_km).clamp(6.0, 35.0)
}

/// Driving range for a battery of `capacity_kwh` (130 km per 25 kWh).
pub fn range_for_capacity_km(capacity_kwh: f64) -> f64 {
    130.0 / 25.0 * capacity_kwh
}

// ── VehicleParams ─────────────────────────────────────────────────────────────

/// One vehicle's commute and battery parameters.
///
/// Sampled once at construction and immutable afterwards; the mutable charge
/// state lives with the running simulation, not here.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleParams {
    pub distance_to_work_km:     f64,
    pub avg_travel_speed_kmh:    f64,
    pub time_at_work_min:        f64,
    pub battery_capacity_kwh:    f64,
    /// Minutes after midnight at which the vehicle leaves home.
    pub work_start_min:          f64,
    /// Derived: [`range_for_capacity_km`] of the capacity.
    pub range_km:                f64,
    /// Derived: `distance / speed * 60`.
    pub travel_time_to_work_min: f64,
}

impl VehicleParams {
    /// Names of the values reported by [`named_values`](Self::named_values),
    /// in the same order.
    pub const FIELD_NAMES: [&'static str; 7] = [
        "Distance to workplace [km]",
        "Avg. travel speed [km/h]",
        "Time at work [min]",
        "Battery capacity [kWh]",
        "Work start time [min since midnight]",
        "Range [km]",
        "Travel time to work [min]",
    ];

    /// Build a parameter set from the five independent values, deriving range
    /// and travel time.
    pub fn derive(
        distance_to_work_km:  f64,
        avg_travel_speed_kmh: f64,
        time_at_work_min:     f64,
        battery_capacity_kwh: f64,
        work_start_min:       f64,
    ) -> Self {
        Self {
            distance_to_work_km,
            avg_travel_speed_kmh,
            time_at_work_min,
            battery_capacity_kwh,
            work_start_min,
            range_km: range_for_capacity_km(battery_capacity_kwh),
            travel_time_to_work_min: distance_to_work_km / avg_travel_speed_kmh * 60.0,
        }
    }

    /// Energy drawn from the battery to drive `km` kilometres.
    #[inline]
    pub fn energy_consumed_kwh(&self, km: f64) -> f64 {
        self.battery_capacity_kwh / self.range_km * km
    }

    /// Energy for one leg of the commute.
    #[inline]
    pub fn commute_energy_kwh(&self) -> f64 {
        self.energy_consumed_kwh(self.distance_to_work_km)
    }

    pub fn named_values(&self) -> [(&'static str, f64); 7] {
        let [d, s, w, b, st, r, t] = Self::FIELD_NAMES;
        [
            (d,  self.distance_to_work_km),
            (s,  self.avg_travel_speed_kmh),
            (w,  self.time_at_work_min),
            (b,  self.battery_capacity_kwh),
            (st, self.work_start_min),
            (r,  self.range_km),
            (t,  self.travel_time_to_work_min),
        ]
    }
}

// ── ControllerParams ──────────────────────────────────────────────────────────

/// A home battery controller's fixed rating.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerParams {
    pub continuous_input_power_kw: f64,
}

impl ControllerParams {
    pub const FIELD_NAME: &'static str = "Continuous input power [kW]";

    /// Minutes needed to put `deficit_kwh` back into the battery.
    #[inline]
    pub fn charge_duration_min(&self, deficit_kwh: f64) -> f64 {
        60.0 * deficit_kwh / self.continuous_input_power_kw
    }
}
