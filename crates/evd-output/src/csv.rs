//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `demand.csv`
//! - `charge_events.csv`
//! - `fleet.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ChargeEventRow, DemandRow, OutputResult, VehicleRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    demand:   Writer<File>,
    events:   Writer<File>,
    fleet:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut demand = Writer::from_path(dir.join("demand.csv"))?;
        demand.write_record(["time_min", "demand_kw"])?;

        let mut events = Writer::from_path(dir.join("charge_events.csv"))?;
        events.write_record(["time_min", "vehicle_id", "edge", "power_kw", "total_kw"])?;

        let mut fleet = Writer::from_path(dir.join("fleet.csv"))?;
        fleet.write_record([
            "vehicle_id",
            "distance_to_work_km",
            "avg_travel_speed_kmh",
            "time_at_work_min",
            "battery_capacity_kwh",
            "work_start_min",
            "range_km",
            "travel_time_to_work_min",
            "controller_power_kw",
        ])?;

        Ok(Self {
            demand,
            events,
            fleet,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_demand(&mut self, rows: &[DemandRow]) -> OutputResult<()> {
        for row in rows {
            self.demand.write_record(&[row.time_min.to_string(), row.demand_kw.to_string()])?;
        }
        Ok(())
    }

    fn write_charge_event(&mut self, row: &ChargeEventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.time_min.to_string(),
            row.vehicle_id.to_string(),
            row.edge.as_str().to_owned(),
            row.power_kw.to_string(),
            row.total_kw.to_string(),
        ])?;
        Ok(())
    }

    fn write_vehicles(&mut self, rows: &[VehicleRow]) -> OutputResult<()> {
        for row in rows {
            self.fleet.write_record(&[
                row.vehicle_id.to_string(),
                row.distance_to_work_km.to_string(),
                row.avg_travel_speed_kmh.to_string(),
                row.time_at_work_min.to_string(),
                row.battery_capacity_kwh.to_string(),
                row.work_start_min.to_string(),
                row.range_km.to_string(),
                row.travel_time_to_work_min.to_string(),
                row.controller_power_kw.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.demand.flush()?;
        self.events.flush()?;
        self.fleet.flush()?;
        Ok(())
    }
}
