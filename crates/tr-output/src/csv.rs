//! CSV backend: `lane_snapshots.csv` and `tick_summaries.csv`.
//!
//! `express` is written as `0`/`1`; an empty lane's front and back vehicle
//! columns hold `u32::MAX`.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{LaneSnapshotRow, OutputResult, TickSummaryRow};

pub const SNAPSHOT_HEADER: [&str; 6] =
    ["tick", "lane_id", "express", "vehicle_count", "front_vehicle", "back_vehicle"];

pub const SUMMARY_HEADER: [&str; 3] = ["tick", "moved_vehicles", "vehicles_in_network"];

fn open(path: &Path, header: &[&str]) -> OutputResult<Writer<File>> {
    let mut out = Writer::from_path(path)?;
    out.write_record(header)?;
    Ok(out)
}

fn snapshot_fields(r: &LaneSnapshotRow) -> [String; 6] {
    [
        r.tick.to_string(),
        r.lane_id.to_string(),
        u8::from(r.express).to_string(),
        r.vehicle_count.to_string(),
        r.front_vehicle.to_string(),
        r.back_vehicle.to_string(),
    ]
}

/// Lane snapshots and tick summaries as two CSV files with header rows.
pub struct CsvWriter {
    lanes:  Writer<File>,
    ticks:  Writer<File>,
    closed: bool,
}

impl CsvWriter {
    /// Create both files in `dir`, which must already exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self {
            lanes:  open(&dir.join("lane_snapshots.csv"), &SNAPSHOT_HEADER)?,
            ticks:  open(&dir.join("tick_summaries.csv"), &SUMMARY_HEADER)?,
            closed: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[LaneSnapshotRow]) -> OutputResult<()> {
        rows.iter()
            .try_for_each(|r| self.lanes.write_record(snapshot_fields(r)))?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.ticks.write_record([
            row.tick.to_string(),
            row.moved_vehicles.to_string(),
            row.vehicles_in_network.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if !self.closed {
            self.closed = true;
            self.lanes.flush()?;
            self.ticks.flush()?;
        }
        Ok(())
    }
}
