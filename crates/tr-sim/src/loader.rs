//! CSV vehicle scenario loader.
//!
//! # CSV format
//!
//! One row per vehicle, placed on its lane in file order.
//!
//! ```csv
//! vehicle_id,lane_id,class,occupants,turns
//! 0,0,car,1,LRS
//! 1,0,motorcycle,1,L
//! 2,5,bus,30,
//! ```
//!
//! **`turns`** is a string of one-letter codes (`L`, `S`, `R`, either case),
//! consumed left to right.  An empty field means the vehicle has no turns
//! queued and will go straight at every intersection.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tr_core::{LaneId, TrafficError, Turn, Vehicle, VehicleClass, VehicleId};

use crate::{SimError, SimResult};

/// A vehicle and the lane it starts on.
#[derive(Debug)]
pub struct VehiclePlacement {
    pub lane:    LaneId,
    pub vehicle: Vehicle,
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct VehicleRecord {
    vehicle_id: u32,
    lane_id:    u32,
    class:      String,
    occupants:  u32,
    #[serde(default)]
    turns:      String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load vehicle placements from a CSV file.
pub fn load_vehicles_csv(path: &Path) -> SimResult<Vec<VehiclePlacement>> {
    let file = std::fs::File::open(path)?;
    load_vehicles_reader(file)
}

/// Like [`load_vehicles_csv`] but accepts any `Read` source.
pub fn load_vehicles_reader<R: Read>(reader: R) -> SimResult<Vec<VehiclePlacement>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut placements = Vec::new();
    for result in csv_reader.deserialize::<VehicleRecord>() {
        let row = result.map_err(|e| SimError::Parse(e.to_string()))?;
        let class: VehicleClass = row.class.parse()?;
        let vehicle = Vehicle::new(VehicleId(row.vehicle_id), class, row.occupants)
            .with_turns(parse_turns(&row.turns)?);
        placements.push(VehiclePlacement {
            lane: LaneId(row.lane_id),
            vehicle,
        });
    }
    Ok(placements)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_turns(s: &str) -> Result<Vec<Turn>, TrafficError> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Turn::from_code(c).ok_or(TrafficError::InvalidTurnCode(c)))
        .collect()
}
