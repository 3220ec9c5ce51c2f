//! Plain data row types written by output backends.

/// Occupancy of one lane at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneSnapshotRow {
    pub tick:          u64,
    pub lane_id:       u32,
    /// `true` for an express (motorcycle-priority) lane.
    pub express:       bool,
    pub vehicle_count: u32,
    /// Id of the vehicle at the front; `u32::MAX` when the lane is empty.
    pub front_vehicle: u32,
    /// Id of the vehicle at the back; `u32::MAX` when the lane is empty.
    pub back_vehicle:  u32,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:                u64,
    /// Intersection crossings during the tick.
    pub moved_vehicles:      u64,
    /// Vehicles on any lane after the tick.
    pub vehicles_in_network: u64,
}
