//! A record of one vehicle crossing an intersection.

use tr_core::{LaneId, Turn, VehicleClass, VehicleId};

use crate::Approach;

/// One vehicle that crossed during a single `simulate` call.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Movement {
    pub vehicle:   VehicleId,
    pub class:     VehicleClass,
    pub from:      Approach,
    pub to:        Approach,
    /// The turn actually driven (`Invalid` already resolved to `Straight`).
    pub turn:      Turn,
    pub from_lane: LaneId,
    pub to_lane:   LaneId,
}
