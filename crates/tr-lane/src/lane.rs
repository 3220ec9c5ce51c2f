//! The `Lane` capability shared by both queue variants.

use std::fmt;
use std::str::FromStr;

use tr_core::{TrafficError, Vehicle};

use crate::{ExpressLane, SimpleLane};

/// An ordered queue of vehicles on one directional road segment.
///
/// Every operation is total: peeking or dequeuing an empty lane yields
/// `None`, never a panic.  `len()` always equals the number of vehicles
/// reachable through `iter()`.
pub trait Lane: Send {
    /// Which queue discipline this lane follows.
    fn kind(&self) -> LaneKind;

    /// Add `vehicle` according to the lane's insertion rule.
    fn enqueue(&mut self, vehicle: Vehicle);

    /// Remove and return the vehicle at the front.
    fn dequeue(&mut self) -> Option<Vehicle>;

    fn front(&self) -> Option<&Vehicle>;

    fn back(&self) -> Option<&Vehicle>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Vehicles front to back.
    fn iter(&self) -> Box<dyn Iterator<Item = &Vehicle> + '_>;
}

// ── LaneKind ──────────────────────────────────────────────────────────────────

/// Queue discipline of a lane.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum LaneKind {
    /// Strict FIFO.
    #[default]
    Simple,
    /// Motorcycles filter ahead of other traffic.
    Express,
}

impl LaneKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LaneKind::Simple  => "simple",
            LaneKind::Express => "express",
        }
    }

    /// Construct an empty lane of this kind.
    pub fn build(self) -> Box<dyn Lane> {
        match self {
            LaneKind::Simple  => Box::new(SimpleLane::new()),
            LaneKind::Express => Box::new(ExpressLane::new()),
        }
    }
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LaneKind {
    type Err = TrafficError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple"  => Ok(LaneKind::Simple),
            "express" => Ok(LaneKind::Express),
            other => Err(TrafficError::Parse(format!(
                "invalid lane kind {other:?}: expected \"simple\" or \"express\""
            ))),
        }
    }
}
