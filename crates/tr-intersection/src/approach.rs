//! Compass positions, lane directions, and slot bindings.

use std::fmt;

use tr_core::{LaneId, Turn};

/// One of the four connection points of an intersection.
///
/// Positions run clockwise: North = 0, East = 1, South = 2, West = 3.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Approach {
    North,
    East,
    South,
    West,
}

impl Approach {
    /// Scan order used everywhere a deterministic order is needed.
    pub const ALL: [Approach; 4] = [
        Approach::North,
        Approach::East,
        Approach::South,
        Approach::West,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Position `i` modulo 4.
    #[inline]
    pub fn from_index(i: usize) -> Approach {
        Self::ALL[i % 4]
    }

    /// The slot a vehicle arriving from `self` leaves through when it makes
    /// `turn`.
    ///
    /// `Left` is the next position clockwise, `Right` the previous one and
    /// `Straight` the opposite one.  `Invalid` (no turn queued) routes as
    /// `Straight`.
    pub fn target(self, turn: Turn) -> Approach {
        let step = match turn {
            Turn::Left                     => 1,
            Turn::Right                    => 3,
            Turn::Straight | Turn::Invalid => 2,
        };
        Approach::from_index(self.index() + step)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Approach::North => "north",
            Approach::East  => "east",
            Approach::South => "south",
            Approach::West  => "west",
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a bound lane feeds the intersection or drains it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum LaneDirection {
    Incoming,
    Outgoing,
}

impl LaneDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            LaneDirection::Incoming => "incoming",
            LaneDirection::Outgoing => "outgoing",
        }
    }
}

impl fmt::Display for LaneDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lane attached to one slot, together with its direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Binding {
    pub lane:      LaneId,
    pub direction: LaneDirection,
}

impl Binding {
    pub fn incoming(lane: LaneId) -> Self {
        Self { lane, direction: LaneDirection::Incoming }
    }

    pub fn outgoing(lane: LaneId) -> Self {
        Self { lane, direction: LaneDirection::Outgoing }
    }

    #[inline]
    pub fn is_incoming(&self) -> bool {
        self.direction == LaneDirection::Incoming
    }

    #[inline]
    pub fn is_outgoing(&self) -> bool {
        self.direction == LaneDirection::Outgoing
    }
}
