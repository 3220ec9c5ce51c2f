//! Vehicles, vehicle classes, and turn intents.
//!
//! A [`Vehicle`] is a plain data holder: an immutable class, an occupant
//! count, and a FIFO of pending [`Turn`]s consumed front to back, one per
//! intersection crossed.  An exhausted turn queue reads as
//! [`Turn::Invalid`]; interpreting that as "keep going straight" is the job
//! of the intersection router, not of the vehicle.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::{TrafficError, VehicleId};

// ── VehicleClass ──────────────────────────────────────────────────────────────

/// The kind of vehicle.  Fixed for the vehicle's lifetime.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VehicleClass {
    Car,
    Bus,
    /// Filters ahead of other traffic in an express lane.
    Motorcycle,
}

impl VehicleClass {
    #[inline]
    pub fn is_motorcycle(self) -> bool {
        matches!(self, VehicleClass::Motorcycle)
    }

    /// Lower-case label, also accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleClass::Car        => "car",
            VehicleClass::Bus        => "bus",
            VehicleClass::Motorcycle => "motorcycle",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleClass {
    type Err = TrafficError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car"        => Ok(VehicleClass::Car),
            "bus"        => Ok(VehicleClass::Bus),
            "motorcycle" => Ok(VehicleClass::Motorcycle),
            other => Err(TrafficError::Parse(format!(
                "invalid vehicle class {other:?}: expected \"car\", \"bus\" or \"motorcycle\""
            ))),
        }
    }
}

// ── Turn ──────────────────────────────────────────────────────────────────────

/// A turn intent at the next intersection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Turn {
    Left,
    Straight,
    Right,
    /// No intent queued.  Returned by peek/consume on an empty turn queue.
    #[default]
    Invalid,
}

impl Turn {
    /// Parse a one-letter code: `L`, `S` or `R` (either case).
    pub fn from_code(code: char) -> Option<Turn> {
        match code.to_ascii_uppercase() {
            'L' => Some(Turn::Left),
            'S' => Some(Turn::Straight),
            'R' => Some(Turn::Right),
            _   => None,
        }
    }

    /// One-letter code; `'?'` for `Invalid`.
    pub fn code(self) -> char {
        match self {
            Turn::Left     => 'L',
            Turn::Straight => 'S',
            Turn::Right    => 'R',
            Turn::Invalid  => '?',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Turn::Left     => "left",
            Turn::Straight => "straight",
            Turn::Right    => "right",
            Turn::Invalid  => "invalid",
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Turn {
    type Err = TrafficError;

    /// Accepts `left`/`straight`/`right` or their one-letter codes.
    /// `Invalid` is never parsed: it is a sentinel, not an intent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Turn::from_code(c).ok_or(TrafficError::InvalidTurnCode(c));
        }
        match s.to_ascii_lowercase().as_str() {
            "left"     => Ok(Turn::Left),
            "straight" => Ok(Turn::Straight),
            "right"    => Ok(Turn::Right),
            other => Err(TrafficError::Parse(format!(
                "invalid turn {other:?}: expected \"left\", \"straight\" or \"right\""
            ))),
        }
    }
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

/// A single vehicle travelling through the network.
///
/// Vehicles are deliberately not `Clone`: they move between lanes by value,
/// so a vehicle is always in exactly one place.
#[derive(Debug)]
pub struct Vehicle {
    id:        VehicleId,
    class:     VehicleClass,
    occupants: u32,
    turns:     VecDeque<Turn>,
}

impl Vehicle {
    /// A vehicle with an empty turn queue.
    pub fn new(id: VehicleId, class: VehicleClass, occupants: u32) -> Self {
        Self {
            id,
            class,
            occupants,
            turns: VecDeque::new(),
        }
    }

    /// Append `turns` to the turn queue (builder style).  `Turn::Invalid`
    /// entries are skipped.
    pub fn with_turns<I: IntoIterator<Item = Turn>>(mut self, turns: I) -> Self {
        for turn in turns {
            self.push_turn(turn);
        }
        self
    }

    #[inline]
    pub fn id(&self) -> VehicleId {
        self.id
    }

    #[inline]
    pub fn class(&self) -> VehicleClass {
        self.class
    }

    #[inline]
    pub fn occupants(&self) -> u32 {
        self.occupants
    }

    /// The next turn without consuming it; `Turn::Invalid` if none remain.
    #[inline]
    pub fn next_turn(&self) -> Turn {
        self.turns.front().copied().unwrap_or(Turn::Invalid)
    }

    /// Consume and return the next turn; `Turn::Invalid` if none remain.
    pub fn make_turn(&mut self) -> Turn {
        self.turns.pop_front().unwrap_or(Turn::Invalid)
    }

    pub fn turn_left(&mut self) {
        self.turns.push_back(Turn::Left);
    }

    pub fn turn_right(&mut self) {
        self.turns.push_back(Turn::Right);
    }

    pub fn turn_straight(&mut self) {
        self.turns.push_back(Turn::Straight);
    }

    /// Queue an arbitrary turn.  `Turn::Invalid` is ignored.
    pub fn push_turn(&mut self, turn: Turn) {
        if turn != Turn::Invalid {
            self.turns.push_back(turn);
        }
    }

    /// Number of queued turns not yet made.
    #[inline]
    pub fn remaining_turns(&self) -> usize {
        self.turns.len()
    }
}
