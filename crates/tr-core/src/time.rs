//! Discrete simulation time and run configuration.
//!
//! There is no wall-clock mapping: a `Tick` is one call of every
//! intersection's stepper and nothing more.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of simulation steps since the start of a run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        self + 1
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;

    fn add(self, steps: u64) -> Tick {
        Tick(self.0 + steps)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// How long to run and how often to report.
///
/// With the `serde` feature this deserializes from JSON, missing fields
/// taking their defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Seed for traffic generation.  The stepper itself never draws random
    /// numbers, so the same seed and scenario always give identical runs.
    pub seed: u64,

    /// Report a lane snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// `true` if a snapshot is due at `tick`.
    #[inline]
    pub fn snapshot_due(&self, tick: Tick) -> bool {
        self.output_interval_ticks > 0 && tick.0 % self.output_interval_ticks == 0
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:           100,
            seed:                  42,
            output_interval_ticks: 1,
        }
    }
}
