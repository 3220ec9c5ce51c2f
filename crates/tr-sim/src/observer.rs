//! Simulation observer trait for progress reporting and data collection.

use tr_core::{IntersectionId, Tick};
use tr_intersection::Movement;
use tr_lane::LaneStore;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct Throughput { crossed: usize }
///
/// impl SimObserver for Throughput {
///     fn on_tick_end(&mut self, _tick: Tick, moved: usize, _in_network: usize) {
///         self.crossed += moved;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any intersection runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per vehicle that crossed `intersection` this tick, in the
    /// order the crossings happened.
    fn on_movement(&mut self, _tick: Tick, _intersection: IntersectionId, _movement: &Movement) {}

    /// Called at the end of each tick.
    ///
    /// `moved` is the number of crossings this tick; `in_network` the number
    /// of vehicles on all lanes afterwards.
    fn on_tick_end(&mut self, _tick: Tick, _moved: usize, _in_network: usize) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks), after `on_tick_end`.
    fn on_snapshot(&mut self, _tick: Tick, _lanes: &LaneStore) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
