//! The `Sim` struct and its tick loop.

use tracing::{debug, info};
use tr_core::{LaneId, SimConfig, Tick, Vehicle};

use crate::{SimError, SimObserver, SimResult, TrafficNetwork};

/// The main simulation runner.
///
/// Each tick steps every intersection once in ascending id order (see
/// [`TrafficNetwork::step`]).  Vehicles are never created or destroyed by a
/// tick: the number on the network changes only through [`Sim::inject`].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (total ticks, seed, snapshot interval).
    pub config: SimConfig,

    /// Lanes and intersections.  Drivers may read lanes between ticks.
    pub network: TrafficNetwork,

    pub(crate) now: Tick,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// The next tick to be simulated.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.now
    }

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Ticks cannot fail: every lane an intersection references was checked
    /// when the network was built.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        info!(
            from          = %self.now,
            to            = %self.config.end_tick(),
            vehicles      = self.network.vehicle_count(),
            intersections = self.network.intersection_count(),
            "simulation started",
        );
        while self.now < self.config.end_tick() {
            self.tick(observer);
        }
        observer.on_sim_end(self.now);
        info!(
            final_tick = %self.now,
            vehicles   = self.network.vehicle_count(),
            "simulation finished",
        );
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick(observer);
        }
    }

    /// Enqueue `vehicle` on `lane` between ticks.
    ///
    /// # Errors
    ///
    /// `UnknownLane` if the network has no such lane.
    pub fn inject(&mut self, lane: LaneId, vehicle: Vehicle) -> SimResult<()> {
        let target = self
            .network
            .lanes
            .get_mut(lane)
            .ok_or(SimError::UnknownLane(lane))?;
        target.enqueue(vehicle);
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.now;
        observer.on_tick_start(now);

        let moved = self.network.step();
        for (ix, movement) in &moved {
            observer.on_movement(now, *ix, movement);
        }

        let in_network = self.network.vehicle_count();
        debug!(tick = %now, moved = moved.len(), in_network, "tick complete");
        observer.on_tick_end(now, moved.len(), in_network);
        if self.config.snapshot_due(now) {
            observer.on_snapshot(now, &self.network.lanes);
        }

        self.now = now.next();
    }
}
