//! `tr-sim`: network assembly and tick loop for the `rust_traffic` simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`network`]   | `NetworkBuilder`, `TrafficNetwork`: lanes + intersections    |
//! | [`builder`]   | `SimBuilder`: validation and initial vehicle placement       |
//! | [`sim`]       | `Sim`: the tick loop                                         |
//! | [`observer`]  | `SimObserver`, `NoopObserver`                                 |
//! | [`loader`]    | `load_vehicles_csv`, `VehiclePlacement`                       |
//! | [`route`]     | `random_route`: turn sequences for generated traffic        |
//! | [`error`]     | `SimError`, `SimResult<T>`                                    |
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   on_tick_start
//!   for each intersection in ascending id:  simulate → on_movement per crossing
//!   on_tick_end(moved, in_network)
//!   on_snapshot            (every output_interval_ticks)
//! on_sim_end
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tr_core::SimConfig;
//! use tr_sim::{NoopObserver, SimBuilder, load_vehicles_csv};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), network)
//!     .vehicles(load_vehicles_csv(path)?)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod loader;
pub mod network;
pub mod observer;
pub mod route;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use loader::{VehiclePlacement, load_vehicles_csv, load_vehicles_reader};
pub use network::{NetworkBuilder, TrafficNetwork};
pub use observer::{NoopObserver, SimObserver};
pub use route::random_route;
pub use sim::Sim;
