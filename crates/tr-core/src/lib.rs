//! `tr-core`: foundational types for the `rust_traffic` simulator.
//!
//! This crate is a dependency of every other `tr-*` crate.  It has no `tr-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`ids`]       | `VehicleId`, `LaneId`, `IntersectionId`                |
//! | [`vehicle`]   | `Vehicle`, `VehicleClass`, `Turn`                      |
//! | [`time`]      | `Tick`, `SimConfig`                                    |
//! | [`rng`]       | `SimRng` (traffic generation only)                     |
//! | [`error`]     | `TrafficError`, `TrafficResult`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TrafficError, TrafficResult};
pub use ids::{IntersectionId, LaneId, VehicleId};
pub use rng::SimRng;
pub use time::{SimConfig, Tick};
pub use vehicle::{Turn, Vehicle, VehicleClass};
