//! `tr-lane`: lane queues for the `rust_traffic` simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`lane`]      | `Lane` trait, `LaneKind`                                    |
//! | [`simple`]    | `SimpleLane`: strict FIFO                                  |
//! | [`express`]   | `ExpressLane`: motorcycles filter to the back of the leading motorcycle run |
//! | [`store`]     | `LaneStore`: arena of `Box<dyn Lane>` indexed by `LaneId`  |
//!
//! Lanes own the vehicles queued on them.  A vehicle moves between lanes by
//! value (`dequeue` then `enqueue`), so it is never in two lanes at once.

pub mod express;
pub mod lane;
pub mod simple;
pub mod store;


pub use express::ExpressLane;
pub use lane::{Lane, LaneKind};
pub use simple::SimpleLane;
pub use store::LaneStore;
