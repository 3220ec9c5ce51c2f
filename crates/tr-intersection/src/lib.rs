//! `tr-intersection`: the four-way intersection stepper.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                  |
//! |-------------------|-----------------------------------------------------------|
//! | [`approach`]      | `Approach` (N/E/S/W), `LaneDirection`, `Binding`          |
//! | [`intersection`]  | `Intersection`, `Slots`: connect, readiness, `simulate`  |
//! | [`give_way`]      | pure arbitration over front vehicles                      |
//! | [`movement`]      | `Movement`: one vehicle crossing on one tick             |
//!
//! # Tick semantics
//!
//! 1. Skip entirely unless all four slots hold a lane and at least one of
//!    them is outgoing.
//! 2. For each incoming slot (N, E, S, W) with traffic, peek the front
//!    vehicle's next turn; no turn queued means straight.
//! 3. Resolve the target slot (`Left → p+1`, `Right → p-1`,
//!    `Straight → p+2`, mod 4).  The winner joins whichever lane is bound
//!    there, including an incoming one.
//! 4. Arbitrate with [`give_way::arbitrate`].
//! 5. Dequeue every winner, consume its turn, enqueue it on the target lane.
//!
//! The tick conserves vehicles: the total across all lanes is unchanged.

pub mod approach;
pub mod give_way;
pub mod intersection;
pub mod movement;


pub use approach::{Approach, Binding, LaneDirection};
pub use intersection::{Intersection, Slots};
pub use movement::Movement;
