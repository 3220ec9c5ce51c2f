//! `ExpressLane`: a two-band queue where motorcycles filter forward.
//!
//! The queue is always laid out as
//!
//! ```text
//! front [ m m m | c b c b ... ] back
//!         band P   band Q
//! ```
//!
//! A motorcycle joins the back of band P; anything else joins the back of
//! band Q.  Dequeue always takes the absolute front, whichever band it is in.
//! Once the leading motorcycles have been dequeued, later arrivals can still
//! overtake the queued cars, but never a motorcycle that is already ahead.

use std::collections::VecDeque;

use tracing::trace;
use tr_core::Vehicle;

use crate::{Lane, LaneKind};

#[derive(Debug, Default)]
pub struct ExpressLane {
    queue: VecDeque<Vehicle>,
}

impl ExpressLane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the run of motorcycles at the front of the queue.
    ///
    /// O(run length); lanes are short so the scan is kept.
    pub fn leading_motorcycles(&self) -> usize {
        self.queue
            .iter()
            .take_while(|v| v.class().is_motorcycle())
            .count()
    }
}

impl Lane for ExpressLane {
    fn kind(&self) -> LaneKind {
        LaneKind::Express
    }

    fn enqueue(&mut self, vehicle: Vehicle) {
        if !vehicle.class().is_motorcycle() {
            self.queue.push_back(vehicle);
            return;
        }
        let at = self.leading_motorcycles();
        if at < self.queue.len() {
            trace!(
                vehicle   = %vehicle.id(),
                position  = at,
                overtakes = self.queue.len() - at,
                "motorcycle filtering ahead",
            );
        }
        self.queue.insert(at, vehicle);
    }

    fn dequeue(&mut self) -> Option<Vehicle> {
        self.queue.pop_front()
    }

    #[inline]
    fn front(&self) -> Option<&Vehicle> {
        self.queue.front()
    }

    #[inline]
    fn back(&self) -> Option<&Vehicle> {
        self.queue.back()
    }

    #[inline]
    fn len(&self) -> usize {
        self.queue.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Vehicle> + '_> {
        Box::new(self.queue.iter())
    }
}
