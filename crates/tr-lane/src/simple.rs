//! `SimpleLane`: strict first-in, first-out.

use std::collections::VecDeque;

use tr_core::Vehicle;

use crate::{Lane, LaneKind};

/// A plain FIFO lane: dequeue order equals enqueue order.
#[derive(Debug, Default)]
pub struct SimpleLane {
    queue: VecDeque<Vehicle>,
}

impl SimpleLane {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Lane for SimpleLane {
    fn kind(&self) -> LaneKind {
        LaneKind::Simple
    }

    fn enqueue(&mut self, vehicle: Vehicle) {
        self.queue.push_back(vehicle);
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
