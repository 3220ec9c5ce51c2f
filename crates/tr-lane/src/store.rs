//! The `LaneStore`: every lane in a network, addressed by `LaneId`.

use tr_core::LaneId;

use crate::{Lane, LaneKind};

/// Arena of lanes indexed by `LaneId`.
///
/// Intersections hold `LaneId`s rather than references, so two
/// intersections can share a lane without shared mutable ownership.  Ids are
/// dense and assigned in insertion order; lanes are never removed.
#[derive(Default)]
pub struct LaneStore {
    lanes: Vec<Box<dyn Lane>>,
}

impl LaneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `lane` and return its id.
    pub fn add(&mut self, lane: Box<dyn Lane>) -> LaneId {
        let id = LaneId(self.lanes.len() as u32);
        self.lanes.push(lane);
        id
    }

    /// Add an empty lane of `kind`.
    pub fn add_kind(&mut self, kind: LaneKind) -> LaneId {
        self.add(kind.build())
    }

    pub fn get(&self, id: LaneId) -> Option<&dyn Lane> {
        self.lanes.get(id.index()).map(|lane| lane.as_ref())
    }

    pub fn get_mut(&mut self, id: LaneId) -> Option<&mut dyn Lane> {
        let lane = self.lanes.get_mut(id.index())?;
        Some(lane.as_mut())
    }

    #[inline]
    pub fn contains(&self, id: LaneId) -> bool {
        id.index() < self.lanes.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// All lane ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = LaneId> + '_ {
        (0..self.lanes.len()).map(|i| LaneId(i as u32))
    }

    /// Sum of `len()` over every lane.
    pub fn total_vehicles(&self) -> usize {
        self.lanes.iter().map(|lane| lane.len()).sum()
    }

    /// Per-lane vehicle counts, indexed by `LaneId`.
    pub fn counts(&self) -> Vec<usize> {
        self.lanes.iter().map(|lane| lane.len()).collect()
    }
}
