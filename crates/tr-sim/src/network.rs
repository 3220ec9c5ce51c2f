//! `TrafficNetwork`: lanes plus the intersections wired to them.

use tracing::debug;
use tr_core::{IntersectionId, LaneId};
use tr_intersection::{Approach, Intersection, LaneDirection, Movement};
use tr_lane::{LaneKind, LaneStore};

use crate::{SimError, SimResult};

// ── Builder ───────────────────────────────────────────────────────────────────

/// Incrementally assembles a [`TrafficNetwork`].
///
/// ```rust,ignore
/// let mut b = NetworkBuilder::new();
/// let (a, out) = (b.add_lane(LaneKind::Simple), b.add_lane(LaneKind::Express));
/// let ix = b.add_intersection();
/// b.connect(ix, Approach::North, Some(a), LaneDirection::Incoming)?;
/// b.connect(ix, Approach::East, Some(out), LaneDirection::Outgoing)?;
/// // ... south and west ...
/// let network = b.build()?;
/// ```
#[derive(Default)]
pub struct NetworkBuilder {
    lanes:         LaneStore,
    intersections: Vec<Intersection>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_lane(&mut self, kind: LaneKind) -> LaneId {
        self.lanes.add_kind(kind)
    }

    pub fn add_intersection(&mut self) -> IntersectionId {
        let id = IntersectionId(self.intersections.len() as u32);
        self.intersections.push(Intersection::new());
        id
    }

    /// Bind `lane` to one slot of `intersection`; `None` clears the slot.
    /// Returns the lane previously bound there.
    ///
    /// # Errors
    ///
    /// `UnknownIntersection` or `UnknownLane` if either id was not created
    /// by this builder.
    pub fn connect(
        &mut self,
        intersection: IntersectionId,
        approach:     Approach,
        lane:         Option<LaneId>,
        direction:    LaneDirection,
    ) -> SimResult<Option<LaneId>> {
        if let Some(lane) = lane.filter(|l| !self.lanes.contains(*l)) {
            return Err(SimError::UnknownLane(lane));
        }
        let ix = self
            .intersections
            .get_mut(intersection.index())
            .ok_or(SimError::UnknownIntersection(intersection))?;
        Ok(ix.connect(approach, lane, direction))
    }

    /// Finish the network.
    ///
    /// # Errors
    ///
    /// `IntersectionNotReady` for the first intersection with an empty slot.
    pub fn build(self) -> SimResult<TrafficNetwork> {
        for (i, ix) in self.intersections.iter().enumerate() {
            if !ix.valid() {
                return Err(SimError::IntersectionNotReady(IntersectionId(i as u32)));
            }
        }
        debug!(
            lanes         = self.lanes.len(),
            intersections = self.intersections.len(),
            "network built",
        );
        Ok(TrafficNetwork {
            lanes:         self.lanes,
            intersections: self.intersections,
        })
    }
}

// ── Network ───────────────────────────────────────────────────────────────────

/// Every lane and intersection of a simulated road network.
///
/// Lanes joining two intersections are the only state the intersections
/// share.  [`step`](Self::step) is the single writer: it simulates each
/// intersection in ascending id order, so a vehicle can cross several
/// intersections in one step when the downstream one has a higher id.
pub struct TrafficNetwork {
    pub lanes: LaneStore,
    intersections: Vec<Intersection>,
}

impl TrafficNetwork {
    #[inline]
    pub fn intersection(&self, id: IntersectionId) -> Option<&Intersection> {
        self.intersections.get(id.index())
    }

    #[inline]
    pub fn intersection_count(&self) -> usize {
        self.intersections.len()
    }

    /// Intersections with their ids, ascending.
    pub fn intersections(&self) -> impl Iterator<Item = (IntersectionId, &Intersection)> {
        self.intersections
            .iter()
            .enumerate()
            .map(|(i, ix)| (IntersectionId(i as u32), ix))
    }

    /// The intersection (and slot) that `lane` feeds, if any.
    ///
    /// When a lane is incoming at several places the lowest id wins.
    pub fn downstream(&self, lane: LaneId) -> Option<(IntersectionId, Approach)> {
        self.intersections().find_map(|(id, ix)| {
            ix.bindings()
                .find(|(_, b)| b.lane == lane && b.is_incoming())
                .map(|(a, _)| (id, a))
        })
    }

    fn bound_as(&self, lane: LaneId, direction: LaneDirection) -> bool {
        self.intersections
            .iter()
            .any(|ix| ix.bindings().any(|(_, b)| b.lane == lane && b.direction == direction))
    }

    /// Lanes that feed an intersection but are fed by none.
    pub fn entry_lanes(&self) -> Vec<LaneId> {
        self.lanes
            .ids()
            .filter(|&l| self.bound_as(l, LaneDirection::Incoming) && !self.bound_as(l, LaneDirection::Outgoing))
            .collect()
    }

    /// Lanes that some intersection feeds and none drains.
    pub fn exit_lanes(&self) -> Vec<LaneId> {
        self.lanes
            .ids()
            .filter(|&l| self.bound_as(l, LaneDirection::Outgoing) && !self.bound_as(l, LaneDirection::Incoming))
            .collect()
    }

    #[inline]
    pub fn vehicle_count(&self) -> usize {
        self.lanes.total_vehicles()
    }

    /// Simulate every intersection once, ascending by id.
    pub fn step(&mut self) -> Vec<(IntersectionId, Movement)> {
        let mut moved = Vec::new();
        for (i, ix) in self.intersections.iter().enumerate() {
            let id = IntersectionId(i as u32);
            moved.extend(ix.simulate(&mut self.lanes).into_iter().map(|m| (id, m)));
        }
        moved
    }
}
