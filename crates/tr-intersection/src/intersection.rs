//! The `Intersection` stepper.

use tracing::{trace, warn};
use tr_core::{LaneId, Turn};
use tr_lane::LaneStore;

use crate::give_way::{self, Contender};
use crate::{Approach, Binding, LaneDirection, Movement};

/// The four connection slots of an intersection.
///
/// Each slot pairs a lane with its direction, so a lane and its direction
/// can never drift apart.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Slots {
    pub north: Option<Binding>,
    pub east:  Option<Binding>,
    pub south: Option<Binding>,
    pub west:  Option<Binding>,
}

impl Slots {
    #[inline]
    pub fn get(&self, approach: Approach) -> Option<Binding> {
        match approach {
            Approach::North => self.north,
            Approach::East  => self.east,
            Approach::South => self.south,
            Approach::West  => self.west,
        }
    }

    #[inline]
    fn slot_mut(&mut self, approach: Approach) -> &mut Option<Binding> {
        match approach {
            Approach::North => &mut self.north,
            Approach::East  => &mut self.east,
            Approach::South => &mut self.south,
            Approach::West  => &mut self.west,
        }
    }

    /// All four bindings, or `None` if any slot is empty.
    pub fn all(&self) -> Option<[Binding; 4]> {
        Some([self.north?, self.east?, self.south?, self.west?])
    }
}

/// A four-way intersection referencing lanes in a [`LaneStore`].
///
/// The intersection never owns its lanes; it holds `LaneId`s and borrows the
/// store for the duration of each [`simulate`](Self::simulate) call.
#[derive(Clone, Debug, Default)]
pub struct Intersection {
    slots: Slots,
}

/// Snapshot of one front vehicle taken before anything moves.
struct Candidate {
    contender: Contender,
    from_lane: LaneId,
    to:        Approach,
    to_lane:   LaneId,
}

impl Intersection {
    /// An intersection with all four slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `lane` to `approach` (or clear the slot with `None`) and return
    /// the lane previously bound there.
    pub fn connect(
        &mut self,
        approach:  Approach,
        lane:      Option<LaneId>,
        direction: LaneDirection,
    ) -> Option<LaneId> {
        let new = lane.map(|lane| Binding { lane, direction });
        let old = std::mem::replace(self.slots.slot_mut(approach), new);
        old.map(|b| b.lane)
    }

    pub fn connect_north(&mut self, lane: Option<LaneId>, direction: LaneDirection) -> Option<LaneId> {
        self.connect(Approach::North, lane, direction)
    }

    pub fn connect_east(&mut self, lane: Option<LaneId>, direction: LaneDirection) -> Option<LaneId> {
        self.connect(Approach::East, lane, direction)
    }

    pub fn connect_south(&mut self, lane: Option<LaneId>, direction: LaneDirection) -> Option<LaneId> {
        self.connect(Approach::South, lane, direction)
    }

    pub fn connect_west(&mut self, lane: Option<LaneId>, direction: LaneDirection) -> Option<LaneId> {
        self.connect(Approach::West, lane, direction)
    }

    #[inline]
    pub fn binding(&self, approach: Approach) -> Option<Binding> {
        self.slots.get(approach)
    }

    #[inline]
    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// `true` when every slot holds a lane, whatever its direction.
    pub fn valid(&self) -> bool {
        self.slots.all().is_some()
    }

    /// Bound slots in N, E, S, W order.
    pub fn bindings(&self) -> impl Iterator<Item = (Approach, Binding)> + '_ {
        Approach::ALL
            .into_iter()
            .filter_map(|a| self.slots.get(a).map(|b| (a, b)))
    }

    /// Advance the intersection by one tick.
    ///
    /// Every incoming lane with traffic contends with its front vehicle.
    /// Give-way arbitration picks the winners, and each one is moved to the
    /// lane bound at its target slot, whatever that slot's direction.  At
    /// most one vehicle leaves each lane.  Nothing moves when the
    /// intersection is not ready, has no outgoing slot, or is bound to a
    /// lane the store does not contain.
    ///
    /// Returns one [`Movement`] per vehicle that crossed.
    pub fn simulate(&self, lanes: &mut LaneStore) -> Vec<Movement> {
        let Some(bound) = self.slots.all() else {
            trace!("intersection not ready; skipping");
            return Vec::new();
        };
        if let Some(b) = bound.iter().find(|b| !lanes.contains(b.lane)) {
            warn!(lane = %b.lane, "intersection bound to unknown lane; skipping");
            return Vec::new();
        }
        if !bound.iter().any(Binding::is_outgoing) {
            trace!("intersection has no outgoing slot; skipping");
            return Vec::new();
        }

        let candidates = Self::candidates(&bound, lanes);
        let contenders: Vec<Contender> = candidates.iter().map(|c| c.contender).collect();
        let go = give_way::arbitrate(&contenders);

        // Take every winner off its lane before enqueuing anything, so a
        // vehicle joining a source lane cannot displace its front.
        let mut crossing = Vec::new();
        for (cand, _) in candidates.iter().zip(&go).filter(|(_, go)| **go) {
            if let Some(vehicle) = lanes.get_mut(cand.from_lane).and_then(|l| l.dequeue()) {
                crossing.push((cand, vehicle));
            }
        }

        let mut moved = Vec::with_capacity(crossing.len());
        for (cand, mut vehicle) in crossing {
            vehicle.make_turn();
            let movement = Movement {
                vehicle:   vehicle.id(),
                class:     vehicle.class(),
                from:      cand.contender.from,
                to:        cand.to,
                turn:      cand.contender.turn,
                from_lane: cand.from_lane,
                to_lane:   cand.to_lane,
            };
            trace!(
                vehicle = %movement.vehicle,
                from    = %movement.from,
                to      = %movement.to,
                turn    = %movement.turn,
                "vehicle crossed",
            );
            if let Some(out) = lanes.get_mut(cand.to_lane) {
                out.enqueue(vehicle);
            }
            moved.push(movement);
        }
        moved
    }

    /// Front vehicles of incoming lanes with traffic, in scan order.
    ///
    /// A lane bound to several incoming slots is read only at the first.
    fn candidates(bound: &[Binding; 4], lanes: &LaneStore) -> Vec<Candidate> {
        let mut seen: Vec<LaneId> = Vec::with_capacity(4);
        let mut out = Vec::with_capacity(4);
        for from in Approach::ALL {
            let b = bound[from.index()];
            if !b.is_incoming() || seen.contains(&b.lane) {
                continue;
            }
            seen.push(b.lane);

            let Some(front) = lanes.get(b.lane).and_then(|l| l.front()) else {
                continue;
            };
            let turn = match front.next_turn() {
                Turn::Invalid => Turn::Straight,
                t => t,
            };
            let to = from.target(turn);
            out.push(Candidate {
                contender: Contender { from, turn },
                from_lane: b.lane,
                to,
                to_lane:   bound[to.index()].lane,
            });
        }
        out
    }
}
