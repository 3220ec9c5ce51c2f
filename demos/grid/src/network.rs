//! The demo road network: four corners joined by a clockwise ring road.
//!
//! ```text
//!        A ──ring0──▶ B
//!        ▲            │
//!      ring3        ring1
//!        │            ▼
//!        D ◀──ring2── C
//! ```
//!
//! Every corner has one entry lane from outside, one exit lane, one ring
//! lane in and one ring lane out.  The slot layout is the same at every
//! corner, rotated a quarter turn clockwise each time, so from any incoming
//! lane a vehicle can either continue round the ring or leave.  Ring lanes
//! are express lanes.

use anyhow::Result;

use tr_core::LaneId;
use tr_intersection::{Approach, LaneDirection};
use tr_lane::LaneKind;
use tr_sim::{NetworkBuilder, TrafficNetwork};

/// Slot roles at a corner, listed for corner A (north-west).  Corner `k`
/// uses the same roles rotated `k` positions clockwise.
const ENTRY_AT:    usize = 0; // north
const RING_OUT_AT: usize = 1; // east
const RING_IN_AT:  usize = 2; // south
const EXIT_AT:     usize = 3; // west

pub struct GridLanes {
    pub entries: [LaneId; 4],
    pub exits:   [LaneId; 4],
    pub ring:    [LaneId; 4],
}

pub fn build_network() -> Result<(TrafficNetwork, GridLanes)> {
    let mut b = NetworkBuilder::new();

    let entries = [(); 4].map(|_| b.add_lane(LaneKind::Simple));
    let exits   = [(); 4].map(|_| b.add_lane(LaneKind::Simple));
    // ring[k] runs from corner k to corner k + 1.
    let ring    = [(); 4].map(|_| b.add_lane(LaneKind::Express));

    for k in 0..4 {
        let ix = b.add_intersection();
        let slot = |role: usize| Approach::from_index(role + k);
        b.connect(ix, slot(ENTRY_AT),    Some(entries[k]),       LaneDirection::Incoming)?;
        b.connect(ix, slot(RING_OUT_AT), Some(ring[k]),          LaneDirection::Outgoing)?;
        b.connect(ix, slot(RING_IN_AT),  Some(ring[(k + 3) % 4]), LaneDirection::Incoming)?;
        b.connect(ix, slot(EXIT_AT),     Some(exits[k]),         LaneDirection::Outgoing)?;
    }

    Ok((b.build()?, GridLanes { entries, exits, ring }))
}
