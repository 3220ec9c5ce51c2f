//! Random route planning over a `TrafficNetwork`.

use tracing::warn;
use tr_core::{LaneId, SimRng, Turn};

use crate::TrafficNetwork;

/// Upper bound on route length regardless of `max_hops`, for networks with
/// no reachable exit.
const HARD_HOP_LIMIT: usize = 256;

/// Plan a turn sequence for a vehicle starting on `entry_lane`.
///
/// At each intersection only turns whose target slot is outgoing are
/// considered.  Once `max_hops` turns have been chosen, turns onto exit
/// lanes (lanes that feed no intersection) are preferred so the vehicle
/// leaves the network.  The walk stops when it reaches a lane with no
/// downstream intersection.
pub fn random_route(
    network:    &TrafficNetwork,
    entry_lane: LaneId,
    rng:        &mut SimRng,
    max_hops:   usize,
) -> Vec<Turn> {
    let mut turns = Vec::new();
    let mut lane = entry_lane;

    while let Some((ix_id, from)) = network.downstream(lane) {
        if turns.len() >= HARD_HOP_LIMIT {
            warn!(entry = %entry_lane, "route hit hop limit without leaving the network");
            break;
        }
        let Some(ix) = network.intersection(ix_id) else { break };

        let options: Vec<(Turn, LaneId)> = [Turn::Left, Turn::Straight, Turn::Right]
            .into_iter()
            .filter_map(|turn| {
                ix.binding(from.target(turn))
                    .filter(|b| b.is_outgoing())
                    .map(|b| (turn, b.lane))
            })
            .collect();

        let exits: Vec<(Turn, LaneId)> = options
            .iter()
            .copied()
            .filter(|(_, l)| network.downstream(*l).is_none())
            .collect();

        let pool = if turns.len() >= max_hops && !exits.is_empty() { &exits } else { &options };
        let Some(&(turn, next)) = rng.choose(pool) else {
            warn!(intersection = %ix_id, lane = %lane, "no outgoing slot reachable; route ends");
            break;
        };
        turns.push(turn);
        lane = next;
    }
    turns
}
