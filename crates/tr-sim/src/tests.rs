//! Unit tests for network assembly, the tick loop, loading, and routing.

#[cfg(test)]
mod helpers {
    use tr_core::{LaneId, Turn, Vehicle, VehicleClass, VehicleId};
    use tr_intersection::{Approach, LaneDirection::*};
    use tr_lane::LaneKind;

    use crate::{NetworkBuilder, TrafficNetwork};

    pub fn car(id: u32, turns: &str) -> Vehicle {
        Vehicle::new(VehicleId(id), VehicleClass::Car, 1)
            .with_turns(turns.chars().filter_map(Turn::from_code))
    }

    /// Twelve lanes and four intersections joined in a loop:
    /// 0 → 3 → 1 → 6 → 2 → 8 → 3 → 5 → 0.
    ///
    /// Entry lanes: 0, 1, 2, 7.  Exit lanes: 4, 9, 10, 11.
    pub fn ring(kind: LaneKind) -> (TrafficNetwork, Vec<LaneId>) {
        let mut b = NetworkBuilder::new();
        let l: Vec<LaneId> = (0..12).map(|_| b.add_lane(kind)).collect();
        let ix: Vec<_> = (0..4).map(|_| b.add_intersection()).collect();
        let wiring = [
            (ix[0], [(l[0], Incoming), (l[3], Outgoing), (l[5], Incoming), (l[2], Incoming)]),
            (ix[1], [(l[1], Incoming), (l[4], Outgoing), (l[6], Outgoing), (l[3], Incoming)]),
            (ix[2], [(l[6], Incoming), (l[9], Outgoing), (l[11], Outgoing), (l[8], Outgoing)]),
            (ix[3], [(l[5], Outgoing), (l[8], Incoming), (l[10], Outgoing), (l[7], Incoming)]),
        ];
        for (id, slots) in wiring {
            for (a, (lane, dir)) in Approach::ALL.into_iter().zip(slots) {
                b.connect(id, a, Some(lane), dir).unwrap();
            }
        }
        (b.build().unwrap(), l)
    }

    pub fn ids(network: &TrafficNetwork, lane: LaneId) -> Vec<u32> {
        network.lanes.get(lane).unwrap().iter().map(|v| v.id().0).collect()
    }
}

#[cfg(test)]
mod network {
    use tr_core::{IntersectionId, LaneId, Turn};
    use tr_intersection::{Approach, LaneDirection};
    use tr_lane::LaneKind;

    use super::helpers::*;
    use crate::{NetworkBuilder, SimError};

    #[test]
    fn connect_rejects_unknown_ids() {
        let mut b = NetworkBuilder::new();
        let lane = b.add_lane(LaneKind::Simple);
        let ix = b.add_intersection();
        assert!(matches!(
            b.connect(ix, Approach::North, Some(LaneId(9)), LaneDirection::Incoming),
            Err(SimError::UnknownLane(LaneId(9)))
        ));
        assert!(matches!(
            b.connect(IntersectionId(3), Approach::North, Some(lane), LaneDirection::Incoming),
            Err(SimError::UnknownIntersection(IntersectionId(3)))
        ));
        assert_eq!(b.connect(ix, Approach::North, Some(lane), LaneDirection::Incoming).unwrap(), None);
        assert_eq!(b.connect(ix, Approach::North, None, LaneDirection::Incoming).unwrap(), Some(lane));
    }

    #[test]
    fn build_rejects_unready_intersection() {
        let mut b = NetworkBuilder::new();
        let lane = b.add_lane(LaneKind::Simple);
        let ix = b.add_intersection();
        b.connect(ix, Approach::North, Some(lane), LaneDirection::Incoming).unwrap();
        assert!(matches!(b.build(), Err(SimError::IntersectionNotReady(IntersectionId(0)))));
    }

    #[test]
    fn entry_exit_and_downstream() {
        let (net, l) = ring(LaneKind::Simple);
        assert_eq!(net.intersection_count(), 4);
        assert_eq!(net.entry_lanes(), vec![l[0], l[1], l[2], l[7]]);
        assert_eq!(net.exit_lanes(), vec![l[4], l[9], l[10], l[11]]);
        assert_eq!(net.downstream(l[3]), Some((IntersectionId(1), Approach::West)));
        assert_eq!(net.downstream(l[5]), Some((IntersectionId(0), Approach::South)));
        assert_eq!(net.downstream(l[4]), None);
    }

    #[test]
    fn step_runs_intersections_in_id_order() {
        let (mut net, l) = ring(LaneKind::Express);
        net.lanes.get_mut(l[0]).unwrap().enqueue(car(1, "LRRRRS"));

        // First step carries the car through all four corners back to lane 5.
        let moved = net.step();
        assert_eq!(moved.len(), 4);
        let corners: Vec<u32> = moved.iter().map(|(ix, _)| ix.0).collect();
        assert_eq!(corners, vec![0, 1, 2, 3]);
        assert_eq!(ids(&net, l[5]), vec![1]);

        net.step();
        assert_eq!(ids(&net, l[4]), vec![1]);
        assert_eq!(net.vehicle_count(), 1);
        let v = net.lanes.get(l[4]).unwrap().front().unwrap();
        assert_eq!(v.next_turn(), Turn::Invalid);
    }
}

#[cfg(test)]
mod sim {
    use tr_core::{IntersectionId, LaneId, SimConfig, Tick};
    use tr_intersection::Movement;
    use tr_lane::{LaneKind, LaneStore};

    use super::helpers::*;
    use crate::{NoopObserver, SimBuilder, SimError, SimObserver, VehiclePlacement};

    #[derive(Default)]
    struct Recorder {
        starts:    Vec<Tick>,
        moves:     Vec<(Tick, IntersectionId, u32)>,
        ends:      Vec<(Tick, usize, usize)>,
        snapshots: Vec<(Tick, usize)>,
        finished:  Option<Tick>,
    }

    impl SimObserver for Recorder {
        fn on_tick_start(&mut self, tick: Tick) {
            self.starts.push(tick);
        }
        fn on_movement(&mut self, tick: Tick, ix: IntersectionId, m: &Movement) {
            self.moves.push((tick, ix, m.vehicle.0));
        }
        fn on_tick_end(&mut self, tick: Tick, moved: usize, in_network: usize) {
            self.ends.push((tick, moved, in_network));
        }
        fn on_snapshot(&mut self, tick: Tick, lanes: &LaneStore) {
            self.snapshots.push((tick, lanes.total_vehicles()));
        }
        fn on_sim_end(&mut self, final_tick: Tick) {
            self.finished = Some(final_tick);
        }
    }

    fn config(total_ticks: u64, interval: u64) -> SimConfig {
        SimConfig { total_ticks, seed: 1, output_interval_ticks: interval }
    }

    #[test]
    fn run_calls_hooks_in_order() {
        let (net, l) = ring(LaneKind::Simple);
        let mut sim = SimBuilder::new(config(4, 2), net)
            .vehicles(vec![VehiclePlacement { lane: l[0], vehicle: car(7, "LRRRRS") }])
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);

        assert_eq!(rec.starts, vec![Tick(0), Tick(1), Tick(2), Tick(3)]);
        assert_eq!(rec.moves.len(), 6);
        assert!(rec.moves[..4].iter().all(|(t, _, v)| *t == Tick(0) && *v == 7));
        assert_eq!(rec.ends[0], (Tick(0), 4, 1));
        assert_eq!(rec.ends[1], (Tick(1), 2, 1));
        assert_eq!(rec.ends[2], (Tick(2), 0, 1));
        assert_eq!(rec.snapshots, vec![(Tick(0), 1), (Tick(2), 1)]);
        assert_eq!(rec.finished, Some(Tick(4)));
        assert_eq!(sim.current_tick(), Tick(4));
        assert_eq!(ids(&sim.network, l[4]), vec![7]);
    }

    #[test]
    fn run_ticks_ignores_end() {
        let (net, _) = ring(LaneKind::Simple);
        let mut sim = SimBuilder::new(config(2, 0), net).build().unwrap();
        let mut rec = Recorder::default();
        sim.run_ticks(5, &mut rec);
        assert_eq!(rec.starts.len(), 5);
        assert!(rec.snapshots.is_empty());
        assert!(rec.finished.is_none());
        assert_eq!(sim.current_tick(), Tick(5));
    }

    #[test]
    fn build_validates() {
        let (net, _) = ring(LaneKind::Simple);
        assert!(matches!(SimBuilder::new(config(0, 1), net).build(), Err(SimError::Config(_))));

        let (net, _) = ring(LaneKind::Simple);
        let bad = vec![VehiclePlacement { lane: LaneId(40), vehicle: car(1, "") }];
        assert!(matches!(
            SimBuilder::new(config(1, 1), net).vehicles(bad).build(),
            Err(SimError::UnknownLane(LaneId(40)))
        ));
    }

    #[test]
    fn inject_between_ticks() {
        let (net, l) = ring(LaneKind::Simple);
        let mut sim = SimBuilder::new(config(10, 1), net).build().unwrap();
        sim.inject(l[1], car(1, "L")).unwrap();
        assert!(matches!(sim.inject(LaneId(99), car(2, "")), Err(SimError::UnknownLane(_))));
        sim.run_ticks(1, &mut NoopObserver);
        assert_eq!(ids(&sim.network, l[4]), vec![1]);
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use tr_core::{LaneId, Turn, VehicleClass};

    use crate::{SimError, load_vehicles_reader};

    #[test]
    fn parses_rows_in_order() {
        let csv = "vehicle_id,lane_id,class,occupants,turns\n\
                   0,0,car,1,LRS\n\
                   1,0,Motorcycle,1,l\n\
                   2,5,bus,30,\n";
        let rows = load_vehicles_reader(Cursor::new(csv)).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].lane, LaneId(0));
        assert_eq!(rows[0].vehicle.remaining_turns(), 3);
        assert_eq!(rows[0].vehicle.next_turn(), Turn::Left);
        assert_eq!(rows[1].vehicle.class(), VehicleClass::Motorcycle);
        assert_eq!(rows[1].vehicle.next_turn(), Turn::Left);
        assert_eq!(rows[2].lane, LaneId(5));
        assert_eq!(rows[2].vehicle.occupants(), 30);
        assert_eq!(rows[2].vehicle.remaining_turns(), 0);
    }

    #[test]
    fn rejects_bad_class_and_turns() {
        let bad_class = "vehicle_id,lane_id,class,occupants,turns\n0,0,tram,1,L\n";
        assert!(matches!(load_vehicles_reader(Cursor::new(bad_class)), Err(SimError::Core(_))));

        let bad_turn = "vehicle_id,lane_id,class,occupants,turns\n0,0,car,1,LXS\n";
        assert!(matches!(
            load_vehicles_reader(Cursor::new(bad_turn)),
            Err(SimError::Core(tr_core::TrafficError::InvalidTurnCode('X')))
        ));

        let bad_number = "vehicle_id,lane_id,class,occupants,turns\nx,0,car,1,L\n";
        assert!(matches!(load_vehicles_reader(Cursor::new(bad_number)), Err(SimError::Parse(_))));
    }
}

#[cfg(test)]
mod route {
    use tr_core::{SimRng, Vehicle, VehicleClass, VehicleId};
    use tr_lane::LaneKind;

    use super::helpers::*;
    use crate::random_route;

    /// Follow `turns` from `entry` and return the lane the walk ends on.
    fn follow(net: &crate::TrafficNetwork, entry: tr_core::LaneId, turns: &[tr_core::Turn]) -> tr_core::LaneId {
        let mut lane = entry;
        for &turn in turns {
            let (ix, from) = net.downstream(lane).unwrap();
            let b = net.intersection(ix).unwrap().binding(from.target(turn)).unwrap();
            assert!(b.is_outgoing());
            lane = b.lane;
        }
        lane
    }

    #[test]
    fn routes_end_on_exit_lanes() {
        let (net, _) = ring(LaneKind::Simple);
        let exits = net.exit_lanes();
        let mut rng = SimRng::new(11);
        for entry in net.entry_lanes() {
            for max_hops in [0, 1, 3, 8] {
                let turns = random_route(&net, entry, &mut rng, max_hops);
                assert!(!turns.is_empty());
                assert!(exits.contains(&follow(&net, entry, &turns)));
            }
        }
    }

    #[test]
    fn same_seed_same_route() {
        let (net, l) = ring(LaneKind::Simple);
        let a = random_route(&net, l[0], &mut SimRng::new(5), 6);
        let b = random_route(&net, l[0], &mut SimRng::new(5), 6);
        assert_eq!(a, b);
    }

    #[test]
    fn exit_lane_has_empty_route() {
        let (net, l) = ring(LaneKind::Simple);
        assert!(random_route(&net, l[4], &mut SimRng::new(1), 4).is_empty());
    }

    /// Random routed traffic on the ring: vehicles are conserved every tick
    /// and everything eventually drains to exit lanes.
    #[test]
    fn routed_traffic_drains() {
        let (mut net, _) = ring(LaneKind::Express);
        let mut rng = SimRng::new(99);
        let classes = [VehicleClass::Car, VehicleClass::Bus, VehicleClass::Motorcycle];
        let entries = net.entry_lanes();
        let mut id = 0;
        for &entry in &entries {
            for _ in 0..5 {
                let turns = random_route(&net, entry, &mut rng, 4);
                let v = Vehicle::new(VehicleId(id), *rng.choose(&classes).unwrap(), 1).with_turns(turns);
                id += 1;
                net.lanes.get_mut(entry).unwrap().enqueue(v);
            }
        }
        let total = net.vehicle_count();
        for _ in 0..200 {
            net.step();
            assert_eq!(net.vehicle_count(), total);
        }
        let on_exits: usize = net
            .exit_lanes()
            .into_iter()
            .map(|l| net.lanes.get(l).unwrap().len())
            .sum();
        assert_eq!(on_exits, total);
    }
}
