//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use tracing::warn;
use tr_core::{Tick, VehicleId};
use tr_lane::{LaneKind, LaneStore};
use tr_sim::SimObserver;

use crate::row::{LaneSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Feeds tick summaries and lane snapshots from a running simulation into
/// an [`OutputWriter`].
///
/// Observer hooks return nothing, so a failed write is held here: the first
/// error is kept for [`take_error`](Self::take_error) and any later ones are
/// discarded.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:      W,
    first_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, first_error: None }
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.first_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn keep(&mut self, result: OutputResult<()>) {
        let Err(e) = result else { return };
        warn!(error = %e, "writing simulation output failed");
        self.first_error.get_or_insert(e);
    }
}

/// One snapshot row per lane, ascending by lane id.
pub fn lane_rows(tick: Tick, lanes: &LaneStore) -> Vec<LaneSnapshotRow> {
    lanes
        .ids()
        .filter_map(|id| lanes.get(id).map(|lane| (id, lane)))
        .map(|(id, lane)| LaneSnapshotRow {
            tick:          tick.0,
            lane_id:       id.0,
            express:       lane.kind() == LaneKind::Express,
            vehicle_count: lane.len() as u32,
            front_vehicle: lane.front().map_or(VehicleId::INVALID, |v| v.id()).0,
            back_vehicle:  lane.back().map_or(VehicleId::INVALID, |v| v.id()).0,
        })
        .collect()
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, moved: usize, in_network: usize) {
        let result = self.writer.write_tick_summary(&TickSummaryRow {
            tick:                tick.0,
            moved_vehicles:      moved as u64,
            vehicles_in_network: in_network as u64,
        });
        self.keep(result);
    }

    fn on_snapshot(&mut self, tick: Tick, lanes: &LaneStore) {
        let result = self.writer.write_snapshots(&lane_rows(tick, lanes));
        self.keep(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.keep(result);
    }
}
