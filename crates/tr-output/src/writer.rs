//! The `OutputWriter` trait implemented by all backend writers.

use crate::{LaneSnapshotRow, OutputResult, TickSummaryRow};

/// Trait implemented by the CSV, SQLite, and Parquet writers.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// when the writer is driven by the observer.
pub trait OutputWriter {
    /// Write one snapshot batch (all lanes at one tick).
    fn write_snapshots(&mut self, rows: &[LaneSnapshotRow]) -> OutputResult<()>;

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
