//! Parquet backend (feature `parquet`): `lane_snapshots.parquet` and
//! `tick_summaries.parquet`, Snappy-compressed.
//!
//! Tick summaries arrive one row per tick; they are buffered and written in
//! row groups of [`SUMMARY_BATCH`] rows.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, BooleanArray, UInt32Array, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{LaneSnapshotRow, OutputResult, TickSummaryRow};

pub const SUMMARY_BATCH: usize = 1024;

/// One open Parquet file and the schema its batches must match.
struct Table {
    schema: SchemaRef,
    writer: Option<ArrowWriter<File>>,
}

impl Table {
    fn create(path: &Path, fields: Vec<Field>) -> OutputResult<Self> {
        let schema = Arc::new(Schema::new(fields));
        let props = WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .build();
        let writer = ArrowWriter::try_new(File::create(path)?, Arc::clone(&schema), Some(props))?;
        Ok(Self { schema, writer: Some(writer) })
    }

    fn append(&mut self, columns: Vec<ArrayRef>) -> OutputResult<()> {
        let Some(writer) = self.writer.as_mut() else { return Ok(()) };
        writer.write(&RecordBatch::try_new(Arc::clone(&self.schema), columns)?)?;
        Ok(())
    }

    fn close(&mut self) -> OutputResult<()> {
        if let Some(writer) = self.writer.take() {
            writer.close()?;
        }
        Ok(())
    }
}

fn col_u64(values: impl IntoIterator<Item = u64>) -> ArrayRef {
    Arc::new(UInt64Array::from_iter_values(values))
}

fn col_u32(values: impl IntoIterator<Item = u32>) -> ArrayRef {
    Arc::new(UInt32Array::from_iter_values(values))
}

/// Writes lane snapshots and tick summaries as Parquet.
///
/// Nothing is readable until [`finish`](OutputWriter::finish) has written
/// the file footers.
pub struct ParquetWriter {
    lanes:   Table,
    ticks:   Table,
    pending: Vec<TickSummaryRow>,
}

impl ParquetWriter {
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let lanes = Table::create(
            &dir.join("lane_snapshots.parquet"),
            vec![
                Field::new("tick",          DataType::UInt64,  false),
                Field::new("lane_id",       DataType::UInt32,  false),
                Field::new("express",       DataType::Boolean, false),
                Field::new("vehicle_count", DataType::UInt32,  false),
                Field::new("front_vehicle", DataType::UInt32,  false),
                Field::new("back_vehicle",  DataType::UInt32,  false),
            ],
        )?;
        let ticks = Table::create(
            &dir.join("tick_summaries.parquet"),
            vec![
                Field::new("tick",                DataType::UInt64, false),
                Field::new("moved_vehicles",      DataType::UInt64, false),
                Field::new("vehicles_in_network", DataType::UInt64, false),
            ],
        )?;
        Ok(Self { lanes, ticks, pending: Vec::with_capacity(SUMMARY_BATCH) })
    }

    fn flush_summaries(&mut self) -> OutputResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let rows = std::mem::take(&mut self.pending);
        self.ticks.append(vec![
            col_u64(rows.iter().map(|r| r.tick)),
            col_u64(rows.iter().map(|r| r.moved_vehicles)),
            col_u64(rows.iter().map(|r| r.vehicles_in_network)),
        ])
    }
}

impl OutputWriter for ParquetWriter {
    fn write_snapshots(&mut self, rows: &[LaneSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        self.lanes.append(vec![
            col_u64(rows.iter().map(|r| r.tick)),
            col_u32(rows.iter().map(|r| r.lane_id)),
            Arc::new(BooleanArray::from(rows.iter().map(|r| r.express).collect::<Vec<_>>())),
            col_u32(rows.iter().map(|r| r.vehicle_count)),
            col_u32(rows.iter().map(|r| r.front_vehicle)),
            col_u32(rows.iter().map(|r| r.back_vehicle)),
        ])
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.pending.push(*row);
        if self.pending.len() >= SUMMARY_BATCH {
            self.flush_summaries()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.flush_summaries()?;
        self.lanes.close()?;
        self.ticks.close()
    }
}
