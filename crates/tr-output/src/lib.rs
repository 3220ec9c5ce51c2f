//! `tr-output`: simulation output writers for the `rust_traffic` simulator.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend  | Files created                                         |
//! |-----------|----------|-------------------------------------------------------|
//! | *(none)*  | CSV      | `lane_snapshots.csv`, `tick_summaries.csv`            |
//! | `sqlite`  | SQLite   | `output.db`                                           |
//! | `parquet` | Parquet  | `lane_snapshots.parquet`, `tick_summaries.parquet`    |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `tr_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tr_output::{CsvWriter, SimOutputObserver};
//!
//! let mut obs = SimOutputObserver::new(CsvWriter::new(Path::new("./output"))?);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{SimOutputObserver, lane_rows};
pub use row::{LaneSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
