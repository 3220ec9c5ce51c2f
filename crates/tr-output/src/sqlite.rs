//! SQLite backend (feature `sqlite`): one `output.db` with tables
//! `lane_snapshots` and `tick_summaries`.

use std::path::Path;

use rusqlite::{Connection, params};

use crate::writer::OutputWriter;
use crate::{LaneSnapshotRow, OutputResult, TickSummaryRow};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS lane_snapshots (
    tick          INTEGER NOT NULL,
    lane_id       INTEGER NOT NULL,
    express       INTEGER NOT NULL CHECK (express IN (0, 1)),
    vehicle_count INTEGER NOT NULL,
    front_vehicle INTEGER NOT NULL,
    back_vehicle  INTEGER NOT NULL,
    PRIMARY KEY (tick, lane_id)
) WITHOUT ROWID;
CREATE TABLE IF NOT EXISTS tick_summaries (
    tick                INTEGER PRIMARY KEY,
    moved_vehicles      INTEGER NOT NULL,
    vehicles_in_network INTEGER NOT NULL
);";

const INSERT_SNAPSHOT: &str = "INSERT INTO lane_snapshots \
    (tick, lane_id, express, vehicle_count, front_vehicle, back_vehicle) \
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

const INSERT_SUMMARY: &str = "INSERT INTO tick_summaries \
    (tick, moved_vehicles, vehicles_in_network) VALUES (?1, ?2, ?3)";

pub struct SqliteWriter {
    conn: Connection,
    done: bool,
}

impl SqliteWriter {
    /// Open (or create) `dir/output.db` in WAL mode and create both tables.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;
        conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn, done: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[LaneSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        // One transaction per snapshot tick.
        let tx = self.conn.transaction()?;
        {
            let mut insert = tx.prepare_cached(INSERT_SNAPSHOT)?;
            for r in rows {
                insert.execute(params![
                    r.tick,
                    r.lane_id,
                    r.express,
                    r.vehicle_count,
                    r.front_vehicle,
                    r.back_vehicle,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn
            .prepare_cached(INSERT_SUMMARY)?
            .execute(params![row.tick, row.moved_vehicles, row.vehicles_in_network])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if !self.done {
            self.done = true;
            self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        }
        Ok(())
    }
}
