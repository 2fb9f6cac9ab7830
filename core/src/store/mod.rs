//! SQLite access layer.
//!
//! RULE: Only the store talks to the database.
//! Report builders call store methods — they never execute SQL directly.
//!
//! Every query is read-only and binds values as parameters. The schema
//! (`players`, `player_sessions` and the `v_*` segmentation views) is an
//! external contract; nothing here creates or validates it.

use crate::error::ReportResult;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

mod overview;
mod performance;
mod persona;

pub struct AnalyticsStore {
    conn: Connection,
}

impl AnalyticsStore {
    /// Open an existing analytics database read-only.
    /// A missing file is an error; SQLite will not create one.
    pub fn open(path: impl AsRef<Path>) -> ReportResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_URI,
        )?;
        log::debug!("store: opened {} read-only", path.display());
        Ok(Self { conn })
    }

    /// Open an empty in-memory database (used in tests).
    pub fn in_memory() -> ReportResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Wrap a connection the caller has already prepared.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Close the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> ReportResult<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}
