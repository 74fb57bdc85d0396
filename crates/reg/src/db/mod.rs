/// Read-only access to the registrar database

mod types;

pub use types::{ClassDetails, ClassRow, DetailRow};

use crate::error::RegError;
use crate::query::{self, SearchFilters};
use rusqlite::{params_from_iter, Connection, OpenFlags};
use std::path::Path;
use tracing::debug;

/// Handle to the registrar database, opened strictly read-only.
#[derive(Debug)]
pub struct RegDb {
    conn: Connection,
}

impl RegDb {
    /// Opens the database file. Fails if the file is missing or unreadable;
    /// nothing is ever created or written.
    pub fn open(path: &Path) -> Result<Self, RegError> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags).map_err(|source| RegError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened registrar database");
        Ok(Self { conn })
    }

    /// Runs the list-mode search, returning one row per matching class and
    /// cross-listing, ordered by dept, coursenum, classid.
    pub fn search(&self, filters: &SearchFilters) -> Result<Vec<ClassRow>, RegError> {
        let (sql, params) = query::build_search(filters);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(&params), |row| {
                Ok(ClassRow {
                    classid: row.get(0)?,
                    dept: row.get(1)?,
                    coursenum: row.get(2)?,
                    area: row.get(3)?,
                    title: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        debug!(filters = params.len(), rows = rows.len(), "search complete");
        Ok(rows)
    }

    /// Looks up a single class by id and collapses its rows into one
    /// `ClassDetails`. The id is validated before any statement is
    /// prepared.
    pub fn details(&self, classid: &str) -> Result<ClassDetails, RegError> {
        let classid = query::validate_class_id(classid)?;
        let mut stmt = self.conn.prepare(query::DETAIL_SQL)?;
        let rows = stmt
            .query_map([classid], |row| {
                Ok(DetailRow {
                    courseid: row.get(0)?,
                    days: row.get(1)?,
                    starttime: row.get(2)?,
                    endtime: row.get(3)?,
                    bldg: row.get(4)?,
                    roomnum: row.get(5)?,
                    dept: row.get(6)?,
                    coursenum: row.get(7)?,
                    area: row.get(8)?,
                    title: row.get(9)?,
                    descrip: row.get(10)?,
                    prereqs: row.get(11)?,
                    profname: row.get(12)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        debug!(classid, rows = rows.len(), "detail lookup complete");
        ClassDetails::from_rows(&rows).ok_or_else(|| RegError::NoSuchClass {
            classid: classid.to_string(),
        })
    }

    /// Closes the connection, surfacing any error SQLite reports.
    pub fn close(self) -> Result<(), RegError> {
        self.conn
            .close()
            .map_err(|(_, source)| RegError::Query(source))
    }
}
