//! Error types for the registrar lookup library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while opening or querying the registrar database.
#[derive(Debug, Error)]
pub enum RegError {
    /// The database file could not be opened read-only
    #[error("cannot open {}", .path.display())]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// A statement failed to prepare or execute
    #[error("query failed")]
    Query(#[from] rusqlite::Error),

    /// The class id argument contained something other than digits
    #[error("class id {input:?} is not a number")]
    InvalidClassId { input: String },

    /// The detail lookup matched no class
    #[error("no class with classid {classid} exists")]
    NoSuchClass { classid: String },
}
