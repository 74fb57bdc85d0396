//! Library shared by the `reg` and `regdetails` binaries: query
//! construction, read-only database access, and report rendering.

pub mod db;
pub mod error;
pub mod logging;
pub mod query;
pub mod render;
