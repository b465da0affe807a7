//! Repository Module
//!
//! Data access layer for the server: the raw crontab on one side, the
//! in-memory job index on the other.

pub mod index;
pub mod table;

pub use index::JobIndex;
pub use table::{CommandTableSource, TableError, TableSource};
