//! Snapshot sources
//!
//! Snapshots are parsed and indexed by [`ProgramSnapshot`](crate::model::ProgramSnapshot);
//! this module only reads them from disk.

pub mod file_loader;

pub use file_loader::*;
