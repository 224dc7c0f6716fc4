//! Infrastructure layer - concrete implementations of domain ports

pub mod output;
pub mod snapshot;

pub use output::*;
pub use snapshot::*;
