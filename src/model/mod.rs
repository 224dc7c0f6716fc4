//! Program model consumed by the generator
//!
//! These types stand in for the host's syntax tree: a handler method with its
//! annotations, parameters and return type, plus read-only access to the
//! classes those types resolve to.

pub mod class;
pub mod handler;
pub mod resolver;
pub mod snapshot;
pub mod type_ref;

pub use class::*;
pub use handler::*;
pub use resolver::*;
pub use snapshot::*;
pub use type_ref::*;
