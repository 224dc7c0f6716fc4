//! Application layer - orchestrates use cases and coordinates between domains

pub mod commands;
pub mod errors;
pub mod generate_docs;
pub mod list_handlers;

pub use commands::*;
pub use errors::*;
pub use generate_docs::*;
pub use list_handlers::*;
