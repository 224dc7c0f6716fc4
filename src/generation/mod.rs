//! Generation domain module - turns request handlers into REST Docs snippets
//!
//! A generation pass classifies types ([`classifier`]), extracts the request
//! mapping ([`mapping`]), documents payload fields ([`documenter`]) and renders
//! the result ([`assembler`]). [`RestDocGenerator`] coordinates the pass.

pub mod assembler;
pub mod classifier;
pub mod context;
pub mod diagnostics;
pub mod documenter;
pub mod errors;
pub mod mapping;
pub mod orchestrator;
pub mod sanitizers;
pub mod traits;
pub mod types;
pub mod utils;

pub use assembler::*;
pub use classifier::{JsonFieldType, TypeCategory};
pub use context::*;
pub use diagnostics::*;
pub use documenter::*;
pub use errors::*;
pub use mapping::{MappingAnnotation, MappingExtractor, ParameterAnnotation, parameter_role};
pub use orchestrator::*;
pub use traits::*;
pub use types::*;
