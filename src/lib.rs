//! restdocgen - MockMvc + Spring REST Docs test snippets from request handlers
//!
//! The crate reads a request handler (its mapping annotation, parameters and
//! return type) together with read-only access to the classes those types
//! resolve to, and renders a `mockMvc.perform(..)` call followed by a
//! `document(..)` block listing every request and response field.
//!
//! Layers:
//! - [`model`]: the host program model and the [`model::TypeResolver`] port
//! - [`generation`]: classification, field documentation, mapping extraction and assembly
//! - [`infrastructure`]: snapshot loading and output sinks
//! - [`application`]: use cases driven by the CLI
//! - [`core`]: configuration and its errors

pub mod application;
pub mod core;
pub mod generation;
pub mod infrastructure;
pub mod model;
