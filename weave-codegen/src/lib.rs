//! C# code synthesis for the weave scaffolder.
//!
//! # Module Organization
//!
//! - [`builder`] - Fragments, indentation and the line builder every node renders through
//! - [`syntax`] - Syntax model (classes, interfaces, methods, ...) and fluent builders
//! - [`recipes`] - Endpoint recipes, controllers and request containers
//! - [`template`] - Token dictionaries, template rendering and lookup
//! - [`dispatch`] - Artifacts and the kind-to-strategy factory
//! - [`session`] - Shared services and per-run state
//!
//! Rendered output accumulates in a [`Context`] and is flushed through a
//! [`weave_core::LineWriter`].

pub mod builder;
mod context;
pub mod dispatch;
mod error;
pub mod recipes;
pub mod session;
pub mod syntax;
pub mod template;

pub use context::{Context, FlushReport, SetOutcome};
pub use error::{Error, Result};
