//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - accumulates indented lines
//! - [`CodeFragment`] - intermediate representation for code pieces
//! - [`Renderable`] - trait for types that can be converted to code fragments
//! - [`indent`] - the single indentation helper

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::{INDENT_WIDTH, indent};
pub use renderable::{CodeFragment, Renderable};
