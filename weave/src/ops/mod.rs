//! Core operations.
//!
//! Business logic for weave commands, kept apart from argument parsing and
//! terminal output.

pub mod scaffold;

pub use scaffold::scaffold;
