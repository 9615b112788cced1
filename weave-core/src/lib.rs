//! Core utilities and types for the weave code generator.
//!
//! This crate provides the identifier engine every generated name flows
//! through, plus the small support services shared by a generation run.

mod cache;
mod case;
mod file;
mod locate;
mod naming;
mod pool;
mod token;

// Support services
pub use cache::MemoCache;
// Identifier engine
pub use case::{
    pluralize, split_words, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case,
    to_upper_snake_case,
};
// Collaborator interfaces
pub use file::{FsWriter, LineWriter, Overwrite, WriteResult};
pub use locate::{find_ancestor_with, find_ancestor_with_file, relative_path};
pub use naming::{CSHARP_NAMING, NamingConvention};
pub use pool::{BufferPool, DEFAULT_CEILING};
pub use token::{Inflector, Token, Variants, variants};
