//! Castgrep - interactive C++ cast usage scanner
//!
//! A heuristic, line-oriented scanner for the four explicit-conversion
//! operators (`static_cast`, `dynamic_cast`, `const_cast`,
//! `reinterpret_cast`). Walks a directory tree, builds an in-memory
//! per-file index with surrounding context lines, and answers summary,
//! per-file, and per-kind queries over it interactively.
//!
//! Not a parser: matches inside comments and string literals are
//! reported too.

pub mod cli;
pub mod console;
pub mod core;
pub mod index;
pub mod output;
pub mod scan;

pub use crate::core::error::{Error, Result};
pub use crate::index::CastIndex;
pub use crate::scan::{CastKind, FileReport, Occurrence};
