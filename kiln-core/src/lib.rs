//! Core utilities and types for the kiln scaffolding tool.
//!
//! This crate provides the file layer shared by every artifact builder
//! and the string helpers used to derive PHP names from user input.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{to_camel_case, to_pascal_case};
