//! Shared code generation utilities for the kiln scaffolding tool.
//!
//! This crate provides the language-agnostic primitives that the PHP
//! generator (`kiln-codegen-php`) builds on.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific conventions (NamingConvention)

pub mod builder;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::NamingConvention;
