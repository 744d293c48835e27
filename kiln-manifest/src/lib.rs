//! Project configuration for the kiln scaffolding tool.
//!
//! A project is described by a `kiln.toml` at its root:
//!
//! ```toml
//! [project]
//! namespace = 'Admin'
//! source_dir = 'src'
//! strict_types = true
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod template;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    KilnToml, Manifest, MessagesConfig, ParseContext, ProjectConfig, is_php_reserved,
    parse_manifest,
};
pub use template::ManifestTemplate;

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "kiln.toml";
