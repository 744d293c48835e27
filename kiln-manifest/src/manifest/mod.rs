//! Manifest types and parsing for kiln.toml files.

mod file;
mod parse;
mod validate;

use std::path::PathBuf;

pub use file::KilnToml;
pub use parse::parse_manifest;
use serde::Deserialize;
pub use validate::{ParseContext, is_php_reserved};

/// Root manifest for kiln.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project layout
    pub project: ProjectConfig,

    /// Messages written into generated inputs
    #[serde(default)]
    pub messages: MessagesConfig,
}

/// The `[project]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Root namespace of the application, e.g. `Admin`
    pub namespace: String,

    /// Directory holding the application modules
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Emit `declare(strict_types=1);` in generated files
    #[serde(default = "default_strict_types")]
    pub strict_types: bool,
}

/// The optional `[messages]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessagesConfig {
    pub value_required: Option<String>,
    /// `sprintf` format with a single `%s`
    pub invalid_confirmation: Option<String>,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_strict_types() -> bool {
    true
}

impl Manifest {
    /// The root namespace without surrounding separators.
    pub fn namespace(&self) -> &str {
        self.project.namespace.trim_matches('\\')
    }
}
