use std::path::{Path, PathBuf};

use kiln_core::{FileRules, GeneratedFile};

use crate::MANIFEST_FILE;

/// A fresh kiln.toml, as written by `kiln init`.
pub struct ManifestTemplate {
    pub namespace: String,
    pub source_dir: String,
    pub strict_types: bool,
    pub force: bool,
}

impl ManifestTemplate {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            source_dir: "src".to_string(),
            strict_types: true,
            force: false,
        }
    }

    pub fn with_source_dir(mut self, source_dir: impl Into<String>) -> Self {
        self.source_dir = source_dir.into();
        self
    }

    pub fn with_strict_types(mut self, strict_types: bool) -> Self {
        self.strict_types = strict_types;
        self
    }

    /// Replace an existing kiln.toml.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

impl GeneratedFile for ManifestTemplate {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(MANIFEST_FILE)
    }

    fn rules(&self) -> FileRules {
        if self.force {
            FileRules::overwrite()
        } else {
            FileRules::default()
        }
    }

    fn render(&self) -> String {
        format!(
            r#"[project]
# Root namespace of the application modules
namespace = '{}'
source_dir = '{}'
strict_types = {}

# Uncomment to change the validation messages of generated inputs:
# [messages]
# value_required = "This field is required and cannot be empty."
# invalid_confirmation = "Please confirm the %s deletion."
"#,
            self.namespace.trim_matches('\\'),
            self.source_dir,
            self.strict_types
        )
    }
}
