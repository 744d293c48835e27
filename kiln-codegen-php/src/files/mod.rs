//! Scaffolded PHP artifacts.
//!
//! Every artifact is a [`GeneratedFile`] rooted in a module of a Laminas
//! application: module `Book` of root namespace `Admin` lives under
//! `{source_dir}/Book/src` with namespace `Admin\Book`.

use std::path::{Path, PathBuf};

use kiln_core::GeneratedFile;

mod input;
mod input_filter;
mod service;
mod service_interface;

pub use input::{ConfirmDeleteInput, InputArtifact};
pub use input_filter::InputFilterArtifact;
pub use service::ServiceArtifact;
pub use service_interface::ServiceInterfaceArtifact;

/// Namespace suffix of input classes.
pub const INPUT_NAMESPACE: &str = "InputFilter\\Input";
/// Namespace suffix of input filters.
pub const INPUT_FILTER_NAMESPACE: &str = "InputFilter";
/// Namespace suffix of services and their interfaces.
pub const SERVICE_NAMESPACE: &str = "Service";
/// Namespace suffix of entities.
pub const ENTITY_NAMESPACE: &str = "Entity";
/// Namespace suffix of repositories.
pub const REPOSITORY_NAMESPACE: &str = "Repository";

/// Validation messages written into generated inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Message of the `NotEmpty` validator
    pub value_required: String,
    /// `sprintf` format of the confirmation message; `%s` receives the entity label
    pub invalid_confirmation: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            value_required: "This field is required and cannot be empty.".to_string(),
            invalid_confirmation: "Please confirm the %s deletion.".to_string(),
        }
    }
}

/// Where and how artifacts of one module are generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactContext {
    pub root_namespace: String,
    pub module: String,
    pub source_dir: PathBuf,
    pub strict_types: bool,
    pub messages: Messages,
}

impl ArtifactContext {
    pub fn new(root_namespace: impl Into<String>, module: impl Into<String>) -> Self {
        let root_namespace: String = root_namespace.into();
        Self {
            root_namespace: root_namespace.trim_matches('\\').to_string(),
            module: module.into(),
            source_dir: PathBuf::from("src"),
            strict_types: true,
            messages: Messages::default(),
        }
    }

    pub fn with_source_dir(mut self, source_dir: impl Into<PathBuf>) -> Self {
        self.source_dir = source_dir.into();
        self
    }

    pub fn with_strict_types(mut self, strict_types: bool) -> Self {
        self.strict_types = strict_types;
        self
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Namespace of the module itself, e.g. `Admin\Book`.
    pub fn module_namespace(&self) -> String {
        if self.root_namespace.is_empty() {
            self.module.clone()
        } else {
            format!("{}\\{}", self.root_namespace, self.module)
        }
    }

    /// Namespace below the module, e.g. `Admin\Book\Service`.
    pub fn namespace(&self, suffix: &str) -> String {
        if suffix.is_empty() {
            self.module_namespace()
        } else {
            format!("{}\\{}", self.module_namespace(), suffix)
        }
    }

    /// Fully-qualified name of a class below the module.
    pub fn fqcn(&self, suffix: &str, class: &str) -> String {
        format!("{}\\{}", self.namespace(suffix), class)
    }

    /// Path of a class file below the module's `src` directory.
    pub fn path(&self, base: &Path, suffix: &str, class: &str) -> PathBuf {
        let mut path = base.join(&self.source_dir).join(&self.module).join("src");
        for segment in suffix.split('\\').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.php", class));
        path
    }
}

/// A generated PHP class or interface.
pub trait Artifact: GeneratedFile {
    /// Short name of the declared type
    fn class_name(&self) -> String;

    /// Namespace the type is declared in
    fn namespace(&self) -> String;

    /// Fully-qualified name of the declared type
    fn fqcn(&self) -> String {
        format!("{}\\{}", self.namespace(), self.class_name())
    }
}
