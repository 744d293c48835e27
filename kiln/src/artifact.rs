//! Unified artifact dispatch.
//!
//! Centralizes artifact kind metadata and builder creation.

use clap::ValueEnum;
use kiln_codegen_php::files::{
    Artifact, ArtifactContext, ConfirmDeleteInput, INPUT_FILTER_NAMESPACE, INPUT_NAMESPACE,
    InputArtifact, InputFilterArtifact, SERVICE_NAMESPACE, ServiceArtifact,
    ServiceInterfaceArtifact,
};
use serde::Serialize;

/// Kind of PHP artifact `kiln make` can scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Input,
    ConfirmDeleteInput,
    InputFilter,
    ServiceInterface,
    Service,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Input,
        ArtifactKind::ConfirmDeleteInput,
        ArtifactKind::InputFilter,
        ArtifactKind::ServiceInterface,
        ArtifactKind::Service,
    ];

    /// Name as written on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::ConfirmDeleteInput => "confirm-delete-input",
            Self::InputFilter => "input-filter",
            Self::ServiceInterface => "service-interface",
            Self::Service => "service",
        }
    }

    /// Namespace below the module the artifact is declared in.
    pub fn namespace_suffix(&self) -> &'static str {
        match self {
            Self::Input | Self::ConfirmDeleteInput => INPUT_NAMESPACE,
            Self::InputFilter => INPUT_FILTER_NAMESPACE,
            Self::ServiceInterface | Self::Service => SERVICE_NAMESPACE,
        }
    }

    /// Class name with `{Name}` standing for the artifact name.
    pub fn class_pattern(&self) -> &'static str {
        match self {
            Self::Input => "{Name}Input",
            Self::ConfirmDeleteInput => "ConfirmDelete{Name}Input",
            Self::InputFilter => "{Name}InputFilter",
            Self::ServiceInterface => "{Name}ServiceInterface",
            Self::Service => "{Name}Service",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Input => "Required, trimmed input",
            Self::ConfirmDeleteInput => "Input confirming a deletion",
            Self::InputFilter => "Input filter holding the confirmation input",
            Self::ServiceInterface => "Service contract over a repository",
            Self::Service => "Service implementation with an injected repository",
        }
    }

    /// Create the artifact builder for `name` in the module of `ctx`.
    pub fn artifact(&self, ctx: ArtifactContext, name: &str) -> Box<dyn Artifact> {
        match self {
            Self::Input => Box::new(InputArtifact::new(ctx, name)),
            Self::ConfirmDeleteInput => Box::new(ConfirmDeleteInput::new(ctx, name)),
            Self::InputFilter => Box::new(InputFilterArtifact::new(ctx, name)),
            Self::ServiceInterface => Box::new(ServiceInterfaceArtifact::new(ctx, name)),
            Self::Service => Box::new(ServiceArtifact::new(ctx, name)),
        }
    }
}
