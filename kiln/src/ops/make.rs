//! Make operation - scaffold a single PHP artifact.

use std::path::{Path, PathBuf};

use kiln_codegen_php::{
    NameError,
    files::{Artifact, ArtifactContext, Messages},
    validate_artifact_name,
};
use kiln_core::{File, FileRules, GeneratedFile, WriteResult};
use kiln_manifest::Manifest;
use miette::Diagnostic;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    artifact::ArtifactKind,
    reports::{MakeOutcome, MakeReport},
};

/// Why an artifact could not be generated.
#[derive(Debug, Error, Diagnostic)]
pub enum MakeError {
    #[error("invalid {what} name")]
    #[diagnostic(
        code(kiln::invalid_name),
        help("use letters, numbers and underscores, starting with a letter, e.g. 'Book'")
    )]
    InvalidName {
        what: &'static str,
        #[source]
        source: NameError,
    },

    #[error("'{}' already exists", .path.display())]
    #[diagnostic(
        code(kiln::already_exists),
        help("pass --force to overwrite it")
    )]
    AlreadyExists { path: PathBuf },

    #[error("failed to write '{}'", .path.display())]
    #[diagnostic(code(kiln::io))]
    Io {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Options for the make operation.
pub struct MakeOptions<'a> {
    /// Project root the source directory is relative to.
    pub root: &'a Path,
    /// Replace an existing file.
    pub force: bool,
}

/// A rendered artifact ready to be written.
pub struct Plan {
    pub kind: ArtifactKind,
    pub fqcn: String,
    pub path: PathBuf,
    pub content: String,
    /// Whether the target file is already present.
    pub exists: bool,
}

/// Build the artifact context of `module` from the project manifest.
pub fn context(manifest: &Manifest, module: &str) -> ArtifactContext {
    let defaults = Messages::default();
    let messages = Messages {
        value_required: manifest
            .messages
            .value_required
            .clone()
            .unwrap_or(defaults.value_required),
        invalid_confirmation: manifest
            .messages
            .invalid_confirmation
            .clone()
            .unwrap_or(defaults.invalid_confirmation),
    };

    ArtifactContext::new(manifest.namespace(), module)
        .with_source_dir(&manifest.project.source_dir)
        .with_strict_types(manifest.project.strict_types)
        .with_messages(messages)
}

/// Validate the names, resolve the target path and render the artifact.
///
/// Fails with [`MakeError::AlreadyExists`] when the target is present and
/// `force` is off; nothing is written.
pub fn prepare(
    manifest: &Manifest,
    kind: ArtifactKind,
    name: &str,
    module: &str,
    opts: &MakeOptions,
) -> Result<Plan, MakeError> {
    let name = validate_artifact_name(name)
        .map_err(|source| MakeError::InvalidName { what: "artifact", source })?;
    let module = validate_artifact_name(module)
        .map_err(|source| MakeError::InvalidName { what: "module", source })?;

    let artifact: Box<dyn Artifact> = kind.artifact(context(manifest, &module), &name);
    let path = artifact.path(opts.root);
    let exists = artifact.exists(opts.root);
    debug!(kind = kind.name(), path = %path.display(), exists, "resolved artifact");

    if exists && !opts.force {
        return Err(MakeError::AlreadyExists { path });
    }

    Ok(Plan {
        kind,
        fqcn: artifact.fqcn(),
        content: artifact.render(),
        path,
        exists,
    })
}

/// Persist a prepared artifact.
pub fn write(plan: Plan) -> Result<MakeReport, MakeError> {
    let rules = if plan.exists {
        FileRules::overwrite()
    } else {
        FileRules::default()
    };

    let result = File::new(&plan.path, plan.content.as_str())
        .with_rules(rules)
        .write()
        .map_err(|e| MakeError::Io {
            path: plan.path.clone(),
            source: e.into(),
        })?;

    let outcome = match result {
        WriteResult::Written => MakeOutcome::Written,
        WriteResult::Overwritten => MakeOutcome::Overwritten,
        WriteResult::Skipped => MakeOutcome::Skipped,
    };
    info!(path = %plan.path.display(), bytes = plan.content.len(), "artifact persisted");

    Ok(MakeReport::new(plan, outcome))
}

/// Report a prepared artifact without writing it.
pub fn preview(plan: Plan) -> MakeReport {
    MakeReport::new(plan, MakeOutcome::Previewed)
}

/// Report an artifact the user chose not to write.
pub fn abort(plan: Plan) -> MakeReport {
    MakeReport::new(plan, MakeOutcome::Aborted)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn manifest() -> Manifest {
        "[project]\nnamespace = \"Admin\"\n".parse().unwrap()
    }

    fn opts(root: &Path, force: bool) -> MakeOptions<'_> {
        MakeOptions { root, force }
    }

    #[test]
    fn test_prepare_resolves_path_and_names() {
        let tmp = TempDir::new().unwrap();
        let plan = prepare(
            &manifest(),
            ArtifactKind::Service,
            "book",
            "book",
            &opts(tmp.path(), false),
        )
        .unwrap();

        assert_eq!(plan.fqcn, "Admin\\Book\\Service\\BookService");
        assert_eq!(plan.path, tmp.path().join("src/Book/src/Service/BookService.php"));
        assert!(!plan.exists);
        assert!(plan.content.contains("class BookService implements BookServiceInterface"));
    }

    #[test]
    fn test_write_creates_file() {
        let tmp = TempDir::new().unwrap();
        let plan = prepare(
            &manifest(),
            ArtifactKind::ConfirmDeleteInput,
            "Book",
            "Book",
            &opts(tmp.path(), false),
        )
        .unwrap();
        let path = plan.path.clone();
        let content = plan.content.clone();

        let report = write(plan).unwrap();
        assert_eq!(report.outcome, MakeOutcome::Written);
        assert_eq!(std::fs::read_to_string(path).unwrap(), content);
    }

    #[test]
    fn test_existing_file_needs_force() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("src/Book/src/InputFilter/BookInputFilter.php");
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        std::fs::write(&target, "<?php // mine\n").unwrap();

        let err = prepare(
            &manifest(),
            ArtifactKind::InputFilter,
            "Book",
            "Book",
            &opts(tmp.path(), false),
        )
        .err()
        .unwrap();
        assert!(matches!(err, MakeError::AlreadyExists { ref path } if *path == target));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "<?php // mine\n");

        let plan = prepare(
            &manifest(),
            ArtifactKind::InputFilter,
            "Book",
            "Book",
            &opts(tmp.path(), true),
        )
        .unwrap();
        let report = write(plan).unwrap();
        assert_eq!(report.outcome, MakeOutcome::Overwritten);
        assert!(std::fs::read_to_string(&target).unwrap().contains("class BookInputFilter"));
    }

    #[test]
    fn test_invalid_names() {
        let tmp = TempDir::new().unwrap();
        let err = prepare(
            &manifest(),
            ArtifactKind::Input,
            "class",
            "Book",
            &opts(tmp.path(), false),
        )
        .err()
        .unwrap();
        assert!(matches!(
            err,
            MakeError::InvalidName {
                what: "artifact",
                source: NameError::Reserved(_)
            }
        ));

        let err = prepare(
            &manifest(),
            ArtifactKind::Input,
            "Book",
            "9lives",
            &opts(tmp.path(), false),
        )
        .err()
        .unwrap();
        assert!(matches!(err, MakeError::InvalidName { what: "module", .. }));
    }

    #[test]
    fn test_context_uses_manifest_settings() {
        let manifest: Manifest = "[project]\nnamespace = 'App\\Admin'\nsource_dir = \"modules\"\nstrict_types = false\n[messages]\nvalue_required = \"Required.\"\n"
            .parse()
            .unwrap();
        let ctx = context(&manifest, "Book");

        assert_eq!(ctx.module_namespace(), "App\\Admin\\Book");
        assert_eq!(ctx.source_dir, Path::new("modules"));
        assert!(!ctx.strict_types);
        assert_eq!(ctx.messages.value_required, "Required.");
        assert_eq!(
            ctx.messages.invalid_confirmation,
            Messages::default().invalid_confirmation
        );
    }

    #[test]
    fn test_preview_and_abort_write_nothing() {
        let tmp = TempDir::new().unwrap();
        let plan = prepare(
            &manifest(),
            ArtifactKind::Input,
            "Title",
            "Book",
            &opts(tmp.path(), false),
        )
        .unwrap();
        let path = plan.path.clone();
        assert_eq!(preview(plan).outcome, MakeOutcome::Previewed);
        assert!(!path.exists());
    }
}
