//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, MANIFEST_FILE, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a kiln.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a kiln.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    ctx.validate_namespace(&manifest.project.namespace)?;
    ctx.validate_source_dir(&manifest.project.source_dir)?;
    if let Some(format) = &manifest.messages.invalid_confirmation {
        ctx.validate_message_format(format, "invalid_confirmation")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_manifest() {
        let manifest: Manifest = r#"
            [project]
            namespace = "Admin"
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.namespace(), "Admin");
        assert_eq!(manifest.project.source_dir, Path::new("src"));
        assert!(manifest.project.strict_types);
        assert!(manifest.messages.value_required.is_none());
    }

    #[test]
    fn test_full_manifest() {
        let manifest: Manifest = r#"
            [project]
            namespace = 'App\Admin'
            source_dir = "modules"
            strict_types = false

            [messages]
            value_required = "Required."
            invalid_confirmation = "Confirm deleting the %s."
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.namespace(), "App\\Admin");
        assert_eq!(manifest.project.source_dir, Path::new("modules"));
        assert!(!manifest.project.strict_types);
        assert_eq!(manifest.messages.value_required.as_deref(), Some("Required."));
    }

    #[test]
    fn test_missing_project_is_parse_error() {
        let err = "[messages]\n".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = "[project]\nnamespace = \"Admin\"\nlanguage = \"php\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_namespace() {
        let err = "[project]\nnamespace = \"Admin-Panel\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        match *err {
            Error::InvalidNamespace {
                namespace, span, ..
            } => {
                assert_eq!(namespace, "Admin-Panel");
                assert_eq!(span, Some((23, 11).into()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_reserved_namespace_segment() {
        let err = "[project]\nnamespace = 'App\\Function'\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { ref name, .. } if name == "Function"));
    }

    #[test]
    fn test_absolute_source_dir() {
        let err = "[project]\nnamespace = \"Admin\"\nsource_dir = \"/srv/app\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_confirmation_format_needs_placeholder() {
        let err = "[project]\nnamespace = \"Admin\"\n[messages]\ninvalid_confirmation = \"Sure?\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { span: Some(_), .. }));
    }

    #[test]
    fn test_confirmation_format_rejects_stray_percent() {
        let err = "[project]\nnamespace = \"Admin\"\n[messages]\ninvalid_confirmation = \"100% sure about %s?\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { span: Some(_), .. }));

        let manifest = "[project]\nnamespace = \"Admin\"\n[messages]\ninvalid_confirmation = \"%s (100%%)\"\n"
            .parse::<Manifest>()
            .unwrap();
        assert_eq!(
            manifest.messages.invalid_confirmation.as_deref(),
            Some("%s (100%%)")
        );
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::from_file(dir.path().join("kiln.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
