use std::path::{Path, PathBuf};

use kiln_core::GeneratedFile;

use super::{Artifact, ArtifactContext, INPUT_NAMESPACE};
use crate::{
    PhpFile,
    ast::{Method, Param, UseRegistry},
    literal::string_literal,
};

const LAMINAS_INPUT: &str = "Laminas\\InputFilter\\Input";
const STRING_TRIM: &str = "Laminas\\Filter\\StringTrim";
const NOT_EMPTY: &str = "Laminas\\Validator\\NotEmpty";
const IN_ARRAY: &str = "Laminas\\Validator\\InArray";

/// Value a confirmation input accepts.
pub const CONFIRMATION_VALUE: &str = "yes";

/// A required, trimmed text input: `{Name}Input`.
#[derive(Debug, Clone)]
pub struct InputArtifact {
    pub ctx: ArtifactContext,
    pub name: String,
}

impl InputArtifact {
    pub fn new(ctx: ArtifactContext, name: impl Into<String>) -> Self {
        Self {
            ctx,
            name: name.into(),
        }
    }

    fn build(&self) -> PhpFile {
        let mut uses = UseRegistry::for_type(self.class_name());
        let parent = uses.add_class(LAMINAS_INPUT).to_string();
        let trim = uses.add_class(STRING_TRIM).to_string();
        let not_empty = uses.add_class(NOT_EMPTY).to_string();

        let validators = format!(
            "$this->getValidatorChain()\n    ->attachByName({}::class, [\n        'message' => {},\n    ], true);",
            not_empty,
            string_literal(&self.ctx.messages.value_required),
        );

        PhpFile::class(self.namespace(), self.class_name())
            .strict_types(self.ctx.strict_types)
            .extends(parent)
            .uses(uses)
            .add_method(input_constructor(&trim, &validators))
    }
}

impl Artifact for InputArtifact {
    fn class_name(&self) -> String {
        format!("{}Input", self.name)
    }

    fn namespace(&self) -> String {
        self.ctx.namespace(INPUT_NAMESPACE)
    }
}

impl GeneratedFile for InputArtifact {
    fn path(&self, base: &Path) -> PathBuf {
        self.ctx.path(base, INPUT_NAMESPACE, &self.class_name())
    }

    fn render(&self) -> String {
        self.build().render()
    }
}

/// The confirmation checkbox of a delete form: `ConfirmDelete{Name}Input`.
///
/// Only accepts [`CONFIRMATION_VALUE`].
#[derive(Debug, Clone)]
pub struct ConfirmDeleteInput {
    pub ctx: ArtifactContext,
    pub name: String,
}

impl ConfirmDeleteInput {
    pub fn new(ctx: ArtifactContext, name: impl Into<String>) -> Self {
        Self {
            ctx,
            name: name.into(),
        }
    }

    fn build(&self) -> PhpFile {
        let mut uses = UseRegistry::for_type(self.class_name());
        let parent = uses.add_class(LAMINAS_INPUT).to_string();
        let trim = uses.add_class(STRING_TRIM).to_string();
        let not_empty = uses.add_class(NOT_EMPTY).to_string();
        let in_array = uses.add_class(IN_ARRAY).to_string();
        uses.add_function("sprintf");

        let message = format!(
            "sprintf({}, {})",
            string_literal(&self.ctx.messages.invalid_confirmation),
            string_literal(&label(&self.name)),
        );
        let validators = format!(
            "$this->getValidatorChain()\n    ->attachByName({not_empty}::class, [\n        'message' => {message},\n    ], true)\n    ->attachByName({in_array}::class, [\n        'haystack' => [{haystack}],\n        'message' => {message},\n    ], true);",
            haystack = string_literal(CONFIRMATION_VALUE),
        );

        PhpFile::class(self.namespace(), self.class_name())
            .strict_types(self.ctx.strict_types)
            .extends(parent)
            .uses(uses)
            .add_method(input_constructor(&trim, &validators))
    }
}

impl Artifact for ConfirmDeleteInput {
    fn class_name(&self) -> String {
        format!("ConfirmDelete{}Input", self.name)
    }

    fn namespace(&self) -> String {
        self.ctx.namespace(INPUT_NAMESPACE)
    }
}

impl GeneratedFile for ConfirmDeleteInput {
    fn path(&self, base: &Path) -> PathBuf {
        self.ctx.path(base, INPUT_NAMESPACE, &self.class_name())
    }

    fn render(&self) -> String {
        self.build().render()
    }
}

fn input_constructor(trim: &str, validators: &str) -> Method {
    Method::constructor()
        .param(Param::typed("name", "string").nullable().default("null"))
        .param(Param::typed("isRequired", "bool").default("true"))
        .body(format!(
            "parent::__construct($name);\n\n$this->setRequired($isRequired);\n\n$this->getFilterChain()\n    ->attachByName({}::class);\n\n{}",
            trim, validators
        ))
}

/// Human-readable form of a class name: `BookStore` -> `book store`.
fn label(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            out.push(' ');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ArtifactContext {
        ArtifactContext::new("Admin", "Book")
    }

    #[test]
    fn test_label() {
        assert_eq!(label("Book"), "book");
        assert_eq!(label("BookStore"), "book store");
    }

    #[test]
    fn test_input_names_and_path() {
        let input = InputArtifact::new(ctx(), "Title");
        assert_eq!(input.class_name(), "TitleInput");
        assert_eq!(input.fqcn(), "Admin\\Book\\InputFilter\\Input\\TitleInput");
        assert_eq!(
            input.path(Path::new("/app")),
            PathBuf::from("/app/src/Book/src/InputFilter/Input/TitleInput.php")
        );
    }

    #[test]
    fn test_input_uses_configured_message() {
        let mut ctx = ctx();
        ctx.messages.value_required = "Can't be empty".to_string();
        let code = InputArtifact::new(ctx, "Title").render();
        assert!(code.contains("'message' => 'Can\\'t be empty',"));
        assert!(!code.contains("sprintf"));
    }

    #[test]
    fn test_confirm_delete_input() {
        let input = ConfirmDeleteInput::new(ctx(), "Book");
        assert_eq!(input.class_name(), "ConfirmDeleteBookInput");

        let code = input.render();
        assert!(code.contains("class ConfirmDeleteBookInput extends Input\n"));
        assert!(code.contains("use Laminas\\Validator\\InArray;\n\nuse function sprintf;\n"));
        assert!(code.contains("'haystack' => ['yes'],"));
        assert!(code.contains("sprintf('Please confirm the %s deletion.', 'book')"));
    }

    #[test]
    fn test_strict_types_can_be_disabled() {
        let code = InputArtifact::new(ctx().with_strict_types(false), "Title").render();
        assert!(code.starts_with("<?php\n\nnamespace Admin\\Book\\InputFilter\\Input;\n"));
    }
}
