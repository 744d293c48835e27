use std::path::{Path, PathBuf};

use kiln_core::GeneratedFile;

use super::{Artifact, ArtifactContext, ConfirmDeleteInput, INPUT_FILTER_NAMESPACE};
use crate::{
    PhpFile,
    ast::{Method, UseRegistry},
    literal::string_literal,
};

const LAMINAS_INPUT_FILTER: &str = "Laminas\\InputFilter\\InputFilter";

/// Field name the confirmation input is registered under.
pub const CONFIRMATION_FIELD: &str = "confirmation";

/// An input filter composed of inputs: `{Name}InputFilter`.
///
/// Without explicit inputs it holds the module's `ConfirmDelete{Name}Input`.
#[derive(Debug, Clone)]
pub struct InputFilterArtifact {
    pub ctx: ArtifactContext,
    pub name: String,
    /// (fully-qualified input class, field name)
    pub inputs: Vec<(String, String)>,
}

impl InputFilterArtifact {
    pub fn new(ctx: ArtifactContext, name: impl Into<String>) -> Self {
        Self {
            ctx,
            name: name.into(),
            inputs: Vec::new(),
        }
    }

    /// Add an input class registered under `field`.
    pub fn with_input(mut self, fqcn: impl Into<String>, field: impl Into<String>) -> Self {
        self.inputs.push((fqcn.into(), field.into()));
        self
    }

    fn inputs(&self) -> Vec<(String, String)> {
        if !self.inputs.is_empty() {
            return self.inputs.clone();
        }
        let confirm = ConfirmDeleteInput::new(self.ctx.clone(), self.name.clone());
        vec![(confirm.fqcn(), CONFIRMATION_FIELD.to_string())]
    }

    fn build(&self) -> PhpFile {
        let mut uses = UseRegistry::for_type(self.class_name());
        let parent = uses.add_class(LAMINAS_INPUT_FILTER).to_string();

        let mut ctor = Method::constructor();
        for (fqcn, field) in self.inputs() {
            let alias = uses.add_class(&fqcn);
            ctor = ctor.body_line(format!(
                "$this->add(new {}({}));",
                alias,
                string_literal(&field)
            ));
        }

        PhpFile::class(self.namespace(), self.class_name())
            .strict_types(self.ctx.strict_types)
            .extends(parent)
            .uses(uses)
            .add_method(ctor)
    }
}

impl Artifact for InputFilterArtifact {
    fn class_name(&self) -> String {
        format!("{}InputFilter", self.name)
    }

    fn namespace(&self) -> String {
        self.ctx.namespace(INPUT_FILTER_NAMESPACE)
    }
}

impl GeneratedFile for InputFilterArtifact {
    fn path(&self, base: &Path) -> PathBuf {
        self.ctx.path(base, INPUT_FILTER_NAMESPACE, &self.class_name())
    }

    fn render(&self) -> String {
        self.build().render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input() {
        let filter = InputFilterArtifact::new(ArtifactContext::new("Admin", "Book"), "Book");
        let code = filter.render();
        assert!(code.contains("use Admin\\Book\\InputFilter\\Input\\ConfirmDeleteBookInput;\n"));
        assert!(code.contains("class BookInputFilter extends InputFilter\n"));
        assert!(code.contains(
            "    public function __construct()\n    {\n        $this->add(new ConfirmDeleteBookInput('confirmation'));\n    }\n"
        ));
    }

    #[test]
    fn test_explicit_inputs_in_order() {
        let filter = InputFilterArtifact::new(ArtifactContext::new("Admin", "Book"), "Book")
            .with_input("Admin\\Book\\InputFilter\\Input\\TitleInput", "title")
            .with_input("Admin\\Author\\InputFilter\\Input\\TitleInput", "authorTitle");
        let code = filter.render();
        assert!(code.contains("use Admin\\Author\\InputFilter\\Input\\TitleInput as InputTitleInput;"));
        let title = code.find("new TitleInput('title')").unwrap();
        let author = code.find("new InputTitleInput('authorTitle')").unwrap();
        assert!(title < author);
        assert!(!code.contains("ConfirmDelete"));
    }

    #[test]
    fn test_input_sharing_the_filter_name() {
        let filter = InputFilterArtifact::new(ArtifactContext::new("Admin", "Book"), "Book")
            .with_input("Admin\\Legacy\\BookInputFilter", "legacy");
        let code = filter.render();
        assert!(code.contains("use Admin\\Legacy\\BookInputFilter as LegacyBookInputFilter;\n"));
        assert!(code.contains("$this->add(new LegacyBookInputFilter('legacy'));"));
        assert!(code.contains("class BookInputFilter extends InputFilter\n"));
    }

    #[test]
    fn test_path() {
        let filter = InputFilterArtifact::new(ArtifactContext::new("Admin", "Book"), "Book");
        assert_eq!(
            filter.path(Path::new(".")),
            PathBuf::from("./src/Book/src/InputFilter/BookInputFilter.php")
        );
    }
}
