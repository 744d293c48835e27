//! PhpFile abstraction for structured PHP file generation.
//!
//! Provides a high-level API for generating a PHP file that holds a single
//! class or interface, with its namespace, imports and members.

use indexmap::IndexSet;
use kiln_codegen::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::{Declaration, Method, UseRegistry};

/// Kind of type a file declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
}

/// A structured representation of a PHP source file.
///
/// Renders, in order: the open tag, the `strict_types` declaration, the
/// namespace, the use block, and the type with its members separated by
/// blank lines. Rendering does not consume the model and is repeatable.
///
/// # Example
///
/// ```
/// use kiln_codegen_php::{PhpFile, ast::Method};
///
/// let code = PhpFile::class("App\\Input", "ConfirmDeleteInput")
///     .extends("Input")
///     .use_class("Laminas\\InputFilter\\Input")
///     .add_method(Method::constructor())
///     .render();
///
/// assert!(code.starts_with("<?php\n\ndeclare(strict_types=1);\n\nnamespace App\\Input;\n"));
/// assert!(code.contains("class ConfirmDeleteInput extends Input\n{\n"));
/// ```
#[derive(Debug, Clone)]
pub struct PhpFile {
    namespace: String,
    kind: TypeKind,
    name: String,
    is_final: bool,
    is_abstract: bool,
    is_readonly: bool,
    strict_types: bool,
    extends: IndexSet<String>,
    implements: IndexSet<String>,
    uses: UseRegistry,
    members: Vec<Vec<CodeFragment>>,
}

impl PhpFile {
    fn new(kind: TypeKind, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            namespace: namespace.into(),
            kind,
            uses: UseRegistry::for_type(name.clone()),
            name,
            is_final: false,
            is_abstract: false,
            is_readonly: false,
            strict_types: true,
            extends: IndexSet::new(),
            implements: IndexSet::new(),
            members: Vec::new(),
        }
    }

    /// Create a file declaring a class.
    pub fn class(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(TypeKind::Class, namespace, name)
    }

    /// Create a file declaring an interface.
    pub fn interface(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(TypeKind::Interface, namespace, name)
    }

    /// Set the parent type.
    ///
    /// A class has a single parent (last call wins); an interface may
    /// extend several.
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        if self.kind == TypeKind::Class {
            self.extends.clear();
        }
        self.extends.insert(parent.into());
        self
    }

    /// Add an implemented interface. Ignored for interfaces.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements.insert(interface.into());
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.is_readonly = true;
        self
    }

    /// Toggle the `declare(strict_types=1);` header (on by default).
    pub fn strict_types(mut self, enabled: bool) -> Self {
        self.strict_types = enabled;
        self
    }

    pub fn use_class(mut self, fqn: impl AsRef<str>) -> Self {
        self.uses.add_class(fqn);
        self
    }

    pub fn use_function(mut self, name: impl AsRef<str>) -> Self {
        self.uses.add_function(name);
        self
    }

    pub fn use_constant(mut self, name: impl AsRef<str>) -> Self {
        self.uses.add_constant(name);
        self
    }

    /// Replace the import registry. The declared type's name stays reserved.
    pub fn uses(mut self, mut uses: UseRegistry) -> Self {
        uses.reserve(self.name.clone());
        self.uses = uses;
        self
    }

    /// Add a concrete method.
    pub fn add_method(self, method: Method) -> Self {
        self.add(method)
    }

    /// Add a body-less declaration (interfaces, abstract methods).
    pub fn add_declaration(self, declaration: Declaration) -> Self {
        self.add(declaration)
    }

    /// Add a member element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.members.push(node.to_fragments());
        self
    }

    /// Add multiple member elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.members.push(node.to_fragments());
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Fully-qualified name of the declared type.
    pub fn fqcn(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}\\{}", self.namespace, self.name)
        }
    }

    /// The alias an imported class is referred to by.
    pub fn alias(&self, fqn: &str) -> Option<&str> {
        self.uses.alias(fqn)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Render the whole file.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::php();

        // 1. Open tag and strict types
        builder.push_line("<?php").push_blank();
        if self.strict_types {
            builder.push_line("declare(strict_types=1);").push_blank();
        }

        // 2. Namespace
        if !self.namespace.is_empty() {
            builder
                .push_line(&format!("namespace {};", self.namespace))
                .push_blank();
        }

        // 3. Use block
        if !self.uses.is_empty() {
            builder.emit(&self.uses);
            builder.push_blank();
        }

        // 4. Type signature and members, blank lines between members
        builder.push_line(&self.signature()).push_line("{");
        builder.push_indent();
        for (i, fragments) in self.members.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment);
            }
        }
        builder.push_dedent();
        builder.push_line("}");

        builder.build()
    }

    fn signature(&self) -> String {
        let mut signature = String::new();
        match self.kind {
            TypeKind::Class => {
                if self.is_abstract {
                    signature.push_str("abstract ");
                }
                if self.is_final {
                    signature.push_str("final ");
                }
                if self.is_readonly {
                    signature.push_str("readonly ");
                }
                signature.push_str("class ");
                signature.push_str(&self.name);
                if let Some(parent) = self.extends.first() {
                    signature.push_str(" extends ");
                    signature.push_str(parent);
                }
                if !self.implements.is_empty() {
                    signature.push_str(" implements ");
                    signature.push_str(&join(&self.implements));
                }
            }
            TypeKind::Interface => {
                signature.push_str("interface ");
                signature.push_str(&self.name);
                if !self.extends.is_empty() {
                    signature.push_str(" extends ");
                    signature.push_str(&join(&self.extends));
                }
            }
        }
        signature
    }
}

fn join(names: &IndexSet<String>) -> String {
    names
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Param;

    #[test]
    fn test_empty_class() {
        let code = PhpFile::class("App", "Book").render();
        assert_eq!(
            code,
            "<?php\n\ndeclare(strict_types=1);\n\nnamespace App;\n\nclass Book\n{\n}\n"
        );
    }

    #[test]
    fn test_without_strict_types_and_namespace() {
        let code = PhpFile::class("", "Book").strict_types(false).render();
        assert_eq!(code, "<?php\n\nclass Book\n{\n}\n");
    }

    #[test]
    fn test_confirm_delete_input_file() {
        let ctor = Method::constructor()
            .param(Param::typed("name", "string").nullable().default("null"))
            .body_line("parent::__construct($name);");

        let file = PhpFile::class("App\\Input", "ConfirmDeleteInput")
            .extends("Input")
            .use_class("Laminas\\InputFilter\\Input")
            .use_class("Laminas\\Validator\\InArray")
            .use_class("Laminas\\InputFilter\\Input")
            .add_method(ctor);

        let expected = "\
<?php

declare(strict_types=1);

namespace App\\Input;

use Laminas\\InputFilter\\Input;
use Laminas\\Validator\\InArray;

class ConfirmDeleteInput extends Input
{
    public function __construct(
        ?string $name = null,
    ) {
        parent::__construct($name);
    }
}
";
        assert_eq!(file.render(), expected);
    }

    #[test]
    fn test_members_are_separated_by_one_blank_line() {
        let code = PhpFile::interface("App\\Service", "BookServiceInterface")
            .add_declaration(Declaration::new("count").returns("int"))
            .add_declaration(
                Declaration::new("fetchItem")
                    .param(Param::typed("id", "int"))
                    .returns("array")
                    .nullable(true),
            )
            .render();

        let expected = "\
<?php

declare(strict_types=1);

namespace App\\Service;

interface BookServiceInterface
{
    public function count(): int;

    public function fetchItem(
        int $id,
    ): ?array;
}
";
        assert_eq!(code, expected);
    }

    #[test]
    fn test_class_signature_variants() {
        let code = PhpFile::class("App", "BookService")
            .final_()
            .readonly()
            .extends("Base")
            .extends("AbstractService")
            .implements("BookServiceInterface")
            .implements("Countable")
            .implements("Countable")
            .render();
        assert!(code.contains(
            "final readonly class BookService extends AbstractService implements BookServiceInterface, Countable\n{"
        ));

        let code = PhpFile::class("App", "Base").abstract_().render();
        assert!(code.contains("abstract class Base\n{"));
    }

    #[test]
    fn test_interface_extends_many() {
        let code = PhpFile::interface("App", "Repository")
            .extends("Countable")
            .extends("IteratorAggregate")
            .implements("Ignored")
            .render();
        assert!(code.contains("interface Repository extends Countable, IteratorAggregate\n{"));
        assert!(!code.contains("Ignored"));
    }

    #[test]
    fn test_function_imports_render_after_classes() {
        let code = PhpFile::class("App", "Book")
            .use_function("sprintf")
            .use_class("Laminas\\InputFilter\\Input")
            .render();
        assert!(code.contains(
            "namespace App;\n\nuse Laminas\\InputFilter\\Input;\n\nuse function sprintf;\n\nclass Book\n"
        ));
    }

    #[test]
    fn test_render_is_idempotent() {
        let file = PhpFile::class("App", "Book")
            .use_class("A\\B")
            .add_method(Method::new("run").returns("void"));
        let first = file.render();
        assert_eq!(first, file.render());
        assert_eq!(file.member_count(), 1);
    }

    #[test]
    fn test_fqcn_and_alias() {
        let file = PhpFile::class("Admin\\Book\\Service", "BookService")
            .use_class("Admin\\Book\\Entity\\Book");
        assert_eq!(file.fqcn(), "Admin\\Book\\Service\\BookService");
        assert_eq!(file.alias("Admin\\Book\\Entity\\Book"), Some("Book"));
        assert_eq!(PhpFile::class("", "Book").fqcn(), "Book");
    }

    #[test]
    fn test_import_named_like_declared_class_is_aliased() {
        let code = PhpFile::class("Admin\\Book\\InputFilter", "BookInputFilter")
            .use_class("Other\\InputFilter\\BookInputFilter")
            .render();
        assert!(code.contains(
            "use Other\\InputFilter\\BookInputFilter as InputFilterBookInputFilter;\n"
        ));

        let file = PhpFile::class("App", "Book").uses(UseRegistry::new().use_class("Other\\Book"));
        assert_eq!(file.alias("Other\\Book"), Some("OtherBook"));
    }
}
