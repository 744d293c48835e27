//! PHP member declarations (signatures without a body).

use std::fmt;

use kiln_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::{Param, Visibility};

/// Return type of a declaration.
///
/// `void` is kept apart from a missing type: an untyped member renders no
/// suffix at all, while `void` always renders `: void`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReturnType {
    #[default]
    Untyped,
    Void,
    Named(String),
}

impl From<&str> for ReturnType {
    fn from(ty: &str) -> Self {
        match ty {
            "" => Self::Untyped,
            "void" => Self::Void,
            named => Self::Named(named.to_string()),
        }
    }
}

impl From<String> for ReturnType {
    fn from(ty: String) -> Self {
        Self::from(ty.as_str())
    }
}

/// Format the return type suffix of a signature.
pub fn render_return_type(return_type: &ReturnType, nullable: bool) -> String {
    match return_type {
        ReturnType::Untyped => String::new(),
        ReturnType::Void => ": void".to_string(),
        ReturnType::Named(ty) if nullable => format!(": ?{}", ty),
        ReturnType::Named(ty) => format!(": {}", ty),
    }
}

/// A method signature, as found in interfaces and abstract classes.
///
/// # Example
///
/// ```
/// use kiln_codegen_php::ast::{Declaration, Param};
///
/// let decl = Declaration::new("fetchItem")
///     .param(Param::typed("id", "int"))
///     .returns("array")
///     .nullable(true);
///
/// assert_eq!(
///     decl.render(),
///     "public function fetchItem(\n    int $id,\n): ?array;"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    name: String,
    doc: Option<String>,
    attributes: Vec<String>,
    visibility: Visibility,
    is_static: bool,
    is_abstract: bool,
    is_final: bool,
    params: Vec<Param>,
    nullable: bool,
    return_type: ReturnType,
}

impl Declaration {
    /// Create a public, untyped declaration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attributes: Vec::new(),
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
            is_final: false,
            params: Vec::new(),
            nullable: false,
            return_type: ReturnType::Untyped,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add an attribute line, without the `#[` `]` delimiters.
    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn protected(self) -> Self {
        self.visibility(Visibility::Protected)
    }

    pub fn private(self) -> Self {
        self.visibility(Visibility::Private)
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Set the return type: `""` for untyped, `"void"`, or a type name.
    pub fn returns(mut self, return_type: impl Into<ReturnType>) -> Self {
        self.return_type = return_type.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Param] {
        &self.params
    }

    pub fn return_type(&self) -> &ReturnType {
        &self.return_type
    }

    /// The return type suffix, e.g. `: ?array`.
    pub fn render_signature(&self) -> String {
        render_return_type(&self.return_type, self.nullable)
    }

    /// Render the declaration, terminated by `;`.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::php();
        builder.emit(self);
        builder.build().trim_end().to_string()
    }

    /// `final public static function name(`, without the parameters.
    fn head(&self) -> String {
        let mut head = String::new();
        if self.is_abstract {
            head.push_str("abstract ");
        }
        if self.is_final {
            head.push_str("final ");
        }
        head.push_str(self.visibility.as_str());
        if self.is_static {
            head.push_str(" static");
        }
        head.push_str(" function ");
        head.push_str(&self.name);
        head.push('(');
        head
    }

    /// Build the fragments for the signature followed by either `;` or a body.
    ///
    /// Without parameters the signature fits on one line and the opening
    /// brace goes on the next one; with parameters every parameter gets its
    /// own comma-terminated line and the brace follows the closing paren.
    pub(crate) fn signature_fragments(&self, body: Option<&[String]>) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::DocComment(doc.clone()));
        }
        for attribute in &self.attributes {
            fragments.push(CodeFragment::Line(format!("#[{}]", attribute)));
        }

        let suffix = self.render_signature();
        let head = self.head();

        if self.params.is_empty() {
            match body {
                None => fragments.push(CodeFragment::Line(format!("{}){};", head, suffix))),
                Some(_) => {
                    fragments.push(CodeFragment::Line(format!("{}){}", head, suffix)));
                    fragments.push(CodeFragment::line("{"));
                }
            }
        } else {
            fragments.push(CodeFragment::Line(head));
            fragments.push(CodeFragment::Indent(
                self.params
                    .iter()
                    .map(|p| CodeFragment::Line(format!("{},", p.render())))
                    .collect(),
            ));
            match body {
                None => fragments.push(CodeFragment::Line(format!("){};", suffix))),
                Some(_) => fragments.push(CodeFragment::Line(format!("){} {{", suffix))),
            }
        }

        if let Some(lines) = body {
            fragments.push(CodeFragment::Indent(
                lines.iter().map(|l| CodeFragment::Line(l.clone())).collect(),
            ));
            fragments.push(CodeFragment::line("}"));
        }

        fragments
    }
}

impl Renderable for Declaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.signature_fragments(None)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
