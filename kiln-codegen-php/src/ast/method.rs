//! PHP method builder (a declaration with a body).

use std::fmt;

use kiln_codegen::{CodeBuilder, CodeFragment, Renderable};

use super::{Declaration, Param, ReturnType, Visibility};

/// Name PHP reserves for constructors.
pub const CONSTRUCTOR: &str = "__construct";

/// Builder for concrete PHP methods.
///
/// The body is an opaque block of text: values are interpolated by the
/// caller before it is handed over, and each line is indented one level
/// inside the braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    decl: Declaration,
    body: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_declaration(Declaration::new(name))
    }

    /// A public, untyped `__construct`.
    pub fn constructor() -> Self {
        Self::from_declaration(Declaration::new(CONSTRUCTOR).returns(ReturnType::Untyped))
    }

    /// Implement an existing declaration.
    pub fn from_declaration(decl: Declaration) -> Self {
        Self {
            decl,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.decl = self.decl.doc(doc);
        self
    }

    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.decl = self.decl.attribute(attribute);
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.decl = self.decl.visibility(visibility);
        self
    }

    pub fn static_(mut self) -> Self {
        self.decl = self.decl.static_();
        self
    }

    pub fn final_(mut self) -> Self {
        self.decl = self.decl.final_();
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.decl = self.decl.param(param);
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.decl = self.decl.nullable(nullable);
        self
    }

    pub fn returns(mut self, return_type: impl Into<ReturnType>) -> Self {
        self.decl = self.decl.returns(return_type);
        self
    }

    /// Add a line to the method body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: impl Into<String>) -> Self {
        for line in content.into().lines() {
            self.body.push(line.to_string());
        }
        self
    }

    pub fn declaration(&self) -> &Declaration {
        &self.decl
    }

    pub fn is_constructor(&self) -> bool {
        self.decl.name() == CONSTRUCTOR
    }

    /// Render the method with its body.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::php();
        builder.emit(self);
        builder.build().trim_end().to_string()
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.decl.signature_fragments(Some(&self.body))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
