//! Fragments let AST nodes describe their output without owning a buffer.

/// A piece of generated code, relative to the indentation of its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// One line; a newline is appended when rendered.
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// Fragments one level deeper than the parent.
    Indent(Vec<CodeFragment>),
    /// A docblock; multi-line text renders one ` * ` line per line.
    DocComment(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    pub fn doc_comment(s: impl Into<String>) -> Self {
        Self::DocComment(s.into())
    }
}

/// Types that can be turned into code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl Renderable for [CodeFragment] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.to_vec()
    }
}
