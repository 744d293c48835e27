use super::{CodeFragment, Indent, Renderable};

/// Line buffer that tracks the current indentation level.
///
/// ```
/// use kiln_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::php();
/// builder
///     .push_line("if ($ready) {")
///     .push_indent()
///     .push_line("return;")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "if ($ready) {\n    return;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// A builder indenting with four spaces.
    pub fn php() -> Self {
        Self::new(Indent::PSR12)
    }

    /// Append a line at the current level. Empty lines carry no indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.indent.write_to(&mut self.buffer, self.level);
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Render every fragment of `node` at the current level.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in &node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: &CodeFragment) {
        match fragment {
            CodeFragment::Line(line) => {
                self.push_line(line);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Indent(children) => {
                self.push_indent();
                for child in children {
                    self.apply_fragment(child);
                }
                self.push_dedent();
            }
            CodeFragment::DocComment(text) => self.push_doc_comment(text),
        }
    }

    /// A docblock: `/** text */` for one line, otherwise one ` * ` line each.
    fn push_doc_comment(&mut self, text: &str) {
        // `*/` would close the comment early
        let text = text.replace("*/", "*\\/");
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        if let [line] = lines.as_slice() {
            self.push_line(&format!("/** {} */", line));
            return;
        }
        self.push_line("/**");
        for line in lines {
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {}", line));
            }
        }
        self.push_line(" */");
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Getter;

    impl Renderable for Getter {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![
                CodeFragment::doc_comment("Load the entity"),
                CodeFragment::line("public function load(): void"),
                CodeFragment::line("{"),
                CodeFragment::indent(vec![CodeFragment::line("return;")]),
                CodeFragment::line("}"),
            ]
        }
    }

    #[test]
    fn test_blank_lines_are_not_indented() {
        let mut builder = CodeBuilder::php();
        builder
            .push_indent()
            .push_line("$a = 1;")
            .push_line("")
            .push_blank()
            .push_line("$b = 2;");
        assert_eq!(builder.build(), "    $a = 1;\n\n\n    $b = 2;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::php();
        builder.push_dedent().push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_emit_nests_inside_current_level() {
        let mut builder = CodeBuilder::php();
        builder.push_line("{").push_indent().emit(&Getter).push_dedent().push_line("}");

        assert_eq!(
            builder.build(),
            "{\n    /** Load the entity */\n    public function load(): void\n    {\n        return;\n    }\n}\n"
        );
    }

    #[test]
    fn test_multiline_doc_comment() {
        let mut builder = CodeBuilder::php();
        builder
            .push_indent()
            .apply_fragment(&CodeFragment::doc_comment("Find a book\n\n@throws NotFound"));
        assert_eq!(
            builder.build(),
            "    /**\n     * Find a book\n     *\n     * @throws NotFound\n     */\n"
        );
    }

    #[test]
    fn test_doc_comment_cannot_close_early() {
        let mut builder = CodeBuilder::php();
        builder.apply_fragment(&CodeFragment::doc_comment("a */ b"));
        assert_eq!(builder.build(), "/** a *\\/ b */\n");
    }

    #[test]
    fn test_tab_indent() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.push_indent().push_line("return;");
        assert_eq!(builder.build(), "\treturn;\n");
    }
}
