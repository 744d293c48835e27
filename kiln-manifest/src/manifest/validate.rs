//! Validation of manifest values.

use std::path::Path;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "kiln.toml");
/// ctx.validate_namespace("Admin")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    src: &'a str,
    source: SourceContext,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            source: SourceContext::new(src, filename),
        }
    }

    /// Find the span of a string value in the source.
    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.src, value)
    }

    /// Validate a `\`-separated PHP namespace.
    pub fn validate_namespace(&self, namespace: &str) -> Result<()> {
        let span = self.find_span(namespace);
        let trimmed = namespace.trim_matches('\\');
        if trimmed.is_empty() {
            return Err(self.source.invalid_namespace_error(
                namespace,
                "namespace cannot be empty",
                span,
            ));
        }

        for segment in trimmed.split('\\') {
            if is_php_reserved(segment) {
                return Err(self
                    .source
                    .reserved_keyword_error(segment, self.find_span(segment).or(span)));
            }
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.source.invalid_namespace_error(namespace, reason, span));
            }
        }
        Ok(())
    }

    /// Validate that the source directory stays inside the project.
    pub fn validate_source_dir(&self, source_dir: &Path) -> Result<()> {
        let display = source_dir.display().to_string();
        if source_dir.as_os_str().is_empty() {
            return Err(self
                .source
                .validation_error("source_dir cannot be empty", None));
        }
        if source_dir.is_absolute() || source_dir.starts_with("/") {
            return Err(self.source.validation_error(
                "source_dir must be relative to the project root",
                self.find_span(&display),
            ));
        }
        Ok(())
    }

    /// Validate a `sprintf` format taking exactly one `%s`.
    ///
    /// `%%` is a literal percent sign; any other conversion is rejected.
    pub fn validate_message_format(&self, format: &str, key: &str) -> Result<()> {
        if string_placeholders(format) != Some(1) {
            return Err(self.source.validation_error(
                format!(
                    "{} must contain exactly one '%s' (write '%%' for a literal '%')",
                    key
                ),
                self.find_span(format),
            ));
        }
        Ok(())
    }
}

/// Number of `%s` conversions in a `sprintf` format, or `None` if it holds
/// any other conversion.
fn string_placeholders(format: &str) -> Option<usize> {
    let mut count = 0;
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            continue;
        }
        match chars.next()? {
            's' => count += 1,
            '%' => {}
            _ => return None,
        }
    }
    Some(count)
}

/// PHP reserved words that cannot be used as namespace segments.
/// Source: https://www.php.net/manual/en/reserved.php
pub(crate) const PHP_KEYWORDS: &[&str] = &[
    "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class", "clone",
    "const", "continue", "declare", "default", "do", "echo", "else", "elseif", "empty",
    "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "enum", "eval",
    "exit", "extends", "final", "finally", "fn", "for", "foreach", "function", "global", "goto",
    "if", "implements", "include", "include_once", "instanceof", "insteadof", "interface",
    "isset", "list", "match", "namespace", "new", "or", "print", "private", "protected", "public",
    "readonly", "require", "require_once", "return", "static", "switch", "throw", "trait", "try",
    "unset", "use", "var", "while", "xor", "yield",
    // Reserved class names
    "bool", "false", "float", "int", "iterable", "mixed", "never", "null", "object", "parent",
    "self", "string", "true", "void",
];

/// Check if a name is a PHP reserved word (case-insensitive, like PHP)
pub fn is_php_reserved(name: &str) -> bool {
    PHP_KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(name))
}

/// Find the span of a string value in the TOML source.
///
/// Basic strings escape backslashes, so the doubled form is tried as well.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }
    if let Some(pos) = src.find(value) {
        return Some(SourceSpan::from((pos, value.len())));
    }
    let escaped = value.replace('\\', "\\\\");
    src.find(&escaped)
        .map(|pos| SourceSpan::from((pos, escaped.len())))
}

/// Validate a single PHP identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("segments cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("segments must start with a letter or underscore"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("segments must contain only letters, numbers and underscores");
    }

    None
}
