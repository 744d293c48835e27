//! PHP-specific naming conventions and artifact name validation.

use kiln_codegen::NamingConvention;
use kiln_core::{to_camel_case, to_pascal_case};
use thiserror::Error;

/// PHP naming conventions.
///
/// Keywords and names PHP reserves for classes, both compared
/// case-insensitively as PHP does.
pub const PHP_NAMING: NamingConvention = NamingConvention {
    name_to_type: to_pascal_case,
    name_to_variable: to_camel_case,
    reserved_words: &[
        "abstract", "and", "array", "as", "bool", "break", "callable", "case", "catch", "class",
        "clone", "const", "continue", "declare", "default", "do", "echo", "else", "elseif",
        "empty", "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "enum",
        "eval", "exit", "extends", "false", "final", "finally", "float", "fn", "for", "foreach",
        "function", "global", "goto", "if", "implements", "include", "include_once", "instanceof",
        "insteadof", "int", "interface", "isset", "iterable", "list", "match", "mixed",
        "namespace", "never", "new", "null", "object", "or", "parent", "print", "private",
        "protected", "public", "readonly", "require", "require_once", "return", "self", "static",
        "string", "switch", "throw", "trait", "true", "try", "unset", "use", "var", "void",
        "while", "xor", "yield",
    ],
};

/// Why a user-supplied name cannot become a PHP class name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name cannot be empty")]
    Empty,
    #[error("'{name}' contains invalid character '{ch}'")]
    InvalidCharacter { name: String, ch: char },
    #[error("'{0}' must start with a letter or underscore")]
    StartsWithDigit(String),
    #[error("'{0}' is a PHP reserved word")]
    Reserved(String),
}

/// Normalize an artifact name to PascalCase and check it is a usable class name.
///
/// Dashes, underscores and spaces act as word separators, so `book-store`
/// and `book_store` both become `BookStore`.
pub fn validate_artifact_name(raw: &str) -> Result<String, NameError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(NameError::Empty);
    }

    let name = PHP_NAMING.type_name(raw);
    check_identifier(&name)?;
    Ok(name)
}

/// Check a `\`-separated namespace such as `Admin\Book`.
pub fn validate_namespace(namespace: &str) -> Result<(), NameError> {
    let namespace = namespace.strip_prefix('\\').unwrap_or(namespace);
    if namespace.is_empty() {
        return Err(NameError::Empty);
    }
    for segment in namespace.split('\\') {
        if segment.is_empty() {
            return Err(NameError::Empty);
        }
        check_identifier(segment)?;
    }
    Ok(())
}

fn check_identifier(name: &str) -> Result<(), NameError> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err(NameError::Empty),
        Some(c) if c.is_ascii_digit() => return Err(NameError::StartsWithDigit(name.to_string())),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return Err(NameError::InvalidCharacter {
                name: name.to_string(),
                ch: c,
            });
        }
        Some(_) => {}
    }

    if let Some(ch) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(NameError::InvalidCharacter {
            name: name.to_string(),
            ch,
        });
    }

    if PHP_NAMING.is_reserved(name) {
        return Err(NameError::Reserved(name.to_string()));
    }

    Ok(())
}
