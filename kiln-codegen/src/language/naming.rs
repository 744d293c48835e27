//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how to transform user-supplied artifact names into type and
/// variable names, and which words the target language reserves.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform an artifact name to a type name (e.g., "book-store" -> "BookStore")
    pub name_to_type: fn(&str) -> String,
    /// Transform an artifact name to a variable name (e.g., "BookStore" -> "bookStore")
    pub name_to_variable: fn(&str) -> String,
    /// Reserved words, compared case-insensitively
    pub reserved_words: &'static [&'static str],
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words
            .iter()
            .any(|word| word.eq_ignore_ascii_case(name))
    }

    /// Transform a name for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        (self.name_to_type)(name)
    }

    /// Transform a name for use as a variable name.
    pub fn variable_name(&self, name: &str) -> String {
        (self.name_to_variable)(name)
    }
}
