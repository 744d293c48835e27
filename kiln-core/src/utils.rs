//! Shared utility functions for deriving PHP names.

/// Convert a string to PascalCase (e.g., "confirm_delete" -> "ConfirmDelete").
///
/// Underscores, dashes and whitespace separate words; the casing inside a
/// word is kept, so names that are already PascalCase pass through unchanged.
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "BookTitle" -> "bookTitle")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}
