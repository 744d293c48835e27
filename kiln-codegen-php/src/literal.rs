//! PHP literal formatting.

/// Quote a string as a single-quoted PHP literal.
///
/// Only `\` and `'` need escaping inside single quotes.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        if c == '\\' || c == '\'' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}
