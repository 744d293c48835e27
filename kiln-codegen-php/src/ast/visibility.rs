//! PHP member visibility.

use std::fmt;

/// Access modifier of a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// The PHP keyword for this visibility.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(Visibility::Public.as_str(), "public");
        assert_eq!(Visibility::Protected.as_str(), "protected");
        assert_eq!(Visibility::Private.to_string(), "private");
    }

    #[test]
    fn test_default_is_public() {
        assert_eq!(Visibility::default(), Visibility::Public);
    }
}
