/// Indentation unit of generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
    Tab,
}

impl Indent {
    /// Four spaces, as PSR-12 requires.
    pub const PSR12: Self = Self::Spaces(4);

    /// Append `level` units of indentation to `buf`.
    pub fn write_to(&self, buf: &mut String, level: usize) {
        match self {
            Self::Spaces(width) => buf.extend(std::iter::repeat_n(' ', width * level)),
            Self::Tab => buf.extend(std::iter::repeat_n('\t', level)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PSR12
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to() {
        let mut buf = String::new();
        Indent::PSR12.write_to(&mut buf, 2);
        assert_eq!(buf, "        ");

        let mut buf = String::new();
        Indent::Tab.write_to(&mut buf, 1);
        Indent::Spaces(2).write_to(&mut buf, 0);
        assert_eq!(buf, "\t");
    }
}
