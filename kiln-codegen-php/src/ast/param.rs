//! PHP function parameter.

use std::fmt;

use super::Visibility;

/// Constructor property promotion (`private readonly Foo $foo`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Promotion {
    pub visibility: Visibility,
    pub readonly: bool,
}

/// A formal parameter of a PHP function or method.
///
/// Renders as `[promotion ][?type ][&][...]$name[ = default]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    name: String,
    ty: Option<String>,
    nullable: bool,
    default: Option<String>,
    by_reference: bool,
    variadic: bool,
    promoted: Option<Promotion>,
}

impl Param {
    /// Create an untyped parameter. A leading `$` is accepted and dropped.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let name = match name.strip_prefix('$') {
            Some(stripped) => stripped.to_string(),
            None => name,
        };
        Self {
            name,
            ty: None,
            nullable: false,
            default: None,
            by_reference: false,
            variadic: false,
            promoted: None,
        }
    }

    /// Create a typed parameter.
    pub fn typed(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::new(name).ty(ty)
    }

    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Prefix the type with `?`.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Set the default value, written verbatim (e.g. `null`, `true`, `'yes'`).
    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn by_reference(mut self) -> Self {
        self.by_reference = true;
        self
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Promote the parameter to a property with the given visibility.
    pub fn promoted(mut self, visibility: Visibility) -> Self {
        self.promoted = Some(Promotion {
            visibility,
            readonly: false,
        });
        self
    }

    /// Promote the parameter to a readonly property.
    pub fn readonly(mut self, visibility: Visibility) -> Self {
        self.promoted = Some(Promotion {
            visibility,
            readonly: true,
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Render the parameter fragment.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Some(promotion) = &self.promoted {
            out.push_str(promotion.visibility.as_str());
            out.push(' ');
            if promotion.readonly {
                out.push_str("readonly ");
            }
        }

        if let Some(ty) = &self.ty {
            if self.nullable {
                out.push('?');
            }
            out.push_str(ty);
            out.push(' ');
        }

        if self.by_reference {
            out.push('&');
        }
        if self.variadic {
            out.push_str("...");
        }
        out.push('$');
        out.push_str(&self.name);

        if let Some(default) = &self.default {
            out.push_str(" = ");
            out.push_str(default);
        }

        out
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
