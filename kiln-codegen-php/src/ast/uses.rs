//! PHP `use` statement registry.

use indexmap::{IndexMap, IndexSet};
use kiln_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Tracks the names a file imports and deduplicates them.
///
/// Maintains first-seen order for deterministic output. Every class import
/// is mapped to the short alias generated code must use to refer to it.
///
/// # Example
///
/// ```
/// use kiln_codegen_php::ast::UseRegistry;
///
/// let uses = UseRegistry::new()
///     .use_class("Laminas\\InputFilter\\Input")
///     .use_class("Laminas\\Validator\\NotEmpty")
///     .use_class("Laminas\\InputFilter\\Input")
///     .use_function("sprintf");
///
/// assert_eq!(uses.alias("Laminas\\Validator\\NotEmpty"), Some("NotEmpty"));
/// assert_eq!(
///     uses.render(),
///     "use Laminas\\InputFilter\\Input;\nuse Laminas\\Validator\\NotEmpty;\n\nuse function sprintf;\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UseRegistry {
    /// Fully-qualified class name -> alias
    classes: IndexMap<String, String>,
    functions: IndexSet<String>,
    constants: IndexSet<String>,
    /// Names declared by the file itself; never handed out as aliases.
    reserved: IndexSet<String>,
}

impl UseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry for a file declaring `name`.
    pub fn for_type(name: impl Into<String>) -> Self {
        let mut uses = Self::new();
        uses.reserve(name);
        uses
    }

    /// Keep `name` from being used as an alias.
    ///
    /// An import already aliased as `name` is given a new alias.
    pub fn reserve(&mut self, name: impl Into<String>) {
        let name = name.into();
        let clashing: Vec<String> = self
            .classes
            .iter()
            .filter(|(_, alias)| alias.eq_ignore_ascii_case(&name))
            .map(|(fqn, _)| fqn.clone())
            .collect();
        self.reserved.insert(name);
        for fqn in clashing {
            if let Some(alias) = self.classes.get_mut(&fqn) {
                alias.clear();
            }
            let alias = self.free_alias(&fqn);
            self.classes.insert(fqn, alias);
        }
    }

    /// Import a class.
    pub fn use_class(mut self, fqn: impl AsRef<str>) -> Self {
        self.add_class(fqn);
        self
    }

    /// Import a function (`use function ...;`).
    pub fn use_function(mut self, name: impl AsRef<str>) -> Self {
        self.add_function(name);
        self
    }

    /// Import a constant (`use const ...;`).
    pub fn use_constant(mut self, name: impl AsRef<str>) -> Self {
        self.add_constant(name);
        self
    }

    /// Import a class and return the alias to refer to it by.
    pub fn add_class(&mut self, fqn: impl AsRef<str>) -> &str {
        let fqn = normalize(fqn.as_ref());
        if !self.classes.contains_key(&fqn) {
            let alias = self.free_alias(&fqn);
            self.classes.insert(fqn.clone(), alias);
        }
        &self.classes[&fqn]
    }

    pub fn add_function(&mut self, name: impl AsRef<str>) {
        self.functions.insert(normalize(name.as_ref()));
    }

    pub fn add_constant(&mut self, name: impl AsRef<str>) {
        self.constants.insert(normalize(name.as_ref()));
    }

    /// The alias an imported class is referred to by.
    pub fn alias(&self, fqn: &str) -> Option<&str> {
        self.classes.get(normalize(fqn).as_str()).map(String::as_str)
    }

    pub fn contains_class(&self, fqn: &str) -> bool {
        self.classes.contains_key(normalize(fqn).as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.functions.is_empty() && self.constants.is_empty()
    }

    /// Total number of use statements.
    pub fn len(&self) -> usize {
        self.classes.len() + self.functions.len() + self.constants.len()
    }

    /// Render the use block: classes, then functions, then constants,
    /// each group separated by a blank line.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::php();
        builder.emit(self);
        builder.build()
    }

    /// Pick an alias that no earlier import uses.
    ///
    /// Defaults to the last segment; on collision the previous segment is
    /// prepended, then a counter is appended.
    fn free_alias(&self, fqn: &str) -> String {
        let mut segments = fqn.rsplit('\\');
        let short = segments.next().unwrap_or(fqn).to_string();
        if !self.alias_taken(&short) {
            return short;
        }

        let qualified = match segments.next() {
            Some(parent) => format!("{}{}", parent, short),
            None => short.clone(),
        };
        if !self.alias_taken(&qualified) {
            return qualified;
        }

        let mut n = 2;
        loop {
            let candidate = format!("{}{}", qualified, n);
            if !self.alias_taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    // PHP class names are case-insensitive
    fn alias_taken(&self, alias: &str) -> bool {
        self.classes
            .values()
            .chain(&self.reserved)
            .any(|taken| taken.eq_ignore_ascii_case(alias))
    }

    fn class_lines(&self) -> Vec<CodeFragment> {
        self.classes
            .iter()
            .map(|(fqn, alias)| {
                let short = fqn.rsplit('\\').next().unwrap_or(fqn);
                if short == alias {
                    CodeFragment::Line(format!("use {};", fqn))
                } else {
                    CodeFragment::Line(format!("use {} as {};", fqn, alias))
                }
            })
            .collect()
    }
}

/// Strip the leading namespace separator: `\Foo\Bar` and `Foo\Bar` are the same import.
fn normalize(name: &str) -> String {
    name.strip_prefix('\\').unwrap_or(name).to_string()
}

impl Renderable for UseRegistry {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let groups = [
            self.class_lines(),
            self.functions
                .iter()
                .map(|f| CodeFragment::Line(format!("use function {};", f)))
                .collect(),
            self.constants
                .iter()
                .map(|c| CodeFragment::Line(format!("use const {};", c)))
                .collect(),
        ];

        let mut fragments = Vec::new();
        for group in groups.into_iter().filter(|g| !g.is_empty()) {
            if !fragments.is_empty() {
                fragments.push(CodeFragment::Blank);
            }
            fragments.extend(group);
        }
        fragments
    }
}
