//! The [`Styler`]: a style registry plus the tag renderer.

use std::fmt;
use std::path::Path;

use crate::error::{FormatError, StylesheetError};
use crate::format::interpolate;
use crate::parser;
use crate::registry::StyleRegistry;
use crate::style::StyleSpec;
use crate::stylesheet::Stylesheet;

/// Renders tag markup using its own registry of named styles.
///
/// Every `Styler` owns an independent registry. Rendering borrows it
/// immutably and registration borrows it mutably, so styles cannot change
/// in the middle of a render.
///
/// # Example
///
/// ```rust
/// use instyle::Styler;
///
/// let mut styler = Styler::new();
/// styler.register("error", "1;31");
///
/// assert_eq!(
///     styler.render("[~error]failed[/]"),
///     "\x1b[0m\x1b[1;31mfailed\x1b[0m"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Styler {
    registry: StyleRegistry,
}

impl Styler {
    /// Creates a styler preloaded with the built-in palette.
    pub fn new() -> Self {
        Self::with_registry(StyleRegistry::with_builtins())
    }

    /// Creates a styler over an existing registry.
    pub fn with_registry(registry: StyleRegistry) -> Self {
        Self { registry }
    }

    /// Registers a named style with an escape-code body such as `31` or `1;31`.
    ///
    /// Names longer than 16 characters are truncated. The body is used
    /// verbatim and never validated.
    pub fn register(&mut self, name: &str, codes: impl Into<String>) -> &mut Self {
        self.registry.register(name, codes);
        self
    }

    /// Registers a named style from a [`StyleSpec`].
    ///
    /// The spec is flattened with [`StyleSpec::to_codes`]; an empty spec
    /// registers an empty body.
    pub fn register_style(&mut self, name: &str, style: &StyleSpec) -> &mut Self {
        self.register(name, style.to_codes())
    }

    /// Registers every entry of a parsed stylesheet, in document order.
    pub fn register_stylesheet(&mut self, sheet: &Stylesheet) -> &mut Self {
        for (name, definition) in sheet.entries() {
            self.register(name, definition.to_codes());
        }
        self
    }

    /// Parses a YAML stylesheet and registers its entries.
    ///
    /// Nothing is registered if any entry is invalid. Returns the number of
    /// styles registered.
    pub fn load_stylesheet(&mut self, yaml: &str) -> Result<usize, StylesheetError> {
        let sheet = Stylesheet::parse(yaml)?;
        self.register_stylesheet(&sheet);
        Ok(sheet.len())
    }

    /// Reads a YAML stylesheet from disk and registers its entries.
    pub fn load_stylesheet_file(&mut self, path: impl AsRef<Path>) -> Result<usize, StylesheetError> {
        let sheet = Stylesheet::from_file(path)?;
        self.register_stylesheet(&sheet);
        Ok(sheet.len())
    }

    /// Returns the escape-code body registered under `name`.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.registry.resolve(name)
    }

    /// The underlying registry.
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Replaces every valid tag in `input` with escape sequences.
    ///
    /// Never fails: malformed tags are kept as literal text. The output
    /// starts with a reset, and ends with one if a scope was left open.
    /// At most 5 scopes may be open at once; deeper opening tags are literal.
    pub fn render(&self, input: &str) -> String {
        parser::render(&self.registry, input)
    }

    /// Renders `template`, then substitutes `args` into its placeholders.
    ///
    /// Only the template is scanned for tags; tag-like text inside arguments
    /// is inserted literally. See [`crate::format`] for placeholder syntax.
    pub fn apply(&self, template: &str, args: &[&dyn fmt::Display]) -> Result<String, FormatError> {
        interpolate(&self.render(template), args)
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::new()
    }
}
