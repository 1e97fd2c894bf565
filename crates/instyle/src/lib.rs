//! Inline tag markup for nested ANSI terminal styling.
//!
//! Write `[~bold]important[/]` instead of raw escape codes. Tags nest, and
//! closing an inner tag restores the styles of the tags around it.
//!
//! # Example
//!
//! ```rust
//! use instyle::Styler;
//!
//! let styler = Styler::new();
//! let output = styler.render("[~italic]a [~bold+red]b[/] c[/]");
//! assert_eq!(
//!     output,
//!     "\x1b[0m\x1b[3ma \x1b[1;31mb\x1b[0m\x1b[3m c\x1b[0m"
//! );
//!
//! // With positional arguments (never scanned for tags):
//! let output = instyle::apply("[~green]%s[/] passed", &[&"all"]).unwrap();
//! assert_eq!(output, "\x1b[0m\x1b[32mall\x1b[0m passed");
//! ```
//!
//! # Tag Syntax
//!
//! - Opening: `[~` then one or more segments joined by `+`, then `]`.
//!   Example: `[~bold+red]`.
//! - Closing: `[/]`, which closes the innermost open tag.
//! - Segment: a registered style name (case-sensitive, at most 16
//!   characters) or a run of decimal digits used as a raw SGR parameter,
//!   e.g. `[~38+5+208]`.
//!
//! A tag that does not parse is kept as literal text. At most 5 tags can be
//! open at once; further opening tags are kept as literal text until one
//! closes.
//!
//! # Built-in Styles
//!
//! | Names | Codes |
//! |-------|-------|
//! | `reset`, `bold`, `faint`, `italic`, `underline`, `blink`, `strike` | 0 to 6 |
//! | `plain` | 22 |
//! | `black` .. `white`, `default` | 30 to 37, 39 |
//! | `bg-black` .. `bg-white`, `bg-default` | 40 to 47, 49 |
//! | `light-black` .. `light-white` | 90 to 97 |
//! | `bg-light-black` .. `bg-light-white` | 100 to 107 |
//!
//! Custom styles are added with [`Styler::register`],
//! [`Styler::register_style`] or a YAML [`Stylesheet`].

pub mod error;
pub mod format;
mod parser;
pub mod registry;
pub mod style;
pub mod stylesheet;
mod styler;

use std::fmt;

pub use error::{ColorError, Error, FormatError, Result, StylesheetError};
pub use parser::{MAX_DEPTH, RESET};
pub use registry::{StyleKey, StyleRegistry, BUILTIN_STYLES, MAX_NAME_LEN};
pub use style::{Color, StyleSpec};
pub use stylesheet::{StyleDefinition, Stylesheet};
pub use styler::Styler;

/// Renders `template` with the built-in styles, then substitutes `args`.
///
/// Uses a fresh [`Styler`] per call. Keep a [`Styler`] around instead when
/// rendering repeatedly or with custom styles.
pub fn apply(template: &str, args: &[&dyn fmt::Display]) -> std::result::Result<String, FormatError> {
    Styler::new().apply(template, args)
}

/// Renders `template` with the built-in styles.
pub fn render(template: &str) -> String {
    Styler::new().render(template)
}
