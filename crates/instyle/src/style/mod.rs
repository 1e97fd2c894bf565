//! Rich style objects that can be flattened into registry entries.
//!
//! A [`StyleSpec`] describes foreground and background colours plus text
//! attributes. [`Styler::register_style`](crate::Styler::register_style)
//! turns it into an escape-code body so it can be used as a tag segment.

mod color;
mod spec;

pub use color::Color;
pub use spec::StyleSpec;
