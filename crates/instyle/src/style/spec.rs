//! Style object with colours and text attributes.

use super::color::Color;

/// A rich style description: optional colours plus boolean text attributes.
///
/// Built with chained calls in the same manner as `console::Style`:
///
/// ```rust
/// use instyle::{Color, StyleSpec};
///
/// let error = StyleSpec::new().fg(Color::Red).bold();
/// assert_eq!(error.to_codes(), "31;1");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StyleSpec {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
    faint: bool,
    italic: bool,
    underline: bool,
    blink: bool,
    strikethrough: bool,
}

impl StyleSpec {
    /// Creates an empty style (no colours, no attributes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground colour.
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the background colour.
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn faint(mut self) -> Self {
        self.faint = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn blink(mut self) -> Self {
        self.blink = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    /// Sets an attribute by its stylesheet name.
    ///
    /// Returns `false` if `name` is not one of `bold`, `faint`, `italic`,
    /// `underline`, `blink` or `strikethrough`.
    pub(crate) fn set_flag(&mut self, name: &str, on: bool) -> bool {
        let slot = match name {
            "bold" => &mut self.bold,
            "faint" => &mut self.faint,
            "italic" => &mut self.italic,
            "underline" => &mut self.underline,
            "blink" => &mut self.blink,
            "strikethrough" => &mut self.strikethrough,
            _ => return false,
        };
        *slot = on;
        true
    }

    pub(crate) fn set_fg(&mut self, color: Option<Color>) {
        self.fg = color;
    }

    pub(crate) fn set_bg(&mut self, color: Option<Color>) {
        self.bg = color;
    }

    /// Returns the foreground colour, if set.
    pub fn foreground(&self) -> Option<Color> {
        self.fg
    }

    /// Returns the background colour, if set.
    pub fn background(&self) -> Option<Color> {
        self.bg
    }

    /// Returns true if no colour and no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Flattens the style into an escape-code body.
    ///
    /// Fragments appear in a fixed order: foreground, background, then
    /// bold, faint, italic, underline, blink, strikethrough. An empty style
    /// yields an empty body.
    pub fn to_codes(&self) -> String {
        let mut fragments: Vec<String> = Vec::with_capacity(8);

        if let Some(fg) = self.fg {
            fragments.push(fg.fragment(false));
        }
        if let Some(bg) = self.bg {
            fragments.push(bg.fragment(true));
        }

        let flags = [
            (self.bold, "1"),
            (self.faint, "2"),
            (self.italic, "3"),
            (self.underline, "4"),
            (self.blink, "5"),
            (self.strikethrough, "6"),
        ];
        fragments.extend(
            flags
                .iter()
                .filter(|(on, _)| *on)
                .map(|(_, code)| code.to_string()),
        );

        fragments.join(";")
    }
}
