//! Error types for the fallible layers around the renderer.
//!
//! Rendering itself never fails: malformed tags fall back to literal text.
//! Errors only come from the surrounding layers that parse colours, load
//! stylesheets, or interpolate arguments into a rendered template.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a colour value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The name is not one of the known colour names.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// A `#` colour that is not 3 or 6 hex digits.
    #[error("invalid hex color: #{0} (must be 3 or 6 hex digits)")]
    InvalidHex(String),

    /// A palette index above 255.
    #[error("color palette index {0} out of range (0-255)")]
    PaletteOutOfRange(u64),

    /// A value of the wrong shape (e.g. a float, or an RGB tuple of the wrong arity).
    #[error("invalid color value: {0}")]
    InvalidValue(String),
}

/// Error type for stylesheet loading failures.
#[derive(Debug, Error)]
pub enum StylesheetError {
    /// The document is not valid YAML.
    #[error("failed to parse stylesheet: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document root is not a mapping of style names.
    #[error("stylesheet must be a mapping of style names, got {0}")]
    NotAMapping(String),

    /// A style name that is not a string.
    #[error("style names must be strings, got {0}")]
    InvalidName(String),

    /// A colour attribute that could not be parsed.
    #[error("invalid color for style '{style}': {source}")]
    InvalidColor {
        style: String,
        #[source]
        source: ColorError,
    },

    /// An attribute key that is not recognised.
    #[error("unknown attribute '{attribute}' in style '{style}'")]
    UnknownAttribute { style: String, attribute: String },

    /// A boolean attribute given a non-boolean value.
    #[error("attribute '{attribute}' in style '{style}' must be true or false")]
    InvalidFlag { style: String, attribute: String },

    /// An entry that is neither a code body nor an attribute mapping.
    #[error("invalid definition for style '{style}': {message}")]
    InvalidDefinition { style: String, message: String },

    /// The stylesheet file could not be read.
    #[error("failed to read stylesheet {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error returned when positional arguments do not fit a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A placeholder with no argument left to fill it.
    #[error("missing argument for placeholder {index}")]
    MissingArgument { index: usize },

    /// Arguments left over once every placeholder was filled.
    #[error("{count} extra argument(s) not used by the template")]
    ExtraArguments { count: usize },
}

/// Any error produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Stylesheet(#[from] StylesheetError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Result type for instyle operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_error_display() {
        let err = ColorError::UnknownName("purple".to_string());
        assert_eq!(err.to_string(), "unknown color name: purple");

        let err = ColorError::PaletteOutOfRange(300);
        assert!(err.to_string().contains("300"));
    }

    #[test]
    fn test_stylesheet_error_names_style() {
        let err = StylesheetError::UnknownAttribute {
            style: "header".to_string(),
            attribute: "shiny".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("header"));
        assert!(msg.contains("shiny"));
    }

    #[test]
    fn test_invalid_color_exposes_source() {
        use std::error::Error as _;

        let err = StylesheetError::InvalidColor {
            style: "warn".to_string(),
            source: ColorError::InvalidHex("zz".to_string()),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("#zz"));
    }

    #[test]
    fn test_format_error_display() {
        assert_eq!(
            FormatError::MissingArgument { index: 2 }.to_string(),
            "missing argument for placeholder 2"
        );
        assert!(FormatError::ExtraArguments { count: 1 }
            .to_string()
            .starts_with("1 extra"));
    }

    #[test]
    fn test_crate_error_from_parts() {
        let err: Error = FormatError::ExtraArguments { count: 3 }.into();
        assert!(matches!(err, Error::Format(_)));

        let err: Error = ColorError::UnknownName("x".to_string()).into();
        assert_eq!(err.to_string(), "unknown color name: x");
    }
}
