//! YAML stylesheets for registering many styles at once.
//!
//! A stylesheet is a mapping of style names to entries:
//!
//! ```yaml
//! # Raw code body, registered verbatim
//! error: "1;31"
//! dim: 2
//!
//! # Attribute mapping, flattened like a StyleSpec
//! header:
//!   fg: cyan
//!   bold: true
//! badge:
//!   fg: "#ffffff"
//!   bg: 27
//!   underline: true
//! ```
//!
//! Parsing is all-or-nothing: [`Stylesheet::parse`] validates every entry
//! before anything can be registered.

use std::path::Path;

use crate::error::StylesheetError;
use crate::style::{Color, StyleSpec};

/// Parsed style definition from a stylesheet entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleDefinition {
    /// An escape-code body used as-is.
    Codes(String),
    /// A style object to be flattened into a code body.
    Style(StyleSpec),
}

impl StyleDefinition {
    /// Parses a single entry.
    pub fn parse(value: &serde_yaml::Value, style_name: &str) -> Result<Self, StylesheetError> {
        match value {
            serde_yaml::Value::String(s) => Ok(StyleDefinition::Codes(s.trim().to_string())),
            serde_yaml::Value::Number(n) => match n.as_u64() {
                Some(code) => Ok(StyleDefinition::Codes(code.to_string())),
                None => Err(StylesheetError::InvalidDefinition {
                    style: style_name.to_string(),
                    message: format!("code {} is not a non-negative integer", n),
                }),
            },
            serde_yaml::Value::Mapping(map) => Self::parse_mapping(map, style_name),
            other => Err(StylesheetError::InvalidDefinition {
                style: style_name.to_string(),
                message: format!("expected a code string or a mapping, got {:?}", other),
            }),
        }
    }

    fn parse_mapping(
        map: &serde_yaml::Mapping,
        style_name: &str,
    ) -> Result<Self, StylesheetError> {
        let mut spec = StyleSpec::new();

        for (key, value) in map {
            let attribute = key
                .as_str()
                .ok_or_else(|| StylesheetError::InvalidDefinition {
                    style: style_name.to_string(),
                    message: format!("non-string key in style definition: {:?}", key),
                })?;

            match attribute {
                "fg" | "bg" => {
                    let color = Color::parse_value(value).map_err(|source| {
                        StylesheetError::InvalidColor {
                            style: style_name.to_string(),
                            source,
                        }
                    })?;
                    if attribute == "fg" {
                        spec.set_fg(Some(color));
                    } else {
                        spec.set_bg(Some(color));
                    }
                }
                _ => {
                    let on = value.as_bool();
                    let known = spec.set_flag(attribute, on.unwrap_or(false));
                    if !known {
                        return Err(StylesheetError::UnknownAttribute {
                            style: style_name.to_string(),
                            attribute: attribute.to_string(),
                        });
                    }
                    if on.is_none() {
                        return Err(StylesheetError::InvalidFlag {
                            style: style_name.to_string(),
                            attribute: attribute.to_string(),
                        });
                    }
                }
            }
        }

        Ok(StyleDefinition::Style(spec))
    }

    /// The escape-code body this definition registers.
    pub fn to_codes(&self) -> String {
        match self {
            StyleDefinition::Codes(codes) => codes.clone(),
            StyleDefinition::Style(spec) => spec.to_codes(),
        }
    }
}

/// A parsed stylesheet, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    entries: Vec<(String, StyleDefinition)>,
}

impl Stylesheet {
    /// Parses a stylesheet from YAML text.
    ///
    /// An empty document is an empty stylesheet.
    pub fn parse(yaml: &str) -> Result<Self, StylesheetError> {
        let blank = yaml.lines().all(|line| {
            let line = line.trim();
            line.is_empty() || line.starts_with('#')
        });
        if blank {
            return Ok(Self::default());
        }

        let root: serde_yaml::Value = serde_yaml::from_str(yaml)?;

        let map = match root {
            serde_yaml::Value::Null => return Ok(Self::default()),
            serde_yaml::Value::Mapping(map) => map,
            other => return Err(StylesheetError::NotAMapping(format!("{:?}", other))),
        };

        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in &map {
            let name = key
                .as_str()
                .ok_or_else(|| StylesheetError::InvalidName(format!("{:?}", key)))?;
            entries.push((name.to_string(), StyleDefinition::parse(value, name)?));
        }

        log::trace!("parsed stylesheet with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Reads and parses a stylesheet file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| StylesheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::trace!("loading stylesheet from {}", path.display());
        Self::parse(&yaml)
    }

    /// Entries in document order.
    pub fn entries(&self) -> &[(String, StyleDefinition)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
