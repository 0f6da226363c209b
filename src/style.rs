//! Presentation style model
//!
//! A [`Style`] tracks the fixed set of SVG presentation properties that the
//! document builder merges into shapes as a `style="..."` attribute. The set
//! of properties is closed; each one is described by a [`PropertyDescriptor`]
//! that names it and optionally restricts its values.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::attrs::toml_value_text;
use crate::error::ValidationError;

/// Errors that can occur when loading a style from TOML
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Failed to read style file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse style TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// One of the presentation properties tracked by [`Style`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Fill,
    FillRule,
    FillOpacity,
    Stroke,
    StrokeOpacity,
    StrokeWidth,
    StrokeLinecap,
    StrokeLinejoin,
    StrokeMiterlimit,
    StrokeDasharray,
    StrokeDashoffset,
}

/// Static description of a presentation property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub property: StyleProperty,
    /// Name used to address the property programmatically
    pub name: &'static str,
    /// Name used in the serialized style string
    pub css_name: &'static str,
    /// Accepted values, or `None` when the property is unrestricted
    pub allowed: Option<&'static [&'static str]>,
}

const LINECAP_VALUES: &[&str] = &["butt", "round", "square"];

// Linejoin keywords, kept as the accepted miterlimit values.
const MITERLIMIT_VALUES: &[&str] = &["miter", "round", "bevel"];

const fn unrestricted(
    property: StyleProperty,
    name: &'static str,
    css_name: &'static str,
) -> PropertyDescriptor {
    PropertyDescriptor {
        property,
        name,
        css_name,
        allowed: None,
    }
}

const PROPERTY_COUNT: usize = 11;

/// All properties in serialization order
pub const PROPERTIES: [PropertyDescriptor; PROPERTY_COUNT] = [
    unrestricted(StyleProperty::Fill, "fill", "fill"),
    unrestricted(StyleProperty::FillRule, "fill_rule", "fill-rule"),
    unrestricted(StyleProperty::FillOpacity, "fill_opacity", "fill-opacity"),
    unrestricted(StyleProperty::Stroke, "stroke", "stroke"),
    unrestricted(StyleProperty::StrokeOpacity, "stroke_opacity", "stroke-opacity"),
    unrestricted(StyleProperty::StrokeWidth, "stroke_width", "stroke-width"),
    PropertyDescriptor {
        property: StyleProperty::StrokeLinecap,
        name: "stroke_linecap",
        css_name: "stroke-linecap",
        allowed: Some(LINECAP_VALUES),
    },
    unrestricted(StyleProperty::StrokeLinejoin, "stroke_linejoin", "stroke-linejoin"),
    PropertyDescriptor {
        property: StyleProperty::StrokeMiterlimit,
        name: "stroke_miterlimit",
        css_name: "stroke-miterlimit",
        allowed: Some(MITERLIMIT_VALUES),
    },
    unrestricted(StyleProperty::StrokeDasharray, "stroke_dasharray", "stroke-dasharray"),
    unrestricted(StyleProperty::StrokeDashoffset, "stroke_dashoffset", "stroke-dashoffset"),
];

impl StyleProperty {
    /// Every property, in declaration order
    pub fn all() -> impl Iterator<Item = StyleProperty> {
        PROPERTIES.iter().map(|d| d.property)
    }

    pub fn descriptor(self) -> &'static PropertyDescriptor {
        &PROPERTIES[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn css_name(self) -> &'static str {
        self.descriptor().css_name
    }
}

impl FromStr for StyleProperty {
    type Err = ValidationError;

    /// Accepts both `stroke_width` and `stroke-width` spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PROPERTIES
            .iter()
            .find(|d| d.name == s || d.css_name == s)
            .map(|d| d.property)
            .ok_or_else(|| ValidationError::UnknownProperty(s.to_string()))
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PropertyDescriptor {
    /// Check a value against this property's allowed set
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        match self.allowed {
            Some(allowed) if !allowed.contains(&value) => {
                Err(ValidationError::not_allowed(self.css_name, value))
            }
            _ => Ok(()),
        }
    }
}

/// Presentation properties serialized as `name:value;name:value`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    values: [Option<String>; PROPERTY_COUNT],
}

impl Style {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a style from `(name, value)` pairs, validating each one
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: fmt::Display,
    {
        let mut style = Self::new();
        style.replace_all(entries)?;
        Ok(style)
    }

    /// Load a style from a TOML file of `property = value` pairs
    pub fn from_file(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a style from a TOML string of `property = value` pairs
    pub fn from_toml_str(content: &str) -> Result<Self, StyleError> {
        let table: toml::Table = toml::from_str(content)?;
        let style = Self::from_entries(table.iter().map(|(k, v)| (k, toml_value_text(v))))?;
        Ok(style)
    }

    /// Current value of a property
    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.values[property as usize].as_deref()
    }

    /// Current value of a property addressed by name
    pub fn get_by_name(&self, name: &str) -> Result<Option<&str>, ValidationError> {
        Ok(self.get(name.parse()?))
    }

    /// Set a property, rejecting values outside its allowed set
    ///
    /// On failure the property keeps whatever value it had before.
    pub fn set(
        &mut self,
        property: StyleProperty,
        value: impl fmt::Display,
    ) -> Result<(), ValidationError> {
        let value = value.to_string();
        property.descriptor().check(&value)?;
        self.values[property as usize] = Some(value);
        Ok(())
    }

    /// Set a property addressed by name
    pub fn set_by_name(
        &mut self,
        name: &str,
        value: impl fmt::Display,
    ) -> Result<(), ValidationError> {
        self.set(name.parse()?, value)
    }

    /// Clear a single property
    pub fn unset(&mut self, property: StyleProperty) {
        self.values[property as usize] = None;
    }

    /// Clear every property
    pub fn clear(&mut self) {
        self.values = Default::default();
    }

    /// Reset the style, then set each entry in order
    ///
    /// Not atomic: an invalid entry stops the replacement with the style
    /// already reset and the preceding entries applied.
    pub fn replace_all<I, K, V>(&mut self, entries: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: fmt::Display,
    {
        self.clear();
        for (name, value) in entries {
            self.set_by_name(name.as_ref(), value)?;
        }
        log::debug!("style replaced: {}", self);
        Ok(())
    }

    /// Properties that currently hold a value, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        StyleProperty::all().filter_map(move |p| self.get(p).map(|v| (p, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Render as a `style` attribute value
    pub fn serialize(&self) -> String {
        self.iter()
            .map(|(p, v)| format!("{}:{}", p.css_name(), v))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
