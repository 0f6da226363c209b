//! Ordered attribute lists for SVG tags
//!
//! [`Attrs`] is an insertion-ordered mapping from attribute name to an
//! optional value. Names are written with underscores and rendered with
//! hyphens; entries without a value are left out of the rendered tag.

use std::fmt;

/// Ordered `name -> value` pairs rendered as tag attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    entries: Vec<(String, Option<String>)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an attribute
    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.set(name, value);
        self
    }

    /// Add or replace an attribute that may be absent
    pub fn with_opt<V: fmt::Display>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.set_opt(name, value.map(|v| v.to_string()));
        self
    }

    /// Record an attribute with no value; it is skipped when rendering
    pub fn with_unset(mut self, name: impl Into<String>) -> Self {
        self.set_opt(name, None);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl fmt::Display) {
        self.set_opt(name, Some(value.to_string()));
    }

    /// Insert at the end, or overwrite in place when the name already exists
    pub fn set_opt(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Value of an attribute, if present and set
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Remove an entry, returning its value slot
    pub fn remove(&mut self, name: &str) -> Option<Option<String>> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Append another list, overwriting entries with the same name
    pub fn extend(&mut self, other: Attrs) {
        for (name, value) in other.entries {
            self.set_opt(name, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_deref()))
    }

    /// Build from a TOML table, keeping the table's key order
    pub fn from_toml(table: &toml::Table) -> Self {
        table
            .iter()
            .map(|(k, v)| (k.clone(), toml_value_text(v)))
            .collect()
    }

    /// Render as ` a="1" b="2"`, or an empty string when nothing is set
    pub fn render(&self) -> String {
        let parts: Vec<String> = self
            .entries
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| format_attr(name, v)))
            .collect();

        if parts.is_empty() {
            String::new()
        } else {
            format!(" {}", parts.join(" "))
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Attrs
where
    K: Into<String>,
    V: fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attrs::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

/// Format a single `name="value"` fragment; the value is not escaped
pub fn format_attr(name: &str, value: &str) -> String {
    format!(r#"{}="{}""#, name.replace('_', "-"), value)
}

/// Text form of a TOML value as it should appear in markup
pub(crate) fn toml_value_text(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Array(items) => items
            .iter()
            .map(toml_value_text)
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}
