//! TOML scene files
//!
//! A scene describes a whole document: its dimensions, the style to merge
//! into shapes, and an ordered tree of elements. Loading a scene drives the
//! same [`SvgDocument`] methods a program would call directly.
//!
//! ```toml
//! [document]
//! width = 200
//! height = 100
//!
//! [style]
//! fill = "red"
//!
//! [[element]]
//! kind = "rect"
//! attrs = { x = 0, y = 0, width = 10, height = 10 }
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::attrs::{toml_value_text, Attrs};
use crate::document::{RadialGradient, SvgDocument};
use crate::error::ValidationError;

/// Errors that can occur when loading or building a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse scene TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("unknown element kind '{0}'")]
    UnknownElement(String),
    #[error("element '{kind}' is missing required field '{field}'")]
    MissingField { kind: String, field: &'static str },
    #[error("element '{kind}' has a non-numeric '{field}'")]
    NotANumber { kind: String, field: &'static str },
}

impl SceneError {
    fn missing(kind: &str, field: &'static str) -> Self {
        Self::MissingField {
            kind: kind.to_string(),
            field,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Document-level settings of a scene
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentSpec {
    pub width: toml::Value,
    pub height: toml::Value,
    pub viewport: Option<[f64; 4]>,
    #[serde(default = "default_true")]
    pub inline: bool,
}

/// One element of a scene, possibly with nested children
#[derive(Debug, Clone, Deserialize)]
pub struct ElementSpec {
    pub kind: String,
    /// Merge the document style; only shapes look at this
    #[serde(default = "default_true")]
    pub styled: bool,
    #[serde(default)]
    pub attrs: toml::Table,
    #[serde(default)]
    pub points: Vec<(toml::Value, toml::Value)>,
    #[serde(default)]
    pub steps: Vec<toml::Value>,
    pub content: Option<String>,
    pub id: Option<String>,
    #[serde(default)]
    pub children: Vec<ElementSpec>,
}

/// A parsed scene file
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    pub document: DocumentSpec,
    #[serde(default)]
    pub style: toml::Table,
    #[serde(default, rename = "element")]
    pub elements: Vec<ElementSpec>,
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the document, adding every top-level element in order
    pub fn build(&self) -> Result<SvgDocument, SceneError> {
        let spec = &self.document;
        let mut doc = SvgDocument::new(toml_value_text(&spec.width), toml_value_text(&spec.height))
            .with_inline(spec.inline);
        if let Some([x, y, w, h]) = spec.viewport {
            doc = doc.with_viewport((x, y, w, h));
        }

        doc.style_mut()
            .replace_all(self.style.iter().map(|(k, v)| (k, toml_value_text(v))))?;

        for element in &self.elements {
            let markup = render_element(&doc, element)?;
            doc.add(markup);
        }
        log::debug!("built scene with {} elements", doc.drawing().len());
        Ok(doc)
    }
}

fn render_children(doc: &SvgDocument, element: &ElementSpec) -> Result<Vec<String>, SceneError> {
    element
        .children
        .iter()
        .map(|child| render_element(doc, child))
        .collect()
}

fn required_id<'a>(element: &'a ElementSpec) -> Result<&'a str, SceneError> {
    element
        .id
        .as_deref()
        .ok_or_else(|| SceneError::missing(&element.kind, "id"))
}

/// Remove a coordinate from `attrs`, failing when it is absent
fn take_attr(
    attrs: &mut Attrs,
    kind: &str,
    field: &'static str,
) -> Result<String, SceneError> {
    attrs
        .remove(field)
        .flatten()
        .ok_or_else(|| SceneError::missing(kind, field))
}

fn number_attr(
    element: &ElementSpec,
    field: &'static str,
    default: f64,
) -> Result<f64, SceneError> {
    match element.attrs.get(field) {
        None => Ok(default),
        Some(toml::Value::Integer(i)) => Ok(*i as f64),
        Some(toml::Value::Float(f)) => Ok(*f),
        Some(_) => Err(SceneError::NotANumber {
            kind: element.kind.clone(),
            field,
        }),
    }
}

fn radial_params(element: &ElementSpec) -> Result<RadialGradient, SceneError> {
    let defaults = RadialGradient::default();
    let mut params = RadialGradient::new()
        .with_center(
            number_attr(element, "cx", defaults.cx)?,
            number_attr(element, "cy", defaults.cy)?,
        )
        .with_focus(
            number_attr(element, "fx", defaults.fx)?,
            number_attr(element, "fy", defaults.fy)?,
        )
        .with_focal_radius(number_attr(element, "fr", defaults.fr)?)
        .with_radius(number_attr(element, "r", defaults.r)?);
    if let Some(method) = element.attrs.get("spread_method") {
        params = params.with_spread_method(toml_value_text(method));
    }
    Ok(params)
}

/// Render one element spec through the document's builder methods
pub fn render_element(doc: &SvgDocument, element: &ElementSpec) -> Result<String, SceneError> {
    let kind = element.kind.as_str();
    let mut attrs = Attrs::from_toml(&element.attrs);

    let markup = match kind {
        "rect" => doc.rect(attrs, element.styled),
        "circle" => doc.circle(attrs, element.styled),
        "ellipse" => doc.ellipse(attrs, element.styled),
        "line" => {
            let x1 = take_attr(&mut attrs, kind, "x1")?;
            let y1 = take_attr(&mut attrs, kind, "y1")?;
            let x2 = take_attr(&mut attrs, kind, "x2")?;
            let y2 = take_attr(&mut attrs, kind, "y2")?;
            doc.line(x1, y1, x2, y2, attrs, element.styled)
        }
        "polyline" => {
            let points: Vec<(String, String)> = element
                .points
                .iter()
                .map(|(x, y)| (toml_value_text(x), toml_value_text(y)))
                .collect();
            doc.polyline(&points, attrs, element.styled)
        }
        "path" => {
            let steps: Vec<String> = element.steps.iter().map(toml_value_text).collect();
            doc.path(&steps, attrs, element.styled)
        }
        "image" => doc.image(attrs),
        "stop" => doc.stop(attrs),
        "text" | "tspan" => {
            let content = element
                .content
                .as_deref()
                .ok_or_else(|| SceneError::missing(kind, "content"))?;
            doc.text(content, attrs)
        }
        "g" => doc.g(&render_children(doc, element)?, attrs),
        "defs" => doc.defs(&render_children(doc, element)?, attrs),
        "symbol" => doc.symbol(required_id(element)?, &render_children(doc, element)?, attrs),
        "pattern" => doc.pattern(required_id(element)?, &render_children(doc, element)?, attrs),
        "linear_gradient" | "linearGradient" => doc.linear_gradient(
            required_id(element)?,
            &render_children(doc, element)?,
            attrs,
        ),
        "radial_gradient" | "radialGradient" => doc.radial_gradient(
            required_id(element)?,
            &render_children(doc, element)?,
            &radial_params(element)?,
        ),
        other => return Err(SceneError::UnknownElement(other.to_string())),
    };

    Ok(markup)
}
