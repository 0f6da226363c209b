//! tinysvg - build SVG markup from Rust
//!
//! The library has two cooperating parts: [`Style`], a fixed set of
//! presentation properties serialized as a `style` attribute, and
//! [`SvgDocument`], which formats element tags and collects them into a
//! document.
//!
//! # Example
//!
//! ```rust
//! use tinysvg::{Attrs, StyleProperty, SvgDocument};
//!
//! let mut doc = SvgDocument::new(100, 100);
//! doc.style_mut().set(StyleProperty::Fill, "red").unwrap();
//!
//! let rect = doc.rect(Attrs::new().with("x", 0).with("y", 0), true);
//! assert_eq!(rect, r#"<rect x="0" y="0" style="fill:red" />"#);
//!
//! doc.add(rect);
//! assert!(doc.render().ends_with("</svg>"));
//! ```

pub mod attrs;
pub mod document;
pub mod error;
pub mod scene;
pub mod style;
pub mod text;
pub mod transform;

pub use attrs::Attrs;
pub use document::{RadialGradient, SvgDocument, Viewport};
pub use error::{SvgError, ValidationError};
pub use scene::{Scene, SceneError};
pub use style::{Style, StyleError, StyleProperty};
pub use text::{baseline_shift, text_anchor};
pub use transform::{rotate, scale, skew_x, skew_y, transform, translate};

/// Render a TOML scene description to SVG text
///
/// # Example
///
/// ```rust
/// use tinysvg::render_scene;
///
/// let svg = render_scene(r#"
///     [document]
///     width = 20
///     height = 20
///
///     [[element]]
///     kind = "circle"
///     attrs = { cx = 10, cy = 10, r = 5 }
/// "#).unwrap();
///
/// assert!(svg.contains(r#"<circle cx="10" cy="10" r="5" />"#));
/// ```
pub fn render_scene(source: &str) -> Result<String, SceneError> {
    let doc = Scene::from_str(source)?.build()?;
    Ok(doc.render())
}
