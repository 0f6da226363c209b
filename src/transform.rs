//! Transform-function text for `transform="..."` attributes
//!
//! These helpers only format text; no matrix math is performed.

use std::fmt::Display;

pub fn translate(x: impl Display, y: impl Display) -> String {
    format!("translate({}, {})", x, y)
}

pub fn scale(s: impl Display) -> String {
    format!("scale({})", s)
}

/// Rotation by `degrees` around `(x, y)`
pub fn rotate(degrees: impl Display, x: impl Display, y: impl Display) -> String {
    format!("rotate({}, {}, {})", degrees, x, y)
}

pub fn skew_x(degrees: impl Display) -> String {
    format!("skewX({})", degrees)
}

pub fn skew_y(degrees: impl Display) -> String {
    format!("skewY({})", degrees)
}

/// Join transform functions into one attribute value
pub fn transform<I, S>(transformations: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    transformations
        .into_iter()
        .map(|t| t.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
