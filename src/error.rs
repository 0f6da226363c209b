//! Error types for style validation and document output

use thiserror::Error;

/// A value was rejected by one of the enumerated property checks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("\"{value}\" is not an allowed {property}")]
    NotAllowed {
        property: &'static str,
        value: String,
    },

    #[error("unknown style property '{0}'")]
    UnknownProperty(String),
}

impl ValidationError {
    /// Create a rejected-value error for the given property
    pub fn not_allowed(property: &'static str, value: impl Into<String>) -> Self {
        Self::NotAllowed {
            property,
            value: value.into(),
        }
    }

    /// Name of the property the check belongs to, if known
    pub fn property(&self) -> Option<&'static str> {
        match self {
            Self::NotAllowed { property, .. } => Some(property),
            Self::UnknownProperty(_) => None,
        }
    }
}

/// Errors surfaced by document operations
#[derive(Error, Debug)]
pub enum SvgError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to write SVG: {0}")]
    Io(#[from] std::io::Error),
}
