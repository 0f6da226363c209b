//! Checks for the enumerated text properties

use crate::error::ValidationError;

pub const TEXT_ANCHOR_VALUES: &[&str] = &["start", "middle", "end"];
pub const BASELINE_SHIFT_VALUES: &[&str] = &["super", "sub", "baseline"];

/// Validate a `text-anchor` value and hand it back
pub fn text_anchor(anchor: &str) -> Result<&str, ValidationError> {
    if TEXT_ANCHOR_VALUES.contains(&anchor) {
        Ok(anchor)
    } else {
        Err(ValidationError::not_allowed("text-anchor", anchor))
    }
}

/// Validate a `baseline-shift` value
///
/// Unlike [`text_anchor`] this only checks; nothing is returned on success.
pub fn baseline_shift(baseline: &str) -> Result<(), ValidationError> {
    if BASELINE_SHIFT_VALUES.contains(&baseline) {
        Ok(())
    } else {
        Err(ValidationError::not_allowed("baseline-shift", baseline))
    }
}
