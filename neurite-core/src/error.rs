use crate::{types::Point3, vector::is_finite_point};

/// Errors reported when a pattern is asked to grow from invalid input.
///
/// The growers themselves are total; these are raised at the pattern
/// boundary before any random draw is consumed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GrowthError {
    /// A start point or anchor has a NaN or infinite coordinate.
    #[error("point must have finite coordinates, got {point}")]
    NonFinitePoint { point: Point3 },

    /// A length or magnitude is negative or not finite.
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    /// A probability or fraction lies outside `[0, 1]`.
    #[error("{name} must lie in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f32 },

    /// A shrink factor lies outside `[0, 1)`.
    #[error("{name} must lie in [0, 1), got {value}")]
    InvalidFraction { name: &'static str, value: f32 },

    /// A range has its lower bound above its upper bound.
    #[error("bounds are inverted: min {min} > max {max}")]
    InvalidBounds { min: f32, max: f32 },
}

pub(crate) fn check_point(point: Point3) -> Result<(), GrowthError> {
    if is_finite_point(point) {
        Ok(())
    } else {
        Err(GrowthError::NonFinitePoint { point })
    }
}

pub(crate) fn check_magnitude(name: &'static str, value: f32) -> Result<(), GrowthError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GrowthError::InvalidParameter { name, value })
    }
}

pub(crate) fn check_probability(name: &'static str, value: f32) -> Result<(), GrowthError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GrowthError::InvalidProbability { name, value })
    }
}

pub(crate) fn check_shrink_fraction(name: &'static str, value: f32) -> Result<(), GrowthError> {
    if (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(GrowthError::InvalidFraction { name, value })
    }
}
