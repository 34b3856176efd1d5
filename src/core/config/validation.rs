//! Validation helper functions for configuration types.

use crate::core::errors::{LabelfoldError, Result};

/// Validate that an f64 value is finite (not NaN or infinite).
pub fn validate_finite(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() {
        return Err(LabelfoldError::config_field(
            format!("{} must be a finite number, got {}", field, value),
            field,
        ));
    }
    Ok(())
}

/// Validate that a usize value does not exceed an upper bound (inclusive).
pub fn validate_at_most(value: usize, max: usize, field: &str) -> Result<()> {
    if value > max {
        return Err(LabelfoldError::config_field(
            format!("{} must be at most {}, got {}", field, max, value),
            field,
        ));
    }
    Ok(())
}

/// Validate that a list is not empty.
pub fn validate_non_empty<T>(values: &[T], field: &str) -> Result<()> {
    if values.is_empty() {
        return Err(LabelfoldError::config_field(
            format!("{} must contain at least one value", field),
            field,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_pass() {
        assert!(validate_finite(0.8, "threshold").is_ok());
        assert!(validate_finite(-3.0, "threshold").is_ok());
    }

    #[test]
    fn nan_and_infinity_are_rejected() {
        let err = validate_finite(f64::NAN, "reduction.threshold").unwrap_err();
        assert!(format!("{err}").contains("reduction.threshold"));
        assert!(validate_finite(f64::INFINITY, "x").is_err());
    }

    #[test]
    fn upper_bound_is_inclusive() {
        assert!(validate_at_most(64, 64, "levels").is_ok());
        assert!(validate_at_most(65, 64, "levels").is_err());
    }

    #[test]
    fn empty_lists_are_rejected() {
        assert!(validate_non_empty::<f64>(&[], "sweep.thresholds").is_err());
        assert!(validate_non_empty(&[0.5], "sweep.thresholds").is_ok());
    }
}
