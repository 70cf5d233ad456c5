//! Range-check helpers shared by the loader and by overrides

use crate::config::error::SchemaError;

fn out_of_range(path: &str, value: impl ToString, constraint: &str) -> SchemaError {
    SchemaError::OutOfRange {
        path: path.to_string(),
        value: value.to_string(),
        constraint: constraint.to_string(),
    }
}

/// Require an integer >= 1
pub(crate) fn check_positive_int(path: &str, value: i64) -> Result<u64, SchemaError> {
    if value < 1 {
        return Err(out_of_range(path, value, ">= 1"));
    }
    u64::try_from(value).map_err(|_| out_of_range(path, value, ">= 1"))
}

/// Require an integer >= 0
pub(crate) fn check_non_negative_int(path: &str, value: i64) -> Result<u64, SchemaError> {
    u64::try_from(value).map_err(|_| out_of_range(path, value, ">= 0"))
}

/// Require a finite float
pub(crate) fn check_finite(path: &str, value: f64) -> Result<f64, SchemaError> {
    if !value.is_finite() {
        return Err(out_of_range(path, value, "a finite number"));
    }
    Ok(value)
}

/// Require a finite float > 0
pub(crate) fn check_positive_float(path: &str, value: f64) -> Result<f64, SchemaError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(out_of_range(path, value, "> 0"));
    }
    Ok(value)
}

/// Require a fraction in the half-open range [0, 1)
pub(crate) fn check_split_fraction(path: &str, value: f64) -> Result<f64, SchemaError> {
    if !(0.0..1.0).contains(&value) {
        return Err(out_of_range(path, value, "in [0, 1)"));
    }
    Ok(value)
}

/// Require a string with visible content
pub(crate) fn check_non_empty(path: &str, value: String) -> Result<String, SchemaError> {
    if value.trim().is_empty() {
        return Err(out_of_range(path, format!("{value:?}"), "a non-empty string"));
    }
    Ok(value)
}
