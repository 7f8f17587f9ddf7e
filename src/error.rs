//! Error taxonomy for plot construction.

use thiserror::Error;

/// Errors raised synchronously by the plot factories and axis setters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// An input had the wrong shape, length, sign, or was not finite.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PlotError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        PlotError::InvalidArgument(msg.into())
    }
}

/// Result alias used across the construction API.
pub type PlotResult<T> = Result<T, PlotError>;

/// Fail with `InvalidArgument` unless `value` is finite.
pub(crate) fn ensure_finite(name: &str, value: f64) -> PlotResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PlotError::invalid(format!("{name} must be finite, got {value}")))
    }
}

/// Fail with `InvalidArgument` unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> PlotResult<()> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(PlotError::invalid(format!("{name} must be positive, got {value}")))
    }
}

/// Fail with `InvalidArgument` unless `value` is finite and not negative.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> PlotResult<()> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(PlotError::invalid(format!("{name} must not be negative, got {value}")))
    }
}
