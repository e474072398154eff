//! Error types for the CAM tools crate.
//!
//! This module provides structured error types for panel generation,
//! edge resolution and parameter validation.

use thiserror::Error;

/// Errors that can occur while generating or exporting a box layout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CamToolError {
    /// An edge code character is not known to the edge registry.
    #[error("Unknown edge type: '{0}'")]
    UnknownEdgeType(char),

    /// A panel dimension is zero, negative or not a number.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Output generation failed.
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),
}

/// Errors related to CAM tool parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

/// Reject dimensions that are not strictly positive (NaN included).
pub(crate) fn ensure_positive(name: &str, value: f64) -> CamToolResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CamToolError::InvalidGeometry(format!(
            "{} must be positive, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cam_tool_error_display() {
        let err = CamToolError::UnknownEdgeType('x');
        assert_eq!(err.to_string(), "Unknown edge type: 'x'");

        let err = CamToolError::InvalidGeometry("width must be positive, got 0".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid geometry: width must be positive, got 0"
        );

        let err = CamToolError::GenerationFailed("empty layout".to_string());
        assert_eq!(err.to_string(), "Generation failed: empty layout");
    }

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::OutOfRange {
            name: "burn".to_string(),
            value: -0.5,
            min: 0.0,
            max: 3.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'burn' out of range: -0.5 (valid: 0..3)"
        );
    }

    #[test]
    fn test_error_conversion() {
        let param_err = ParameterError::InvalidValue {
            name: "edges".to_string(),
            reason: "expected 4 codes".to_string(),
        };
        let cam_err: CamToolError = param_err.into();
        assert!(matches!(cam_err, CamToolError::Parameter(_)));
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("width", 10.0).is_ok());
        assert!(matches!(
            ensure_positive("width", 0.0),
            Err(CamToolError::InvalidGeometry(_))
        ));
        assert!(ensure_positive("width", -1.0).is_err());
        assert!(ensure_positive("width", f64::NAN).is_err());
        assert!(ensure_positive("width", f64::INFINITY).is_err());
    }
}
