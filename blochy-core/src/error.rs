//! Error types for Blochy

use thiserror::Error;

/// Errors that can occur while building operators or evolving a qubit state
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BlochyError {
    /// Axis token is not one of the accepted names
    #[error("Invalid axis '{token}': expected one of {expected}")]
    InvalidAxis {
        token: String,
        expected: &'static str,
    },

    /// Custom generator is not a 2x2 Hermitian matrix
    #[error("Malformed operator: {0}")]
    MalformedOperator(String),

    /// State norm could not be restored to 1
    #[error("Numeric instability: state norm² = {norm_sqr:e} cannot be renormalized")]
    NumericInstability { norm_sqr: f64 },

    /// Angle, duration or pulse parameter is unusable
    #[error("Invalid parameter '{name}' = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Wire command that does not parse
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

impl BlochyError {
    /// Create an invalid axis error for a rotation axis token
    pub fn invalid_axis(token: impl Into<String>) -> Self {
        Self::InvalidAxis {
            token: token.into(),
            expected: "x, y, z",
        }
    }

    /// Create an invalid axis error for a pulse axis token
    pub fn invalid_pulse_axis(token: impl Into<String>) -> Self {
        Self::InvalidAxis {
            token: token.into(),
            expected: "x, y",
        }
    }

    /// Create a malformed operator error
    pub fn malformed_operator(reason: impl Into<String>) -> Self {
        Self::MalformedOperator(reason.into())
    }

    /// Reject a non-finite parameter, passing finite values through
    pub fn check_finite(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::InvalidParameter { name, value })
        }
    }
}
