//! Norm checks and renormalization
//!
//! Unitary evolution preserves `|α|² + |β|²` exactly in theory; in floating
//! point it drifts slowly. These helpers measure the drift and pull the state
//! back onto the unit sphere.

use blochy_core::{QubitState, Result, NORM_TOLERANCE};
use std::fmt;

/// Drift above which renormalization is reported as numeric instability
pub const INSTABILITY_TOLERANCE: f64 = 1e-6;

/// Norm diagnostics for a single state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormCheck {
    /// `|α|² + |β|²`
    pub norm_sqr: f64,
    /// `| |α|² + |β|² - 1 |`
    pub deviation: f64,
}

impl NormCheck {
    /// Whether the deviation exceeds `tolerance`
    ///
    /// A non-finite norm always needs attention.
    pub fn exceeds(&self, tolerance: f64) -> bool {
        !self.deviation.is_finite() || self.deviation > tolerance
    }

    /// Get severity level (0 = good, 1 = drift, 2 = instability)
    pub fn severity(&self) -> u8 {
        if !self.exceeds(NORM_TOLERANCE) {
            0
        } else if !self.exceeds(INSTABILITY_TOLERANCE) {
            1
        } else {
            2
        }
    }
}

impl fmt::Display for NormCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NormCheck(norm²={:.12}, deviation={:.2e})",
            self.norm_sqr, self.deviation
        )
    }
}

/// Measure how far `state` is from unit norm
pub fn check_norm(state: &QubitState) -> NormCheck {
    let norm_sqr = state.norm_sqr();
    NormCheck {
        norm_sqr,
        deviation: (norm_sqr - 1.0).abs(),
    }
}

/// A state pulled back to unit norm, with the check taken before rescaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stabilized {
    pub state: QubitState,
    pub check: NormCheck,
    pub renormalized: bool,
}

/// Renormalize `state` if its drift exceeds `tolerance`
///
/// States within tolerance are returned untouched, bit for bit.
///
/// # Errors
/// Returns [`blochy_core::BlochyError::NumericInstability`] if the norm is
/// zero or not finite.
pub fn stabilize(state: &QubitState, tolerance: f64) -> Result<Stabilized> {
    let check = check_norm(state);
    if !check.exceeds(tolerance) {
        return Ok(Stabilized {
            state: *state,
            check,
            renormalized: false,
        });
    }
    Ok(Stabilized {
        state: state.normalized()?,
        check,
        renormalized: true,
    })
}
