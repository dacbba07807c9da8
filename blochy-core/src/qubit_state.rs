//! Single-qubit pure states
//!
//! A [`QubitState`] holds the amplitudes `(α, β)` of `α|0⟩ + β|1⟩`. States are
//! values: gate application and normalization always return a new state.

use crate::bloch::BlochVector;
use crate::error::BlochyError;
use crate::Result;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance for the unit-norm invariant after each transformation
pub const NORM_TOLERANCE: f64 = 1e-9;

/// Amplitudes below this magnitude print as zero in labels
const LABEL_EPSILON: f64 = 5e-4;

/// Pure single-qubit state `α|0⟩ + β|1⟩`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QubitState {
    alpha: Complex64,
    beta: Complex64,
}

impl QubitState {
    /// Create a state from raw amplitudes, without normalizing
    pub const fn new(alpha: Complex64, beta: Complex64) -> Self {
        Self { alpha, beta }
    }

    /// The `|0⟩` state, amplitudes `(1, 0)`
    pub const fn zero() -> Self {
        Self::new(Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0))
    }

    /// The `|1⟩` state, amplitudes `(0, 1)`
    pub const fn one() -> Self {
        Self::new(Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0))
    }

    /// `|0⟩` when `up` is true, `|1⟩` otherwise
    pub const fn basis(up: bool) -> Self {
        if up {
            Self::zero()
        } else {
            Self::one()
        }
    }

    /// Amplitude of `|0⟩`
    pub fn alpha(&self) -> Complex64 {
        self.alpha
    }

    /// Amplitude of `|1⟩`
    pub fn beta(&self) -> Complex64 {
        self.beta
    }

    /// Amplitudes as `[α, β]`
    pub fn amplitudes(&self) -> [Complex64; 2] {
        [self.alpha, self.beta]
    }

    /// `|α|² + |β|²`
    pub fn norm_sqr(&self) -> f64 {
        self.alpha.norm_sqr() + self.beta.norm_sqr()
    }

    /// Probability of measuring `|0⟩`, on the normalized state
    pub fn probability_zero(&self) -> f64 {
        let n = self.norm_sqr();
        if n > 0.0 {
            self.alpha.norm_sqr() / n
        } else {
            0.0
        }
    }

    /// Whether `|α|² + |β|²` is within `tolerance` of 1
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() <= tolerance
    }

    /// Rescale to unit norm
    ///
    /// # Errors
    /// Returns [`BlochyError::NumericInstability`] if the norm is zero or not finite.
    pub fn normalized(&self) -> Result<Self> {
        let norm_sqr = self.norm_sqr();
        if !norm_sqr.is_finite() || norm_sqr <= f64::MIN_POSITIVE {
            return Err(BlochyError::NumericInstability { norm_sqr });
        }
        let inv = 1.0 / norm_sqr.sqrt();
        Ok(Self::new(self.alpha * inv, self.beta * inv))
    }

    /// Bloch vector of this state, without renormalizing
    pub fn bloch_vector(&self) -> BlochVector {
        BlochVector::from_state(self)
    }

    /// Ket-notation label such as `0.707|0⟩ + 0.707|1⟩`
    ///
    /// Amplitudes are printed to three decimals; complex amplitudes print as
    /// `(re+imi)`. Purely cosmetic.
    pub fn label(&self) -> String {
        let alpha = format_amplitude(self.alpha);
        let beta = format_amplitude(self.beta);
        match beta.strip_prefix('-') {
            Some(magnitude) => format!("{}|0⟩ - {}|1⟩", alpha, magnitude),
            None => format!("{}|0⟩ + {}|1⟩", alpha, beta),
        }
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn clean(x: f64) -> f64 {
    if x.abs() < LABEL_EPSILON {
        0.0
    } else {
        x
    }
}

fn format_amplitude(z: Complex64) -> String {
    let (re, im) = (clean(z.re), clean(z.im));
    if im == 0.0 {
        format!("{:.3}", re)
    } else if re == 0.0 {
        format!("{:.3}i", im)
    } else {
        format!("({:.3}{:+.3}i)", re, im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_basis_states() {
        assert_eq!(QubitState::basis(true), QubitState::zero());
        assert_eq!(QubitState::basis(false), QubitState::one());
        assert_eq!(QubitState::default(), QubitState::zero());
        assert!(QubitState::zero().is_normalized(NORM_TOLERANCE));
    }

    #[test]
    fn test_normalized() {
        let state = QubitState::new(Complex64::new(3.0, 0.0), Complex64::new(0.0, 4.0));
        let n = state.normalized().unwrap();
        assert_relative_eq!(n.norm_sqr(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.alpha().re, 0.6, epsilon = 1e-12);
        assert_relative_eq!(n.beta().im, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_zero_state_fails() {
        let state = QubitState::new(Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0));
        assert!(matches!(
            state.normalized(),
            Err(BlochyError::NumericInstability { .. })
        ));

        let nan = QubitState::new(Complex64::new(f64::NAN, 0.0), Complex64::new(0.0, 0.0));
        assert!(nan.normalized().is_err());
    }

    #[test]
    fn test_probability_zero() {
        let plus = QubitState::new(
            Complex64::new(FRAC_1_SQRT_2, 0.0),
            Complex64::new(FRAC_1_SQRT_2, 0.0),
        );
        assert_relative_eq!(plus.probability_zero(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_label_real_amplitudes() {
        let plus = QubitState::new(
            Complex64::new(FRAC_1_SQRT_2, 0.0),
            Complex64::new(FRAC_1_SQRT_2, 0.0),
        );
        assert_eq!(plus.label(), "0.707|0⟩ + 0.707|1⟩");

        let minus = QubitState::new(
            Complex64::new(FRAC_1_SQRT_2, 0.0),
            Complex64::new(-FRAC_1_SQRT_2, 0.0),
        );
        assert_eq!(minus.label(), "0.707|0⟩ - 0.707|1⟩");

        assert_eq!(QubitState::zero().label(), "1.000|0⟩ + 0.000|1⟩");
    }

    #[test]
    fn test_label_complex_amplitudes() {
        let state = QubitState::new(
            Complex64::new(FRAC_1_SQRT_2, 0.0),
            Complex64::new(0.0, -FRAC_1_SQRT_2),
        );
        assert_eq!(state.label(), "0.707|0⟩ - 0.707i|1⟩");

        let mixed = QubitState::new(Complex64::new(0.6, 0.0), Complex64::new(0.48, 0.64));
        assert_eq!(mixed.label(), "0.600|0⟩ + (0.480+0.640i)|1⟩");
    }

    #[test]
    fn test_label_suppresses_negative_zero() {
        let state = QubitState::new(Complex64::new(1.0, -1e-17), Complex64::new(-1e-17, 0.0));
        assert_eq!(state.label(), "1.000|0⟩ + 0.000|1⟩");
    }
}
