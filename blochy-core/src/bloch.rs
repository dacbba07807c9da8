//! Bloch-sphere coordinates for single-qubit states
//!
//! The Bloch vector of `α|0⟩ + β|1⟩` uses the `u, v, w` representation
//!
//! u = -2·Re(αβ̄),  v = 2·Im(αβ̄),  w = |α|² - |β|²
//!
//! so `|0⟩` sits at `w = +1` and `|1⟩` at `w = -1`. The `u` and `v` axes are
//! the standard `x` and `y` axes turned by π about `w`; a rotation generated by
//! the Pauli `X` therefore turns vectors about the `-u` direction.
//!
//! # Example
//!
//! ```
//! use blochy_core::{BlochVector, QubitState};
//!
//! let bloch = BlochVector::from_state(&QubitState::zero());
//! assert!((bloch.w - 1.0).abs() < 1e-10);
//! ```

use crate::qubit_state::QubitState;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// A point on (or inside) the Bloch sphere
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    /// `-2·Re(αβ̄)`
    pub u: f64,
    /// `2·Im(αβ̄)`
    pub v: f64,
    /// `|α|² - |β|²`, +1 at `|0⟩`
    pub w: f64,
}

/// Spherical coordinates of a Bloch vector
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π], measured from +w
    pub theta: f64,
    /// Azimuthal angle φ ∈ [0, 2π), measured from +u towards +v
    pub phi: f64,
}

impl BlochVector {
    /// North pole, the image of `|0⟩`
    pub const NORTH: BlochVector = BlochVector::new(0.0, 0.0, 1.0);

    /// Create a Bloch vector from its coordinates
    pub const fn new(u: f64, v: f64, w: f64) -> Self {
        Self { u, v, w }
    }

    /// Project complex amplitudes onto the sphere
    ///
    /// The state is used as given; callers that need the unit-norm guarantee
    /// normalize first.
    pub fn from_state(state: &QubitState) -> Self {
        Self::from_amplitudes(state.alpha(), state.beta())
    }

    /// Project raw `(α, β)` amplitudes
    pub fn from_amplitudes(alpha: Complex64, beta: Complex64) -> Self {
        let r01 = alpha * beta.conj();
        Self {
            u: -2.0 * r01.re,
            v: 2.0 * r01.im,
            w: alpha.norm_sqr() - beta.norm_sqr(),
        }
    }

    /// Reduced-fidelity projection from real magnitudes only
    ///
    /// Some inputs only carry `|α|` and `|β|` as plain reals. This mode
    /// normalizes them and returns `u = 2αβ, v = 0, w = α² - β²`. All phase
    /// information is lost, so `v` is always zero. A zero-norm input maps to
    /// the north pole.
    pub fn from_real_amplitudes(alpha: f64, beta: f64) -> Self {
        let norm = (alpha * alpha + beta * beta).sqrt();
        if !norm.is_finite() || norm == 0.0 {
            return Self::NORTH;
        }
        let (a, b) = (alpha / norm, beta / norm);
        Self {
            u: 2.0 * a * b,
            v: 0.0,
            w: a * a - b * b,
        }
    }

    /// Squared length `u² + v² + w²`
    pub fn magnitude_sqr(&self) -> f64 {
        self.u * self.u + self.v * self.v + self.w * self.w
    }

    /// Length of the vector
    ///
    /// For pure states, this should be 1.0
    pub fn magnitude(&self) -> f64 {
        self.magnitude_sqr().sqrt()
    }

    /// Check if this represents a pure state (magnitude ≈ 1.0)
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }

    /// Euclidean distance to another vector
    pub fn distance(&self, other: &BlochVector) -> f64 {
        let (du, dv, dw) = (self.u - other.u, self.v - other.v, self.w - other.w);
        (du * du + dv * dv + dw * dw).sqrt()
    }

    /// Convert to spherical coordinates
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();

        if r < 1e-10 {
            return BlochAngles {
                theta: 0.0,
                phi: 0.0,
            };
        }

        let theta = (self.w / r).clamp(-1.0, 1.0).acos();
        let phi = self.v.atan2(self.u);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };

        BlochAngles { theta, phi }
    }

    /// Human-readable summary, naming the six cardinal states
    pub fn describe(&self) -> String {
        let mag = self.magnitude();
        let angles = self.to_angles();

        let mut desc = String::new();
        desc.push_str(&format!(
            "Bloch Vector: ({:.4}, {:.4}, {:.4})\n",
            self.u, self.v, self.w
        ));
        desc.push_str(&format!("Magnitude: {:.4}\n", mag));
        desc.push_str(&format!(
            "Angles: θ={:.4}, φ={:.4}\n",
            angles.theta, angles.phi
        ));

        let on_equator = self.w.abs() < 0.01;
        if (self.w - 1.0).abs() < 0.01 {
            desc.push_str("State: |0⟩ (north pole)\n");
        } else if (self.w + 1.0).abs() < 0.01 {
            desc.push_str("State: |1⟩ (south pole)\n");
        } else if (self.u + 1.0).abs() < 0.01 && on_equator {
            desc.push_str("State: |+⟩\n");
        } else if (self.u - 1.0).abs() < 0.01 && on_equator {
            desc.push_str("State: |−⟩\n");
        } else if (self.v + 1.0).abs() < 0.01 && on_equator {
            desc.push_str("State: |+i⟩\n");
        } else if (self.v - 1.0).abs() < 0.01 && on_equator {
            desc.push_str("State: |−i⟩\n");
        } else if mag < 0.9 {
            desc.push_str("Mixed state (inside sphere)\n");
        }

        desc
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlochVector({:.4}, {:.4}, {:.4})", self.u, self.v, self.w)
    }
}

impl BlochAngles {
    /// Convert spherical coordinates to a Bloch vector
    pub fn to_vector(&self) -> BlochVector {
        BlochVector {
            u: self.theta.sin() * self.phi.cos(),
            v: self.theta.sin() * self.phi.sin(),
            w: self.theta.cos(),
        }
    }

    /// A state whose Bloch vector points along these angles
    ///
    /// With the `u, v, w` sign convention the relative phase of β is `φ + π`.
    pub fn to_state(&self) -> QubitState {
        let half = self.theta / 2.0;
        let alpha = Complex64::new(half.cos(), 0.0);
        let beta = -Complex64::from_polar(half.sin(), self.phi);
        QubitState::new(alpha, beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn state(a: (f64, f64), b: (f64, f64)) -> QubitState {
        QubitState::new(Complex64::new(a.0, a.1), Complex64::new(b.0, b.1))
    }

    #[test]
    fn test_zero_state() {
        let bloch = BlochVector::from_state(&QubitState::zero());

        assert!((bloch.u).abs() < 1e-10);
        assert!((bloch.v).abs() < 1e-10);
        assert!((bloch.w - 1.0).abs() < 1e-10);
        assert!(bloch.is_pure(1e-10));
    }

    #[test]
    fn test_one_state() {
        let bloch = BlochVector::from_state(&QubitState::one());

        assert!((bloch.u).abs() < 1e-10);
        assert!((bloch.v).abs() < 1e-10);
        assert!((bloch.w + 1.0).abs() < 1e-10);
        assert!(bloch.is_pure(1e-10));
    }

    #[test]
    fn test_plus_state_sits_at_negative_u() {
        let bloch = BlochVector::from_state(&state((FRAC_1_SQRT_2, 0.0), (FRAC_1_SQRT_2, 0.0)));

        assert_relative_eq!(bloch.u, -1.0, epsilon = 1e-10);
        assert_relative_eq!(bloch.v, 0.0, epsilon = 1e-10);
        assert_relative_eq!(bloch.w, 0.0, epsilon = 1e-10);
        assert!(bloch.describe().contains("|+⟩"));
    }

    #[test]
    fn test_imaginary_beta() {
        // αβ̄ = (1/√2)(i/√2) = i/2
        let bloch = BlochVector::from_state(&state((FRAC_1_SQRT_2, 0.0), (0.0, -FRAC_1_SQRT_2)));

        assert_relative_eq!(bloch.u, 0.0, epsilon = 1e-10);
        assert_relative_eq!(bloch.v, 1.0, epsilon = 1e-10);
        assert_relative_eq!(bloch.w, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_reduced_fidelity_projection() {
        let bloch = BlochVector::from_real_amplitudes(1.0, 1.0);
        assert_relative_eq!(bloch.u, 1.0, epsilon = 1e-12);
        assert_eq!(bloch.v, 0.0);
        assert_relative_eq!(bloch.w, 0.0, epsilon = 1e-12);

        // Unnormalized input is rescaled
        let bloch = BlochVector::from_real_amplitudes(3.0, 0.0);
        assert_relative_eq!(bloch.w, 1.0, epsilon = 1e-12);

        assert_eq!(BlochVector::from_real_amplitudes(0.0, 0.0), BlochVector::NORTH);
        assert_eq!(BlochVector::from_real_amplitudes(f64::NAN, 1.0), BlochVector::NORTH);
    }

    #[test]
    fn test_angles_conversion() {
        let angles = BlochAngles {
            theta: PI / 2.0,
            phi: 0.0,
        };
        let vector = angles.to_vector();

        assert!((vector.u - 1.0).abs() < 1e-10);
        assert!((vector.v).abs() < 1e-10);
        assert!((vector.w).abs() < 1e-10);
    }

    #[test]
    fn test_angles_to_state_matches_vector() {
        for &(theta, phi) in &[(0.3, 0.0), (PI / 2.0, PI / 3.0), (2.5, 4.0), (PI, 1.0)] {
            let angles = BlochAngles { theta, phi };
            let expected = angles.to_vector();
            let actual = angles.to_state().bloch_vector();
            assert_relative_eq!(actual.u, expected.u, epsilon = 1e-12);
            assert_relative_eq!(actual.v, expected.v, epsilon = 1e-12);
            assert_relative_eq!(actual.w, expected.w, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_roundtrip_conversion() {
        let original = BlochVector::new(0.0, 0.707, 0.707);
        let reconstructed = original.to_angles().to_vector();

        assert!((original.u - reconstructed.u).abs() < 1e-2);
        assert!((original.v - reconstructed.v).abs() < 1e-2);
        assert!((original.w - reconstructed.w).abs() < 1e-2);
    }

    #[test]
    fn test_describe_poles() {
        assert!(BlochVector::NORTH.describe().contains("north pole"));
        assert!(BlochVector::new(0.0, 0.0, -1.0).describe().contains("south pole"));
        assert!(BlochVector::new(0.1, 0.1, 0.1).describe().contains("Mixed"));
    }

    #[test]
    fn test_display() {
        let s = format!("{}", BlochVector::new(1.0, 0.0, 0.0));
        assert_eq!(s, "BlochVector(1.0000, 0.0000, 0.0000)");
    }
}
