//! Constant single-qubit matrices
//!
//! Pauli matrices, their half-scaled generators, and closed-form rotation
//! matrices used as references for the general exponential in [`crate::expm`].

use blochy_core::{Complex64, Operator};

// Compile-time constant helpers
const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const HALF: Complex64 = Complex64::new(0.5, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

/// Pauli-X
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: Operator = Operator::from_rows([[ZERO, ONE], [ONE, ZERO]]);

/// Pauli-Y
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: Operator = Operator::from_rows([[ZERO, NEG_I], [I, ZERO]]);

/// Pauli-Z
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: Operator = Operator::from_rows([[ONE, ZERO], [ZERO, NEG_ONE]]);

/// Rotation generator about X, `X/2`
pub const GENERATOR_X: Operator = Operator::from_rows([[ZERO, HALF], [HALF, ZERO]]);

/// Rotation generator about Y, `Y/2`
pub const GENERATOR_Y: Operator = Operator::from_rows([
    [ZERO, Complex64::new(0.0, -0.5)],
    [Complex64::new(0.0, 0.5), ZERO],
]);

/// Rotation generator about Z, `Z/2`
pub const GENERATOR_Z: Operator =
    Operator::from_rows([[HALF, ZERO], [ZERO, Complex64::new(-0.5, 0.0)]]);

/// RX(θ) = [[cos(θ/2),    -i·sin(θ/2)],
///          [-i·sin(θ/2),  cos(θ/2)]]
#[inline]
pub fn rotation_x(theta: f64) -> Operator {
    let half_theta = theta / 2.0;
    let (sin_val, cos_val) = half_theta.sin_cos();

    Operator::new(
        Complex64::new(cos_val, 0.0),
        Complex64::new(0.0, -sin_val),
        Complex64::new(0.0, -sin_val),
        Complex64::new(cos_val, 0.0),
    )
}

/// RY(θ) = [[cos(θ/2),  -sin(θ/2)],
///          [sin(θ/2),   cos(θ/2)]]
#[inline]
pub fn rotation_y(theta: f64) -> Operator {
    let half_theta = theta / 2.0;
    let (sin_val, cos_val) = half_theta.sin_cos();

    Operator::new(
        Complex64::new(cos_val, 0.0),
        Complex64::new(-sin_val, 0.0),
        Complex64::new(sin_val, 0.0),
        Complex64::new(cos_val, 0.0),
    )
}

/// RZ(θ) = [[e^(-iθ/2),  0       ],
///          [0,          e^(iθ/2)]]
#[inline]
pub fn rotation_z(theta: f64) -> Operator {
    let half_theta = theta / 2.0;
    let (sin_val, cos_val) = half_theta.sin_cos();

    Operator::new(
        Complex64::new(cos_val, -sin_val),
        ZERO,
        ZERO,
        Complex64::new(cos_val, sin_val),
    )
}
