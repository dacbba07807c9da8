//! 2x2 complex operators acting on a single qubit
//!
//! An [`Operator`] is either a Hermitian generator (a Pauli matrix scaled by ½,
//! or a real combination of them) or an already-exponentiated unitary. Operators
//! are plain values: every arithmetic method returns a new matrix.

use crate::error::BlochyError;
use crate::qubit_state::QubitState;
use crate::Result;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Default tolerance used when checking Hermiticity of user-supplied generators
pub const HERMITIAN_TOLERANCE: f64 = 1e-9;

/// A 2x2 complex matrix stored row-major
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operator {
    rows: [[Complex64; 2]; 2],
}

/// Real coefficients of a Hermitian operator in the Pauli basis
///
/// `G = identity·I + x·σx + y·σy + z·σz`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PauliComponents {
    pub identity: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PauliComponents {
    /// Length of the traceless part `(x, y, z)`
    pub fn vector_norm(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }
}

impl Operator {
    /// The 2x2 identity
    pub const IDENTITY: Operator = Operator::from_rows([[ONE, ZERO], [ZERO, ONE]]);

    /// The 2x2 zero matrix
    pub const ZERO: Operator = Operator::from_rows([[ZERO, ZERO], [ZERO, ZERO]]);

    /// Build an operator from its four entries, row-major
    pub const fn new(m00: Complex64, m01: Complex64, m10: Complex64, m11: Complex64) -> Self {
        Self {
            rows: [[m00, m01], [m10, m11]],
        }
    }

    /// Build an operator from a row-major array
    pub const fn from_rows(rows: [[Complex64; 2]; 2]) -> Self {
        Self { rows }
    }

    /// Build an operator from `[re, im]` pairs, the layout used on the wire
    pub fn from_parts(parts: [[[f64; 2]; 2]; 2]) -> Self {
        let c = |p: [f64; 2]| Complex64::new(p[0], p[1]);
        Self::new(
            c(parts[0][0]),
            c(parts[0][1]),
            c(parts[1][0]),
            c(parts[1][1]),
        )
    }

    /// Row-major entries
    pub fn rows(&self) -> &[[Complex64; 2]; 2] {
        &self.rows
    }

    /// Entry at `(row, col)`
    ///
    /// # Panics
    /// Panics if `row` or `col` is not 0 or 1.
    pub fn entry(&self, row: usize, col: usize) -> Complex64 {
        self.rows[row][col]
    }

    /// Scale every entry by a real factor
    pub fn scale(&self, factor: f64) -> Self {
        self.map(|z| z * factor)
    }

    /// Scale every entry by a complex factor
    pub fn scale_complex(&self, factor: Complex64) -> Self {
        self.map(|z| z * factor)
    }

    /// Conjugate transpose
    pub fn adjoint(&self) -> Self {
        let m = &self.rows;
        Self::new(m[0][0].conj(), m[1][0].conj(), m[0][1].conj(), m[1][1].conj())
    }

    /// Matrix product `self · rhs`
    pub fn matmul(&self, rhs: &Operator) -> Self {
        let a = &self.rows;
        let b = &rhs.rows;
        let mut out = [[ZERO; 2]; 2];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j];
            }
        }
        Self::from_rows(out)
    }

    /// Apply the operator to a state, producing a new state
    ///
    /// The result is not renormalized; for a unitary operator it keeps the
    /// norm of the input up to rounding.
    pub fn apply(&self, state: &QubitState) -> QubitState {
        let m = &self.rows;
        let (alpha, beta) = (state.alpha(), state.beta());
        QubitState::new(
            m[0][0] * alpha + m[0][1] * beta,
            m[1][0] * alpha + m[1][1] * beta,
        )
    }

    /// Trace of the matrix
    pub fn trace(&self) -> Complex64 {
        self.rows[0][0] + self.rows[1][1]
    }

    /// All four entries are finite
    pub fn is_finite(&self) -> bool {
        self.rows.iter().flatten().all(|z| z.re.is_finite() && z.im.is_finite())
    }

    /// Check `M = M†` within `tolerance`
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        self.hermitian_violation(tolerance).is_none()
    }

    /// Check `U†U = I` within `tolerance`
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        let product = self.adjoint().matmul(self);
        product
            .rows
            .iter()
            .flatten()
            .zip(Operator::IDENTITY.rows.iter().flatten())
            .all(|(a, b)| (a - b).norm() <= tolerance)
    }

    /// Validate that this operator can serve as a rotation generator
    ///
    /// # Errors
    /// Returns [`BlochyError::MalformedOperator`] when an entry is not finite or
    /// the matrix is not conjugate-symmetric within [`HERMITIAN_TOLERANCE`].
    pub fn validate_hermitian(&self) -> Result<()> {
        if !self.is_finite() {
            return Err(BlochyError::malformed_operator("operator has non-finite entries"));
        }
        match self.hermitian_violation(HERMITIAN_TOLERANCE) {
            None => Ok(()),
            Some(reason) => Err(BlochyError::malformed_operator(reason)),
        }
    }

    /// Decompose into Pauli coefficients
    ///
    /// Exact for Hermitian operators. For a non-Hermitian input the
    /// anti-Hermitian part is discarded, so callers validate first.
    pub fn pauli_components(&self) -> PauliComponents {
        let m = &self.rows;
        PauliComponents {
            identity: (m[0][0].re + m[1][1].re) / 2.0,
            x: (m[0][1].re + m[1][0].re) / 2.0,
            y: (m[1][0].im - m[0][1].im) / 2.0,
            z: (m[0][0].re - m[1][1].re) / 2.0,
        }
    }

    /// Rebuild an operator from Pauli coefficients
    pub fn from_pauli_components(c: PauliComponents) -> Self {
        Self::new(
            Complex64::new(c.identity + c.z, 0.0),
            Complex64::new(c.x, -c.y),
            Complex64::new(c.x, c.y),
            Complex64::new(c.identity - c.z, 0.0),
        )
    }

    fn hermitian_violation(&self, tolerance: f64) -> Option<String> {
        let m = &self.rows;
        if m[0][0].im.abs() > tolerance || m[1][1].im.abs() > tolerance {
            return Some(format!(
                "diagonal entries must be real, got {} and {}",
                m[0][0], m[1][1]
            ));
        }
        if (m[0][1] - m[1][0].conj()).norm() > tolerance {
            return Some(format!(
                "off-diagonal entries {} and {} are not complex conjugates",
                m[0][1], m[1][0]
            ));
        }
        None
    }

    fn map(&self, f: impl Fn(Complex64) -> Complex64) -> Self {
        let m = &self.rows;
        Self::new(f(m[0][0]), f(m[0][1]), f(m[1][0]), f(m[1][1]))
    }

    fn zip_with(&self, rhs: &Operator, f: impl Fn(Complex64, Complex64) -> Complex64) -> Self {
        let (a, b) = (&self.rows, &rhs.rows);
        Self::new(
            f(a[0][0], b[0][0]),
            f(a[0][1], b[0][1]),
            f(a[1][0], b[1][0]),
            f(a[1][1], b[1][1]),
        )
    }
}

impl Default for Operator {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Operator {
    type Output = Operator;

    fn add(self, rhs: Operator) -> Operator {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl Sub for Operator {
    type Output = Operator;

    fn sub(self, rhs: Operator) -> Operator {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl Neg for Operator {
    type Output = Operator;

    fn neg(self) -> Operator {
        self.map(|z| -z)
    }
}

impl Mul for Operator {
    type Output = Operator;

    fn mul(self, rhs: Operator) -> Operator {
        self.matmul(&rhs)
    }
}

impl Mul<f64> for Operator {
    type Output = Operator;

    fn mul(self, rhs: f64) -> Operator {
        self.scale(rhs)
    }
}

impl Mul<Complex64> for Operator {
    type Output = Operator;

    fn mul(self, rhs: Complex64) -> Operator {
        self.scale_complex(rhs)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.rows;
        write!(
            f,
            "[[{:.4}, {:.4}], [{:.4}, {:.4}]]",
            m[0][0], m[0][1], m[1][0], m[1][1]
        )
    }
}
