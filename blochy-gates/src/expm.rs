//! Closed-form exponentials of 2x2 Hermitian matrices
//!
//! Any Hermitian `G` decomposes as `g₀·I + g⃗·σ`. With `r = |g⃗|` and
//! `n̂ = g⃗/r`, Pauli algebra gives
//!
//! ```text
//! exp(∓itG) = e^{∓itg₀} · [cos(tr)·I ∓ i·sin(tr)·(n̂·σ)]
//! ```
//!
//! For `G = σ/2` this is exactly `cos(t/2)·I ∓ i·sin(t/2)·σ`, matching the
//! closed forms in [`crate::matrices`] entry for entry.
//!
//! Free rotations use `exp(-iθG)` and driven pulses use `exp(+iτH)`. The two
//! conventions fix the handedness of each gate family and are kept as separate
//! entry points.

use blochy_core::{Complex64, Operator, PauliComponents, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sign {
    Minus,
    Plus,
}

/// Rotation unitary `U = exp(-i·angle·G)`
///
/// # Errors
/// Returns [`blochy_core::BlochyError::MalformedOperator`] if `generator` is not Hermitian.
pub fn rotation_unitary(generator: &Operator, angle: f64) -> Result<Operator> {
    generator.validate_hermitian()?;
    Ok(exp_hermitian(&generator.pauli_components(), angle, Sign::Minus))
}

/// Pulse propagator `U = exp(+i·duration·H)`
///
/// # Errors
/// Returns [`blochy_core::BlochyError::MalformedOperator`] if `hamiltonian` is not Hermitian.
pub fn pulse_propagator(hamiltonian: &Operator, duration: f64) -> Result<Operator> {
    hamiltonian.validate_hermitian()?;
    Ok(exp_hermitian(&hamiltonian.pauli_components(), duration, Sign::Plus))
}

fn exp_hermitian(c: &PauliComponents, t: f64, sign: Sign) -> Operator {
    let s = match sign {
        Sign::Minus => -1.0,
        Sign::Plus => 1.0,
    };

    let r = c.vector_norm();
    let core = if r == 0.0 {
        Operator::IDENTITY
    } else {
        let (sin_val, cos_val) = (t * r).sin_cos();
        let (nx, ny, nz) = (c.x / r, c.y / r, c.z / r);
        let k = s * sin_val;
        // cos·I + i·k·(n̂·σ)
        Operator::new(
            Complex64::new(cos_val, k * nz),
            Complex64::new(k * ny, k * nx),
            Complex64::new(-k * ny, k * nx),
            Complex64::new(cos_val, -k * nz),
        )
    };

    if c.identity == 0.0 {
        core
    } else {
        core.scale_complex(Complex64::from_polar(1.0, s * t * c.identity))
    }
}
