//! Gate library for Blochy
//!
//! This crate turns rotation and pulse requests into 2x2 unitaries:
//!
//! - **Generators**: the Pauli matrices and their half-scaled rotation
//!   generators, as compile-time constants ([`matrices`])
//! - **Axis dispatch**: a closed [`Axis`] enum with a single generator lookup,
//!   plus the two drive axes of a pulse ([`PulseAxis`])
//! - **Exponentials**: closed-form `exp(∓itG)` for any Hermitian generator ([`expm`])
//! - **Pulses**: drive Hamiltonians, pulse propagators and Rabi curves ([`pulse`])
//!
//! # Example
//!
//! ```
//! use blochy_gates::{rotation_unitary, Axis};
//! use blochy_core::QubitState;
//! use std::f64::consts::PI;
//!
//! let generator = Axis::X.generator().unwrap();
//! let u = rotation_unitary(&generator, PI).unwrap();
//! let flipped = u.apply(&QubitState::zero());
//! assert!((flipped.bloch_vector().w + 1.0).abs() < 1e-12);
//! ```

pub mod axis;
pub mod expm;
pub mod matrices;
pub mod pulse;

// Re-export commonly used items
pub use axis::{Axis, PulseAxis};
pub use expm::{pulse_propagator, rotation_unitary};
pub use pulse::{pulse_hamiltonian, pulse_unitary, rabi_curve, PulseParams, RabiCurve};
