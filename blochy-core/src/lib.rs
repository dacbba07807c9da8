//! Core types for Blochy single-qubit state evolution
//!
//! This crate provides the value types shared by the gate library and the
//! state engine:
//! - [`QubitState`]: a pure state `α|0⟩ + β|1⟩`
//! - [`Operator`]: a 2x2 complex matrix (generator or unitary)
//! - [`BlochVector`]: the `(u, v, w)` projection rendered on the sphere
//!
//! # Example
//! ```
//! use blochy_core::{BlochVector, Operator, QubitState};
//!
//! let state = Operator::IDENTITY.apply(&QubitState::zero());
//! assert_eq!(state.bloch_vector(), BlochVector::NORTH);
//! ```

pub mod bloch;
pub mod error;
pub mod operator;
pub mod qubit_state;

// Re-exports for convenience
pub use bloch::{BlochAngles, BlochVector};
pub use error::BlochyError;
pub use num_complex::Complex64;
pub use operator::{Operator, PauliComponents, HERMITIAN_TOLERANCE};
pub use qubit_state::{QubitState, NORM_TOLERANCE};

/// Type alias for results in Blochy
pub type Result<T> = std::result::Result<T, BlochyError>;
