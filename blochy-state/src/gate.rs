//! Gates prepared for application and interpolation
//!
//! A [`PreparedGate`] holds a validated generator (or Hamiltonian) together
//! with its full extent, the rotation angle or pulse duration. Fractions of the
//! extent give the intermediate unitaries used to draw the trail.

use blochy_core::{BlochyError, Operator, Result};
use blochy_gates::{
    pulse_hamiltonian, pulse_propagator, rotation_unitary, Axis, PulseAxis, PulseParams,
};
use std::f64::consts::FRAC_PI_2;

/// Fewest interpolation sub-steps for any gate
pub const MIN_DIVIDER: usize = 6;

/// Rotation sub-steps per quarter turn
pub const STEPS_PER_QUARTER_TURN: f64 = 10.0;

/// Pulse sub-step length in seconds
pub const PULSE_SAMPLE_INTERVAL: f64 = 0.01;

/// Which exponential convention a gate follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKind {
    /// `exp(-iθG)`
    Rotation,
    /// `exp(+iτH)`
    Pulse,
}

/// A validated gate ready to be applied in whole or in part
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreparedGate {
    kind: GateKind,
    operator: Operator,
    extent: f64,
}

impl PreparedGate {
    /// Rotation by `angle` radians about `axis`
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidParameter`] for a non-finite angle and
    /// [`BlochyError::MalformedOperator`] for a non-Hermitian custom axis.
    pub fn rotation(axis: &Axis, angle: f64) -> Result<Self> {
        BlochyError::check_finite("angle", angle)?;
        let generator = axis.generator()?;
        Ok(Self {
            kind: GateKind::Rotation,
            operator: generator,
            extent: angle,
        })
    }

    /// Pulse along `axis` for `params.duration` seconds
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidParameter`] if any parameter is not finite.
    pub fn pulse(axis: PulseAxis, params: &PulseParams) -> Result<Self> {
        params.validate()?;
        let hamiltonian = pulse_hamiltonian(axis, params);
        hamiltonian.validate_hermitian()?;
        Ok(Self {
            kind: GateKind::Pulse,
            operator: hamiltonian,
            extent: params.duration,
        })
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// Generator of a rotation, or Hamiltonian of a pulse
    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    /// Rotation angle in radians, or pulse duration in seconds
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Unitary of the whole gate
    pub fn unitary(&self) -> Result<Operator> {
        self.exponentiate(self.extent)
    }

    /// Unitary of the first `fraction` of the gate
    pub fn partial_unitary(&self, fraction: f64) -> Result<Operator> {
        self.exponentiate(self.extent * fraction)
    }

    /// Number of interpolation sub-steps this gate asks for
    ///
    /// Rotations take ten steps per quarter turn, pulses one step per 10 ms,
    /// and never fewer than [`MIN_DIVIDER`].
    pub fn default_divider(&self) -> usize {
        let steps = match self.kind {
            GateKind::Rotation => self.extent.abs() / FRAC_PI_2 * STEPS_PER_QUARTER_TURN,
            GateKind::Pulse => self.extent.abs() / PULSE_SAMPLE_INTERVAL,
        };
        // float-to-int casts saturate
        (steps.round() as usize).max(MIN_DIVIDER)
    }

    fn exponentiate(&self, t: f64) -> Result<Operator> {
        match self.kind {
            GateKind::Rotation => rotation_unitary(&self.operator, t),
            GateKind::Pulse => pulse_propagator(&self.operator, t),
        }
    }
}
