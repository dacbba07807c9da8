//! Driven pulses and Rabi oscillations
//!
//! A pulse drives the qubit with the Hamiltonian
//!
//! ```text
//! H = 2π·Δ·(Z/2) + 2π·A·T(φ),   T(φ) = [[0, ½e^{iφ}], [½e^{-iφ}, 0]]
//! ```
//!
//! where `Δ` is the detuning and `A` the drive amplitude, both in Hz, and `φ`
//! is the drive phase. Driving along X adds π/2 to the phase. The propagator
//! for a pulse of length `τ` seconds is `exp(+iτH)`.

use crate::axis::PulseAxis;
use crate::expm::pulse_propagator;
use crate::matrices::GENERATOR_Z;
use blochy_core::{BlochyError, Complex64, Operator, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Number of samples in a Rabi curve
pub const RABI_SAMPLES: usize = 101;

/// Minimum time span shown by a Rabi curve, in seconds
pub const RABI_MIN_SPAN: f64 = 2.0;

/// Drive parameters of a pulse
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PulseParams {
    /// Pulse length in seconds
    ///
    /// Default: 0.5
    pub duration: f64,
    /// Detuning Δ in Hz
    ///
    /// Default: 0.0
    pub detuning: f64,
    /// Drive amplitude in Hz
    ///
    /// Default: 1.0
    pub amplitude: f64,
    /// Drive phase in degrees
    ///
    /// Default: 0.0
    pub phase_degrees: f64,
}

impl Default for PulseParams {
    fn default() -> Self {
        Self {
            duration: 0.5,
            detuning: 0.0,
            amplitude: 1.0,
            phase_degrees: 0.0,
        }
    }
}

impl PulseParams {
    /// Create pulse parameters with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pulse length
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Set the detuning
    pub fn with_detuning(mut self, detuning: f64) -> Self {
        self.detuning = detuning;
        self
    }

    /// Set the drive amplitude
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Set the drive phase
    pub fn with_phase_degrees(mut self, phase_degrees: f64) -> Self {
        self.phase_degrees = phase_degrees;
        self
    }

    /// Reject non-finite parameters
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidParameter`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        BlochyError::check_finite("duration", self.duration)?;
        BlochyError::check_finite("detuning", self.detuning)?;
        BlochyError::check_finite("amplitude", self.amplitude)?;
        BlochyError::check_finite("phase", self.phase_degrees)?;
        Ok(())
    }

    /// Generalized Rabi frequency `Ω = 2π·√(Δ² + A²)` in rad/s
    pub fn rabi_frequency(&self) -> f64 {
        2.0 * PI * self.detuning.hypot(self.amplitude)
    }
}

/// Drive Hamiltonian for a pulse along `axis`
pub fn pulse_hamiltonian(axis: PulseAxis, params: &PulseParams) -> Operator {
    let detuning = 2.0 * PI * params.detuning;
    let amplitude = 2.0 * PI * params.amplitude;
    let phase = params.phase_degrees / 180.0 * PI + axis.phase_offset();

    let drive = Operator::new(
        Complex64::new(0.0, 0.0),
        Complex64::from_polar(0.5, phase),
        Complex64::from_polar(0.5, -phase),
        Complex64::new(0.0, 0.0),
    );

    GENERATOR_Z.scale(detuning) + drive.scale(amplitude)
}

/// Propagator `exp(+i·duration·H)` of a pulse along `axis`
///
/// `duration` overrides `params.duration` so that callers can evaluate
/// fractions of a pulse.
///
/// # Errors
/// Returns [`BlochyError::InvalidParameter`] if any parameter is not finite.
pub fn pulse_unitary(axis: PulseAxis, params: &PulseParams, duration: f64) -> Result<Operator> {
    params.validate()?;
    BlochyError::check_finite("duration", duration)?;
    pulse_propagator(&pulse_hamiltonian(axis, params), duration)
}

/// Excited-state population over time for a resonant-or-detuned drive
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RabiCurve {
    /// Sample times in seconds, evenly spaced from 0
    pub times: Vec<f64>,
    /// Population of `|1⟩` starting from `|0⟩` at each time
    pub populations: Vec<f64>,
    /// Pulse length, marked on the curve by renderers
    pub marker: f64,
}

/// Rabi formula `P(t) = (A/Ω)²·sin²(Ωt/2)` sampled over `[0, max(2, τ)]`
///
/// Frequencies are taken in angular units. A drive with `Ω = 0` leaves the
/// population at zero.
pub fn rabi_curve(params: &PulseParams) -> RabiCurve {
    let t_stop = params.duration.max(RABI_MIN_SPAN);
    let step = t_stop / (RABI_SAMPLES - 1) as f64;
    let times: Vec<f64> = (0..RABI_SAMPLES).map(|i| i as f64 * step).collect();

    let omega = params.rabi_frequency();
    let w1 = 2.0 * PI * params.amplitude;
    let populations = times
        .iter()
        .map(|&t| {
            if omega == 0.0 {
                0.0
            } else {
                let s = (w1 / omega) * (omega * t / 2.0).sin();
                s * s
            }
        })
        .collect();

    RabiCurve {
        times,
        populations,
        marker: params.duration,
    }
}
