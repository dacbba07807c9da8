//! The state engine
//!
//! A [`Session`] owns one qubit's undo history together with its phosphor
//! trail. The two are created, reset and mutated as a pair: every applied gate
//! pushes one state and (while the trail is on) appends one segment; every undo
//! pops the state and the segment that led to it.
//!
//! Gate application is all-or-nothing. Validation, exponentiation,
//! renormalization and interpolation all run before anything is mutated, so a
//! failed gate leaves the session exactly as it was.

use crate::command::{Command, RenderFrame};
use crate::config::SessionConfig;
use crate::gate::PreparedGate;
use crate::history::StateHistory;
use crate::projector::{interpolate, project};
use crate::statistics::SessionStatistics;
use crate::trail::{PhosphorTrail, TrailSegment};
use crate::validation::stabilize;
use blochy_core::{BlochVector, BlochyError, QubitState, Result, NORM_TOLERANCE};
use blochy_gates::{Axis, PulseAxis, PulseParams};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Result of a successful rotation or pulse
#[derive(Debug, Clone, PartialEq)]
pub struct GateOutcome {
    /// The state pushed onto the history
    pub state: QubitState,
    /// Interpolated path from the previous state to `state`; empty while the
    /// trail is disabled
    pub trajectory: Vec<BlochVector>,
    /// Whether the gate's result had to be pulled back to unit norm
    pub renormalized: bool,
}

/// Serializable copy of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// States from `|0⟩` to the current state
    pub history: Vec<QubitState>,
    /// Trail segments from oldest to newest
    pub trail: Vec<TrailSegment>,
    pub config: SessionConfig,
    pub statistics: SessionStatistics,
}

impl SessionSnapshot {
    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Single-qubit state engine with undo history and phosphor trail
///
/// # Example
///
/// ```
/// use blochy_state::{Session, SessionConfig};
/// use blochy_gates::Axis;
/// use std::f64::consts::PI;
///
/// let mut session = Session::new(SessionConfig::default()).unwrap();
/// session.rotate(&Axis::X, PI).unwrap();
/// assert!((session.current_vector().w + 1.0).abs() < 1e-12);
///
/// session.undo();
/// assert_eq!(session.history().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    history: StateHistory,
    trail: PhosphorTrail,
    config: SessionConfig,
    statistics: SessionStatistics,
}

impl Session {
    /// Create a session at `|0⟩` with an empty trail
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidConfig`] if `config` does not validate.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            history: StateHistory::new(),
            trail: PhosphorTrail::new(config.phosphor_length),
            config,
            statistics: SessionStatistics::new(),
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn trail(&self) -> &PhosphorTrail {
        &self.trail
    }

    pub fn statistics(&self) -> &SessionStatistics {
        &self.statistics
    }

    /// Top of the history stack
    pub fn current_state(&self) -> &QubitState {
        self.history.current()
    }

    /// Projection of the current state
    pub fn current_vector(&self) -> BlochVector {
        project(self.history.current())
    }

    /// Rotate the current state by `angle` radians about `axis`
    ///
    /// # Errors
    /// - [`BlochyError::InvalidParameter`] for a non-finite angle
    /// - [`BlochyError::MalformedOperator`] for a non-Hermitian custom axis
    /// - [`BlochyError::NumericInstability`] if the result cannot be normalized
    pub fn rotate(&mut self, axis: &Axis, angle: f64) -> Result<GateOutcome> {
        let gate = PreparedGate::rotation(axis, angle)?;
        let outcome = self.apply(&gate)?;
        tracing::debug!(
            axis = %axis,
            angle,
            depth = self.history.depth(),
            "applied rotation"
        );
        Ok(outcome)
    }

    /// Rotate about an axis given by name (`x`, `y` or `z`)
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidAxis`] for any other token, plus the
    /// errors of [`Session::rotate`].
    pub fn rotate_named(&mut self, axis: &str, angle: f64) -> Result<GateOutcome> {
        let axis: Axis = axis.parse()?;
        self.rotate(&axis, angle)
    }

    /// Half-turn about the Hadamard axis, taking `|0⟩` to `|+⟩`
    pub fn hadamard(&mut self) -> Result<GateOutcome> {
        self.rotate(&Axis::hadamard(), PI)
    }

    /// Rotate about an axis given by spherical angles, all in degrees
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidParameter`] if any angle is not finite.
    pub fn rotate_spherical(
        &mut self,
        polar_degrees: f64,
        azimuth_degrees: f64,
        angle_degrees: f64,
    ) -> Result<GateOutcome> {
        BlochyError::check_finite("polar", polar_degrees)?;
        BlochyError::check_finite("azimuth", azimuth_degrees)?;
        let axis = Axis::from_spherical(polar_degrees, azimuth_degrees);
        self.rotate(&axis, angle_degrees / 180.0 * PI)
    }

    /// Drive the current state with a pulse along `axis`
    ///
    /// # Errors
    /// - [`BlochyError::InvalidParameter`] for a non-finite pulse parameter
    /// - [`BlochyError::NumericInstability`] if the result cannot be normalized
    pub fn pulse(&mut self, axis: PulseAxis, params: &PulseParams) -> Result<GateOutcome> {
        let gate = PreparedGate::pulse(axis, params)?;
        let outcome = self.apply(&gate)?;
        tracing::debug!(
            axis = %axis,
            duration = params.duration,
            detuning = params.detuning,
            amplitude = params.amplitude,
            phase = params.phase_degrees,
            depth = self.history.depth(),
            "applied pulse"
        );
        Ok(outcome)
    }

    /// Pulse along `axis` with the configured default parameters
    pub fn pulse_default(&mut self, axis: PulseAxis) -> Result<GateOutcome> {
        let params = self.config.pulse;
        self.pulse(axis, &params)
    }

    /// Pop the current state and the trail segment that led to it
    ///
    /// With only `|0⟩` left this does nothing. Returns the new current state.
    pub fn undo(&mut self) -> &QubitState {
        let step = self.history.depth();
        if self.history.pop().is_some() {
            self.trail.pop_segment_for(step);
            self.statistics.undos += 1;
            tracing::debug!(depth = self.history.depth(), "undo");
        } else {
            tracing::debug!("undo ignored at initial state");
        }
        self.history.current()
    }

    /// Return to `|0⟩` with an empty trail
    pub fn restart(&mut self) {
        let depth = self.history.depth();
        self.history.reset();
        self.trail.clear();
        self.statistics.restarts += 1;
        tracing::debug!(discarded = depth, "restart");
    }

    /// Turn the trail on or off
    ///
    /// While off, gates record no segments and frames carry an empty trail.
    /// Segments recorded earlier are kept and show again once re-enabled.
    pub fn set_phosphor_enabled(&mut self, enabled: bool) {
        self.config.phosphor_enabled = enabled;
    }

    /// Change how many segments the trail keeps
    pub fn set_phosphor_length(&mut self, length: usize) {
        self.config.phosphor_length = length;
        self.trail.set_capacity(length);
    }

    /// Drop every trail segment; the history is untouched
    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    /// What the presentation layer should draw now
    pub fn frame(&self) -> RenderFrame {
        let trail = if self.config.phosphor_enabled {
            self.trail.to_vectors()
        } else {
            Vec::new()
        };
        RenderFrame {
            current_vector: self.current_vector(),
            trail,
            state_label: self.history.current().label(),
        }
    }

    /// Apply a command and return the resulting frame
    ///
    /// # Errors
    /// Returns the error of the underlying operation; the session is unchanged
    /// on error.
    pub fn execute(&mut self, command: Command) -> Result<RenderFrame> {
        tracing::trace!(command = command.name(), "executing command");
        match command {
            Command::Rotate {
                axis,
                angle_radians,
            } => {
                self.rotate(&axis.to_axis()?, angle_radians)?;
            },
            Command::Pulse {
                axis,
                duration_seconds,
                detuning,
                amplitude,
                phase_degrees,
            } => {
                let axis: PulseAxis = axis.parse()?;
                let params = Command::pulse_params(
                    &self.config.pulse,
                    duration_seconds,
                    detuning,
                    amplitude,
                    phase_degrees,
                );
                self.pulse(axis, &params)?;
            },
            Command::Hadamard => {
                self.hadamard()?;
            },
            Command::CustomRotate {
                polar_degrees,
                azimuth_degrees,
                angle_degrees,
            } => {
                self.rotate_spherical(polar_degrees, azimuth_degrees, angle_degrees)?;
            },
            Command::Undo => {
                self.undo();
            },
            Command::Restart => self.restart(),
            Command::SetPhosphor { enabled, length } => {
                if let Some(enabled) = enabled {
                    self.set_phosphor_enabled(enabled);
                }
                if let Some(length) = length {
                    self.set_phosphor_length(length);
                }
            },
            Command::ClearTrail => self.clear_trail(),
        }
        Ok(self.frame())
    }

    /// Parse a JSON command and apply it
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidCommand`] for JSON that is not a command,
    /// otherwise as [`Session::execute`].
    pub fn execute_json(&mut self, json: &str) -> Result<RenderFrame> {
        self.execute(Command::from_json(json)?)
    }

    /// Copy of the whole session for export
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            history: self.history.to_vec(),
            trail: self.trail.segments().cloned().collect(),
            config: self.config.clone(),
            statistics: self.statistics,
        }
    }

    fn apply(&mut self, gate: &PreparedGate) -> Result<GateOutcome> {
        let from = *self.history.current();

        let evolved = gate.unitary()?.apply(&from);
        let tolerance = NORM_TOLERANCE.min(self.config.renormalize_tolerance);
        let stable = stabilize(&evolved, tolerance).map_err(|err| {
            tracing::warn!(error = %err, "gate rejected, state left unchanged");
            err
        })?;

        let trajectory = if self.config.phosphor_enabled {
            let divider = gate.default_divider().min(self.config.max_divider);
            interpolate(&from, gate, divider)?
        } else {
            Vec::new()
        };

        // Nothing below can fail
        if stable.renormalized {
            self.statistics.renormalizations += 1;
            if stable.check.exceeds(self.config.renormalize_tolerance) {
                self.statistics.instabilities += 1;
                tracing::warn!(
                    norm_sqr = stable.check.norm_sqr,
                    deviation = stable.check.deviation,
                    "numeric instability, state renormalized"
                );
            }
        }

        self.history.push(stable.state);
        if !trajectory.is_empty() {
            let segment = TrailSegment::new(self.history.depth(), trajectory.clone());
            self.trail.append_segment(segment);
        }
        self.statistics.gates_applied += 1;

        Ok(GateOutcome {
            state: stable.state,
            trajectory,
            renormalized: stable.renormalized,
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        let config = SessionConfig::default();
        Self {
            history: StateHistory::new(),
            trail: PhosphorTrail::new(config.phosphor_length),
            config,
            statistics: SessionStatistics::new(),
        }
    }
}
