//! Commands accepted from the presentation layer, and the frame sent back
//!
//! Commands arrive as JSON tagged by `kind`:
//!
//! ```json
//! { "kind": "rotate", "axis": "x", "angleRadians": 1.5708 }
//! { "kind": "pulse", "axis": "y", "durationSeconds": 0.5, "detuning": 0, "amplitude": 1, "phaseDegrees": 0 }
//! { "kind": "undo" }
//! { "kind": "restart" }
//! ```
//!
//! A rotation axis is either a name (`"x"`, `"y"`, `"z"`) or a 2x2 Hermitian
//! generator written as `[[[re, im], [re, im]], [[re, im], [re, im]]]`.

use blochy_core::{BlochVector, BlochyError, Operator, Result};
use blochy_gates::{Axis, PulseParams};
use serde::{Deserialize, Serialize};

/// Rotation axis as written in a command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisSpec {
    Named(String),
    Generator(Operator),
}

impl AxisSpec {
    /// Resolve into an [`Axis`]
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidAxis`] for an unknown name.
    /// Custom generators are checked when the rotation is prepared.
    pub fn to_axis(&self) -> Result<Axis> {
        match self {
            AxisSpec::Named(name) => name.parse(),
            AxisSpec::Generator(op) => Ok(Axis::Custom(*op)),
        }
    }
}

impl From<&str> for AxisSpec {
    fn from(name: &str) -> Self {
        AxisSpec::Named(name.to_string())
    }
}

/// A user action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Command {
    /// Free rotation about a named or custom axis
    #[serde(rename_all = "camelCase")]
    Rotate { axis: AxisSpec, angle_radians: f64 },

    /// Driven pulse; unset fields fall back to the session's default pulse
    #[serde(rename_all = "camelCase")]
    Pulse {
        axis: String,
        #[serde(default)]
        duration_seconds: Option<f64>,
        #[serde(default)]
        detuning: Option<f64>,
        #[serde(default)]
        amplitude: Option<f64>,
        #[serde(default)]
        phase_degrees: Option<f64>,
    },

    /// Half-turn about the Hadamard axis
    Hadamard,

    /// Rotation about an axis given by spherical angles, all in degrees
    #[serde(rename_all = "camelCase")]
    CustomRotate {
        polar_degrees: f64,
        azimuth_degrees: f64,
        angle_degrees: f64,
    },

    Undo,
    Restart,

    /// Change trail settings; unset fields are left alone
    #[serde(rename_all = "camelCase")]
    SetPhosphor {
        #[serde(default)]
        enabled: Option<bool>,
        #[serde(default)]
        length: Option<usize>,
    },

    ClearTrail,
}

impl Command {
    /// Parse a single JSON command
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidCommand`] when the JSON does not describe
    /// a command.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BlochyError::InvalidCommand(e.to_string()))
    }

    /// Resolve a pulse command's parameters against `defaults`
    pub(crate) fn pulse_params(
        defaults: &PulseParams,
        duration_seconds: Option<f64>,
        detuning: Option<f64>,
        amplitude: Option<f64>,
        phase_degrees: Option<f64>,
    ) -> PulseParams {
        PulseParams {
            duration: duration_seconds.unwrap_or(defaults.duration),
            detuning: detuning.unwrap_or(defaults.detuning),
            amplitude: amplitude.unwrap_or(defaults.amplitude),
            phase_degrees: phase_degrees.unwrap_or(defaults.phase_degrees),
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Rotate { .. } => "rotate",
            Command::Pulse { .. } => "pulse",
            Command::Hadamard => "hadamard",
            Command::CustomRotate { .. } => "customRotate",
            Command::Undo => "undo",
            Command::Restart => "restart",
            Command::SetPhosphor { .. } => "setPhosphor",
            Command::ClearTrail => "clearTrail",
        }
    }
}

/// What the presentation layer draws after each command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFrame {
    /// Projection of the current state
    pub current_vector: BlochVector,
    /// Trail segments from oldest to newest; empty when the trail is off
    pub trail: Vec<Vec<BlochVector>>,
    /// Ket label of the current state
    pub state_label: String,
}

impl RenderFrame {
    /// Serialize to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
