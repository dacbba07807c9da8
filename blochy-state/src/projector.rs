//! Bloch projection and trajectory interpolation
//!
//! [`project`] maps a state to `(u, v, w)`:
//!
//! ```text
//! u = -2·Re(α·β̄)    v = 2·Im(α·β̄)    w = |α|² - |β|²
//! ```
//!
//! [`interpolate`] samples the path a gate traces between two states by
//! applying growing fractions of the gate to the starting state.

use crate::gate::PreparedGate;
use crate::validation::{stabilize, INSTABILITY_TOLERANCE};
use blochy_core::{BlochVector, BlochyError, QubitState, Result, NORM_TOLERANCE};

/// Project a state onto the Bloch sphere
///
/// States that have drifted off unit norm are renormalized first, so the
/// result always lies on or inside the unit sphere. Drift above
/// [`INSTABILITY_TOLERANCE`] is logged. A state that cannot be renormalized
/// (zero or non-finite norm) has no direction and projects to the north pole.
pub fn project(state: &QubitState) -> BlochVector {
    match stabilize(state, NORM_TOLERANCE) {
        Ok(stable) => {
            if stable.check.exceeds(INSTABILITY_TOLERANCE) {
                tracing::warn!(
                    deviation = stable.check.deviation,
                    "renormalized state before projection"
                );
            }
            BlochVector::from_state(&stable.state)
        },
        Err(err) => {
            tracing::warn!(error = %err, "state cannot be projected, using north pole");
            BlochVector::NORTH
        },
    }
}

/// Reduced-fidelity projection from real amplitude magnitudes
///
/// Phase is unavailable in this mode, so `v` is always 0.
pub fn project_reduced(alpha: f64, beta: f64) -> BlochVector {
    BlochVector::from_real_amplitudes(alpha, beta)
}

/// States along the path of `gate` applied to `from`
///
/// Returns `divider + 1` states: sample `i` is the first `i / divider` of the
/// gate applied to `from`, so the first sample is `from` itself and the last is
/// the full gate's result.
///
/// # Errors
/// Returns [`BlochyError::InvalidParameter`] when `divider` is 0 or
/// `divider + 1` samples cannot be counted.
pub fn interpolate_states(
    from: &QubitState,
    gate: &PreparedGate,
    divider: usize,
) -> Result<Vec<QubitState>> {
    if divider == 0 {
        return Err(BlochyError::InvalidParameter {
            name: "divider",
            value: 0.0,
        });
    }

    let samples = divider.checked_add(1).ok_or(BlochyError::InvalidParameter {
        name: "divider",
        value: divider as f64,
    })?;

    let mut states = Vec::with_capacity(samples);
    states.push(*from);
    for i in 1..divider {
        let fraction = i as f64 / divider as f64;
        states.push(gate.partial_unitary(fraction)?.apply(from));
    }
    states.push(gate.unitary()?.apply(from));
    Ok(states)
}

/// Bloch vectors along the path of `gate` applied to `from`
///
/// Projections of [`interpolate_states`], in the same order.
///
/// # Errors
/// As [`interpolate_states`].
pub fn interpolate(
    from: &QubitState,
    gate: &PreparedGate,
    divider: usize,
) -> Result<Vec<BlochVector>> {
    Ok(interpolate_states(from, gate, divider)?
        .iter()
        .map(project)
        .collect())
}
