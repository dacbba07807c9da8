//! Session counters

use serde::{Deserialize, Serialize};

/// Running counts kept by a [`crate::Session`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatistics {
    /// Rotations and pulses applied, including ones later undone
    pub gates_applied: usize,

    /// Undos that popped a state
    pub undos: usize,

    /// Restarts
    pub restarts: usize,

    /// Gate results pulled back to unit norm
    pub renormalizations: usize,

    /// Renormalizations whose drift exceeded the configured tolerance
    pub instabilities: usize,
}

impl SessionStatistics {
    /// Create a new statistics object
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of applied gates that needed renormalization
    pub fn renormalization_rate(&self) -> f64 {
        if self.gates_applied == 0 {
            0.0
        } else {
            self.renormalizations as f64 / self.gates_applied as f64
        }
    }
}

impl std::fmt::Display for SessionStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Session Statistics:")?;
        writeln!(f, "  Gates applied:     {}", self.gates_applied)?;
        writeln!(f, "  Undos:             {}", self.undos)?;
        writeln!(f, "  Restarts:          {}", self.restarts)?;
        writeln!(f, "  Renormalizations:  {}", self.renormalizations)?;
        writeln!(f, "  Instabilities:     {}", self.instabilities)?;
        Ok(())
    }
}
