//! Session configuration

use blochy_core::{BlochyError, Result};
use blochy_gates::PulseParams;
use serde::{Deserialize, Serialize};

/// Configuration for a Bloch-sphere session
///
/// Everything the numerical core needs from the host is passed here; nothing
/// is read from presentation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    /// Number of trail segments kept
    ///
    /// Older segments are evicted first. Zero keeps no trail at all.
    ///
    /// Default: 10
    pub phosphor_length: usize,

    /// Record and report the phosphor trail
    ///
    /// When false, interpolation and trail growth are skipped entirely,
    /// regardless of `phosphor_length`.
    ///
    /// Default: true
    pub phosphor_enabled: bool,

    /// Norm drift reported as numeric instability
    ///
    /// States are always renormalized once `|α|² + |β|²` drifts beyond the
    /// unit-norm tolerance or this value, whichever is smaller. Drift larger
    /// than this value is also logged as a warning and counted in the session
    /// statistics.
    ///
    /// Default: 1e-6
    pub renormalize_tolerance: f64,

    /// Upper bound on interpolation sub-steps per gate
    ///
    /// Default: 2000
    pub max_divider: usize,

    /// Pulse parameters used when a pulse command leaves fields unset
    pub pulse: PulseParams,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            phosphor_length: 10,
            phosphor_enabled: true,
            renormalize_tolerance: 1e-6,
            max_divider: 2000,
            pulse: PulseParams::default(),
        }
    }
}

impl SessionConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration that keeps no trail
    ///
    /// Useful for headless evaluation where only the final state matters.
    pub fn without_phosphor() -> Self {
        Self {
            phosphor_enabled: false,
            ..Default::default()
        }
    }

    /// Parse a configuration from JSON, filling missing fields with defaults
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidConfig`] on malformed JSON or when
    /// [`SessionConfig::validate`] rejects the result.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BlochyError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the trail length
    pub fn with_phosphor_length(mut self, length: usize) -> Self {
        self.phosphor_length = length;
        self
    }

    /// Enable or disable the trail
    pub fn with_phosphor_enabled(mut self, enabled: bool) -> Self {
        self.phosphor_enabled = enabled;
        self
    }

    /// Set the instability reporting threshold
    pub fn with_renormalize_tolerance(mut self, tolerance: f64) -> Self {
        self.renormalize_tolerance = tolerance;
        self
    }

    /// Set the interpolation cap
    pub fn with_max_divider(mut self, max_divider: usize) -> Self {
        self.max_divider = max_divider;
        self
    }

    /// Set the default pulse parameters
    pub fn with_pulse(mut self, pulse: PulseParams) -> Self {
        self.pulse = pulse;
        self
    }

    /// Check the configuration for unusable values
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if !(self.renormalize_tolerance.is_finite() && self.renormalize_tolerance > 0.0) {
            return Err(BlochyError::InvalidConfig(format!(
                "renormalize_tolerance must be positive and finite, got {}",
                self.renormalize_tolerance
            )));
        }
        if self.max_divider == 0 {
            return Err(BlochyError::InvalidConfig(
                "max_divider must be at least 1".to_string(),
            ));
        }
        self.pulse
            .validate()
            .map_err(|e| BlochyError::InvalidConfig(format!("default pulse: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.phosphor_length, 10);
        assert!(config.phosphor_enabled);
        assert_eq!(config.renormalize_tolerance, 1e-6);
        assert_eq!(config.max_divider, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new()
            .with_phosphor_length(3)
            .with_phosphor_enabled(false)
            .with_max_divider(50);
        assert_eq!(config.phosphor_length, 3);
        assert!(!config.phosphor_enabled);
        assert_eq!(config.max_divider, 50);
        assert!(!SessionConfig::without_phosphor().phosphor_enabled);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(SessionConfig::new().with_max_divider(0).validate().is_err());
        assert!(SessionConfig::new()
            .with_renormalize_tolerance(0.0)
            .validate()
            .is_err());
        assert!(SessionConfig::new()
            .with_renormalize_tolerance(f64::NAN)
            .validate()
            .is_err());
        let bad_pulse = PulseParams::new().with_duration(f64::INFINITY);
        assert!(SessionConfig::new().with_pulse(bad_pulse).validate().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let config = SessionConfig::from_json(r#"{ "phosphorLength": 4, "phosphorEnabled": false }"#)
            .unwrap();
        assert_eq!(config.phosphor_length, 4);
        assert!(!config.phosphor_enabled);
        assert_eq!(config.max_divider, 2000);
        assert_eq!(config.pulse, PulseParams::default());
    }

    #[test]
    fn test_from_json_nested_pulse() {
        let config =
            SessionConfig::from_json(r#"{ "pulse": { "detuning": 0.5, "phaseDegrees": 90 } }"#)
                .unwrap();
        assert_eq!(config.pulse.detuning, 0.5);
        assert_eq!(config.pulse.phase_degrees, 90.0);
        assert_eq!(config.pulse.amplitude, 1.0);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            SessionConfig::from_json("{ not json"),
            Err(BlochyError::InvalidConfig(_))
        ));
        assert!(matches!(
            SessionConfig::from_json(r#"{ "phosphorLength": -1 }"#),
            Err(BlochyError::InvalidConfig(_))
        ));
        assert!(matches!(
            SessionConfig::from_json(r#"{ "maxDivider": 0 }"#),
            Err(BlochyError::InvalidConfig(_))
        ));
    }
}
