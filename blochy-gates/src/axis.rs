//! Rotation and pulse axes
//!
//! [`Axis`] is the closed set of rotation axes a caller can request: one of the
//! three Pauli directions, or a custom Hermitian generator. [`Axis::generator`]
//! is the single place where an axis turns into a matrix.

use crate::matrices::{GENERATOR_X, GENERATOR_Y, GENERATOR_Z};
use blochy_core::{BlochyError, Operator, Result};
use std::f64::consts::{FRAC_1_SQRT_2, PI};
use std::fmt;
use std::str::FromStr;

/// Axis of a free rotation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Axis {
    X,
    Y,
    Z,
    /// Custom Hermitian generator, validated when the generator is requested
    Custom(Operator),
}

impl Axis {
    /// Generator `G` such that the rotation by `θ` is `exp(-iθG)`
    ///
    /// # Errors
    /// Returns [`BlochyError::MalformedOperator`] if a custom generator is not
    /// Hermitian.
    pub fn generator(&self) -> Result<Operator> {
        match self {
            Axis::X => Ok(GENERATOR_X),
            Axis::Y => Ok(GENERATOR_Y),
            Axis::Z => Ok(GENERATOR_Z),
            Axis::Custom(op) => {
                op.validate_hermitian()?;
                Ok(*op)
            },
        }
    }

    /// Axis whose generator is `(X/2 + Z/2)/√2`
    ///
    /// A rotation by π about it is the Hadamard gate up to a global phase.
    pub fn hadamard() -> Self {
        Axis::Custom((GENERATOR_X + GENERATOR_Z).scale(FRAC_1_SQRT_2))
    }

    /// Axis from spherical angles in degrees, in the Pauli frame
    ///
    /// `G = cos(p)·Z/2 + sin(p)cos(a)·X/2 + sin(p)sin(a)·Y/2`
    pub fn from_spherical(polar_degrees: f64, azimuth_degrees: f64) -> Self {
        let polar = polar_degrees / 180.0 * PI;
        let azimuth = azimuth_degrees / 180.0 * PI;
        let generator = GENERATOR_Z.scale(polar.cos())
            + GENERATOR_X.scale(polar.sin() * azimuth.cos())
            + GENERATOR_Y.scale(polar.sin() * azimuth.sin());
        Axis::Custom(generator)
    }

    /// Axis along a direction given in Bloch `(u, v, w)` coordinates
    ///
    /// Rotating by `θ` about the result turns Bloch vectors by `θ` about
    /// `(u, v, w)`. Since `u` and `v` are the Pauli `x` and `y` directions
    /// negated, the generator is `(-u·X - v·Y + w·Z) / 2|n|`.
    ///
    /// # Errors
    /// Returns [`BlochyError::InvalidParameter`] for a zero or non-finite direction.
    pub fn from_bloch_direction(u: f64, v: f64, w: f64) -> Result<Self> {
        let norm = (u * u + v * v + w * w).sqrt();
        if !norm.is_finite() || norm == 0.0 {
            return Err(BlochyError::InvalidParameter {
                name: "axis direction",
                value: norm,
            });
        }
        let generator = GENERATOR_X.scale(-u / norm)
            + GENERATOR_Y.scale(-v / norm)
            + GENERATOR_Z.scale(w / norm);
        Ok(Axis::Custom(generator))
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
            Axis::Custom(_) => "custom",
        }
    }
}

impl FromStr for Axis {
    type Err = BlochyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            other => Err(BlochyError::invalid_axis(other)),
        }
    }
}

impl From<Operator> for Axis {
    fn from(op: Operator) -> Self {
        Axis::Custom(op)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Custom(op) => write!(f, "custom{}", op),
            named => f.write_str(named.name()),
        }
    }
}

/// Drive axis of a pulse
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PulseAxis {
    X,
    Y,
}

impl PulseAxis {
    /// Extra drive phase in radians: the X drive leads the Y drive by π/2
    pub fn phase_offset(&self) -> f64 {
        match self {
            PulseAxis::X => PI / 2.0,
            PulseAxis::Y => 0.0,
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            PulseAxis::X => "x",
            PulseAxis::Y => "y",
        }
    }
}

impl FromStr for PulseAxis {
    type Err = BlochyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "x" | "X" => Ok(PulseAxis::X),
            "y" | "Y" => Ok(PulseAxis::Y),
            other => Err(BlochyError::invalid_pulse_axis(other)),
        }
    }
}

impl fmt::Display for PulseAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use blochy_core::Complex64;

    #[test]
    fn test_parse_axis() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!("Y".parse::<Axis>().unwrap(), Axis::Y);
        assert_eq!(" z ".parse::<Axis>().unwrap(), Axis::Z);

        let err = "w".parse::<Axis>().unwrap_err();
        assert!(matches!(err, BlochyError::InvalidAxis { .. }));
    }

    #[test]
    fn test_parse_pulse_axis_rejects_z() {
        assert_eq!("x".parse::<PulseAxis>().unwrap(), PulseAxis::X);
        assert_eq!("y".parse::<PulseAxis>().unwrap(), PulseAxis::Y);
        assert!(matches!(
            "z".parse::<PulseAxis>(),
            Err(BlochyError::InvalidAxis { .. })
        ));
    }

    #[test]
    fn test_named_generators() {
        assert_eq!(Axis::X.generator().unwrap(), GENERATOR_X);
        assert_eq!(Axis::Y.generator().unwrap(), GENERATOR_Y);
        assert_eq!(Axis::Z.generator().unwrap(), GENERATOR_Z);
    }

    #[test]
    fn test_custom_generator_validated() {
        let bad = Operator::new(
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 1.0),
            Complex64::new(0.0, 0.0),
        );
        assert!(matches!(
            Axis::Custom(bad).generator(),
            Err(BlochyError::MalformedOperator(_))
        ));
        assert!(Axis::hadamard().generator().is_ok());
    }

    #[test]
    fn test_hadamard_generator_is_unit_half() {
        let g = Axis::hadamard().generator().unwrap();
        let c = g.pauli_components();
        assert_relative_eq!(c.vector_norm(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(c.x, c.z, epsilon = 1e-12);
        assert_relative_eq!(c.y, 0.0);
    }

    #[test]
    fn test_spherical_axis_cardinal_directions() {
        // polar 90°, azimuth 0° is the X generator
        let c = Axis::from_spherical(90.0, 0.0).generator().unwrap().pauli_components();
        assert_relative_eq!(c.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(c.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.z, 0.0, epsilon = 1e-12);

        // polar 0° is the Z generator
        let c = Axis::from_spherical(0.0, 123.0).generator().unwrap().pauli_components();
        assert_relative_eq!(c.z, 0.5, epsilon = 1e-12);
        assert_relative_eq!(c.vector_norm(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_bloch_direction_axis() {
        let c = Axis::from_bloch_direction(1.0, 0.0, 1.0)
            .unwrap()
            .generator()
            .unwrap()
            .pauli_components();
        assert_relative_eq!(c.x, -0.5 * FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(c.z, 0.5 * FRAC_1_SQRT_2, epsilon = 1e-12);

        assert!(Axis::from_bloch_direction(0.0, 0.0, 0.0).is_err());
        assert!(Axis::from_bloch_direction(f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Axis::X.to_string(), "x");
        assert!(Axis::hadamard().to_string().starts_with("custom"));
        assert_eq!(PulseAxis::Y.to_string(), "y");
    }
}
