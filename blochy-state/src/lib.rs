//! Single-qubit state engine for Blochy
//!
//! This crate keeps the evolving state of one qubit and everything needed to
//! draw it on a Bloch sphere:
//!
//! - [`Session`]: undo history and phosphor trail, mutated as a pair
//! - [`projector`]: `(u, v, w)` projection and trajectory interpolation
//! - [`PhosphorTrail`]: bounded FIFO of recent trajectories
//! - [`Command`] / [`RenderFrame`]: the JSON contract with the presentation layer
//! - [`SessionConfig`]: trail, numerics and default pulse settings
//!
//! # Example
//!
//! ```
//! use blochy_state::Session;
//!
//! let mut session = Session::default();
//! let frame = session
//!     .execute_json(r#"{ "kind": "rotate", "axis": "z", "angleRadians": 1.5708 }"#)
//!     .unwrap();
//!
//! // A Z rotation leaves |0⟩ at the north pole
//! assert!((frame.current_vector.w - 1.0).abs() < 1e-12);
//! assert_eq!(frame.trail.len(), 1);
//! ```

pub mod command;
pub mod config;
pub mod gate;
pub mod history;
pub mod projector;
pub mod session;
pub mod statistics;
pub mod trail;
pub mod validation;

// Re-exports for convenience
pub use command::{AxisSpec, Command, RenderFrame};
pub use config::SessionConfig;
pub use gate::{GateKind, PreparedGate};
pub use history::StateHistory;
pub use projector::{interpolate, interpolate_states, project, project_reduced};
pub use session::{GateOutcome, Session, SessionSnapshot};
pub use statistics::SessionStatistics;
pub use trail::{PhosphorTrail, TrailSegment};
pub use validation::{check_norm, stabilize, NormCheck};
