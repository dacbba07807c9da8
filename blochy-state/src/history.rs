//! Undo stack of qubit states
//!
//! The stack is never empty: its bottom is always `|0⟩`. The current state is
//! held apart from the states below it so that this holds by construction.

use blochy_core::QubitState;
use std::iter;

/// Ordered states from the initial `|0⟩` to the current state
#[derive(Debug, Clone, PartialEq)]
pub struct StateHistory {
    below: Vec<QubitState>,
    current: QubitState,
}

impl StateHistory {
    /// History holding only `|0⟩`
    pub fn new() -> Self {
        Self {
            below: Vec::new(),
            current: QubitState::zero(),
        }
    }

    /// State on top of the stack
    pub fn current(&self) -> &QubitState {
        &self.current
    }

    /// Number of states, at least 1
    pub fn len(&self) -> usize {
        self.below.len() + 1
    }

    /// Always false; present for API symmetry
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of gates applied since the initial state
    ///
    /// This is also the index of the current state.
    pub fn depth(&self) -> usize {
        self.below.len()
    }

    /// Whether an undo would change anything
    pub fn can_undo(&self) -> bool {
        !self.below.is_empty()
    }

    /// Push a new current state
    pub fn push(&mut self, state: QubitState) {
        let previous = std::mem::replace(&mut self.current, state);
        self.below.push(previous);
    }

    /// Drop the current state and return it
    ///
    /// Returns `None` and leaves the history unchanged when only the initial
    /// state remains.
    pub fn pop(&mut self) -> Option<QubitState> {
        let previous = self.below.pop()?;
        Some(std::mem::replace(&mut self.current, previous))
    }

    /// Discard everything back to `|0⟩`
    pub fn reset(&mut self) {
        self.below.clear();
        self.current = QubitState::zero();
    }

    /// States from oldest to current
    pub fn iter(&self) -> impl Iterator<Item = &QubitState> + '_ {
        self.below.iter().chain(iter::once(&self.current))
    }

    /// Copy of the full stack, oldest first
    pub fn to_vec(&self) -> Vec<QubitState> {
        self.iter().copied().collect()
    }
}

impl Default for StateHistory {
    fn default() -> Self {
        Self::new()
    }
}
