// Copyright (c) 2025 - Cowboy AI, Inc.
//! Finite State Machine Abstractions
//!
//! Generic state machine trait for interaction surfaces that drive the graph
//! mutator. Transitions are pure: they compute the next state and an output
//! describing what should happen, and the caller applies that output.
//!
//! # Mealy Machine
//!
//! Output depends on both current state and input:
//! ```text
//! (State, Input) → (State, Output)
//! ```
//!
//! # Example
//!
//! ```rust
//! use network_designer::state_machine::{StateMachine, TransitionResult};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Switch {
//!     Off,
//!     On,
//! }
//!
//! struct Press;
//!
//! impl StateMachine for Switch {
//!     type Input = Press;
//!     type Output = ();
//!
//!     fn transition(&self, _: &Press) -> TransitionResult<(Self, ())> {
//!         match self {
//!             Switch::Off => Ok((Switch::On, ())),
//!             Switch::On => Ok((Switch::Off, ())),
//!         }
//!     }
//! }
//!
//! let (next, _) = Switch::Off.transition(&Press).unwrap();
//! assert_eq!(next, Switch::On);
//! ```

pub mod canvas_mode;

pub use canvas_mode::{CanvasAction, CanvasInput, CanvasMode, CanvasSession};

use crate::errors::TopologyError;

/// Result of a state transition
pub type TransitionResult<S> = Result<S, TransitionError>;

/// Errors that can occur during state transitions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// Input is not accepted in the current state
    #[error("Invalid transition from {from} on {input}")]
    InvalidTransition { from: String, input: String },

    /// Precondition not met for transition
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),
}

impl From<TransitionError> for TopologyError {
    fn from(err: TransitionError) -> Self {
        TopologyError::InvalidValue(err.to_string())
    }
}

/// Trait for finite state machines
///
/// Implement this trait to define a state machine with typed states,
/// inputs, and outputs.
pub trait StateMachine: Sized + Clone {
    /// Input type that triggers transitions
    type Input;

    /// Output type produced by transitions (use () if none)
    type Output;

    /// Attempt to transition to a new state given an input
    ///
    /// # Returns
    /// - Ok((new_state, output)) if transition is valid
    /// - Err(TransitionError) if transition is invalid
    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)>;

    /// Check if a transition is valid without performing it
    fn can_transition(&self, input: &Self::Input) -> bool {
        self.transition(input).is_ok()
    }
}
