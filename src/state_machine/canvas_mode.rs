// Copyright (c) 2025 - Cowboy AI, Inc.
//! Canvas Interaction Mode Machine
//!
//! **Mealy Machine**: picking a device means different things in different
//! modes, so the output depends on both state and input.
//!
//! # States
//!
//! - Select: picking a device selects it
//! - Connect: first pick records a pending source, second distinct pick
//!   connects the two and returns to Select
//! - Delete: picking a device or connection removes it
//!
//! Outputs are [`CanvasAction`] values. [`CanvasSession`] applies them to a
//! project through the graph mutator and commits the new mode only when the
//! mutation succeeds.

use std::fmt;
use tracing::debug;

use super::{StateMachine, TransitionError, TransitionResult};
use crate::domain::{ConnectionId, DeviceId, NetworkProject};
use crate::errors::{TopologyError, TopologyResult};

/// Interaction mode (FSM state)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CanvasMode {
    #[default]
    Select,
    Connect {
        pending_source: Option<DeviceId>,
    },
    Delete,
}

impl fmt::Display for CanvasMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select => write!(f, "select"),
            Self::Connect { .. } => write!(f, "connect"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Discrete user intent (FSM input)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasInput {
    EnterSelect,
    EnterConnect,
    EnterDelete,
    PickDevice(DeviceId),
    PickConnection(ConnectionId),
    /// Abandon a pending connection and return to Select
    Cancel,
}

/// What the caller should do (FSM output)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasAction {
    None,
    Select(DeviceId),
    Connect { source: DeviceId, target: DeviceId },
    DeleteDevice(DeviceId),
    DeleteConnection(ConnectionId),
}

impl StateMachine for CanvasMode {
    type Input = CanvasInput;
    type Output = CanvasAction;

    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)> {
        use CanvasInput::*;

        let next = match (self, input) {
            (_, EnterSelect) | (_, Cancel) => (CanvasMode::Select, CanvasAction::None),
            (_, EnterConnect) => (
                CanvasMode::Connect {
                    pending_source: None,
                },
                CanvasAction::None,
            ),
            (_, EnterDelete) => (CanvasMode::Delete, CanvasAction::None),

            (CanvasMode::Select, PickDevice(id)) => {
                (CanvasMode::Select, CanvasAction::Select(id.clone()))
            }

            (CanvasMode::Connect { pending_source: None }, PickDevice(id)) => (
                CanvasMode::Connect {
                    pending_source: Some(id.clone()),
                },
                CanvasAction::None,
            ),
            // Same device twice keeps the pending source
            (CanvasMode::Connect { pending_source: Some(source) }, PickDevice(id))
                if source == id =>
            {
                (self.clone(), CanvasAction::None)
            }
            (CanvasMode::Connect { pending_source: Some(source) }, PickDevice(id)) => (
                CanvasMode::Select,
                CanvasAction::Connect {
                    source: source.clone(),
                    target: id.clone(),
                },
            ),

            (CanvasMode::Delete, PickDevice(id)) => {
                (CanvasMode::Delete, CanvasAction::DeleteDevice(id.clone()))
            }
            (CanvasMode::Delete, PickConnection(id)) => {
                (CanvasMode::Delete, CanvasAction::DeleteConnection(id.clone()))
            }

            (mode, PickConnection(_)) => {
                return Err(TransitionError::InvalidTransition {
                    from: mode.to_string(),
                    input: "pick connection".to_string(),
                })
            }
        };
        Ok(next)
    }
}

/// A mode machine bound to the current selection
#[derive(Debug, Clone, Default)]
pub struct CanvasSession {
    mode: CanvasMode,
    selected: Option<DeviceId>,
}

impl CanvasSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &CanvasMode {
        &self.mode
    }

    pub fn selected(&self) -> Option<&DeviceId> {
        self.selected.as_ref()
    }

    pub fn pending_source(&self) -> Option<&DeviceId> {
        match &self.mode {
            CanvasMode::Connect { pending_source } => pending_source.as_ref(),
            _ => None,
        }
    }

    /// Feed one input, applying the resulting action to `project`.
    ///
    /// On error neither the project nor the session changes.
    pub fn handle(
        &mut self,
        project: &mut NetworkProject,
        input: CanvasInput,
    ) -> TopologyResult<CanvasAction> {
        let (next, action) = self.mode.transition(&input)?;

        match &action {
            CanvasAction::None => {
                if let CanvasMode::Connect {
                    pending_source: Some(source),
                } = &next
                {
                    if project.device(source).is_none() {
                        return Err(TopologyError::not_found("device", source));
                    }
                }
            }
            CanvasAction::Select(id) => {
                if project.device(id).is_none() {
                    return Err(TopologyError::not_found("device", id));
                }
                self.selected = Some(id.clone());
            }
            CanvasAction::Connect { source, target } => {
                project.add_connection(source, target)?;
            }
            CanvasAction::DeleteDevice(id) => {
                project.remove_device(id)?;
                if self.selected.as_ref() == Some(id) {
                    self.selected = None;
                }
            }
            CanvasAction::DeleteConnection(id) => {
                project.remove_connection(id)?;
            }
        }

        debug!(from = %self.mode, to = %next, action = ?action, "Canvas transition");
        self.mode = next;
        Ok(action)
    }
}
