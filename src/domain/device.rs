// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Device Entity

use super::{ComputerConfig, DeviceId, DeviceType};

/// Membership every new device starts in
pub const DEFAULT_NETWORK: &str = "default";

/// Canvas coordinates (y grows upward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A node in the topology graph
///
/// # Invariants
/// - Workload types (computer, database) are created with a config
/// - `connections` mirrors the project's connection set: it holds the id of
///   every device this one shares at least one connection with
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkDevice {
    pub id: DeviceId,
    pub device_type: DeviceType,
    pub name: String,
    pub position: Position,
    pub config: Option<ComputerConfig>,
    /// Peer device ids (redundant adjacency cache)
    pub connections: Vec<DeviceId>,
    /// Logical network memberships
    pub networks: Vec<String>,
}

impl NetworkDevice {
    /// Create a device, attaching a default config for workload types
    pub fn new(device_type: DeviceType, name: impl Into<String>, position: Position) -> Self {
        Self::with_config(DeviceId::generate(), device_type, name, position, None)
    }

    /// Create a device with a known identity.
    ///
    /// A workload type without a supplied config gets the default one; a config
    /// supplied for a network-only type is kept.
    pub fn with_config(
        id: DeviceId,
        device_type: DeviceType,
        name: impl Into<String>,
        position: Position,
        config: Option<ComputerConfig>,
    ) -> Self {
        let config = match config {
            None if device_type.is_workload() => Some(ComputerConfig::new()),
            other => other,
        };

        Self {
            id,
            device_type,
            name: name.into(),
            position,
            config,
            connections: Vec::new(),
            networks: vec![DEFAULT_NETWORK.to_string()],
        }
    }

    /// Record a peer device; adding an existing peer is a no-op
    pub fn add_connection(&mut self, device_id: &DeviceId) {
        if !self.connections.contains(device_id) {
            self.connections.push(device_id.clone());
        }
    }

    /// Forget a peer device
    pub fn remove_connection(&mut self, device_id: &DeviceId) -> bool {
        if let Some(pos) = self.connections.iter().position(|id| id == device_id) {
            self.connections.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn is_connected_to(&self, device_id: &DeviceId) -> bool {
        self.connections.contains(device_id)
    }
}
