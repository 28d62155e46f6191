// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connection Entity
//!
//! A connection is undirected for adjacency purposes but keeps the
//! (source, target) order it was created with, for stable rendering.

use super::{ConnectionId, DeviceId, InterfaceId, DEFAULT_NETWORK};

/// An edge between two devices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub id: ConnectionId,
    pub source_id: DeviceId,
    pub target_id: DeviceId,
    pub source_interface_id: Option<InterfaceId>,
    pub target_interface_id: Option<InterfaceId>,
    pub network_name: String,
    /// Free-form annotation, e.g. "1Gbps"
    pub bandwidth: Option<String>,
    /// Free-form annotation, e.g. "10ms"
    pub latency: Option<String>,
}

impl Connection {
    pub fn new(source_id: DeviceId, target_id: DeviceId) -> Self {
        Self {
            id: ConnectionId::generate(),
            source_id,
            target_id,
            source_interface_id: None,
            target_interface_id: None,
            network_name: DEFAULT_NETWORK.to_string(),
            bandwidth: None,
            latency: None,
        }
    }

    /// Unordered endpoint pair
    pub fn pair(&self) -> DevicePair {
        DevicePair::new(self.source_id.clone(), self.target_id.clone())
    }

    /// Whether either endpoint is the given device
    pub fn touches(&self, device_id: &DeviceId) -> bool {
        &self.source_id == device_id || &self.target_id == device_id
    }

    /// The endpoint opposite to `device_id`
    pub fn other_end(&self, device_id: &DeviceId) -> Option<&DeviceId> {
        if &self.source_id == device_id {
            Some(&self.target_id)
        } else if &self.target_id == device_id {
            Some(&self.source_id)
        } else {
            None
        }
    }
}

/// Adjacency key where `{a, b}` and `{b, a}` compare equal
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DevicePair {
    low: DeviceId,
    high: DeviceId,
}

impl DevicePair {
    pub fn new(a: DeviceId, b: DeviceId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }
}
