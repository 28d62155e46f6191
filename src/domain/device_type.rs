// Copyright (c) 2025 - Cowboy AI, Inc.
//! Device Type Taxonomy
//!
//! The closed set of node kinds a topology can hold. Each kind has a canonical
//! lowercase token used in project documents and in default device names.

use std::fmt;
use std::str::FromStr;

use crate::errors::TopologyError;

/// Kind of node in the topology graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    /// Workstation or application container
    Computer,
    /// Network router
    Router,
    /// Network switch
    Switch,
    /// Firewall appliance
    Firewall,
    /// Database server
    Database,
    /// Load balancer
    LoadBalancer,
}

impl DeviceType {
    /// Every device type, in palette order
    pub const ALL: [DeviceType; 6] = [
        Self::Computer,
        Self::Router,
        Self::Switch,
        Self::Firewall,
        Self::Database,
        Self::LoadBalancer,
    ];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Computer => "computer",
            Self::Router => "router",
            Self::Switch => "switch",
            Self::Firewall => "firewall",
            Self::Database => "database",
            Self::LoadBalancer => "loadbalancer",
        }
    }

    /// Whether devices of this type run a container workload.
    ///
    /// Workload devices are created with a [`ComputerConfig`](super::ComputerConfig).
    pub fn is_workload(&self) -> bool {
        matches!(self, Self::Computer | Self::Database)
    }

    /// Fill color used when drawing the device, as 8-bit RGB
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Computer => (77, 128, 204),
            Self::Router => (77, 179, 102),
            Self::Switch => (179, 179, 77),
            Self::Firewall => (204, 77, 77),
            Self::Database => (153, 102, 179),
            Self::LoadBalancer => (102, 179, 179),
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TopologyError::unknown_enum("device type", s))
    }
}
