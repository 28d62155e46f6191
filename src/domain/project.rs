// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Project Aggregate
//!
//! The project exclusively owns its devices and connections. Both maps keep
//! insertion order, which fixes the iteration order every generator uses.
//!
//! # Invariants
//! - Every connection's endpoints exist in `devices`
//! - Removing a device removes every connection touching it and strips its id
//!   from every other device's connection cache
//!
//! All mutation goes through `mutator`, which upholds these invariants.

use chrono::{SecondsFormat, Utc};
use indexmap::{IndexMap, IndexSet};

use super::{Connection, ConnectionId, DeviceId, DevicePair, DeviceType, NetworkDevice};

pub const DEFAULT_PROJECT_NAME: &str = "Untitled Project";
pub const DEFAULT_PROJECT_VERSION: &str = "1.0.0";
const FALLBACK_FILE_STEM: &str = "project";

/// Complete, persisted network design
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkProject {
    pub name: String,
    pub description: String,
    pub version: String,
    /// ISO-8601, kept verbatim as read
    pub created_at: String,
    /// ISO-8601, kept verbatim as read
    pub modified_at: String,
    pub devices: IndexMap<DeviceId, NetworkDevice>,
    pub connections: IndexMap<ConnectionId, Connection>,
    pub metadata: IndexMap<String, serde_json::Value>,
}

impl NetworkProject {
    /// Create an empty project stamped with the current time
    pub fn new(name: impl Into<String>) -> Self {
        let now = now_iso8601();
        Self {
            name: name.into(),
            created_at: now.clone(),
            modified_at: now,
            ..Self::default()
        }
    }

    /// Refresh the modification timestamp
    pub fn touch(&mut self) {
        self.modified_at = now_iso8601();
    }

    /// Drop every device and connection, keeping project-level fields
    pub fn clear(&mut self) {
        self.devices.clear();
        self.connections.clear();
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    pub fn device(&self, id: &DeviceId) -> Option<&NetworkDevice> {
        self.devices.get(id)
    }

    pub fn connection(&self, id: &ConnectionId) -> Option<&Connection> {
        self.connections.get(id)
    }

    /// Find a device by display name (first match in insertion order)
    pub fn device_by_name(&self, name: &str) -> Option<&NetworkDevice> {
        self.devices.values().find(|d| d.name == name)
    }

    /// Get count of devices by type
    pub fn count_devices_by_type(&self, device_type: DeviceType) -> usize {
        self.devices
            .values()
            .filter(|d| d.device_type == device_type)
            .count()
    }

    /// Connections touching a device
    pub fn device_connections<'a>(
        &'a self,
        device_id: &'a DeviceId,
    ) -> impl Iterator<Item = &'a Connection> + 'a {
        self.connections
            .values()
            .filter(move |conn| conn.touches(device_id))
    }

    /// Connections joining the same unordered pair of devices
    pub fn connections_between<'a>(
        &'a self,
        pair: &'a DevicePair,
    ) -> impl Iterator<Item = &'a Connection> + 'a {
        self.connections
            .values()
            .filter(move |conn| &conn.pair() == pair)
    }

    /// Distinct network memberships across all devices, first-seen order
    pub fn memberships(&self) -> IndexSet<&str> {
        self.devices
            .values()
            .flat_map(|d| d.networks.iter().map(String::as_str))
            .collect()
    }

    /// File name stem for exported artifacts.
    ///
    /// Lowercased; every character other than an ASCII letter, digit, `-` or
    /// `_` becomes `_`, so the stem never contains a path separator or starts
    /// with a dot. An empty name yields `project`.
    pub fn file_stem(&self) -> String {
        let stem: String = self
            .name
            .chars()
            .map(|c| match c {
                'a'..='z' | '0'..='9' | '-' | '_' => c,
                'A'..='Z' => c.to_ascii_lowercase(),
                _ => '_',
            })
            .collect();
        if stem.is_empty() {
            FALLBACK_FILE_STEM.to_string()
        } else {
            stem
        }
    }
}

impl Default for NetworkProject {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROJECT_NAME.to_string(),
            description: String::new(),
            version: DEFAULT_PROJECT_VERSION.to_string(),
            created_at: String::new(),
            modified_at: String::new(),
            devices: IndexMap::new(),
            connections: IndexMap::new(),
            metadata: IndexMap::new(),
        }
    }
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
