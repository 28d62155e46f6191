// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Topology Invariants
//!
//! Checks a project against the graph and interface invariants without
//! changing it. Mutators keep these invariants by construction; the checks
//! exist for projects loaded from documents, which are read as stored.
//!
//! # Invariant Categories
//!
//! 1. **Referential**: connection endpoints resolve to devices
//! 2. **Cache**: device connection caches mirror the connection set
//! 3. **Interface**: exactly one primary interface per config
//! 4. **Field**: memory limit tokens and mask/CIDR agreement

use std::collections::HashSet;

use super::{
    is_valid_memory_limit, ComputerConfig, Connection, DeviceId, DevicePair, NetworkDevice,
    NetworkProject,
};

/// Validation result with detailed error information
pub type ValidationResult = Result<(), ValidationError>;

/// A single broken invariant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Connection {connection} references missing device {device}")]
    DanglingEndpoint { connection: String, device: String },

    #[error("Connection {0} joins a device to itself")]
    SelfConnection(String),

    #[error("Device {device} cache lists {peer} but no connection joins them")]
    StaleCacheEntry { device: String, peer: String },

    #[error("Device {device} cache is missing connected peer {peer}")]
    MissingCacheEntry { device: String, peer: String },

    #[error("Device {device} has no network interfaces")]
    NoInterfaces { device: String },

    #[error("Device {device} has {count} primary interfaces")]
    PrimaryCount { device: String, count: usize },

    #[error("Device {device} has malformed memory limit {value:?}")]
    MalformedMemoryLimit { device: String, value: String },

    #[error("Interface {interface} on device {device} has mask/CIDR mismatch")]
    PrefixMismatch { device: String, interface: String },
}

/// Validate a connection's endpoints
///
/// # Rules
/// - Source and target differ
/// - Both endpoints exist in the project
pub fn validate_connection(project: &NetworkProject, connection: &Connection) -> ValidationResult {
    if connection.source_id == connection.target_id {
        return Err(ValidationError::SelfConnection(connection.id.to_string()));
    }

    for endpoint in [&connection.source_id, &connection.target_id] {
        if !project.devices.contains_key(endpoint) {
            return Err(ValidationError::DanglingEndpoint {
                connection: connection.id.to_string(),
                device: endpoint.to_string(),
            });
        }
    }
    Ok(())
}

/// Validate a device's connection cache against the project's connections
pub fn validate_connection_cache(
    project: &NetworkProject,
    device: &NetworkDevice,
) -> Vec<ValidationError> {
    let actual: HashSet<&DeviceId> = project
        .device_connections(&device.id)
        .filter_map(|conn| conn.other_end(&device.id))
        .collect();
    let cached: HashSet<&DeviceId> = device.connections.iter().collect();

    let stale = cached.difference(&actual).map(|peer| ValidationError::StaleCacheEntry {
        device: device.id.to_string(),
        peer: peer.to_string(),
    });
    let missing = actual.difference(&cached).map(|peer| ValidationError::MissingCacheEntry {
        device: device.id.to_string(),
        peer: peer.to_string(),
    });

    let mut errors: Vec<ValidationError> = stale.chain(missing).collect();
    errors.sort_by_key(|e| e.to_string());
    errors
}

/// Validate the interface invariants of a config
///
/// # Rules
/// - At least one interface
/// - Exactly one primary interface
pub fn validate_interfaces(device: &DeviceId, config: &ComputerConfig) -> ValidationResult {
    if config.interfaces.is_empty() {
        return Err(ValidationError::NoInterfaces {
            device: device.to_string(),
        });
    }

    let count = config.primary_count();
    if count != 1 {
        return Err(ValidationError::PrimaryCount {
            device: device.to_string(),
            count,
        });
    }
    Ok(())
}

/// Validate config field formats
pub fn validate_config_fields(device: &DeviceId, config: &ComputerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !is_valid_memory_limit(&config.memory_limit) {
        errors.push(ValidationError::MalformedMemoryLimit {
            device: device.to_string(),
            value: config.memory_limit.clone(),
        });
    }

    for iface in &config.interfaces {
        if !iface.is_prefix_consistent() {
            errors.push(ValidationError::PrefixMismatch {
                device: device.to_string(),
                interface: iface.id.to_string(),
            });
        }
    }
    errors
}

/// Composite validation of a whole project
///
/// Returns every broken invariant; an empty list means the project is consistent.
pub fn validate_project(project: &NetworkProject) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for connection in project.connections.values() {
        if let Err(e) = validate_connection(project, connection) {
            errors.push(e);
        }
    }

    for device in project.devices.values() {
        errors.extend(validate_connection_cache(project, device));
        if let Some(config) = &device.config {
            if let Err(e) = validate_interfaces(&device.id, config) {
                errors.push(e);
            }
            errors.extend(validate_config_fields(&device.id, config));
        }
    }

    errors
}

/// Whether any connection joins the pair
pub fn pair_is_connected(project: &NetworkProject, pair: &DevicePair) -> bool {
    project.connections_between(pair).next().is_some()
}
