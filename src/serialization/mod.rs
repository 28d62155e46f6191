// Copyright (c) 2025 - Cowboy AI, Inc.
//! Project Serializer
//!
//! Project ⇄ document round trip. `from_json(&to_json(&p)?)? == p` holds for
//! every project: identities, map keys and order, enum tokens, list order and
//! optional-field presence are all preserved.
//!
//! Loading never repairs data beyond the legacy tolerances (a missing config
//! on a workload device, an empty or primary-less interface list). In
//! particular mask and CIDR are read as stored; call
//! [`NetworkProject::resync_subnet_prefixes`] to bring them back in line.
//!
//! # Example
//!
//! ```rust
//! use network_designer::domain::{DeviceType, NetworkProject};
//! use network_designer::serialization::{from_json, to_json};
//!
//! let mut project = NetworkProject::new("Lab");
//! project.add_device(DeviceType::Computer, 100.0, 200.0);
//!
//! let json = to_json(&project).unwrap();
//! assert_eq!(from_json(&json).unwrap(), project);
//! ```

pub mod document;

pub use document::{
    ConfigDocument, ConnectionDocument, DeviceDocument, InterfaceDocument, PositionDocument,
    ProjectDocument,
};

use tracing::info;

use crate::domain::NetworkProject;
use crate::errors::TopologyResult;

/// Convert a project to its document form
pub fn to_document(project: &NetworkProject) -> ProjectDocument {
    ProjectDocument::from(project)
}

/// Build a project from a document
pub fn from_document(document: ProjectDocument) -> TopologyResult<NetworkProject> {
    let project = NetworkProject::try_from(document)?;
    info!(
        project = %project.name,
        devices = project.devices.len(),
        connections = project.connections.len(),
        "Loaded project"
    );
    Ok(project)
}

/// Serialize to a JSON value
pub fn to_value(project: &NetworkProject) -> TopologyResult<serde_json::Value> {
    Ok(serde_json::to_value(to_document(project))?)
}

/// Deserialize from a JSON value
pub fn from_value(value: serde_json::Value) -> TopologyResult<NetworkProject> {
    from_document(serde_json::from_value(value)?)
}

/// Serialize to pretty-printed JSON text
pub fn to_json(project: &NetworkProject) -> TopologyResult<String> {
    Ok(serde_json::to_string_pretty(&to_document(project))?)
}

/// Deserialize from JSON text
pub fn from_json(json: &str) -> TopologyResult<NetworkProject> {
    from_document(serde_json::from_str(json)?)
}
