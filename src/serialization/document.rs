// Copyright (c) 2025 - Cowboy AI, Inc.
//! Project Document Representation
//!
//! Wire shapes for the persisted project. Field names are snake_case;
//! enumerations travel as their canonical tokens and are parsed when the
//! document is turned back into domain types. Missing optional fields take
//! the domain defaults.
//!
//! The layout matches the files the desktop designer saves: device
//! coordinates are flat `x`/`y` keys and environment variables live under
//! `environment_vars`. A nested `position` object and an `environment` key
//! are also accepted on read.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::{
    device::DEFAULT_NETWORK,
    project::{DEFAULT_PROJECT_NAME, DEFAULT_PROJECT_VERSION},
    ComputerConfig, Connection, ConnectionId, DeviceId, DeviceType, InterfaceId, NetworkDevice,
    NetworkInterface, NetworkProject, OsImage, Position, RestartPolicy, DEFAULT_CIDR,
    DEFAULT_INTERFACE_NAME, DEFAULT_SUBNET_MASK,
};
use crate::errors::{TopologyError, TopologyResult};

/// Top-level project document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    #[serde(default = "default_project_name")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_project_version")]
    pub version: String,
    #[serde(default, alias = "createdAt")]
    pub created_at: String,
    #[serde(default, alias = "modifiedAt")]
    pub modified_at: String,
    /// Required: a document without a device map is malformed
    pub devices: IndexMap<String, DeviceDocument>,
    #[serde(default)]
    pub connections: IndexMap<String, ConnectionDocument>,
    #[serde(default)]
    pub metadata: IndexMap<String, serde_json::Value>,
}

/// Device document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceDocument {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub device_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// Read-only alternative to flat `x`/`y`; wins when present
    #[serde(default, skip_serializing)]
    pub position: Option<PositionDocument>,
    #[serde(default)]
    pub config: Option<ConfigDocument>,
    #[serde(default)]
    pub connections: Vec<String>,
    #[serde(default = "default_networks")]
    pub networks: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionDocument {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Container configuration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default = "default_cpu_limit")]
    pub cpu_limit: f64,
    #[serde(default = "default_memory_limit")]
    pub memory_limit: String,
    #[serde(default)]
    pub storage_volume: String,
    #[serde(default = "default_os")]
    pub os: String,
    #[serde(default)]
    pub custom_image: String,
    #[serde(default, rename = "environment_vars", alias = "environment")]
    pub environment: IndexMap<String, String>,
    #[serde(default)]
    pub ports: Vec<String>,
    #[serde(default)]
    pub interfaces: Vec<InterfaceDocument>,
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub entrypoint: String,
    #[serde(default = "default_restart_policy")]
    pub restart_policy: String,
    #[serde(default)]
    pub labels: IndexMap<String, String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub privileged: bool,
}

/// Interface document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDocument {
    #[serde(default)]
    pub id: String,
    #[serde(default = "default_interface_name")]
    pub name: String,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default = "default_subnet_mask")]
    pub subnet_mask: String,
    #[serde(default = "default_cidr")]
    pub cidr: u8,
    #[serde(default)]
    pub gateway: String,
    #[serde(default)]
    pub dns: Vec<String>,
    #[serde(default)]
    pub mac_address: Option<String>,
    #[serde(default)]
    pub vlan_id: Option<u16>,
    #[serde(default)]
    pub connected_to: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

/// Connection document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionDocument {
    #[serde(default)]
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    #[serde(default)]
    pub source_interface_id: Option<String>,
    #[serde(default)]
    pub target_interface_id: Option<String>,
    #[serde(default = "default_network_name")]
    pub network_name: String,
    #[serde(default)]
    pub bandwidth: Option<String>,
    #[serde(default)]
    pub latency: Option<String>,
}

fn default_project_name() -> String {
    DEFAULT_PROJECT_NAME.to_string()
}

fn default_project_version() -> String {
    DEFAULT_PROJECT_VERSION.to_string()
}

fn default_networks() -> Vec<String> {
    vec![DEFAULT_NETWORK.to_string()]
}

fn default_network_name() -> String {
    DEFAULT_NETWORK.to_string()
}

fn default_cpu_limit() -> f64 {
    1.0
}

fn default_memory_limit() -> String {
    "512m".to_string()
}

fn default_os() -> String {
    OsImage::default().as_str().to_string()
}

fn default_restart_policy() -> String {
    RestartPolicy::default().as_str().to_string()
}

fn default_interface_name() -> String {
    DEFAULT_INTERFACE_NAME.to_string()
}

fn default_subnet_mask() -> String {
    DEFAULT_SUBNET_MASK.to_string()
}

fn default_cidr() -> u8 {
    DEFAULT_CIDR
}

/// Resolve the identity of a keyed entry: the map key wins, and an embedded
/// id, when present, must agree with it.
fn keyed_id(kind: &str, key: &str, embedded: &str) -> TopologyResult<String> {
    if key.is_empty() {
        return Err(TopologyError::MalformedDocument(format!("{kind} with empty id")));
    }
    if !embedded.is_empty() && embedded != key {
        return Err(TopologyError::MalformedDocument(format!(
            "{kind} keyed {key:?} carries id {embedded:?}"
        )));
    }
    Ok(key.to_string())
}

// ============================================================================
// Domain -> Document
// ============================================================================

impl From<&NetworkInterface> for InterfaceDocument {
    fn from(iface: &NetworkInterface) -> Self {
        Self {
            id: iface.id.to_string(),
            name: iface.name.clone(),
            ip_address: iface.ip_address.clone(),
            subnet_mask: iface.subnet_mask.clone(),
            cidr: iface.cidr,
            gateway: iface.gateway.clone(),
            dns: iface.dns.clone(),
            mac_address: iface.mac_address.clone(),
            vlan_id: iface.vlan_id,
            connected_to: iface.connected_to.clone(),
            is_primary: iface.is_primary,
        }
    }
}

impl From<&ComputerConfig> for ConfigDocument {
    fn from(config: &ComputerConfig) -> Self {
        Self {
            cpu_limit: config.cpu_limit,
            memory_limit: config.memory_limit.clone(),
            storage_volume: config.storage_volume.clone(),
            os: config.os.as_str().to_string(),
            custom_image: config.custom_image.clone(),
            environment: config.environment.clone(),
            ports: config.ports.clone(),
            interfaces: config.interfaces.iter().map(InterfaceDocument::from).collect(),
            command: config.command.clone(),
            entrypoint: config.entrypoint.clone(),
            restart_policy: config.restart_policy.as_str().to_string(),
            labels: config.labels.clone(),
            capabilities: config.capabilities.clone(),
            privileged: config.privileged,
        }
    }
}

impl From<&NetworkDevice> for DeviceDocument {
    fn from(device: &NetworkDevice) -> Self {
        Self {
            id: device.id.to_string(),
            device_type: device.device_type.as_str().to_string(),
            name: device.name.clone(),
            x: device.position.x,
            y: device.position.y,
            position: None,
            config: device.config.as_ref().map(ConfigDocument::from),
            connections: device.connections.iter().map(ToString::to_string).collect(),
            networks: device.networks.clone(),
        }
    }
}

impl From<&Connection> for ConnectionDocument {
    fn from(conn: &Connection) -> Self {
        Self {
            id: conn.id.to_string(),
            source_id: conn.source_id.to_string(),
            target_id: conn.target_id.to_string(),
            source_interface_id: conn.source_interface_id.as_ref().map(ToString::to_string),
            target_interface_id: conn.target_interface_id.as_ref().map(ToString::to_string),
            network_name: conn.network_name.clone(),
            bandwidth: conn.bandwidth.clone(),
            latency: conn.latency.clone(),
        }
    }
}

impl From<&NetworkProject> for ProjectDocument {
    fn from(project: &NetworkProject) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            version: project.version.clone(),
            created_at: project.created_at.clone(),
            modified_at: project.modified_at.clone(),
            devices: project
                .devices
                .iter()
                .map(|(id, device)| (id.to_string(), DeviceDocument::from(device)))
                .collect(),
            connections: project
                .connections
                .iter()
                .map(|(id, conn)| (id.to_string(), ConnectionDocument::from(conn)))
                .collect(),
            metadata: project.metadata.clone(),
        }
    }
}

// ============================================================================
// Document -> Domain
// ============================================================================

impl From<InterfaceDocument> for NetworkInterface {
    fn from(doc: InterfaceDocument) -> Self {
        Self {
            id: if doc.id.is_empty() {
                InterfaceId::generate()
            } else {
                InterfaceId::from(doc.id)
            },
            name: doc.name,
            ip_address: doc.ip_address,
            subnet_mask: doc.subnet_mask,
            cidr: doc.cidr,
            gateway: doc.gateway,
            dns: doc.dns,
            mac_address: doc.mac_address.filter(|mac| !mac.is_empty()),
            vlan_id: doc.vlan_id,
            connected_to: doc.connected_to,
            is_primary: doc.is_primary,
        }
    }
}

impl TryFrom<ConfigDocument> for ComputerConfig {
    type Error = TopologyError;

    fn try_from(doc: ConfigDocument) -> Result<Self, Self::Error> {
        let os: OsImage = doc.os.parse()?;
        let restart_policy: RestartPolicy = doc.restart_policy.parse()?;

        let mut config = ComputerConfig::with_interfaces(
            doc.interfaces.into_iter().map(NetworkInterface::from).collect(),
        );
        config.cpu_limit = doc.cpu_limit;
        config.memory_limit = doc.memory_limit;
        config.storage_volume = doc.storage_volume;
        config.os = os;
        config.custom_image = doc.custom_image;
        config.environment = doc.environment;
        config.ports = doc.ports;
        config.command = doc.command;
        config.entrypoint = doc.entrypoint;
        config.restart_policy = restart_policy;
        config.labels = doc.labels;
        config.capabilities = doc.capabilities;
        config.privileged = doc.privileged;
        Ok(config)
    }
}

impl DeviceDocument {
    /// Build the device stored under `key`
    pub fn into_device(self, key: &str) -> TopologyResult<NetworkDevice> {
        let id = keyed_id("device", key, &self.id)?;
        let device_type: DeviceType = self.device_type.parse()?;
        let config = self.config.map(ComputerConfig::try_from).transpose()?;
        let position = self.position.unwrap_or(PositionDocument {
            x: self.x,
            y: self.y,
        });

        let mut device = NetworkDevice::with_config(
            DeviceId::from(id),
            device_type,
            self.name,
            Position::new(position.x, position.y),
            config,
        );
        device.connections = self.connections.into_iter().map(DeviceId::from).collect();
        device.networks = self.networks;
        Ok(device)
    }
}

impl ConnectionDocument {
    /// Build the connection stored under `key`
    pub fn into_connection(self, key: &str) -> TopologyResult<Connection> {
        let id = keyed_id("connection", key, &self.id)?;
        Ok(Connection {
            id: ConnectionId::from(id),
            source_id: DeviceId::from(self.source_id),
            target_id: DeviceId::from(self.target_id),
            source_interface_id: self.source_interface_id.map(InterfaceId::from),
            target_interface_id: self.target_interface_id.map(InterfaceId::from),
            network_name: self.network_name,
            bandwidth: self.bandwidth,
            latency: self.latency,
        })
    }
}

impl TryFrom<ProjectDocument> for NetworkProject {
    type Error = TopologyError;

    fn try_from(doc: ProjectDocument) -> Result<Self, Self::Error> {
        let mut project = NetworkProject {
            name: doc.name,
            description: doc.description,
            version: doc.version,
            created_at: doc.created_at,
            modified_at: doc.modified_at,
            metadata: doc.metadata,
            ..NetworkProject::default()
        };

        for (key, device) in doc.devices {
            let device = device.into_device(&key)?;
            project.devices.insert(device.id.clone(), device);
        }
        for (key, conn) in doc.connections {
            let conn = conn.into_connection(&key)?;
            project.connections.insert(conn.id.clone(), conn);
        }
        Ok(project)
    }
}
