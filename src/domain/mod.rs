// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Domain Models
//!
//! Value and entity types for a network design: devices, their container
//! configuration and interfaces, the connections between them, and the
//! project that owns them all.
//!
//! # Value Objects
//!
//! - [`DeviceType`] - Closed device taxonomy
//! - [`OsImage`] / [`RestartPolicy`] - Container image and restart enumerations
//! - [`NetworkInterface`] - Addressing for one attachment point
//! - [`MacAddress`] / [`VlanId`] - Validated addressing values
//!
//! # Entities
//!
//! - [`NetworkDevice`] - Node in the topology graph
//! - [`Connection`] - Edge between two devices
//! - [`NetworkProject`] - Aggregate root owning devices and connections

pub mod connection;
pub mod container;
pub mod device;
pub mod device_type;
pub mod ids;
pub mod image;
pub mod invariants;
pub mod network;
pub mod project;

pub use connection::{Connection, DevicePair};
pub use container::{
    is_valid_memory_limit, parse_memory_limit, ComputerConfig, PortMapping, VolumeMapping,
    FALLBACK_MEMORY_MB,
};
pub use device::{NetworkDevice, Position, DEFAULT_NETWORK};
pub use device_type::DeviceType;
pub use ids::{ConnectionId, DeviceId, InterfaceId};
pub use image::{OsImage, RestartPolicy};
pub use invariants::{validate_project, ValidationError, ValidationResult};
pub use network::{
    cidr_to_mask, mask_to_cidr, MacAddress, NetworkError, NetworkInterface, VlanId, DEFAULT_CIDR,
    DEFAULT_INTERFACE_NAME, DEFAULT_SUBNET_MASK,
};
pub use project::NetworkProject;
