//! Network topology designer core
//!
//! Model a graph of network devices, connect them, and translate the graph
//! into Terraform (Docker provider), Docker Compose and an SVG diagram. The
//! project round-trips through a JSON document.
//!
//! - [`domain`] entities, value objects and invariant checks
//! - [`mutator`] invariant-preserving graph and interface edits
//! - [`serialization`] project ⇄ document
//! - [`generators`] text artifacts
//! - [`state_machine`] select/connect/delete interaction driving the mutator

pub mod config;
pub mod domain;
pub mod errors;
pub mod generators;
pub mod mutator;
pub mod serialization;
pub mod shared;
pub mod state_machine;

// Re-export commonly used types
pub use config::{CanvasConfig, ExportConfig};
pub use domain::{
    ComputerConfig, Connection, DeviceId, DeviceType, NetworkDevice, NetworkInterface,
    NetworkProject,
};
pub use errors::{TopologyError, TopologyResult};
pub use generators::{export_all, Artifact, ArtifactGenerator, ArtifactKind};
pub use shared::SharedProject;
