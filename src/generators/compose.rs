// Copyright (c) 2025 - Cowboy AI, Inc.
//! Docker Compose Generator
//!
//! Builds the compose file as typed structs and lets `serde_yaml` handle
//! quoting. Services follow project order, networks follow first-seen
//! membership order.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

use super::{ArtifactGenerator, ArtifactKind, UniqueNames};
use crate::domain::{ComputerConfig, NetworkDevice, NetworkProject, PortMapping};
use crate::errors::TopologyResult;

const COMPOSE_VERSION: &str = "3.8";

#[derive(Debug, Serialize)]
struct ComposeFile {
    version: &'static str,
    services: IndexMap<String, Service>,
    networks: IndexMap<String, NetworkDefinition>,
}

#[derive(Debug, Serialize)]
struct Service {
    image: String,
    container_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entrypoint: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ports: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    environment: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    volumes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    networks: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deploy: Option<Deploy>,
    restart: &'static str,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    labels: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    cap_add: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    privileged: bool,
}

#[derive(Debug, Serialize)]
struct Deploy {
    resources: Resources,
}

#[derive(Debug, Serialize)]
struct Resources {
    limits: Limits,
}

#[derive(Debug, Serialize)]
struct Limits {
    #[serde(skip_serializing_if = "Option::is_none")]
    cpus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    memory: Option<String>,
}

#[derive(Debug, Serialize)]
struct NetworkDefinition {
    driver: &'static str,
}

/// Docker Compose artifact generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ComposeGenerator;

impl ArtifactGenerator for ComposeGenerator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Compose
    }

    fn generate(&self, project: &NetworkProject) -> TopologyResult<String> {
        generate_compose(project)
    }
}

/// Render the project as a Docker Compose YAML document
pub fn generate_compose(project: &NetworkProject) -> TopologyResult<String> {
    let mut services = IndexMap::new();
    let mut names = UniqueNames::default();
    for device in project.devices.values() {
        let Some(config) = &device.config else {
            continue;
        };
        let name = names.claim(&device.name);
        if name != device.name {
            warn!(device = %device.name, service = %name, "Duplicate service name, renamed");
        }
        services.insert(name.clone(), service(&name, device, config));
    }

    let networks = project
        .memberships()
        .into_iter()
        .map(|name| (name.to_string(), NetworkDefinition { driver: "bridge" }))
        .collect();

    let file = ComposeFile {
        version: COMPOSE_VERSION,
        services,
        networks,
    };
    Ok(serde_yaml::to_string(&file)?)
}

fn service(name: &str, device: &NetworkDevice, config: &ComputerConfig) -> Service {
    let ports = config
        .ports
        .iter()
        .filter(|mapping| {
            let ok = PortMapping::parse(mapping).is_some();
            if !ok {
                warn!(device = %device.name, mapping = %mapping, "Skipping malformed port mapping");
            }
            ok
        })
        .cloned()
        .collect();

    let volumes = if config.storage_volume.is_empty() {
        Vec::new()
    } else if config.volume().is_some() {
        vec![config.storage_volume.clone()]
    } else {
        warn!(
            device = %device.name,
            volume = %config.storage_volume,
            "Skipping malformed volume mapping"
        );
        Vec::new()
    };

    let limits = Limits {
        cpus: (config.cpu_limit > 0.0).then(|| format_cpus(config.cpu_limit)),
        memory: (!config.memory_limit.is_empty()).then(|| config.memory_limit.clone()),
    };
    let deploy = (limits.cpus.is_some() || limits.memory.is_some()).then_some(Deploy {
        resources: Resources { limits },
    });

    Service {
        image: config.image().to_string(),
        container_name: name.to_string(),
        command: non_empty(&config.command),
        entrypoint: non_empty(&config.entrypoint),
        ports,
        environment: config
            .environment
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect(),
        volumes,
        networks: device.networks.clone(),
        deploy,
        restart: config.restart_policy.as_str(),
        labels: config.labels.clone(),
        cap_add: config.capabilities.clone(),
        privileged: config.privileged,
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Decimal text for a CPU count; whole numbers keep one fractional digit
fn format_cpus(cpus: f64) -> String {
    if cpus.fract() == 0.0 {
        format!("{cpus:.1}")
    } else {
        cpus.to_string()
    }
}
