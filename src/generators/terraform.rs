// Copyright (c) 2025 - Cowboy AI, Inc.
//! Terraform Generator (Docker provider)
//!
//! Output layout, in order:
//! 1. provider header
//! 2. one `docker_network` per distinct membership, first-seen order
//! 3. one `docker_container` per device with a config, project order
//!
//! The body carries no timestamps and iterates only insertion-ordered or
//! sorted collections, so the same project always yields the same bytes.

use tracing::warn;

use super::{sanitize_identifier, ArtifactGenerator, ArtifactKind, UniqueNames};
use crate::domain::{ComputerConfig, NetworkDevice, NetworkProject, PortMapping, FALLBACK_MEMORY_MB};
use crate::errors::TopologyResult;

const HEADER: &str = r#"terraform {
  required_providers {
    docker = {
      source  = "kreuzwerker/docker"
      version = "~> 3.0"
    }
  }
}

provider "docker" {}
"#;

/// Terraform artifact generator
#[derive(Debug, Clone, Copy, Default)]
pub struct TerraformGenerator;

impl ArtifactGenerator for TerraformGenerator {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Terraform
    }

    fn generate(&self, project: &NetworkProject) -> TopologyResult<String> {
        Ok(generate_terraform(project))
    }
}

/// Render the project as Terraform HCL
pub fn generate_terraform(project: &NetworkProject) -> String {
    let mut output = String::from(HEADER);

    for network in project.memberships() {
        output.push_str(&format!(
            "\nresource \"docker_network\" \"{}\" {{\n",
            network_resource(network)
        ));
        output.push_str(&format!("  name   = {}\n", hcl_string(network)));
        output.push_str("  driver = \"bridge\"\n");
        output.push_str("}\n");
    }

    let mut containers = UniqueNames::default();
    let mut resources = UniqueNames::default();
    for device in project.devices.values() {
        let Some(config) = &device.config else {
            continue;
        };
        let name = containers.claim(&device.name);
        let identifier = sanitize_identifier(&device.name);
        let resource = resources.claim(&identifier);
        if name != device.name || resource != identifier {
            warn!(
                device = %device.name,
                resource = %resource,
                "Duplicate container name, renamed"
            );
        }
        output.push_str(&container_block(&resource, &name, config, device));
    }

    output
}

fn network_resource(network: &str) -> String {
    format!("{}_network", sanitize_identifier(network))
}

fn container_block(
    resource: &str,
    name: &str,
    config: &ComputerConfig,
    device: &NetworkDevice,
) -> String {
    let mut block = format!("\nresource \"docker_container\" \"{}\" {{\n", resource);
    block.push_str(&format!("  name  = {}\n", hcl_string(name)));
    block.push_str(&format!("  image = {}\n", hcl_string(config.image())));

    for network in &device.networks {
        block.push_str("\n  networks_advanced {\n");
        block.push_str(&format!(
            "    name = docker_network.{}.name\n",
            network_resource(network)
        ));
        block.push_str("  }\n");
    }

    for mapping in &config.ports {
        match PortMapping::parse(mapping) {
            Some(port) => {
                block.push_str("\n  ports {\n");
                block.push_str(&format!("    internal = {}\n", port.internal));
                block.push_str(&format!("    external = {}\n", port.external));
                block.push_str("  }\n");
            }
            None => warn!(device = %device.name, mapping = %mapping, "Skipping malformed port mapping"),
        }
    }

    if !config.environment.is_empty() {
        let mut vars: Vec<_> = config.environment.iter().collect();
        vars.sort();
        block.push_str("\n  env = [\n");
        for (key, value) in vars {
            block.push_str(&format!("    {},\n", hcl_string(&format!("{key}={value}"))));
        }
        block.push_str("  ]\n");
    }

    if !config.storage_volume.is_empty() {
        match config.volume() {
            Some(volume) => {
                block.push_str("\n  volumes {\n");
                block.push_str(&format!("    host_path      = {}\n", hcl_string(volume.host_path)));
                block.push_str(&format!(
                    "    container_path = {}\n",
                    hcl_string(volume.container_path)
                ));
                block.push_str("  }\n");
            }
            None => warn!(
                device = %device.name,
                volume = %config.storage_volume,
                "Skipping malformed volume mapping"
            ),
        }
    }

    for (key, value) in &config.labels {
        block.push_str("\n  labels {\n");
        block.push_str(&format!("    label = {}\n", hcl_string(key)));
        block.push_str(&format!("    value = {}\n", hcl_string(value)));
        block.push_str("  }\n");
    }

    if !config.capabilities.is_empty() {
        let caps: Vec<String> = config.capabilities.iter().map(|c| hcl_string(c)).collect();
        block.push_str("\n  capabilities {\n");
        block.push_str(&format!("    add = [{}]\n", caps.join(", ")));
        block.push_str("  }\n");
    }

    block.push('\n');
    if !config.command.is_empty() {
        block.push_str(&format!("  command    = [{}]\n", hcl_string(&config.command)));
    }
    if !config.entrypoint.is_empty() {
        block.push_str(&format!("  entrypoint = [{}]\n", hcl_string(&config.entrypoint)));
    }
    block.push_str(&format!("  restart    = \"{}\"\n", config.restart_policy.as_str()));
    if config.cpu_limit > 0.0 {
        block.push_str(&format!(
            "  cpu_shares = {}\n",
            (config.cpu_limit * 1024.0).round() as i64
        ));
    }
    block.push_str(&format!("  memory     = {}\n", memory_megabytes(device, config)));
    if config.privileged {
        block.push_str("  privileged = true\n");
    }

    block.push_str("}\n");
    block
}

fn memory_megabytes(device: &NetworkDevice, config: &ComputerConfig) -> u64 {
    config.memory_megabytes().unwrap_or_else(|| {
        warn!(
            device = %device.name,
            memory_limit = %config.memory_limit,
            fallback = FALLBACK_MEMORY_MB,
            "Unparseable memory limit, using fallback"
        );
        FALLBACK_MEMORY_MB
    })
}

/// Quote a value as an HCL string literal
pub fn hcl_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            // Template sequences are doubled so they stay literal
            '$' | '%' if chars.peek() == Some(&'{') => {
                quoted.push(c);
                quoted.push(c);
            }
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}
