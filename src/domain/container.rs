// Copyright (c) 2025 - Cowboy AI, Inc.
//! Container Workload Configuration
//!
//! `ComputerConfig` describes the container a workload device runs. The config
//! owns the device's interfaces.
//!
//! # Invariants
//! - The interface list is never empty while the config exists
//! - Exactly one interface is primary

use indexmap::IndexMap;

use super::{NetworkInterface, OsImage, RestartPolicy, DEFAULT_INTERFACE_NAME};

/// Memory limit assumed when the configured token does not parse
pub const FALLBACK_MEMORY_MB: u64 = 512;

/// Configuration for computer/container devices
#[derive(Debug, Clone, PartialEq)]
pub struct ComputerConfig {
    /// CPU cores
    pub cpu_limit: f64,
    /// `<integer><unit>`, unit `m` or `g`
    pub memory_limit: String,
    /// `hostPath:containerPath`, empty when unset
    pub storage_volume: String,
    pub os: OsImage,
    /// Image reference used only when `os` is [`OsImage::Custom`]
    pub custom_image: String,
    pub environment: IndexMap<String, String>,
    /// `external:internal` mappings
    pub ports: Vec<String>,
    pub interfaces: Vec<NetworkInterface>,
    pub command: String,
    pub entrypoint: String,
    pub restart_policy: RestartPolicy,
    pub labels: IndexMap<String, String>,
    pub capabilities: Vec<String>,
    pub privileged: bool,
}

impl ComputerConfig {
    /// Create a config seeded with one primary `eth0` interface
    pub fn new() -> Self {
        Self::with_interfaces(Vec::new())
    }

    /// Create a config owning the given interfaces.
    ///
    /// An empty list is seeded with the default primary interface. When no
    /// interface is flagged primary the first one is promoted, and only the
    /// first primary flag is kept when several are set.
    pub fn with_interfaces(interfaces: Vec<NetworkInterface>) -> Self {
        let mut config = Self {
            cpu_limit: 1.0,
            memory_limit: "512m".to_string(),
            storage_volume: String::new(),
            os: OsImage::default(),
            custom_image: String::new(),
            environment: IndexMap::new(),
            ports: Vec::new(),
            interfaces,
            command: String::new(),
            entrypoint: String::new(),
            restart_policy: RestartPolicy::default(),
            labels: IndexMap::new(),
            capabilities: Vec::new(),
            privileged: false,
        };
        config.normalize_interfaces();
        config
    }

    pub(crate) fn normalize_interfaces(&mut self) {
        if self.interfaces.is_empty() {
            self.interfaces
                .push(NetworkInterface::primary(DEFAULT_INTERFACE_NAME));
            return;
        }

        let mut seen_primary = false;
        for iface in &mut self.interfaces {
            if iface.is_primary {
                if seen_primary {
                    iface.is_primary = false;
                }
                seen_primary = true;
            }
        }
        if !seen_primary {
            self.interfaces[0].is_primary = true;
        }
    }

    /// Image reference the container runs
    pub fn image(&self) -> &str {
        if self.os.is_custom() {
            &self.custom_image
        } else {
            self.os.as_str()
        }
    }

    /// The interface flagged primary, else the first interface
    pub fn primary_interface(&self) -> Option<&NetworkInterface> {
        self.interfaces
            .iter()
            .find(|iface| iface.is_primary)
            .or_else(|| self.interfaces.first())
    }

    /// Count of interfaces flagged primary
    pub fn primary_count(&self) -> usize {
        self.interfaces.iter().filter(|iface| iface.is_primary).count()
    }

    /// Memory limit in megabytes, if the token parses
    pub fn memory_megabytes(&self) -> Option<u64> {
        parse_memory_limit(&self.memory_limit)
    }

    /// Host/container split of the storage volume, if well formed
    pub fn volume(&self) -> Option<VolumeMapping<'_>> {
        VolumeMapping::parse(&self.storage_volume)
    }
}

impl Default for ComputerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a `<integer><unit>` memory token into megabytes (`g` counts 1000)
pub fn parse_memory_limit(token: &str) -> Option<u64> {
    let token = token.trim();
    let (digits, factor) = if let Some(value) = token.strip_suffix(['m', 'M']) {
        (value, 1)
    } else if let Some(value) = token.strip_suffix(['g', 'G']) {
        (value, 1000)
    } else {
        return None;
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u64>().ok()?.checked_mul(factor)
}

/// Whether a memory token matches `<integer><unit>`
pub fn is_valid_memory_limit(token: &str) -> bool {
    parse_memory_limit(token).is_some()
}

/// `external:internal` port mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortMapping {
    pub external: u16,
    pub internal: u16,
}

impl PortMapping {
    /// Parse a mapping with exactly one `:` and numeric halves
    pub fn parse(mapping: &str) -> Option<Self> {
        let (external, internal) = split_once_exactly(mapping.trim(), ':')?;
        Some(Self {
            external: external.trim().parse().ok()?,
            internal: internal.trim().parse().ok()?,
        })
    }
}

/// `hostPath:containerPath` volume mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeMapping<'a> {
    pub host_path: &'a str,
    pub container_path: &'a str,
}

impl<'a> VolumeMapping<'a> {
    /// Parse a volume with exactly one `:` and two non-empty paths
    pub fn parse(volume: &'a str) -> Option<Self> {
        let (host_path, container_path) = split_once_exactly(volume.trim(), ':')?;
        if host_path.is_empty() || container_path.is_empty() {
            return None;
        }
        Some(Self {
            host_path,
            container_path,
        })
    }
}

fn split_once_exactly(value: &str, separator: char) -> Option<(&str, &str)> {
    let (left, right) = value.split_once(separator)?;
    if right.contains(separator) {
        return None;
    }
    Some((left, right))
}
