// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Interfaces and Addressing Value Objects
//!
//! An interface keeps its subnet both as a dotted-quad mask and as a CIDR
//! prefix length. The two are only brought back in sync by the interface
//! editing operations (see `mutator::interfaces`); values read from a
//! document are kept exactly as stored.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use thiserror::Error;

use super::InterfaceId;

/// Default interface name
pub const DEFAULT_INTERFACE_NAME: &str = "eth0";

/// Default subnet mask
pub const DEFAULT_SUBNET_MASK: &str = "255.255.255.0";

/// Default CIDR prefix length, also the fallback for unparseable masks
pub const DEFAULT_CIDR: u8 = 24;

/// Network validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Invalid IPv4 address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid subnet mask: {0}")]
    InvalidSubnetMask(String),

    #[error("Invalid prefix length: {0} (must be 0-32)")]
    InvalidPrefixLength(u8),

    #[error("Invalid MAC address format: {0}")]
    InvalidMacAddress(String),

    #[error("Invalid VLAN ID: {0} (must be 1-4094)")]
    InvalidVlanId(u16),
}

/// A device's named network attachment point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    pub id: InterfaceId,
    pub name: String,
    /// Dotted-quad address, empty when unset
    pub ip_address: String,
    pub subnet_mask: String,
    pub cidr: u8,
    pub gateway: String,
    pub dns: Vec<String>,
    pub mac_address: Option<String>,
    pub vlan_id: Option<u16>,
    /// Non-owning reference to a peer interface or connection
    pub connected_to: Option<String>,
    pub is_primary: bool,
}

impl NetworkInterface {
    /// Create an interface with default addressing
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: InterfaceId::generate(),
            name: name.into(),
            ip_address: String::new(),
            subnet_mask: DEFAULT_SUBNET_MASK.to_string(),
            cidr: DEFAULT_CIDR,
            gateway: String::new(),
            dns: Vec::new(),
            mac_address: None,
            vlan_id: None,
            connected_to: None,
            is_primary: false,
        }
    }

    /// The default primary interface seeded into new configs
    pub fn primary(name: impl Into<String>) -> Self {
        Self {
            is_primary: true,
            ..Self::new(name)
        }
    }

    /// Network address (IP AND mask), or an empty string when either does not parse
    pub fn network_address(&self) -> String {
        if self.ip_address.is_empty() {
            return String::new();
        }

        match (
            Ipv4Addr::from_str(&self.ip_address),
            Ipv4Addr::from_str(&self.subnet_mask),
        ) {
            (Ok(ip), Ok(mask)) => Ipv4Addr::from(u32::from(ip) & u32::from(mask)).to_string(),
            _ => String::new(),
        }
    }

    /// Whether the stored CIDR agrees with the stored mask
    pub fn is_prefix_consistent(&self) -> bool {
        mask_to_cidr(&self.subnet_mask) == Some(self.cidr)
    }
}

impl Default for NetworkInterface {
    fn default() -> Self {
        Self::new(DEFAULT_INTERFACE_NAME)
    }
}

/// Count the set bits of a dotted-quad mask
pub fn mask_to_cidr(mask: &str) -> Option<u8> {
    let mask = Ipv4Addr::from_str(mask.trim()).ok()?;
    Some(u32::from(mask).count_ones() as u8)
}

/// Dotted-quad mask for a prefix length
pub fn cidr_to_mask(prefix: u8) -> Result<String, NetworkError> {
    if prefix > 32 {
        return Err(NetworkError::InvalidPrefixLength(prefix));
    }
    let bits = if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - u32::from(prefix))
    };
    Ok(Ipv4Addr::from(bits).to_string())
}

/// Validate an optional dotted-quad address (empty means unset)
pub fn validate_ipv4(address: &str) -> Result<(), NetworkError> {
    if address.is_empty() || Ipv4Addr::from_str(address).is_ok() {
        Ok(())
    } else {
        Err(NetworkError::InvalidIpAddress(address.to_string()))
    }
}

/// MAC Address value object
///
/// Represents a 48-bit MAC address with validation.
/// Invariants:
/// - Valid MAC address format (6 octets)
/// - Canonical representation (lowercase, colon-separated)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Parse a MAC address in colon, hyphen or bare hex form
    pub fn new(mac: impl AsRef<str>) -> Result<Self, NetworkError> {
        let mac = mac.as_ref();
        let mac_clean = mac.replace([':', '-'], "");

        // Invariant: Must be exactly 12 hex digits (6 octets)
        if mac_clean.len() != 12 || !mac_clean.is_ascii() {
            return Err(NetworkError::InvalidMacAddress(mac.to_string()));
        }

        let mut octets = [0u8; 6];
        for (i, chunk) in mac_clean.as_bytes().chunks(2).enumerate() {
            let hex_str = std::str::from_utf8(chunk)
                .map_err(|_| NetworkError::InvalidMacAddress(mac.to_string()))?;
            octets[i] = u8::from_str_radix(hex_str, 16)
                .map_err(|_| NetworkError::InvalidMacAddress(mac.to_string()))?;
        }

        Ok(Self(octets))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl FromStr for MacAddress {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// VLAN ID value object
///
/// Represents a VLAN ID (IEEE 802.1Q) with validation.
/// VLAN 0 and 4095 are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VlanId(u16);

impl VlanId {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 4094;

    pub fn new(id: u16) -> Result<Self, NetworkError> {
        if !(Self::MIN..=Self::MAX).contains(&id) {
            return Err(NetworkError::InvalidVlanId(id));
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}
