// Copyright (c) 2025 - Cowboy AI, Inc.
//! Interface Mutations
//!
//! Keeps the primary-interface invariant of a config: while the list is
//! non-empty exactly one interface is primary. Field edits on a single
//! interface validate their input and keep mask and CIDR in agreement.

use tracing::debug;

use crate::domain::network::validate_ipv4;
use crate::domain::{
    cidr_to_mask, mask_to_cidr, ComputerConfig, DeviceId, InterfaceId, MacAddress, NetworkError,
    NetworkInterface, NetworkProject, VlanId, DEFAULT_CIDR,
};
use crate::errors::{TopologyError, TopologyResult};

impl ComputerConfig {
    /// Append an interface.
    ///
    /// The first interface is always primary. Later ones join as secondary so
    /// the existing primary keeps its flag; use [`Self::set_primary_interface`]
    /// to move it.
    pub fn add_interface(&mut self, mut interface: NetworkInterface) -> &NetworkInterface {
        interface.is_primary = self.interfaces.is_empty();
        self.interfaces.push(interface);
        &self.interfaces[self.interfaces.len() - 1]
    }

    /// Remove an interface.
    ///
    /// Returns false when no interface has that id, or when it is the only
    /// interface left (a config always keeps at least one).
    pub fn remove_interface(&mut self, interface_id: &InterfaceId) -> bool {
        let Some(index) = self.interfaces.iter().position(|i| &i.id == interface_id) else {
            return false;
        };
        if self.interfaces.len() == 1 {
            return false;
        }

        let removed = self.interfaces.remove(index);
        if removed.is_primary {
            if let Some(first) = self.interfaces.first_mut() {
                first.is_primary = true;
            }
        }
        true
    }

    /// Make one interface primary and every other interface secondary
    pub fn set_primary_interface(&mut self, interface_id: &InterfaceId) -> TopologyResult<()> {
        if !self.interfaces.iter().any(|i| &i.id == interface_id) {
            return Err(TopologyError::not_found("interface", interface_id));
        }
        for iface in &mut self.interfaces {
            iface.is_primary = &iface.id == interface_id;
        }
        Ok(())
    }

    pub fn interface(&self, interface_id: &InterfaceId) -> Option<&NetworkInterface> {
        self.interfaces.iter().find(|i| &i.id == interface_id)
    }

    pub fn interface_mut(
        &mut self,
        interface_id: &InterfaceId,
    ) -> TopologyResult<&mut NetworkInterface> {
        self.interfaces
            .iter_mut()
            .find(|i| &i.id == interface_id)
            .ok_or_else(|| TopologyError::not_found("interface", interface_id))
    }
}

impl NetworkInterface {
    /// Store a mask and recompute the CIDR from its set bits.
    ///
    /// A mask that does not parse is stored as given with the CIDR reset to 24.
    pub fn set_subnet_mask(&mut self, mask: impl Into<String>) {
        self.subnet_mask = mask.into();
        self.resync_cidr();
    }

    /// Store a prefix length and recompute the mask
    pub fn set_cidr(&mut self, prefix: u8) -> Result<(), NetworkError> {
        self.subnet_mask = cidr_to_mask(prefix)?;
        self.cidr = prefix;
        Ok(())
    }

    /// Derive the CIDR from the stored mask
    pub fn resync_cidr(&mut self) {
        self.cidr = mask_to_cidr(&self.subnet_mask).unwrap_or(DEFAULT_CIDR);
    }

    /// Set the address; empty clears it
    pub fn set_ip_address(&mut self, address: &str) -> Result<(), NetworkError> {
        let address = address.trim();
        validate_ipv4(address)?;
        self.ip_address = address.to_string();
        Ok(())
    }

    /// Set the gateway; empty clears it
    pub fn set_gateway(&mut self, gateway: &str) -> Result<(), NetworkError> {
        let gateway = gateway.trim();
        validate_ipv4(gateway)?;
        self.gateway = gateway.to_string();
        Ok(())
    }

    /// Replace DNS servers from a comma-separated list
    pub fn set_dns_servers(&mut self, list: &str) -> Result<(), NetworkError> {
        let servers: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        for server in &servers {
            validate_ipv4(server)?;
        }
        self.dns = servers;
        Ok(())
    }

    /// Set the MAC address in canonical form; empty clears it
    pub fn set_mac_address(&mut self, mac: &str) -> Result<(), NetworkError> {
        let mac = mac.trim();
        self.mac_address = if mac.is_empty() {
            None
        } else {
            Some(MacAddress::new(mac)?.to_string())
        };
        Ok(())
    }

    pub fn set_vlan_id(&mut self, vlan: Option<u16>) -> Result<(), NetworkError> {
        self.vlan_id = vlan.map(VlanId::new).transpose()?.map(|v| v.value());
        Ok(())
    }
}

impl NetworkProject {
    /// Add a named interface to a device's config
    pub fn add_device_interface(
        &mut self,
        device_id: &DeviceId,
        name: impl Into<String>,
    ) -> TopologyResult<InterfaceId> {
        let config = self.config_mut(device_id)?;
        let id = config.add_interface(NetworkInterface::new(name)).id.clone();
        debug!(device_id = %device_id, interface_id = %id, "Added interface");
        Ok(id)
    }

    /// Remove an interface from a device's config
    pub fn remove_device_interface(
        &mut self,
        device_id: &DeviceId,
        interface_id: &InterfaceId,
    ) -> TopologyResult<bool> {
        let removed = self.config_mut(device_id)?.remove_interface(interface_id);
        if removed {
            debug!(device_id = %device_id, interface_id = %interface_id, "Removed interface");
        }
        Ok(removed)
    }

    pub fn set_device_primary_interface(
        &mut self,
        device_id: &DeviceId,
        interface_id: &InterfaceId,
    ) -> TopologyResult<()> {
        self.config_mut(device_id)?
            .set_primary_interface(interface_id)?;
        debug!(device_id = %device_id, interface_id = %interface_id, "Changed primary interface");
        Ok(())
    }
}
