// Copyright (c) 2025 - Cowboy AI, Inc.
//! Project Graph Mutations
//!
//! Every operation validates before it writes, so a failed call leaves the
//! project exactly as it was.

use tracing::debug;

use crate::domain::invariants::pair_is_connected;
use crate::domain::{
    ComputerConfig, Connection, ConnectionId, DeviceId, DeviceType, NetworkDevice, NetworkProject,
    Position,
};
use crate::errors::{TopologyError, TopologyResult};

impl NetworkProject {
    /// Add a device of the given type at canvas coordinates.
    ///
    /// The default name is `<type>_<n>` where `n` is one more than the number
    /// of devices of that type currently in the project.
    pub fn add_device(&mut self, device_type: DeviceType, x: f64, y: f64) -> &NetworkDevice {
        let name = format!(
            "{}_{}",
            device_type.as_str(),
            self.count_devices_by_type(device_type) + 1
        );
        let device = NetworkDevice::new(device_type, name, Position::new(x, y));
        let id = device.id.clone();

        debug!(device_id = %id, device_type = %device_type, name = %device.name, "Added device");

        self.devices.entry(id).or_insert(device)
    }

    /// Remove a device together with every connection touching it
    pub fn remove_device(&mut self, device_id: &DeviceId) -> TopologyResult<NetworkDevice> {
        let device = self
            .devices
            .shift_remove(device_id)
            .ok_or_else(|| TopologyError::not_found("device", device_id))?;

        let before = self.connections.len();
        self.connections.retain(|_, conn| !conn.touches(device_id));
        let removed_connections = before - self.connections.len();

        for other in self.devices.values_mut() {
            other.remove_connection(device_id);
        }

        debug!(
            device_id = %device_id,
            removed_connections,
            "Removed device"
        );
        Ok(device)
    }

    /// Connect two distinct devices
    pub fn add_connection(
        &mut self,
        source_id: &DeviceId,
        target_id: &DeviceId,
    ) -> TopologyResult<&Connection> {
        self.insert_connection(Connection::new(source_id.clone(), target_id.clone()))
    }

    /// Insert a fully described connection (interfaces, network, annotations)
    pub fn insert_connection(&mut self, connection: Connection) -> TopologyResult<&Connection> {
        if connection.source_id == connection.target_id {
            return Err(TopologyError::SelfConnection(connection.source_id.to_string()));
        }
        for endpoint in [&connection.source_id, &connection.target_id] {
            if !self.devices.contains_key(endpoint) {
                return Err(TopologyError::InvalidReference(endpoint.to_string()));
            }
        }
        if self.connections.contains_key(&connection.id) {
            return Err(TopologyError::InvalidValue(format!(
                "connection {} already exists",
                connection.id
            )));
        }

        if let Some(source) = self.devices.get_mut(&connection.source_id) {
            source.add_connection(&connection.target_id);
        }
        if let Some(target) = self.devices.get_mut(&connection.target_id) {
            target.add_connection(&connection.source_id);
        }

        debug!(
            connection_id = %connection.id,
            source = %connection.source_id,
            target = %connection.target_id,
            "Added connection"
        );

        let id = connection.id.clone();
        Ok(self.connections.entry(id).or_insert(connection))
    }

    /// Remove a connection.
    ///
    /// The endpoints forget each other only when no other connection joins
    /// the same pair.
    pub fn remove_connection(&mut self, connection_id: &ConnectionId) -> TopologyResult<Connection> {
        let connection = self
            .connections
            .shift_remove(connection_id)
            .ok_or_else(|| TopologyError::not_found("connection", connection_id))?;

        if !pair_is_connected(self, &connection.pair()) {
            if let Some(source) = self.devices.get_mut(&connection.source_id) {
                source.remove_connection(&connection.target_id);
            }
            if let Some(target) = self.devices.get_mut(&connection.target_id) {
                target.remove_connection(&connection.source_id);
            }
        }

        debug!(connection_id = %connection_id, "Removed connection");
        Ok(connection)
    }

    // ========================================================================
    // Device Edits
    // ========================================================================

    pub fn device_mut(&mut self, device_id: &DeviceId) -> TopologyResult<&mut NetworkDevice> {
        self.devices
            .get_mut(device_id)
            .ok_or_else(|| TopologyError::not_found("device", device_id))
    }

    /// Container config of a device
    pub fn config_mut(&mut self, device_id: &DeviceId) -> TopologyResult<&mut ComputerConfig> {
        self.device_mut(device_id)?
            .config
            .as_mut()
            .ok_or_else(|| TopologyError::not_found("config for device", device_id))
    }

    pub fn rename_device(&mut self, device_id: &DeviceId, name: impl Into<String>) -> TopologyResult<()> {
        let device = self.device_mut(device_id)?;
        device.name = name.into();
        debug!(device_id = %device_id, name = %device.name, "Renamed device");
        Ok(())
    }

    pub fn move_device(&mut self, device_id: &DeviceId, x: f64, y: f64) -> TopologyResult<()> {
        self.device_mut(device_id)?.position = Position::new(x, y);
        Ok(())
    }

    /// Replace memberships from a comma-separated list; blank entries are dropped
    pub fn set_device_networks(&mut self, device_id: &DeviceId, list: &str) -> TopologyResult<()> {
        let device = self.device_mut(device_id)?;
        device.networks = split_list(list);
        debug!(device_id = %device_id, networks = ?device.networks, "Updated memberships");
        Ok(())
    }

    /// Replace port mappings from a comma-separated list; blank entries are dropped
    pub fn set_device_ports(&mut self, device_id: &DeviceId, list: &str) -> TopologyResult<()> {
        let config = self.config_mut(device_id)?;
        config.ports = split_list(list);
        Ok(())
    }

    /// Replace environment variables from `KEY=VALUE` lines.
    ///
    /// Each line splits on its first `=`; key and value are trimmed. Lines
    /// without `=` are skipped.
    pub fn set_device_environment(&mut self, device_id: &DeviceId, lines: &str) -> TopologyResult<()> {
        let config = self.config_mut(device_id)?;
        config.environment = lines
            .lines()
            .filter_map(|line| line.trim().split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect();
        debug!(device_id = %device_id, count = config.environment.len(), "Updated environment");
        Ok(())
    }

    /// Recompute every interface's CIDR from its mask
    pub fn resync_subnet_prefixes(&mut self) {
        for config in self.devices.values_mut().filter_map(|d| d.config.as_mut()) {
            for iface in &mut config.interfaces {
                iface.resync_cidr();
            }
        }
    }
}

fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_names_count_current_devices() {
        let mut project = NetworkProject::default();
        let first = project.add_device(DeviceType::Router, 0.0, 0.0).id.clone();
        project.add_device(DeviceType::Router, 10.0, 0.0);
        project.add_device(DeviceType::Switch, 20.0, 0.0);

        assert!(project.device_by_name("router_2").is_some());
        assert!(project.device_by_name("switch_1").is_some());

        // Deleting and re-adding reuses the count
        project.remove_device(&first).unwrap();
        let name = project.add_device(DeviceType::Router, 0.0, 0.0).name.clone();
        assert_eq!(name, "router_2");
        assert_eq!(
            project
                .devices
                .values()
                .filter(|d| d.name == "router_2")
                .count(),
            2
        );
    }

    #[test]
    fn test_remove_device_cascades() {
        let mut project = NetworkProject::default();
        let a = project.add_device(DeviceType::Computer, 0.0, 0.0).id.clone();
        let b = project.add_device(DeviceType::Switch, 0.0, 0.0).id.clone();
        let c = project.add_device(DeviceType::Database, 0.0, 0.0).id.clone();

        project.add_connection(&a, &b).unwrap();
        project.add_connection(&b, &c).unwrap();
        project.add_connection(&c, &a).unwrap();

        project.remove_device(&b).unwrap();

        assert_eq!(project.connections.len(), 1);
        assert!(project.connections.values().all(|conn| !conn.touches(&b)));
        assert!(project.devices.values().all(|d| !d.is_connected_to(&b)));
        assert_eq!(project.device(&a).unwrap().connections, vec![c.clone()]);
    }

    #[test]
    fn test_remove_missing_device() {
        let mut project = NetworkProject::default();
        let err = project.remove_device(&DeviceId::from("nope")).unwrap_err();
        assert!(matches!(err, TopologyError::NotFound { kind: "device", .. }));
    }

    #[test]
    fn test_add_connection_rejections() {
        let mut project = NetworkProject::default();
        let a = project.add_device(DeviceType::Computer, 0.0, 0.0).id.clone();

        assert!(matches!(
            project.add_connection(&a, &a),
            Err(TopologyError::SelfConnection(_))
        ));
        assert!(matches!(
            project.add_connection(&a, &DeviceId::from("ghost")),
            Err(TopologyError::InvalidReference(_))
        ));
        assert!(project.connections.is_empty());
        assert!(project.device(&a).unwrap().connections.is_empty());
    }

    #[test]
    fn test_parallel_connections_keep_cache_until_last_removed() {
        let mut project = NetworkProject::default();
        let a = project.add_device(DeviceType::Computer, 0.0, 0.0).id.clone();
        let b = project.add_device(DeviceType::Router, 0.0, 0.0).id.clone();

        let first = project.add_connection(&a, &b).unwrap().id.clone();
        let second = project.add_connection(&b, &a).unwrap().id.clone();
        assert_eq!(project.device(&a).unwrap().connections, vec![b.clone()]);

        project.remove_connection(&first).unwrap();
        assert!(project.device(&a).unwrap().is_connected_to(&b));
        assert!(project.device(&b).unwrap().is_connected_to(&a));

        project.remove_connection(&second).unwrap();
        assert!(!project.device(&a).unwrap().is_connected_to(&b));
        assert!(!project.device(&b).unwrap().is_connected_to(&a));

        assert!(matches!(
            project.remove_connection(&second),
            Err(TopologyError::NotFound { kind: "connection", .. })
        ));
    }

    #[test]
    fn test_list_edits() {
        let mut project = NetworkProject::default();
        let a = project.add_device(DeviceType::Computer, 0.0, 0.0).id.clone();
        let r = project.add_device(DeviceType::Router, 0.0, 0.0).id.clone();

        project
            .set_device_networks(&a, " frontend, ,backend ,")
            .unwrap();
        assert_eq!(
            project.device(&a).unwrap().networks,
            vec!["frontend".to_string(), "backend".to_string()]
        );

        project.set_device_ports(&a, "8080:80, 3000:3000").unwrap();
        assert_eq!(
            project.device(&a).unwrap().config.as_ref().unwrap().ports,
            vec!["8080:80".to_string(), "3000:3000".to_string()]
        );

        // Routers carry no container config
        assert!(matches!(
            project.set_device_ports(&r, "80:80"),
            Err(TopologyError::NotFound { .. })
        ));
    }

    #[test]
    fn test_environment_edit() {
        let mut project = NetworkProject::default();
        let a = project.add_device(DeviceType::Computer, 0.0, 0.0).id.clone();
        project
            .config_mut(&a)
            .unwrap()
            .environment
            .insert("STALE".into(), "1".into());

        project
            .set_device_environment(
                &a,
                " MODE = prod \nDATABASE_URL=postgres://db/app?sslmode=require\nnot a pair\n\n",
            )
            .unwrap();

        let config = project.device(&a).unwrap().config.as_ref().unwrap();
        let env: Vec<(&str, &str)> = config
            .environment
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            env,
            vec![
                ("MODE", "prod"),
                ("DATABASE_URL", "postgres://db/app?sslmode=require"),
            ]
        );

        let r = project.add_device(DeviceType::Router, 0.0, 0.0).id.clone();
        assert!(matches!(
            project.set_device_environment(&r, "A=1"),
            Err(TopologyError::NotFound { .. })
        ));
    }
}
