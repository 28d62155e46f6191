// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for network-designer
//!
//! Deterministic projects for generator and serialization tests. Every id and
//! timestamp is a fixed constant so artifacts can be compared byte for byte.
//!
//! # Design Principles
//! - No `Uuid::new_v4()` or `Utc::now()` in fixture data
//! - Devices are inserted with known ids; connections go through the mutator
//!   so caches stay consistent

#![allow(dead_code)]

use network_designer::domain::{
    Connection, ConnectionId, DeviceId, DeviceType, InterfaceId, NetworkDevice, NetworkInterface,
    NetworkProject, OsImage, Position, RestartPolicy,
};

pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

pub const WEB_ID: &str = "dev-web";
pub const DB_ID: &str = "dev-db";
pub const APP_ID: &str = "dev-app";
pub const ROUTER_ID: &str = "dev-router";
pub const CONN_APP_DB: &str = "conn-app-db";
pub const CONN_APP_ROUTER: &str = "conn-app-router";

/// Empty project with fixed timestamps
pub fn empty_project(name: &str) -> NetworkProject {
    NetworkProject {
        name: name.to_string(),
        created_at: FIXED_TIMESTAMP.to_string(),
        modified_at: FIXED_TIMESTAMP.to_string(),
        ..NetworkProject::default()
    }
}

/// Insert a device with a known id; workload types get their default config
pub fn insert_device(
    project: &mut NetworkProject,
    id: &str,
    device_type: DeviceType,
    name: &str,
    x: f64,
    y: f64,
) -> DeviceId {
    let device = NetworkDevice::with_config(
        DeviceId::from(id),
        device_type,
        name,
        Position::new(x, y),
        None,
    );
    let id = device.id.clone();
    project.devices.insert(id.clone(), device);
    id
}

/// Connect two devices under a known connection id
pub fn connect(project: &mut NetworkProject, id: &str, source: &str, target: &str) -> ConnectionId {
    let mut connection = Connection::new(DeviceId::from(source), DeviceId::from(target));
    connection.id = ConnectionId::from(id);
    project
        .insert_connection(connection)
        .expect("fixture connection endpoints exist")
        .id
        .clone()
}

/// One computer named `web` running nginx with port 8080:80
pub fn web_project() -> NetworkProject {
    let mut project = empty_project("Web Demo");
    let web = insert_device(&mut project, WEB_ID, DeviceType::Computer, "web", 100.0, 200.0);

    let config = project.config_mut(&web).expect("computer has config");
    config.os = OsImage::Nginx;
    config.ports = vec!["8080:80".to_string()];
    config.cpu_limit = 1.0;
    config.memory_limit = "512m".to_string();
    project
}

/// A database and an application connected once
pub fn db_app_project() -> NetworkProject {
    let mut project = empty_project("Db App");
    let db = insert_device(&mut project, DB_ID, DeviceType::Database, "db", 100.0, 100.0);
    insert_device(&mut project, APP_ID, DeviceType::Computer, "app", 300.0, 100.0);
    project.config_mut(&db).expect("database has config").os = OsImage::Postgres;
    connect(&mut project, CONN_APP_DB, APP_ID, DB_ID);
    project
}

/// A project exercising every optional field
pub fn full_project() -> NetworkProject {
    let mut project = db_app_project();
    project.name = "Full Lab".to_string();
    project.description = "Every field populated".to_string();
    project.version = "2.1.0".to_string();
    project
        .metadata
        .insert("owner".to_string(), serde_json::json!("infra-team"));
    project
        .metadata
        .insert("tags".to_string(), serde_json::json!(["lab", "demo"]));

    insert_device(&mut project, ROUTER_ID, DeviceType::Router, "edge router", 500.0, 300.0);
    project
        .set_device_networks(&DeviceId::from(ROUTER_ID), "frontend, backend")
        .expect("router exists");

    let app = DeviceId::from(APP_ID);
    project
        .set_device_networks(&app, "default, frontend")
        .expect("app exists");
    let config = project.config_mut(&app).expect("app has config");
    config.os = OsImage::Custom;
    config.custom_image = "registry.local/app:1.4".to_string();
    config.cpu_limit = 2.5;
    config.memory_limit = "2g".to_string();
    config.storage_volume = "./data:/var/lib/app".to_string();
    config.environment.insert("RUST_LOG".to_string(), "info".to_string());
    config
        .environment
        .insert("DATABASE_URL".to_string(), "postgres://db:5432/app".to_string());
    config.ports = vec!["8080:80".to_string(), "8443:443".to_string()];
    config.command = "app serve".to_string();
    config.entrypoint = "/usr/bin/tini".to_string();
    config.restart_policy = RestartPolicy::OnFailure;
    config.labels.insert("tier".to_string(), "backend".to_string());
    config.capabilities = vec!["NET_ADMIN".to_string()];
    config.privileged = true;

    let mut eth1 = NetworkInterface::new("eth1");
    eth1.id = InterfaceId::from("iface-app-eth1");
    eth1.ip_address = "10.0.1.10".to_string();
    eth1.gateway = "10.0.1.1".to_string();
    eth1.dns = vec!["10.0.0.53".to_string(), "1.1.1.1".to_string()];
    eth1.mac_address = Some("02:42:ac:11:00:02".to_string());
    eth1.vlan_id = Some(20);
    eth1.connected_to = Some(CONN_APP_ROUTER.to_string());
    config.add_interface(eth1);

    let mut link = Connection::new(app.clone(), DeviceId::from(ROUTER_ID));
    link.id = ConnectionId::from(CONN_APP_ROUTER);
    link.source_interface_id = Some(InterfaceId::from("iface-app-eth1"));
    link.network_name = "frontend".to_string();
    link.bandwidth = Some("1Gbps".to_string());
    link.latency = Some("2ms".to_string());
    project
        .insert_connection(link)
        .expect("fixture connection endpoints exist");

    project
}

/// A document in the layout the desktop designer saves: flat `x`/`y`
/// coordinates, `environment_vars`, empty-string MAC addresses, a workload
/// device with a null config, and hand-edited drift (mask/CIDR disagreement,
/// a one-sided connection cache)
pub const LEGACY_DOCUMENT: &str = r#"{
  "name": "Legacy",
  "description": "Saved by the desktop designer",
  "version": "1.0.0",
  "created_at": "2023-05-01T08:00:00",
  "modified_at": "2023-05-02T09:30:00",
  "devices": {
    "pc-1": {
      "id": "pc-1",
      "type": "computer",
      "name": "workstation",
      "x": 150,
      "y": 250.5,
      "config": null,
      "connections": [],
      "networks": ["default"]
    },
    "db-1": {
      "id": "db-1",
      "type": "database",
      "name": "store",
      "x": 300.0,
      "y": 400.0,
      "config": {
        "cpu_limit": 2.0,
        "memory_limit": "1g",
        "storage_volume": "./mysql:/var/lib/mysql",
        "os": "mysql:8",
        "custom_image": "",
        "environment_vars": { "MYSQL_ROOT_PASSWORD": "secret", "MODE": "prod" },
        "ports": ["3306:3306"],
        "interfaces": [
          {
            "id": "if-a",
            "name": "eth0",
            "ip_address": "10.0.0.5",
            "subnet_mask": "255.255.0.0",
            "cidr": 24,
            "gateway": "",
            "dns": [],
            "mac_address": "",
            "connected_to": null,
            "vlan_id": null,
            "is_primary": false
          },
          {
            "id": "if-b",
            "name": "eth1",
            "ip_address": "",
            "subnet_mask": "255.255.255.0",
            "cidr": 24,
            "gateway": "",
            "dns": [],
            "mac_address": "",
            "connected_to": null,
            "vlan_id": 30,
            "is_primary": false
          }
        ],
        "command": "",
        "entrypoint": "",
        "restart_policy": "always",
        "labels": {},
        "capabilities": [],
        "privileged": false
      },
      "connections": ["pc-1"],
      "networks": ["default", "backend"]
    },
    "sw-1": {
      "id": "sw-1",
      "type": "switch",
      "name": "core",
      "x": 500,
      "y": 100,
      "config": null,
      "connections": [],
      "networks": ["default"]
    }
  },
  "connections": {
    "c-1": {
      "id": "c-1",
      "source_id": "db-1",
      "target_id": "pc-1",
      "source_interface_id": null,
      "target_interface_id": null,
      "network_name": "default",
      "bandwidth": null,
      "latency": null
    }
  },
  "metadata": {}
}"#;
