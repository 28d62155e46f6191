// Copyright (c) 2025 - Cowboy AI, Inc.
//! Proptest Strategies
//!
//! Projects are built by replaying random mutation sequences, so every
//! generated project satisfies the mutator's invariants by construction.

use network_designer::domain::{
    ComputerConfig, DeviceType, NetworkInterface, NetworkProject, OsImage, RestartPolicy,
};
use proptest::prelude::*;

/// One graph edit; indices pick among the current devices/connections
#[derive(Debug, Clone)]
pub enum GraphOp {
    AddDevice { kind: usize, x: f64, y: f64 },
    RemoveDevice(usize),
    Connect(usize, usize),
    Disconnect(usize),
}

/// One interface edit on a single config
#[derive(Debug, Clone)]
pub enum InterfaceOp {
    Add(String),
    Remove(usize),
    SetPrimary(usize),
    RemoveUnknown,
}

pub fn device_type() -> impl Strategy<Value = DeviceType> {
    prop::sample::select(DeviceType::ALL.to_vec())
}

/// Canvas coordinate on a quarter-unit grid
pub fn coordinate() -> impl Strategy<Value = f64> {
    (-4000i32..4000).prop_map(|v| f64::from(v) / 4.0)
}

pub fn graph_op() -> impl Strategy<Value = GraphOp> {
    prop_oneof![
        3 => (0..DeviceType::ALL.len(), coordinate(), coordinate())
            .prop_map(|(kind, x, y)| GraphOp::AddDevice { kind, x, y }),
        1 => any::<usize>().prop_map(GraphOp::RemoveDevice),
        3 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| GraphOp::Connect(a, b)),
        1 => any::<usize>().prop_map(GraphOp::Disconnect),
    ]
}

pub fn graph_ops() -> impl Strategy<Value = Vec<GraphOp>> {
    prop::collection::vec(graph_op(), 0..40)
}

pub fn interface_ops() -> impl Strategy<Value = Vec<InterfaceOp>> {
    let op = prop_oneof![
        "eth[0-9]".prop_map(InterfaceOp::Add),
        any::<usize>().prop_map(InterfaceOp::Remove),
        any::<usize>().prop_map(InterfaceOp::SetPrimary),
        Just(InterfaceOp::RemoveUnknown),
    ];
    prop::collection::vec(op, 0..30)
}

/// Apply a graph edit; edits that the mutator rejects are ignored
pub fn apply_graph_op(project: &mut NetworkProject, op: &GraphOp) {
    match op {
        GraphOp::AddDevice { kind, x, y } => {
            project.add_device(DeviceType::ALL[*kind], *x, *y);
        }
        GraphOp::RemoveDevice(i) => {
            if let Some(id) = nth_key(project.devices.keys(), *i) {
                let _ = project.remove_device(&id);
            }
        }
        GraphOp::Connect(a, b) => {
            let source = nth_key(project.devices.keys(), *a);
            let target = nth_key(project.devices.keys(), *b);
            if let (Some(source), Some(target)) = (source, target) {
                let _ = project.add_connection(&source, &target);
            }
        }
        GraphOp::Disconnect(i) => {
            if let Some(id) = nth_key(project.connections.keys(), *i) {
                let _ = project.remove_connection(&id);
            }
        }
    }
}

/// Apply an interface edit
pub fn apply_interface_op(config: &mut ComputerConfig, op: &InterfaceOp) {
    match op {
        InterfaceOp::Add(name) => {
            config.add_interface(NetworkInterface::new(name.clone()));
        }
        InterfaceOp::Remove(i) => {
            if let Some(id) = nth_key(config.interfaces.iter().map(|iface| &iface.id), *i) {
                config.remove_interface(&id);
            }
        }
        InterfaceOp::SetPrimary(i) => {
            if let Some(id) = nth_key(config.interfaces.iter().map(|iface| &iface.id), *i) {
                let _ = config.set_primary_interface(&id);
            }
        }
        InterfaceOp::RemoveUnknown => {
            config.remove_interface(&"not-an-interface".into());
        }
    }
}

fn nth_key<'a, K: Clone + 'a>(
    keys: impl ExactSizeIterator<Item = &'a K>,
    index: usize,
) -> Option<K> {
    let len = keys.len();
    if len == 0 {
        return None;
    }
    keys.into_iter().nth(index % len).cloned()
}

/// Random container settings applied on top of a default config
#[derive(Debug, Clone)]
pub struct ConfigEdit {
    pub os: OsImage,
    pub custom_image: String,
    pub restart: RestartPolicy,
    pub cpu_quarters: u8,
    pub memory_limit: String,
    pub environment: Vec<(String, String)>,
    pub ports: Vec<String>,
    pub command: String,
    pub extra_interface: Option<(String, Option<u16>, Option<String>)>,
}

pub fn config_edit() -> impl Strategy<Value = ConfigEdit> {
    (
        prop::sample::select(OsImage::ALL.to_vec()),
        "[a-z]{1,8}/[a-z]{1,8}:[0-9]",
        prop::sample::select(RestartPolicy::ALL.to_vec()),
        0u8..16,
        prop_oneof!["[0-9]{1,4}[mg]", ".{0,6}"],
        prop::collection::vec(("[A-Z_]{1,8}", ".{0,12}"), 0..4),
        prop::collection::vec("[0-9]{1,5}:[0-9]{1,5}|[a-z]{0,6}", 0..4),
        ".{0,16}",
        prop::option::of((
            "eth[1-9]",
            prop::option::of(1u16..4095),
            prop::option::of("[0-9a-f]{2}(:[0-9a-f]{2}){5}"),
        )),
    )
        .prop_map(
            |(os, custom_image, restart, cpu_quarters, memory_limit, environment, ports, command, extra_interface)| {
                ConfigEdit {
                    os,
                    custom_image,
                    restart,
                    cpu_quarters,
                    memory_limit,
                    environment,
                    ports,
                    command,
                    extra_interface,
                }
            },
        )
}

pub fn apply_config_edit(config: &mut ComputerConfig, edit: &ConfigEdit) {
    config.os = edit.os;
    if edit.os.is_custom() {
        config.custom_image = edit.custom_image.clone();
    }
    config.restart_policy = edit.restart;
    config.cpu_limit = f64::from(edit.cpu_quarters) / 4.0;
    config.memory_limit = edit.memory_limit.clone();
    config.environment = edit.environment.iter().cloned().collect();
    config.ports = edit.ports.clone();
    config.command = edit.command.clone();
    if let Some((name, vlan, mac)) = &edit.extra_interface {
        let mut iface = NetworkInterface::new(name.clone());
        iface.vlan_id = *vlan;
        iface.mac_address = mac.clone();
        config.add_interface(iface);
    }
}

/// A project built from a random mutation history plus random config edits
pub fn project() -> impl Strategy<Value = NetworkProject> {
    (
        ".{0,20}",
        ".{0,40}",
        graph_ops(),
        prop::collection::vec(config_edit(), 0..6),
        prop::collection::vec(("[a-z]{1,6}", any::<i32>()), 0..3),
    )
        .prop_map(|(name, description, ops, edits, metadata)| {
            let mut project = NetworkProject::default();
            project.name = name;
            project.description = description;
            project.created_at = "2026-01-19T12:00:00Z".to_string();
            project.modified_at = "2026-01-19T12:00:00Z".to_string();

            for op in &ops {
                apply_graph_op(&mut project, op);
            }

            let configs = project
                .devices
                .values_mut()
                .filter_map(|device| device.config.as_mut());
            for (config, edit) in configs.zip(edits.iter()) {
                apply_config_edit(config, edit);
            }

            for (key, value) in metadata {
                project.metadata.insert(key, serde_json::json!(value));
            }
            project
        })
}
