// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Graph Mutations
//!
//! Any sequence of graph edits leaves a project that passes every invariant
//! check, and the two rejection paths never change the project.

use network_designer::domain::{validate_project, NetworkProject};
use network_designer::TopologyError;
use proptest::prelude::*;

use super::strategies::{apply_graph_op, device_type, graph_ops, project};

proptest! {
    /// Property: Mutations preserve every invariant
    #[test]
    fn prop_mutations_preserve_invariants(ops in graph_ops()) {
        let mut project = NetworkProject::default();
        for op in &ops {
            apply_graph_op(&mut project, op);
            let issues = validate_project(&project);
            prop_assert!(issues.is_empty(), "after {:?}: {:?}", op, issues);
        }
    }

    /// Property: Removing a device erases every reference to it
    #[test]
    fn prop_cascade_deletion(project in project(), pick in any::<usize>()) {
        prop_assume!(!project.devices.is_empty());
        let mut project = project;
        let id = project.devices.keys().nth(pick % project.devices.len()).cloned().unwrap();

        let before = project.devices.len();
        project.remove_device(&id).unwrap();

        prop_assert_eq!(project.devices.len(), before - 1);
        prop_assert!(project.connections.values().all(|c| !c.touches(&id)));
        prop_assert!(project.devices.values().all(|d| !d.is_connected_to(&id)));
        prop_assert!(validate_project(&project).is_empty());
    }

    /// Property: A device can never be connected to itself
    #[test]
    fn prop_self_connection_rejected(
        project in project(),
        kind in device_type(),
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
    ) {
        let mut project = project;
        let id = project.add_device(kind, x, y).id.clone();
        let connections = project.connections.clone();

        let result = project.add_connection(&id, &id);

        prop_assert!(matches!(result, Err(TopologyError::SelfConnection(_))));
        prop_assert_eq!(&project.connections, &connections);
    }

    /// Property: Default names count devices of the same type
    #[test]
    fn prop_default_name_counts_type(project in project(), kind in device_type()) {
        let mut project = project;
        let expected = format!("{}_{}", kind.as_str(), project.count_devices_by_type(kind) + 1);
        let name = project.add_device(kind, 0.0, 0.0).name.clone();
        prop_assert_eq!(name, expected);
    }
}
