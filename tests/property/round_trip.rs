// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Serialization and Generation
//!
//! Serialization is lossless, and generation is a deterministic, total
//! function of the project.

use network_designer::generators::{generate_compose, generate_svg, generate_terraform};
use network_designer::serialization::{from_json, from_value, to_json, to_value};
use network_designer::CanvasConfig;
use proptest::prelude::*;

use super::strategies::project;

proptest! {
    /// Property: deserialize(serialize(p)) == p
    #[test]
    fn prop_json_round_trip(project in project()) {
        let json = to_json(&project).unwrap();
        let restored = from_json(&json).unwrap();
        prop_assert_eq!(restored, project);
    }

    /// Property: Value round trip agrees with the text round trip
    #[test]
    fn prop_value_round_trip(project in project()) {
        let restored = from_value(to_value(&project).unwrap()).unwrap();
        prop_assert_eq!(restored, project);
    }

    /// Property: Generators are deterministic and never fail on best-effort fields
    #[test]
    fn prop_generators_total_and_deterministic(project in project()) {
        prop_assert_eq!(generate_terraform(&project), generate_terraform(&project));

        let compose = generate_compose(&project).unwrap();
        prop_assert_eq!(&compose, &generate_compose(&project).unwrap());
        let parsed: serde_yaml::Value = serde_yaml::from_str(&compose).unwrap();
        prop_assert!(parsed.get("services").is_some());

        let canvas = CanvasConfig::default();
        prop_assert_eq!(generate_svg(&project, &canvas), generate_svg(&project, &canvas));
    }
}
