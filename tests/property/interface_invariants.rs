// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Interface Editing
//!
//! The primary flag is unique after any sequence of interface edits, and
//! the list never becomes empty.

use network_designer::domain::{cidr_to_mask, mask_to_cidr, ComputerConfig, NetworkInterface};
use proptest::prelude::*;

use super::strategies::{apply_interface_op, interface_ops};

proptest! {
    /// Property: Exactly one primary interface
    #[test]
    fn prop_primary_uniqueness(ops in interface_ops()) {
        let mut config = ComputerConfig::new();
        for op in &ops {
            apply_interface_op(&mut config, op);
            prop_assert!(!config.interfaces.is_empty());
            prop_assert_eq!(config.primary_count(), 1, "after {:?}", op);
        }
    }

    /// Property: Setting a mask keeps the CIDR equal to its popcount
    #[test]
    fn prop_mask_edit_keeps_cidr_consistent(prefix in 0u8..=32) {
        let mask = cidr_to_mask(prefix).unwrap();
        let mut iface = NetworkInterface::default();
        iface.set_subnet_mask(mask.clone());

        prop_assert_eq!(iface.cidr, prefix);
        prop_assert_eq!(mask_to_cidr(&mask), Some(prefix));
        prop_assert!(iface.is_prefix_consistent());
    }
}
