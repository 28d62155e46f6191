// Copyright (c) 2025 - Cowboy AI, Inc.
//! Graph Mutator
//!
//! Invariant-preserving edits on a [`NetworkProject`](crate::domain::NetworkProject)
//! and on the interfaces of a [`ComputerConfig`](crate::domain::ComputerConfig).
//! The operations are inherent methods, so callers simply write
//! `project.add_connection(&a, &b)?`.
//!
//! Mutations do not refresh `modified_at`; callers that persist the project
//! call [`NetworkProject::touch`](crate::domain::NetworkProject::touch).

pub mod graph;
pub mod interfaces;
