// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Strategies live in `strategies`; each remaining module checks one family
//! of properties.

mod graph_invariants;
mod interface_invariants;
mod round_trip;
mod strategies;
