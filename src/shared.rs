// Copyright (c) 2025 - Cowboy AI, Inc.
//! Shared Project Handle
//!
//! For multi-threaded hosts. Each mutation runs inside a single write lock
//! against a working copy, and the copy replaces the project only when the
//! whole closure succeeds. Readers therefore never observe a half-applied
//! cascade, and a failed mutation leaves no trace.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::domain::NetworkProject;
use crate::errors::TopologyResult;

/// Cloneable, lock-protected project
#[derive(Debug, Clone, Default)]
pub struct SharedProject {
    inner: Arc<RwLock<NetworkProject>>,
}

impl SharedProject {
    pub fn new(project: NetworkProject) -> Self {
        Self {
            inner: Arc::new(RwLock::new(project)),
        }
    }

    /// Run a read-only function against the current project
    pub fn read<R>(&self, f: impl FnOnce(&NetworkProject) -> R) -> R {
        f(&self.inner.read())
    }

    /// Apply a mutation atomically
    pub fn mutate<R>(
        &self,
        f: impl FnOnce(&mut NetworkProject) -> TopologyResult<R>,
    ) -> TopologyResult<R> {
        let mut guard = self.inner.write();
        let mut working = guard.clone();
        let result = f(&mut working)?;
        *guard = working;
        Ok(result)
    }

    /// Copy of the current project
    pub fn snapshot(&self) -> NetworkProject {
        self.inner.read().clone()
    }
}
