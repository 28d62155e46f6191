// Copyright (c) 2025 - Cowboy AI, Inc.
//! Container Image and Restart Policy Enumerations

use std::fmt;
use std::str::FromStr;

use crate::errors::TopologyError;

/// Container image selection
///
/// Every variant except [`OsImage::Custom`] maps to a fixed image reference.
/// `Custom` defers to the free-text image stored on the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OsImage {
    Ubuntu,
    #[default]
    Alpine,
    Debian,
    CentOs,
    Nginx,
    Redis,
    Postgres,
    MySql,
    MongoDb,
    Custom,
}

impl OsImage {
    pub const ALL: [OsImage; 10] = [
        Self::Ubuntu,
        Self::Alpine,
        Self::Debian,
        Self::CentOs,
        Self::Nginx,
        Self::Redis,
        Self::Postgres,
        Self::MySql,
        Self::MongoDb,
        Self::Custom,
    ];

    /// Canonical token, which is also the image reference for non-custom variants
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ubuntu => "ubuntu:22.04",
            Self::Alpine => "alpine:latest",
            Self::Debian => "debian:11",
            Self::CentOs => "centos:8",
            Self::Nginx => "nginx:latest",
            Self::Redis => "redis:latest",
            Self::Postgres => "postgres:14",
            Self::MySql => "mysql:8",
            Self::MongoDb => "mongodb:5",
            Self::Custom => "custom",
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl fmt::Display for OsImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsImage {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|image| image.as_str() == s)
            .ok_or_else(|| TopologyError::unknown_enum("os image", s))
    }
}

/// Container restart policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RestartPolicy {
    No,
    Always,
    #[default]
    UnlessStopped,
    OnFailure,
}

impl RestartPolicy {
    pub const ALL: [RestartPolicy; 4] = [
        Self::No,
        Self::Always,
        Self::UnlessStopped,
        Self::OnFailure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::No => "no",
            Self::Always => "always",
            Self::UnlessStopped => "unless-stopped",
            Self::OnFailure => "on-failure",
        }
    }
}

impl fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RestartPolicy {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| TopologyError::unknown_enum("restart policy", s))
    }
}
