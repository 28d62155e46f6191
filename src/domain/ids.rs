// Copyright (c) 2025 - Cowboy AI, Inc.
//! Identity Value Objects
//!
//! Identities are assigned once at creation (random UUID v4 text) and never
//! reused. Any non-empty string read from a project document is accepted, so
//! hand-written documents can use readable ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh identity
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identity of a [`NetworkDevice`](super::NetworkDevice)
    DeviceId
);

string_id!(
    /// Identity of a [`Connection`](super::Connection)
    ConnectionId
);

string_id!(
    /// Identity of a [`NetworkInterface`](super::NetworkInterface)
    InterfaceId
);
