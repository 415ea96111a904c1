//! Strongly-typed ID wrappers
//!
//! Ids are assigned by the store when a record is created. They are UUIDs on
//! the wire and shown to users in a short form (`txn-1a2b3c4d`).
//!
//! A remote API backing the HTTP store must therefore issue UUID strings;
//! integer or other opaque ids fail to decode and surface as an API error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the hex fragment used in the short display form
const SHORT_LEN: usize = 8;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse a full UUID, with or without the display prefix
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// Whether `identifier` names this id
            ///
            /// Accepts the full UUID or any unambiguous-looking hex prefix of
            /// at least eight characters, optionally carrying the display
            /// prefix (so the short form printed in listings works).
            pub fn matches(&self, identifier: &str) -> bool {
                let identifier = identifier.trim();
                let fragment = identifier
                    .strip_prefix($display_prefix)
                    .unwrap_or(identifier)
                    .to_ascii_lowercase();
                if fragment.len() < SHORT_LEN {
                    return false;
                }
                let full = self.0.to_string();
                full == fragment || full.starts_with(&fragment)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..SHORT_LEN])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(InvestmentId, "inv-");
