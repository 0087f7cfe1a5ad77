//! Strongly-typed identifiers for domain entities
//!
//! Participants are identified by UUID newtypes. Policies and claims are
//! identified by their position in an append-only ledger, so their ids are
//! sequence numbers starting at 1; the two sequences are independent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

macro_rules! define_seq_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// The first identifier a ledger hands out
            pub const FIRST: Self = Self(1);

            pub fn new(value: u64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> u64 {
                self.0
            }

            /// Zero-based position in the owning ledger, None for id 0
            pub fn index(&self) -> Option<usize> {
                self.0.checked_sub(1).and_then(|i| usize::try_from(i).ok())
            }

            /// Identifier for the entry stored at a zero-based position
            pub fn from_index(index: usize) -> Self {
                Self(index as u64 + 1)
            }

            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(digits.parse()?))
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

// Participant identity (farmer, insurer, auditor)
define_id!(PartyId, "PTY");

// Ledger sequences
define_seq_id!(PolicyId, "POL");
define_seq_id!(ClaimId, "CLM");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_id_display() {
        let id = PartyId::new();
        assert!(id.to_string().starts_with("PTY-"));
    }

    #[test]
    fn test_party_id_parsing() {
        let original = PartyId::new_v7();
        let parsed: PartyId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_sequence_ids_start_at_one() {
        assert_eq!(PolicyId::FIRST.value(), 1);
        assert_eq!(ClaimId::FIRST.index(), Some(0));
        assert_eq!(PolicyId::from_index(0), PolicyId::FIRST);
        assert_eq!(ClaimId::new(0).index(), None);
    }

    #[test]
    fn test_sequence_id_display_and_parse() {
        let id = ClaimId::new(42);
        assert_eq!(id.to_string(), "CLM-42");
        assert_eq!("CLM-42".parse::<ClaimId>().unwrap(), id);
        assert_eq!("7".parse::<PolicyId>().unwrap(), PolicyId::new(7));
        assert!("POL-x".parse::<PolicyId>().is_err());
    }

    #[test]
    fn test_sequence_id_serializes_as_number() {
        let json = serde_json::to_string(&PolicyId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
