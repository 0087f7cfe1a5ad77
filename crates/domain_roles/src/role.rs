//! Participant roles

use serde::{Deserialize, Serialize};
use std::fmt;

/// The role a participant holds in the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// No role assigned; may only query
    #[default]
    Unset,
    /// Buys policies and files claims against them
    Farmer,
    /// Assigns roles and approves or rejects claims
    Insurer,
    /// Rules on disputed (rejected) claims
    Auditor,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Role::Unset => "Unset",
            Role::Farmer => "Farmer",
            Role::Insurer => "Insurer",
            Role::Auditor => "Auditor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
