//! Domain events emitted by the role registry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::PartyId;
use crate::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleEvent {
    /// A role was assigned (or reassigned) to a participant
    RoleAssigned {
        party_id: PartyId,
        previous: Role,
        role: Role,
        assigned_by: PartyId,
        timestamp: DateTime<Utc>,
    },
}

impl RoleEvent {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            RoleEvent::RoleAssigned { timestamp, .. } => *timestamp,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            RoleEvent::RoleAssigned { .. } => "RoleAssigned",
        }
    }
}
