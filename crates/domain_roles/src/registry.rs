//! Role registry
//!
//! Maps participant identities to roles. The identity that creates the
//! registry is seeded as `Insurer`; after that only an `Insurer` may change
//! anyone's role.

use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info};

use core_kernel::PartyId;
use crate::error::RoleError;
use crate::events::RoleEvent;
use crate::role::Role;

#[derive(Debug, Clone)]
pub struct RoleRegistry {
    roles: HashMap<PartyId, Role>,
    events: Vec<RoleEvent>,
}

impl RoleRegistry {
    /// Creates a registry with `deployer` holding the `Insurer` role
    pub fn new(deployer: PartyId) -> Self {
        let mut roles = HashMap::new();
        roles.insert(deployer, Role::Insurer);
        Self {
            roles,
            events: Vec::new(),
        }
    }

    /// Returns the role held by `party_id`, `Unset` if never assigned
    pub fn role_of(&self, party_id: PartyId) -> Role {
        self.roles.get(&party_id).copied().unwrap_or_default()
    }

    pub fn has_role(&self, party_id: PartyId, role: Role) -> bool {
        self.role_of(party_id) == role
    }

    /// Fails with `Unauthorized` unless `caller` holds exactly `required`
    pub fn require(&self, caller: PartyId, required: Role) -> Result<(), RoleError> {
        let actual = self.role_of(caller);
        if actual != required {
            debug!(%caller, %required, %actual, "role check failed");
            return Err(RoleError::Unauthorized {
                caller,
                required,
                actual,
            });
        }
        Ok(())
    }

    /// Sets the role of `party_id`
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` if `caller` is not an `Insurer`. The mapping is
    /// left untouched in that case.
    pub fn assign_role(
        &mut self,
        caller: PartyId,
        party_id: PartyId,
        role: Role,
    ) -> Result<(), RoleError> {
        self.require(caller, Role::Insurer)?;

        let previous = self.roles.insert(party_id, role).unwrap_or_default();
        info!(%party_id, %previous, %role, assigned_by = %caller, "role assigned");

        self.events.push(RoleEvent::RoleAssigned {
            party_id,
            previous,
            role,
            assigned_by: caller,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Returns accumulated domain events and clears them
    pub fn take_events(&mut self) -> Vec<RoleEvent> {
        std::mem::take(&mut self.events)
    }
}
