//! Pool event outbox

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use domain_claims::ClaimEvent;
use domain_policy::PolicyEvent;
use domain_roles::RoleEvent;

/// Any domain event emitted by the pool, in emission order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event", rename_all = "snake_case")]
pub enum PoolEvent {
    Role(RoleEvent),
    Policy(PolicyEvent),
    Claim(ClaimEvent),
}

impl PoolEvent {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            PoolEvent::Role(e) => e.timestamp(),
            PoolEvent::Policy(e) => e.timestamp(),
            PoolEvent::Claim(e) => e.timestamp(),
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            PoolEvent::Role(e) => e.event_type(),
            PoolEvent::Policy(e) => e.event_type(),
            PoolEvent::Claim(e) => e.event_type(),
        }
    }
}

impl From<RoleEvent> for PoolEvent {
    fn from(event: RoleEvent) -> Self {
        PoolEvent::Role(event)
    }
}

impl From<PolicyEvent> for PoolEvent {
    fn from(event: PolicyEvent) -> Self {
        PoolEvent::Policy(event)
    }
}

impl From<ClaimEvent> for PoolEvent {
    fn from(event: ClaimEvent) -> Self {
        PoolEvent::Claim(event)
    }
}
