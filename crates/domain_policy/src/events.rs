//! Domain events for the policy ledger
//!
//! Purchase events are the observable side effect indexers follow to learn
//! about new coverage.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{PartyId, PolicyId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyEvent {
    /// A farmer bought a policy
    PolicyPurchased {
        policy_id: PolicyId,
        farmer: PartyId,
        coverage_amount: Decimal,
        premium: Decimal,
        currency: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        timestamp: DateTime<Utc>,
    },

    /// A policy stopped accepting claims
    PolicyDeactivated {
        policy_id: PolicyId,
        deactivated_by: PartyId,
        timestamp: DateTime<Utc>,
    },
}

impl PolicyEvent {
    pub fn policy_id(&self) -> PolicyId {
        match self {
            PolicyEvent::PolicyPurchased { policy_id, .. } => *policy_id,
            PolicyEvent::PolicyDeactivated { policy_id, .. } => *policy_id,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            PolicyEvent::PolicyPurchased { timestamp, .. } => *timestamp,
            PolicyEvent::PolicyDeactivated { timestamp, .. } => *timestamp,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            PolicyEvent::PolicyPurchased { .. } => "PolicyPurchased",
            PolicyEvent::PolicyDeactivated { .. } => "PolicyDeactivated",
        }
    }
}
