//! Domain events for the claim ledger

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, PartyId, PolicyId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimEvent {
    ClaimFiled {
        claim_id: ClaimId,
        policy_id: PolicyId,
        farmer: PartyId,
        claim_amount: Decimal,
        reason: String,
        timestamp: DateTime<Utc>,
    },

    /// Insurer approved a pending claim; the amount was paid to the farmer
    ClaimApproved {
        claim_id: ClaimId,
        approved_by: PartyId,
        payout_amount: Decimal,
        timestamp: DateTime<Utc>,
    },

    ClaimRejected {
        claim_id: ClaimId,
        rejected_by: PartyId,
        timestamp: DateTime<Utc>,
    },

    /// Auditor ruled on a rejected claim
    DisputeResolved {
        claim_id: ClaimId,
        auditor: PartyId,
        farmer_favored: bool,
        payout_amount: Option<Decimal>,
        timestamp: DateTime<Utc>,
    },
}

impl ClaimEvent {
    pub fn claim_id(&self) -> ClaimId {
        match self {
            ClaimEvent::ClaimFiled { claim_id, .. } => *claim_id,
            ClaimEvent::ClaimApproved { claim_id, .. } => *claim_id,
            ClaimEvent::ClaimRejected { claim_id, .. } => *claim_id,
            ClaimEvent::DisputeResolved { claim_id, .. } => *claim_id,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            ClaimEvent::ClaimFiled { timestamp, .. } => *timestamp,
            ClaimEvent::ClaimApproved { timestamp, .. } => *timestamp,
            ClaimEvent::ClaimRejected { timestamp, .. } => *timestamp,
            ClaimEvent::DisputeResolved { timestamp, .. } => *timestamp,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            ClaimEvent::ClaimFiled { .. } => "ClaimFiled",
            ClaimEvent::ClaimApproved { .. } => "ClaimApproved",
            ClaimEvent::ClaimRejected { .. } => "ClaimRejected",
            ClaimEvent::DisputeResolved { .. } => "DisputeResolved",
        }
    }
}
