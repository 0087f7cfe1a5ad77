//! Claim aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ClaimId, Money, PartyId, PolicyId};
use crate::error::ClaimError;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Filed, awaiting the insurer's decision
    Pending,
    /// Paid out; terminal
    Approved,
    /// Refused by the insurer, or confirmed refused by an auditor
    Rejected,
}

impl ClaimStatus {
    /// Checks the status graph; does not consider dispute history
    pub fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (self, target),
            (Pending, Approved) |
            (Pending, Rejected) |
            (Rejected, Approved) |
            (Rejected, Rejected)
        )
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        };
        f.write_str(name)
    }
}

/// An auditor's ruling on a rejected claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeRuling {
    pub auditor: PartyId,
    pub farmer_favored: bool,
    pub ruled_at: DateTime<Utc>,
}

/// A farmer's request for payout against one policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    id: ClaimId,
    policy_id: PolicyId,
    farmer: PartyId,
    claim_amount: Money,
    reason: String,
    status: ClaimStatus,
    /// Insurer who approved or rejected the claim
    decided_by: Option<PartyId>,
    dispute: Option<DisputeRuling>,
    filed_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Claim {
    pub(crate) fn new(
        id: ClaimId,
        policy_id: PolicyId,
        farmer: PartyId,
        claim_amount: Money,
        reason: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            policy_id,
            farmer,
            claim_amount,
            reason,
            status: ClaimStatus::Pending,
            decided_by: None,
            dispute: None,
            filed_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> ClaimId {
        self.id
    }

    pub fn policy_id(&self) -> PolicyId {
        self.policy_id
    }

    pub fn farmer(&self) -> PartyId {
        self.farmer
    }

    pub fn claim_amount(&self) -> Money {
        self.claim_amount
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn status(&self) -> ClaimStatus {
        self.status
    }

    pub fn decided_by(&self) -> Option<PartyId> {
        self.decided_by
    }

    pub fn dispute(&self) -> Option<&DisputeRuling> {
        self.dispute.as_ref()
    }

    /// Returns true once no resolution step can change the claim
    pub fn is_final(&self) -> bool {
        match self.status {
            ClaimStatus::Pending => false,
            ClaimStatus::Approved => true,
            ClaimStatus::Rejected => self.dispute.is_some(),
        }
    }

    pub fn filed_at(&self) -> DateTime<Utc> {
        self.filed_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub(crate) fn update_status(&mut self, status: ClaimStatus) -> Result<(), ClaimError> {
        if !self.status.can_transition_to(status) {
            return Err(ClaimError::InvalidStatusTransition {
                from: self.status,
                to: status,
            });
        }
        self.status = status;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub(crate) fn record_decision(&mut self, insurer: PartyId) {
        self.decided_by = Some(insurer);
    }

    pub(crate) fn record_dispute(&mut self, ruling: DisputeRuling) {
        self.dispute = Some(ruling);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_graph() {
        use ClaimStatus::*;
        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(Rejected.can_transition_to(Approved));
        assert!(Rejected.can_transition_to(Rejected));

        assert!(!Pending.can_transition_to(Pending));
        assert!(!Approved.can_transition_to(Approved));
        assert!(!Approved.can_transition_to(Rejected));
        assert!(!Approved.can_transition_to(Pending));
        assert!(!Rejected.can_transition_to(Pending));
    }
}
