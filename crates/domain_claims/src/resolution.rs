//! Claim resolution
//!
//! Resolving a claim is planned against the current ledger state first and
//! applied afterwards. Between the two steps the caller performs any payout
//! the plan calls for, so a failed transfer leaves the claim untouched.

use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, Money, PartyId};
use crate::claim::ClaimStatus;

/// A resolution step requested against a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Insurer accepts a pending claim
    Approve,
    /// Insurer refuses a pending claim
    Reject,
    /// Auditor rules on a rejected claim
    Dispute { farmer_favored: bool },
}

impl Resolution {
    /// Status the claim must be in for this step to apply
    pub fn required_status(&self) -> ClaimStatus {
        match self {
            Resolution::Approve | Resolution::Reject => ClaimStatus::Pending,
            Resolution::Dispute { .. } => ClaimStatus::Rejected,
        }
    }

    pub fn target_status(&self) -> ClaimStatus {
        match self {
            Resolution::Approve => ClaimStatus::Approved,
            Resolution::Reject => ClaimStatus::Rejected,
            Resolution::Dispute { farmer_favored: true } => ClaimStatus::Approved,
            Resolution::Dispute { farmer_favored: false } => ClaimStatus::Rejected,
        }
    }

    /// Returns true if applying this step pays the claim amount out
    pub fn pays_out(&self) -> bool {
        self.target_status() == ClaimStatus::Approved
    }
}

/// Funds owed to a farmer by a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub to: PartyId,
    pub amount: Money,
}

/// A validated resolution step, ready to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionPlan {
    pub(crate) claim_id: ClaimId,
    pub(crate) resolver: PartyId,
    pub(crate) resolution: Resolution,
    pub(crate) from: ClaimStatus,
    pub(crate) payout: Option<Payout>,
}

impl ResolutionPlan {
    pub fn claim_id(&self) -> ClaimId {
        self.claim_id
    }

    pub fn resolver(&self) -> PartyId {
        self.resolver
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn from_status(&self) -> ClaimStatus {
        self.from
    }

    pub fn to_status(&self) -> ClaimStatus {
        self.resolution.target_status()
    }

    /// Transfer that must succeed before the plan is applied
    pub fn payout(&self) -> Option<Payout> {
        self.payout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_states() {
        assert_eq!(Resolution::Approve.required_status(), ClaimStatus::Pending);
        assert_eq!(Resolution::Reject.required_status(), ClaimStatus::Pending);
        assert_eq!(
            Resolution::Dispute { farmer_favored: false }.required_status(),
            ClaimStatus::Rejected
        );
    }

    #[test]
    fn test_only_approvals_pay_out() {
        assert!(Resolution::Approve.pays_out());
        assert!(Resolution::Dispute { farmer_favored: true }.pays_out());
        assert!(!Resolution::Reject.pays_out());
        assert!(!Resolution::Dispute { farmer_favored: false }.pays_out());
    }
}
