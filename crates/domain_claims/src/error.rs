//! Claims domain errors

use thiserror::Error;

use core_kernel::{ClaimId, PartyId, PolicyId};
use crate::claim::ClaimStatus;

/// Errors that can occur in the claims domain
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(ClaimId),

    #[error("Policy is not active: {0}")]
    PolicyInactive(PolicyId),

    #[error("{claimant} is not the holder of policy {policy_id}")]
    NotPolicyHolder {
        claimant: PartyId,
        policy_id: PolicyId,
    },

    /// Claim amount is zero or negative
    #[error("Invalid claim amount: {0}")]
    InvalidClaimAmount(String),

    #[error("Claim amount {claim_amount} exceeds coverage {coverage}")]
    ClaimExceedsCoverage {
        claim_amount: String,
        coverage: String,
    },

    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        expected: String,
        actual: String,
    },

    /// The claim is not in the state the resolution step requires
    #[error("Claim {claim_id} is not pending: requires {required}, found {actual}")]
    ClaimNotPending {
        claim_id: ClaimId,
        required: ClaimStatus,
        actual: ClaimStatus,
    },

    /// The rejection was already ruled on by an auditor
    #[error("Claim {0} is not pending: dispute already resolved")]
    DisputeAlreadyResolved(ClaimId),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition {
        from: ClaimStatus,
        to: ClaimStatus,
    },
}
