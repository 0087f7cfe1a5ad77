//! Pool errors
//!
//! Every failing pool operation returns a `PoolError` and leaves the pool
//! unchanged. `PoolError::kind` collapses the per-domain errors into the
//! small set of kinds callers branch on.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use core_kernel::PortError;
use domain_claims::ClaimError;
use domain_policy::PolicyError;
use domain_roles::RoleError;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error(transparent)]
    Role(#[from] RoleError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    /// The premium oracle could not supply a rate
    #[error("Premium oracle error: {0}")]
    Oracle(#[source] PortError),

    /// The funds collaborator refused a transfer
    #[error("Funds transfer failed: {0}")]
    Funds(#[source] PortError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

/// Error kinds reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Unauthorized,
    InvalidCoverageAmount,
    InvalidClaimAmount,
    InsufficientPremium,
    ClaimExceedsCoverage,
    ClaimNotPending,
    NotFound,
    InvalidPolicyPeriod,
    PolicyInactive,
    CurrencyMismatch,
    AmountOverflow,
    Oracle,
    Funds,
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl PoolError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PoolError::Role(RoleError::Unauthorized { .. }) => ErrorKind::Unauthorized,
            PoolError::Policy(err) => match err {
                PolicyError::InvalidCoverageAmount(_) => ErrorKind::InvalidCoverageAmount,
                PolicyError::InvalidPolicyPeriod { .. } => ErrorKind::InvalidPolicyPeriod,
                PolicyError::InsufficientPremium { .. } => ErrorKind::InsufficientPremium,
                PolicyError::CurrencyMismatch { .. } => ErrorKind::CurrencyMismatch,
                PolicyError::PolicyNotFound(_) => ErrorKind::NotFound,
                PolicyError::PolicyInactive(_) => ErrorKind::PolicyInactive,
                PolicyError::AmountOverflow(_) => ErrorKind::AmountOverflow,
            },
            PoolError::Claim(err) => match err {
                ClaimError::ClaimNotFound(_) => ErrorKind::NotFound,
                ClaimError::PolicyInactive(_) => ErrorKind::PolicyInactive,
                ClaimError::NotPolicyHolder { .. } => ErrorKind::Unauthorized,
                ClaimError::InvalidClaimAmount(_) => ErrorKind::InvalidClaimAmount,
                ClaimError::ClaimExceedsCoverage { .. } => ErrorKind::ClaimExceedsCoverage,
                ClaimError::CurrencyMismatch { .. } => ErrorKind::CurrencyMismatch,
                ClaimError::ClaimNotPending { .. }
                | ClaimError::DisputeAlreadyResolved(_)
                | ClaimError::InvalidStatusTransition { .. } => ErrorKind::ClaimNotPending,
            },
            PoolError::Oracle(_) => ErrorKind::Oracle,
            PoolError::Funds(PortError::Overflow { .. }) => ErrorKind::AmountOverflow,
            PoolError::Funds(_) => ErrorKind::Funds,
            PoolError::Configuration(_) => ErrorKind::Configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{ClaimId, PartyId, PolicyId};
    use domain_claims::ClaimStatus;
    use domain_roles::Role;

    #[test]
    fn test_not_holder_is_unauthorized() {
        let err = PoolError::from(ClaimError::NotPolicyHolder {
            claimant: PartyId::new(),
            policy_id: PolicyId::FIRST,
        });
        assert_eq!(err.kind(), ErrorKind::Unauthorized);

        let err = PoolError::from(RoleError::Unauthorized {
            caller: PartyId::new(),
            required: Role::Farmer,
            actual: Role::Unset,
        });
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_resolution_refusals_share_kind() {
        let id = ClaimId::FIRST;
        let errors = [
            ClaimError::ClaimNotPending {
                claim_id: id,
                required: ClaimStatus::Pending,
                actual: ClaimStatus::Approved,
            },
            ClaimError::DisputeAlreadyResolved(id),
        ];
        for err in errors {
            assert_eq!(PoolError::from(err).kind(), ErrorKind::ClaimNotPending);
        }
    }

    #[test]
    fn test_not_found_for_both_ledgers() {
        assert_eq!(
            PoolError::from(PolicyError::PolicyNotFound(PolicyId::new(4))).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            PoolError::from(ClaimError::ClaimNotFound(ClaimId::new(4))).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_overflow_kind_from_both_layers() {
        let err = PoolError::from(PolicyError::AmountOverflow("200% of $ 1".to_string()));
        assert_eq!(err.kind(), ErrorKind::AmountOverflow);

        let err = PoolError::Funds(PortError::overflow("$ 1 + $ 2"));
        assert_eq!(err.kind(), ErrorKind::AmountOverflow);

        let err = PoolError::Funds(PortError::conflict("pool balance too low"));
        assert_eq!(err.kind(), ErrorKind::Funds);
    }

    #[test]
    fn test_message_passes_through() {
        let err = PoolError::from(PolicyError::InvalidCoverageAmount("$ 0".to_string()));
        assert_eq!(err.to_string(), "Invalid coverage amount: $ 0");
        assert_eq!(ErrorKind::InsufficientPremium.to_string(), "InsufficientPremium");
    }
}
