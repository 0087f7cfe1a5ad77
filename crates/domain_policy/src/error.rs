//! Policy domain errors

use thiserror::Error;

use core_kernel::PolicyId;

/// Errors that can occur in the policy domain
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// Coverage amount is zero or negative
    #[error("Invalid coverage amount: {0}")]
    InvalidCoverageAmount(String),

    /// Coverage window is empty or inverted
    #[error("Invalid policy period: start {start} must be before end {end}")]
    InvalidPolicyPeriod {
        start: String,
        end: String,
    },

    /// Supplied funds do not cover the oracle-priced premium
    #[error("Insufficient premium: required {required}, supplied {supplied}")]
    InsufficientPremium {
        required: String,
        supplied: String,
    },

    /// Amount is not denominated in the pool currency
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        expected: String,
        actual: String,
    },

    /// Premium arithmetic left the representable amount range
    #[error("Amount overflow: {0}")]
    AmountOverflow(String),

    #[error("Policy not found: {0}")]
    PolicyNotFound(PolicyId),

    #[error("Policy is not active: {0}")]
    PolicyInactive(PolicyId),
}
