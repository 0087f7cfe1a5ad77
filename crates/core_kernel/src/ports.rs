//! Ports to the pool's external collaborators
//!
//! The pool consumes two collaborators it does not own:
//!
//! ```text
//!                 ┌──────────────────────┐
//!   rate ───────▶ │    InsurancePool     │ ───────▶ collect / payout
//! PremiumOracle   │ roles·policies·claims│          FundsPort
//!                 └──────────────────────┘
//! ```
//!
//! Both are called synchronously from inside a single pool operation. A port
//! failure aborts that operation before any ledger state is committed.

use std::fmt;
use thiserror::Error;

use crate::identifiers::PartyId;
use crate::money::{Money, MoneyError, Percentage};

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The operation conflicts with the collaborator's current state
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// The external system is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable {
        service: String,
    },

    /// A transfer would leave the representable amount range
    #[error("Amount overflow: {message}")]
    Overflow {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    pub fn conflict(message: impl fmt::Display) -> Self {
        PortError::Conflict {
            message: message.to_string(),
        }
    }

    pub fn unavailable(service: impl Into<String>) -> Self {
        PortError::ServiceUnavailable {
            service: service.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    pub fn overflow(message: impl Into<String>) -> Self {
        PortError::Overflow {
            message: message.into(),
        }
    }

    /// Returns true if retrying the same call later may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, PortError::ServiceUnavailable { .. })
    }
}

impl From<MoneyError> for PortError {
    fn from(err: MoneyError) -> Self {
        match err {
            MoneyError::Overflow(message) => PortError::overflow(message),
            MoneyError::CurrencyMismatch(..) => PortError::validation_field(err.to_string(), "currency"),
            MoneyError::InvalidAmount(_) => PortError::validation_field(err.to_string(), "amount"),
        }
    }
}

/// Marker trait for all domain ports
pub trait DomainPort: Send + Sync + 'static {}

/// Source of the premium rate charged at purchase time
///
/// The pool queries the oracle once per purchase and never caches the value.
pub trait PremiumOracle: DomainPort {
    /// Returns the rate currently published by the oracle
    fn current_premium_rate(&self) -> Result<Percentage, PortError>;
}

/// Atomic value-transfer primitive backing the pool
pub trait FundsPort: DomainPort {
    /// Moves `amount` from `from` into the pool
    fn collect(&mut self, from: PartyId, amount: Money) -> Result<(), PortError>;

    /// Moves `amount` out of the pool to `to`
    fn payout(&mut self, to: PartyId, amount: Money) -> Result<(), PortError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_transient() {
        assert!(PortError::unavailable("premium-oracle").is_transient());
        assert!(!PortError::conflict("pool balance too low").is_transient());
        assert!(!PortError::validation("amount must be positive").is_transient());
    }

    #[test]
    fn test_port_error_messages() {
        let error = PortError::validation_field("must be positive", "amount");
        assert_eq!(error.to_string(), "Validation error: must be positive");

        let error = PortError::unavailable("premium-oracle");
        assert!(error.to_string().contains("premium-oracle"));
    }

    #[test]
    fn test_money_errors_convert() {
        let error = PortError::from(MoneyError::Overflow("$ 1 + $ 2".to_string()));
        assert!(matches!(error, PortError::Overflow { .. }));
        assert!(!error.is_transient());

        let error = PortError::from(MoneyError::CurrencyMismatch("USD".to_string(), "EUR".to_string()));
        assert!(matches!(error, PortError::Validation { field: Some(ref f), .. } if f == "currency"));
    }
}
