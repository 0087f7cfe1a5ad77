//! Premium pricing
//!
//! The premium for a policy is `coverage × rate / 100`, where the rate is the
//! oracle's quote at the moment of purchase. The required amount is rounded
//! up to the 4th decimal place, so a farmer never pays less than the exact
//! product.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use core_kernel::{Money, MoneyError, Percentage};
use crate::error::PolicyError;

/// A premium priced against one oracle reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumQuote {
    coverage: Money,
    rate: Percentage,
    required: Money,
}

impl PremiumQuote {
    /// Prices `coverage` at `rate`
    ///
    /// # Errors
    ///
    /// `AmountOverflow` if the premium does not fit in a `Decimal`.
    pub fn price(coverage: Money, rate: Percentage) -> Result<Self, PolicyError> {
        let required = rate.apply(&coverage).map_err(|e| match e {
            MoneyError::Overflow(message) => PolicyError::AmountOverflow(message),
            other => PolicyError::InvalidCoverageAmount(other.to_string()),
        })?;
        Ok(Self {
            coverage,
            rate,
            required,
        })
    }

    pub fn coverage(&self) -> Money {
        self.coverage
    }

    pub fn rate(&self) -> Percentage {
        self.rate
    }

    /// The minimum the farmer must supply
    pub fn required(&self) -> Money {
        self.required
    }

    /// Checks that `supplied` is at least the required premium
    ///
    /// # Errors
    ///
    /// `CurrencyMismatch` if `supplied` is in another currency,
    /// `InsufficientPremium` if it falls short.
    pub fn check_supplied(&self, supplied: &Money) -> Result<(), PolicyError> {
        let ordering = supplied.checked_cmp(&self.required).map_err(|_| {
            PolicyError::CurrencyMismatch {
                expected: self.required.currency().to_string(),
                actual: supplied.currency().to_string(),
            }
        })?;

        if ordering == Ordering::Less {
            return Err(PolicyError::InsufficientPremium {
                required: self.required.to_string(),
                supplied: supplied.to_string(),
            });
        }
        Ok(())
    }
}

/// What the pool does with funds supplied above the required premium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExcessPremium {
    /// Collect only the required premium; the excess never leaves the farmer
    #[default]
    Refund,
    /// Collect everything supplied
    Retain,
}

impl ExcessPremium {
    /// Amount the pool collects for a purchase that passed `check_supplied`
    pub fn amount_to_collect(&self, quote: &PremiumQuote, supplied: Money) -> Money {
        match self {
            ExcessPremium::Refund => quote.required(),
            ExcessPremium::Retain => supplied,
        }
    }
}
