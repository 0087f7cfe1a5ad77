//! Money and percentage types with precise decimal arithmetic
//!
//! Coverage amounts, premiums, and payouts are all `Money`. The oracle's
//! premium rate is a `Percentage` expressed in points (10 means 10%).

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Currencies the pool can be denominated in (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    INR,
    BRL,
    KES,
}

impl Currency {
    /// Returns the number of decimal places of the minor unit
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::USD | Currency::EUR | Currency::INR | Currency::BRL | Currency::KES => 2,
        }
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::INR => "₹",
            Currency::BRL => "R$",
            Currency::KES => "KSh",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::INR => "INR",
            Currency::BRL => "BRL",
            Currency::KES => "KES",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Overflow during calculation: {0}")]
    Overflow(String),
}

/// A monetary amount with associated currency
///
/// Amounts are held at 4 decimal places so that a premium computed from a
/// whole-number percentage of any 2-decimal coverage is exact. Arithmetic
/// that would leave the `Decimal` range is reported as `MoneyError::Overflow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates Money from an integer amount in minor units (e.g., cents)
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        Self::new(Decimal::new(minor_units, currency.decimal_places()), currency)
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let sum = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| MoneyError::Overflow(format!("{} + {}", self, other)))?;
        Ok(Self::new(sum, self.currency))
    }

    /// Checked subtraction that returns an error on currency mismatch
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let difference = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| MoneyError::Overflow(format!("{} - {}", self, other)))?;
        Ok(Self::new(difference, self.currency))
    }

    /// Compares two amounts of the same currency
    pub fn checked_cmp(&self, other: &Money) -> Result<std::cmp::Ordering, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency.symbol(), self.amount.normalize())
    }
}

/// A percentage quoted in points, as published by the premium oracle
///
/// `Percentage::new(10)` is ten percent. Negative values are rejected;
/// values above 100 are accepted since the pool does not bound the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage {
    points: Decimal,
}

impl Percentage {
    /// Creates a percentage from whole points
    pub fn new(points: u32) -> Self {
        Self {
            points: Decimal::from(points),
        }
    }

    /// Creates a percentage from fractional points, rejecting negatives
    pub fn from_decimal(points: Decimal) -> Result<Self, MoneyError> {
        if points.is_sign_negative() && !points.is_zero() {
            return Err(MoneyError::InvalidAmount(format!(
                "percentage cannot be negative: {}",
                points
            )));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> Decimal {
        self.points
    }

    /// Returns the rate as a fraction (e.g., 0.1 for 10%)
    pub fn as_fraction(&self) -> Decimal {
        self.points / dec!(100)
    }

    /// Computes `money * points / 100`, rounded up to the 4th decimal place
    ///
    /// Rounding away from zero means a charge computed this way is never
    /// smaller than the exact product.
    pub fn apply(&self, money: &Money) -> Result<Money, MoneyError> {
        let exact = money
            .amount()
            .checked_mul(self.as_fraction())
            .ok_or_else(|| MoneyError::Overflow(format!("{} of {}", self, money)))?;
        Ok(Money::new(
            exact.round_dp_with_strategy(4, RoundingStrategy::AwayFromZero),
            money.currency(),
        ))
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.points.normalize())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn zero_rate_never_charges(minor in 1i64..1_000_000_000i64) {
            let coverage = Money::from_minor(minor, Currency::USD);
            prop_assert!(Percentage::new(0).apply(&coverage).unwrap().is_zero());
        }

        #[test]
        fn full_rate_charges_the_coverage(minor in 1i64..1_000_000_000i64) {
            let coverage = Money::from_minor(minor, Currency::USD);
            prop_assert_eq!(Percentage::new(100).apply(&coverage).unwrap(), coverage);
        }

        #[test]
        fn premium_never_exceeds_coverage_below_full_rate(
            minor in 1i64..1_000_000_000i64,
            points in 0u32..=100u32
        ) {
            let coverage = Money::from_minor(minor, Currency::USD);
            let premium = Percentage::new(points).apply(&coverage).unwrap();
            prop_assert!(premium.amount() <= coverage.amount());
        }

        #[test]
        fn premium_is_exact_product_rounded_up(
            ten_thousandths in 1i64..1_000_000_000i64,
            hundredths in 0i64..=10_000i64
        ) {
            let coverage = Money::new(Decimal::new(ten_thousandths, 4), Currency::USD);
            let rate = Percentage::from_decimal(Decimal::new(hundredths, 2)).unwrap();
            let exact = coverage.amount() * rate.points() / dec!(100);

            let premium = rate.apply(&coverage).unwrap().amount();
            prop_assert!(premium >= exact);
            prop_assert!(premium - exact < dec!(0.0001));
        }
    }
}
