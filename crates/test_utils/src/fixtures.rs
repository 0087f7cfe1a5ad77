//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the pool. The standard values follow
//! one season: 10% rate, 1.0 coverage bought for 0.1, a 0.5 claim.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::{Currency, Money, PartyId, Percentage};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    /// Standard coverage amount
    pub fn coverage() -> Money {
        Self::usd(dec!(1.0))
    }

    /// Premium due on the standard coverage at the standard rate
    pub fn premium() -> Money {
        Self::usd(dec!(0.1))
    }

    /// Standard claim amount, half the coverage
    pub fn claim() -> Money {
        Self::usd(dec!(0.5))
    }

    /// Capital seeded into the treasury so payouts can exceed premiums
    pub fn capital() -> Money {
        Self::usd(dec!(10))
    }

    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Creates a EUR amount for currency mismatch tests
    pub fn eur(amount: Decimal) -> Money {
        Money::new(amount, Currency::EUR)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard season start (Jun 1, 2024)
    pub fn season_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    /// Standard season end, 30 days after the start
    pub fn season_end() -> DateTime<Utc> {
        Self::season_start() + Duration::days(30)
    }
}

/// Fixture for oracle rates
pub struct RateFixtures;

impl RateFixtures {
    pub fn standard() -> Percentage {
        Percentage::new(10)
    }
}

/// Fixture for party identities
pub struct IdFixtures;

impl IdFixtures {
    /// Random party id
    pub fn party_id() -> PartyId {
        PartyId::new()
    }

    /// Deterministic party id, stable across runs
    pub fn party(n: u128) -> PartyId {
        PartyId::from_uuid(Uuid::from_u128(n))
    }
}
