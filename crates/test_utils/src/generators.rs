//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating pool inputs, both inside and
//! outside the bounds the pool accepts.

use core_kernel::{Currency, Money, Percentage};
use domain_claims::Resolution;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for oracle rates between 0% and 100%
pub fn rate_strategy() -> impl Strategy<Value = Percentage> {
    (0u32..=100u32).prop_map(Percentage::new)
}

/// Strategy for oracle rates with hundredths of a point, 0.00% to 100.00%
pub fn fractional_rate_strategy() -> impl Strategy<Value = Percentage> {
    (0i64..=10_000i64).prop_filter_map("rate must be non-negative", |hundredths| {
        Percentage::from_decimal(Decimal::new(hundredths, 2)).ok()
    })
}

/// Strategy mixing whole and fractional oracle rates
pub fn any_rate_strategy() -> impl Strategy<Value = Percentage> {
    prop_oneof![rate_strategy(), fractional_rate_strategy()]
}

/// Strategy for valid positive USD amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..100_000_000i64
}

/// Strategy for USD amounts in minor units, zero and negatives included
pub fn amount_minor_strategy() -> impl Strategy<Value = i64> {
    -100_000i64..100_000_000i64
}

/// Strategy for positive USD amounts at full 4-decimal precision
pub fn precise_usd_strategy() -> impl Strategy<Value = Money> {
    (1i64..1_000_000_000i64).prop_map(|n| Money::new(Decimal::new(n, 4), Currency::USD))
}

/// Strategy for positive USD Money values, in cents or finer
pub fn positive_usd_strategy() -> impl Strategy<Value = Money> {
    prop_oneof![
        positive_amount_minor_strategy().prop_map(|minor| Money::from_minor(minor, Currency::USD)),
        precise_usd_strategy(),
    ]
}

/// Strategy for non-negative USD Money values
pub fn usd_strategy() -> impl Strategy<Value = Money> {
    prop_oneof![Just(Money::zero(Currency::USD)), positive_usd_strategy()]
}

/// Strategy for a single resolution step
pub fn resolution_strategy() -> impl Strategy<Value = Resolution> {
    prop_oneof![
        Just(Resolution::Approve),
        Just(Resolution::Reject),
        any::<bool>().prop_map(|farmer_favored| Resolution::Dispute { farmer_favored }),
    ]
}

/// Strategy for sequences of resolution steps applied to one claim
pub fn resolution_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<Resolution>> {
    prop::collection::vec(resolution_strategy(), 1..=max_len)
}
