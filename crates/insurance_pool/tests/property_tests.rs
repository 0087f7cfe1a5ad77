//! Property tests for the insurance pool
//!
//! Random inputs are checked against the purchase threshold, the claim
//! amount bounds and a reference model of the claim state machine.

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_claims::{ClaimStatus, Resolution};
use insurance_pool::ErrorKind;
use test_utils::*;

/// Expected claim state after a sequence of resolution steps
#[derive(Debug, Clone, Copy, PartialEq)]
struct ClaimModel {
    status: ClaimStatus,
    disputed: bool,
}

impl ClaimModel {
    fn new() -> Self {
        Self {
            status: ClaimStatus::Pending,
            disputed: false,
        }
    }

    /// Applies a step, returning false if the pool must refuse it
    fn step(&mut self, resolution: Resolution) -> bool {
        match (resolution, self.status) {
            (Resolution::Approve, ClaimStatus::Pending) => {
                self.status = ClaimStatus::Approved;
                true
            }
            (Resolution::Reject, ClaimStatus::Pending) => {
                self.status = ClaimStatus::Rejected;
                true
            }
            (Resolution::Dispute { farmer_favored }, ClaimStatus::Rejected) if !self.disputed => {
                self.disputed = true;
                if farmer_favored {
                    self.status = ClaimStatus::Approved;
                }
                true
            }
            _ => false,
        }
    }
}

/// Rounds an exact premium up to the pool's 4-decimal precision
fn round_up(exact: Decimal) -> Decimal {
    exact.round_dp_with_strategy(4, RoundingStrategy::AwayFromZero)
}

proptest! {
    #[test]
    fn purchase_succeeds_iff_premium_covered(
        rate in any_rate_strategy(),
        coverage in positive_usd_strategy(),
        supplied in usd_strategy(),
    ) {
        let mut t = TestPoolBuilder::new().with_rate(rate).build();
        let farmer = t.farmer();
        let exact = coverage.amount() * rate.points() / dec!(100);

        let result = t.pool.purchase_policy(
            farmer,
            coverage,
            TemporalFixtures::season_start(),
            TemporalFixtures::season_end(),
            supplied,
        );

        if supplied.amount() >= exact {
            prop_assert!(result.is_ok());
            prop_assert_eq!(t.pool.policy_count(), 1);
            prop_assert_eq!(t.pool.funds().premiums_from(farmer).amount(), round_up(exact));
        } else {
            prop_assert_eq!(result.map_err(|e| e.kind()).err(), Some(ErrorKind::InsufficientPremium));
            prop_assert_eq!(t.pool.policy_count(), 0);
            prop_assert!(t.pool.funds().premiums_from(farmer).is_zero());
        }
    }

    #[test]
    fn purchase_threshold_holds_at_finest_precision(
        rate in any_rate_strategy(),
        coverage in precise_usd_strategy(),
        offset in -2i64..=2i64,
    ) {
        let mut t = TestPoolBuilder::new().with_rate(rate).build();
        let farmer = t.farmer();
        let exact = coverage.amount() * rate.points() / dec!(100);
        let supplied_amount = (round_up(exact) + Decimal::new(offset, 4)).max(Decimal::ZERO);
        let supplied = Money::new(supplied_amount, Currency::USD);

        let result = t.pool.purchase_policy(
            farmer,
            coverage,
            TemporalFixtures::season_start(),
            TemporalFixtures::season_end(),
            supplied,
        );

        prop_assert_eq!(result.is_ok(), supplied_amount >= exact);
        if result.is_ok() {
            prop_assert!(t.pool.funds().premiums_from(farmer).amount() >= exact);
        }
    }

    #[test]
    fn claim_filed_iff_within_coverage(claim_minor in amount_minor_strategy()) {
        let mut t = TestPoolBuilder::new().build();
        let farmer = t.farmer();
        let policy_id = t.buy_standard_policy(farmer);
        let amount = Money::from_minor(claim_minor, Currency::USD);

        let result = t.pool.file_claim(farmer, policy_id, amount, "prop");

        let expected = if claim_minor <= 0 {
            Some(ErrorKind::InvalidClaimAmount)
        } else if amount.amount() > dec!(1.0) {
            Some(ErrorKind::ClaimExceedsCoverage)
        } else {
            None
        };
        prop_assert_eq!(result.map_err(|e| e.kind()).err(), expected);
        prop_assert_eq!(t.pool.claim_count(), usize::from(expected.is_none()));
    }

    #[test]
    fn resolution_follows_state_machine(steps in resolution_sequence_strategy(6)) {
        let mut t = TestPoolBuilder::new().build();
        let (_, claim_id) = t.pending_claim();
        let farmer = t.farmer();
        let mut model = ClaimModel::new();

        for step in steps {
            let before = PoolSnapshot::capture(&t.pool);
            let allowed = model.step(step);

            let result = match step {
                Resolution::Approve => t.pool.approve_claim(t.insurer, claim_id),
                Resolution::Reject => t.pool.reject_claim(t.insurer, claim_id),
                Resolution::Dispute { farmer_favored } => {
                    t.pool.resolve_dispute(t.auditor, claim_id, farmer_favored)
                }
            };

            if allowed {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result.map_err(|e| e.kind()).err(), Some(ErrorKind::ClaimNotPending));
                prop_assert_eq!(PoolSnapshot::capture(&t.pool), before);
            }

            let claim = t.pool.get_claim(claim_id).unwrap();
            prop_assert_eq!(claim.status(), model.status);
            prop_assert_eq!(claim.dispute().is_some(), model.disputed);
        }

        let paid = t.pool.funds().payouts_to(farmer).amount();
        let expected_paid = if model.status == ClaimStatus::Approved {
            MoneyFixtures::claim().amount()
        } else {
            Decimal::ZERO
        };
        prop_assert_eq!(paid, expected_paid);
    }
}
