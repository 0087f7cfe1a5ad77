//! Custom Test Assertions
//!
//! Provides assertion helpers for pool results that give more meaningful
//! failure messages than standard assertions.

use std::fmt::Debug;

use core_kernel::{ClaimId, Money};
use domain_claims::ClaimStatus;
use insurance_pool::{ErrorKind, PoolError};

use crate::builders::MemoryPool;

/// Asserts that `result` failed with `expected` kind
///
/// # Panics
///
/// Panics if the result is `Ok` or carries a different kind
pub fn assert_error_kind<T: Debug>(result: Result<T, PoolError>, expected: ErrorKind) {
    match result {
        Ok(value) => panic!("Expected {} error, got Ok({:?})", expected, value),
        Err(err) => assert_eq!(
            err.kind(),
            expected,
            "Expected {} error, got {}: {}",
            expected,
            err.kind(),
            err
        ),
    }
}

/// Asserts two Money values carry the same currency and amount
pub fn assert_money_eq(actual: Money, expected: Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "Amount mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts the status of a claim held by the pool
pub fn assert_claim_status(pool: &MemoryPool, claim_id: ClaimId, expected: ClaimStatus) {
    let claim = pool
        .get_claim(claim_id)
        .unwrap_or_else(|e| panic!("Claim {} missing: {}", claim_id, e));
    assert_eq!(
        claim.status(),
        expected,
        "Claim {} status: actual={}, expected={}",
        claim_id,
        claim.status(),
        expected
    );
}

/// Observable pool state, captured to check that a failed call changed nothing
#[derive(Debug, Clone, PartialEq)]
pub struct PoolSnapshot {
    pub policy_count: usize,
    pub claim_count: usize,
    pub active_policies: Vec<bool>,
    pub claim_statuses: Vec<ClaimStatus>,
    pub balance: Money,
    pub total_premiums: Money,
    pub total_payouts: Money,
}

impl PoolSnapshot {
    pub fn capture(pool: &MemoryPool) -> Self {
        let claim_statuses = (1..=pool.claim_count() as u64)
            .filter_map(|n| pool.get_claim(ClaimId::new(n)).ok())
            .map(|c| c.status())
            .collect();

        Self {
            policy_count: pool.policy_count(),
            claim_count: pool.claim_count(),
            active_policies: pool.policies().map(|p| p.is_active()).collect(),
            claim_statuses,
            balance: pool.funds().balance(),
            total_premiums: pool.funds().total_premiums(),
            total_payouts: pool.funds().total_payouts(),
        }
    }
}

/// Asserts the pool matches a snapshot taken before a failing call
pub fn assert_pool_unchanged(before: &PoolSnapshot, pool: &MemoryPool) {
    assert_eq!(&PoolSnapshot::capture(pool), before, "Pool state changed");
}
