//! Policy aggregate
//!
//! # Invariants
//!
//! - Coverage amount is strictly positive
//! - The coverage window is non-empty (`start < end`)
//! - Identity, owner, coverage, and window never change after creation;
//!   only the active flag may go from true to false

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Money, PartyId, PolicyId, ValidPeriod};

/// A crop-coverage policy owned by one farmer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    id: PolicyId,
    farmer: PartyId,
    coverage_amount: Money,
    period: ValidPeriod,
    /// Premium actually collected into the pool
    premium_paid: Money,
    is_active: bool,
    purchased_at: DateTime<Utc>,
}

impl Policy {
    pub(crate) fn new(
        id: PolicyId,
        farmer: PartyId,
        coverage_amount: Money,
        period: ValidPeriod,
        premium_paid: Money,
    ) -> Self {
        Self {
            id,
            farmer,
            coverage_amount,
            period,
            premium_paid,
            is_active: true,
            purchased_at: Utc::now(),
        }
    }

    pub fn id(&self) -> PolicyId {
        self.id
    }

    /// Returns the owning farmer
    pub fn farmer(&self) -> PartyId {
        self.farmer
    }

    /// Upper bound for any single claim against this policy
    pub fn coverage_amount(&self) -> Money {
        self.coverage_amount
    }

    pub fn period(&self) -> ValidPeriod {
        self.period
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.period.start()
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.period.end()
    }

    pub fn premium_paid(&self) -> Money {
        self.premium_paid
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn purchased_at(&self) -> DateTime<Utc> {
        self.purchased_at
    }

    /// Returns true if `party_id` owns this policy
    pub fn is_owned_by(&self, party_id: PartyId) -> bool {
        self.farmer == party_id
    }

    pub(crate) fn deactivate(&mut self) {
        self.is_active = false;
    }
}
