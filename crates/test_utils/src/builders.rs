//! Test Data Builders
//!
//! Provides a builder for a pool with the insurer, farmers and auditor
//! already assigned, so tests only spell out what they exercise.

use core_kernel::{ClaimId, Money, PartyId, Percentage, PolicyId};
use domain_roles::Role;
use insurance_pool::{FixedRateOracle, InsurancePool, PoolConfig, PoolTreasury};

use crate::fixtures::{IdFixtures, MoneyFixtures, RateFixtures, TemporalFixtures};

/// Pool wired to the in-memory adapters
pub type MemoryPool = InsurancePool<FixedRateOracle, PoolTreasury>;

/// A pool together with the identities set up for it
pub struct TestPool {
    pub pool: MemoryPool,
    pub insurer: PartyId,
    pub auditor: PartyId,
    pub farmers: Vec<PartyId>,
}

impl TestPool {
    /// The first farmer
    pub fn farmer(&self) -> PartyId {
        self.farmers[0]
    }

    /// Buys the standard policy for `farmer`
    pub fn buy_standard_policy(&mut self, farmer: PartyId) -> PolicyId {
        self.pool
            .purchase_policy(
                farmer,
                MoneyFixtures::coverage(),
                TemporalFixtures::season_start(),
                TemporalFixtures::season_end(),
                MoneyFixtures::premium(),
            )
            .expect("standard purchase should succeed")
    }

    /// Files the standard claim against `policy_id`
    pub fn file_standard_claim(&mut self, farmer: PartyId, policy_id: PolicyId) -> ClaimId {
        self.pool
            .file_claim(farmer, policy_id, MoneyFixtures::claim(), "Drought damage")
            .expect("standard claim should succeed")
    }

    /// Buys a standard policy for the first farmer and files a standard claim
    pub fn pending_claim(&mut self) -> (PolicyId, ClaimId) {
        let farmer = self.farmer();
        let policy_id = self.buy_standard_policy(farmer);
        let claim_id = self.file_standard_claim(farmer, policy_id);
        (policy_id, claim_id)
    }
}

/// Builder for [`TestPool`]
pub struct TestPoolBuilder {
    rate: Percentage,
    capital: Money,
    farmer_count: usize,
    config: PoolConfig,
    keep_setup_events: bool,
}

impl Default for TestPoolBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPoolBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            rate: RateFixtures::standard(),
            capital: MoneyFixtures::capital(),
            farmer_count: 1,
            config: PoolConfig::default(),
            keep_setup_events: false,
        }
    }

    pub fn with_rate(mut self, rate: Percentage) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_capital(mut self, capital: Money) -> Self {
        self.capital = capital;
        self
    }

    pub fn with_farmers(mut self, count: usize) -> Self {
        self.farmer_count = count;
        self
    }

    pub fn with_config(mut self, config: PoolConfig) -> Self {
        self.config = config;
        self
    }

    /// Leaves the role assignment events in the outbox
    pub fn keep_setup_events(mut self) -> Self {
        self.keep_setup_events = true;
        self
    }

    /// Builds the pool
    pub fn build(self) -> TestPool {
        let insurer = IdFixtures::party_id();
        let auditor = IdFixtures::party_id();
        let farmers: Vec<PartyId> = (0..self.farmer_count.max(1))
            .map(|_| IdFixtures::party_id())
            .collect();

        let mut pool = InsurancePool::new(
            insurer,
            FixedRateOracle::new(self.rate),
            PoolTreasury::with_capital(self.capital),
            self.config,
        );

        pool.assign_role(insurer, auditor, Role::Auditor)
            .expect("insurer can assign auditor");
        for farmer in &farmers {
            pool.assign_role(insurer, *farmer, Role::Farmer)
                .expect("insurer can assign farmer");
        }
        if !self.keep_setup_events {
            pool.take_events();
        }

        TestPool {
            pool,
            insurer,
            auditor,
            farmers,
        }
    }
}
