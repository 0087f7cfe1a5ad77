//! Insurance pool aggregate

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use core_kernel::{ClaimId, FundsPort, Money, PartyId, PolicyId, PremiumOracle};
use domain_claims::{Claim, ClaimLedger, Resolution};
use domain_policy::{Policy, PolicyLedger};
use domain_roles::{Role, RoleRegistry};

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::events::PoolEvent;

/// Crop insurance pool
///
/// Single-writer aggregate over roles, policies and claims. Each mutating
/// operation checks the caller's role, validates against current state,
/// performs any funds transfer and only then commits. An error at any step
/// leaves every ledger, the outbox and the funds untouched.
pub struct InsurancePool<O, F> {
    config: PoolConfig,
    oracle: O,
    funds: F,
    roles: RoleRegistry,
    policies: PolicyLedger,
    claims: ClaimLedger,
    outbox: Vec<PoolEvent>,
}

impl<O: PremiumOracle, F: FundsPort> InsurancePool<O, F> {
    /// Creates a pool with `deployer` holding the `Insurer` role
    pub fn new(deployer: PartyId, oracle: O, funds: F, config: PoolConfig) -> Self {
        info!(%deployer, currency = %config.currency, "insurance pool created");
        Self {
            config,
            oracle,
            funds,
            roles: RoleRegistry::new(deployer),
            policies: PolicyLedger::new(config.currency, config.excess_premium),
            claims: ClaimLedger::new(),
            outbox: Vec::new(),
        }
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }

    pub fn funds(&self) -> &F {
        &self.funds
    }

    // ------------------------------------------------------------------------
    // Roles
    // ------------------------------------------------------------------------

    /// Sets the role of `party_id`; `caller` must be an `Insurer`
    #[instrument(skip(self))]
    pub fn assign_role(&mut self, caller: PartyId, party_id: PartyId, role: Role) -> Result<(), PoolError> {
        self.roles
            .assign_role(caller, party_id, role)
            .map_err(|e| rejected("assign_role", caller, e.into()))?;
        self.flush_events();
        Ok(())
    }

    pub fn role_of(&self, party_id: PartyId) -> Role {
        self.roles.role_of(party_id)
    }

    pub fn has_role(&self, party_id: PartyId, role: Role) -> bool {
        self.roles.has_role(party_id, role)
    }

    // ------------------------------------------------------------------------
    // Policies
    // ------------------------------------------------------------------------

    /// Buys a policy for `caller`, priced at the oracle's current rate
    ///
    /// # Arguments
    ///
    /// * `caller` - Farmer buying the policy; becomes its owner
    /// * `coverage_amount` - Maximum total of a single claim
    /// * `start_date`, `end_date` - Coverage window
    /// * `supplied` - Funds attached to the purchase
    ///
    /// # Errors
    ///
    /// `Unauthorized`, `Oracle`, `CurrencyMismatch`, `InvalidCoverageAmount`,
    /// `InvalidPolicyPeriod`, `AmountOverflow`, `InsufficientPremium` or `Funds`,
    /// in that order. A treasury overflow while collecting is `AmountOverflow`.
    #[instrument(skip(self))]
    pub fn purchase_policy(
        &mut self,
        caller: PartyId,
        coverage_amount: Money,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        supplied: Money,
    ) -> Result<PolicyId, PoolError> {
        self.try_purchase(caller, coverage_amount, start_date, end_date, supplied)
            .map_err(|e| rejected("purchase_policy", caller, e))
    }

    fn try_purchase(
        &mut self,
        caller: PartyId,
        coverage_amount: Money,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        supplied: Money,
    ) -> Result<PolicyId, PoolError> {
        self.roles.require(caller, Role::Farmer)?;

        let rate = self
            .oracle
            .current_premium_rate()
            .map_err(PoolError::Oracle)?;
        let order = self
            .policies
            .prepare_purchase(caller, coverage_amount, start_date, end_date, rate, supplied)?;

        let amount = order.amount_to_collect();
        if !amount.is_zero() {
            self.funds.collect(caller, amount).map_err(PoolError::Funds)?;
        }

        let policy_id = self.policies.commit_purchase(order);
        self.flush_events();
        Ok(policy_id)
    }

    /// Marks a policy inactive so it accepts no further claims
    #[instrument(skip(self))]
    pub fn deactivate_policy(&mut self, caller: PartyId, policy_id: PolicyId) -> Result<(), PoolError> {
        self.roles
            .require(caller, Role::Insurer)
            .map_err(PoolError::from)
            .and_then(|_| self.policies.deactivate(policy_id, caller).map_err(PoolError::from))
            .map_err(|e| rejected("deactivate_policy", caller, e))?;
        self.flush_events();
        Ok(())
    }

    pub fn get_policy(&self, policy_id: PolicyId) -> Result<&Policy, PoolError> {
        Ok(self.policies.get(policy_id)?)
    }

    pub fn policies(&self) -> impl Iterator<Item = &Policy> {
        self.policies.iter()
    }

    pub fn policy_count(&self) -> usize {
        self.policies.len()
    }

    // ------------------------------------------------------------------------
    // Claims
    // ------------------------------------------------------------------------

    /// Files a claim against one of the caller's own policies
    ///
    /// # Errors
    ///
    /// `Unauthorized` unless the caller is a `Farmer` who owns the policy,
    /// `NotFound`, `PolicyInactive`, `InvalidClaimAmount` or
    /// `ClaimExceedsCoverage`.
    #[instrument(skip(self, reason))]
    pub fn file_claim(
        &mut self,
        caller: PartyId,
        policy_id: PolicyId,
        claim_amount: Money,
        reason: impl Into<String>,
    ) -> Result<ClaimId, PoolError> {
        self.try_file_claim(caller, policy_id, claim_amount, reason.into())
            .map_err(|e| rejected("file_claim", caller, e))
    }

    fn try_file_claim(
        &mut self,
        caller: PartyId,
        policy_id: PolicyId,
        claim_amount: Money,
        reason: String,
    ) -> Result<ClaimId, PoolError> {
        self.roles.require(caller, Role::Farmer)?;
        let policy = self.policies.get(policy_id)?;
        let claim_id = self.claims.file(policy, caller, claim_amount, reason)?;
        self.flush_events();
        Ok(claim_id)
    }

    /// Approves a pending claim and pays the claim amount to its farmer
    #[instrument(skip(self))]
    pub fn approve_claim(&mut self, caller: PartyId, claim_id: ClaimId) -> Result<(), PoolError> {
        self.resolve(caller, claim_id, Role::Insurer, Resolution::Approve)
            .map_err(|e| rejected("approve_claim", caller, e))
    }

    /// Rejects a pending claim; no funds move
    #[instrument(skip(self))]
    pub fn reject_claim(&mut self, caller: PartyId, claim_id: ClaimId) -> Result<(), PoolError> {
        self.resolve(caller, claim_id, Role::Insurer, Resolution::Reject)
            .map_err(|e| rejected("reject_claim", caller, e))
    }

    /// Rules on a rejected claim
    ///
    /// A ruling in the farmer's favor approves the claim and pays it out.
    /// Otherwise the rejection stands and becomes final.
    #[instrument(skip(self))]
    pub fn resolve_dispute(
        &mut self,
        caller: PartyId,
        claim_id: ClaimId,
        farmer_favored: bool,
    ) -> Result<(), PoolError> {
        self.resolve(caller, claim_id, Role::Auditor, Resolution::Dispute { farmer_favored })
            .map_err(|e| rejected("resolve_dispute", caller, e))
    }

    fn resolve(
        &mut self,
        caller: PartyId,
        claim_id: ClaimId,
        required_role: Role,
        resolution: Resolution,
    ) -> Result<(), PoolError> {
        self.roles.require(caller, required_role)?;

        let plan = self.claims.plan_resolution(claim_id, caller, resolution)?;
        if let Some(payout) = plan.payout() {
            self.funds
                .payout(payout.to, payout.amount)
                .map_err(PoolError::Funds)?;
        }
        self.claims.apply_resolution(plan)?;

        self.flush_events();
        Ok(())
    }

    pub fn get_claim(&self, claim_id: ClaimId) -> Result<&Claim, PoolError> {
        Ok(self.claims.get(claim_id)?)
    }

    /// Returns every claim filed against `policy_id`, in filing order
    pub fn claims_for_policy(&self, policy_id: PolicyId) -> impl Iterator<Item = &Claim> {
        self.claims.claims_for_policy(policy_id)
    }

    pub fn claim_count(&self) -> usize {
        self.claims.len()
    }

    // ------------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------------

    /// Returns events committed since the last call and clears the outbox
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        std::mem::take(&mut self.outbox)
    }

    fn flush_events(&mut self) {
        self.outbox.extend(self.roles.take_events().into_iter().map(PoolEvent::from));
        self.outbox.extend(self.policies.take_events().into_iter().map(PoolEvent::from));
        self.outbox.extend(self.claims.take_events().into_iter().map(PoolEvent::from));
    }
}

fn rejected(operation: &'static str, caller: PartyId, error: PoolError) -> PoolError {
    warn!(operation, %caller, kind = %error.kind(), %error, "operation rejected");
    error
}
