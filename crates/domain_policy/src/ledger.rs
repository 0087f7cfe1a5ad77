//! Policy ledger
//!
//! Append-only sequence of policies indexed by `PolicyId`, starting at 1.
//! Ids are assigned only on commit, so a rejected purchase never consumes one.

use chrono::{DateTime, Utc};
use tracing::info;

use core_kernel::{Currency, Money, PartyId, Percentage, PolicyId, ValidPeriod};
use crate::aggregate::Policy;
use crate::error::PolicyError;
use crate::events::PolicyEvent;
use crate::premium::{ExcessPremium, PremiumQuote};

/// A purchase that passed every ledger check and awaits payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOrder {
    farmer: PartyId,
    period: ValidPeriod,
    quote: PremiumQuote,
    supplied: Money,
    amount_to_collect: Money,
}

impl PurchaseOrder {
    pub fn farmer(&self) -> PartyId {
        self.farmer
    }

    pub fn period(&self) -> ValidPeriod {
        self.period
    }

    pub fn quote(&self) -> &PremiumQuote {
        &self.quote
    }

    pub fn supplied(&self) -> Money {
        self.supplied
    }

    /// Amount the pool must collect before the policy can be committed
    pub fn amount_to_collect(&self) -> Money {
        self.amount_to_collect
    }
}

#[derive(Debug, Clone)]
pub struct PolicyLedger {
    currency: Currency,
    excess_premium: ExcessPremium,
    policies: Vec<Policy>,
    events: Vec<PolicyEvent>,
}

impl PolicyLedger {
    /// Creates an empty ledger denominated in `currency`
    pub fn new(currency: Currency, excess_premium: ExcessPremium) -> Self {
        Self {
            currency,
            excess_premium,
            policies: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn excess_premium(&self) -> ExcessPremium {
        self.excess_premium
    }

    /// Validates a purchase without touching the ledger
    ///
    /// # Arguments
    ///
    /// * `farmer` - Buyer and future owner of the policy
    /// * `coverage_amount` - Coverage requested, must be positive
    /// * `start_date`, `end_date` - Coverage window, `start_date < end_date`
    /// * `rate` - Premium rate read from the oracle for this purchase
    /// * `supplied` - Funds the farmer attached to the purchase
    ///
    /// # Errors
    ///
    /// Checks run in order: currency, coverage amount, period, premium.
    pub fn prepare_purchase(
        &self,
        farmer: PartyId,
        coverage_amount: Money,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        rate: Percentage,
        supplied: Money,
    ) -> Result<PurchaseOrder, PolicyError> {
        self.ensure_currency(&coverage_amount)?;

        if !coverage_amount.is_positive() {
            return Err(PolicyError::InvalidCoverageAmount(coverage_amount.to_string()));
        }

        let period = ValidPeriod::bounded(start_date, end_date).map_err(|_| {
            PolicyError::InvalidPolicyPeriod {
                start: start_date.to_string(),
                end: end_date.to_string(),
            }
        })?;

        let quote = PremiumQuote::price(coverage_amount, rate)?;
        quote.check_supplied(&supplied)?;

        Ok(PurchaseOrder {
            farmer,
            period,
            quote,
            supplied,
            amount_to_collect: self.excess_premium.amount_to_collect(&quote, supplied),
        })
    }

    /// Stores the policy described by a paid order and returns its id
    pub fn commit_purchase(&mut self, order: PurchaseOrder) -> PolicyId {
        let id = PolicyId::from_index(self.policies.len());
        let policy = Policy::new(
            id,
            order.farmer,
            order.quote.coverage(),
            order.period,
            order.amount_to_collect,
        );

        info!(
            policy_id = %id,
            farmer = %order.farmer,
            coverage = %order.quote.coverage(),
            premium = %order.amount_to_collect,
            rate = %order.quote.rate(),
            "policy purchased"
        );

        self.events.push(PolicyEvent::PolicyPurchased {
            policy_id: id,
            farmer: order.farmer,
            coverage_amount: order.quote.coverage().amount(),
            premium: order.amount_to_collect.amount(),
            currency: self.currency.to_string(),
            start_date: order.period.start(),
            end_date: order.period.end(),
            timestamp: policy.purchased_at(),
        });
        self.policies.push(policy);
        id
    }

    /// Looks up a policy
    pub fn get(&self, id: PolicyId) -> Result<&Policy, PolicyError> {
        id.index()
            .and_then(|i| self.policies.get(i))
            .ok_or(PolicyError::PolicyNotFound(id))
    }

    /// Stops a policy from accepting new claims
    ///
    /// # Errors
    ///
    /// `PolicyNotFound` for an unused id, `PolicyInactive` if the policy was
    /// already deactivated.
    pub fn deactivate(&mut self, id: PolicyId, deactivated_by: PartyId) -> Result<(), PolicyError> {
        let policy = id
            .index()
            .and_then(|i| self.policies.get_mut(i))
            .ok_or(PolicyError::PolicyNotFound(id))?;

        if !policy.is_active() {
            return Err(PolicyError::PolicyInactive(id));
        }
        policy.deactivate();

        info!(policy_id = %id, %deactivated_by, "policy deactivated");
        self.events.push(PolicyEvent::PolicyDeactivated {
            policy_id: id,
            deactivated_by,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Policy> {
        self.policies.iter()
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Returns accumulated domain events and clears them
    pub fn take_events(&mut self) -> Vec<PolicyEvent> {
        std::mem::take(&mut self.events)
    }

    fn ensure_currency(&self, amount: &Money) -> Result<(), PolicyError> {
        if amount.currency() != self.currency {
            return Err(PolicyError::CurrencyMismatch {
                expected: self.currency.to_string(),
                actual: amount.currency().to_string(),
            });
        }
        Ok(())
    }
}
