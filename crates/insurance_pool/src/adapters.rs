//! In-memory adapters for the pool's ports
//!
//! `FixedRateOracle` publishes a rate set by hand. `PoolTreasury` keeps the
//! pool balance and per-party totals in memory and refuses any payout the
//! balance cannot cover.

use std::collections::HashMap;
use tracing::{debug, warn};

use core_kernel::{Currency, DomainPort, FundsPort, Money, PartyId, Percentage, PortError, PremiumOracle};

const ORACLE_SERVICE: &str = "premium-oracle";

/// Premium oracle returning a manually configured rate
#[derive(Debug, Clone)]
pub struct FixedRateOracle {
    rate: Percentage,
    available: bool,
}

impl FixedRateOracle {
    pub fn new(rate: Percentage) -> Self {
        Self {
            rate,
            available: true,
        }
    }

    pub fn rate(&self) -> Percentage {
        self.rate
    }

    pub fn set_rate(&mut self, rate: Percentage) {
        debug!(%rate, "premium rate updated");
        self.rate = rate;
    }

    /// Simulates the oracle going offline or coming back
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl DomainPort for FixedRateOracle {}

impl PremiumOracle for FixedRateOracle {
    fn current_premium_rate(&self) -> Result<Percentage, PortError> {
        if !self.available {
            warn!(service = ORACLE_SERVICE, "premium oracle unavailable");
            return Err(PortError::unavailable(ORACLE_SERVICE));
        }
        Ok(self.rate)
    }
}

/// In-memory pool funds
#[derive(Debug, Clone)]
pub struct PoolTreasury {
    currency: Currency,
    balance: Money,
    total_premiums: Money,
    total_payouts: Money,
    premiums: HashMap<PartyId, Money>,
    payouts: HashMap<PartyId, Money>,
}

impl PoolTreasury {
    /// Creates an empty treasury
    pub fn new(currency: Currency) -> Self {
        Self::with_capital(Money::zero(currency))
    }

    /// Creates a treasury seeded with `capital`, in the capital's currency
    pub fn with_capital(capital: Money) -> Self {
        Self {
            currency: capital.currency(),
            balance: capital,
            total_premiums: Money::zero(capital.currency()),
            total_payouts: Money::zero(capital.currency()),
            premiums: HashMap::new(),
            payouts: HashMap::new(),
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Total premiums collected from `party_id`
    pub fn premiums_from(&self, party_id: PartyId) -> Money {
        self.premiums.get(&party_id).copied().unwrap_or_else(|| Money::zero(self.currency))
    }

    /// Total paid out to `party_id`
    pub fn payouts_to(&self, party_id: PartyId) -> Money {
        self.payouts.get(&party_id).copied().unwrap_or_else(|| Money::zero(self.currency))
    }

    pub fn total_premiums(&self) -> Money {
        self.total_premiums
    }

    pub fn total_payouts(&self) -> Money {
        self.total_payouts
    }

    fn check_amount(&self, amount: &Money) -> Result<(), PortError> {
        if amount.currency() != self.currency {
            return Err(PortError::validation_field(
                format!("expected {}, got {}", self.currency, amount.currency()),
                "currency",
            ));
        }
        if !amount.is_positive() {
            return Err(PortError::validation_field(
                format!("transfer amount must be positive, got {}", amount),
                "amount",
            ));
        }
        Ok(())
    }

    /// Returns `party_id`'s running total after adding `amount`
    fn credited(ledger: &HashMap<PartyId, Money>, party_id: PartyId, amount: Money) -> Result<Money, PortError> {
        match ledger.get(&party_id) {
            Some(total) => Ok(total.checked_add(&amount)?),
            None => Ok(amount),
        }
    }
}

impl DomainPort for PoolTreasury {}

impl FundsPort for PoolTreasury {
    fn collect(&mut self, from: PartyId, amount: Money) -> Result<(), PortError> {
        self.check_amount(&amount)?;

        let balance = self.balance.checked_add(&amount)?;
        let total = self.total_premiums.checked_add(&amount)?;
        let party_total = Self::credited(&self.premiums, from, amount)?;

        self.balance = balance;
        self.total_premiums = total;
        self.premiums.insert(from, party_total);

        debug!(%from, %amount, balance = %self.balance, "premium collected");
        Ok(())
    }

    fn payout(&mut self, to: PartyId, amount: Money) -> Result<(), PortError> {
        self.check_amount(&amount)?;

        let balance = self.balance.checked_sub(&amount)?;
        if balance.is_negative() {
            warn!(%to, %amount, balance = %self.balance, "payout exceeds pool balance");
            return Err(PortError::conflict(format!(
                "pool balance {} cannot cover payout of {}",
                self.balance, amount
            )));
        }
        let total = self.total_payouts.checked_add(&amount)?;
        let party_total = Self::credited(&self.payouts, to, amount)?;

        self.balance = balance;
        self.total_payouts = total;
        self.payouts.insert(to, party_total);

        debug!(%to, %amount, balance = %self.balance, "claim paid out");
        Ok(())
    }
}
