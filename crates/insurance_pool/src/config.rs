//! Pool configuration

use serde::Deserialize;

use core_kernel::Currency;
use domain_policy::ExcessPremium;

/// Pool configuration
///
/// Read from `POOL_`-prefixed environment variables; unset keys keep their
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Currency every coverage, premium and claim amount is denominated in
    pub currency: Currency,
    /// What happens to funds supplied above the required premium
    pub excess_premium: ExcessPremium,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            excess_premium: ExcessPremium::Refund,
        }
    }
}

impl PoolConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::with_prefix("POOL"))
    }

    pub(crate) fn from_source(source: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_excess_premium(mut self, excess_premium: ExcessPremium) -> Self {
        self.excess_premium = excess_premium;
        self
    }
}
