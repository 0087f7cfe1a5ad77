//! Crop Insurance Pool
//!
//! The pool aggregate ties the role registry, the policy ledger and the claim
//! ledger together behind a role-gated operation surface, and drives the two
//! external collaborators it depends on: a premium oracle and a funds port.
//!
//! # Architecture
//!
//! - **Aggregate**: `InsurancePool` owns all ledger state and mutates it
//!   through `&mut self`
//! - **Ports**: `PremiumOracle` and `FundsPort` from `core_kernel`
//! - **Adapters**: `FixedRateOracle` and `PoolTreasury` for in-memory use
//! - **Events**: every committed change is appended to a `PoolEvent` outbox
//!
//! # Operation Flow
//!
//! ```text
//! role check ─▶ validate ─▶ transfer funds ─▶ commit ─▶ outbox
//!      │            │              │
//!      └────────────┴──────────────┴──▶ PoolError, state untouched
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use insurance_pool::{InsurancePool, FixedRateOracle, PoolTreasury, PoolConfig};
//!
//! let mut pool = InsurancePool::new(
//!     insurer,
//!     FixedRateOracle::new(Percentage::new(10)),
//!     PoolTreasury::with_capital(capital),
//!     PoolConfig::default(),
//! );
//! pool.assign_role(insurer, farmer, Role::Farmer)?;
//!
//! let policy_id = pool.purchase_policy(farmer, coverage, start, end, premium)?;
//! let claim_id = pool.file_claim(farmer, policy_id, amount, "Drought")?;
//! pool.approve_claim(insurer, claim_id)?;
//! ```

pub mod adapters;
pub mod config;
pub mod error;
pub mod events;
pub mod pool;

pub use adapters::{FixedRateOracle, PoolTreasury};
pub use config::PoolConfig;
pub use error::{ErrorKind, PoolError};
pub use events::PoolEvent;
pub use pool::InsurancePool;
