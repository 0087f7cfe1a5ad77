//! Policy Ledger Domain
//!
//! A policy is a crop-coverage agreement between a farmer and the pool. It
//! is created only by a successful purchase and is never deleted.
//!
//! # Purchase
//!
//! ```text
//! coverage > 0 ──▶ start < end ──▶ supplied >= coverage × rate / 100 ──▶ Policy { active }
//! ```
//!
//! The premium rate comes from the oracle at purchase time and is not stored.
//! Purchasing is split into [`PolicyLedger::prepare_purchase`] (pure
//! validation) and [`PolicyLedger::commit_purchase`] (id assignment and
//! insertion) so that the caller can move funds between the two steps
//! without ever leaving a half-created policy behind.
//!
//! # Lifecycle
//!
//! ```text
//! Active ──deactivate──▶ Inactive
//! ```

pub mod aggregate;
pub mod premium;
pub mod ledger;
pub mod events;
pub mod error;

pub use aggregate::Policy;
pub use premium::{ExcessPremium, PremiumQuote};
pub use ledger::{PolicyLedger, PurchaseOrder};
pub use events::PolicyEvent;
pub use error::PolicyError;
