//! Claims Domain
//!
//! Claims are filed by a policy's farmer against its coverage and then
//! resolved by the insurer, with the auditor as the only path out of a
//! rejection.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Pending  ──approve (insurer)──────────▶ Approved   [payout]
//! Pending  ──reject (insurer)───────────▶ Rejected
//! Rejected ──dispute, favored (auditor)─▶ Approved   [payout]
//! Rejected ──dispute, denied (auditor)──▶ Rejected   (confirmed)
//! ```
//!
//! `Approved` is terminal. A rejection can be disputed once; after the
//! ruling the claim accepts no further transitions.

pub mod claim;
pub mod ledger;
pub mod resolution;
pub mod events;
pub mod error;

pub use claim::{Claim, ClaimStatus, DisputeRuling};
pub use ledger::ClaimLedger;
pub use resolution::{Payout, Resolution, ResolutionPlan};
pub use events::ClaimEvent;
pub use error::ClaimError;
