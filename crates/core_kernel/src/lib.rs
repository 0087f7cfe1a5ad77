//! Core Kernel - Foundational types for the crop insurance pool
//!
//! This crate provides the building blocks shared by every domain crate:
//! - Money and Percentage types with precise decimal arithmetic
//! - Validity periods for policy coverage windows
//! - Party identities and sequential ledger identifiers
//! - Port traits for the premium oracle and the funds collaborator

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod ports;

pub use money::{Money, Currency, MoneyError, Percentage};
pub use temporal::{ValidPeriod, TemporalError};
pub use identifiers::{PartyId, PolicyId, ClaimId};
pub use ports::{DomainPort, PortError, PremiumOracle, FundsPort};
