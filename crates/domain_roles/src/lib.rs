//! Role Registry Domain
//!
//! Every participant of the pool holds exactly one [`Role`]. The registry is
//! the gate in front of every mutating operation: purchasing and claiming
//! require `Farmer`, claim decisions require `Insurer`, and dispute rulings
//! require `Auditor`.
//!
//! # Role Assignment
//!
//! ```text
//! deployer ──(implicit)──▶ Insurer ──assign_role──▶ any identity, any role
//! ```
//!
//! Unknown identities hold `Unset`. Roles are reassigned, never removed.

pub mod role;
pub mod registry;
pub mod events;
pub mod error;

pub use role::Role;
pub use registry::RoleRegistry;
pub use events::RoleEvent;
pub use error::RoleError;
