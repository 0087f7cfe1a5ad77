//! Role registry errors

use thiserror::Error;

use core_kernel::PartyId;
use crate::role::Role;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    /// The caller does not hold the role the operation requires
    #[error("Unauthorized: {caller} holds role {actual}, operation requires {required}")]
    Unauthorized {
        caller: PartyId,
        required: Role,
        actual: Role,
    },
}
