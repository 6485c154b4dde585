//! Stored user roles and the admin authorization rule.

use crate::config::{ROLE_STAFF, ROLE_SUB_ADMIN, ROLE_SUPER_ADMIN};

/// Role classification parsed from the stored role string.
///
/// Anything that is not one of the three recognized labels (including an
/// empty or missing role) is `Unknown` and carries no privileges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Staff,
    SubAdmin,
    SuperAdmin,
    Unknown,
}

impl Role {
    /// Check if this role may administer other users' accounts.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::SubAdmin | Role::SuperAdmin)
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            ROLE_SUB_ADMIN => Role::SubAdmin,
            ROLE_SUPER_ADMIN => Role::SuperAdmin,
            ROLE_STAFF => Role::Staff,
            _ => Role::Unknown,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Staff => write!(f, "{}", ROLE_STAFF),
            Role::SubAdmin => write!(f, "{}", ROLE_SUB_ADMIN),
            Role::SuperAdmin => write!(f, "{}", ROLE_SUPER_ADMIN),
            Role::Unknown => write!(f, "unknown"),
        }
    }
}
