//! Password reset service - authorization policy plus the delegated update.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{CallerIdentity, PasswordChangeRequest, Role};
use crate::errors::{AppError, AppResult};
use crate::infra::{IdentityProvider, UserDirectory};

/// Password reset service trait for dependency injection.
#[async_trait]
pub trait PasswordResetService: Send + Sync {
    /// Overwrite the target user's password on behalf of `caller`.
    ///
    /// The caller's stored role must be one of the two admin labels. The
    /// identity provider is only contacted once the caller is authorized;
    /// the update is the sole side effect and always the last step.
    async fn reset_password(
        &self,
        caller: &CallerIdentity,
        request: PasswordChangeRequest,
    ) -> AppResult<()>;
}

/// Concrete implementation composing the directory and identity clients.
pub struct PasswordResetManager {
    directory: Arc<dyn UserDirectory>,
    identity: Arc<dyn IdentityProvider>,
}

impl PasswordResetManager {
    /// Create a new password reset service instance
    pub fn new(directory: Arc<dyn UserDirectory>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { directory, identity }
    }
}

#[async_trait]
impl PasswordResetService for PasswordResetManager {
    #[tracing::instrument(name = "reset_password", skip(self, request), fields(caller = %caller.uid))]
    async fn reset_password(
        &self,
        caller: &CallerIdentity,
        request: PasswordChangeRequest,
    ) -> AppResult<()> {
        // A missing caller document falls through to an empty role and is
        // denied like any other non-admin role.
        let role = self
            .directory
            .fetch_role(&caller.uid)
            .await?
            .unwrap_or_default();

        if !Role::from(role.as_str()).is_admin() {
            tracing::debug!(role = %role, "caller is not an admin");
            return Err(AppError::PermissionDenied);
        }

        self.identity
            .update_password(request.uid(), request.new_password())
            .await
    }
}
