//! Application state - Dependency injection container.
//!
//! Both collaborator clients are constructed once at process start and
//! live for the process lifetime; no teardown is needed.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{FirestoreDirectory, IdentityToolkitClient, TokenVerifier};
use crate::services::{PasswordResetManager, PasswordResetService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Password reset use case
    pub password_service: Arc<dyn PasswordResetService>,
    /// Platform token resolution, used by the auth middleware
    pub token_verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// One Identity Toolkit client serves both as the identity provider and
    /// as the token verifier.
    pub fn from_config(http: reqwest::Client, config: &Config) -> Self {
        let directory = Arc::new(FirestoreDirectory::new(http.clone(), config));
        let identity = Arc::new(IdentityToolkitClient::new(http, config));

        let password_service = Arc::new(PasswordResetManager::new(directory, identity.clone()));

        Self {
            password_service,
            token_verifier: identity,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        password_service: Arc<dyn PasswordResetService>,
        token_verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        Self {
            password_service,
            token_verifier,
        }
    }
}
