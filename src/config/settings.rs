//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_FIRESTORE_URL, DEFAULT_IDENTITY_TOOLKIT_URL, DEFAULT_MAX_CONCURRENT_REQUESTS,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    /// Google Cloud project owning the Firestore database and user accounts
    pub project_id: String,
    pub firestore_url: String,
    pub identity_toolkit_url: String,
    service_token: String,
    pub max_concurrent_requests: usize,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("project_id", &self.project_id)
            .field("firestore_url", &self.firestore_url)
            .field("identity_toolkit_url", &self.identity_toolkit_url)
            .field("service_token", &"[REDACTED]")
            .field("max_concurrent_requests", &self.max_concurrent_requests)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics in release builds if SERVICE_ACCOUNT_TOKEN is not set (the
    /// Google API clients cannot authenticate without it).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let service_token = env::var("SERVICE_ACCOUNT_TOKEN").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                // Development mode: emulators accept any owner token
                tracing::warn!("SERVICE_ACCOUNT_TOKEN not set, using emulator owner token");
                "owner".to_string()
            } else {
                panic!("SERVICE_ACCOUNT_TOKEN environment variable must be set in production");
            }
        });

        Self {
            project_id: env::var("GOOGLE_CLOUD_PROJECT")
                .unwrap_or_else(|_| "demo-project".to_string()),
            firestore_url: env::var("FIRESTORE_URL")
                .unwrap_or_else(|_| DEFAULT_FIRESTORE_URL.to_string()),
            identity_toolkit_url: env::var("IDENTITY_TOOLKIT_URL")
                .unwrap_or_else(|_| DEFAULT_IDENTITY_TOOLKIT_URL.to_string()),
            service_token,
            max_concurrent_requests: env::var("MAX_CONCURRENT_REQUESTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONCURRENT_REQUESTS),
        }
    }

    /// Get the bearer token used to call the Google APIs.
    pub fn service_token(&self) -> &str {
        &self.service_token
    }
}
