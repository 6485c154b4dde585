//! Staff Password Service
//!
//! A single-purpose admin API: a caller whose stored role grants admin
//! privileges can overwrite another user's login password. The role lives in
//! Firestore; the password change itself is delegated to the Google Identity
//! Toolkit. This service only orchestrates one read and one write per
//! request.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and validation
//! - **services**: Application use cases and authorization policy
//! - **infra**: External collaborators (Firestore, Identity Toolkit)
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{CallerIdentity, NewPassword, PasswordChangeRequest, Role};
pub use errors::{AppError, AppResult};
