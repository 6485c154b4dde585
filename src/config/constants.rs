//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// User Roles
// =============================================================================

/// Role label for regular staff accounts
pub const ROLE_STAFF: &str = "staff";

/// Role label granting secondary admin privileges
pub const ROLE_SUB_ADMIN: &str = "sub-admin";

/// Role label granting full admin privileges
pub const ROLE_SUPER_ADMIN: &str = "super-admin";

// =============================================================================
// Authentication & Security
// =============================================================================

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 6;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default cap on requests processed at once (excess requests queue)
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 10;

// =============================================================================
// Google API endpoints
// =============================================================================

/// Default Firestore REST base URL
pub const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";

/// Default Identity Toolkit REST base URL
pub const DEFAULT_IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Firestore collection holding user records (the `role` field is read)
pub const USERS_COLLECTION: &str = "users";
