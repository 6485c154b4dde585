//! Validated password-change request.

use crate::domain::NewPassword;
use crate::errors::{AppError, AppResult};

/// A fully validated request to overwrite one user's password.
///
/// Constructible only through [`PasswordChangeRequest::new`], so an
/// unvalidated payload can never reach the service layer. Checks run in
/// order: target uid first, then the password.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordChangeRequest {
    uid: String,
    new_password: NewPassword,
}

impl PasswordChangeRequest {
    /// Validate the raw fields and build the request.
    ///
    /// # Errors
    /// Returns `invalid-argument` if the uid is empty or the password is
    /// shorter than the minimum length.
    pub fn new(uid: impl Into<String>, new_password: &str) -> AppResult<Self> {
        let uid = uid.into();
        if uid.is_empty() {
            return Err(AppError::invalid_argument("uid is required"));
        }

        let new_password = NewPassword::new(new_password)?;

        Ok(Self { uid, new_password })
    }

    /// Target user identifier.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Replacement password.
    pub fn new_password(&self) -> &NewPassword {
        &self.new_password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = PasswordChangeRequest::new("u1", "abcdef").unwrap();
        assert_eq!(request.uid(), "u1");
        assert_eq!(request.new_password().as_str(), "abcdef");
    }

    #[test]
    fn test_empty_uid_rejected() {
        let result = PasswordChangeRequest::new("", "abcdef");
        assert!(matches!(result, Err(AppError::InvalidArgument(msg)) if msg == "uid is required"));
    }

    #[test]
    fn test_short_password_rejected() {
        let result = PasswordChangeRequest::new("u1", "ab");
        assert!(matches!(result, Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn test_uid_checked_before_password() {
        // Both fields invalid: the uid error wins
        let result = PasswordChangeRequest::new("", "ab");
        assert!(matches!(result, Err(AppError::InvalidArgument(msg)) if msg == "uid is required"));
    }
}
