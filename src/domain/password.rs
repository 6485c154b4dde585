//! Password value object - Domain layer password handling.
//!
//! The actual credential update happens at the identity provider; this
//! service only validates the plain text and forwards it, so no hashing
//! is done here.

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

/// Replacement password supplied by an admin for another user's account.
#[derive(Clone, PartialEq, Eq)]
pub struct NewPassword {
    plain_text: String,
}

// Don't expose the password in debug output (security)
impl std::fmt::Debug for NewPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewPassword")
            .field("plain_text", &"[REDACTED]")
            .finish()
    }
}

impl NewPassword {
    /// Validate and wrap a plain-text password.
    ///
    /// # Errors
    /// Returns `invalid-argument` if the password is shorter than 6 characters.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if plain_text.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::invalid_argument(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(Self {
            plain_text: plain_text.to_string(),
        })
    }

    /// Get the plain text for forwarding to the identity provider.
    pub fn as_str(&self) -> &str {
        &self.plain_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_length_accepted() {
        assert!(NewPassword::new("abcdef").is_ok());
    }

    #[test]
    fn test_too_short_rejected() {
        for pw in ["", "a", "abcde"] {
            let result = NewPassword::new(pw);
            assert!(matches!(result, Err(AppError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Six Hangul characters are more than six bytes but still valid
        assert!(NewPassword::new("비밀번호여섯").is_ok());
        assert!(NewPassword::new("비밀").is_err());
    }

    #[test]
    fn test_debug_output_redacted() {
        let password = NewPassword::new("abcdef").unwrap();
        let debug = format!("{:?}", password);
        assert!(!debug.contains("abcdef"));
        assert!(debug.contains("REDACTED"));
    }
}
