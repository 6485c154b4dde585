//! Shared plumbing for the Google REST clients.

use serde::Deserialize;

use crate::errors::AppError;

/// Error envelope returned by Google APIs.
#[derive(Debug, Deserialize)]
pub(crate) struct GoogleErrorBody {
    pub(crate) error: GoogleErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GoogleErrorDetail {
    #[serde(default)]
    pub(crate) message: String,
    /// Symbolic status such as NOT_FOUND or PERMISSION_DENIED. Identity
    /// Toolkit omits it and puts the symbol in `message` instead.
    #[serde(default)]
    pub(crate) status: String,
}

/// Decode an upstream error response into a provider error, preserving the
/// upstream status, code and message verbatim.
pub(crate) async fn provider_error(response: reqwest::Response) -> AppError {
    let status = response.status().as_u16();

    match response.json::<GoogleErrorBody>().await {
        Ok(body) => {
            let code = if body.error.status.is_empty() {
                body.error.message.clone()
            } else {
                body.error.status
            };
            AppError::Provider {
                status,
                code,
                message: body.error.message,
            }
        }
        Err(_) => AppError::Provider {
            status,
            code: "unknown".to_string(),
            message: format!("upstream returned HTTP {}", status),
        },
    }
}
