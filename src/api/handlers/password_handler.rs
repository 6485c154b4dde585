//! Password administration handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{lenient_string, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CallerIdentity, PasswordChangeRequest};
use crate::errors::AppResult;

/// Password reset request.
///
/// Fields accept any JSON type and are stringified before validation, so a
/// numeric uid still reaches the handler as text.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetPasswordRequest {
    /// Target user identifier
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(min = 1, message = "uid is required"))]
    #[schema(example = "u1")]
    pub uid: String,
    /// Replacement password (minimum 6 characters)
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    #[schema(example = "hunter2!", min_length = 6)]
    pub new_password: String,
}

/// Password reset confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct SetPasswordResponse {
    /// Always true on success
    #[schema(example = true)]
    pub ok: bool,
}

/// Create admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/users/password", post(set_user_password))
}

/// Overwrite another user's password (admin only)
#[utoipa::path(
    post,
    path = "/admin/users/password",
    tag = "Administration",
    security(("bearer_auth" = [])),
    request_body = SetPasswordRequest,
    responses(
        (status = 200, description = "Password updated", body = SetPasswordResponse),
        (status = 400, description = "Missing uid or password too short"),
        (status = 401, description = "No caller identity"),
        (status = 403, description = "Caller's stored role is not an admin role")
    )
)]
pub async fn set_user_password(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    ValidatedJson(payload): ValidatedJson<SetPasswordRequest>,
) -> AppResult<Json<SetPasswordResponse>> {
    let request = PasswordChangeRequest::new(payload.uid, &payload.new_password)?;

    state.password_service.reset_password(&caller, request).await?;

    Ok(Json(SetPasswordResponse { ok: true }))
}
