//! Bearer-token authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;

/// Authentication middleware.
///
/// Extracts the bearer token from the Authorization header, resolves it to
/// a caller identity through the platform verifier, and injects the
/// identity into the request extensions. A request without a resolvable
/// identity never reaches a handler.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthenticated)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthenticated)?;

    let caller = state.token_verifier.verify_id_token(token).await?;

    request.extensions_mut().insert(caller);

    Ok(next.run(request).await)
}
