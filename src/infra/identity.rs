//! Identity Toolkit client.
//!
//! Two capabilities live on the same upstream API: resolving an ID token to
//! a caller identity (`accounts:lookup`) and overwriting a user's password
//! (`accounts:update`). They are separate traits because the middleware
//! needs only the former and the service only the latter.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::domain::{CallerIdentity, NewPassword};
use crate::errors::{AppError, AppResult};

use super::google;

/// Write access to a user's login credential.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Overwrite the password of the account identified by `uid`.
    ///
    /// Upstream failures (unknown uid included) pass through unchanged.
    async fn update_password(&self, uid: &str, new_password: &NewPassword) -> AppResult<()>;
}

/// Resolution of a bearer token to the caller it was issued for.
///
/// Token verification belongs to the platform; this service only consumes
/// the resulting identity.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify_id_token(&self, id_token: &str) -> AppResult<CallerIdentity>;
}

/// Identity Toolkit REST implementation of both capabilities.
pub struct IdentityToolkitClient {
    http: Client,
    base_url: String,
    project_id: String,
    access_token: String,
}

impl IdentityToolkitClient {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.identity_toolkit_url.clone(),
            project_id: config.project_id.clone(),
            access_token: config.service_token().to_string(),
        }
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkitClient {
    #[tracing::instrument(name = "update_password", skip(self, new_password))]
    async fn update_password(&self, uid: &str, new_password: &NewPassword) -> AppResult<()> {
        let url = format!("{}/projects/{}/accounts:update", self.base_url, self.project_id);

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&json!({
                "localId": uid,
                "password": new_password.as_str(),
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(google::provider_error(response).await);
        }

        Ok(())
    }
}

#[async_trait]
impl TokenVerifier for IdentityToolkitClient {
    #[tracing::instrument(name = "verify_id_token", skip_all)]
    async fn verify_id_token(&self, id_token: &str) -> AppResult<CallerIdentity> {
        let url = format!("{}/accounts:lookup", self.base_url);

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&json!({ "idToken": id_token }))
            .send()
            .await?;

        // Identity Toolkit answers 400 for expired/garbage tokens; to this
        // service that is the same as no identity at all.
        if response.status() == StatusCode::BAD_REQUEST {
            return Err(AppError::Unauthenticated);
        }
        if !response.status().is_success() {
            return Err(google::provider_error(response).await);
        }

        let lookup: LookupResponse = response.json().await?;
        lookup
            .users
            .into_iter()
            .next()
            .map(|user| CallerIdentity::new(user.local_id))
            .ok_or(AppError::Unauthenticated)
    }
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> IdentityToolkitClient {
        IdentityToolkitClient {
            http: Client::new(),
            base_url: server.uri(),
            project_id: "demo-project".to_string(),
            access_token: "owner".to_string(),
        }
    }

    #[tokio::test]
    async fn test_update_password_sends_local_id_and_password() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/projects/demo-project/accounts:update"))
            .and(header("authorization", "Bearer owner"))
            .and(body_json(json!({"localId": "u1", "password": "abcdef"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "identitytoolkit#SetAccountInfoResponse",
                "localId": "u1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let password = NewPassword::new("abcdef").unwrap();
        client(&server).update_password("u1", &password).await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_uid_error_passes_through() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"code": 400, "message": "USER_NOT_FOUND"}
            })))
            .mount(&server)
            .await;

        let password = NewPassword::new("abcdef").unwrap();
        let result = client(&server).update_password("ghost", &password).await;
        match result {
            Err(AppError::Provider { status, code, message }) => {
                assert_eq!(status, 400);
                assert_eq!(code, "USER_NOT_FOUND");
                assert_eq!(message, "USER_NOT_FOUND");
            }
            other => panic!("expected provider error, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_verify_id_token_resolves_caller() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/accounts:lookup"))
            .and(body_json(json!({"idToken": "token-1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "identitytoolkit#GetAccountInfoResponse",
                "users": [{"localId": "c1", "email": "c1@example.com"}]
            })))
            .mount(&server)
            .await;

        let caller = client(&server).verify_id_token("token-1").await.unwrap();
        assert_eq!(caller.uid, "c1");
    }

    #[tokio::test]
    async fn test_invalid_token_is_unauthenticated() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"code": 400, "message": "INVALID_ID_TOKEN"}
            })))
            .mount(&server)
            .await;

        let result = client(&server).verify_id_token("garbage").await;
        assert!(matches!(result, Err(AppError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_lookup_without_users_is_unauthenticated() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "identitytoolkit#GetAccountInfoResponse"
            })))
            .mount(&server)
            .await;

        let result = client(&server).verify_id_token("token-1").await;
        assert!(matches!(result, Err(AppError::Unauthenticated)));
    }
}
