//! Firestore-backed user directory.
//!
//! Reads exactly one field of one document per request: the `role` of
//! `users/{uid}`. Nothing is ever written.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::{Config, USERS_COLLECTION};
use crate::errors::AppResult;

use super::google;

/// Read access to the stored role of a user.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch the stored role label for a user id.
    ///
    /// Returns `None` when the document does not exist or carries no role
    /// field. Callers treat that the same as an empty role.
    async fn fetch_role(&self, uid: &str) -> AppResult<Option<String>>;
}

/// Firestore REST implementation of [`UserDirectory`].
pub struct FirestoreDirectory {
    http: Client,
    base_url: String,
    project_id: String,
    access_token: String,
}

impl FirestoreDirectory {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.firestore_url.clone(),
            project_id: config.project_id.clone(),
            access_token: config.service_token().to_string(),
        }
    }

    fn document_url(&self, uid: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}/{}",
            self.base_url, self.project_id, USERS_COLLECTION, uid
        )
    }
}

#[async_trait]
impl UserDirectory for FirestoreDirectory {
    #[tracing::instrument(name = "fetch_role", skip(self))]
    async fn fetch_role(&self, uid: &str) -> AppResult<Option<String>> {
        let response = self
            .http
            .get(self.document_url(uid))
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(google::provider_error(response).await);
        }

        let document: FirestoreDocument = response.json().await?;
        let role = document
            .fields
            .get("role")
            .and_then(|value| value.string_value.clone());

        Ok(role)
    }
}

/// Firestore document body; only string fields are of interest.
#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    #[serde(default)]
    fields: HashMap<String, FirestoreValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FirestoreValue {
    string_value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn directory(server: &MockServer) -> FirestoreDirectory {
        FirestoreDirectory {
            http: Client::new(),
            base_url: server.uri(),
            project_id: "demo-project".to_string(),
            access_token: "owner".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_role_returns_stored_label() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(
                "/projects/demo-project/databases/(default)/documents/users/c1",
            ))
            .and(header("authorization", "Bearer owner"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "projects/demo-project/databases/(default)/documents/users/c1",
                "fields": {
                    "name": {"stringValue": "Caller One"},
                    "role": {"stringValue": "sub-admin"}
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let role = directory(&server).fetch_role("c1").await.unwrap();
        assert_eq!(role.as_deref(), Some("sub-admin"));
    }

    #[tokio::test]
    async fn test_missing_document_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {"code": 404, "message": "Document not found", "status": "NOT_FOUND"}
            })))
            .mount(&server)
            .await;

        let role = directory(&server).fetch_role("ghost").await.unwrap();
        assert_eq!(role, None);
    }

    #[tokio::test]
    async fn test_document_without_role_field_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "fields": {"name": {"stringValue": "No Role"}}
            })))
            .mount(&server)
            .await;

        let role = directory(&server).fetch_role("c1").await.unwrap();
        assert_eq!(role, None);
    }

    #[tokio::test]
    async fn test_upstream_error_surfaces_as_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": {
                    "code": 403,
                    "message": "Missing or insufficient permissions.",
                    "status": "PERMISSION_DENIED"
                }
            })))
            .mount(&server)
            .await;

        let result = directory(&server).fetch_role("c1").await;
        match result {
            Err(AppError::Provider { status, code, .. }) => {
                assert_eq!(status, 403);
                assert_eq!(code, "PERMISSION_DENIED");
            }
            other => panic!("expected provider error, got {:?}", other.err()),
        }
    }
}
