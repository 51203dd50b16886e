//! HTTP client for the identity provider's REST API.
//!
//! Two key scopes: the anon key verifies credentials (sign-in), the service
//! key performs administrative create/delete. Every request carries the
//! client-wide timeout; a timeout surfaces as a provider failure, never as
//! bad credentials.

use hm_core::{Identity, IdentityError, IdentityProvider, NewIdentity, SessionDescriptor, SignInOutcome};

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

pub struct IdentityClient {
    base_url: String,
    anon_key: String,
    service_key: String,
    client: ReqwestClient,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_in: Option<i64>,
    expires_at: Option<i64>,
    user: Option<UserPayload>,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    id: String,
    email: Option<String>,
    user_metadata: Option<Value>,
}

impl IdentityClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - Provider URL (e.g., "https://identity.example.com")
    /// * `anon_key` - Key for credential verification
    /// * `service_key` - Key for administrative operations
    /// * `timeout` - Per-request timeout
    pub fn new(
        base_url: &str,
        anon_key: &str,
        service_key: &str,
        timeout: Duration,
    ) -> Result<Self, IdentityError> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| IdentityError::provider(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            service_key: service_key.to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Pull the human-readable message out of a provider error body.
    fn error_message(body: &Value) -> String {
        for key in ["msg", "message", "error_description", "error"] {
            if let Some(text) = body.get(key).and_then(Value::as_str) {
                return text.to_string();
            }
        }
        String::from("unexpected provider response")
    }

    fn parse_identity(user: UserPayload) -> Result<Identity, IdentityError> {
        let id = Uuid::parse_str(&user.id)
            .map_err(|e| IdentityError::provider(format!("Malformed identity id: {}", e)))?;

        let full_name = user
            .user_metadata
            .as_ref()
            .and_then(|m| m.get("full_name"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Identity {
            id,
            email: user.email.unwrap_or_default(),
            full_name,
        })
    }
}

#[async_trait]
impl IdentityProvider for IdentityClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignInOutcome, IdentityError> {
        let response = self
            .client
            .post(self.url("/auth/v1/token?grant_type=password"))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| IdentityError::provider(format!("Sign-in request failed: {}", e)))?;

        let status = response.status();

        // The provider answers credential rejections with a 4xx; anything
        // else is a dependency problem.
        if status == StatusCode::BAD_REQUEST
            || status == StatusCode::UNAUTHORIZED
            || status == StatusCode::FORBIDDEN
        {
            return Err(IdentityError::invalid_credentials());
        }

        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            return Err(IdentityError::provider(format!(
                "Sign-in failed with status {}: {}",
                status,
                Self::error_message(&body)
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| IdentityError::provider(format!("Malformed sign-in response: {}", e)))?;

        // A success without a session or a user is still a failed sign-in.
        let (Some(access_token), Some(refresh_token), Some(user)) =
            (token.access_token, token.refresh_token, token.user)
        else {
            return Err(IdentityError::invalid_credentials());
        };

        let expires_at = token.expires_at.unwrap_or_else(|| {
            chrono::Utc::now().timestamp() + token.expires_in.unwrap_or_default()
        });

        Ok(SignInOutcome {
            identity: Self::parse_identity(user)?,
            session: SessionDescriptor {
                access_token,
                refresh_token,
                expires_at,
            },
        })
    }

    async fn create_identity(&self, new_identity: &NewIdentity) -> Result<Identity, IdentityError> {
        let response = self
            .client
            .post(self.url("/auth/v1/admin/users"))
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .json(&json!({
                "email": new_identity.email,
                "password": new_identity.password,
                "email_confirm": true,
                "user_metadata": { "full_name": new_identity.full_name },
            }))
            .send()
            .await
            .map_err(|e| IdentityError::provider(format!("Create-identity request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            return Err(IdentityError::provider(format!(
                "Create identity failed with status {}: {}",
                status,
                Self::error_message(&body)
            )));
        }

        let user: UserPayload = response.json().await.map_err(|e| {
            IdentityError::provider(format!("Malformed create-identity response: {}", e))
        })?;

        Self::parse_identity(user)
    }

    async fn delete_identity(&self, id: Uuid) -> Result<(), IdentityError> {
        let response = self
            .client
            .delete(self.url(&format!("/auth/v1/admin/users/{}", id)))
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await
            .map_err(|e| IdentityError::provider(format!("Delete-identity request failed: {}", e)))?;

        let status = response.status();

        // 404 means the record is already gone; deletion is idempotent so
        // compensation can re-run safely.
        if status.is_success() || status == StatusCode::NOT_FOUND {
            return Ok(());
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        Err(IdentityError::provider(format!(
            "Delete identity failed with status {}: {}",
            status,
            Self::error_message(&body)
        )))
    }
}
