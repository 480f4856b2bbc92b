//! Auth service client (GoTrue-style REST).
//!
//! Covers the handful of exchanges the UI needs: sign-up, password grant,
//! recovery email, session verification, and user update. Every call sends
//! the project `apikey`; authenticated calls add a bearer token. Token
//! values are truncated before they reach the logs.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::backend::error::BackendError;
use crate::reset::token_preview;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Authenticated user as returned by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<Value>,
}

/// Session payload from sign-up / password-grant calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

/// Fields accepted by the user-update call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Serialize)]
struct EmailCredentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RecoverBody<'a> {
    email: &'a str,
}

/// Client for the hosted auth service.
pub struct AuthClient {
    base_url: String,
    anon_key: String,
    client: Client,
}

impl AuthClient {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn with_keys(&self, request: RequestBuilder, bearer: Option<&str>) -> RequestBuilder {
        let request = request.header("apikey", &self.anon_key);
        match bearer {
            Some(token) => request.bearer_auth(token),
            None => request.bearer_auth(&self.anon_key),
        }
    }

    /// Register a new account. Depending on project settings the service
    /// may or may not hand back a session right away.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Value, BackendError> {
        debug!(email, "auth sign-up");
        let request = self
            .client
            .post(self.endpoint("signup"))
            .json(&EmailCredentials { email, password });
        read_json(self.with_keys(request, None).send().await?).await
    }

    /// Password-grant sign-in.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, BackendError> {
        debug!(email, "auth password grant");
        let request = self
            .client
            .post(self.endpoint("token?grant_type=password"))
            .json(&EmailCredentials { email, password });
        read_json(self.with_keys(request, None).send().await?).await
    }

    /// Ask the service to email a recovery link that redirects back to us.
    pub async fn request_recovery(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), BackendError> {
        debug!(email, redirect_to, "auth recovery request");
        let request = self
            .client
            .post(self.endpoint("recover"))
            .query(&[("redirect_to", redirect_to)])
            .json(&RecoverBody { email });
        read_empty(self.with_keys(request, None).send().await?).await
    }

    /// Validate an access token by asking the service who it belongs to.
    /// This is the session-exchange step of the password-reset flow: the
    /// recovery grant has no refresh credential, so the token itself is the
    /// whole session.
    pub async fn verify_session(&self, access_token: &str) -> Result<AuthUser, BackendError> {
        debug!(token = %token_preview(access_token), "auth session verification");
        let request = self.client.get(self.endpoint("user"));
        read_json(self.with_keys(request, Some(access_token)).send().await?).await
    }

    /// Update the authenticated user (password and/or profile metadata).
    pub async fn update_user(
        &self,
        access_token: &str,
        update: &UserUpdate,
    ) -> Result<AuthUser, BackendError> {
        debug!(
            token = %token_preview(access_token),
            password = update.password.is_some(),
            "auth user update"
        );
        let request = self.client.put(self.endpoint("user")).json(update);
        read_json(self.with_keys(request, Some(access_token)).send().await?).await
    }
}

/// Pull the human-readable message out of an auth error body. The service
/// has used several field names across versions.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for field in ["msg", "message", "error_description", "error"] {
            if let Some(message) = value.get(field).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }
    if body.trim().is_empty() {
        format!("auth request failed: {status}")
    } else {
        body.trim().to_string()
    }
}

pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BackendError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(BackendError::Rejected {
            status: status.as_u16(),
            message: error_message(status, &body),
        });
    }
    Ok(serde_json::from_str(&body)?)
}

pub(crate) async fn read_empty(response: reqwest::Response) -> Result<(), BackendError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await?;
        return Err(BackendError::Rejected {
            status: status.as_u16(),
            message: error_message(status, &body),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let client = AuthClient::new("https://project.example/", "anon");
        assert_eq!(
            client.endpoint("recover"),
            "https://project.example/auth/v1/recover"
        );
    }

    #[test]
    fn error_message_prefers_known_fields() {
        let status = StatusCode::UNAUTHORIZED;
        assert_eq!(
            error_message(status, r#"{"msg":"Invalid token"}"#),
            "Invalid token"
        );
        assert_eq!(
            error_message(status, r#"{"error_description":"Token expired"}"#),
            "Token expired"
        );
        assert_eq!(
            error_message(status, r#"{"error":"access_denied"}"#),
            "access_denied"
        );
    }

    #[test]
    fn error_message_falls_back_to_body_then_status() {
        let status = StatusCode::BAD_GATEWAY;
        assert_eq!(error_message(status, "upstream unavailable"), "upstream unavailable");
        assert_eq!(
            error_message(status, ""),
            "auth request failed: 502 Bad Gateway"
        );
    }

    #[test]
    fn user_update_serializes_only_set_fields() {
        let update = UserUpdate {
            password: Some("secret1".to_string()),
            data: None,
        };
        let json = serde_json::to_string(&update).expect("serializes");
        assert_eq!(json, r#"{"password":"secret1"}"#);
    }
}
