//! IdentityClient - REST client for the hosted identity provider.
//!
//! Speaks the provider's account API: email/password session creation,
//! account creation, current-session deletion, and the current-account
//! fetch. Authorization travels as a session header rather than an ambient
//! cookie, so the caller stays in control of which token each call uses.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};

use wayfind_core::auth::{IdentityService, UserProfile};
use wayfind_core::config::IdentityConfig;
use wayfind_core::error::{RejectionKind, Result, WayfindError};

const PROJECT_HEADER: &str = "X-Appwrite-Project";
const SESSION_HEADER: &str = "X-Appwrite-Session";
const PLATFORM_HEADER: &str = "X-Appwrite-Platform";

/// Client for the identity provider's account API.
#[derive(Clone)]
pub struct IdentityClient {
    client: Client,
    endpoint: String,
    project_id: String,
    platform: Option<String>,
}

impl IdentityClient {
    /// Creates a client from the identity connection settings.
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            platform: config.platform.clone(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.endpoint, path);
        let mut builder = self
            .client
            .request(method, url)
            .header(PROJECT_HEADER, &self.project_id);
        if let Some(platform) = &self.platform {
            builder = builder.header(PLATFORM_HEADER, platform);
        }
        builder
    }

    async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response> {
        let response = builder.send().await.map_err(|err| {
            WayfindError::unavailable(format!("identity provider request failed: {err}"))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read identity provider error body".to_string());
            return Err(map_http_error(status, &body));
        }

        Ok(response)
    }
}

#[async_trait]
impl IdentityService for IdentityClient {
    async fn create_session(&self, email: &str, password: &str) -> Result<String> {
        let request = self
            .request(Method::POST, "/account/sessions/email")
            .json(&CreateSessionRequest { email, password });

        let response = self.send(request).await?;
        let session: SessionResponse = response.json().await.map_err(|err| {
            WayfindError::unavailable(format!("failed to parse session response: {err}"))
        })?;

        Ok(session.token())
    }

    async fn create_account(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserProfile> {
        let request = self.request(Method::POST, "/account").json(&CreateAccountRequest {
            // The provider assigns the id.
            user_id: "unique()",
            email,
            password,
            name,
        });

        let response = self.send(request).await?;
        let account: AccountResponse = response.json().await.map_err(|err| {
            WayfindError::unavailable(format!("failed to parse account response: {err}"))
        })?;

        Ok(account.into_profile())
    }

    async fn delete_current_session(&self, token: &str) -> Result<()> {
        let request = self
            .request(Method::DELETE, "/account/sessions/current")
            .header(SESSION_HEADER, token);

        self.send(request).await?;
        Ok(())
    }

    async fn fetch_account(&self, token: &str) -> Result<UserProfile> {
        let request = self
            .request(Method::GET, "/account")
            .header(SESSION_HEADER, token);

        let response = self.send(request).await?;
        let account: AccountResponse = response.json().await.map_err(|err| {
            WayfindError::unavailable(format!("failed to parse account response: {err}"))
        })?;

        Ok(account.into_profile())
    }
}

#[derive(Serialize)]
struct CreateSessionRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct CreateAccountRequest<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
    email: &'a str,
    password: &'a str,
    name: &'a str,
}

#[derive(Deserialize)]
struct SessionResponse {
    #[serde(rename = "$id")]
    id: String,
    #[serde(default)]
    secret: String,
}

impl SessionResponse {
    /// The opaque session token: the secret when the provider returns one,
    /// otherwise the session id.
    fn token(self) -> String {
        if self.secret.is_empty() {
            self.id
        } else {
            self.secret
        }
    }
}

#[derive(Deserialize)]
struct AccountResponse {
    #[serde(rename = "$id")]
    id: String,
    email: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    phone: String,
}

impl AccountResponse {
    fn into_profile(self) -> UserProfile {
        let phone = if self.phone.is_empty() {
            None
        } else {
            Some(self.phone)
        };
        UserProfile {
            id: self.id,
            email: self.email,
            name: self.name,
            phone,
        }
    }
}

/// Maps a non-success provider response onto the shared error taxonomy,
/// surfacing the provider's own message where the body carries one.
fn map_http_error(status: StatusCode, body: &str) -> WayfindError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string());

    match RejectionKind::from_status(status.as_u16()) {
        Some(kind) => WayfindError::rejected(kind, message),
        None => WayfindError::unavailable(format!(
            "identity provider returned {}: {message}",
            status.as_u16()
        )),
    }
}
