//! HTTP client for the TaskFlow authentication API
//!
//! Talks JSON to `POST /api/auth/login` and `GET /api/auth/me`. The bearer
//! token returned by a successful login is kept in memory only.

use super::traits::AuthClientTrait;
use super::types::{AuthError, Credentials, User};
use crate::config::TuiConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::RwLock;

const LOGIN_PATH: &str = "/api/auth/login";
const ME_PATH: &str = "/api/auth/me";

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
    user: User,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MeResponse {
    Wrapped { user: User },
    Bare(User),
}

impl MeResponse {
    fn into_user(self) -> User {
        match self {
            MeResponse::Wrapped { user } | MeResponse::Bare(user) => user,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Client for the TaskFlow authentication endpoints
pub struct HttpAuthClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl HttpAuthClient {
    /// Create a client from configuration
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.api_url(),
            token: RwLock::new(config.api_token.clone()),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl AuthClientTrait for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let url = self.endpoint(LOGIN_PATH);
        tracing::debug!(%url, "Sending login request");

        let response = self.http.post(&url).json(credentials).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(%status, "Login rejected");
            return Err(AuthError::Rejected(rejection_message(&body)));
        }

        let parsed: LoginResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::UnexpectedResponse(e.to_string()))?;
        if let Some(token) = parsed.token {
            *self.token.write().await = Some(token);
        }
        Ok(parsed.user)
    }

    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        let Some(token) = self.token.read().await.clone() else {
            return Ok(None);
        };

        let response = self
            .http
            .get(self.endpoint(ME_PATH))
            .bearer_auth(token)
            .send()
            .await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::debug!(%status, "Stored session is no longer valid");
            *self.token.write().await = None;
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await?;
            return Err(AuthError::Rejected(rejection_message(&body)));
        }

        let body = response.text().await?;
        let parsed: MeResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::UnexpectedResponse(e.to_string()))?;
        Ok(Some(parsed.into_user()))
    }
}

/// Pull a human-readable reason out of an error response body
fn rejection_message(body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed.message.or(parsed.error).unwrap_or_default()
}
