//! Authentication value types and errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Message shown when the backend gives no usable reason for a failure
pub const LOGIN_FAILED_FALLBACK: &str = "Login failed";

/// Email/password pair submitted to the API
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authenticated TaskFlow user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    /// Name to greet the user with, falling back to the email
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Failure reported by the authentication collaborator
#[derive(Debug, Error)]
pub enum AuthError {
    /// The server refused the request and said why
    #[error("{0}")]
    Rejected(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl AuthError {
    /// Text suitable for an error notification
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) if !message.trim().is_empty() => message.clone(),
            _ => LOGIN_FAILED_FALLBACK.to_string(),
        }
    }
}
