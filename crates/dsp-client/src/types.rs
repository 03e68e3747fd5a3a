//! Type definitions for the DSP backend API

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minimum password length accepted by the backend on signup
pub const MIN_PASSWORD_LEN: usize = 6;

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status message, `"Healthy"` when the service is up
    pub message: String,
}

impl HealthResponse {
    /// Whether the backend reported itself healthy
    pub fn is_healthy(&self) -> bool {
        self.message == "Healthy"
    }
}

/// Request body for user signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    /// User email address
    pub email: String,
    /// User password
    pub password: String,
}

impl SignupRequest {
    /// Create a signup request
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the request against the backend's signup rules
    pub fn validate(&self) -> Result<()> {
        validate_email(&self.email)?;

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Error::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        Ok(())
    }
}

/// Request body for user login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// User email address
    pub email: String,
    /// User password
    pub password: String,
}

impl LoginRequest {
    /// Create a login request
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Access token issued on signup and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// JWT access token
    pub access_token: String,
    /// Token type
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// The authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Email address the token was issued for
    pub email: String,
}

fn validate_email(email: &str) -> Result<()> {
    let invalid = || Error::Validation(format!("invalid email address: {email}"));

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    match domain.split_once('.') {
        Some((host, _)) if !host.is_empty() && !domain.ends_with('.') => Ok(()),
        _ => Err(invalid()),
    }
}
