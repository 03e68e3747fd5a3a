//! Typed client for the DSP backend API

use dsp_http_client::{ConfigSource, HttpClient, ResponseBody};
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::types::{CurrentUser, HealthResponse, LoginRequest, SignupRequest, TokenResponse};

const HEALTH_PATH: &str = "/";
const SIGNUP_PATH: &str = "/signup";
const LOGIN_PATH: &str = "/login";
const ME_PATH: &str = "/me";

/// Main client for interacting with the DSP backend
#[derive(Debug, Clone)]
pub struct DspClient {
    http: HttpClient,
}

impl DspClient {
    /// Create a client on top of an existing [`HttpClient`]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Create a client reading the backend URL from `config`
    pub fn with_config(config: impl ConfigSource + 'static) -> Self {
        Self::new(HttpClient::new(config))
    }

    /// Create a client reading `DSP_BACKEND_URL` on every request
    pub fn from_env() -> Self {
        Self::new(HttpClient::from_env())
    }

    /// The underlying HTTP client, for endpoints without a typed wrapper
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Backend origin for the next request
    pub fn base_url(&self) -> String {
        self.http.base_url()
    }

    /// Check that the backend is up
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthResponse> {
        let body = self.http.get(HEALTH_PATH, None).await?;
        parse_body(body)
    }

    /// Create a user account and return its access token
    ///
    /// The request is validated locally first; an existing account is
    /// reported by the backend as `User already exists`.
    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn signup(&self, request: &SignupRequest) -> Result<TokenResponse> {
        request.validate()?;

        let body = self.http.post(SIGNUP_PATH, Some(request), None).await?;
        let token: TokenResponse = parse_body(body)?;

        tracing::info!("Signed up {}", request.email);
        Ok(token)
    }

    /// Authenticate and return an access token
    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<TokenResponse> {
        let body = self.http.post(LOGIN_PATH, Some(request), None).await?;
        let token: TokenResponse = parse_body(body)?;

        tracing::debug!("Logged in {}", request.email);
        Ok(token)
    }

    /// The user the token was issued for
    #[instrument(skip_all)]
    pub async fn me(&self, token: &str) -> Result<CurrentUser> {
        let body = self.http.get(ME_PATH, Some(token)).await?;
        parse_body(body)
    }
}

fn parse_body<T>(body: ResponseBody) -> Result<T>
where
    T: DeserializeOwned,
{
    match body {
        ResponseBody::Json(value) => serde_json::from_value(value).map_err(Error::from),
        ResponseBody::Text(text) => {
            tracing::error!("Expected a JSON body, got: {}", text);
            Err(Error::UnexpectedBody(text))
        }
    }
}
