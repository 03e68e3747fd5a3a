//! HTTP client wrapper

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{resolve_base_url, ConfigSource, EnvConfig};
use crate::error::HttpError;
use crate::response::{is_json_content_type, is_ok_status, ErrorDetail, Response, ResponseBody};

/// HTTP client for the DSP backend
///
/// Every call resolves the base URL from the client's [`ConfigSource`], so
/// calls never share per-request state and may run concurrently.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: Arc<dyn ConfigSource>,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::from_env()
    }
}

impl HttpClient {
    /// Create a new HTTP client reading the backend URL from `config`
    pub fn new(config: impl ConfigSource + 'static) -> Self {
        Self {
            inner: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }

    /// Create a client reading `DSP_BACKEND_URL` on every request
    pub fn from_env() -> Self {
        Self::new(EnvConfig::default())
    }

    /// Backend origin for the next request
    pub fn base_url(&self) -> String {
        resolve_base_url(self.config.backend_url().as_deref())
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// GET `path`, decoding the body by its content type
    ///
    /// A non-empty `token` is sent as `Authorization: Bearer <token>`.
    pub async fn get(&self, path: &str, token: Option<&str>) -> Response<ResponseBody> {
        let url = self.url_for(path);
        tracing::debug!("GET {}", url);

        let request = with_bearer(self.inner.get(&url), token);
        send(request).await
    }

    /// POST `body` as JSON to `path`, decoding the body by its content type
    ///
    /// A missing body, or one that serializes to `null`, is sent as `{}`.
    pub async fn post<B>(
        &self,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Response<ResponseBody>
    where
        B: Serialize + ?Sized,
    {
        let payload = json_payload(body)?;
        let url = self.url_for(path);
        tracing::debug!("POST {}", url);

        let request = self
            .inner
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        send(with_bearer(request, token)).await
    }

    /// GET request, returns the body deserialized to R
    pub async fn get_json<R>(&self, path: &str, token: Option<&str>) -> Response<R>
    where
        R: DeserializeOwned,
    {
        self.get(path, token).await?.deserialize()
    }

    /// POST with JSON body, returns the body deserialized to R
    pub async fn post_json<B, R>(&self, path: &str, body: &B, token: Option<&str>) -> Response<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.post(path, Some(body), token).await?.deserialize()
    }
}

fn with_bearer(request: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token.filter(|token| !token.is_empty()) {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

fn json_payload<B>(body: Option<&B>) -> Response<String>
where
    B: Serialize + ?Sized,
{
    let payload = match body {
        Some(body) => serde_json::to_string(body)?,
        None => return Ok("{}".to_string()),
    };

    if payload == "null" {
        Ok("{}".to_string())
    } else {
        Ok(payload)
    }
}

async fn send(request: reqwest::RequestBuilder) -> Response<ResponseBody> {
    let response = request.send().await?;
    let status = response.status();
    let is_json = is_json_content_type(response.headers());
    let text = response.text().await?;

    if !is_ok_status(status) {
        let detail = ErrorDetail::from_body(ResponseBody::decode_lossy(is_json, text));
        let message = detail.message();
        tracing::debug!("Request failed ({}): {}", status, message);
        return Err(HttpError::Status {
            status: status.as_u16(),
            message,
        });
    }

    ResponseBody::decode(is_json, text)
}
