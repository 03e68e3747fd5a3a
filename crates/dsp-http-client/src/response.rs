//! HTTP response types

use std::fmt;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::HttpError;

/// HTTP Response type - generic over the body type R and error type E
/// This is the primary return type for all HTTP operations
pub type Response<R, E = HttpError> = Result<R, E>;

const JSON_MEDIA_TYPE: &str = "application/json";

/// A response body decoded by its declared content type
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Body of a response declared as `application/json`
    Json(Value),
    /// Body of any other response, as raw text
    Text(String),
}

impl ResponseBody {
    /// Decode `text` as JSON when `is_json`, otherwise keep it as text
    pub(crate) fn decode(is_json: bool, text: String) -> Response<Self> {
        if is_json {
            Ok(Self::Json(serde_json::from_str(&text)?))
        } else {
            Ok(Self::Text(text))
        }
    }

    /// Like [`ResponseBody::decode`], but a JSON-declared body that does not
    /// parse is kept as text
    pub(crate) fn decode_lossy(is_json: bool, text: String) -> Self {
        if is_json {
            match serde_json::from_str(&text) {
                Ok(value) => Self::Json(value),
                Err(_) => Self::Text(text),
            }
        } else {
            Self::Text(text)
        }
    }

    /// Whether the body was decoded as JSON
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// The JSON value, if the body was decoded as JSON
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// The raw text, if the body was not JSON
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Convert into a JSON value; text becomes a JSON string
    pub fn into_value(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Text(text) => Value::String(text),
        }
    }

    /// Deserialize the body into `T`
    pub fn deserialize<T: DeserializeOwned>(self) -> Response<T> {
        serde_json::from_value(self.into_value()).map_err(HttpError::from)
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Detail carried by a failed response
///
/// Backends usually wrap the detail in a `detail` field; when that field is
/// missing or `null` the whole body is the detail.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetail {
    /// Human readable detail
    Message(String),
    /// Any other JSON detail
    Structured(Value),
}

impl ErrorDetail {
    /// Extract the detail from a decoded error body
    pub fn from_body(body: ResponseBody) -> Self {
        match body {
            ResponseBody::Text(text) => Self::Message(text),
            ResponseBody::Json(value) => match value.get("detail").filter(|d| !d.is_null()) {
                Some(detail) => Self::from_value(detail.clone()),
                None => Self::from_value(value),
            },
        }
    }

    fn from_value(value: Value) -> Self {
        match value {
            Value::String(message) => Self::Message(message),
            other => Self::Structured(other),
        }
    }

    /// Error message: a string detail as-is, anything else serialized as JSON
    pub fn message(&self) -> String {
        match self {
            Self::Message(message) => message.clone(),
            Self::Structured(value) => value.to_string(),
        }
    }
}

/// Whether the response headers declare a JSON body
///
/// A missing or non-ASCII `content-type` counts as not JSON.
pub(crate) fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase()
        .contains(JSON_MEDIA_TYPE)
}

/// Whether a status counts as ok: 2xx and 3xx
pub(crate) fn is_ok_status(status: StatusCode) -> bool {
    status.is_success() || status.is_redirection()
}
