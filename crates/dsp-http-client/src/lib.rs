//! HTTP client helper for the DSP backend
//!
//! This crate resolves the backend origin from a configuration source and
//! performs JSON-oriented GET and POST requests with an optional bearer token.
//! Success and error bodies are decoded by their declared content type: JSON
//! when the `content-type` header contains `application/json`, raw text
//! otherwise.
//!
//! # Example
//!
//! ```no_run
//! use dsp_http_client::{ClientConfig, HttpClient, ResponseBody};
//!
//! async fn example() -> Result<(), dsp_http_client::HttpError> {
//!     let client = HttpClient::new(ClientConfig::new("http://localhost:3001"));
//!
//!     match client.get("/me", Some("my-token")).await? {
//!         ResponseBody::Json(value) => println!("{value}"),
//!         ResponseBody::Text(text) => println!("{text}"),
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod response;

pub use client::HttpClient;
pub use config::{
    resolve_base_url, ClientConfig, ConfigSource, EnvConfig, BACKEND_URL_ENV_VAR,
    DEFAULT_BACKEND_URL,
};
pub use error::HttpError;
pub use response::{ErrorDetail, Response, ResponseBody};
