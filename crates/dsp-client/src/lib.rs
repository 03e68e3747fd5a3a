//! Typed client for the DSP backend API
//!
//! Wraps the backend's public endpoints (health check, signup, login and the
//! current user) on top of [`dsp_http_client::HttpClient`]. Failed calls carry
//! the backend's `detail` message.
//!
//! ```no_run
//! use dsp_client::{DspClient, LoginRequest};
//!
//! # async fn example() -> dsp_client::Result<()> {
//! let client = DspClient::from_env();
//! let token = client
//!     .login(&LoginRequest::new("user@example.com", "secret"))
//!     .await?;
//! let me = client.me(&token.access_token).await?;
//! println!("{}", me.email);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use client::DspClient;
pub use dsp_http_client::{ClientConfig, EnvConfig, HttpClient, HttpError, ResponseBody};
pub use error::{Error, Result};
pub use types::{
    CurrentUser, HealthResponse, LoginRequest, SignupRequest, TokenResponse, MIN_PASSWORD_LEN,
};
