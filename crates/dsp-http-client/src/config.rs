//! Backend origin configuration

use std::env;
use std::fmt::Debug;

/// Origin used when no backend URL is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";

/// Environment variable holding the backend origin
pub const BACKEND_URL_ENV_VAR: &str = "DSP_BACKEND_URL";

/// Source of the configured backend origin
///
/// The client asks its source on every request, so a source that reads
/// mutable state (such as the process environment) is observed without
/// rebuilding the client.
pub trait ConfigSource: Debug + Send + Sync {
    /// The configured backend URL, if any. May be blank.
    fn backend_url(&self) -> Option<String>;
}

/// Fixed client configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    backend_url: Option<String>,
}

impl ClientConfig {
    /// Configuration pointing at `backend_url`
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: Some(backend_url.into()),
        }
    }

    /// Configuration from an optional value; `None` falls back to the default origin
    pub fn from_option(backend_url: Option<String>) -> Self {
        Self { backend_url }
    }
}

impl ConfigSource for ClientConfig {
    fn backend_url(&self) -> Option<String> {
        self.backend_url.clone()
    }
}

/// Configuration read from an environment variable on every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    var: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            var: BACKEND_URL_ENV_VAR.to_string(),
        }
    }
}

impl EnvConfig {
    /// Read the backend URL from `var` instead of [`BACKEND_URL_ENV_VAR`]
    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the environment variable this source reads
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl ConfigSource for EnvConfig {
    fn backend_url(&self) -> Option<String> {
        env::var(&self.var).ok()
    }
}

/// Resolve the backend origin from a configured value
///
/// Blankness is decided on the trimmed value, but a non-blank value is
/// returned exactly as configured.
pub fn resolve_base_url(configured: Option<&str>) -> String {
    match configured {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => DEFAULT_BACKEND_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absent_uses_default() {
        assert_eq!(resolve_base_url(None), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_resolve_blank_uses_default() {
        for blank in ["", " ", "\t", "  \n  "] {
            assert_eq!(resolve_base_url(Some(blank)), "http://localhost:3001");
        }
    }

    #[test]
    fn test_resolve_keeps_value_verbatim() {
        assert_eq!(
            resolve_base_url(Some("http://example.com")),
            "http://example.com"
        );
        // Padding is not trimmed from a non-blank value
        assert_eq!(
            resolve_base_url(Some(" http://example.com ")),
            " http://example.com "
        );
    }

    #[test]
    fn test_client_config_sources() {
        assert_eq!(ClientConfig::default().backend_url(), None);
        assert_eq!(
            ClientConfig::new("http://dsp.internal").backend_url(),
            Some("http://dsp.internal".to_string())
        );
        assert_eq!(ClientConfig::from_option(None), ClientConfig::default());
    }

    #[test]
    fn test_env_config_reads_on_every_call() {
        let source = EnvConfig::with_var("DSP_HTTP_CLIENT_TEST_ENV_CONFIG");
        env::remove_var(source.var());
        assert_eq!(source.backend_url(), None);

        env::set_var(source.var(), "http://first.example");
        assert_eq!(source.backend_url().as_deref(), Some("http://first.example"));

        env::set_var(source.var(), "http://second.example");
        assert_eq!(source.backend_url().as_deref(), Some("http://second.example"));

        env::remove_var(source.var());
    }

    #[test]
    fn test_env_config_default_var() {
        assert_eq!(EnvConfig::default().var(), BACKEND_URL_ENV_VAR);
    }
}
