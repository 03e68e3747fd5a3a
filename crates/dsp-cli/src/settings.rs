//! CLI settings

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Directory under the home directory holding the default config file
pub const DEFAULT_WORK_DIR: &str = ".dsp-cli";

/// File name of the default config file
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings read from the config file
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend origin
    pub backend_url: Option<String>,
    /// Bearer token for authenticated calls
    pub token: Option<String>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("backend_url", &self.backend_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Settings {
    /// Load settings from `config_file`, or from the default location
    ///
    /// An explicitly given file must exist; the default file is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        match config_file {
            Some(path) => Self::from_file(path, true),
            None => match default_config_path() {
                Some(path) => Self::from_file(&path, false),
                None => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .build()?;

        config.try_deserialize()
    }

    /// Override file values with values given on the command line or in the environment
    ///
    /// Blank overrides are ignored so an empty `DSP_BACKEND_URL` keeps the file value.
    pub fn with_overrides(mut self, backend_url: Option<String>, token: Option<String>) -> Self {
        if let Some(backend_url) = non_blank(backend_url) {
            self.backend_url = Some(backend_url);
        }
        if let Some(token) = non_blank(token) {
            self.token = Some(token);
        }
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// `~/.dsp-cli/config.toml`, if the home directory is known
pub fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(DEFAULT_WORK_DIR).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("Temp file should be created");
        file.write_all(contents.as_bytes())
            .expect("Temp file should be writable");
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
backend_url = "http://10.45.30.64"
token = "jwt"
"#,
        );

        let settings = Settings::load(Some(file.path())).expect("Settings should load");
        assert_eq!(settings.backend_url.as_deref(), Some("http://10.45.30.64"));
        assert_eq!(settings.token.as_deref(), Some("jwt"));
    }

    #[test]
    fn test_load_partial_file() {
        let file = write_config("backend_url = \"http://example.com\"\n");

        let settings = Settings::load(Some(file.path())).expect("Settings should load");
        assert_eq!(settings.backend_url.as_deref(), Some("http://example.com"));
        assert_eq!(settings.token, None);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("Temp dir should be created");
        let missing = dir.path().join("missing.toml");

        assert!(Settings::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let settings = Settings {
            backend_url: Some("http://from-file".to_string()),
            token: Some("file-token".to_string()),
        };

        let merged = settings
            .clone()
            .with_overrides(Some("http://from-cli".to_string()), None);
        assert_eq!(merged.backend_url.as_deref(), Some("http://from-cli"));
        assert_eq!(merged.token.as_deref(), Some("file-token"));

        assert_eq!(settings.clone().with_overrides(None, None), settings);
    }

    #[test]
    fn test_blank_override_keeps_file_value() {
        let file = write_config(
            r#"
backend_url = "http://from-file"
token = "file-token"
"#,
        );

        let settings = Settings::load(Some(file.path()))
            .expect("Settings should load")
            .with_overrides(Some("   ".to_string()), Some(String::new()));

        assert_eq!(settings.backend_url.as_deref(), Some("http://from-file"));
        assert_eq!(settings.token.as_deref(), Some("file-token"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let settings = Settings {
            backend_url: None,
            token: Some("super-secret".to_string()),
        };
        let debug = format!("{settings:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
