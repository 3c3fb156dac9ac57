//! Centralized server configuration.
//!
//! Strongly-typed configuration loaded via the `config` crate from an
//! optional TOML file and `LEXILINGUA__*` environment variables (the latter
//! win). Leptos site options (address, site root) are read separately from
//! `[package.metadata.leptos]`.

use lexilingua_core::{StageTimings, Theme, TimingError};
use rootcause::Report;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Environment variable naming an optional configuration file.
pub const CONFIG_PATH_ENV: &str = "LEXILINGUA_CONFIG";

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    /// Theme defaults and preference cookie settings.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Demo stage delays.
    #[serde(default)]
    pub demo: StageTimings,
}

/// Theme-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    /// Theme used when the visitor has no saved preference.
    #[serde(default)]
    pub default: Theme,

    /// Lifetime of the preference cookie, in days.
    #[serde(default = "default_cookie_max_age_days")]
    pub cookie_max_age_days: i64,

    /// Whether to set the Secure flag on cookies (requires HTTPS).
    /// Set to false for plain-HTTP deployments other than localhost.
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,
}

fn default_cookie_max_age_days() -> i64 {
    365
}

fn default_secure_cookies() -> bool {
    true
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: Theme::default(),
            cookie_max_age_days: default_cookie_max_age_days(),
            secure_cookies: default_secure_cookies(),
        }
    }
}

/// Configuration loading errors.
#[derive(Debug)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    Load { details: String },
    /// A value was read but is out of range.
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { details } => write!(f, "failed to load configuration: {}", details),
            Self::Invalid { field, reason } => {
                write!(f, "invalid configuration value '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(e: config::ConfigError) -> Self {
        Self::Load {
            details: e.to_string(),
        }
    }
}

impl From<Report<TimingError>> for ConfigError {
    fn from(e: Report<TimingError>) -> Self {
        Self::Invalid {
            field: "demo",
            reason: e.to_string(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the file named by [`CONFIG_PATH_ENV`] (if
    /// set) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is unreadable or a value is invalid.
    pub fn from_env() -> Result<Self, Report<ConfigError>> {
        let path = std::env::var_os(CONFIG_PATH_ENV);
        Self::load(path.as_deref().map(Path::new))
    }

    /// Loads configuration from an optional file plus the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is unreadable or a value is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, Report<ConfigError>> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(
                config::Environment::with_prefix("LEXILINGUA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(ConfigError::from)?
            .try_deserialize()
            .map_err(ConfigError::from)?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Report<ConfigError>> {
        if self.theme.cookie_max_age_days <= 0 {
            return Err(ConfigError::Invalid {
                field: "theme.cookie_max_age_days",
                reason: format!("must be positive, got {}", self.theme.cookie_max_age_days),
            }
            .into());
        }
        self.demo.validate().map_err(ConfigError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("create temp config");
        file.write_all(contents.as_bytes()).expect("write temp config");
        file
    }

    #[test]
    fn theme_config_has_correct_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.default, Theme::Light);
        assert_eq!(config.cookie_max_age_days, 365);
        assert!(config.secure_cookies);
    }

    #[test]
    fn server_config_defaults_to_stock_demo_timings() {
        let config = ServerConfig::default();
        assert_eq!(config.demo, StageTimings::default());
    }

    #[test]
    fn loads_values_from_file() {
        let file = write_config(
            r#"
            [theme]
            default = "dark"
            secure_cookies = false

            [demo]
            analysis_delay_ms = 1500
            "#,
        );

        let config = ServerConfig::load(Some(file.path())).expect("config loads");
        assert_eq!(config.theme.default, Theme::Dark);
        assert!(!config.theme.secure_cookies);
        assert_eq!(config.theme.cookie_max_age_days, 365);
        assert_eq!(config.demo.upload_delay_ms, 2_000);
        assert_eq!(config.demo.analysis_delay_ms, 1_500);
    }

    #[test]
    fn rejects_unknown_theme() {
        let file = write_config("[theme]\ndefault = \"sepia\"\n");
        let err = ServerConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("failed to load configuration"));
    }

    #[test]
    fn rejects_non_positive_cookie_age() {
        let file = write_config("[theme]\ncookie_max_age_days = 0\n");
        let err = ServerConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("theme.cookie_max_age_days"));
    }

    #[test]
    fn rejects_excessive_demo_delay() {
        let file = write_config("[demo]\nupload_delay_ms = 600000\n");
        let err = ServerConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("upload delay"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("absent.toml");
        assert!(ServerConfig::load(Some(&path)).is_err());
    }
}
