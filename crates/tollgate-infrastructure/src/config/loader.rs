//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::{AppConfig, PasswordAlgorithm};
use crate::constants::{
    BCRYPT_MAX_COST, BCRYPT_MIN_COST, CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR,
    DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME, JWT_MIN_SECRET_LENGTH,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};
use tollgate_domain::constants::{PASSWORD_MIN_LENGTH, SUPPORTED_TOKEN_ALGORITHMS};
use tollgate_domain::error::{Error, Result};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `TOLLGATE__SERVER__PORT`)
    ///
    /// Nothing is logged here since logging is configured from the result;
    /// report [`config_source`](Self::config_source) once a subscriber is installed.
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(path) = self.config_source().filter(|path| path.exists()) {
            figment = figment.merge(Toml::file(path));
        }

        // Double underscore separates nesting so single underscores stay in key names
        let prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// File `load` reads from
    ///
    /// The explicit path when one was set, even if it does not exist;
    /// otherwise the first existing default location.
    pub fn config_source(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_jwt_config(config)?;
    validate_session_config(config)?;
    validate_password_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_jwt_config(config: &AppConfig) -> Result<()> {
    let jwt = &config.auth.jwt;
    if jwt.secret.is_empty() {
        return Err(Error::configuration(
            "JWT secret cannot be empty; set auth.jwt.secret or TOLLGATE__AUTH__JWT__SECRET",
        ));
    }
    if jwt.secret.len() < JWT_MIN_SECRET_LENGTH {
        return Err(Error::configuration(format!(
            "JWT secret should be at least {JWT_MIN_SECRET_LENGTH} characters long"
        )));
    }
    if !SUPPORTED_TOKEN_ALGORITHMS.contains(&jwt.algorithm.as_str()) {
        return Err(Error::configuration(format!(
            "Unsupported JWT algorithm: {}. Use one of {}",
            jwt.algorithm,
            SUPPORTED_TOKEN_ALGORITHMS.join(", ")
        )));
    }
    if jwt.expiration_secs == 0 {
        return Err(Error::configuration("JWT expiration cannot be 0"));
    }
    Ok(())
}

fn validate_session_config(config: &AppConfig) -> Result<()> {
    let session = &config.auth.session;
    if session.ttl_secs == 0 {
        return Err(Error::configuration("Session TTL cannot be 0"));
    }
    if session.operation_timeout_ms == 0 {
        return Err(Error::configuration(
            "Session operation timeout cannot be 0",
        ));
    }
    Ok(())
}

fn validate_password_config(config: &AppConfig) -> Result<()> {
    let password = &config.auth.password;
    match password.algorithm {
        PasswordAlgorithm::Bcrypt
            if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&password.work_factor) =>
        {
            return Err(Error::configuration(format!(
                "bcrypt cost must be between {BCRYPT_MIN_COST} and {BCRYPT_MAX_COST}, got {}",
                password.work_factor
            )));
        }
        PasswordAlgorithm::Argon2 if password.work_factor == 0 => {
            return Err(Error::configuration(
                "Argon2 iteration count cannot be 0",
            ));
        }
        _ => {}
    }
    if password.min_length < PASSWORD_MIN_LENGTH {
        return Err(Error::configuration(format!(
            "Minimum password length must be at least {PASSWORD_MIN_LENGTH}, got {}",
            password.min_length
        )));
    }
    Ok(())
}
