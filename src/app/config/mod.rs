//! Application configuration loading and validation.
//!
//! Configuration is loaded from an optional TOML file. Secrets never come
//! from the file: `TOOLKIT_API_KEY` is read from the environment, and
//! `TRANSACTION_API_ENDPOINT` overrides `[transaction] endpoint`.

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use alloy_primitives::Address;
use serde::Deserialize;
use url::Url;

use crate::domain::{Token, TokenRegistry};
use crate::error::{ConfigError, Result};

mod logging;
mod toolkit;

pub use logging::LoggingConfig;
pub use toolkit::{ToolkitConfig, TransactionConfig};

pub const API_KEY_VAR: &str = "TOOLKIT_API_KEY";
pub const ENDPOINT_VAR: &str = "TRANSACTION_API_ENDPOINT";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub toolkit: ToolkitConfig,
    pub transaction: TransactionConfig,
    pub logging: LoggingConfig,
    /// Replaces the built-in Sepolia token table when present.
    pub tokens: Option<Vec<Token>>,
    /// Loaded from `TOOLKIT_API_KEY`, never from the file.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file, then apply environment overrides.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::from_toml(&content, env_var)
    }

    /// Built-in defaults plus environment overrides.
    #[allow(clippy::result_large_err)]
    pub fn from_env() -> Result<Self> {
        Self::from_toml("", env_var)
    }

    /// Load `path` when given, otherwise `./config.toml` when it exists,
    /// otherwise the defaults.
    #[allow(clippy::result_large_err)]
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new("config.toml").exists() => Self::load("config.toml"),
            None => Self::from_env(),
        }
    }

    /// Parse TOML content and apply overrides from `lookup`.
    ///
    /// `lookup` stands in for the process environment.
    #[allow(clippy::result_large_err)]
    pub fn from_toml<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        self.api_key = non_empty(API_KEY_VAR);
        if let Some(endpoint) = non_empty(ENDPOINT_VAR) {
            self.transaction.endpoint = endpoint;
        }
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        validate_url("api_url", &self.toolkit.api_url, &["http", "https"])?;
        validate_url("ws_url", &self.toolkit.ws_url, &["ws", "wss"])?;
        if !self.transaction.endpoint.is_empty() {
            validate_url("endpoint", &self.transaction.endpoint, &["http", "https"])?;
        }
        if self.transaction.platform.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "platform" }.into());
        }
        if self.toolkit.name.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "name" }.into());
        }
        if let Some(tokens) = &self.tokens {
            validate_tokens(tokens)?;
        }
        Ok(())
    }

    /// Ensure the values needed to talk to external services are present.
    ///
    /// Listing tokens or validating the file works without them; running or
    /// invoking actions does not.
    #[allow(clippy::result_large_err)]
    pub fn require_credentials(&self) -> Result<()> {
        if self.api_key.is_none() {
            return Err(ConfigError::MissingField { field: API_KEY_VAR }.into());
        }
        if self.transaction.endpoint.is_empty() {
            return Err(ConfigError::MissingField {
                field: ENDPOINT_VAR,
            }
            .into());
        }
        Ok(())
    }

    /// The API key, or a missing-field error.
    #[allow(clippy::result_large_err)]
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField { field: API_KEY_VAR }.into())
    }

    /// The active token table.
    #[must_use]
    pub fn token_registry(&self) -> TokenRegistry {
        match &self.tokens {
            Some(tokens) => TokenRegistry::new(tokens.iter().cloned()),
            None => TokenRegistry::sepolia(),
        }
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[allow(clippy::result_large_err)]
fn validate_url(field: &'static str, value: &str, schemes: &[&str]) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    if !schemes.contains(&url.scheme()) {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }
        .into());
    }
    Ok(())
}

#[allow(clippy::result_large_err)]
fn validate_tokens(tokens: &[Token]) -> Result<()> {
    if tokens.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "tokens",
            reason: "at least one token is required".into(),
        }
        .into());
    }

    let mut seen = HashSet::new();
    for token in tokens {
        let symbol = token.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "tokens",
                reason: format!("empty symbol for address {}", token.address),
            }
            .into());
        }
        if !seen.insert(symbol.clone()) {
            return Err(ConfigError::InvalidValue {
                field: "tokens",
                reason: format!("duplicate symbol {symbol}"),
            }
            .into());
        }
        Address::from_str(&token.address).map_err(|e| ConfigError::InvalidValue {
            field: "tokens",
            reason: format!("invalid address for {symbol}: {e}"),
        })?;
    }
    Ok(())
}
