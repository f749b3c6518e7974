//! Configuration management for qspin
//!
//! Settings live in `~/.qspin/config.toml`. Environment variables
//! (`QSPIN_API_URL`, `QSPIN_ENV`, `QSPIN_TOKEN`, `QSPIN_REFRESH_TOKEN`)
//! override the file.

mod credentials;

pub use credentials::{CredentialStore, Credentials};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "https://api.quickspin.cloud";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub defaults: DefaultsConfig,

    /// Where this config was loaded from. Not serialized.
    #[serde(skip)]
    config_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub url: String,
    pub environment: String,
    /// Per-environment URL overrides, e.g. `dev = "http://localhost:8000"`.
    pub environments: BTreeMap<String, String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let mut environments = BTreeMap::new();
        environments.insert("dev".to_string(), "http://localhost:8000".to_string());
        environments.insert(
            "staging".to_string(),
            "https://staging-api.quickspin.cloud".to_string(),
        );
        environments.insert("prod".to_string(), DEFAULT_API_URL.to_string());
        Self {
            url: DEFAULT_API_URL.to_string(),
            environment: "prod".to_string(),
            environments,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub region: String,
    pub output: String,
    pub service_type: String,
    pub tier: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            output: "table".to_string(),
            service_type: "redis".to_string(),
            tier: "developer".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing config file is not an error; defaults are used.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_dir())
    }

    /// Load configuration rooted at a specific directory (used by tests).
    pub fn load_from(config_dir: PathBuf) -> Result<Self> {
        let path = config_dir.join("config.toml");
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config file {}", path.display()))?
        } else {
            Config::default()
        };
        config.config_dir = Some(config_dir);
        Ok(config)
    }

    /// Write the configuration back to disk.
    pub fn save(&self) -> Result<()> {
        let dir = self.config_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
        let path = dir.join("config.toml");
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(&path, content)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        tracing::debug!("saved config to {}", path.display());
        Ok(())
    }

    /// Directory holding config and credentials.
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone().unwrap_or_else(default_config_dir)
    }

    /// Path to the config file itself.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir().join("config.toml")
    }

    /// Resolve the API base URL.
    ///
    /// Precedence: `QSPIN_API_URL`, then the URL mapped to the active
    /// environment, then `api.url`.
    pub fn api_url(&self) -> String {
        if let Ok(url) = std::env::var("QSPIN_API_URL") {
            if !url.is_empty() {
                return url;
            }
        }
        let env = self.environment();
        if let Some(url) = self.api.environments.get(&env) {
            if !url.is_empty() {
                return url.clone();
            }
        }
        if self.api.url.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            self.api.url.clone()
        }
    }

    /// Active environment name (`QSPIN_ENV` overrides the file).
    pub fn environment(&self) -> String {
        if let Ok(env) = std::env::var("QSPIN_ENV") {
            if !env.is_empty() {
                return env;
            }
        }
        if self.api.environment.is_empty() {
            "prod".to_string()
        } else {
            self.api.environment.clone()
        }
    }

    /// Request timeout for API calls.
    pub fn api_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.api.timeout_secs.max(1))
    }

    fn credential_store(&self) -> CredentialStore {
        CredentialStore::new(self.config_dir())
    }

    /// Stored access token, if any. `QSPIN_TOKEN` takes precedence.
    ///
    /// Absence is reported as `None`, never as an error.
    pub fn token(&self) -> Option<String> {
        if let Ok(token) = std::env::var("QSPIN_TOKEN") {
            if !token.is_empty() {
                return Some(token);
            }
        }
        self.credential_store()
            .load()
            .ok()
            .and_then(|c| c.access_token)
    }

    /// Stored refresh token, if any. `QSPIN_REFRESH_TOKEN` takes precedence.
    pub fn refresh_token(&self) -> Option<String> {
        if let Ok(token) = std::env::var("QSPIN_REFRESH_TOKEN") {
            if !token.is_empty() {
                return Some(token);
            }
        }
        self.credential_store()
            .load()
            .ok()
            .and_then(|c| c.refresh_token)
    }

    /// Persist a new access/refresh token pair.
    pub fn save_tokens(&self, access: &str, refresh: &str) -> Result<()> {
        self.credential_store().save(&Credentials {
            access_token: Some(access.to_string()),
            refresh_token: Some(refresh.to_string()),
        })
    }

    /// Remove stored credentials.
    pub fn clear_tokens(&self) -> Result<()> {
        self.credential_store().clear()
    }

    /// Restore default settings, keeping the load location.
    pub fn reset_defaults(&mut self) {
        self.api = ApiConfig::default();
        self.defaults = DefaultsConfig::default();
    }

    /// Look up a dotted config key, returning its TOML representation.
    pub fn get_value(&self, key: &str) -> Option<String> {
        let table = toml::Value::try_from(self).ok()?;
        let mut current = &table;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(match current {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Set a dotted config key to a string value.
    ///
    /// Only the known leaf keys are settable; unknown keys are rejected so a
    /// typo does not silently write a dead entry.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.url" => self.api.url = value.to_string(),
            "api.environment" => self.api.environment = value.to_string(),
            "api.timeout_secs" => {
                self.api.timeout_secs = value
                    .parse()
                    .with_context(|| format!("api.timeout_secs must be an integer, got {value:?}"))?
            }
            "defaults.region" => self.defaults.region = value.to_string(),
            "defaults.output" => self.defaults.output = value.to_string(),
            "defaults.service_type" => self.defaults.service_type = value.to_string(),
            "defaults.tier" => self.defaults.tier = value.to_string(),
            _ if key.starts_with("api.environments.") => {
                let env = key.trim_start_matches("api.environments.");
                self.api
                    .environments
                    .insert(env.to_string(), value.to_string());
            }
            _ => anyhow::bail!("unknown config key: {key}"),
        }
        Ok(())
    }
}

fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".qspin"))
        .unwrap_or_else(|| PathBuf::from(".qspin"))
}
