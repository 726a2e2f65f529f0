use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

use crate::{ENV_GUARD, api::ApiCommon, parse_from_env};

pub const CONFIG_FILE: &str = "lotto.toml";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_STORE_PATH: &str = "lotto_store.json";

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl ClientConfig {
    /// Resolve the config file and apply environment overrides.
    ///
    /// `LOTTO_CONFIG` names the file explicitly; otherwise `lotto.toml` next
    /// to the loaded `.env`, falling back to the working directory. A missing
    /// file means defaults, an unreadable one is an error.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        let mut config = if path.exists() {
            let config = Self::from_file(&path)?;
            log::debug!("Loaded config from: {}", path.display());
            config
        } else {
            log::debug!("Config file {} not found, using defaults", path.display());
            Self::default()
        };

        config.apply_overrides(|key| parse_from_env::<String>(key));
        Ok(config)
    }

    fn config_path() -> PathBuf {
        if let Some(path) = parse_from_env::<PathBuf>("LOTTO_CONFIG") {
            return path;
        }
        match ENV_GUARD.as_ref() {
            Ok(env_file) => env_file
                .parent()
                .map_or_else(|| PathBuf::from(CONFIG_FILE), |dir| dir.join(CONFIG_FILE)),
            Err(_) => PathBuf::from(CONFIG_FILE),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {path_str}"))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {path_str}"))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.api.timeout_ms == 0 {
            return Err(anyhow::anyhow!("api.timeout_ms must be greater than 0"));
        }
        Ok(config)
    }

    /// `LOTTO_API_URL`, `LOTTO_API_TIMEOUT_MS` and `LOTTO_STORE_PATH` win
    /// over the file
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("LOTTO_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup("LOTTO_API_TIMEOUT_MS") {
            match timeout.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => self.api.timeout_ms = ms,
                _ => log::warn!("Ignoring LOTTO_API_TIMEOUT_MS={timeout:?}"),
            }
        }
        if let Some(path) = lookup("LOTTO_STORE_PATH") {
            self.store.path = PathBuf::from(path);
        }
    }

    pub fn api_common(&self) -> ApiCommon {
        ApiCommon::new(
            self.api.base_url.clone(),
            Duration::from_millis(self.api.timeout_ms),
        )
    }
}
