use crate::error::{GranskaError, Result};
use serde::Deserialize;
use std::env;
use std::path::Path;

pub const DEFAULT_API_URL: &str = "https://api.granska.dev/v1";

/// Connection settings for the test service. Built-in defaults, then an
/// optional `granska.yml`, then `GRANSKA_API` / `GRANSKA_TOKEN` /
/// `GRANSKA_ORG` environment overrides, later wins.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_token: Option<String>,
    pub org: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_url: Option<String>,
    api_token: Option<String>,
    org: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            org: None,
        }
    }
}

impl Config {
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();
        if let Some(path) = file {
            config.apply_file(path)?;
        }
        config.apply_env();
        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(GranskaError::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile =
            serde_yaml::from_str(&content).map_err(|e| GranskaError::InvalidConfig {
                message: format!("{}: {}", path.display(), e),
            })?;

        if let Some(api_url) = file.api_url {
            self.api_url = api_url;
        }
        if file.api_token.is_some() {
            self.api_token = file.api_token;
        }
        if file.org.is_some() {
            self.org = file.org;
        }
        Ok(())
    }

    fn apply_env(&mut self) {
        if let Ok(api_url) = env::var("GRANSKA_API") {
            self.api_url = api_url;
        }
        if let Ok(token) = env::var("GRANSKA_TOKEN") {
            self.api_token = Some(token);
        }
        if let Ok(org) = env::var("GRANSKA_ORG") {
            self.org = Some(org);
        }
    }

    /// The API token, or `MissingApiToken` when none is configured.
    pub fn require_token(&self) -> Result<&str> {
        self.api_token.as_deref().ok_or(GranskaError::MissingApiToken)
    }
}
