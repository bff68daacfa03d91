//! olscheck Configuration
//!
//! Where to find the service, how to run kubeconform and where run
//! artifacts go. Config file: ./olscheck.toml or an explicit --config path.
//!
//! Precedence: CLI flags > OLSCHECK_BASE_URL > config file > defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default OLS base URL
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Default kubeconform image
pub const DEFAULT_IMAGE: &str = "ghcr.io/yannh/kubeconform:latest";

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "olscheck.toml";

/// Environment variable overriding the service base URL
pub const BASE_URL_ENV: &str = "OLSCHECK_BASE_URL";

/// Service under test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Root URL; health is GET on it, queries POST to `<base_url>/ols`
    pub base_url: String,

    /// Request timeout. Unset means reqwest's default.
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Containerized kubeconform settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Container runtime binary (docker, podman)
    pub runtime: String,

    /// kubeconform image reference
    pub image: String,

    /// Directory mounted at /data inside the container
    pub work_dir: PathBuf,

    /// Scratch file name inside work_dir, overwritten for every prompt
    pub temp_file: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            runtime: "docker".to_string(),
            image: DEFAULT_IMAGE.to_string(),
            work_dir: PathBuf::from("."),
            temp_file: "temp.yaml".to_string(),
        }
    }
}

/// Run inputs and outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// JSON array of {prompt, expected_kind}
    pub prompts: PathBuf,

    /// Report written at the end of a run
    pub report: PathBuf,

    /// Pull the validator image before the first prompt
    pub pull_image: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            prompts: PathBuf::from("prompts.json"),
            report: PathBuf::from("validation_report.json"),
            pull_image: true,
        }
    }
}

/// Main olscheck configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OlsCheckConfig {
    pub service: ServiceConfig,
    pub validator: ValidatorConfig,
    pub run: RunConfig,
}

impl OlsCheckConfig {
    /// Load configuration
    ///
    /// Priority:
    /// 1. Explicit path (must exist)
    /// 2. ./olscheck.toml if present
    /// 3. Defaults
    ///
    /// OLSCHECK_BASE_URL is applied on top of whichever source won.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::load_from(path)?,
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    Self::load_from(local)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_base_url_override(std::env::var(BASE_URL_ENV).ok());
        Ok(config)
    }

    /// Read and parse one TOML file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Replace the base URL when an override is present and non-empty
    pub fn apply_base_url_override(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.service.base_url = url;
        }
    }
}
