//! Service configuration. JSON file with per-section defaults, plus env overrides.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "RISK_SCORER_CONFIG_PATH";
pub const MODEL_PATH_ENV: &str = "RISK_SCORER_MODEL_PATH";
pub const BIND_ENV: &str = "RISK_SCORER_BIND";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Trained classifier artifact (.onnx, or .json logistic coefficients)
    pub model_path: PathBuf,
    /// How to read the probability out of the model
    pub model: ModelConfig,
    /// HTTP listener
    pub server: ServerConfig,
    /// Risk tier thresholds
    pub risk: RiskConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// ONNX output holding class probabilities; last output when unset
    pub output_name: Option<String>,
    /// Column of the fraud class in a `[1, n_classes]` probability output
    pub positive_class: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Probability strictly above this is high risk (0.0–1.0)
    pub high_threshold: f64,
    /// Probability strictly above this (and not high) is medium risk
    pub medium_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model/best_model.onnx"),
            model: ModelConfig::default(),
            server: ServerConfig::default(),
            risk: RiskConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            output_name: None,
            positive_class: 1,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            high_threshold: 0.6,
            medium_threshold: 0.3,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl RiskConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_range = |t: f64| (0.0..=1.0).contains(&t);
        if !in_range(self.high_threshold) || !in_range(self.medium_threshold) {
            return Err(ConfigError::Thresholds(format!(
                "thresholds must lie in [0, 1] (medium={}, high={})",
                self.medium_threshold, self.high_threshold
            )));
        }
        if self.medium_threshold > self.high_threshold {
            return Err(ConfigError::Thresholds(format!(
                "medium threshold {} exceeds high threshold {}",
                self.medium_threshold, self.high_threshold
            )));
        }
        Ok(())
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ScorerConfig {
    /// Load from JSON file if present; otherwise return default.
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ScorerConfig =
            serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.risk.validate()?;
        Ok(config)
    }

    /// Resolve config path from the environment, load it, then apply env overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.json"));
        let mut config = Self::load(&path)?;
        config.apply_overrides(
            std::env::var(MODEL_PATH_ENV).ok(),
            std::env::var(BIND_ENV).ok(),
        )?;
        Ok(config)
    }

    /// `bind` is `host:port`; a value without a port only replaces the host.
    /// A port that does not parse as u16 is rejected.
    pub fn apply_overrides(
        &mut self,
        model_path: Option<String>,
        bind: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(p) = model_path.filter(|p| !p.is_empty()) {
            self.model_path = PathBuf::from(p);
        }
        if let Some(b) = bind.filter(|b| !b.is_empty()) {
            match b.rsplit_once(':') {
                Some((host, port)) => {
                    self.server.port = port.parse().map_err(|_| {
                        ConfigError::Bind(format!("{}: port `{}` is not a valid u16", b, port))
                    })?;
                    if !host.is_empty() {
                        self.server.host = host.to_string();
                    }
                }
                None => self.server.host = b,
            }
        }
        Ok(())
    }
}
