use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("remote.failure_rate must be within 0.0..=1.0, got {0}")]
    FailureRate(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub remote: RemoteConfig,
    pub notice: NoticeConfig,
    /// Upper bound on how long the loop blocks waiting for work.
    pub poll_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub delay_ms: u64,
    pub failure_rate: f64,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    pub display_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: RemoteConfig::default(),
            notice: NoticeConfig::default(),
            poll_interval_ms: 120,
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            delay_ms: 500,
            failure_rate: 0.3,
            seed: None,
        }
    }
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self { display_ms: 5000 }
    }
}

impl Config {
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rate = self.remote.failure_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(ConfigError::FailureRate(rate));
        }
        Ok(())
    }

    pub fn notice_display(&self) -> Duration {
        Duration::from_millis(self.notice.display_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = Config::from_yaml_str("{}").expect("config");
        assert_eq!(config, Config::default());
        assert_eq!(config.notice_display(), Duration::from_millis(5000));
        assert_eq!(config.remote.delay_ms, 500);
        assert_eq!(config.remote.failure_rate, 0.3);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let raw = "remote:\n  failure_rate: 0.0\n  seed: 9\nnotice:\n  display_ms: 250\n";
        let config = Config::from_yaml_str(raw).expect("config");
        assert_eq!(config.remote.failure_rate, 0.0);
        assert_eq!(config.remote.seed, Some(9));
        assert_eq!(config.remote.delay_ms, 500);
        assert_eq!(config.notice_display(), Duration::from_millis(250));
    }

    #[test]
    fn rejects_out_of_range_failure_rate() {
        let err = Config::from_yaml_str("remote:\n  failure_rate: 1.5\n").expect_err("invalid");
        assert!(matches!(err, ConfigError::FailureRate(rate) if rate == 1.5));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = Config::from_yaml_str("remote: [").expect_err("invalid");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::load("/nonexistent/account-form.yaml").expect_err("missing");
        assert!(err.to_string().contains("/nonexistent/account-form.yaml"));
    }
}
