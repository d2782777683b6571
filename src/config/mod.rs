//! Scanner configuration: optional JSON file, overridden by environment variables.

use std::env;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::services::bybit::DEFAULT_BASE_URL;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_TIMEFRAMES: [&str; 5] = ["5m", "15m", "1h", "4h", "1d"];
pub const DEFAULT_SCAN_INTERVAL_SECONDS: u64 = 60;
pub const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 8;
pub const DEFAULT_CONCURRENCY: usize = 4;
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Deployment environment (`APP_ENV`), defaults to `sandbox`
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .ok()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScannerConfig {
    pub symbols: Vec<String>,
    pub timeframes: Vec<String>,
    pub scan_interval: Duration,
    pub fetch_timeout: Duration,
    /// Maximum pairs fetched and scored at the same time within a pass
    pub concurrency: usize,
    pub bybit_base_url: String,
    pub port: u16,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            timeframes: DEFAULT_TIMEFRAMES.iter().map(|s| s.to_string()).collect(),
            scan_interval: Duration::from_secs(DEFAULT_SCAN_INTERVAL_SECONDS),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECONDS),
            concurrency: DEFAULT_CONCURRENCY,
            bybit_base_url: DEFAULT_BASE_URL.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// On-disk shape, every key optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    pub symbols: Option<Vec<String>>,
    pub timeframes: Option<Vec<String>>,
    pub scan_interval_seconds: Option<u64>,
    pub fetch_timeout_seconds: Option<u64>,
    pub concurrency: Option<usize>,
    pub bybit_base_url: Option<String>,
    pub port: Option<u16>,
}

impl FileConfig {
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&raw, path)
    }

    fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

impl ScannerConfig {
    /// Load `CONFIG_PATH` (default `config.json`) when present, then apply
    /// environment overrides and validate.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env_str("CONFIG_PATH").unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
        let path = Path::new(&path);

        let file = if path.exists() {
            FileConfig::read(path)?
        } else {
            FileConfig::default()
        };

        let config = Self::default().merge_file(file).merge_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn merge_file(mut self, file: FileConfig) -> Self {
        if let Some(symbols) = file.symbols {
            self.symbols = symbols;
        }
        if let Some(timeframes) = file.timeframes {
            self.timeframes = timeframes;
        }
        if let Some(secs) = file.scan_interval_seconds {
            self.scan_interval = Duration::from_secs(secs);
        }
        if let Some(secs) = file.fetch_timeout_seconds {
            self.fetch_timeout = Duration::from_secs(secs);
        }
        if let Some(concurrency) = file.concurrency {
            self.concurrency = concurrency;
        }
        if let Some(url) = file.bybit_base_url {
            self.bybit_base_url = url;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        self
    }

    fn merge_env(mut self) -> Result<Self, ConfigError> {
        if let Some(symbols) = env_str("SYMBOLS") {
            self.symbols = split_list(&symbols);
        }
        if let Some(timeframes) = env_str("TIMEFRAMES") {
            self.timeframes = split_list(&timeframes);
        }
        if let Some(secs) = env_parse::<u64>("SCAN_INTERVAL_SECONDS")? {
            self.scan_interval = Duration::from_secs(secs);
        }
        if let Some(secs) = env_parse::<u64>("FETCH_TIMEOUT_SECONDS")? {
            self.fetch_timeout = Duration::from_secs(secs);
        }
        if let Some(concurrency) = env_parse::<usize>("SCAN_CONCURRENCY")? {
            self.concurrency = concurrency;
        }
        if let Some(url) = env_str("BYBIT_BASE_URL") {
            self.bybit_base_url = url;
        }
        if let Some(port) = env_parse::<u16>("PORT")? {
            self.port = port;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "scan interval must be greater than 0".to_string(),
            ));
        }
        if self.fetch_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "fetch timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Every configured (symbol, timeframe) pair, symbol-major
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.symbols
            .iter()
            .flat_map(|symbol| {
                self.timeframes
                    .iter()
                    .map(move |tf| (symbol.clone(), tf.clone()))
            })
            .collect()
    }
}

fn env_str(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env_str(name) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Invalid(format!("{}='{}': {}", name, raw, e))),
        None => Ok(None),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
