use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Base URL of the recipe API
    pub api_url: ConfigValue<String>,
    /// Where the signed-in session is stored
    pub session_path: ConfigValue<PathBuf>,
    /// Per-request timeout in seconds (none: wait indefinitely)
    pub request_timeout_secs: ConfigValue<Option<u64>>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    api_url: Option<String>,
    session_path: Option<PathBuf>,
    request_timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, |name| std::env::var(name).ok())
    }

    /// Like [`Config::load`], reading environment variables through `env`.
    pub fn load_with_env<F>(config_path: Option<PathBuf>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut api_url = ConfigValue::new(DEFAULT_API_URL.to_string(), ConfigSource::Default);
        let mut session_path = ConfigValue::new(
            Self::default_data_dir().join("session.yaml"),
            ConfigSource::Default,
        );
        let mut request_timeout_secs = ConfigValue::new(None, ConfigSource::Default);
        let mut config_file = None;

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(url) = file_config.api_url {
                api_url = ConfigValue::new(url, ConfigSource::File);
            }
            if let Some(session) = file_config.session_path {
                // Resolve relative paths against config file's directory
                let resolved = if session.is_relative() {
                    path.parent().map(|p| p.join(&session)).unwrap_or(session)
                } else {
                    session
                };
                session_path = ConfigValue::new(resolved, ConfigSource::File);
            }
            if let Some(secs) = file_config.request_timeout_secs {
                request_timeout_secs = ConfigValue::new(Some(secs), ConfigSource::File);
            }
        }

        // Apply environment variable overrides
        if let Some(url) = env("RECIPEBOOK_API_URL") {
            api_url = ConfigValue::new(url, ConfigSource::Environment);
        }
        if let Some(session) = env("RECIPEBOOK_SESSION_PATH") {
            session_path = ConfigValue::new(PathBuf::from(session), ConfigSource::Environment);
        }
        if let Some(secs) = env("RECIPEBOOK_REQUEST_TIMEOUT") {
            let secs = secs
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue("RECIPEBOOK_REQUEST_TIMEOUT", secs))?;
            request_timeout_secs = ConfigValue::new(Some(secs), ConfigSource::Environment);
        }

        Ok(Self {
            api_url,
            session_path,
            request_timeout_secs,
            config_file,
        })
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.value.map(Duration::from_secs)
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/recipebook/
    /// - macOS: ~/Library/Application Support/recipebook/
    /// - Windows: %APPDATA%/recipebook/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recipebook")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/recipebook/
    /// - macOS: ~/Library/Application Support/recipebook/
    /// - Windows: %APPDATA%/recipebook/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recipebook")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidValue(&'static str, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::InvalidValue(name, value) => {
                write!(f, "Invalid value for {}: '{}'", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
