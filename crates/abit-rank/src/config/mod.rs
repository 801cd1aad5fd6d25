use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://abitlk.itmo.ru/api/v1/rating/master/budget";
pub const DEFAULT_PROGRAM_ID: u32 = 7431;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub source: SourceConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("ABIT_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let api_url = env::var("ABIT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        validate_api_url(&api_url)?;

        let default_program_id = match env::var("ABIT_PROGRAM_ID") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidProgramId { value: raw })?,
            Err(_) => DEFAULT_PROGRAM_ID,
        };

        let timeout_secs = match env::var("ABIT_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout { value: raw })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let log_level = env::var("ABIT_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            source: SourceConfig {
                api_url,
                default_program_id,
                timeout: Duration::from_secs(timeout_secs),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings for reaching the admissions rating API.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub api_url: String,
    pub default_program_id: u32,
    pub timeout: Duration,
}

impl SourceConfig {
    pub fn set_api_url(&mut self, api_url: String) -> Result<(), ConfigError> {
        validate_api_url(&api_url)?;
        self.api_url = api_url;
        Ok(())
    }
}

fn validate_api_url(value: &str) -> Result<(), ConfigError> {
    if value.starts_with("https://") || value.starts_with("http://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidApiUrl {
            value: value.to_string(),
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidProgramId { value: String },
    InvalidTimeout { value: String },
    InvalidApiUrl { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidProgramId { value } => {
                write!(f, "ABIT_PROGRAM_ID must be a positive integer, got '{value}'")
            }
            ConfigError::InvalidTimeout { value } => write!(
                f,
                "ABIT_HTTP_TIMEOUT_SECS must be a positive number of seconds, got '{value}'"
            ),
            ConfigError::InvalidApiUrl { value } => {
                write!(f, "API url must start with http:// or https://, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("ABIT_ENV");
        env::remove_var("ABIT_API_URL");
        env::remove_var("ABIT_PROGRAM_ID");
        env::remove_var("ABIT_HTTP_TIMEOUT_SECS");
        env::remove_var("ABIT_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.source.api_url, DEFAULT_API_URL);
        assert_eq!(config.source.default_program_id, 7431);
        assert_eq!(config.source.timeout, Duration::from_secs(30));
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn reads_overrides_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ABIT_ENV", "prod");
        env::set_var("ABIT_PROGRAM_ID", " 1234 ");
        env::set_var("ABIT_HTTP_TIMEOUT_SECS", "5");
        let config = AppConfig::load().expect("config loads");
        reset_env();
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.source.default_program_id, 1234);
        assert_eq!(config.source.timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_zero_timeout() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ABIT_HTTP_TIMEOUT_SECS", "0");
        let result = AppConfig::load();
        reset_env();
        assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
    }

    #[test]
    fn rejects_non_http_api_url() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ABIT_API_URL", "ftp://example.org/rating");
        let result = AppConfig::load();
        reset_env();
        assert!(matches!(result, Err(ConfigError::InvalidApiUrl { .. })));
    }

    #[test]
    fn api_url_override_is_validated() {
        let mut source = SourceConfig {
            api_url: DEFAULT_API_URL.to_string(),
            default_program_id: DEFAULT_PROGRAM_ID,
            timeout: Duration::from_secs(1),
        };
        assert!(source.set_api_url("localhost:8080".to_string()).is_err());
        assert_eq!(source.api_url, DEFAULT_API_URL);
        source
            .set_api_url("http://127.0.0.1:8080/rating".to_string())
            .expect("http url accepted");
        assert_eq!(source.api_url, "http://127.0.0.1:8080/rating");
    }
}
