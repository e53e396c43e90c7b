use crate::assessment::ResultsMode;
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    /// Log filter used when `APP_LOG_LEVEL` is not set.
    pub const fn default_log_level(self) -> &'static str {
        match self {
            Self::Production => "warn",
            Self::Development | Self::Test => "info",
        }
    }

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
    pub telemetry: TelemetryConfig,
    pub results: ResultsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL")
            .unwrap_or_else(|_| environment.default_log_level().to_string());

        let mode = match env::var("ASSESSMENT_RESULTS_MODE") {
            Ok(raw) => raw
                .parse::<ResultsMode>()
                .map_err(|_| ConfigError::InvalidResultsMode(raw))?,
            Err(_) => ResultsMode::default(),
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            results: ResultsConfig { mode },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Results page behavior.
#[derive(Debug, Clone)]
pub struct ResultsConfig {
    pub mode: ResultsMode,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidResultsMode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidResultsMode(value) => write!(
                f,
                "ASSESSMENT_RESULTS_MODE must be 'static' or 'computed' (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
