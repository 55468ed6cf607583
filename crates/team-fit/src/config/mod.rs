use crate::roster::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use crate::scoring::{ScoringConfig, ZeroGapPolicy};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of deployment.
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
    pub paths: PathConfig,
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let input = env::var("APP_INPUT_PATH").unwrap_or_else(|_| DEFAULT_INPUT_PATH.to_string());
        let output =
            env::var("APP_OUTPUT_PATH").unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string());

        let defaults = ScoringConfig::default();
        let scoring = ScoringConfig {
            normalization_divisor: float_var(
                "APP_NORMALIZATION_DIVISOR",
                defaults.normalization_divisor,
            )?,
            fit_weight: float_var("APP_FIT_WEIGHT", defaults.fit_weight)?,
            gap_weight: float_var("APP_GAP_WEIGHT", defaults.gap_weight)?,
            zero_gap_policy: match env::var("APP_ZERO_GAP_POLICY") {
                Ok(raw) => raw
                    .parse::<ZeroGapPolicy>()
                    .map_err(|_| ConfigError::InvalidZeroGapPolicy { value: raw })?,
                Err(_) => defaults.zero_gap_policy,
            },
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            paths: PathConfig {
                input: PathBuf::from(input),
                output: PathBuf::from(output),
            },
            scoring,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn float_var(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Where the roster is read from and scores are written to.
#[derive(Debug, Clone)]
pub struct PathConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    InvalidZeroGapPolicy { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a number, got '{value}'")
            }
            ConfigError::InvalidZeroGapPolicy { value } => write!(
                f,
                "APP_ZERO_GAP_POLICY must be 'fail' or 'zero', got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
