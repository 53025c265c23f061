use std::env;
use std::fmt;
use std::path::PathBuf;

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

/// Everything the dashboard binary reads from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub export: ExportConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let out_dir = env::var("APP_EXPORT_DIR").unwrap_or_else(|_| ".".to_string());
        if out_dir.trim().is_empty() {
            return Err(ConfigError::InvalidExportDir { value: out_dir });
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            export: ExportConfig {
                out_dir: PathBuf::from(out_dir),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings controlling where CSV exports land on disk.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub out_dir: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidExportDir { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidExportDir { value } => {
                write!(f, "APP_EXPORT_DIR must name a directory, got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
