use crate::constants::*;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Log filter used when neither `RUST_LOG` nor `LOG_FILTER` is set
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development => DEVELOPMENT_LOG_FILTER,
            Environment::Production => PRODUCTION_LOG_FILTER,
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!(
                "Invalid environment: {}. Use 'development' or 'production'",
                s
            )),
        }
    }
}

/// Output encoding of the log backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-field human readable lines
    #[default]
    Pretty,
    /// Single-line text, fewer decorations
    Compact,
    /// One JSON object per record
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Invalid log format: {}. Use 'pretty', 'compact' or 'json'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// `tracing` filter directive, overridden by `RUST_LOG` at init time
    pub filter: String,
    /// Append to this file instead of writing to stdout
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: Environment::default().default_log_filter().to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn from_env(environment: Environment) -> Result<Self, String> {
        Ok(Self {
            format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse()?,
            filter: env::var("LOG_FILTER")
                .unwrap_or_else(|_| environment.default_log_filter().to_string()),
            file: env::var("LOG_FILE")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let environment: Environment = env::var("APP_ENV")
            .unwrap_or_else(|_| "production".to_string())
            .parse()?;

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            environment,
            logging: LoggingConfig::from_env(environment)?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
