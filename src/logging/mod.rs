//! Log records, the sink abstraction routine handlers write to, and the
//! process-wide `tracing` subscriber setup.

pub mod memory;
pub mod tracing_sink;

pub use memory::MemorySink;
pub use tracing_sink::TracingSink;

use crate::config::{LogFormat, LoggingConfig};
use std::fmt;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use tracing::field::Field;
use tracing::Level;
use tracing_subscriber::{
    field::MakeExt,
    filter::ParseError,
    fmt::{
        format::{debug_fn, Writer},
        MakeWriter,
    },
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer, Registry,
};

/// One log event produced by application code.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    /// Structured context, kept in insertion order
    pub fields: Vec<(&'static str, String)>,
}

impl LogRecord {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        LogRecord {
            level,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::INFO, message)
    }

    pub fn with_field(mut self, key: &'static str, value: impl ToString) -> Self {
        self.fields.push((key, value.to_string()));
        self
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Renders fields as `key="value"` pairs separated by spaces
pub(crate) struct FieldList<'a>(pub &'a [(&'static str, String)]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={:?}", key, value)?;
        }
        Ok(())
    }
}

/// Destination for log records.
///
/// Implementations must accept concurrent writers. Emission is fire and
/// forget: a sink has no way to report failure to the caller.
pub trait LogSink: Send + Sync {
    fn emit(&self, record: LogRecord);
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid log filter '{filter}': {source}")]
    Filter { filter: String, source: ParseError },

    #[error("Failed to install log subscriber: {0}")]
    Init(#[from] TryInitError),
}

pub(crate) type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Field writer for the text formats.
///
/// The stock fmt visitor escapes ESC and BEL inside messages; this one
/// writes the message bytes exactly as recorded.
fn write_field(writer: &mut Writer<'_>, field: &Field, value: &dyn fmt::Debug) -> fmt::Result {
    if field.name() == "message" {
        write!(writer, "{:?}", value)
    } else {
        write!(writer, "{}={:?}", field, value)
    }
}

pub(crate) fn fmt_layer<W>(format: LogFormat, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer::<Registry>()
        .with_writer(writer)
        .with_ansi(ansi);

    match format {
        LogFormat::Pretty => Box::new(layer.fmt_fields(debug_fn(write_field).delimited(" "))),
        LogFormat::Compact => Box::new(
            layer
                .fmt_fields(debug_fn(write_field).delimited(" "))
                .compact(),
        ),
        LogFormat::Json => Box::new(layer.json()),
    }
}

/// Parse a filter directive, rejecting anything `EnvFilter` would skip
fn parse_filter(filter: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(filter).map_err(|source| LoggingError::Filter {
        filter: filter.to_string(),
        source,
    })
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `config.filter`. With `config.file` set,
/// output is appended to that file instead of stdout.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(&config.filter)?,
    };

    let layer = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::OpenFile {
                    path: path.clone(),
                    source,
                })?;
            fmt_layer(config.format, Mutex::new(file), false)
        }
        None => fmt_layer(config.format, std::io::stdout, true),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()?;

    tracing::debug!(
        format = ?config.format,
        file = ?config.file,
        "Logging initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_fields_keep_order() {
        let record = LogRecord::info("hello")
            .with_field("routine", "Leg Day")
            .with_field("repetitions", 10);

        assert_eq!(record.level, Level::INFO);
        assert_eq!(record.field("repetitions"), Some("10"));
        assert_eq!(record.field("missing"), None);
        assert_eq!(
            FieldList(&record.fields).to_string(),
            r#"routine="Leg Day" repetitions="10""#
        );
    }

    #[test]
    fn test_filter_parsing() {
        assert!(parse_filter(crate::constants::PRODUCTION_LOG_FILTER).is_ok());
        assert!(parse_filter("warn").is_ok());

        match parse_filter("routine_api=loud") {
            Err(LoggingError::Filter { filter, .. }) => assert_eq!(filter, "routine_api=loud"),
            other => panic!("expected Filter error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_unopenable_log_file_is_reported() {
        let config = LoggingConfig {
            file: Some(PathBuf::from("/nonexistent-dir/for/sure/routines.log")),
            ..LoggingConfig::default()
        };

        match init_logging(&config) {
            Err(LoggingError::OpenFile { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent-dir/for/sure/routines.log"));
            }
            other => panic!("expected OpenFile error, got {:?}", other),
        }
    }
}
