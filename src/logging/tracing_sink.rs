use crate::constants::ROUTINE_LOG_TARGET;
use crate::logging::{FieldList, LogRecord, LogSink};
use tracing::Level;

/// Forwards records to the process-wide `tracing` dispatcher.
///
/// Under the `pretty` and `compact` formats built by `init_logging` the
/// message reaches the output byte for byte, control characters included.
/// The `json` format encodes it as a JSON string.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, record: LogRecord) {
        let fields = FieldList(&record.fields);
        let message = &record.message;

        match record.level {
            Level::ERROR => {
                tracing::error!(target: ROUTINE_LOG_TARGET, context = %fields, "{}", message)
            }
            Level::WARN => {
                tracing::warn!(target: ROUTINE_LOG_TARGET, context = %fields, "{}", message)
            }
            Level::INFO => {
                tracing::info!(target: ROUTINE_LOG_TARGET, context = %fields, "{}", message)
            }
            Level::DEBUG => {
                tracing::debug!(target: ROUTINE_LOG_TARGET, context = %fields, "{}", message)
            }
            _ => tracing::trace!(target: ROUTINE_LOG_TARGET, context = %fields, "{}", message),
        }
    }
}
