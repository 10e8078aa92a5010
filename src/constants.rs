//! Stable application-wide constants.
//!
//! Default fallbacks for env-var-based configuration and the fixed names used
//! by the logging pipeline.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Logging defaults ---

/// Filter used in development when neither `RUST_LOG` nor `LOG_FILTER` is set.
pub const DEVELOPMENT_LOG_FILTER: &str = "routine_api=debug,tower_http=debug";
/// Filter used in production when neither `RUST_LOG` nor `LOG_FILTER` is set.
pub const PRODUCTION_LOG_FILTER: &str = "routine_api=info,tower_http=info";

/// `tracing` target under which routine records are emitted.
/// Matches the default filters above so records are on by default.
pub const ROUTINE_LOG_TARGET: &str = "routine_api::routines";
