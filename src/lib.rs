// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use logging::LogSink;
use services::{CreateRoutineHandler, RoutineLogEmitter};
use std::sync::Arc;

// App state for sharing across the application
pub struct AppState {
    pub routine_handler: Arc<dyn CreateRoutineHandler>,
}

impl AppState {
    /// State whose routine handler logs to `sink`
    pub fn with_sink(sink: Arc<dyn LogSink>) -> Self {
        AppState {
            routine_handler: Arc::new(RoutineLogEmitter::new(sink)),
        }
    }
}
