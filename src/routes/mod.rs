pub mod routines;

use crate::error::AppError;
use axum::{
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/routines/{id}", post(routines::create_routine))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

// Anything that escapes a handler ends up here as a 500
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("Request handler panicked: {}", detail)).into_response()
}
