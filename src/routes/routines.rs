use crate::error::{AppError, Result};
use crate::models::CreateRoutineRequest;
use crate::services::map_request;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

/// POST /routines/{id}
/// Log every exercise of the submitted routine and echo the path id
pub async fn create_routine(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<Json<i32>> {
    let request = parse_body(&body)?;
    let input = map_request(request)?;

    state.routine_handler.handle(input).await;

    Ok(Json(id))
}

/// Empty, whitespace-only and `null` bodies all count as absent.
/// The content type is not checked.
fn parse_body(body: &[u8]) -> Result<Option<CreateRoutineRequest>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::InvalidArgument(format!("Invalid request body: {}", e)))
}
