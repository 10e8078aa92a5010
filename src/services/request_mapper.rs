use crate::error::{AppError, Result};
use crate::models::{CreateRoutineRequest, ExerciseDetails, RoutineCreationInput};

/// Turn a client request into the internal routine value.
///
/// Field values are copied as-is, exercise order and count preserved.
/// An absent request is the only failure.
pub fn map_request(request: Option<CreateRoutineRequest>) -> Result<RoutineCreationInput> {
    let request = request
        .ok_or_else(|| AppError::InvalidArgument("request body is required".to_string()))?;

    Ok(request.into())
}

impl From<CreateRoutineRequest> for RoutineCreationInput {
    fn from(request: CreateRoutineRequest) -> Self {
        RoutineCreationInput {
            name: request.name,
            routine_type: request.routine_type,
            exercises: request
                .exercises
                .into_iter()
                .map(|exercise| ExerciseDetails {
                    name: exercise.name,
                    region: exercise.region,
                    repetitions: exercise.repetitions,
                    description: exercise.description,
                })
                .collect(),
        }
    }
}
