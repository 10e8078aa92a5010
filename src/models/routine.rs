use serde::{Deserialize, Serialize};

/// Body of `POST /routines/{id}` as sent by clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateRoutineRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub routine_type: String,
    pub exercises: Vec<ExerciseDetailsRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseDetailsRequest {
    pub name: String,
    pub region: String,
    pub repetitions: i32,
    pub description: String,
}

/// Internal routine value handed to the routine handler.
/// Lives for a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutineCreationInput {
    pub name: String,
    pub routine_type: String,
    pub exercises: Vec<ExerciseDetails>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDetails {
    pub name: String,
    pub region: String,
    pub repetitions: i32,
    /// Free text from the client, never validated or escaped
    pub description: String,
}
