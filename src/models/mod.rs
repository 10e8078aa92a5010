pub mod routine;

pub use routine::{
    CreateRoutineRequest, ExerciseDetails, ExerciseDetailsRequest, RoutineCreationInput,
};
