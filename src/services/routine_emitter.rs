use crate::logging::{LogRecord, LogSink};
use crate::models::{ExerciseDetails, RoutineCreationInput};
use async_trait::async_trait;
use std::sync::Arc;

/// Handles a mapped routine creation request
#[async_trait]
pub trait CreateRoutineHandler: Send + Sync {
    async fn handle(&self, input: RoutineCreationInput);
}

/// Logs every exercise of a routine to the injected sink.
///
/// The exercise description is written into the message untouched: no
/// escaping, trimming or length limit. Clients fully control that text.
pub struct RoutineLogEmitter {
    sink: Arc<dyn LogSink>,
}

impl RoutineLogEmitter {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        RoutineLogEmitter { sink }
    }

    /// One INFO record per exercise, in list order
    pub fn emit(&self, input: &RoutineCreationInput) {
        for exercise in &input.exercises {
            self.sink.emit(exercise_record(input, exercise));
        }
    }
}

fn exercise_record(routine: &RoutineCreationInput, exercise: &ExerciseDetails) -> LogRecord {
    LogRecord::info(format!(
        "Exercise '{}' added to routine '{}' ({} reps, {}): {}",
        exercise.name, routine.name, exercise.repetitions, exercise.region, exercise.description
    ))
    .with_field("routine", &routine.name)
    .with_field("routine_type", &routine.routine_type)
    .with_field("exercise", &exercise.name)
    .with_field("region", &exercise.region)
    .with_field("repetitions", exercise.repetitions)
}

#[async_trait]
impl CreateRoutineHandler for RoutineLogEmitter {
    async fn handle(&self, input: RoutineCreationInput) {
        self.emit(&input);
    }
}
