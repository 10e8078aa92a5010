pub mod request_mapper;
pub mod routine_emitter;

pub use request_mapper::map_request;
pub use routine_emitter::{CreateRoutineHandler, RoutineLogEmitter};
