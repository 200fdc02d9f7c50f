pub mod event;
pub mod record;

pub use event::{
    ActivityFlags, ActivityKind, AuthorizationStatus, MotionSample, SensorEvent, StepTransition,
};
pub use record::{Category, LogRecord, LOG_TIMESTAMP_FORMAT};
