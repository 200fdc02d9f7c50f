pub mod applog;
pub mod display;
pub mod models;
pub mod normalize;
pub mod session;
pub mod settings;
pub mod source;

pub use applog::LogAppender;
pub use display::{ConsoleDisplay, DisplayField, DisplaySink, MemoryDisplay, NOT_AVAILABLE};
pub use models::{
    ActivityFlags, ActivityKind, AuthorizationStatus, Category, LogRecord, MotionSample,
    SensorEvent, StepTransition,
};
pub use normalize::normalize;
pub use session::{SessionController, SessionState, TrackingStatus, MOTION_UPDATE_INTERVAL};
pub use settings::{SettingsStore, TrackerSettings};
pub use source::{EventTx, SensorSource, SimulatedSource};
