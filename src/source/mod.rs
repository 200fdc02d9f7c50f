pub mod simulated;

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::models::{AuthorizationStatus, SensorEvent};

pub use simulated::SimulatedSource;

/// Sender half of the unified event channel. Each stream adapter pushes its
/// events here instead of invoking a per-stream callback.
pub type EventTx = mpsc::UnboundedSender<SensorEvent>;

/// Abstraction over the platform motion subsystem: four independent
/// subscription streams plus availability and authorization queries.
///
/// `start_*` calls register the given sender as the delivery target for a
/// stream; `stop_*` calls tear the stream down and are safe to call even if
/// the stream was never started.
pub trait SensorSource: Send + Sync {
    fn authorization_status(&self) -> AuthorizationStatus;

    fn activity_available(&self) -> bool;
    fn step_counting_available(&self) -> bool;
    fn motion_available(&self) -> bool;

    fn start_activity_updates(&self, events: EventTx);
    fn start_step_updates(&self, since: DateTime<Utc>, events: EventTx);
    fn start_step_event_updates(&self, events: EventTx);
    fn start_motion_updates(&self, interval: Duration, events: EventTx);

    fn stop_activity_updates(&self);
    fn stop_step_updates(&self);
    fn stop_step_event_updates(&self);
    fn stop_motion_updates(&self);
}
