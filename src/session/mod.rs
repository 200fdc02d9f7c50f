pub mod controller;
pub mod pump;
pub mod state;

pub use controller::{SessionController, MOTION_UPDATE_INTERVAL};
pub use state::{SessionState, TrackingStatus};
