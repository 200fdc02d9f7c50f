use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authorization state of the platform motion subsystem.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AuthorizationStatus {
    NotDetermined,
    Restricted,
    Denied,
    Authorized,
}

/// Raw activity flags as reported by the platform. Several flags can be set
/// at once; `ActivityKind::from_flags` resolves them to a single label.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityFlags {
    pub walking: bool,
    pub stationary: bool,
    pub running: bool,
    pub automotive: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ActivityKind {
    Walking,
    Stationary,
    Running,
    Automotive,
    Unknown,
}

impl ActivityKind {
    /// Resolves possibly-overlapping flags with a fixed precedence:
    /// Walking > Stationary > Running > Automotive > Unknown.
    pub fn from_flags(flags: ActivityFlags) -> Self {
        if flags.walking {
            ActivityKind::Walking
        } else if flags.stationary {
            ActivityKind::Stationary
        } else if flags.running {
            ActivityKind::Running
        } else if flags.automotive {
            ActivityKind::Automotive
        } else {
            ActivityKind::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Walking => "Walking",
            ActivityKind::Stationary => "Stationary",
            ActivityKind::Running => "Running",
            ActivityKind::Automotive => "Automotive",
            ActivityKind::Unknown => "Unknown",
        }
    }
}

/// Pedometer pause/resume signal (e.g. the device left the body).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StepTransition {
    Pause,
    Resume,
    Unknown,
}

impl StepTransition {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepTransition::Pause => "Pause",
            StepTransition::Resume => "Resume",
            StepTransition::Unknown => "Unknown",
        }
    }
}

/// One device-motion reading: attitude, compass heading and the user
/// acceleration vector (x, y, z).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MotionSample {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
    pub heading: f64,
    pub acceleration: [f64; 3],
}

/// A single event delivered by a sensor stream, tagged with its capture
/// timestamp. All streams feed these into one channel consumed by the
/// event pump.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorEvent {
    Activity {
        at: DateTime<Utc>,
        flags: ActivityFlags,
    },
    StepCount {
        at: DateTime<Utc>,
        steps: i64,
    },
    StepTransition {
        at: DateTime<Utc>,
        kind: StepTransition,
    },
    Motion {
        at: DateTime<Utc>,
        sample: MotionSample,
    },
}

impl SensorEvent {
    /// Capture timestamp shared by every record derived from this event.
    pub fn captured_at(&self) -> DateTime<Utc> {
        match self {
            SensorEvent::Activity { at, .. }
            | SensorEvent::StepCount { at, .. }
            | SensorEvent::StepTransition { at, .. }
            | SensorEvent::Motion { at, .. } => *at,
        }
    }
}
