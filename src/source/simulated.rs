use std::{sync::Mutex, time::Duration};

use chrono::{DateTime, Utc};
use log::info;
use rand::Rng;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::models::{
    ActivityFlags, AuthorizationStatus, MotionSample, SensorEvent, StepTransition,
};

use super::{EventTx, SensorSource};

const DEFAULT_TICK: Duration = Duration::from_secs(1);

// Scripted rotation of activity flags; the last entry sets two flags at
// once to exercise precedence resolution downstream.
const ACTIVITY_SCRIPT: [ActivityFlags; 5] = [
    ActivityFlags {
        walking: true,
        stationary: false,
        running: false,
        automotive: false,
    },
    ActivityFlags {
        walking: false,
        stationary: true,
        running: false,
        automotive: false,
    },
    ActivityFlags {
        walking: false,
        stationary: false,
        running: true,
        automotive: false,
    },
    ActivityFlags {
        walking: false,
        stationary: false,
        running: false,
        automotive: false,
    },
    ActivityFlags {
        walking: true,
        stationary: false,
        running: true,
        automotive: false,
    },
];

#[derive(Default)]
struct StreamTokens {
    activity: Option<CancellationToken>,
    steps: Option<CancellationToken>,
    step_events: Option<CancellationToken>,
    motion: Option<CancellationToken>,
}

/// Scripted stand-in for the platform motion subsystem. Each stream runs as
/// its own tokio interval task and pushes events into the channel it was
/// started with until it is stopped or the receiver goes away.
pub struct SimulatedSource {
    authorization: AuthorizationStatus,
    activity_available: bool,
    step_counting_available: bool,
    motion_available: bool,
    tick: Duration,
    streams: Mutex<StreamTokens>,
}

impl SimulatedSource {
    pub fn new() -> Self {
        Self {
            authorization: AuthorizationStatus::Authorized,
            activity_available: true,
            step_counting_available: true,
            motion_available: true,
            tick: DEFAULT_TICK,
            streams: Mutex::new(StreamTokens::default()),
        }
    }

    pub fn with_authorization(mut self, status: AuthorizationStatus) -> Self {
        self.authorization = status;
        self
    }

    pub fn with_availability(mut self, activity: bool, step_counting: bool, motion: bool) -> Self {
        self.activity_available = activity;
        self.step_counting_available = step_counting;
        self.motion_available = motion;
        self
    }

    /// Base cadence for the activity and step streams. Step transition
    /// events fire at ten times this period.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    fn replace_token(slot: &mut Option<CancellationToken>) -> CancellationToken {
        if let Some(previous) = slot.take() {
            previous.cancel();
        }
        let token = CancellationToken::new();
        *slot = Some(token.clone());
        token
    }

    fn cancel_token(slot: &mut Option<CancellationToken>) {
        if let Some(token) = slot.take() {
            token.cancel();
        }
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorSource for SimulatedSource {
    fn authorization_status(&self) -> AuthorizationStatus {
        self.authorization
    }

    fn activity_available(&self) -> bool {
        self.activity_available
    }

    fn step_counting_available(&self) -> bool {
        self.step_counting_available
    }

    fn motion_available(&self) -> bool {
        self.motion_available
    }

    fn start_activity_updates(&self, events: EventTx) {
        let token = Self::replace_token(&mut self.streams.lock().unwrap().activity);
        let tick = self.tick;
        tokio::spawn(activity_stream(tick, events, token));
    }

    fn start_step_updates(&self, since: DateTime<Utc>, events: EventTx) {
        info!("simulated step counting starting from {}", since);
        let token = Self::replace_token(&mut self.streams.lock().unwrap().steps);
        let tick = self.tick;
        tokio::spawn(step_stream(tick, events, token));
    }

    fn start_step_event_updates(&self, events: EventTx) {
        let token = Self::replace_token(&mut self.streams.lock().unwrap().step_events);
        let tick = self.tick * 10;
        tokio::spawn(step_event_stream(tick, events, token));
    }

    fn start_motion_updates(&self, interval: Duration, events: EventTx) {
        let token = Self::replace_token(&mut self.streams.lock().unwrap().motion);
        tokio::spawn(motion_stream(interval, events, token));
    }

    fn stop_activity_updates(&self) {
        Self::cancel_token(&mut self.streams.lock().unwrap().activity);
    }

    fn stop_step_updates(&self) {
        Self::cancel_token(&mut self.streams.lock().unwrap().steps);
    }

    fn stop_step_event_updates(&self) {
        Self::cancel_token(&mut self.streams.lock().unwrap().step_events);
    }

    fn stop_motion_updates(&self) {
        Self::cancel_token(&mut self.streams.lock().unwrap().motion);
    }
}

async fn activity_stream(tick: Duration, events: EventTx, cancel: CancellationToken) {
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut index = 0usize;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let flags = ACTIVITY_SCRIPT[index % ACTIVITY_SCRIPT.len()];
                index += 1;
                if events.send(SensorEvent::Activity { at: Utc::now(), flags }).is_err() {
                    break;
                }
            }
            _ = cancel.cancelled() => break,
        }
    }
}

async fn step_stream(tick: Duration, events: EventTx, cancel: CancellationToken) {
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut steps: i64 = 0;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                steps += rand::thread_rng().gen_range(1..=3);
                if events.send(SensorEvent::StepCount { at: Utc::now(), steps }).is_err() {
                    break;
                }
            }
            _ = cancel.cancelled() => break,
        }
    }
}

async fn step_event_stream(tick: Duration, events: EventTx, cancel: CancellationToken) {
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut paused = false;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let kind = if paused { StepTransition::Resume } else { StepTransition::Pause };
                paused = !paused;
                if events.send(SensorEvent::StepTransition { at: Utc::now(), kind }).is_err() {
                    break;
                }
            }
            _ = cancel.cancelled() => break,
        }
    }
}

async fn motion_stream(interval: Duration, events: EventTx, cancel: CancellationToken) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut heading: f64 = 0.0;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let sample = {
                    let mut rng = rand::thread_rng();
                    heading = (heading + 1.5 + rng.gen_range(-0.5..0.5)).rem_euclid(360.0);
                    MotionSample {
                        roll: rng.gen_range(-0.1..0.1),
                        pitch: rng.gen_range(-0.1..0.1),
                        yaw: rng.gen_range(-0.1..0.1),
                        heading,
                        acceleration: [
                            rng.gen_range(-0.5..0.5),
                            rng.gen_range(-0.5..0.5),
                            rng.gen_range(-0.5..0.5),
                        ],
                    }
                };
                if events.send(SensorEvent::Motion { at: Utc::now(), sample }).is_err() {
                    break;
                }
            }
            _ = cancel.cancelled() => break,
        }
    }
}
