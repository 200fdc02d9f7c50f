use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use log::{info, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::{
    applog::LogAppender,
    display::{DisplayField, DisplaySink, NOT_AVAILABLE},
    models::AuthorizationStatus,
    source::SensorSource,
};

use super::pump::event_pump;
use super::state::SessionState;

/// Device-motion update interval, one sample every 1/3 second.
pub const MOTION_UPDATE_INTERVAL: Duration = Duration::from_millis(333);

struct PumpHandle {
    handle: JoinHandle<()>,
    cancel: CancellationToken,
}

/// Two-state toggle owning the session lifecycle: Idle <-> Tracking.
///
/// Starting a session spawns the event pump and subscribes every available
/// sensor stream; stopping tears all four streams down unconditionally and
/// joins the pump. The log file is reset once at construction, so each run
/// starts with a clean log.
pub struct SessionController {
    state: SessionState,
    source: Arc<dyn SensorSource>,
    appender: LogAppender,
    display: Arc<Mutex<dyn DisplaySink>>,
    motion_interval: Duration,
    pump: Option<PumpHandle>,
}

impl SessionController {
    pub fn new(
        source: Arc<dyn SensorSource>,
        display: Arc<Mutex<dyn DisplaySink>>,
        appender: LogAppender,
    ) -> Self {
        if let Err(err) = appender.reset() {
            warn!("failed to reset log at startup: {err:?}");
        }

        Self {
            state: SessionState::new(),
            source,
            appender,
            display,
            motion_interval: MOTION_UPDATE_INTERVAL,
            pump: None,
        }
    }

    pub fn with_motion_interval(mut self, interval: Duration) -> Self {
        self.motion_interval = interval;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_tracking(&self) -> bool {
        self.state.is_tracking()
    }

    /// Flips between Idle and Tracking. Returns the new tracking flag.
    pub async fn toggle(&mut self) -> Result<bool> {
        if self.state.is_tracking() {
            self.stop().await?;
        } else {
            self.start().await?;
        }
        Ok(self.state.is_tracking())
    }

    pub async fn start(&mut self) -> Result<()> {
        if self.state.is_tracking() {
            return Ok(());
        }

        let session_id = Uuid::new_v4().to_string();
        let started_at = Utc::now();
        self.state.begin(session_id.clone(), started_at);

        // Denied authorization forces the session straight back to Idle
        // before any subscription is issued.
        if self.source.authorization_status() == AuthorizationStatus::Denied {
            warn!("motion authorization denied; stopping session {session_id}");
            self.stop().await?;
            let mut display = self.display.lock().unwrap();
            display.set_text(DisplayField::Activity, NOT_AVAILABLE);
            display.set_text(DisplayField::Steps, NOT_AVAILABLE);
            return Ok(());
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(event_pump(
            rx,
            self.appender.clone(),
            self.display.clone(),
            cancel.clone(),
        ));
        self.pump = Some(PumpHandle { handle, cancel });

        if self.source.motion_available() {
            self.source
                .start_motion_updates(self.motion_interval, tx.clone());
        } else {
            self.display
                .lock()
                .unwrap()
                .set_text(DisplayField::Heading, NOT_AVAILABLE);
        }

        if self.source.activity_available() {
            self.source.start_activity_updates(tx.clone());
        } else {
            self.display
                .lock()
                .unwrap()
                .set_text(DisplayField::Activity, NOT_AVAILABLE);
        }

        if self.source.step_counting_available() {
            self.source.start_step_updates(started_at, tx.clone());
            self.source.start_step_event_updates(tx);
        } else {
            self.display
                .lock()
                .unwrap()
                .set_text(DisplayField::Steps, NOT_AVAILABLE);
        }

        info!("tracking session {session_id} started");
        Ok(())
    }

    /// Stops tracking. Safe to call when already idle; all four stream
    /// stops are issued unconditionally, even for streams never started.
    pub async fn stop(&mut self) -> Result<()> {
        let session_id = self.state.session_id.take();
        self.state.clear();

        self.source.stop_activity_updates();
        self.source.stop_step_updates();
        self.source.stop_step_event_updates();
        self.source.stop_motion_updates();

        if let Some(pump) = self.pump.take() {
            pump.cancel.cancel();
            pump.handle.await.context("event pump failed to join")?;
        }

        if let Some(session_id) = session_id {
            info!("tracking session {session_id} stopped");
        }
        Ok(())
    }
}
