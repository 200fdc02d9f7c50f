use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TrackingStatus {
    Idle,
    Tracking,
}

impl Default for TrackingStatus {
    fn default() -> Self {
        TrackingStatus::Idle
    }
}

/// Session-level state owned by the controller.
///
/// Invariant: `session_id` and `started_at` are set if and only if `status`
/// is Tracking. `begin` and `clear` are the only mutators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub status: TrackingStatus,
    pub session_id: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.status == TrackingStatus::Tracking
    }

    pub fn begin(&mut self, session_id: String, started_at: DateTime<Utc>) {
        *self = Self {
            status: TrackingStatus::Tracking,
            session_id: Some(session_id),
            started_at: Some(started_at),
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_sets_tracking_with_start_instant() {
        let mut state = SessionState::new();
        state.begin("abc".into(), Utc::now());
        assert!(state.is_tracking());
        assert!(state.started_at.is_some());
        assert_eq!(state.session_id.as_deref(), Some("abc"));
    }

    #[test]
    fn clear_returns_to_idle_and_drops_start_instant() {
        let mut state = SessionState::new();
        state.begin("abc".into(), Utc::now());
        state.clear();
        assert!(!state.is_tracking());
        assert!(state.started_at.is_none());
        assert!(state.session_id.is_none());
    }

    #[test]
    fn started_at_tracks_status_across_toggle_sequences() {
        let mut state = SessionState::new();
        for _ in 0..5 {
            state.begin("id".into(), Utc::now());
            assert_eq!(state.is_tracking(), state.started_at.is_some());
            state.clear();
            assert_eq!(state.is_tracking(), state.started_at.is_some());
        }
    }
}
