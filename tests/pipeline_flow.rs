use std::sync::{Arc, Mutex};
use std::time::Duration;

use motionlog::{
    AuthorizationStatus, DisplayField, DisplaySink, LogAppender, MemoryDisplay, SessionController,
    SimulatedSource, NOT_AVAILABLE,
};

async fn wait_for_log(path: &std::path::Path, predicate: impl Fn(&str) -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        if std::fs::read_to_string(path)
            .map(|contents| predicate(&contents))
            .unwrap_or(false)
        {
            return;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "log never reached the expected state"
        );
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

#[tokio::test]
async fn simulated_session_writes_all_stream_categories() {
    let dir = tempfile::tempdir().unwrap();
    let source = Arc::new(SimulatedSource::new().with_tick(Duration::from_millis(10)));
    let display = Arc::new(Mutex::new(MemoryDisplay::new()));
    let sink: Arc<Mutex<dyn DisplaySink>> = display.clone();
    let appender = LogAppender::new(dir.path().join("log.txt"));

    let mut controller = SessionController::new(source, sink, appender.clone())
        .with_motion_interval(Duration::from_millis(10));

    controller.toggle().await.unwrap();
    assert!(controller.is_tracking());

    wait_for_log(appender.path(), |contents| {
        contents.contains("ACTIVITYTYPE,")
            && contents.contains("STEPCOUNT,")
            && contents.contains("HEADING,")
            && contents.contains("ACCELMAGNITUDE,")
            && contents.contains("ACCELDIRECTION,")
    })
    .await;

    controller.toggle().await.unwrap();
    assert!(!controller.is_tracking());

    // Every line carries the fixed "<timestamp>, <CATEGORY>, <value>" shape.
    let contents = std::fs::read_to_string(appender.path()).unwrap();
    for line in contents.lines() {
        let parts: Vec<&str> = line.splitn(3, ", ").collect();
        assert_eq!(parts.len(), 3, "malformed line: {line}");
        assert_eq!(parts[0].len(), "2023-04-05 06:07:08".len());
    }

    let display = display.lock().unwrap();
    assert!(display.text(DisplayField::Heading).is_some());
    assert!(display.text(DisplayField::Steps).is_some());
}

#[tokio::test]
async fn denied_authorization_never_tracks_or_writes() {
    let dir = tempfile::tempdir().unwrap();
    let source = Arc::new(
        SimulatedSource::new()
            .with_tick(Duration::from_millis(10))
            .with_authorization(AuthorizationStatus::Denied),
    );
    let display = Arc::new(Mutex::new(MemoryDisplay::new()));
    let sink: Arc<Mutex<dyn DisplaySink>> = display.clone();
    let appender = LogAppender::new(dir.path().join("log.txt"));

    let mut controller = SessionController::new(source, sink, appender.clone());

    controller.toggle().await.unwrap();
    assert!(!controller.is_tracking());

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!appender.path().exists());

    let display = display.lock().unwrap();
    assert_eq!(display.text(DisplayField::Activity), Some(NOT_AVAILABLE));
    assert_eq!(display.text(DisplayField::Steps), Some(NOT_AVAILABLE));
}

#[tokio::test]
async fn restarting_a_session_keeps_appending_to_the_same_log() {
    let dir = tempfile::tempdir().unwrap();
    let source = Arc::new(SimulatedSource::new().with_tick(Duration::from_millis(10)));
    let display: Arc<Mutex<dyn DisplaySink>> = Arc::new(Mutex::new(MemoryDisplay::new()));
    let appender = LogAppender::new(dir.path().join("log.txt"));

    let mut controller = SessionController::new(source, display, appender.clone())
        .with_motion_interval(Duration::from_millis(10));

    controller.toggle().await.unwrap();
    wait_for_log(appender.path(), |contents| contents.lines().count() >= 3).await;
    controller.toggle().await.unwrap();

    let lines_after_first = std::fs::read_to_string(appender.path())
        .unwrap()
        .lines()
        .count();

    // The reset happens at construction, not per toggle; a second session
    // of the same run appends to the existing file.
    controller.toggle().await.unwrap();
    wait_for_log(appender.path(), |contents| {
        contents.lines().count() > lines_after_first
    })
    .await;
    controller.toggle().await.unwrap();
}
