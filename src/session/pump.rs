use std::sync::{Arc, Mutex};

use log::{error, info};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use crate::{
    applog::LogAppender,
    display::{DisplayField, DisplaySink},
    models::{Category, LogRecord, SensorEvent},
    normalize::normalize,
};

/// Single consumer of the unified event channel.
///
/// Owns the appender and the display while a session is tracking: every
/// stream sends into one channel, and this task alone touches the log file
/// and the screen, so no lock is needed around the file. Append failures
/// are reported on the diagnostic log and never interrupt event flow.
pub(crate) async fn event_pump(
    mut events: UnboundedReceiver<SensorEvent>,
    appender: LogAppender,
    display: Arc<Mutex<dyn DisplaySink>>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            maybe_event = events.recv() => {
                let Some(event) = maybe_event else { break };
                let records = normalize(&event);
                for record in &records {
                    if let Err(err) = appender.append(record) {
                        error!("log append failed: {err:?}");
                    }
                }
                update_display(&display, &records);
            }
            _ = cancel.cancelled() => {
                info!("event pump shutting down");
                break;
            }
        }
    }
}

/// Fans the latest values out to the screen. Acceleration magnitude and
/// direction share one field, joined by a space as on the original screen.
fn update_display(display: &Arc<Mutex<dyn DisplaySink>>, records: &[LogRecord]) {
    let mut magnitude: Option<&str> = None;
    let mut direction: Option<&str> = None;

    let mut sink = display.lock().unwrap();
    for record in records {
        match record.category {
            Category::Heading => sink.set_text(DisplayField::Heading, &record.text),
            Category::ActivityType => sink.set_text(DisplayField::Activity, &record.text),
            Category::StepCount => sink.set_text(DisplayField::Steps, &record.text),
            Category::PedometerEvent => sink.set_text(DisplayField::PedometerEvent, &record.text),
            Category::AccelMagnitude => magnitude = Some(&record.text),
            Category::AccelDirection => direction = Some(&record.text),
        }
    }

    if let (Some(magnitude), Some(direction)) = (magnitude, direction) {
        sink.set_text(
            DisplayField::Acceleration,
            &format!("{} {}", magnitude, direction),
        );
    }
}
