use crate::models::{ActivityKind, Category, LogRecord, SensorEvent};

/// Rounds half away from zero to two decimal places, the same
/// `round(100*v)/100` the original pipeline used.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Turns one sensor event into zero-or-more log records.
///
/// A motion sample yields three records (heading, acceleration magnitude,
/// acceleration direction) sharing the sample's capture timestamp; every
/// other event yields exactly one. The z component of the acceleration
/// vector is never emitted, matching the observed output of the original
/// pipeline.
pub fn normalize(event: &SensorEvent) -> Vec<LogRecord> {
    let at = event.captured_at();
    match event {
        SensorEvent::Activity { flags, .. } => {
            let kind = ActivityKind::from_flags(*flags);
            vec![LogRecord::new(at, Category::ActivityType, kind.as_str())]
        }
        SensorEvent::StepCount { steps, .. } => {
            vec![LogRecord::new(at, Category::StepCount, steps.to_string())]
        }
        SensorEvent::StepTransition { kind, .. } => {
            vec![LogRecord::new(at, Category::PedometerEvent, kind.as_str())]
        }
        SensorEvent::Motion { sample, .. } => {
            let [x, y, _z] = sample.acceleration;
            let magnitude = round2((x * x + y * y).sqrt());
            let direction = round2(y.atan2(x));
            vec![
                LogRecord::new(at, Category::Heading, sample.heading.to_string()),
                LogRecord::new(at, Category::AccelMagnitude, magnitude.to_string()),
                LogRecord::new(at, Category::AccelDirection, direction.to_string()),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityFlags, MotionSample, StepTransition};
    use chrono::Utc;

    fn sample_with_accel(x: f64, y: f64, z: f64) -> MotionSample {
        MotionSample {
            roll: 0.1,
            pitch: 0.2,
            yaw: 0.3,
            heading: 42.5,
            acceleration: [x, y, z],
        }
    }

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(-0.005), -0.01);
        // 0.125 is exactly representable, so the tie is a true tie
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(1.234), 1.23);
    }

    #[test]
    fn motion_sample_yields_heading_magnitude_direction() {
        let at = Utc::now();
        let event = SensorEvent::Motion {
            at,
            sample: sample_with_accel(0.123, 0.456, 0.789),
        };
        let records = normalize(&event);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].category, Category::Heading);
        assert_eq!(records[0].text, "42.5");
        assert_eq!(records[1].category, Category::AccelMagnitude);
        assert_eq!(records[1].text, "0.47");
        assert_eq!(records[2].category, Category::AccelDirection);
        assert_eq!(records[2].text, "1.31");
    }

    #[test]
    fn motion_records_share_one_timestamp_and_skip_z() {
        let at = Utc::now();
        let event = SensorEvent::Motion {
            at,
            sample: sample_with_accel(0.0, 0.0, 9.81),
        };
        let records = normalize(&event);
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.timestamp == at));
        // z is read but never logged as its own record
        assert!(records.iter().all(|r| r.text != "9.81"));
    }

    #[test]
    fn walking_takes_precedence_over_running() {
        let event = SensorEvent::Activity {
            at: Utc::now(),
            flags: ActivityFlags {
                walking: true,
                running: true,
                ..Default::default()
            },
        };
        let records = normalize(&event);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, Category::ActivityType);
        assert_eq!(records[0].text, "Walking");
    }

    #[test]
    fn step_count_yields_single_record() {
        let event = SensorEvent::StepCount {
            at: Utc::now(),
            steps: 1234,
        };
        let records = normalize(&event);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, Category::StepCount);
        assert_eq!(records[0].text, "1234");
    }

    #[test]
    fn resume_transition_yields_single_pedometer_record() {
        let at = Utc::now();
        let event = SensorEvent::StepTransition {
            at,
            kind: StepTransition::Resume,
        };
        let records = normalize(&event);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].timestamp, at);
        assert_eq!(records[0].category, Category::PedometerEvent);
        assert_eq!(records[0].text, "Resume");
    }
}
