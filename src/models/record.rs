use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp pattern used for log lines, rendered in the local timezone.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Category tag written on every log line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Heading,
    AccelMagnitude,
    AccelDirection,
    ActivityType,
    StepCount,
    PedometerEvent,
}

impl Category {
    /// On-disk category names, kept compatible with the original log format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Heading => "HEADING",
            Category::AccelMagnitude => "ACCELMAGNITUDE",
            Category::AccelDirection => "ACCELDIRECTION",
            Category::ActivityType => "ACTIVITYTYPE",
            Category::StepCount => "STEPCOUNT",
            Category::PedometerEvent => "PEDOMETEREVENT",
        }
    }
}

/// One normalized reading, immutable once created. This is the sole unit
/// persisted by the log appender.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub category: Category,
    pub text: String,
}

impl LogRecord {
    pub fn new(timestamp: DateTime<Utc>, category: Category, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            category,
            text: text.into(),
        }
    }

    /// Renders the record as a log line: `<timestamp>, <CATEGORY>, <value>`.
    pub fn to_line(&self) -> String {
        format!(
            "{}, {}, {}",
            self.timestamp
                .with_timezone(&Local)
                .format(LOG_TIMESTAMP_FORMAT),
            self.category.as_str(),
            self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn line_format_matches_timestamp_category_value() {
        let at = Local.with_ymd_and_hms(2023, 4, 5, 6, 7, 8).unwrap();
        let record = LogRecord::new(at.with_timezone(&Utc), Category::Heading, "1.23");
        assert_eq!(record.to_line(), "2023-04-05 06:07:08, HEADING, 1.23");
    }

    #[test]
    fn category_names_match_log_format() {
        assert_eq!(Category::AccelMagnitude.as_str(), "ACCELMAGNITUDE");
        assert_eq!(Category::PedometerEvent.as_str(), "PEDOMETEREVENT");
    }
}
