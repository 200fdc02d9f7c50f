use std::collections::HashMap;

use log::info;

/// Text shown for a stream that is unsupported on the device or blocked by
/// authorization.
pub const NOT_AVAILABLE: &str = "Not available";

/// The five user-facing fields of the tracking screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayField {
    Steps,
    Activity,
    Heading,
    Acceleration,
    PedometerEvent,
}

impl DisplayField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayField::Steps => "steps",
            DisplayField::Activity => "activity",
            DisplayField::Heading => "heading",
            DisplayField::Acceleration => "acceleration",
            DisplayField::PedometerEvent => "pedometer event",
        }
    }
}

/// Receives the latest value per field. Implementations only need "set
/// text"; the pump serializes all calls on one task.
pub trait DisplaySink: Send {
    fn set_text(&mut self, field: DisplayField, text: &str);
}

/// In-memory sink for tests and embedding callers that poll.
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    fields: HashMap<DisplayField, String>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: DisplayField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }
}

impl DisplaySink for MemoryDisplay {
    fn set_text(&mut self, field: DisplayField, text: &str) {
        self.fields.insert(field, text.to_string());
    }
}

/// Sink that mirrors field updates onto the diagnostic log, used by the
/// demo binary in place of a real screen.
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl DisplaySink for ConsoleDisplay {
    fn set_text(&mut self, field: DisplayField, text: &str) {
        info!("{}: {}", field.as_str(), text);
    }
}
