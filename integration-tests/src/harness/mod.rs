mod chart;
mod fixtures;
pub mod tracing;

pub use chart::{ChartCall, RecordingChart, Recorder};
pub use fixtures::{EventLog, age_line, gender_line};
pub use self::tracing::{CapturedEvent, capture_events};
