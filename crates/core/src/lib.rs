// Reformatting of Gaggiuino machine telemetry and shot records

pub mod shot;
pub mod telemetry;

pub use shot::{format_datapoints, format_shot, DEFAULT_DOWNSAMPLE, EXCLUDED_SERIES};
pub use telemetry::{format_status, MachineState, TelemetryReading};
