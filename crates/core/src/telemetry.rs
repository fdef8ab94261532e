//! Machine telemetry and the human-readable status line.

use serde_json::Value;
use std::fmt;

/// What the machine is doing right now, derived from its switch states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    Brewing,
    Steaming,
    Idle,
}

impl MachineState {
    /// Brew takes priority over steam.
    pub fn from_switches(brew_on: bool, steam_on: bool) -> Self {
        if brew_on {
            Self::Brewing
        } else if steam_on {
            Self::Steaming
        } else {
            Self::Idle
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brewing => "brewing",
            Self::Steaming => "steaming",
            Self::Idle => "idle",
        }
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One snapshot of sensor and switch state.
///
/// Parsing is lenient: missing or malformed numbers become 0.0 and any switch
/// value other than the literal string `"true"` counts as off.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TelemetryReading {
    /// Boiler temperature in °C.
    pub temperature: f64,
    /// Brew pressure in bar.
    pub pressure: f64,
    pub steam_on: bool,
    pub brew_on: bool,
}

impl TelemetryReading {
    pub fn from_value(value: &Value) -> Self {
        Self {
            temperature: number_field(value, "temperature"),
            pressure: number_field(value, "pressure"),
            steam_on: switch_field(value, "steamSwitchState"),
            brew_on: switch_field(value, "brewSwitchState"),
        }
    }

    pub fn state(&self) -> MachineState {
        MachineState::from_switches(self.brew_on, self.steam_on)
    }
}

impl fmt::Display for TelemetryReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Your espresso machine is currently:\n\
             - Temperature: {:.1}°C\n\
             - Pressure: {:.1} bar\n\
             - State: {}\n\
             - Steam mode: {}",
            self.temperature,
            self.pressure,
            self.state(),
            if self.steam_on { "on" } else { "off" },
        )
    }
}

/// Render a raw telemetry mapping as a multi-line status report.
pub fn format_status(status: &Value) -> String {
    TelemetryReading::from_value(status).to_string()
}

// The firmware reports numbers as strings, so accept both encodings.
fn number_field(value: &Value, key: &str) -> f64 {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_else(|_| {
            tracing::debug!(field = key, raw = %s, "Unparsable telemetry value, using 0.0");
            0.0
        }),
        _ => 0.0,
    }
}

fn switch_field(value: &Value, key: &str) -> bool {
    matches!(value.get(key), Some(Value::String(s)) if s == "true")
}
