//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Every field carries a serde default so a hand-edited or partial file
//! still loads.

use serde::{Deserialize, Serialize};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Recording timer behavior.
    #[serde(default)]
    pub timer: TimerSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Path configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            logs_folder: default_logs_folder(),
        }
    }
}

/// Recording timer behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSettings {
    /// Refresh cadence of the timer display while running, in ms.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Pause the clock when the last shot is recorded.
    ///
    /// Off by default: exhausting the shot list keeps the clock running
    /// so a late retake does not surprise the user mid-recording.
    #[serde(default)]
    pub stop_on_exhaust: bool,
}

fn default_tick_interval_ms() -> u64 {
    100
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            stop_on_exhaust: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default log level when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
