//! Message-id based logging on top of `tracing`.
//!
//! Every log line carries an id of the form `senzing-CCCCNNNN` where `CCCC`
//! is the component id and `NNNN` the message number. The message number
//! range decides the level:
//!
//! | range     | level |
//! |-----------|-------|
//! | 0–999     | TRACE |
//! | 1000–1999 | DEBUG |
//! | 2000–2999 | INFO  |
//! | 3000–3999 | WARN  |
//! | 4000–4999 | ERROR |
//! | 5000–5999 | FATAL |
//! | 6000+     | PANIC |

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::FromRepr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
    Panic = 6,
}

impl LogLevel {
    /// Level implied by a message number.
    pub fn for_message(message_number: i32) -> Self {
        match message_number {
            i32::MIN..=999 => LogLevel::Trace,
            1000..=1999 => LogLevel::Debug,
            2000..=2999 => LogLevel::Info,
            3000..=3999 => LogLevel::Warn,
            4000..=4999 => LogLevel::Error,
            5000..=5999 => LogLevel::Fatal,
            _ => LogLevel::Panic,
        }
    }
}

/// Logger for one component. Injected into each client at construction.
#[derive(Debug)]
pub struct MessageLogger {
    component_id: i32,
    level: AtomicU8,
}

impl MessageLogger {
    pub fn new(component_id: i32, level: LogLevel) -> Self {
        Self {
            component_id,
            level: AtomicU8::new(level as u8),
        }
    }

    pub fn component_id(&self) -> i32 {
        self.component_id
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_repr(self.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// `senzing-60144001` for component 6014, message 4001.
    pub fn message_id(&self, message_number: i32) -> String {
        format!("senzing-{:04}{:04}", self.component_id, message_number)
    }

    /// Log `message` under `message_number` at the level its range implies.
    pub fn log(&self, message_number: i32, message: impl fmt::Display) {
        let level = LogLevel::for_message(message_number);
        if !self.is_enabled(level) {
            return;
        }
        let id = self.message_id(message_number);
        match level {
            LogLevel::Trace => tracing::trace!(id = %id, "{message}"),
            LogLevel::Debug => tracing::debug!(id = %id, "{message}"),
            LogLevel::Info => tracing::info!(id = %id, "{message}"),
            LogLevel::Warn => tracing::warn!(id = %id, "{message}"),
            LogLevel::Error | LogLevel::Fatal | LogLevel::Panic => {
                tracing::error!(id = %id, severity = %level, "{message}")
            }
        }
    }
}
