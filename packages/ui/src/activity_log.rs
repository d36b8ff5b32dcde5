//! Bounded log of what the panel did, shown to the visitor on demand.

use std::collections::VecDeque;

use comments::PanelError;
use dioxus::prelude::*;

/// Oldest entries are dropped beyond this many.
pub const MAX_ENTRIES: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn class(self) -> &'static str {
        match self {
            LogLevel::Error => "activity-log-entry error",
            LogLevel::Warning => "activity-log-entry warning",
            LogLevel::Success => "activity-log-entry success",
            LogLevel::Info => "activity-log-entry info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityLog {
    pub entries: VecDeque<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>) {
        if self.entries.len() == MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            timestamp: current_time(),
            level,
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.level == LogLevel::Error)
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    log.write().push(level, message);
}

/// Record a failed panel operation in both `tracing` and the visible log.
pub fn log_failure(log: &mut Signal<ActivityLog>, operation: &str, err: &PanelError) {
    tracing::error!("{} failed: {}", operation, err);
    log_activity(log, LogLevel::Error, &format!("{operation} failed: {err}"));
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_drops_oldest_beyond_capacity() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES + 3 {
            log.push(LogLevel::Info, format!("entry {i}"));
        }

        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries.front().unwrap().message, "entry 3");
        assert_eq!(
            log.entries.back().unwrap().message,
            format!("entry {}", MAX_ENTRIES + 2)
        );
    }

    #[test]
    fn test_has_errors() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Success, "Loaded 2 comments");
        assert!(!log.has_errors());

        log.push(LogLevel::Error, "Deleting comments failed");
        assert!(log.has_errors());
        assert_eq!(log.entries[1].level.class(), "activity-log-entry error");
    }
}
