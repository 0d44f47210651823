//! Deployment log model

use chrono::{DateTime, Utc};

/// One line of deployment output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// RFC 3339 timestamp
    pub timestamp: String,
    /// Log message
    pub message: String,
}

impl LogLine {
    pub fn new(timestamp: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            message: message.into(),
        }
    }

    /// Time-of-day portion of the timestamp (`HH:MM:SS`, UTC)
    ///
    /// Falls back to the raw timestamp when it cannot be parsed.
    pub fn display_time(&self) -> String {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|dt| dt.with_timezone(&Utc).format("%H:%M:%S").to_string())
            .unwrap_or_else(|_| self.timestamp.clone())
    }
}

/// Deployment status as seen by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    InProgress,
    Complete,
}

/// Observable playback progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackState {
    /// Number of lines currently visible
    pub revealed_count: usize,
    pub status: PlaybackStatus,
}

impl PlaybackState {
    pub fn is_complete(&self) -> bool {
        self.status == PlaybackStatus::Complete
    }
}
