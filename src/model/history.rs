//! Edit history model
//!
//! Entries are immutable and kept newest first.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single recorded edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Unique entry ID
    pub id: String,
    /// Human-readable description ("Updated agent name and voice")
    pub description: String,
    /// Who made the edit
    pub author: String,
    /// When the entry was created
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create a new entry with a fresh ID
    pub fn new(
        description: impl Into<String>,
        author: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            author: author.into(),
            created_at,
        }
    }

    /// Short form of the ID for display
    pub fn short_id(&self) -> &str {
        if self.id.len() >= 8 {
            &self.id[..8]
        } else {
            &self.id
        }
    }
}

/// Ordered edit history (newest first)
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry at the front
    pub fn prepend(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
    }

    /// Record an explicit user action
    pub fn record(
        &mut self,
        description: impl Into<String>,
        author: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> &HistoryEntry {
        self.prepend(HistoryEntry::new(description, author, created_at));
        &self.entries[0]
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Format a timestamp relative to `now` ("Just now", "5 min ago", "Yesterday")
pub fn format_relative(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if hours < 1 {
        format!("{minutes} min ago")
    } else if days < 1 {
        format!("{hours} h ago")
    } else if days == 1 {
        "Yesterday".to_string()
    } else {
        format!("{days} days ago")
    }
}
