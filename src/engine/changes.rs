//! Change tracking with debounced save status and batched history
//!
//! Every field edit sets the save status to `Saving` and restarts two
//! independent timers:
//!
//! - the *settle* chain: after `settle` of quiet the status becomes `Saved`,
//!   and after another `settle` it returns to `Idle`
//! - the *flush* timer: after `flush` of quiet, every field touched since the
//!   last flush is summarized into one [`HistoryEntry`]
//!
//! Time is passed in explicitly, so the tracker never reads the clock for
//! scheduling decisions.

use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{debug, info};

use super::timer::{self, Timer};
use crate::model::{FieldKey, HistoryEntry, describe_changes};

/// Save indicator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
}

/// Debounce windows for [`ChangeTracker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceSettings {
    /// Quiet period before `Saving` becomes `Saved` (and again before `Idle`)
    pub settle: Duration,
    /// Quiet period before pending changes are flushed to history
    pub flush: Duration,
}

impl Default for DebounceSettings {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(1500),
            flush: Duration::from_millis(3000),
        }
    }
}

/// Observable output of the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// Save status changed
    Status(SaveStatus),
    /// A batch of edits was summarized
    History(HistoryEntry),
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Settle,
    Idle,
    Flush,
}

/// Per-editor change tracker
#[derive(Debug)]
pub struct ChangeTracker {
    settings: DebounceSettings,
    author: String,
    status: SaveStatus,
    /// Fields changed since the last flush, in first-touched order
    pending: Vec<FieldKey>,
    settle_timer: Timer,
    idle_timer: Timer,
    flush_timer: Timer,
    disposed: bool,
}

impl ChangeTracker {
    /// Create a tracker that attributes history entries to `author`
    pub fn new(settings: DebounceSettings, author: impl Into<String>) -> Self {
        Self {
            settings,
            author: author.into(),
            status: SaveStatus::Idle,
            pending: Vec::new(),
            settle_timer: Timer::new(),
            idle_timer: Timer::new(),
            flush_timer: Timer::new(),
            disposed: false,
        }
    }

    /// Record an edit to `field` at `now`
    pub fn record_change(&mut self, field: FieldKey, now: Instant) -> Vec<ChangeEvent> {
        let mut events = Vec::new();
        if self.disposed {
            debug!(field = %field, "change ignored after dispose");
            return events;
        }

        self.set_status(SaveStatus::Saving, &mut events);
        self.idle_timer.cancel();
        self.settle_timer.start(now, self.settings.settle);

        if !self.pending.contains(&field) {
            debug!(field = %field, "field changed");
            self.pending.push(field);
        }
        self.flush_timer.start(now, self.settings.flush);

        events
    }

    /// Fire every timer that is due at `now`, earliest first
    pub fn tick(&mut self, now: Instant) -> Vec<ChangeEvent> {
        let mut events = Vec::new();
        if self.disposed {
            return events;
        }

        while let Some(slot) = self.next_due(now) {
            match slot {
                Slot::Settle => {
                    let Some(fired_at) = self.settle_timer.take_due(now) else {
                        break;
                    };
                    self.set_status(SaveStatus::Saved, &mut events);
                    self.idle_timer.start(fired_at, self.settings.settle);
                }
                Slot::Idle => {
                    if self.idle_timer.take_due(now).is_none() {
                        break;
                    }
                    self.set_status(SaveStatus::Idle, &mut events);
                }
                Slot::Flush => {
                    if self.flush_timer.take_due(now).is_none() {
                        break;
                    }
                    if let Some(entry) = self.flush() {
                        events.push(ChangeEvent::History(entry));
                    }
                }
            }
        }

        events
    }

    /// Cancel all pending timers and stop reacting to input
    ///
    /// Pending (unflushed) changes are discarded. Calling this twice is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.settle_timer.cancel();
        self.idle_timer.cancel();
        self.flush_timer.cancel();
        self.disposed = true;
        debug!(pending = self.pending.len(), "change tracker disposed");
    }

    /// Earliest pending deadline, for scheduling the next wake-up
    pub fn next_deadline(&self) -> Option<Instant> {
        timer::earliest([
            self.settle_timer.deadline(),
            self.idle_timer.deadline(),
            self.flush_timer.deadline(),
        ])
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    /// Fields waiting for the next flush
    pub fn pending(&self) -> &[FieldKey] {
        &self.pending
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn settings(&self) -> DebounceSettings {
        self.settings
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn next_due(&self, now: Instant) -> Option<Slot> {
        [
            (Slot::Settle, &self.settle_timer),
            (Slot::Idle, &self.idle_timer),
            (Slot::Flush, &self.flush_timer),
        ]
        .into_iter()
        .filter(|(_, t)| t.is_due(now))
        .min_by_key(|(_, t)| t.deadline())
        .map(|(slot, _)| slot)
    }

    fn set_status(&mut self, status: SaveStatus, events: &mut Vec<ChangeEvent>) {
        if self.status != status {
            debug!(from = ?self.status, to = ?status, "save status");
            self.status = status;
            events.push(ChangeEvent::Status(status));
        }
    }

    fn flush(&mut self) -> Option<HistoryEntry> {
        let fields = std::mem::take(&mut self.pending);
        let description = describe_changes(&fields)?;
        info!(%description, fields = fields.len(), "history entry recorded");
        Some(HistoryEntry::new(description, self.author.clone(), Utc::now()))
    }
}
