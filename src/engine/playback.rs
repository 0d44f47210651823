//! Scripted deployment log playback
//!
//! Reveals a fixed list of log lines one at a time with a random gap between
//! lines, and independently flips to `Complete` after a fixed duration.
//! With reduced motion every line is shown at once; completion still waits
//! for the fixed duration.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::timer::{self, Timer};
use crate::model::{LogLine, PlaybackState, PlaybackStatus};

/// Timing for [`LogPlayback`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSettings {
    /// Shortest gap between two revealed lines
    pub reveal_min: Duration,
    /// Longest gap between two revealed lines
    pub reveal_max: Duration,
    /// Time from start until the run is reported complete
    pub duration: Duration,
    /// Delay between completion and the emphasis effect
    pub emphasis_delay: Duration,
    /// Show all lines at once and skip the emphasis effect
    pub reduced_motion: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            reveal_min: Duration::from_millis(150),
            reveal_max: Duration::from_millis(300),
            duration: Duration::from_millis(10_000),
            emphasis_delay: Duration::from_millis(200),
            reduced_motion: false,
        }
    }
}

/// Lifecycle of a playback run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPhase {
    #[default]
    Idle,
    Revealing,
    Complete,
}

/// Observable output of the playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// A run started; nothing is visible yet
    Started,
    /// `n` lines are now visible
    Revealed(usize),
    /// The run finished
    Completed,
    /// The one-shot completion emphasis should be shown
    Emphasized,
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Reveal,
    Complete,
    Emphasis,
}

/// Timer-driven reveal of a fixed log
#[derive(Debug)]
pub struct LogPlayback {
    lines: Vec<LogLine>,
    settings: PlaybackSettings,
    phase: PlaybackPhase,
    revealed: usize,
    emphasized: bool,
    reveal_timer: Timer,
    complete_timer: Timer,
    emphasis_timer: Timer,
    rng: StdRng,
    disposed: bool,
}

impl LogPlayback {
    /// Create a playback over `lines` with an entropy-seeded gap generator
    pub fn new(lines: Vec<LogLine>, settings: PlaybackSettings) -> Self {
        Self::with_rng(lines, settings, StdRng::from_entropy())
    }

    /// Create a playback with an explicit random source
    pub fn with_rng(lines: Vec<LogLine>, settings: PlaybackSettings, rng: StdRng) -> Self {
        Self {
            lines,
            settings,
            phase: PlaybackPhase::Idle,
            revealed: 0,
            emphasized: false,
            reveal_timer: Timer::new(),
            complete_timer: Timer::new(),
            emphasis_timer: Timer::new(),
            rng,
            disposed: false,
        }
    }

    /// Begin (or restart) a run at `now`
    pub fn start(&mut self, now: Instant) -> Vec<PlaybackEvent> {
        let mut events = Vec::new();
        if self.disposed {
            debug!("start ignored after dispose");
            return events;
        }

        self.reveal_timer.cancel();
        self.emphasis_timer.cancel();
        self.revealed = 0;
        self.emphasized = false;
        self.phase = PlaybackPhase::Revealing;
        self.complete_timer.start(now, self.settings.duration);
        events.push(PlaybackEvent::Started);
        info!(
            lines = self.lines.len(),
            reduced_motion = self.settings.reduced_motion,
            "deployment playback started"
        );

        if self.lines.is_empty() {
            return events;
        }

        if self.settings.reduced_motion {
            self.revealed = self.lines.len();
            events.push(PlaybackEvent::Revealed(self.revealed));
        } else {
            self.reveal_next(now, &mut events);
        }

        events
    }

    /// Fire every timer that is due at `now`, earliest first
    pub fn tick(&mut self, now: Instant) -> Vec<PlaybackEvent> {
        let mut events = Vec::new();
        if self.disposed {
            return events;
        }

        while let Some(slot) = self.next_due(now) {
            match slot {
                Slot::Reveal => {
                    let Some(fired_at) = self.reveal_timer.take_due(now) else {
                        break;
                    };
                    self.reveal_next(fired_at, &mut events);
                }
                Slot::Complete => {
                    let Some(fired_at) = self.complete_timer.take_due(now) else {
                        break;
                    };
                    self.complete(fired_at, &mut events);
                }
                Slot::Emphasis => {
                    if self.emphasis_timer.take_due(now).is_none() {
                        break;
                    }
                    self.emphasized = true;
                    events.push(PlaybackEvent::Emphasized);
                }
            }
        }

        events
    }

    /// Cancel all pending timers; the playback never changes again
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.reveal_timer.cancel();
        self.complete_timer.cancel();
        self.emphasis_timer.cancel();
        self.disposed = true;
        debug!(revealed = self.revealed, "deployment playback disposed");
    }

    /// Earliest pending deadline, for scheduling the next wake-up
    pub fn next_deadline(&self) -> Option<Instant> {
        timer::earliest([
            self.reveal_timer.deadline(),
            self.complete_timer.deadline(),
            self.emphasis_timer.deadline(),
        ])
    }

    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            revealed_count: self.revealed,
            status: match self.phase {
                PlaybackPhase::Complete => PlaybackStatus::Complete,
                PlaybackPhase::Idle | PlaybackPhase::Revealing => PlaybackStatus::InProgress,
            },
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    /// Lines revealed so far
    pub fn visible_lines(&self) -> &[LogLine] {
        &self.lines[..self.revealed]
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn is_emphasized(&self) -> bool {
        self.emphasized
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn settings(&self) -> PlaybackSettings {
        self.settings
    }

    fn next_due(&self, now: Instant) -> Option<Slot> {
        [
            (Slot::Reveal, &self.reveal_timer),
            (Slot::Complete, &self.complete_timer),
            (Slot::Emphasis, &self.emphasis_timer),
        ]
        .into_iter()
        .filter(|(_, t)| t.is_due(now))
        .min_by_key(|(_, t)| t.deadline())
        .map(|(slot, _)| slot)
    }

    fn reveal_next(&mut self, at: Instant, events: &mut Vec<PlaybackEvent>) {
        if self.revealed >= self.lines.len() {
            return;
        }
        self.revealed += 1;
        debug!(revealed = self.revealed, total = self.lines.len(), "log line revealed");
        events.push(PlaybackEvent::Revealed(self.revealed));

        if self.revealed < self.lines.len() {
            let gap = self.next_gap();
            self.reveal_timer.start(at, gap);
        }
    }

    fn complete(&mut self, at: Instant, events: &mut Vec<PlaybackEvent>) {
        self.reveal_timer.cancel();
        if self.revealed < self.lines.len() {
            self.revealed = self.lines.len();
            events.push(PlaybackEvent::Revealed(self.revealed));
        }
        self.phase = PlaybackPhase::Complete;
        events.push(PlaybackEvent::Completed);
        info!(lines = self.lines.len(), "deployment playback complete");

        if !self.settings.reduced_motion {
            self.emphasis_timer.start(at, self.settings.emphasis_delay);
        }
    }

    fn next_gap(&mut self) -> Duration {
        let min = self.settings.reveal_min.as_millis() as u64;
        let max = (self.settings.reveal_max.as_millis() as u64).max(min);
        Duration::from_millis(self.rng.gen_range(min..=max))
    }
}
