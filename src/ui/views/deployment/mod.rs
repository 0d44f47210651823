//! Deployment panel
//!
//! Docked above the config form while a deployment is shown. Owns the
//! [`LogPlayback`] driving it, so closing the panel disposes the playback.

mod render;

use std::time::Instant;

use crate::engine::{LogPlayback, PlaybackEvent};
use crate::model::PlaybackState;

/// Panel heights, including borders
pub const COLLAPSED_HEIGHT: u16 = 8;
pub const EXPANDED_HEIGHT: u16 = 16;
pub const SUCCESS_HEIGHT: u16 = 3;

/// Deployment panel state
#[derive(Debug)]
pub struct DeploymentView {
    playback: LogPlayback,
    expanded: bool,
}

impl DeploymentView {
    pub fn new(playback: LogPlayback) -> Self {
        Self {
            playback,
            expanded: false,
        }
    }

    /// Start the playback at `now`
    pub fn start(&mut self, now: Instant) -> Vec<PlaybackEvent> {
        self.playback.start(now)
    }

    /// Advance the playback to `now`
    pub fn tick(&mut self, now: Instant) -> Vec<PlaybackEvent> {
        self.playback.tick(now)
    }

    /// Stop all playback timers
    pub fn dispose(&mut self) {
        self.playback.dispose();
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.playback.next_deadline()
    }

    pub fn state(&self) -> PlaybackState {
        self.playback.state()
    }

    pub fn playback(&self) -> &LogPlayback {
        &self.playback
    }

    /// Whether the run is still going (deploy key disabled)
    pub fn is_in_progress(&self) -> bool {
        !self.playback.is_disposed() && !self.state().is_complete()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Rows the panel occupies
    pub fn height(&self) -> u16 {
        match (self.expanded, self.state().is_complete()) {
            (true, _) => EXPANDED_HEIGHT,
            (false, true) => SUCCESS_HEIGHT,
            (false, false) => COLLAPSED_HEIGHT,
        }
    }
}
