//! Application state and view management

use std::cell::Cell;

use tracing::{debug, info};

use crate::config::Settings;
use crate::engine::ChangeTracker;
use crate::model::{AgentConfig, HistoryLog, Notification};
use crate::ui::views::{ConfigView, DeploymentView, HistoryView};

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Config,
    History,
    Help,
}

/// The main application state
///
/// One App is one editor instance: it owns the only change tracker, history
/// log and deployment session.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Previous view (for back navigation)
    pub(crate) previous_view: Option<View>,
    /// User settings (author, timing, reduced motion)
    pub settings: Settings,
    /// Agent being edited
    pub agent: AgentConfig,
    /// Debounced save status and history batching
    pub tracker: ChangeTracker,
    /// Recorded edits, newest first
    pub history: HistoryLog,
    /// Config form state
    pub config_view: ConfigView,
    /// History list state
    pub history_view: HistoryView,
    /// Deployment panel (present while shown)
    pub deployment: Option<DeploymentView>,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Help panel scroll offset
    pub(crate) help_scroll: u16,
    /// Last known list height (updated during render)
    pub(crate) last_frame_height: Cell<u16>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(settings: Settings) -> Self {
        let tracker = ChangeTracker::new(settings.debounce(), settings.author.clone());
        info!(author = %settings.author, reduced_motion = settings.reduced_motion, "editor opened");
        Self {
            running: true,
            current_view: View::Config,
            previous_view: None,
            tracker,
            agent: AgentConfig::default(),
            history: HistoryLog::new(),
            config_view: ConfigView::new(),
            history_view: HistoryView::new(),
            deployment: None,
            error_message: None,
            notification: None,
            help_scroll: 0,
            last_frame_height: Cell::new(20),
            settings,
        }
    }

    /// Switch to next view (Tab key)
    pub(crate) fn next_view(&mut self) {
        let next = match self.current_view {
            View::Config => View::History,
            View::History => View::Config,
            View::Help => View::Config,
        };
        self.go_to_view(next);
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            debug!(from = ?self.current_view, to = ?view, "view change");
            self.previous_view = Some(self.current_view);
            self.current_view = view;

            match view {
                View::History => self.history_view.reset(),
                View::Help => self.help_scroll = 0,
                View::Config => {}
            }
        }
    }

    /// Go back to previous view
    pub(crate) fn go_back(&mut self) {
        let target = self.previous_view.take().unwrap_or_default();
        // Never go "back" into the view we are already on
        self.current_view = if target == self.current_view {
            View::Config
        } else {
            target
        };
    }

    /// Stop the event loop, releasing every timer first
    pub(crate) fn quit(&mut self) {
        self.dispose();
        self.running = false;
    }

    /// Cancel the change tracker and any deployment playback
    ///
    /// Safe to call more than once.
    pub fn dispose(&mut self) {
        self.tracker.dispose();
        if let Some(deployment) = self.deployment.as_mut() {
            deployment.dispose();
        }
    }
}
