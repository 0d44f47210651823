//! Timer-driven updates
//!
//! The event loop calls [`App::tick`] after every input event or poll
//! timeout, and sleeps no longer than [`App::next_deadline`].

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};

use super::state::App;
use crate::engine::{ChangeEvent, LogPlayback, PlaybackEvent};
use crate::model::{FieldKey, NOTIFICATION_TTL, Notification, NotificationKind, catalog};
use crate::ui::views::DeploymentView;

/// History description for an explicit deployment
pub const DEPLOYED_DESCRIPTION: &str = "Deployed agent";

/// Notification shown when a deployment finishes
pub const DEPLOYMENT_COMPLETE_MESSAGE: &str = "Deployment complete";

impl App {
    /// Fire every timer due at `now`
    pub fn tick(&mut self, now: Instant) {
        let events = self.tracker.tick(now);
        self.apply_change_events(events);

        let playback_events = match self.deployment.as_mut() {
            Some(deployment) => deployment.tick(now),
            None => Vec::new(),
        };
        self.apply_playback_events(playback_events, now);

        self.clear_expired_notification(now);
    }

    /// Earliest moment anything on screen changes without input
    pub fn next_deadline(&self) -> Option<Instant> {
        crate::engine::timer::earliest([
            self.tracker.next_deadline(),
            self.deployment.as_ref().and_then(|d| d.next_deadline()),
            self.notification.as_ref().map(|n| n.created_at + NOTIFICATION_TTL),
        ])
    }

    /// Report an edit to `field` made at `now`
    pub(crate) fn record_change(&mut self, field: FieldKey, now: Instant) {
        let events = self.tracker.record_change(field, now);
        self.apply_change_events(events);
    }

    /// Open the deployment panel and start a run
    ///
    /// Ignored while a run is in progress.
    pub(crate) fn start_deployment(&mut self, now: Instant) {
        if self.deployment.as_ref().is_some_and(|d| d.is_in_progress()) {
            debug!("deploy ignored: deployment in progress");
            return;
        }
        if let Some(previous) = self.deployment.as_mut() {
            previous.dispose();
        }

        let playback = LogPlayback::new(catalog::deployment_log(), self.settings.playback());
        let mut deployment = DeploymentView::new(playback);
        let events = deployment.start(now);
        self.deployment = Some(deployment);

        self.history.record(
            DEPLOYED_DESCRIPTION,
            self.settings.author.clone(),
            Utc::now(),
        );
        self.history_view.reset();
        info!(agent = %self.agent.name, "deployment started");

        self.apply_playback_events(events, now);
    }

    /// Close the deployment panel, cancelling its timers
    pub(crate) fn close_deployment(&mut self) {
        if let Some(mut deployment) = self.deployment.take() {
            deployment.dispose();
            debug!("deployment panel closed");
        }
    }

    pub(crate) fn toggle_deployment_log(&mut self) {
        if let Some(deployment) = self.deployment.as_mut() {
            deployment.toggle_expanded();
        }
    }

    fn apply_change_events(&mut self, events: Vec<ChangeEvent>) {
        for event in events {
            match event {
                // The status is read straight from the tracker when rendering
                ChangeEvent::Status(_) => {}
                ChangeEvent::History(entry) => {
                    self.history.prepend(entry);
                    self.history_view.reset();
                }
            }
        }
    }

    fn apply_playback_events(&mut self, events: Vec<PlaybackEvent>, now: Instant) {
        for event in events {
            if event == PlaybackEvent::Completed {
                info!("deployment complete");
                self.notification = Some(Notification::new_at(
                    DEPLOYMENT_COMPLETE_MESSAGE,
                    NotificationKind::Success,
                    now,
                ));
            }
        }
    }

    /// Clear expired notification
    pub(crate) fn clear_expired_notification(&mut self, now: Instant) {
        if let Some(ref notification) = self.notification
            && notification.is_expired_at(now)
        {
            self.notification = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::engine::SaveStatus;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_change_flows_into_history() {
        let t0 = Instant::now();
        let mut app = App::default();
        app.record_change(FieldKey::Name, t0);
        app.record_change(FieldKey::SelectedVoice, t0 + ms(500));
        assert_eq!(app.tracker.status(), SaveStatus::Saving);

        app.tick(t0 + ms(2000));
        assert_eq!(app.tracker.status(), SaveStatus::Saved);
        assert!(app.history.is_empty());

        app.tick(t0 + ms(3500));
        assert_eq!(app.tracker.status(), SaveStatus::Idle);
        assert_eq!(app.history.len(), 1);
        assert_eq!(
            app.history.entries()[0].description,
            "Updated agent name and voice"
        );
    }

    #[test]
    fn test_deployment_records_history_and_notifies() {
        let t0 = Instant::now();
        let mut app = App::new(Settings {
            reduced_motion: true,
            ..Settings::default()
        });
        app.start_deployment(t0);
        assert_eq!(app.history.entries()[0].description, DEPLOYED_DESCRIPTION);
        assert!(app.deployment.as_ref().unwrap().is_in_progress());

        app.tick(t0 + Duration::from_secs(10));
        let notification = app.notification.as_ref().unwrap();
        assert_eq!(notification.message, DEPLOYMENT_COMPLETE_MESSAGE);
        assert!(!app.deployment.as_ref().unwrap().is_in_progress());

        app.tick(t0 + Duration::from_secs(15));
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_deploy_ignored_while_in_progress() {
        let t0 = Instant::now();
        let mut app = App::default();
        app.start_deployment(t0);
        app.start_deployment(t0 + ms(100));
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn test_redeploy_after_completion() {
        let t0 = Instant::now();
        let mut app = App::default();
        app.start_deployment(t0);
        app.tick(t0 + Duration::from_secs(10));
        app.start_deployment(t0 + Duration::from_secs(11));
        assert_eq!(app.history.len(), 2);
        assert!(app.deployment.as_ref().unwrap().is_in_progress());
    }

    #[test]
    fn test_next_deadline_tracks_all_sources() {
        let t0 = Instant::now();
        let mut app = App::default();
        assert_eq!(app.next_deadline(), None);
        app.record_change(FieldKey::Language, t0);
        assert_eq!(app.next_deadline(), Some(t0 + ms(1500)));
    }

    #[test]
    fn test_close_deployment_disposes() {
        let t0 = Instant::now();
        let mut app = App::default();
        app.start_deployment(t0);
        app.close_deployment();
        assert!(app.deployment.is_none());
        app.tick(t0 + Duration::from_secs(10));
        assert!(app.notification.is_none());
    }
}
