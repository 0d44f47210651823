//! Input handling for the application

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use super::state::{App, View};
use crate::keys;
use crate::ui::views::ConfigAction;
use crate::ui::widgets::max_help_scroll;

impl App {
    /// Handle a key event received at `now`
    pub fn on_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Clear error message on any key press
        self.error_message = None;

        // Handle Ctrl+C globally
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }

        // While editing text or filling the tool form, every key belongs to the view
        if self.current_view == View::Config && self.config_view.is_editing() {
            let action = self.config_view.handle_key(key, &mut self.agent);
            self.handle_config_action(action, now);
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_view_key(key, now);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            keys::QUIT => {
                self.handle_quit();
                true
            }
            keys::ESC => {
                self.handle_back();
                true
            }
            keys::HELP => {
                self.go_to_view(View::Help);
                true
            }
            keys::TAB => {
                self.next_view();
                true
            }
            _ => false,
        }
    }

    fn handle_quit(&mut self) {
        if self.current_view == View::Config {
            self.quit();
        } else {
            self.go_back();
        }
    }

    fn handle_back(&mut self) {
        if self.current_view != View::Config {
            self.go_back();
        }
    }

    fn handle_view_key(&mut self, key: KeyEvent, now: Instant) {
        let visible_count = self.last_frame_height.get() as usize;
        match self.current_view {
            View::Config => {
                let action =
                    self.config_view
                        .handle_key_with_height(key, &mut self.agent, visible_count);
                self.handle_config_action(action, now);
            }
            View::History => {
                self.history_view
                    .handle_key_with_height(key, self.history.len(), visible_count);
            }
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        let max = max_help_scroll(self.last_frame_height.get());
        match key.code {
            code if keys::is_move_down(code) => {
                self.help_scroll = self.help_scroll.saturating_add(1).min(max);
            }
            code if keys::is_move_up(code) => {
                self.help_scroll = self.help_scroll.saturating_sub(1);
            }
            keys::GO_TOP => self.help_scroll = 0,
            keys::GO_BOTTOM => self.help_scroll = max,
            _ => {}
        }
    }

    fn handle_config_action(&mut self, action: ConfigAction, now: Instant) {
        match action {
            ConfigAction::None => {}
            ConfigAction::Changed(field) => self.record_change(field, now),
            ConfigAction::Rejected(err) => {
                warn!(error = %err, "tool change rejected");
                self.error_message = Some(err.to_string());
            }
            ConfigAction::Deploy => self.start_deployment(now),
            ConfigAction::ToggleLogSize => self.toggle_deployment_log(),
            ConfigAction::CloseDeployment => self.close_deployment(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SaveStatus;
    use crate::model::FieldKey;

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.on_key_event(KeyEvent::from(code), now);
    }

    #[test]
    fn test_typing_marks_saving() {
        let t0 = Instant::now();
        let mut app = App::default();
        press(&mut app, KeyCode::Enter, t0);
        press(&mut app, KeyCode::Char('!'), t0);
        assert_eq!(app.tracker.status(), SaveStatus::Saving);
        assert_eq!(app.tracker.pending(), &[FieldKey::Name]);
    }

    #[test]
    fn test_q_types_while_editing() {
        let t0 = Instant::now();
        let mut app = App::default();
        press(&mut app, KeyCode::Enter, t0);
        press(&mut app, KeyCode::Char('q'), t0);
        assert!(app.running);
        assert!(app.agent.name.ends_with('q'));
    }

    #[test]
    fn test_q_quits_from_config() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'), Instant::now());
        assert!(!app.running);
        assert!(app.tracker.is_disposed());
    }

    #[test]
    fn test_q_goes_back_from_history() {
        let mut app = App::default();
        let t0 = Instant::now();
        press(&mut app, KeyCode::Tab, t0);
        assert_eq!(app.current_view, View::History);
        press(&mut app, KeyCode::Char('q'), t0);
        assert_eq!(app.current_view, View::Config);
        assert!(app.running);
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let mut app = App::default();
        let t0 = Instant::now();
        press(&mut app, KeyCode::Enter, t0);
        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), t0);
        assert!(!app.running);
    }

    #[test]
    fn test_deploy_key() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('D'), Instant::now());
        assert!(app.deployment.is_some());
        press(&mut app, KeyCode::Char('e'), Instant::now());
        assert!(app.deployment.as_ref().unwrap().is_expanded());
        press(&mut app, KeyCode::Char('x'), Instant::now());
        assert!(app.deployment.is_none());
    }

    #[test]
    fn test_help_scroll_clamped() {
        let mut app = App::default();
        let t0 = Instant::now();
        press(&mut app, KeyCode::Char('?'), t0);
        assert_eq!(app.current_view, View::Help);
        press(&mut app, KeyCode::Char('k'), t0);
        assert_eq!(app.help_scroll, 0);
        press(&mut app, KeyCode::Char('G'), t0);
        assert_eq!(app.help_scroll, max_help_scroll(app.last_frame_height.get()));
    }

    #[test]
    fn test_tool_form_captures_quit() {
        let mut app = App::default();
        let t0 = Instant::now();
        press(&mut app, KeyCode::Char('a'), t0);
        assert!(app.config_view.tool_form().is_some());
        press(&mut app, KeyCode::Char('?'), t0);
        assert_eq!(app.current_view, View::Config);
        press(&mut app, KeyCode::Char('q'), t0);
        assert!(app.running);
        assert!(app.config_view.tool_form().is_none());
        assert_eq!(app.tracker.status(), SaveStatus::Idle);
    }

    #[test]
    fn test_rejected_tool_change_shows_error() {
        let mut app = App::default();
        let t0 = Instant::now();
        // bottom row is "add tool"; four tools sit above it
        press(&mut app, KeyCode::Char('G'), t0);
        for _ in 0..app.agent.tools.len() {
            press(&mut app, KeyCode::Char('k'), t0);
        }
        press(&mut app, KeyCode::Char('d'), t0);
        assert_eq!(
            app.error_message.as_deref(),
            Some("built-in tool \"End call\" cannot be deleted")
        );
        assert_eq!(app.tracker.status(), SaveStatus::Idle);
        assert!(app.tracker.pending().is_empty());
    }

    #[test]
    fn test_error_cleared_on_key() {
        let mut app = App::default();
        app.error_message = Some("bad config".to_string());
        press(&mut app, KeyCode::Char('j'), Instant::now());
        assert!(app.error_message.is_none());
    }
}
