//! Rendering logic for the application

use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::state::{App, View};
use crate::keys::{self, HintContext};
use crate::ui::views::ConfigView;
use crate::ui::widgets::{
    render_error_banner, render_help_panel, render_save_indicator, render_status_bar,
    status_bar_height,
};

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let notification = self.notification.as_ref().filter(|n| !n.is_expired());
        let hints = keys::current_hints(self.current_view, &self.build_hint_context());
        let sb_height = status_bar_height(&hints);

        let area = frame.area();
        let main_area = Rect {
            height: area.height.saturating_sub(sb_height),
            ..area
        };

        match self.current_view {
            View::Config => self.render_config_view(frame, main_area, notification),
            View::History => self.render_history_view(frame, main_area, notification),
            View::Help => {
                self.last_frame_height.set(main_area.height);
                render_help_panel(frame, main_area, self.help_scroll);
            }
        }

        render_status_bar(frame, &hints);

        // Errors are always shown prominently, above the status bar
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error, sb_height);
        }
    }

    /// Build HintContext from current App state
    fn build_hint_context(&self) -> HintContext {
        let editing = self.config_view.editing_field();
        let tool_form = self.config_view.tool_form();
        HintContext {
            editing: editing.is_some() || tool_form.is_some_and(|f| f.is_editing()),
            multiline: editing.is_some_and(ConfigView::is_multiline),
            tool_form: tool_form.is_some(),
            deployment_open: self.deployment.is_some(),
            deploying: self.deployment.as_ref().is_some_and(|d| d.is_in_progress()),
        }
    }

    fn render_config_view(
        &self,
        frame: &mut Frame,
        area: Rect,
        notification: Option<&crate::model::Notification>,
    ) {
        let panel_height = self.deployment.as_ref().map_or(0, |d| d.height());
        let [top_bar, panel_area, form_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(panel_height),
            Constraint::Min(0),
        ])
        .areas(area);

        render_save_indicator(
            frame,
            top_bar,
            &self.agent.name,
            self.tracker.status(),
            self.history.len(),
        );

        if let Some(ref deployment) = self.deployment {
            deployment.render(frame, panel_area);
        }

        self.last_frame_height
            .set(ConfigView::visible_rows(form_area) as u16);
        self.config_view
            .render(frame, form_area, &self.agent, notification);
    }

    fn render_history_view(
        &self,
        frame: &mut Frame,
        area: Rect,
        notification: Option<&crate::model::Notification>,
    ) {
        self.last_frame_height.set(area.height.saturating_sub(2));
        self.history_view
            .render(frame, area, self.history.entries(), Utc::now(), notification);
    }
}
