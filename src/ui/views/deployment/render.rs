//! Deployment panel rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::DeploymentView;
use crate::model::LogLine;
use crate::ui::{components, navigation, symbols, theme};

impl DeploymentView {
    /// Status line shown above the log
    pub fn header_line(&self) -> Line<'static> {
        let playback = self.playback();
        let state = self.state();

        if state.is_complete() {
            let mut style = Style::default()
                .fg(theme::deployment::SUCCESS)
                .add_modifier(Modifier::BOLD);
            if playback.is_emphasized() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            return Line::from(Span::styled(
                format!(" {} Deployment successful ", symbols::deployment::SUCCESS),
                style,
            ));
        }

        let spinner = symbols::deployment::SPINNER
            [state.revealed_count % symbols::deployment::SPINNER.len()];
        Line::from(vec![
            Span::styled(
                format!(" {spinner} Deploying agent... "),
                Style::default().fg(theme::deployment::IN_PROGRESS),
            ),
            Span::raw(format!("{}/{}", state.revealed_count, playback.total_lines())),
        ])
    }

    /// Render the panel into `area`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = components::bordered_block(Line::from(" Deployment "));
        let inner_height = area.height.saturating_sub(2) as usize;

        let mut lines = vec![self.header_line()];
        let log_rows = inner_height.saturating_sub(1);
        if log_rows > 0 {
            let visible = self.playback().visible_lines();
            let offset = navigation::tail_offset(visible.len(), log_rows);
            lines.extend(visible[offset..].iter().map(build_log_line));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn build_log_line(line: &LogLine) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {}  ", line.display_time()),
            Style::default().fg(theme::deployment::TIME),
        ),
        Span::styled(
            line.message.clone(),
            Style::default().fg(theme::deployment::MESSAGE),
        ),
    ])
}
