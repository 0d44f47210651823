//! Save indicator bar
//!
//! One row at the top of the config view: app title, save status and the
//! number of recorded history entries.

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::engine::SaveStatus;
use crate::ui::theme;

/// Text for a save status; `Idle` shows nothing
pub fn save_status_text(status: SaveStatus) -> Option<&'static str> {
    match status {
        SaveStatus::Idle => None,
        SaveStatus::Saving => Some("Saving changes..."),
        SaveStatus::Saved => Some("All changes saved"),
    }
}

fn history_count_text(count: usize) -> String {
    match count {
        1 => "1 history entry".to_string(),
        n => format!("{n} history entries"),
    }
}

/// Build the indicator line
pub fn build_save_indicator(
    agent_name: &str,
    status: SaveStatus,
    history_count: usize,
) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" {agent_name} "),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", history_count_text(history_count)),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if let Some(text) = save_status_text(status) {
        let color = match status {
            SaveStatus::Saving => theme::save_indicator::SAVING,
            _ => theme::save_indicator::SAVED,
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {text} "),
            Style::default().fg(Color::Black).bg(color),
        ));
    }

    Line::from(spans)
}

/// Render the indicator into `area` (one row)
pub fn render_save_indicator(
    frame: &mut Frame,
    area: Rect,
    agent_name: &str,
    status: SaveStatus,
    history_count: usize,
) {
    let line = build_save_indicator(agent_name, status, history_count);
    frame.render_widget(Paragraph::new(line), area);
}
