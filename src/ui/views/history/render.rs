//! History View rendering

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::HistoryView;
use crate::model::{HistoryEntry, Notification, format_relative};
use crate::ui::{components, navigation, theme};

impl HistoryView {
    /// Render `entries` (newest first) relative to `now`
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        entries: &[HistoryEntry],
        now: DateTime<Utc>,
        notification: Option<&Notification>,
    ) {
        let title = Line::from(format!(" Edit History ({}) ", entries.len()))
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Cyan),
            )
            .centered();

        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::bordered_block_with_notification(title, notif_line);

        if entries.is_empty() {
            frame.render_widget(components::no_history_state().block(block), area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        let selected = navigation::clamp_selection(self.selected_index, entries.len());
        let scroll_offset = navigation::adjust_scroll(selected, self.scroll_offset, inner_height);

        let lines: Vec<Line> = entries
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(inner_height)
            .map(|(idx, entry)| build_entry_line(entry, now, idx == selected))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn build_entry_line(entry: &HistoryEntry, now: DateTime<Utc>, is_selected: bool) -> Line<'static> {
    let line = Line::from(vec![
        Span::raw(if is_selected { "> " } else { "  " }),
        Span::styled(
            format!("{:12}", format_relative(entry.created_at, now)),
            Style::default().fg(theme::history_view::TIMESTAMP),
        ),
        Span::styled(
            format!("{:22}", entry.author),
            Style::default().fg(theme::history_view::AUTHOR),
        ),
        Span::styled(
            entry.description.clone(),
            Style::default().fg(theme::history_view::DESCRIPTION),
        ),
    ]);

    if is_selected {
        line.style(
            Style::default()
                .fg(theme::selection::FG)
                .bg(theme::selection::BG),
        )
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_entry_line_columns() {
        let now = Utc::now();
        let entry = HistoryEntry::new(
            "Updated agent name",
            "dylan@example.com",
            now - Duration::minutes(5),
        );
        let line = build_entry_line(&entry, now, false);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(
            text,
            "  5 min ago   dylan@example.com     Updated agent name"
        );
    }

    #[test]
    fn test_selected_line_marker() {
        let now = Utc::now();
        let entry = HistoryEntry::new("Deployed agent", "dylan@example.com", now);
        let line = build_entry_line(&entry, now, true);
        assert_eq!(line.spans[0].content, "> ");
        assert_eq!(line.style.bg, Some(theme::selection::BG));
    }
}
