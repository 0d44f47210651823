//! Config View rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{ConfigRow, ConfigView};
use crate::model::{AgentConfig, FieldKey, Notification};
use crate::ui::{components, symbols, theme};

/// Width of the title column
const TITLE_WIDTH: usize = 22;

/// Editor heights (including borders)
const SINGLE_LINE_EDITOR_HEIGHT: u16 = 3;
const MULTI_LINE_EDITOR_HEIGHT: u16 = 10;

/// One-line display value for a field
pub fn field_value(agent: &AgentConfig, field: FieldKey) -> String {
    if let Some(text) = agent.text(field) {
        if text.is_empty() {
            return "(empty)".to_string();
        }
        if field == FieldKey::SecretKey {
            return symbols::mask_secret(text);
        }
        let mut lines = text.lines();
        let first = lines.next().unwrap_or_default();
        return match lines.count() {
            0 => first.to_string(),
            more => format!("{first} (+{more} lines)"),
        };
    }
    if let Some(on) = agent.flag(field) {
        return toggle_marker(on).to_string();
    }
    match agent.choice_label(field) {
        Some(label) => format!("{} {label} {}", symbols::choice::PREV, symbols::choice::NEXT),
        None => String::new(),
    }
}

fn toggle_marker(on: bool) -> &'static str {
    if on {
        symbols::toggles::ON
    } else {
        symbols::toggles::OFF
    }
}

/// Cut `text` to `max` characters, ending in "…" when shortened
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut cut: String = text.chars().take(keep).collect();
    cut.push('…');
    cut
}

impl ConfigView {
    /// Render the form with optional notification in the title bar
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        agent: &AgentConfig,
        notification: Option<&Notification>,
    ) {
        let (form_area, editor_area) = match &self.editor {
            Some(editor) => {
                let height = if Self::is_multiline(editor.field) {
                    MULTI_LINE_EDITOR_HEIGHT
                } else {
                    SINGLE_LINE_EDITOR_HEIGHT
                };
                let chunks =
                    Layout::vertical([Constraint::Min(3), Constraint::Length(height)]).split(area);
                (chunks[0], Some(chunks[1]))
            }
            None => (area, None),
        };

        self.render_form(frame, form_area, agent, notification);

        if let (Some(editor), Some(editor_area)) = (&self.editor, editor_area) {
            frame.render_widget(&editor.textarea, editor_area);
        }

        if let Some(ref form) = self.tool_form {
            form.render(frame, area);
        }
    }

    /// Number of form rows that fit in `area` (minus borders)
    pub fn visible_rows(area: Rect) -> usize {
        area.height.saturating_sub(2) as usize
    }

    fn render_form(
        &self,
        frame: &mut Frame,
        area: Rect,
        agent: &AgentConfig,
        notification: Option<&Notification>,
    ) {
        let title = Line::from(" Agent Configuration ")
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

        let inner_height = Self::visible_rows(area);
        let value_width = (area.width as usize).saturating_sub(TITLE_WIDTH + 6);
        let rows = Self::rows(agent);
        // Keep the selection visible even if the last render used a taller area
        let scroll_offset =
            crate::ui::navigation::adjust_scroll(self.selected, self.scroll_offset, inner_height);

        let mut lines = Vec::new();
        for (idx, row) in rows.iter().enumerate().skip(scroll_offset) {
            if lines.len() >= inner_height {
                break;
            }
            let is_selected = idx == self.selected;
            lines.push(self.build_row_line(agent, *row, is_selected, value_width));

            if *row == ConfigRow::Field(FieldKey::WelcomeMessage) {
                let placeholders = agent.welcome_placeholders();
                if !placeholders.is_empty() && lines.len() < inner_height {
                    lines.push(build_placeholder_line(&placeholders));
                }
            }
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn build_row_line(
        &self,
        agent: &AgentConfig,
        row: ConfigRow,
        is_selected: bool,
        value_width: usize,
    ) -> Line<'static> {
        let marker = if is_selected { "> " } else { "  " };

        let (title, value_spans) = match row {
            ConfigRow::Field(field) => {
                let value = truncate(&field_value(agent, field), value_width);
                let color = match agent.flag(field) {
                    Some(true) => theme::config_view::ON,
                    Some(false) => theme::config_view::OFF,
                    None => theme::config_view::VALUE,
                };
                (field.title(), vec![Span::styled(value, Style::default().fg(color))])
            }
            ConfigRow::Tool(index) => {
                let Some(tool) = agent.tools.get(index) else {
                    return Line::default();
                };
                let first_custom = agent.tools.iter().position(|t| !t.built_in);
                let title = if index == 0 {
                    FieldKey::Tools.title()
                } else if first_custom == Some(index) {
                    "Custom tools"
                } else {
                    ""
                };
                let color = if tool.enabled {
                    theme::config_view::ON
                } else {
                    theme::config_view::OFF
                };
                let name = format!("{} {}", toggle_marker(tool.enabled), tool.name);
                let description = truncate(
                    &tool.description,
                    value_width.saturating_sub(name.chars().count() + 2),
                );
                (
                    title,
                    vec![
                        Span::styled(name, Style::default().fg(color)),
                        Span::raw("  "),
                        Span::styled(description, Style::default().fg(Color::DarkGray)),
                    ],
                )
            }
            ConfigRow::AddTool => (
                "",
                vec![Span::styled("+ Add tool", Style::default().fg(Color::Cyan))],
            ),
        };

        let mut spans = vec![
            Span::raw(marker),
            Span::styled(
                format!("{title:TITLE_WIDTH$}"),
                Style::default().fg(theme::config_view::TITLE),
            ),
        ];
        spans.extend(value_spans);

        let line = Line::from(spans);
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
}

fn build_placeholder_line(placeholders: &[String]) -> Line<'static> {
    let names = placeholders
        .iter()
        .map(|name| format!("{{{{{name}}}}}"))
        .collect::<Vec<_>>()
        .join(", ");
    Line::from(vec![
        Span::raw(format!("  {:TITLE_WIDTH$}", "")),
        Span::styled("Placeholders: ", Style::default().fg(Color::DarkGray)),
        Span::styled(names, Style::default().fg(theme::config_view::PLACEHOLDER)),
    ])
}
