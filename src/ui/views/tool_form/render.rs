//! Tool Form rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{FormRow, ToolForm};
use crate::ui::{components, navigation, symbols, theme};

const FORM_WIDTH: u16 = 72;
const LABEL_WIDTH: usize = 16;
const EDITOR_HEIGHT: u16 = 3;

impl ToolForm {
    /// Render the form centered over `area`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = self.rows();
        let editor_height = if self.editor.is_some() { EDITOR_HEIGHT } else { 0 };
        // rows + error line + editor + borders
        let height = rows.len() as u16 + 1 + editor_height + 2;
        let popup = components::centered_rect(FORM_WIDTH, height, area);

        let title = if self.target().is_some() {
            " Edit tool "
        } else {
            " Add tool "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(
                Line::from(title)
                    .style(Style::default().add_modifier(Modifier::BOLD))
                    .centered(),
            );
        let inner = block.inner(popup);

        frame.render_widget(Clear, popup);
        frame.render_widget(block, popup);

        let [list_area, error_area, editor_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(editor_height),
        ])
        .areas(inner);

        let visible = list_area.height as usize;
        let offset = navigation::adjust_scroll(self.selected, 0, visible);
        let value_width = (inner.width as usize).saturating_sub(LABEL_WIDTH + 2);
        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, row)| self.build_row_line(*row, idx == self.selected, value_width))
            .collect();
        frame.render_widget(Paragraph::new(lines), list_area);

        if let Some(error) = self.error() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    error.to_string(),
                    Style::default().fg(Color::Red),
                ))),
                error_area,
            );
        }

        if let Some(ref editor) = self.editor {
            frame.render_widget(&editor.textarea, editor_area);
        }
    }

    fn build_row_line(&self, row: FormRow, is_selected: bool, value_width: usize) -> Line<'static> {
        let marker = if is_selected { "> " } else { "  " };

        let spans = match row {
            FormRow::AddHeader | FormRow::AddKey => {
                vec![Span::styled(row.label(), Style::default().fg(Color::Cyan))]
            }
            FormRow::Save => vec![Span::styled(
                row.label(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )],
            FormRow::Delete => vec![Span::styled(row.label(), Style::default().fg(Color::Red))],
            FormRow::Method => vec![
                Span::styled(
                    format!("{:LABEL_WIDTH$}", row.label()),
                    Style::default().fg(theme::config_view::TITLE),
                ),
                Span::styled(
                    format!(
                        "{} {} {}",
                        symbols::choice::PREV,
                        self.draft().method.label(),
                        symbols::choice::NEXT
                    ),
                    Style::default().fg(theme::config_view::VALUE),
                ),
            ],
            text_row => {
                let text = self.text(text_row).unwrap_or_default();
                let value = if text.is_empty() {
                    Span::styled("(empty)", Style::default().fg(Color::DarkGray))
                } else if text_row.is_masked() {
                    Span::styled(
                        symbols::mask_secret(text),
                        Style::default().fg(theme::config_view::VALUE),
                    )
                } else {
                    Span::styled(
                        text.chars().take(value_width).collect::<String>(),
                        Style::default().fg(theme::config_view::VALUE),
                    )
                };
                vec![
                    Span::styled(
                        format!("{:LABEL_WIDTH$}", row.label()),
                        Style::default().fg(theme::config_view::TITLE),
                    ),
                    value,
                ]
            }
        };

        let mut line = vec![Span::raw(marker)];
        line.extend(spans);
        let line = Line::from(line);
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
