//! Help panel widget
//!
//! `build_help_lines()` is the single source for both rendering and the
//! scroll bound used by input handling.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys::{self, KeyBindEntry};

/// Build all help panel lines
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Navigation", keys::NAV_KEYS);
    push_section(&mut lines, "Config Form", keys::CONFIG_KEYS);
    push_section(&mut lines, "Tool Form", keys::TOOL_FORM_KEYS);
    push_section(&mut lines, "Text Editing", keys::INPUT_KEYS);
    push_section(&mut lines, "Deployment", keys::DEPLOY_KEYS);
    push_section(&mut lines, "History", keys::HISTORY_KEYS);

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, entries: &[KeyBindEntry]) {
    lines.push(Line::from(format!("{title}:")).underlined());

    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:10}", entry.key),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(entry.description),
        ]));
    }

    lines.push(Line::from(""));
}

/// Largest useful scroll offset for a panel of `height` rows
pub fn max_help_scroll(height: u16) -> u16 {
    let content = build_help_lines().len() as u16;
    // 2 rows of borders
    content.saturating_sub(height.saturating_sub(2))
}

/// Render help content showing key bindings
///
/// `scroll` is the vertical scroll offset (0 = top).
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16) {
    let title = Line::from(" agentdeck - Help ").bold().white().centered();

    frame.render_widget(
        Paragraph::new(build_help_lines())
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((scroll, 0)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_every_section_present() {
        let text: Vec<String> = build_help_lines().iter().map(plain).collect();
        for section in [
            "Global:",
            "Navigation:",
            "Config Form:",
            "Tool Form:",
            "Text Editing:",
            "Deployment:",
            "History:",
        ] {
            assert!(text.iter().any(|l| l == section), "missing {section}");
        }
    }

    #[test]
    fn test_deploy_key_listed() {
        let text: Vec<String> = build_help_lines().iter().map(plain).collect();
        assert!(text.iter().any(|l| l.starts_with("  D") && l.contains("Deploy agent")));
    }

    #[test]
    fn test_max_help_scroll() {
        let total = build_help_lines().len() as u16;
        assert_eq!(max_help_scroll(total + 2), 0);
        assert_eq!(max_help_scroll(12), total - 10);
        assert_eq!(max_help_scroll(0), total);
    }
}
