//! Rendering tests for the Help panel

use ratatui::{Terminal, backend::TestBackend};

use agentdeck::ui::widgets::render_help_panel;

use crate::common::{buffer_lines, screen_text};

#[test]
fn test_help_panel_full() {
    let mut terminal = Terminal::new(TestBackend::new(80, 60)).unwrap();
    terminal
        .draw(|frame| render_help_panel(frame, frame.area(), 0))
        .unwrap();

    let screen = screen_text(&terminal);
    assert!(screen.contains("agentdeck - Help"));
    for section in [
        "Global:",
        "Config Form:",
        "Tool Form:",
        "Text Editing:",
        "Deployment:",
        "History:",
    ] {
        assert!(screen.contains(section), "missing {section}");
    }
    assert!(screen.contains("Expand / collapse log"));
}

#[test]
fn test_help_panel_scrolled() {
    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
    terminal
        .draw(|frame| render_help_panel(frame, frame.area(), 2))
        .unwrap();

    let lines = buffer_lines(&terminal);
    // "Key bindings:" and the blank line are scrolled off
    assert!(!lines[1].contains("Key bindings:"));
    assert!(lines[1].contains("Global:"));
}

#[test]
fn test_help_panel_narrow() {
    let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
    terminal
        .draw(|frame| render_help_panel(frame, frame.area(), 0))
        .unwrap();

    assert!(buffer_lines(&terminal)[0].starts_with('┌'));
}
