//! Rendering tests for the edit history view

use std::time::Instant;

use chrono::{Duration, Utc};
use crossterm::event::KeyCode;

use agentdeck::app::{App, View};

use crate::common::{buffer_lines, press, render_app, screen_text};

fn history_app() -> App {
    let mut app = App::default();
    press(&mut app, KeyCode::Tab, Instant::now());
    assert_eq!(app.current_view, View::History);
    app
}

#[test]
fn test_history_empty_state() {
    let app = history_app();
    let screen = screen_text(&render_app(&app, 100, 20));
    assert!(screen.contains("Edit History (0)"));
    assert!(screen.contains("No edit history yet"));
}

#[test]
fn test_history_entries_newest_first() {
    let mut app = history_app();
    let now = Utc::now();
    app.history
        .record("Updated voice", "sarah@example.com", now - Duration::days(1));
    app.history.record(
        "Updated agent name and language",
        "dylan@example.com",
        now - Duration::minutes(5),
    );

    let lines = buffer_lines(&render_app(&app, 100, 20));
    assert!(lines[0].contains("Edit History (2)"));
    assert!(lines[1].contains("> 5 min ago"));
    assert!(lines[1].contains("dylan@example.com"));
    assert!(lines[1].contains("Updated agent name and language"));
    assert!(lines[2].contains("Yesterday"));
    assert!(lines[2].contains("Updated voice"));
}

#[test]
fn test_history_selection_moves() {
    let mut app = history_app();
    let now = Utc::now();
    for minutes in [30, 20, 10] {
        app.history.record(
            format!("Entry {minutes}"),
            "dylan@example.com",
            now - Duration::minutes(minutes),
        );
    }
    press(&mut app, KeyCode::Char('j'), Instant::now());
    let lines = buffer_lines(&render_app(&app, 100, 20));
    assert!(lines[2].starts_with("│> "));
    assert!(lines[2].contains("Entry 20"));
}

#[test]
fn test_history_status_bar() {
    let app = history_app();
    let lines = buffer_lines(&render_app(&app, 100, 20));
    assert!(lines[19].contains("[q] Back"));
}
