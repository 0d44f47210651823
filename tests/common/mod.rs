//! Common test utilities for UI and scenario tests.
//!
//! Each integration test file compiles as a separate crate, so not all
//! helpers are used in every test file.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use agentdeck::app::App;
use agentdeck::config::Settings;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

/// Milliseconds as a Duration
pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Settings with reduced motion switched on or off
pub fn settings(reduced_motion: bool) -> Settings {
    Settings {
        reduced_motion,
        ..Settings::default()
    }
}

/// Send a plain key press at `now`
pub fn press(app: &mut App, code: KeyCode, now: Instant) {
    app.on_key_event(KeyEvent::from(code), now);
}

/// Send Ctrl+<c> at `now`
pub fn press_ctrl(app: &mut App, c: char, now: Instant) {
    app.on_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), now);
}

/// Type each character of `text` at `now`
pub fn type_text(app: &mut App, text: &str, now: Instant) {
    for c in text.chars() {
        press(app, KeyCode::Char(c), now);
    }
}

/// Rows of the test backend buffer as plain strings
pub fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

/// Whole screen as one string, rows joined by newlines
pub fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    buffer_lines(terminal).join("\n")
}

/// Render `app` into a fresh terminal of the given size
pub fn render_app(app: &App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
}
