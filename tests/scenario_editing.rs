//! Story 1: Editing an agent
//!
//! Scenario: A builder tweaks an agent's settings and watches the save
//! indicator and edit history react.
//!
//! 1. Edits made in quick succession share one history entry
//! 2. A quiet period starts a new entry
//! 3. Closing the editor drops edits that were never flushed

#[path = "common/mod.rs"]
mod common;

use std::time::Instant;

use agentdeck::app::{App, View};
use agentdeck::engine::SaveStatus;
use agentdeck::model::FieldKey;
use crossterm::event::KeyCode;

use common::{ms, press, press_ctrl, render_app, screen_text, settings, type_text};

fn select(app: &mut App, field: FieldKey) {
    assert!(app.config_view.select_field(&app.agent, field));
}

#[test]
fn story_quick_edits_share_one_entry() {
    let t0 = Instant::now();
    let mut app = App::new(settings(false));

    // Rename the agent
    press(&mut app, KeyCode::Enter, t0);
    type_text(&mut app, " Pro", t0 + ms(200));
    press(&mut app, KeyCode::Enter, t0 + ms(400));
    assert_eq!(app.agent.name, "Sally Scheduler Pro");
    assert_eq!(app.tracker.status(), SaveStatus::Saving);

    // Switch language and voice before the flush window elapses
    select(&mut app, FieldKey::Language);
    press(&mut app, KeyCode::Char('l'), t0 + ms(1000));
    select(&mut app, FieldKey::SelectedVoice);
    press(&mut app, KeyCode::Char('l'), t0 + ms(2500));

    app.tick(t0 + ms(4000));
    assert_eq!(app.tracker.status(), SaveStatus::Saved);
    assert!(app.history.is_empty());

    app.tick(t0 + ms(5500));
    assert_eq!(app.tracker.status(), SaveStatus::Idle);
    assert_eq!(app.history.len(), 1);
    let entry = app.history.latest().unwrap();
    assert_eq!(entry.description, "Updated agent name, language, and voice");
    assert_eq!(entry.author, "dylan@example.com");

    // The entry shows up in the history view
    press(&mut app, KeyCode::Tab, t0 + ms(6000));
    assert_eq!(app.current_view, View::History);
    let screen = screen_text(&render_app(&app, 100, 30));
    assert!(screen.contains("Edit History (1)"));
    assert!(screen.contains("Updated agent name, language, and voice"));
}

#[test]
fn story_quiet_period_starts_new_entry() {
    let t0 = Instant::now();
    let mut app = App::new(settings(false));

    select(&mut app, FieldKey::AllowInterrupt);
    press(&mut app, KeyCode::Char(' '), t0);
    app.tick(t0 + ms(3000));
    assert_eq!(app.history.len(), 1);

    // Editing the same field again later is a separate batch
    press(&mut app, KeyCode::Char(' '), t0 + ms(8000));
    select(&mut app, FieldKey::SecretName);
    press(&mut app, KeyCode::Enter, t0 + ms(8100));
    type_text(&mut app, "_v2", t0 + ms(8200));
    press(&mut app, KeyCode::Esc, t0 + ms(8300));
    app.tick(t0 + ms(11_300));

    let descriptions: Vec<&str> = app
        .history
        .entries()
        .iter()
        .map(|e| e.description.as_str())
        .collect();
    assert_eq!(
        descriptions,
        vec![
            "Updated interrupt settings and secret name",
            "Updated interrupt settings",
        ]
    );
}

#[test]
fn story_multiline_instructions() {
    let t0 = Instant::now();
    let mut app = App::new(settings(false));

    select(&mut app, FieldKey::SystemInstructions);
    press(&mut app, KeyCode::Enter, t0);
    assert_eq!(app.config_view.editing_field(), Some(FieldKey::SystemInstructions));

    // Enter inserts a newline instead of finishing
    press(&mut app, KeyCode::Enter, t0 + ms(100));
    type_text(&mut app, "Always confirm the date.", t0 + ms(200));
    assert!(app.config_view.is_editing());
    press_ctrl(&mut app, 's', t0 + ms(300));
    assert!(!app.config_view.is_editing());
    assert!(
        app.agent
            .system_instructions
            .ends_with("\nAlways confirm the date.")
    );

    app.tick(t0 + ms(3300));
    assert_eq!(
        app.history.latest().map(|e| e.description.as_str()),
        Some("Updated system instructions")
    );
}

#[test]
fn story_disabling_greeting_hides_fields() {
    let t0 = Instant::now();
    let mut app = App::new(settings(false));

    select(&mut app, FieldKey::EnableGreeting);
    press(&mut app, KeyCode::Enter, t0);
    assert!(!app.agent.enable_greeting);

    let screen = screen_text(&render_app(&app, 100, 40));
    assert!(!screen.contains("Welcome message"));
    assert!(!screen.contains("Greeting type"));

    app.tick(t0 + ms(3000));
    assert_eq!(
        app.history.latest().map(|e| e.description.as_str()),
        Some("Updated greeting settings")
    );
}

#[test]
fn story_quit_discards_pending_changes() {
    let t0 = Instant::now();
    let mut app = App::new(settings(false));

    press(&mut app, KeyCode::Enter, t0);
    type_text(&mut app, "!", t0);
    press(&mut app, KeyCode::Enter, t0 + ms(100));
    press(&mut app, KeyCode::Char('q'), t0 + ms(200));

    assert!(!app.running);
    app.tick(t0 + ms(10_000));
    assert!(app.history.is_empty());
    assert_eq!(app.next_deadline(), None);
}
