//! Rendering tests for the config form and save indicator

use std::time::Instant;

use crossterm::event::KeyCode;

use agentdeck::app::App;
use agentdeck::model::PipelineMode;

use crate::common::{buffer_lines, ms, press, press_ctrl, render_app, screen_text, type_text};

#[test]
fn test_config_view_initial() {
    let app = App::default();
    let terminal = render_app(&app, 100, 40);
    let screen = screen_text(&terminal);

    assert!(screen.contains("Agent Configuration"));
    assert!(screen.contains("Sally Scheduler"));
    assert!(screen.contains("0 history entries"));
    assert!(screen.contains("Placeholders: {{first_name}}"));
    assert!(screen.contains("‹ English ›"));
    assert!(!screen.contains("Saving changes..."));

    // status bar hints on the last row
    let lines = buffer_lines(&terminal);
    assert!(lines[39].contains("[q] Quit"));
    assert!(lines[39].contains("[D] Deploy"));
}

#[test]
fn test_selected_row_marker() {
    let mut app = App::default();
    press(&mut app, KeyCode::Char('j'), Instant::now());
    let lines = buffer_lines(&render_app(&app, 100, 40));
    let selected: Vec<&String> = lines.iter().filter(|l| l.contains("> ")).collect();
    assert_eq!(selected.len(), 1);
    assert!(selected[0].contains("Instructions"));
}

#[test]
fn test_save_indicator_follows_status() {
    let t0 = Instant::now();
    let mut app = App::default();
    press(&mut app, KeyCode::Enter, t0);
    type_text(&mut app, "!", t0);

    let screen = screen_text(&render_app(&app, 100, 40));
    assert!(screen.contains("Saving changes..."));
    assert!(screen.contains("Editing: Agent name"));

    app.tick(t0 + ms(1500));
    let screen = screen_text(&render_app(&app, 100, 40));
    assert!(screen.contains("All changes saved"));

    app.tick(t0 + ms(3000));
    let screen = screen_text(&render_app(&app, 100, 40));
    assert!(!screen.contains("All changes saved"));
    assert!(!screen.contains("Saving changes..."));
    assert!(screen.contains("1 history entry"));
}

#[test]
fn test_secret_key_is_masked() {
    let mut app = App::default();
    app.agent.secret_key = "sk-secret".to_string();
    let screen = screen_text(&render_app(&app, 100, 40));
    assert!(!screen.contains("sk-secret"));
    assert!(screen.contains("•••••••••"));
}

#[test]
fn test_realtime_mode_rows() {
    let mut app = App::default();
    app.agent.pipeline_mode = PipelineMode::Realtime;
    let screen = screen_text(&render_app(&app, 100, 40));
    assert!(screen.contains("Realtime provider"));
    assert!(screen.contains("Realtime model"));
    assert!(!screen.contains("Speech-to-text"));
    assert!(!screen.contains("Text-to-speech"));
}

#[test]
fn test_tools_listed() {
    let app = App::default();
    let screen = screen_text(&render_app(&app, 120, 40));
    assert!(screen.contains("[x] End call"));
    assert!(screen.contains("[ ] Transfer agent"));
    assert!(screen.contains("Custom tools"));
    assert!(screen.contains("+ Add tool"));
}

#[test]
fn test_tool_form_overlay() {
    let t0 = Instant::now();
    let mut app = App::default();
    press(&mut app, KeyCode::Char('a'), t0);
    let lines = buffer_lines(&render_app(&app, 100, 40));
    let screen = lines.join("\n");
    assert!(screen.contains("Add tool"));
    assert!(screen.contains("‹ GET ›"));
    assert!(screen.contains("+ Add header"));
    assert!(screen.contains("+ Add secret"));
    assert!(lines[39].contains("[Ctrl+s] Save"));

    // Saving an empty form keeps it open with a message
    press_ctrl(&mut app, 's', t0);
    let screen = screen_text(&render_app(&app, 100, 40));
    assert!(screen.contains("tool name and description are required"));
}

#[test]
fn test_tool_form_masks_secret_value() {
    let t0 = Instant::now();
    let mut app = App::default();
    press(&mut app, KeyCode::Char('a'), t0);
    // Name, Description, Method, Endpoint, then "+ Add secret" after "+ Add header"
    for _ in 0..5 {
        press(&mut app, KeyCode::Char('j'), t0);
    }
    press(&mut app, KeyCode::Enter, t0);
    type_text(&mut app, "API_KEY", t0);
    press(&mut app, KeyCode::Enter, t0);
    press(&mut app, KeyCode::Char('j'), t0);
    press(&mut app, KeyCode::Enter, t0);
    type_text(&mut app, "sk-live", t0);
    press(&mut app, KeyCode::Esc, t0);

    let screen = screen_text(&render_app(&app, 100, 40));
    assert!(screen.contains("API_KEY"));
    assert!(!screen.contains("sk-live"));
    assert!(screen.contains("•••••••"));
}

#[test]
fn test_multiline_edit_hints() {
    let mut app = App::default();
    press(&mut app, KeyCode::Char('j'), Instant::now());
    press(&mut app, KeyCode::Enter, Instant::now());
    let lines = buffer_lines(&render_app(&app, 100, 40));
    assert!(lines[39].contains("[Ctrl+s] Done"));
    assert!(lines.iter().any(|l| l.contains("Editing: Instructions")));
}

#[test]
fn test_error_banner_shown() {
    let mut app = App::default();
    app.error_message = Some("invalid timing: reveal_min_ms".to_string());
    let lines = buffer_lines(&render_app(&app, 100, 40));
    assert!(lines[38].contains("Error:"));
    assert!(lines[38].contains("invalid timing"));
}
