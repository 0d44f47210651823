//! Rendering tests for the deployment panel

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use agentdeck::app::App;
use agentdeck::model::catalog;

use crate::common::{buffer_lines, ms, press, render_app, screen_text, settings};

#[test]
fn test_deploy_shows_first_line() {
    let t0 = Instant::now();
    let mut app = App::new(settings(false));
    press(&mut app, KeyCode::Char('D'), t0);

    let total = catalog::deployment_log().len();
    let screen = screen_text(&render_app(&app, 100, 40));
    assert!(screen.contains(&format!("Deploying agent... 1/{total}")));
    assert!(screen.contains("19:34:55  [+] Building 83.1s (20/20) FINISHED"));
    assert!(screen.contains("1 history entry"));
}

#[test]
fn test_collapsed_panel_auto_scrolls() {
    let t0 = Instant::now();
    let mut app = App::new(settings(true));
    press(&mut app, KeyCode::Char('D'), t0);

    let lines = buffer_lines(&render_app(&app, 100, 40));
    // top bar, then the 8-row panel: border, header, 5 log rows, border
    assert!(lines[1].contains("Deployment"));
    assert!(lines[2].contains("Deploying agent... 27/27"));
    assert!(lines[7].contains("Health checks passed"));
    assert!(lines[8].starts_with('└'));
    assert!(!lines.iter().any(|l| l.contains("[+] Building")));
}

#[test]
fn test_expanded_panel_shows_more() {
    let t0 = Instant::now();
    let mut app = App::new(settings(true));
    press(&mut app, KeyCode::Char('D'), t0);
    press(&mut app, KeyCode::Char('e'), t0);

    let lines = buffer_lines(&render_app(&app, 100, 40));
    assert!(lines[16].starts_with('└'));
    let log_rows = lines[3..16]
        .iter()
        .filter(|l| l.contains("19:34:"))
        .count();
    assert_eq!(log_rows, 13);
}

#[test]
fn test_success_collapses_and_notifies() {
    let t0 = Instant::now();
    let mut app = App::new(settings(false));
    press(&mut app, KeyCode::Char('D'), t0);
    app.tick(t0 + Duration::from_secs(10));

    let lines = buffer_lines(&render_app(&app, 100, 40));
    assert!(lines[2].contains("✓ Deployment successful"));
    assert!(lines[3].starts_with('└'));
    assert!(lines[4].contains("Success: Deployment complete"));

    // deploy key is offered again
    assert!(lines[39].contains("[D] Deploy"));
}

#[test]
fn test_deploy_hint_hidden_while_running() {
    let t0 = Instant::now();
    let mut app = App::new(settings(false));
    press(&mut app, KeyCode::Char('D'), t0);
    app.tick(t0 + ms(1000));

    let lines = buffer_lines(&render_app(&app, 100, 40));
    assert!(!lines[39].contains("[D] Deploy"));
    assert!(lines[39].contains("[x] Close"));
}

#[test]
fn test_close_removes_panel() {
    let t0 = Instant::now();
    let mut app = App::new(settings(true));
    press(&mut app, KeyCode::Char('D'), t0);
    press(&mut app, KeyCode::Char('x'), t0);

    let screen = screen_text(&render_app(&app, 100, 40));
    assert!(!screen.contains("Deploying agent"));
    assert!(app.deployment.is_none());
}
