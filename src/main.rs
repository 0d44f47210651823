//! agentdeck - terminal editor for voice agent configurations
//!
//! Binary entry point for the TUI application.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::info;

use agentdeck::app::App;
use agentdeck::config::{self, Settings};
use agentdeck::logging;

/// Longest time the loop waits for input before re-checking timers
const MAX_POLL: Duration = Duration::from_millis(200);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let home = config::config_home();
    let (settings, config_error) = match config::load(&home) {
        Ok(settings) => (settings, None),
        Err(err) => {
            // Fall back to defaults (plus env overrides) and report in the UI
            let mut settings = Settings::default();
            settings.apply_env(|key| std::env::var(key).ok());
            (settings, Some(err))
        }
    };
    let _log_guard = logging::init(&settings, &home);
    logging::log_config_outcome(&home.join(config::CONFIG_FILE), config_error.as_ref());

    let terminal = ratatui::init();
    let result = run(terminal, settings, config_error.map(|e| e.to_string()));
    ratatui::restore();
    info!("agentdeck exited");
    result
}

/// Run the application's main loop.
fn run(
    mut terminal: DefaultTerminal,
    settings: Settings,
    startup_error: Option<String>,
) -> color_eyre::Result<()> {
    let mut app = App::new(settings);
    app.error_message = startup_error;

    // Timers must not outlive the loop, even on an error return
    let mut app = scopeguard::guard(app, |mut app| app.dispose());

    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Wait for input until the next timer deadline, then fire due timers.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    let timeout = app
        .next_deadline()
        .map(|deadline| deadline.saturating_duration_since(Instant::now()))
        .map_or(MAX_POLL, |until| until.min(MAX_POLL));

    if event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key, Instant::now());
            }
            _ => {}
        }
    }
    app.tick(Instant::now());
    Ok(())
}
