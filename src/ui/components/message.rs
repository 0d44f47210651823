//! Error and notification message components
//!
//! For empty states, use the `empty_state` module.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build an error message line for banner display
///
/// Format: `[red bg] Error: [/red bg][red text] message [/red text]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {error} "), Style::default().fg(Color::Red)),
    ])
}

/// Label text and color for a notification kind
fn notification_style(kind: NotificationKind) -> (&'static str, Color) {
    match kind {
        NotificationKind::Success => ("Success:", Color::Green),
        NotificationKind::Info => ("Info:", Color::Cyan),
        NotificationKind::Warning => ("Warning:", Color::Yellow),
    }
}

/// Build a notification line for title bar display
///
/// With `max_width`, a message that does not fit is cut and ends in "…".
/// Returns an empty line when not even one character of the message fits.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    let (label, color) = notification_style(notification.kind);

    // " | " + label + " " + message + " "
    let chrome = 3 + label.len() + 1;
    let message = &notification.message;
    let full_width = chrome + message.chars().count() + 1;

    let text = match max_width {
        Some(max) if full_width > max => {
            let available = max.saturating_sub(chrome + 2);
            if available == 0 {
                return Line::default();
            }
            let cut: String = message.chars().take(available).collect();
            format!("{cut}… ")
        }
        _ => format!("{message} "),
    };

    Line::from(vec![
        Span::raw(" | "),
        Span::styled(
            format!("{label} "),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(text, Style::default().fg(color)),
    ])
}
