//! Inline text editor
//!
//! Thin wrapper over `tui-textarea` shared by the config form and the tool
//! form. Edits are applied live; the editor only needs to know when to close.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use crate::keys;
use crate::ui::symbols;

/// Editor for `text` with the cursor at the very end
///
/// Every `\n`-separated line is kept, including a trailing empty one.
pub fn text_editor(title: &str, text: &str, multiline: bool, masked: bool) -> TextArea<'static> {
    let mut textarea = TextArea::new(text.split('\n').map(str::to_string).collect());
    textarea.move_cursor(CursorMove::Bottom);
    textarea.move_cursor(CursorMove::End);
    textarea.set_cursor_line_style(Style::default());
    if masked {
        textarea.set_mask_char(symbols::SECRET_MASK);
    }
    let done_key = if multiline { "Ctrl+s" } else { "Enter" };
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Line::from(format!(" Editing: {title}  [{done_key}] Done "))),
    );
    textarea
}

/// Current editor content as one string
pub fn editor_text(textarea: &TextArea<'_>) -> String {
    textarea.lines().join("\n")
}

/// Whether `key` closes an editor
///
/// Single-line editors close on anything that would insert a line break.
pub fn is_done_key(key: &KeyEvent, multiline: bool) -> bool {
    key.code == KeyCode::Esc
        || keys::is_save_key(key)
        || (!multiline && keys::is_newline_key(key))
}
