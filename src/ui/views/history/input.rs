//! History View key handling

use crossterm::event::KeyEvent;

use super::HistoryView;
use crate::keys;

impl HistoryView {
    /// Handle key event for a list of `len` entries
    pub fn handle_key(&mut self, key: KeyEvent, len: usize) {
        self.handle_key_with_height(key, len, Self::DEFAULT_VISIBLE_COUNT);
    }

    /// Handle key event with explicit visible height
    pub fn handle_key_with_height(&mut self, key: KeyEvent, len: usize, visible_count: usize) {
        match key.code {
            code if keys::is_move_down(code) => self.move_down(len, visible_count),
            code if keys::is_move_up(code) => self.move_up(visible_count),
            keys::GO_TOP => self.reset(),
            keys::GO_BOTTOM => self.jump_to_bottom(len, visible_count),
            // QUIT, TAB and ESC are handled by the global key handler
            _ => {}
        }
    }
}
