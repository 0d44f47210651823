//! History View
//!
//! Newest-first list of summarized edits.

mod input;
mod render;

use crate::ui::navigation;

/// History View state
#[derive(Debug, Default)]
pub struct HistoryView {
    /// Selected entry index
    pub(super) selected_index: usize,

    /// Scroll offset for display
    pub(super) scroll_offset: usize,
}

impl HistoryView {
    /// Default visible count for scroll calculations
    pub(super) const DEFAULT_VISIBLE_COUNT: usize = 20;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Newest entry selected (called when entries are prepended)
    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    fn move_down(&mut self, len: usize, visible_count: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = navigation::select_next(self.selected_index, len - 1);
        self.scroll_offset =
            navigation::adjust_scroll(self.selected_index, self.scroll_offset, visible_count);
    }

    fn move_up(&mut self, visible_count: usize) {
        self.selected_index = navigation::select_prev(self.selected_index);
        self.scroll_offset =
            navigation::adjust_scroll(self.selected_index, self.scroll_offset, visible_count);
    }

    fn jump_to_bottom(&mut self, len: usize, visible_count: usize) {
        self.selected_index = len.saturating_sub(1);
        self.scroll_offset =
            navigation::adjust_scroll(self.selected_index, self.scroll_offset, visible_count);
    }
}
