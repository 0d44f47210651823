//! Shared navigation helpers for list-based views
//!
//! Pure functions that compute new selection/scroll state. Each view calls
//! these with its own state and applies the results.

/// Move selection down by one, clamped to `max_index`
pub fn select_next(selected: usize, max_index: usize) -> usize {
    selected.saturating_add(1).min(max_index)
}

/// Move selection up by one
pub fn select_prev(selected: usize) -> usize {
    selected.saturating_sub(1)
}

/// Clamp a selection to a list of `len` items (0 for an empty list)
pub fn clamp_selection(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}

/// Scroll offset that keeps `selected` visible within `visible_count` rows
///
/// If `visible_count` is 0, returns `scroll_offset` unchanged.
pub fn adjust_scroll(selected: usize, scroll_offset: usize, visible_count: usize) -> usize {
    if visible_count == 0 {
        return scroll_offset;
    }
    if selected < scroll_offset {
        selected
    } else if selected >= scroll_offset + visible_count {
        selected - visible_count + 1
    } else {
        scroll_offset
    }
}

/// Offset that shows the last `visible_count` of `len` items (auto-scroll)
pub fn tail_offset(len: usize, visible_count: usize) -> usize {
    len.saturating_sub(visible_count)
}
