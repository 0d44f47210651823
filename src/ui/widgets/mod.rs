//! Reusable UI widgets

mod error_banner;
mod help_panel;
mod save_indicator;
mod status_bar;

pub use error_banner::render_error_banner;
pub use help_panel::{build_help_lines, max_help_scroll, render_help_panel};
pub use save_indicator::{build_save_indicator, render_save_indicator, save_status_text};
pub use status_bar::{build_status_bar, render_status_bar, status_bar_height};
