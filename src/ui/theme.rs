//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Selection highlight shared by list views
pub mod selection {
    use super::*;

    pub const FG: Color = Color::Black;
    pub const BG: Color = Color::Cyan;
}

/// Colors for the configuration form
pub mod config_view {
    use super::*;

    /// Field title color
    pub const TITLE: Color = Color::White;
    /// Field value color
    pub const VALUE: Color = Color::Yellow;
    /// Enabled toggle / tool color
    pub const ON: Color = Color::Green;
    /// Disabled toggle / tool color
    pub const OFF: Color = Color::DarkGray;
    /// Section header color
    pub const SECTION: Color = Color::Cyan;
    /// Template placeholder color
    pub const PLACEHOLDER: Color = Color::Magenta;
}

/// Colors for the save indicator
pub mod save_indicator {
    use super::*;

    pub const SAVING: Color = Color::Yellow;
    pub const SAVED: Color = Color::Green;
}

/// Colors for the edit history view
pub mod history_view {
    use super::*;

    /// Relative timestamp color
    pub const TIMESTAMP: Color = Color::Yellow;
    /// Author color
    pub const AUTHOR: Color = Color::Magenta;
    /// Description color
    pub const DESCRIPTION: Color = Color::White;
}

/// Colors for the deployment panel
pub mod deployment {
    use super::*;

    /// Log line time column
    pub const TIME: Color = Color::DarkGray;
    /// Log message
    pub const MESSAGE: Color = Color::Reset;
    /// "Deploying" header
    pub const IN_PROGRESS: Color = Color::Yellow;
    /// Success header
    pub const SUCCESS: Color = Color::Green;
}
