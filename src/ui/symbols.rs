//! UI symbols (markers, toggles, etc.)

/// Toggle markers in the config form
pub mod toggles {
    /// Enabled setting
    pub const ON: &str = "[x]";
    /// Disabled setting
    pub const OFF: &str = "[ ]";
}

/// Choice field arrows
pub mod choice {
    pub const PREV: char = '‹';
    pub const NEXT: char = '›';
}

/// Deployment status markers
pub mod deployment {
    /// Frames of the in-progress spinner
    pub const SPINNER: [char; 4] = ['|', '/', '-', '\\'];
    /// Completed marker
    pub const SUCCESS: char = '✓';
}

/// Character used to mask secret values
pub const SECRET_MASK: char = '•';

/// Mask a secret for display, keeping its length
pub fn mask_secret(value: &str) -> String {
    value.chars().map(|_| SECRET_MASK).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_markers_same_width() {
        assert_eq!(toggles::ON.len(), toggles::OFF.len());
    }

    #[test]
    fn test_mask_secret_keeps_char_count() {
        assert_eq!(mask_secret("sk-123"), "••••••");
        assert_eq!(mask_secret(""), "");
    }
}
