//! Keybinding definitions for agentdeck
//!
//! All keybindings are defined here so the help panel and status bar hints
//! stay in sync with input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::app::View;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+S (commit multi-line edit, save tool form)
pub fn is_save_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Check if key inserts a line break in a text editor (Enter, Ctrl+M, Ctrl+J)
pub fn is_newline_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Enter
        || (key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')))
}

// =============================================================================
// Global keys (available in all views)
// =============================================================================

/// Quit application or go back
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help
pub const HELP: KeyCode = KeyCode::Char('?');

/// Switch between views
pub const TAB: KeyCode = KeyCode::Tab;

/// Go back
pub const ESC: KeyCode = KeyCode::Esc;

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Config View keys
// =============================================================================

/// Edit text field / toggle flag
pub const EDIT: KeyCode = KeyCode::Enter;

/// Toggle flag
pub const TOGGLE: KeyCode = KeyCode::Char(' ');

/// Previous option (vim style)
pub const PREV_OPTION: KeyCode = KeyCode::Char('h');

/// Previous option (arrow key)
pub const PREV_OPTION_ARROW: KeyCode = KeyCode::Left;

/// Next option (vim style)
pub const NEXT_OPTION: KeyCode = KeyCode::Char('l');

/// Next option (arrow key)
pub const NEXT_OPTION_ARROW: KeyCode = KeyCode::Right;

/// Check if key selects the previous option (h or ←)
pub fn is_prev_option(code: KeyCode) -> bool {
    matches!(code, PREV_OPTION | PREV_OPTION_ARROW)
}

/// Check if key selects the next option (l or →)
pub fn is_next_option(code: KeyCode) -> bool {
    matches!(code, NEXT_OPTION | NEXT_OPTION_ARROW)
}

/// Open the tool form for a new custom tool
pub const ADD_TOOL: KeyCode = KeyCode::Char('a');

/// Delete the selected custom tool (or header/key in the tool form)
pub const DELETE: KeyCode = KeyCode::Char('d');

// =============================================================================
// Deployment keys
// =============================================================================

/// Start a deployment (uppercase, like other outward actions)
pub const DEPLOY: KeyCode = KeyCode::Char('D');

/// Expand/collapse the deployment log
pub const EXPAND_LOG: KeyCode = KeyCode::Char('e');

/// Close the deployment panel
pub const CLOSE_PANEL: KeyCode = KeyCode::Char('x');

// =============================================================================
// Help display
// =============================================================================

/// A key binding row in the help panel
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "q",
        description: "Quit / Back",
    },
    KeyBindEntry {
        key: "?",
        description: "Help",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Switch between config and history",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Back to previous",
    },
    KeyBindEntry {
        key: "Ctrl+c",
        description: "Quit immediately",
    },
];

/// Navigation key bindings for help display
pub const NAV_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/↓",
        description: "Move down",
    },
    KeyBindEntry {
        key: "k/↑",
        description: "Move up",
    },
    KeyBindEntry {
        key: "g",
        description: "Go to top",
    },
    KeyBindEntry {
        key: "G",
        description: "Go to bottom",
    },
];

/// Config view key bindings for help display
pub const CONFIG_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Enter",
        description: "Edit text / toggle setting",
    },
    KeyBindEntry {
        key: "Space",
        description: "Toggle setting or tool",
    },
    KeyBindEntry {
        key: "h/←",
        description: "Previous option",
    },
    KeyBindEntry {
        key: "l/→",
        description: "Next option",
    },
    KeyBindEntry {
        key: "a",
        description: "Add custom tool",
    },
    KeyBindEntry {
        key: "Enter",
        description: "Edit tool (on a tool row)",
    },
    KeyBindEntry {
        key: "d",
        description: "Delete custom tool",
    },
    KeyBindEntry {
        key: "D",
        description: "Deploy agent",
    },
];

/// Tool form key bindings for help display
pub const TOOL_FORM_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Enter",
        description: "Edit field / toggle method / run action",
    },
    KeyBindEntry {
        key: "d",
        description: "Remove header or key",
    },
    KeyBindEntry {
        key: "Ctrl+s",
        description: "Save tool",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Cancel",
    },
];

/// Text editing key bindings for help display
pub const INPUT_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Enter",
        description: "Finish editing (single-line fields)",
    },
    KeyBindEntry {
        key: "Ctrl+s",
        description: "Finish editing (instructions)",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Finish editing",
    },
];

/// Deployment panel key bindings for help display
pub const DEPLOY_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "D",
        description: "Start deployment",
    },
    KeyBindEntry {
        key: "e",
        description: "Expand / collapse log",
    },
    KeyBindEntry {
        key: "x",
        description: "Close deployment panel",
    },
];

/// History view key bindings for help display
pub const HISTORY_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Select entry",
    },
    KeyBindEntry {
        key: "q/Esc",
        description: "Back to config",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// A key hint shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

/// Context needed to choose status bar hints
#[derive(Debug, Clone, Copy, Default)]
pub struct HintContext {
    /// A text field is being edited
    pub editing: bool,
    /// The field being edited spans multiple lines
    pub multiline: bool,
    /// The deployment panel is open
    pub deployment_open: bool,
    /// A deployment is running
    pub deploying: bool,
    /// The tool form is open
    pub tool_form: bool,
}

pub const CONFIG_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "q",
        label: "Quit",
        color: Color::Red,
    },
    KeyHint {
        key: "Enter",
        label: "Edit",
        color: Color::Cyan,
    },
    KeyHint {
        key: "←/→",
        label: "Option",
        color: Color::Cyan,
    },
    KeyHint {
        key: "D",
        label: "Deploy",
        color: Color::Green,
    },
    KeyHint {
        key: "Tab",
        label: "History",
        color: Color::Magenta,
    },
    KeyHint {
        key: "?",
        label: "Help",
        color: Color::Yellow,
    },
];

pub const DEPLOYMENT_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "e",
        label: "Expand",
        color: Color::Cyan,
    },
    KeyHint {
        key: "x",
        label: "Close",
        color: Color::Red,
    },
];

pub const EDIT_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "Enter",
        label: "Done",
        color: Color::Green,
    },
    KeyHint {
        key: "Esc",
        label: "Done",
        color: Color::Yellow,
    },
];

pub const MULTILINE_EDIT_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "Ctrl+s",
        label: "Done",
        color: Color::Green,
    },
    KeyHint {
        key: "Esc",
        label: "Done",
        color: Color::Yellow,
    },
];

pub const TOOL_FORM_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "Esc",
        label: "Cancel",
        color: Color::Red,
    },
    KeyHint {
        key: "Enter",
        label: "Edit",
        color: Color::Cyan,
    },
    KeyHint {
        key: "d",
        label: "Remove",
        color: Color::Yellow,
    },
    KeyHint {
        key: "Ctrl+s",
        label: "Save",
        color: Color::Green,
    },
];

pub const HISTORY_VIEW_HINTS: &[KeyHint] = &[
    KeyHint {
        key: "q",
        label: "Back",
        color: Color::Red,
    },
    KeyHint {
        key: "j/k",
        label: "Move",
        color: Color::Cyan,
    },
    KeyHint {
        key: "Tab",
        label: "Config",
        color: Color::Magenta,
    },
];

/// Status bar hints for the current view and state
pub fn current_hints(view: View, ctx: &HintContext) -> Vec<KeyHint> {
    match view {
        View::Config if ctx.editing && ctx.multiline => MULTILINE_EDIT_HINTS.to_vec(),
        View::Config if ctx.editing => EDIT_HINTS.to_vec(),
        View::Config if ctx.tool_form => TOOL_FORM_HINTS.to_vec(),
        View::Config => {
            let mut hints: Vec<KeyHint> = CONFIG_VIEW_HINTS
                .iter()
                .filter(|h| !(ctx.deploying && h.key == "D"))
                .copied()
                .collect();
            if ctx.deployment_open {
                hints.extend_from_slice(DEPLOYMENT_HINTS);
            }
            hints
        }
        View::History => HISTORY_VIEW_HINTS.to_vec(),
        View::Help => Vec::new(),
    }
}
