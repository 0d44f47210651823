//! Config View
//!
//! The agent configuration form. One row per visible field, followed by one
//! row per tool and an "add tool" row. Text fields are edited inline with a
//! `TextArea`; every keystroke that changes the text is reported as a change.
//! Tools are added and edited in the tool form overlay.

mod input;
mod render;

pub use render::field_value;

use tui_textarea::TextArea;

use super::tool_form::ToolForm;
use crate::model::{AgentConfig, FieldKey, ToolError};
use crate::ui::components::editor;
use crate::ui::navigation;

/// A row of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigRow {
    /// A single configuration field
    Field(FieldKey),
    /// One tool, by index into `AgentConfig::tools`
    Tool(usize),
    /// Opens the tool form for a new tool
    AddTool,
}

impl ConfigRow {
    /// Field reported when this row changes
    pub fn field(self) -> FieldKey {
        match self {
            ConfigRow::Field(field) => field,
            ConfigRow::Tool(_) | ConfigRow::AddTool => FieldKey::Tools,
        }
    }
}

/// Action returned from ConfigView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// A field value changed
    Changed(FieldKey),
    /// A tool change was refused
    Rejected(ToolError),
    /// Start a deployment
    Deploy,
    /// Expand or collapse the deployment log
    ToggleLogSize,
    /// Close the deployment panel
    CloseDeployment,
    /// No action
    None,
}

/// Inline text editor for one field
#[derive(Debug)]
pub(crate) struct FieldEditor {
    pub field: FieldKey,
    pub textarea: TextArea<'static>,
}

/// Config View state
#[derive(Debug, Default)]
pub struct ConfigView {
    /// Selected row index
    pub(super) selected: usize,

    /// First row shown
    pub(super) scroll_offset: usize,

    /// Active text editor, if any
    pub(crate) editor: Option<FieldEditor>,

    /// Open tool form, if any
    pub(crate) tool_form: Option<ToolForm>,
}

impl ConfigView {
    /// Default visible count for scroll calculations
    pub(super) const DEFAULT_VISIBLE_COUNT: usize = 20;

    pub fn new() -> Self {
        Self::default()
    }

    /// Rows shown for the current configuration
    pub fn rows(agent: &AgentConfig) -> Vec<ConfigRow> {
        FieldKey::ALL
            .into_iter()
            .filter(|&field| field != FieldKey::Tools && agent.is_visible(field))
            .map(ConfigRow::Field)
            .chain((0..agent.tools.len()).map(ConfigRow::Tool))
            .chain(std::iter::once(ConfigRow::AddTool))
            .collect()
    }

    /// Fields that take several lines of text
    pub fn is_multiline(field: FieldKey) -> bool {
        matches!(field, FieldKey::SystemInstructions | FieldKey::WelcomeMessage)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_row(&self, agent: &AgentConfig) -> Option<ConfigRow> {
        Self::rows(agent).get(self.selected).copied()
    }

    /// Select the row for `field` if it is visible
    pub fn select_field(&mut self, agent: &AgentConfig, field: FieldKey) -> bool {
        match Self::rows(agent)
            .iter()
            .position(|&row| row == ConfigRow::Field(field))
        {
            Some(index) => {
                self.selected = index;
                self.scroll_offset =
                    navigation::adjust_scroll(index, self.scroll_offset, Self::DEFAULT_VISIBLE_COUNT);
                true
            }
            None => false,
        }
    }

    /// The view captures every key (text editor or tool form open)
    pub fn is_editing(&self) -> bool {
        self.editor.is_some() || self.tool_form.is_some()
    }

    /// Field being edited, if any
    pub fn editing_field(&self) -> Option<FieldKey> {
        self.editor.as_ref().map(|e| e.field)
    }

    pub fn tool_form(&self) -> Option<&ToolForm> {
        self.tool_form.as_ref()
    }

    /// Open the tool form, editing the tool at `index` or adding a new one
    pub fn open_tool_form(&mut self, agent: &AgentConfig, index: Option<usize>) {
        self.tool_form = match index.and_then(|i| agent.tools.get(i).map(|t| (i, t))) {
            Some((i, tool)) => Some(ToolForm::edit(i, tool)),
            None => Some(ToolForm::new_tool()),
        };
    }

    /// Select the row of the tool at `index`
    pub(super) fn select_tool(&mut self, agent: &AgentConfig, index: usize) {
        if let Some(pos) = Self::rows(agent)
            .iter()
            .position(|&row| row == ConfigRow::Tool(index))
        {
            self.selected = pos;
            self.scroll_offset =
                navigation::adjust_scroll(pos, self.scroll_offset, Self::DEFAULT_VISIBLE_COUNT);
        }
    }

    /// Open the inline editor on `field` with its current text
    pub fn start_edit(&mut self, field: FieldKey, text: &str) {
        let textarea = editor::text_editor(
            field.title(),
            text,
            Self::is_multiline(field),
            field == FieldKey::SecretKey,
        );
        self.editor = Some(FieldEditor { field, textarea });
    }

    /// Close the inline editor (edits are already applied)
    pub fn finish_edit(&mut self) {
        self.editor = None;
    }

    /// Keep the selection inside the current row list after visibility changes
    pub fn clamp_selection(&mut self, agent: &AgentConfig) {
        let len = Self::rows(agent).len();
        self.selected = navigation::clamp_selection(self.selected, len);
        self.scroll_offset = self.scroll_offset.min(self.selected);
    }

    pub(super) fn move_down(&mut self, row_count: usize, visible_count: usize) {
        if row_count == 0 {
            return;
        }
        self.selected = navigation::select_next(self.selected, row_count - 1);
        self.scroll_offset =
            navigation::adjust_scroll(self.selected, self.scroll_offset, visible_count);
    }

    pub(super) fn move_up(&mut self, visible_count: usize) {
        self.selected = navigation::select_prev(self.selected);
        self.scroll_offset =
            navigation::adjust_scroll(self.selected, self.scroll_offset, visible_count);
    }

    pub(super) fn jump_to_top(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub(super) fn jump_to_bottom(&mut self, row_count: usize, visible_count: usize) {
        self.selected = row_count.saturating_sub(1);
        self.scroll_offset =
            navigation::adjust_scroll(self.selected, self.scroll_offset, visible_count);
    }
}
