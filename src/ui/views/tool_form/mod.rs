//! Tool Form
//!
//! Overlay for adding or editing a tool. Edits go into a `ToolDraft` and
//! only reach the agent when the form is saved.

mod input;
mod render;

use tui_textarea::TextArea;

use crate::model::{ToolDraft, ToolItem};
use crate::ui::components::editor;
use crate::ui::navigation;

/// A row of the tool form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Name,
    Description,
    Method,
    Endpoint,
    HeaderName(usize),
    HeaderValue(usize),
    AddHeader,
    KeyName(usize),
    KeyValue(usize),
    AddKey,
    Save,
    Delete,
}

impl FormRow {
    pub fn label(self) -> String {
        match self {
            FormRow::Name => "Name".to_string(),
            FormRow::Description => "Description".to_string(),
            FormRow::Method => "Method".to_string(),
            FormRow::Endpoint => "Endpoint".to_string(),
            FormRow::HeaderName(i) => format!("Header {} name", i + 1),
            FormRow::HeaderValue(i) => format!("Header {} value", i + 1),
            FormRow::AddHeader => "+ Add header".to_string(),
            FormRow::KeyName(i) => format!("Secret {} name", i + 1),
            FormRow::KeyValue(i) => format!("Secret {} value", i + 1),
            FormRow::AddKey => "+ Add secret".to_string(),
            FormRow::Save => "Save".to_string(),
            FormRow::Delete => "Delete tool".to_string(),
        }
    }

    /// Secret values are masked on screen and in the editor
    pub fn is_masked(self) -> bool {
        matches!(self, FormRow::KeyValue(_))
    }
}

/// Outcome of the tool form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolFormResult {
    /// Save the draft (as a new tool, or over the edited one)
    Saved(ToolDraft),
    /// Delete the edited tool
    Deleted,
    /// Close without changes
    Cancelled,
}

/// Inline editor for one text row
#[derive(Debug)]
pub(crate) struct RowEditor {
    pub row: FormRow,
    pub textarea: TextArea<'static>,
}

/// Tool form state
#[derive(Debug)]
pub struct ToolForm {
    /// Index of the edited tool, `None` when adding
    target: Option<usize>,
    built_in: bool,
    draft: ToolDraft,
    selected: usize,
    pub(crate) editor: Option<RowEditor>,
    error: Option<String>,
}

impl ToolForm {
    /// Empty form for a new custom tool
    pub fn new_tool() -> Self {
        Self {
            target: None,
            built_in: false,
            draft: ToolDraft::default(),
            selected: 0,
            editor: None,
            error: None,
        }
    }

    /// Form pre-filled from the tool at `index`
    pub fn edit(index: usize, tool: &ToolItem) -> Self {
        Self {
            target: Some(index),
            built_in: tool.built_in,
            draft: ToolDraft::from_tool(tool),
            ..Self::new_tool()
        }
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn draft(&self) -> &ToolDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A text row is being edited
    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Only existing custom tools can be deleted
    pub fn can_delete(&self) -> bool {
        self.target.is_some() && !self.built_in
    }

    pub fn rows(&self) -> Vec<FormRow> {
        let mut rows = vec![
            FormRow::Name,
            FormRow::Description,
            FormRow::Method,
            FormRow::Endpoint,
        ];
        for i in 0..self.draft.headers.len() {
            rows.extend([FormRow::HeaderName(i), FormRow::HeaderValue(i)]);
        }
        rows.push(FormRow::AddHeader);
        for i in 0..self.draft.keys.len() {
            rows.extend([FormRow::KeyName(i), FormRow::KeyValue(i)]);
        }
        rows.push(FormRow::AddKey);
        rows.push(FormRow::Save);
        if self.can_delete() {
            rows.push(FormRow::Delete);
        }
        rows
    }

    pub fn selected_row(&self) -> Option<FormRow> {
        self.rows().get(self.selected).copied()
    }

    pub(super) fn select(&mut self, row: FormRow) {
        if let Some(index) = self.rows().iter().position(|&r| r == row) {
            self.selected = index;
        }
    }

    /// Text held by a text row
    pub fn text(&self, row: FormRow) -> Option<&str> {
        let draft = &self.draft;
        match row {
            FormRow::Name => Some(draft.name.as_str()),
            FormRow::Description => Some(draft.description.as_str()),
            FormRow::Endpoint => Some(draft.endpoint.as_str()),
            FormRow::HeaderName(i) => draft.headers.get(i).map(|h| h.name.as_str()),
            FormRow::HeaderValue(i) => draft.headers.get(i).map(|h| h.value.as_str()),
            FormRow::KeyName(i) => draft.keys.get(i).map(|k| k.secret_name.as_str()),
            FormRow::KeyValue(i) => draft.keys.get(i).map(|k| k.secret_value.as_str()),
            _ => None,
        }
    }

    fn text_mut(&mut self, row: FormRow) -> Option<&mut String> {
        let draft = &mut self.draft;
        match row {
            FormRow::Name => Some(&mut draft.name),
            FormRow::Description => Some(&mut draft.description),
            FormRow::Endpoint => Some(&mut draft.endpoint),
            FormRow::HeaderName(i) => draft.headers.get_mut(i).map(|h| &mut h.name),
            FormRow::HeaderValue(i) => draft.headers.get_mut(i).map(|h| &mut h.value),
            FormRow::KeyName(i) => draft.keys.get_mut(i).map(|k| &mut k.secret_name),
            FormRow::KeyValue(i) => draft.keys.get_mut(i).map(|k| &mut k.secret_value),
            _ => None,
        }
    }

    pub(super) fn start_edit(&mut self, row: FormRow) {
        let Some(text) = self.text(row) else {
            return;
        };
        let textarea = editor::text_editor(&row.label(), text, false, row.is_masked());
        self.editor = Some(RowEditor { row, textarea });
    }

    pub(super) fn clamp_selection(&mut self) {
        self.selected = navigation::clamp_selection(self.selected, self.rows().len());
    }
}
