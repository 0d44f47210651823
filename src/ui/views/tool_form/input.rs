//! Tool Form key handling

use crossterm::event::{KeyCode, KeyEvent};

use super::{FormRow, ToolForm, ToolFormResult};
use crate::keys;
use crate::model::{ToolError, ToolHeader, ToolKey};
use crate::ui::components::editor;
use crate::ui::navigation;

impl ToolForm {
    /// Handle key event; `Some` closes the form
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ToolFormResult> {
        if self.editor.is_some() {
            self.handle_edit_key(key);
            return None;
        }

        self.error = None;
        if keys::is_save_key(&key) {
            return self.save();
        }

        let row_count = self.rows().len();
        match key.code {
            keys::ESC | keys::QUIT => Some(ToolFormResult::Cancelled),
            code if keys::is_move_down(code) => {
                self.selected = navigation::select_next(self.selected, row_count - 1);
                None
            }
            code if keys::is_move_up(code) => {
                self.selected = navigation::select_prev(self.selected);
                None
            }
            keys::GO_TOP => {
                self.selected = 0;
                None
            }
            keys::GO_BOTTOM => {
                self.selected = row_count - 1;
                None
            }
            keys::EDIT => self.activate_selected(),
            keys::TOGGLE => {
                self.toggle_method();
                None
            }
            code if keys::is_prev_option(code) || keys::is_next_option(code) => {
                self.toggle_method();
                None
            }
            keys::DELETE => {
                self.remove_selected_entry();
                None
            }
            _ => None,
        }
    }

    fn activate_selected(&mut self) -> Option<ToolFormResult> {
        let row = self.selected_row()?;
        match row {
            FormRow::Method => self.toggle_method(),
            FormRow::AddHeader => {
                self.draft.headers.push(ToolHeader::default());
                let row = FormRow::HeaderName(self.draft.headers.len() - 1);
                self.select(row);
                self.start_edit(row);
            }
            FormRow::AddKey => {
                self.draft.keys.push(ToolKey::default());
                let row = FormRow::KeyName(self.draft.keys.len() - 1);
                self.select(row);
                self.start_edit(row);
            }
            FormRow::Save => return self.save(),
            FormRow::Delete => return Some(ToolFormResult::Deleted),
            text_row => self.start_edit(text_row),
        }
        None
    }

    fn toggle_method(&mut self) {
        if self.selected_row() == Some(FormRow::Method) {
            self.draft.method = self.draft.method.toggled();
        }
    }

    /// Remove the header or secret under the cursor
    fn remove_selected_entry(&mut self) {
        let first_row = match self.selected_row() {
            Some(FormRow::HeaderName(i) | FormRow::HeaderValue(i)) => FormRow::HeaderName(i),
            Some(FormRow::KeyName(i) | FormRow::KeyValue(i)) => FormRow::KeyName(i),
            _ => return,
        };
        // The cursor lands on whatever now sits where the entry began
        self.select(first_row);
        match first_row {
            FormRow::HeaderName(i) => {
                self.draft.headers.remove(i);
            }
            FormRow::KeyName(i) => {
                self.draft.keys.remove(i);
            }
            _ => {}
        }
        self.clamp_selection();
    }

    fn save(&mut self) -> Option<ToolFormResult> {
        if !self.draft.is_complete() {
            self.error = Some(ToolError::Incomplete.to_string());
            return None;
        }
        Some(ToolFormResult::Saved(self.draft.clone()))
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(row_editor) = self.editor.as_mut() else {
            return;
        };
        if editor::is_done_key(&key, false) {
            self.editor = None;
            return;
        }
        if !row_editor.textarea.input(key) {
            return;
        }
        let text = editor::editor_text(&row_editor.textarea);
        let row = row_editor.row;
        if let Some(slot) = self.text_mut(row) {
            *slot = text;
        }
    }
}
