//! Config View key handling

use crossterm::event::KeyEvent;
use tracing::debug;

use super::{ConfigAction, ConfigRow, ConfigView};
use crate::keys;
use crate::model::{AgentConfig, Cycle, FieldKey, ToolError};
use crate::ui::components::editor;
use crate::ui::views::ToolFormResult;

impl ConfigView {
    /// Handle key event, applying edits to `agent`
    pub fn handle_key(&mut self, key: KeyEvent, agent: &mut AgentConfig) -> ConfigAction {
        self.handle_key_with_height(key, agent, Self::DEFAULT_VISIBLE_COUNT)
    }

    /// Handle key event with explicit visible height
    pub fn handle_key_with_height(
        &mut self,
        key: KeyEvent,
        agent: &mut AgentConfig,
        visible_count: usize,
    ) -> ConfigAction {
        if self.tool_form.is_some() {
            return self.handle_tool_form_key(key, agent);
        }
        if self.editor.is_some() {
            return self.handle_edit_key(key, agent);
        }
        self.handle_normal_key(key, agent, visible_count)
    }

    fn handle_normal_key(
        &mut self,
        key: KeyEvent,
        agent: &mut AgentConfig,
        visible_count: usize,
    ) -> ConfigAction {
        let row_count = Self::rows(agent).len();
        match key.code {
            code if keys::is_move_down(code) => {
                self.move_down(row_count, visible_count);
                ConfigAction::None
            }
            code if keys::is_move_up(code) => {
                self.move_up(visible_count);
                ConfigAction::None
            }
            keys::GO_TOP => {
                self.jump_to_top();
                ConfigAction::None
            }
            keys::GO_BOTTOM => {
                self.jump_to_bottom(row_count, visible_count);
                ConfigAction::None
            }
            keys::EDIT => self.activate_selected(agent),
            keys::ADD_TOOL => {
                self.open_tool_form(agent, None);
                ConfigAction::None
            }
            keys::DELETE => self.delete_selected_tool(agent),
            keys::TOGGLE => self.toggle_selected(agent),
            code if keys::is_prev_option(code) => self.cycle_selected(agent, Cycle::Prev),
            code if keys::is_next_option(code) => self.cycle_selected(agent, Cycle::Next),
            keys::DEPLOY => ConfigAction::Deploy,
            keys::EXPAND_LOG => ConfigAction::ToggleLogSize,
            keys::CLOSE_PANEL => ConfigAction::CloseDeployment,
            // QUIT, TAB, ESC and HELP are handled by the global key handler
            _ => ConfigAction::None,
        }
    }

    /// Enter: edit text fields and tools, flip toggles, advance choices
    fn activate_selected(&mut self, agent: &mut AgentConfig) -> ConfigAction {
        let Some(row) = self.selected_row(agent) else {
            return ConfigAction::None;
        };
        let field = match row {
            ConfigRow::Field(field) => field,
            ConfigRow::Tool(index) => {
                self.open_tool_form(agent, Some(index));
                return ConfigAction::None;
            }
            ConfigRow::AddTool => {
                self.open_tool_form(agent, None);
                return ConfigAction::None;
            }
        };
        if let Some(text) = agent.text(field) {
            let text = text.to_string();
            self.start_edit(field, &text);
            return ConfigAction::None;
        }
        match self.toggle_selected(agent) {
            ConfigAction::None => self.cycle_selected(agent, Cycle::Next),
            action => action,
        }
    }

    fn toggle_selected(&mut self, agent: &mut AgentConfig) -> ConfigAction {
        let changed = match self.selected_row(agent) {
            Some(ConfigRow::Field(field)) => agent.toggle(field).then_some(field),
            Some(row @ ConfigRow::Tool(index)) => agent.toggle_tool(index).then(|| row.field()),
            Some(ConfigRow::AddTool) | None => None,
        };
        match changed {
            Some(field) => {
                self.clamp_selection(agent);
                ConfigAction::Changed(field)
            }
            None => ConfigAction::None,
        }
    }

    fn cycle_selected(&mut self, agent: &mut AgentConfig, direction: Cycle) -> ConfigAction {
        let Some(ConfigRow::Field(field)) = self.selected_row(agent) else {
            return ConfigAction::None;
        };
        if agent.cycle(field, direction) {
            self.clamp_selection(agent);
            ConfigAction::Changed(field)
        } else {
            ConfigAction::None
        }
    }

    /// d: delete the selected custom tool
    fn delete_selected_tool(&mut self, agent: &mut AgentConfig) -> ConfigAction {
        let Some(ConfigRow::Tool(index)) = self.selected_row(agent) else {
            return ConfigAction::None;
        };
        let action = tool_outcome(agent.delete_tool(index).map(|_| true));
        self.clamp_selection(agent);
        action
    }

    fn handle_tool_form_key(&mut self, key: KeyEvent, agent: &mut AgentConfig) -> ConfigAction {
        let Some(form) = self.tool_form.as_mut() else {
            return ConfigAction::None;
        };
        let Some(result) = form.handle_key(key) else {
            return ConfigAction::None;
        };
        let target = form.target();
        self.tool_form = None;

        let outcome = match (result, target) {
            (ToolFormResult::Saved(draft), None) => {
                let added = agent.add_tool(draft).map(|tool| {
                    debug!(id = %tool.id, "tool added");
                });
                if added.is_ok() {
                    self.select_tool(agent, agent.tools.len() - 1);
                }
                added.map(|()| true)
            }
            (ToolFormResult::Saved(draft), Some(index)) => agent.update_tool(index, draft),
            (ToolFormResult::Deleted, Some(index)) => agent.delete_tool(index).map(|_| true),
            (ToolFormResult::Deleted, None) | (ToolFormResult::Cancelled, _) => Ok(false),
        };
        self.clamp_selection(agent);
        tool_outcome(outcome)
    }

    fn handle_edit_key(&mut self, key: KeyEvent, agent: &mut AgentConfig) -> ConfigAction {
        let Some(field_editor) = self.editor.as_mut() else {
            return ConfigAction::None;
        };

        if editor::is_done_key(&key, Self::is_multiline(field_editor.field)) {
            self.finish_edit();
            return ConfigAction::None;
        }

        // Everything else goes to the textarea (Enter = newline in multi-line fields)
        if !field_editor.textarea.input(key) {
            return ConfigAction::None;
        }
        let text = editor::editor_text(&field_editor.textarea);
        if agent.set_text(field_editor.field, &text) {
            ConfigAction::Changed(field_editor.field)
        } else {
            ConfigAction::None
        }
    }
}

/// Map a tool operation result to the action reported upward
fn tool_outcome(result: Result<bool, ToolError>) -> ConfigAction {
    match result {
        Ok(true) => ConfigAction::Changed(FieldKey::Tools),
        Ok(false) => ConfigAction::None,
        Err(err) => ConfigAction::Rejected(err),
    }
}
