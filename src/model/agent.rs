//! Agent configuration model
//!
//! The value side of the configuration form. Edits go through
//! [`AgentConfig::set_text`], [`AgentConfig::toggle`],
//! [`AgentConfig::cycle`] and the tool operations, which report whether
//! anything changed.

use std::sync::LazyLock;

use regex::Regex;

use super::catalog::{self, CatalogEntry};
use super::field::FieldKey;
use super::tool::{ToolDraft, ToolError, ToolItem};

/// Template placeholder in messages (`{{first_name}}`)
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("Invalid placeholder regex"));

/// How the agent greets the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GreetingType {
    /// Speak the welcome message verbatim
    #[default]
    Script,
    /// Generate a greeting from the welcome message as a prompt
    Prompt,
}

impl GreetingType {
    pub fn label(self) -> &'static str {
        match self {
            GreetingType::Script => "Script",
            GreetingType::Prompt => "Prompt",
        }
    }

    fn toggled(self) -> Self {
        match self {
            GreetingType::Script => GreetingType::Prompt,
            GreetingType::Prompt => GreetingType::Script,
        }
    }
}

/// Speech pipeline layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineMode {
    /// Separate STT, LLM and TTS services
    #[default]
    Pipeline,
    /// Single realtime speech model
    Realtime,
}

impl PipelineMode {
    pub fn label(self) -> &'static str {
        match self {
            PipelineMode::Pipeline => "Pipeline",
            PipelineMode::Realtime => "Realtime",
        }
    }

    fn toggled(self) -> Self {
        match self {
            PipelineMode::Pipeline => PipelineMode::Realtime,
            PipelineMode::Realtime => PipelineMode::Pipeline,
        }
    }
}

/// Direction for cycling through choice options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    Next,
    Prev,
}

/// Full agent configuration edited by the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub name: String,
    pub system_instructions: String,
    pub welcome_message: String,
    pub enable_greeting: bool,
    pub greeting_type: GreetingType,
    pub allow_interrupt: bool,
    pub language: String,
    pub pipeline_mode: PipelineMode,
    pub selected_voice: String,
    pub realtime_provider: String,
    pub realtime_model: String,
    pub secret_name: String,
    pub secret_key: String,
    pub llm_model: String,
    pub stt_service: String,
    pub tts_service: String,
    pub tools: Vec<ToolItem>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        catalog::default_agent()
    }
}

impl AgentConfig {
    /// Current text of a text field (`None` for non-text fields)
    pub fn text(&self, field: FieldKey) -> Option<&str> {
        let value = match field {
            FieldKey::Name => &self.name,
            FieldKey::SystemInstructions => &self.system_instructions,
            FieldKey::WelcomeMessage => &self.welcome_message,
            FieldKey::SecretName => &self.secret_name,
            FieldKey::SecretKey => &self.secret_key,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Replace the text of a text field
    ///
    /// Returns `true` when the value actually changed.
    pub fn set_text(&mut self, field: FieldKey, value: &str) -> bool {
        let slot = match field {
            FieldKey::Name => &mut self.name,
            FieldKey::SystemInstructions => &mut self.system_instructions,
            FieldKey::WelcomeMessage => &mut self.welcome_message,
            FieldKey::SecretName => &mut self.secret_name,
            FieldKey::SecretKey => &mut self.secret_key,
            _ => return false,
        };
        if slot == value {
            return false;
        }
        *slot = value.to_string();
        true
    }

    /// Current value of a boolean field (`None` for non-toggle fields)
    pub fn flag(&self, field: FieldKey) -> Option<bool> {
        match field {
            FieldKey::EnableGreeting => Some(self.enable_greeting),
            FieldKey::AllowInterrupt => Some(self.allow_interrupt),
            _ => None,
        }
    }

    /// Flip a boolean field. Returns `true` if `field` is a toggle.
    pub fn toggle(&mut self, field: FieldKey) -> bool {
        match field {
            FieldKey::EnableGreeting => self.enable_greeting = !self.enable_greeting,
            FieldKey::AllowInterrupt => self.allow_interrupt = !self.allow_interrupt,
            _ => return false,
        }
        true
    }

    /// Flip a tool's enabled flag. Returns `true` if the tool exists.
    pub fn toggle_tool(&mut self, index: usize) -> bool {
        match self.tools.get_mut(index) {
            Some(tool) => {
                tool.enabled = !tool.enabled;
                true
            }
            None => false,
        }
    }

    /// Append a custom tool built from `draft`, enabled
    pub fn add_tool(&mut self, draft: ToolDraft) -> Result<&ToolItem, ToolError> {
        if !draft.is_complete() {
            return Err(ToolError::Incomplete);
        }
        let id = format!("custom-tool-{}", uuid::Uuid::new_v4().simple());
        self.tools.push(draft.into_tool(id, true, false));
        Ok(&self.tools[self.tools.len() - 1])
    }

    /// Replace the fields of the tool at `index`
    ///
    /// The id, enabled flag and built-in flag are kept. Returns `Ok(true)`
    /// when the tool actually changed.
    pub fn update_tool(&mut self, index: usize, draft: ToolDraft) -> Result<bool, ToolError> {
        if !draft.is_complete() {
            return Err(ToolError::Incomplete);
        }
        let tool = self.tools.get_mut(index).ok_or(ToolError::NotFound(index))?;
        let updated = draft.into_tool(tool.id.clone(), tool.enabled, tool.built_in);
        if *tool == updated {
            return Ok(false);
        }
        *tool = updated;
        Ok(true)
    }

    /// Remove a custom tool. Built-in tools are refused.
    pub fn delete_tool(&mut self, index: usize) -> Result<ToolItem, ToolError> {
        let tool = self.tools.get(index).ok_or(ToolError::NotFound(index))?;
        if tool.built_in {
            return Err(ToolError::BuiltIn(tool.name.clone()));
        }
        Ok(self.tools.remove(index))
    }

    /// Display value of a choice field (`None` for non-choice fields)
    pub fn choice_label(&self, field: FieldKey) -> Option<String> {
        let label = match field {
            FieldKey::GreetingType => self.greeting_type.label().to_string(),
            FieldKey::PipelineMode => self.pipeline_mode.label().to_string(),
            _ => {
                let (options, id) = self.catalog_slot(field)?;
                catalog::display_name(options, id).to_string()
            }
        };
        Some(label)
    }

    /// Move a choice field to the next/previous option
    ///
    /// Returns `true` when the value changed.
    pub fn cycle(&mut self, field: FieldKey, direction: Cycle) -> bool {
        match field {
            FieldKey::GreetingType => {
                self.greeting_type = self.greeting_type.toggled();
                true
            }
            FieldKey::PipelineMode => {
                self.pipeline_mode = self.pipeline_mode.toggled();
                true
            }
            _ => {
                let Some((options, current)) = self.catalog_slot(field) else {
                    return false;
                };
                let Some(next) = catalog::step(options, current, direction) else {
                    return false;
                };
                let next = next.to_string();
                match self.catalog_slot_mut(field) {
                    Some(slot) if *slot != next => {
                        *slot = next;
                        true
                    }
                    _ => false,
                }
            }
        }
    }

    /// Whether a field is shown given the current settings
    pub fn is_visible(&self, field: FieldKey) -> bool {
        match field {
            FieldKey::GreetingType | FieldKey::WelcomeMessage => self.enable_greeting,
            FieldKey::RealtimeProvider | FieldKey::RealtimeModel => {
                self.pipeline_mode == PipelineMode::Realtime
            }
            FieldKey::LlmModel | FieldKey::SttService | FieldKey::TtsService => {
                self.pipeline_mode == PipelineMode::Pipeline
            }
            _ => true,
        }
    }

    /// Placeholder names used in the welcome message, in order of appearance
    pub fn welcome_placeholders(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for caps in PLACEHOLDER_REGEX.captures_iter(&self.welcome_message) {
            let name = caps[1].to_string();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    fn catalog_slot(&self, field: FieldKey) -> Option<(&'static [CatalogEntry], &str)> {
        let slot = match field {
            FieldKey::Language => (catalog::LANGUAGES, &self.language),
            FieldKey::SelectedVoice => (catalog::VOICES, &self.selected_voice),
            FieldKey::RealtimeProvider => (catalog::REALTIME_PROVIDERS, &self.realtime_provider),
            FieldKey::RealtimeModel => (catalog::REALTIME_MODELS, &self.realtime_model),
            FieldKey::LlmModel => (catalog::LLM_MODELS, &self.llm_model),
            FieldKey::SttService => (catalog::STT_SERVICES, &self.stt_service),
            FieldKey::TtsService => (catalog::TTS_SERVICES, &self.tts_service),
            _ => return None,
        };
        Some((slot.0, slot.1.as_str()))
    }

    fn catalog_slot_mut(&mut self, field: FieldKey) -> Option<&mut String> {
        match field {
            FieldKey::Language => Some(&mut self.language),
            FieldKey::SelectedVoice => Some(&mut self.selected_voice),
            FieldKey::RealtimeProvider => Some(&mut self.realtime_provider),
            FieldKey::RealtimeModel => Some(&mut self.realtime_model),
            FieldKey::LlmModel => Some(&mut self.llm_model),
            FieldKey::SttService => Some(&mut self.stt_service),
            FieldKey::TtsService => Some(&mut self.tts_service),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_agent() {
        let agent = AgentConfig::default();
        assert_eq!(agent.name, "Sally Scheduler");
        assert_eq!(agent.language, "en-US");
        assert_eq!(agent.pipeline_mode, PipelineMode::Pipeline);
        assert_eq!(agent.tools.len(), 4);
    }

    #[test]
    fn test_set_text_reports_change() {
        let mut agent = AgentConfig::default();
        assert!(agent.set_text(FieldKey::Name, "Sally"));
        assert_eq!(agent.text(FieldKey::Name), Some("Sally"));
        assert!(!agent.set_text(FieldKey::Name, "Sally"));
        assert!(!agent.set_text(FieldKey::Language, "fr-FR"));
    }

    #[test]
    fn test_toggle() {
        let mut agent = AgentConfig::default();
        assert_eq!(agent.flag(FieldKey::AllowInterrupt), Some(true));
        assert!(agent.toggle(FieldKey::AllowInterrupt));
        assert_eq!(agent.flag(FieldKey::AllowInterrupt), Some(false));
        assert!(!agent.toggle(FieldKey::Name));
    }

    #[test]
    fn test_toggle_tool() {
        let mut agent = AgentConfig::default();
        assert!(!agent.tools[1].enabled);
        assert!(agent.toggle_tool(1));
        assert!(agent.tools[1].enabled);
        assert!(!agent.toggle_tool(99));
    }

    fn lookup_draft() -> ToolDraft {
        ToolDraft {
            name: "lookup_booking".into(),
            description: "Find a booking by phone number".into(),
            endpoint: "https://example.com/bookings".into(),
            ..ToolDraft::default()
        }
    }

    #[test]
    fn test_add_tool() {
        let mut agent = AgentConfig::default();
        let before = agent.tools.len();
        let tool = agent.add_tool(lookup_draft()).unwrap();
        assert!(tool.id.starts_with("custom-tool-"));
        assert!(tool.enabled);
        assert!(!tool.built_in);
        assert_eq!(agent.tools.len(), before + 1);
    }

    #[test]
    fn test_add_incomplete_tool_rejected() {
        let mut agent = AgentConfig::default();
        let draft = ToolDraft {
            description: String::new(),
            ..lookup_draft()
        };
        assert_eq!(agent.add_tool(draft).unwrap_err(), ToolError::Incomplete);
        assert_eq!(agent.tools.len(), 4);
    }

    #[test]
    fn test_update_tool_keeps_identity() {
        let mut agent = AgentConfig::default();
        let id = agent.tools[3].id.clone();
        let mut draft = ToolDraft::from_tool(&agent.tools[3]);
        assert_eq!(agent.update_tool(3, draft.clone()), Ok(false));

        draft.method = crate::model::ToolMethod::Post;
        assert_eq!(agent.update_tool(3, draft), Ok(true));
        assert_eq!(agent.tools[3].id, id);
        assert!(agent.tools[3].enabled);
        assert_eq!(agent.tools[3].method.label(), "POST");
        assert_eq!(agent.update_tool(9, lookup_draft()), Err(ToolError::NotFound(9)));
    }

    #[test]
    fn test_built_in_tool_keeps_flag_when_edited() {
        let mut agent = AgentConfig::default();
        let mut draft = ToolDraft::from_tool(&agent.tools[0]);
        draft.description = "Hang up politely".into();
        assert_eq!(agent.update_tool(0, draft), Ok(true));
        assert!(agent.tools[0].built_in);
    }

    #[test]
    fn test_delete_tool() {
        let mut agent = AgentConfig::default();
        let removed = agent.delete_tool(3).unwrap();
        assert_eq!(removed.name, "custom_tool");
        assert_eq!(agent.tools.len(), 3);
    }

    #[test]
    fn test_delete_built_in_tool_refused() {
        let mut agent = AgentConfig::default();
        assert_eq!(
            agent.delete_tool(0),
            Err(ToolError::BuiltIn("End call".into()))
        );
        assert_eq!(agent.tools.len(), 4);
        assert_eq!(agent.delete_tool(42), Err(ToolError::NotFound(42)));
    }

    #[test]
    fn test_cycle_language_wraps() {
        let mut agent = AgentConfig::default();
        assert!(agent.cycle(FieldKey::Language, Cycle::Next));
        assert_eq!(agent.language, "en-GB");
        assert!(agent.cycle(FieldKey::Language, Cycle::Prev));
        assert!(agent.cycle(FieldKey::Language, Cycle::Prev));
        assert_eq!(agent.language, "zh-CN");
        assert_eq!(agent.choice_label(FieldKey::Language).as_deref(), Some("Chinese"));
    }

    #[test]
    fn test_cycle_enum_fields() {
        let mut agent = AgentConfig::default();
        assert!(agent.cycle(FieldKey::PipelineMode, Cycle::Next));
        assert_eq!(agent.pipeline_mode, PipelineMode::Realtime);
        assert!(agent.cycle(FieldKey::GreetingType, Cycle::Prev));
        assert_eq!(agent.greeting_type, GreetingType::Prompt);
        assert!(!agent.cycle(FieldKey::Name, Cycle::Next));
    }

    #[test]
    fn test_visibility_follows_mode_and_greeting() {
        let mut agent = AgentConfig::default();
        assert!(agent.is_visible(FieldKey::LlmModel));
        assert!(!agent.is_visible(FieldKey::RealtimeModel));

        agent.pipeline_mode = PipelineMode::Realtime;
        assert!(!agent.is_visible(FieldKey::LlmModel));
        assert!(agent.is_visible(FieldKey::RealtimeModel));

        agent.enable_greeting = false;
        assert!(!agent.is_visible(FieldKey::WelcomeMessage));
        assert!(!agent.is_visible(FieldKey::GreetingType));
        assert!(agent.is_visible(FieldKey::Name));
    }

    #[test]
    fn test_welcome_placeholders() {
        let mut agent = AgentConfig::default();
        agent.welcome_message = "Hi {{first_name}}, {{ last_name }}! Bye {{first_name}}".into();
        assert_eq!(agent.welcome_placeholders(), vec!["first_name", "last_name"]);

        agent.welcome_message = "No placeholders {{}} here".into();
        assert!(agent.welcome_placeholders().is_empty());
    }
}
