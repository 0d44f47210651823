//! Editable configuration fields
//!
//! Every form field has a stable identifier (used in logs and config) and a
//! human label used when summarizing edits in the history log.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identifier of an editable agent configuration field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    SystemInstructions,
    WelcomeMessage,
    EnableGreeting,
    GreetingType,
    AllowInterrupt,
    Language,
    PipelineMode,
    SelectedVoice,
    RealtimeProvider,
    RealtimeModel,
    SecretName,
    SecretKey,
    LlmModel,
    SttService,
    TtsService,
    Tools,
}

/// Errors from parsing a field identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldKeyError {
    #[error("field key is empty")]
    Empty,

    #[error("unknown field key: {0}")]
    Unknown(String),
}

impl FieldKey {
    /// All fields, in form order
    pub const ALL: [FieldKey; 17] = [
        FieldKey::Name,
        FieldKey::SystemInstructions,
        FieldKey::WelcomeMessage,
        FieldKey::EnableGreeting,
        FieldKey::GreetingType,
        FieldKey::AllowInterrupt,
        FieldKey::Language,
        FieldKey::PipelineMode,
        FieldKey::SelectedVoice,
        FieldKey::RealtimeProvider,
        FieldKey::RealtimeModel,
        FieldKey::SecretName,
        FieldKey::SecretKey,
        FieldKey::LlmModel,
        FieldKey::SttService,
        FieldKey::TtsService,
        FieldKey::Tools,
    ];

    /// Stable identifier
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::SystemInstructions => "systemInstructions",
            FieldKey::WelcomeMessage => "welcomeMessage",
            FieldKey::EnableGreeting => "enableGreeting",
            FieldKey::GreetingType => "greetingType",
            FieldKey::AllowInterrupt => "allowInterrupt",
            FieldKey::Language => "language",
            FieldKey::PipelineMode => "pipelineMode",
            FieldKey::SelectedVoice => "selectedVoice",
            FieldKey::RealtimeProvider => "realtimeProvider",
            FieldKey::RealtimeModel => "realtimeModel",
            FieldKey::SecretName => "secretName",
            FieldKey::SecretKey => "secretKey",
            FieldKey::LlmModel => "llmModel",
            FieldKey::SttService => "sttService",
            FieldKey::TtsService => "ttsService",
            FieldKey::Tools => "tools",
        }
    }

    /// Label used in history descriptions ("Updated {label}")
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Name => "agent name",
            FieldKey::SystemInstructions => "system instructions",
            FieldKey::WelcomeMessage => "welcome message",
            FieldKey::EnableGreeting => "greeting settings",
            FieldKey::GreetingType => "greeting type",
            FieldKey::AllowInterrupt => "interrupt settings",
            FieldKey::Language => "language",
            FieldKey::PipelineMode => "pipeline mode",
            FieldKey::SelectedVoice => "voice",
            FieldKey::RealtimeProvider => "realtime provider",
            FieldKey::RealtimeModel => "realtime model",
            FieldKey::SecretName => "secret name",
            FieldKey::SecretKey => "secret key",
            FieldKey::LlmModel => "language model",
            FieldKey::SttService => "speech-to-text service",
            FieldKey::TtsService => "text-to-speech service",
            FieldKey::Tools => "tools configuration",
        }
    }

    /// Title shown next to the field in the form
    pub fn title(self) -> &'static str {
        match self {
            FieldKey::Name => "Agent name",
            FieldKey::SystemInstructions => "Instructions",
            FieldKey::WelcomeMessage => "Welcome message",
            FieldKey::EnableGreeting => "Greet the user",
            FieldKey::GreetingType => "Greeting type",
            FieldKey::AllowInterrupt => "Allow interruptions",
            FieldKey::Language => "Language",
            FieldKey::PipelineMode => "Mode",
            FieldKey::SelectedVoice => "Voice",
            FieldKey::RealtimeProvider => "Realtime provider",
            FieldKey::RealtimeModel => "Realtime model",
            FieldKey::SecretName => "Secret name",
            FieldKey::SecretKey => "Secret key",
            FieldKey::LlmModel => "LLM",
            FieldKey::SttService => "Speech-to-text",
            FieldKey::TtsService => "Text-to-speech",
            FieldKey::Tools => "Tools",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = FieldKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FieldKeyError::Empty);
        }
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| FieldKeyError::Unknown(s.to_string()))
    }
}

/// Render the history description for a batch of changed fields
///
/// Labels are used in the given order:
/// - one label: `Updated voice`
/// - two labels: `Updated agent name and language`
/// - three or more: `Updated agent name, language, and voice`
///
/// Returns `None` for an empty batch.
pub fn describe_changes(fields: &[FieldKey]) -> Option<String> {
    let labels: Vec<&str> = fields.iter().map(|f| f.label()).collect();
    match labels.as_slice() {
        [] => None,
        [only] => Some(format!("Updated {only}")),
        [first, second] => Some(format!("Updated {first} and {second}")),
        [init @ .., last] => Some(format!("Updated {}, and {last}", init.join(", "))),
    }
}
