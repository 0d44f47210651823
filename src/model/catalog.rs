//! Static seed data
//!
//! Option lists for the choice fields, the starting agent configuration and
//! the scripted deployment output.

use super::agent::{AgentConfig, Cycle, GreetingType, PipelineMode};
use super::deployment::LogLine;
use super::tool::{ToolItem, ToolMethod};

/// A selectable option (`id` is stored, `name` is displayed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
}

const fn entry(id: &'static str, name: &'static str) -> CatalogEntry {
    CatalogEntry { id, name }
}

pub const LANGUAGES: &[CatalogEntry] = &[
    entry("en-US", "English"),
    entry("en-GB", "English (UK)"),
    entry("es-ES", "Spanish"),
    entry("fr-FR", "French"),
    entry("de-DE", "German"),
    entry("ja-JP", "Japanese"),
    entry("zh-CN", "Chinese"),
];

pub const VOICES: &[CatalogEntry] = &[
    entry("sophia", "Sophia"),
    entry("liam", "Liam"),
    entry("aiko", "Aiko"),
    entry("kai", "Kai"),
    entry("yuki", "Yuki"),
];

pub const REALTIME_PROVIDERS: &[CatalogEntry] = &[
    entry("openai-realtime", "OpenAI Realtime API"),
    entry("elevenlabs-conversational", "ElevenLabs Conversational AI"),
    entry("azure-realtime", "Azure Realtime"),
];

pub const REALTIME_MODELS: &[CatalogEntry] = &[
    entry("gemini-2.0-flash-exp", "gemini-2.0-flash-exp"),
    entry("gpt-4o-realtime-preview", "gpt-4o-realtime-preview"),
];

pub const LLM_MODELS: &[CatalogEntry] = &[
    entry("gpt-4.1-mini", "GPT-4.1 Mini"),
    entry("gpt-4", "GPT-4"),
    entry("gpt-4o", "GPT-4o"),
    entry("claude-3.5-sonnet", "Claude 3.5 Sonnet"),
    entry("claude-3-opus", "Claude 3 Opus"),
    entry("gemini-pro", "Gemini Pro"),
    entry("gemini-1.5-flash", "Gemini 1.5 Flash"),
];

pub const STT_SERVICES: &[CatalogEntry] = &[
    entry("deepgram", "Deepgram"),
    entry("openai-whisper", "OpenAI Whisper"),
    entry("google-stt", "Google Speech-to-Text"),
    entry("azure-stt", "Azure Speech"),
];

pub const TTS_SERVICES: &[CatalogEntry] = &[
    entry("elevenlabs", "ElevenLabs"),
    entry("openai-tts", "OpenAI TTS"),
    entry("cartesia", "Cartesia"),
    entry("azure-tts", "Azure Speech"),
];

/// Display name for `id`, or the id itself when it is not in the list
pub fn display_name<'a>(options: &'static [CatalogEntry], id: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.id == id)
        .map(|o| o.name)
        .unwrap_or(id)
}

/// Neighbouring option id, wrapping at both ends
///
/// An id not in the list steps to the first option.
pub fn step(options: &'static [CatalogEntry], current: &str, direction: Cycle) -> Option<&'static str> {
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let next = match options.iter().position(|o| o.id == current) {
        Some(idx) => match direction {
            Cycle::Next => (idx + 1) % len,
            Cycle::Prev => (idx + len - 1) % len,
        },
        None => 0,
    };
    Some(options[next].id)
}

const DEFAULT_INSTRUCTIONS: &str = "You are a helpful and conversational voice assistant. \
Speak naturally, like a knowledgeable friend who is approachable but professional. \
Keep responses concise, warm, and clear.

When responding to questions:
- Prioritize accuracy and clarity.
- If you don't know, admit it and suggest a next step.
- Break down complex ideas into simple explanations.

Interaction guidelines:
- Ask clarifying questions if the request is ambiguous.
- Confirm important details before taking action.";

/// The agent the editor starts with
pub fn default_agent() -> AgentConfig {
    AgentConfig {
        name: "Sally Scheduler".to_string(),
        system_instructions: DEFAULT_INSTRUCTIONS.to_string(),
        welcome_message: "Hello {{first_name}} how are you doing?".to_string(),
        enable_greeting: true,
        greeting_type: GreetingType::Script,
        allow_interrupt: true,
        language: "en-US".to_string(),
        pipeline_mode: PipelineMode::Pipeline,
        selected_voice: "sophia".to_string(),
        realtime_provider: "openai-realtime".to_string(),
        realtime_model: "gemini-2.0-flash-exp".to_string(),
        secret_name: String::new(),
        secret_key: String::new(),
        llm_model: "gpt-4.1-mini".to_string(),
        stt_service: "deepgram".to_string(),
        tts_service: "elevenlabs".to_string(),
        tools: vec![
            ToolItem::built_in(
                "end-call",
                "End call",
                "Allows your agent to end the call with the user",
                true,
            ),
            ToolItem::built_in(
                "transfer-agent",
                "Transfer agent",
                "Allows your agent to transfer the call to another agent",
                false,
            ),
            ToolItem::built_in(
                "detect-language",
                "Detect language",
                "Allows your agent to detect the language of the user",
                false,
            ),
            ToolItem {
                id: "custom-tool-1".to_string(),
                name: "custom_tool".to_string(),
                description: "The user wrote this description in the panel.".to_string(),
                enabled: true,
                built_in: false,
                method: ToolMethod::Get,
                endpoint: String::new(),
                headers: Vec::new(),
                keys: Vec::new(),
            },
        ],
    }
}

const DEPLOYMENT_SCRIPT: &[(&str, &str)] = &[
    ("2025-06-17T19:34:55.310Z", "[+] Building 83.1s (20/20) FINISHED"),
    ("2025-06-17T19:34:55.574Z", "=> [ 1/20] FROM docker.io/library/node:18-alpine"),
    ("2025-06-17T19:34:55.574Z", "=> => resolve docker.io/library/node:18-alpine@sha256:4b..."),
    ("2025-06-17T19:34:55.680Z", "=> => extracting sha256:4bfbe15b3e0133f5e1103c..."),
    ("2025-06-17T19:34:56.010Z", "=> [ 2/20] RUN adduser --disabled-password --gecos '' appuser"),
    ("2025-06-17T19:34:56.120Z", "=> [ 3/20] RUN apt-get update && apt-get install -y curl"),
    ("2025-06-17T19:34:56.340Z", "=> [ 5/20] RUN apt-get install -y python3 python3-pip"),
    ("2025-06-17T19:34:56.670Z", "=> [ 8/20] WORKDIR /home/appuser/app"),
    ("2025-06-17T19:34:56.780Z", "=> [ 9/20] COPY package*.json ./"),
    ("2025-06-17T19:34:56.890Z", "=> [10/20] RUN npm ci --only=production"),
    ("2025-06-17T19:34:57.110Z", "=> [12/20] COPY requirements.txt ."),
    ("2025-06-17T19:34:57.220Z", "=> [13/20] RUN pip install --no-cache-dir -r requirements.txt"),
    ("2025-06-17T19:34:57.330Z", "=> [14/20] COPY --chown=appuser:appuser . ."),
    ("2025-06-17T19:34:57.550Z", "=> [16/20] USER appuser"),
    ("2025-06-17T19:34:57.660Z", "=> [17/20] EXPOSE 8080"),
    ("2025-06-17T19:34:57.880Z", "=> [19/20] HEALTHCHECK --interval=30s --timeout=3s CMD curl -f http://localhost:8080/health"),
    ("2025-06-17T19:34:57.990Z", "=> [20/20] CMD ['sh', 'entrypoint.sh']"),
    ("2025-06-17T19:34:58.100Z", "=> exporting to image"),
    ("2025-06-17T19:34:58.210Z", "=> => exporting layers 0/5"),
    ("2025-06-17T19:34:58.430Z", "=> => exporting layers 5/5 done"),
    ("2025-06-17T19:34:58.540Z", "=> => writing image sha256:abc123def456789..."),
    ("2025-06-17T19:34:58.650Z", "=> => naming to docker.io/library/sally-agent:latest"),
    ("2025-06-17T19:34:58.760Z", "=> pushing image to registry"),
    ("2025-06-17T19:34:58.870Z", "=> => pushing layer sha256:4bfbe15b3e..."),
    ("2025-06-17T19:34:59.090Z", "✓ Deployment manifest created"),
    ("2025-06-17T19:34:59.200Z", "✓ Container registry updated"),
    ("2025-06-17T19:34:59.310Z", "✓ Health checks passed"),
];

/// Scripted output of a deployment run
pub fn deployment_log() -> Vec<LogLine> {
    DEPLOYMENT_SCRIPT
        .iter()
        .map(|(timestamp, message)| LogLine::new(*timestamp, *message))
        .collect()
}
