//! Domain models for the agent builder

mod agent;
pub mod catalog;
mod deployment;
mod field;
mod history;
mod notification;
mod tool;

pub use agent::{AgentConfig, Cycle, GreetingType, PipelineMode};
pub use deployment::{LogLine, PlaybackState, PlaybackStatus};
pub use field::{FieldKey, FieldKeyError, describe_changes};
pub use history::{HistoryEntry, HistoryLog, format_relative};
pub use notification::{NOTIFICATION_TTL, Notification, NotificationKind};
pub use tool::{ToolDraft, ToolError, ToolHeader, ToolItem, ToolKey, ToolMethod};
