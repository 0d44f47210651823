//! Views for the agent editor

mod config;
mod deployment;
mod history;
mod tool_form;

pub use config::{ConfigAction, ConfigRow, ConfigView, field_value};
pub use deployment::{COLLAPSED_HEIGHT, DeploymentView, EXPANDED_HEIGHT, SUCCESS_HEIGHT};
pub use history::HistoryView;
pub use tool_form::{FormRow, ToolForm, ToolFormResult};
