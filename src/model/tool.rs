//! Agent tools
//!
//! Built-in tools can be switched on and off and edited. Custom tools are
//! HTTP calls defined through the tool form and can also be deleted.

use thiserror::Error;

/// Errors from tool add/edit/delete
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("tool name and description are required")]
    Incomplete,

    #[error("built-in tool \"{0}\" cannot be deleted")]
    BuiltIn(String),

    #[error("no tool at position {0}")]
    NotFound(usize),
}

/// HTTP method of a custom tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMethod {
    #[default]
    Get,
    Post,
}

impl ToolMethod {
    pub fn label(self) -> &'static str {
        match self {
            ToolMethod::Get => "GET",
            ToolMethod::Post => "POST",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ToolMethod::Get => ToolMethod::Post,
            ToolMethod::Post => ToolMethod::Get,
        }
    }
}

/// Request header sent with a tool call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolHeader {
    pub name: String,
    pub value: String,
}

/// Secret made available to a tool call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolKey {
    pub secret_name: String,
    pub secret_value: String,
}

/// A tool the agent may call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub built_in: bool,
    pub method: ToolMethod,
    pub endpoint: String,
    pub headers: Vec<ToolHeader>,
    pub keys: Vec<ToolKey>,
}

impl ToolItem {
    /// A built-in tool with no request details
    pub fn built_in(id: &str, name: &str, description: &str, enabled: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            enabled,
            built_in: true,
            method: ToolMethod::default(),
            endpoint: String::new(),
            headers: Vec::new(),
            keys: Vec::new(),
        }
    }
}

/// Editable copy of a tool's user-facing fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolDraft {
    pub name: String,
    pub description: String,
    pub method: ToolMethod,
    pub endpoint: String,
    pub headers: Vec<ToolHeader>,
    pub keys: Vec<ToolKey>,
}

impl ToolDraft {
    pub fn from_tool(tool: &ToolItem) -> Self {
        Self {
            name: tool.name.clone(),
            description: tool.description.clone(),
            method: tool.method,
            endpoint: tool.endpoint.clone(),
            headers: tool.headers.clone(),
            keys: tool.keys.clone(),
        }
    }

    /// Name and description are required
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.description.trim().is_empty()
    }

    /// Build the tool, dropping headers and keys without a name
    pub(crate) fn into_tool(self, id: String, enabled: bool, built_in: bool) -> ToolItem {
        ToolItem {
            id,
            name: self.name,
            description: self.description,
            enabled,
            built_in,
            method: self.method,
            endpoint: self.endpoint,
            headers: self
                .headers
                .into_iter()
                .filter(|h| !h.name.trim().is_empty())
                .collect(),
            keys: self
                .keys
                .into_iter()
                .filter(|k| !k.secret_name.trim().is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, description: &str) -> ToolDraft {
        ToolDraft {
            name: name.to_string(),
            description: description.to_string(),
            ..ToolDraft::default()
        }
    }

    #[test]
    fn test_draft_requires_name_and_description() {
        assert!(draft("lookup", "Find a booking").is_complete());
        assert!(!draft("  ", "Find a booking").is_complete());
        assert!(!draft("lookup", "").is_complete());
    }

    #[test]
    fn test_into_tool_drops_unnamed_entries() {
        let mut d = draft("lookup", "Find a booking");
        d.headers = vec![
            ToolHeader {
                name: "Accept".into(),
                value: "application/json".into(),
            },
            ToolHeader {
                name: " ".into(),
                value: "ignored".into(),
            },
        ];
        d.keys = vec![ToolKey::default()];

        let tool = d.into_tool("custom-tool-x".into(), true, false);
        assert_eq!(tool.headers.len(), 1);
        assert_eq!(tool.headers[0].name, "Accept");
        assert!(tool.keys.is_empty());
        assert_eq!(tool.method, ToolMethod::Get);
    }

    #[test]
    fn test_method_toggle() {
        assert_eq!(ToolMethod::Get.toggled(), ToolMethod::Post);
        assert_eq!(ToolMethod::Post.toggled().label(), "GET");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ToolError::BuiltIn("End call".into()).to_string(),
            "built-in tool \"End call\" cannot be deleted"
        );
    }
}
