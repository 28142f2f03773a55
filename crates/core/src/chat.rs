//! Chat message records exchanged with the composer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

/// One turn of a conversation.
///
/// `tool_calls` is carried through untouched; nothing in the engine reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(default, alias = "toolCalls", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub tool_calls: Option<serde_json::Value>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_calls: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialises_with_and_without_tool_calls() {
        let plain: ChatMessage =
            serde_json::from_value(json!({ "role": "user", "content": "hi" })).expect("plain");
        assert_eq!(plain, ChatMessage::user("hi"));

        let with_tools: ChatMessage = serde_json::from_value(json!({
            "role": "assistant",
            "content": "",
            "tool_calls": [{ "name": "lookup", "args": { "id": 7 } }]
        }))
        .expect("with tools");
        assert_eq!(with_tools.role, ChatRole::Assistant);
        assert_eq!(with_tools.tool_calls, Some(json!([{ "name": "lookup", "args": { "id": 7 } }])));
    }

    #[test]
    fn accepts_camel_case_tool_calls() {
        let msg: ChatMessage = serde_json::from_value(json!({
            "role": "assistant",
            "content": "",
            "toolCalls": { "id": 1 }
        }))
        .expect("camel case");
        assert_eq!(msg.tool_calls, Some(json!({ "id": 1 })));
    }

    #[test]
    fn rejects_unknown_role() {
        let res = serde_json::from_value::<ChatMessage>(json!({ "role": "tool", "content": "x" }));
        assert!(res.is_err());
    }

    #[test]
    fn omits_absent_tool_calls_when_serialised() {
        let value =
            serde_json::to_value(ChatMessage::new(ChatRole::System, "boot")).expect("serialize");
        assert_eq!(value, json!({ "role": "system", "content": "boot" }));
    }
}
