//! Data model and wire types for the Mochi backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Character budget for a title derived from the first message.
pub const DERIVED_TITLE_LEN: usize = 25;

/// Shown when a reply payload carries no usable text field.
pub const EMPTY_REPLY_TEXT: &str = "I didn't get a text response.";

/// Current user as reported by the session endpoint.
///
/// The backend sends `{authenticated: bool, ...profile fields}`; anything
/// it adds beyond these is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Chat request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    /// Serialized as `conversationId`, null when no conversation is open.
    pub conversation_id: Option<String>,
}

/// Chat reply payload.
///
/// Backend DTOs differ on which field carries the reply text, so all
/// three spellings are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatReply {
    /// First non-empty of `response`, `message`, `content`, with a fixed
    /// fallback when none is present.
    pub fn text(&self) -> String {
        [&self.response, &self.message, &self.content]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .cloned()
            .unwrap_or_else(|| EMPTY_REPLY_TEXT.to_string())
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

/// A single turn in a conversation. Append-only: never edited or removed
/// individually once pushed.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub is_typing: bool,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: MessageRole::User,
            content: content.into(),
            timestamp: Utc::now(),
            is_typing: false,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            is_typing: false,
        }
    }

    /// Placeholder bubble rendered as animated dots.
    pub fn typing() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: MessageRole::Assistant,
            content: String::new(),
            timestamp: Utc::now(),
            is_typing: true,
        }
    }
}

/// A titled, ordered thread of messages
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Title preview for a conversation, taken from its first message.
/// Counts `char`s rather than bytes so multibyte text cannot split, and
/// drops whitespace the cut may leave dangling at the end.
pub fn derived_title(text: &str) -> String {
    text.chars()
        .take(DERIVED_TITLE_LEN)
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_text_prefers_response() {
        let reply = ChatReply {
            response: Some("from response".to_string()),
            message: Some("from message".to_string()),
            content: Some("from content".to_string()),
        };
        assert_eq!(reply.text(), "from response");
    }

    #[test]
    fn test_reply_text_falls_through_empty_fields() {
        let reply = ChatReply {
            response: Some(String::new()),
            message: None,
            content: Some("from content".to_string()),
        };
        assert_eq!(reply.text(), "from content");
    }

    #[test]
    fn test_reply_text_uses_message_when_response_missing() {
        let reply = ChatReply {
            response: None,
            message: Some("from message".to_string()),
            content: Some("from content".to_string()),
        };
        assert_eq!(reply.text(), "from message");
    }

    #[test]
    fn test_reply_text_fallback_when_nothing_usable() {
        let reply = ChatReply::default();
        assert_eq!(reply.text(), EMPTY_REPLY_TEXT);

        let all_empty = ChatReply {
            response: Some(String::new()),
            message: Some(String::new()),
            content: Some(String::new()),
        };
        assert_eq!(all_empty.text(), EMPTY_REPLY_TEXT);
    }

    #[test]
    fn test_reply_deserializes_unknown_shape() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"message":"hi there","model":"mochi-1"}"#)
                .expect("should deserialize");
        assert_eq!(reply.text(), "hi there");
    }

    #[test]
    fn test_chat_request_wire_format() {
        let body = ChatRequest {
            message: "hello".to_string(),
            conversation_id: Some("c-1".to_string()),
        };
        let json = serde_json::to_value(&body).expect("should serialize");
        assert_eq!(json["message"], "hello");
        assert_eq!(json["conversationId"], "c-1");

        let no_convo = ChatRequest {
            message: "hello".to_string(),
            conversation_id: None,
        };
        let json = serde_json::to_value(&no_convo).expect("should serialize");
        assert!(json["conversationId"].is_null());
    }

    #[test]
    fn test_user_defaults_to_anonymous_fields() {
        let user: User = serde_json::from_str("{}").expect("should deserialize");
        assert!(!user.authenticated);
        assert!(user.name.is_none());

        let user: User = serde_json::from_str(
            r#"{"authenticated":true,"name":"Momo","email":"b@example.com"}"#,
        )
        .expect("should deserialize");
        assert!(user.authenticated);
        assert_eq!(user.name.as_deref(), Some("Momo"));
    }

    #[test]
    fn test_message_constructors_set_roles() {
        let user_msg = Message::user("hi");
        assert_eq!(user_msg.role, MessageRole::User);
        assert!(!user_msg.is_typing);

        let assistant_msg = Message::assistant("hello");
        assert_eq!(assistant_msg.role, MessageRole::Assistant);
        assert!(!assistant_msg.is_typing);

        let typing = Message::typing();
        assert_eq!(typing.role, MessageRole::Assistant);
        assert!(typing.is_typing);
        assert!(typing.content.is_empty());
    }

    #[test]
    fn test_derived_title_truncates_to_25_chars() {
        assert_eq!(
            derived_title("Hello there, how are you today?"),
            "Hello there, how are you"
        );
        assert_eq!(derived_title("short"), "short");
        assert_eq!(derived_title(""), "");
    }

    #[test]
    fn test_derived_title_counts_chars_not_bytes() {
        let text = "もちもちもちもちもちもちもちもちもちもちもちもちもち";
        let title = derived_title(text);
        assert_eq!(title.chars().count(), 25);
        assert!(text.starts_with(&title));
    }
}
