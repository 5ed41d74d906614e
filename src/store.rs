//! In-memory conversation collection backing the chat page.
//!
//! Plain data with explicit mutation methods; the chat page wraps one
//! of these in a signal. Conversations live newest-first and only for
//! the current session.

use chrono::Utc;

use crate::types::{derived_title, Conversation, Message};

/// Assistant bubble appended when a send fails.
pub const APOLOGY_TEXT: &str =
    "I couldn't reach the backend server. Please make sure it's running, then try me again!";

/// Gate for the chat page's send operation: there must be trimmed text,
/// no send already in flight, and an active conversation to append to.
pub fn can_send(text: &str, typing: bool, active_id: Option<&str>) -> bool {
    !text.trim().is_empty() && !typing && active_id.is_some()
}

/// Ordered conversation collection plus the active selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    active: Option<String>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting state shown on first load: a greeting thread plus an
    /// empty one from the day before.
    pub fn with_welcome() -> Self {
        let mut greeting = Conversation::new("Hello conversation");
        greeting.messages.push(Message::assistant(
            "Hii! Welcome to Oh, Mochi! I'm so happy you're here! How can I help you today?",
        ));

        let mut recipes = Conversation::new("Recipe ideas");
        let yesterday = Utc::now() - chrono::Duration::days(1);
        recipes.created_at = yesterday;
        recipes.updated_at = yesterday;

        let active = Some(greeting.id.clone());
        Self {
            conversations: vec![greeting, recipes],
            active,
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&Conversation> {
        let id = self.active.as_deref()?;
        self.get(id)
    }

    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == id)
    }

    /// Insert a fresh conversation at the front and make it active.
    /// Returns the new id.
    pub fn new_conversation(&mut self) -> String {
        let convo = Conversation::new("New chat");
        let id = convo.id.clone();
        self.conversations.insert(0, convo);
        self.active = Some(id.clone());
        id
    }

    /// Make an existing conversation active. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) {
        if self.get(id).is_some() {
            self.active = Some(id.to_string());
        }
    }

    /// Set a conversation's title. No-op when the id is absent.
    pub fn rename(&mut self, id: &str, title: impl Into<String>) {
        if let Some(convo) = self.get_mut(id) {
            convo.title = title.into();
        }
    }

    /// Remove a conversation. When the active one goes away, selection
    /// falls back to the first remaining conversation, or to none.
    pub fn delete(&mut self, id: &str) {
        self.conversations.retain(|c| c.id != id);
        if self.active.as_deref() == Some(id) {
            self.active = self.conversations.first().map(|c| c.id.clone());
        }
    }

    /// Append a user message. The first message of an empty conversation
    /// also titles it.
    pub fn push_user_message(&mut self, id: &str, text: &str) {
        if let Some(convo) = self.get_mut(id) {
            if convo.messages.is_empty() {
                convo.title = derived_title(text);
            }
            convo.messages.push(Message::user(text));
            convo.updated_at = Utc::now();
        }
    }

    /// Append an assistant message.
    pub fn push_assistant_message(&mut self, id: &str, text: &str) {
        if let Some(convo) = self.get_mut(id) {
            convo.messages.push(Message::assistant(text));
            convo.updated_at = Utc::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageRole;

    fn store_with(titles: &[&str]) -> ConversationStore {
        let mut store = ConversationStore::new();
        // new_conversation inserts at the front, so push in reverse
        for title in titles.iter().rev() {
            let id = store.new_conversation();
            store.rename(&id, *title);
        }
        store
    }

    #[test]
    fn test_can_send_rejects_empty_or_whitespace_text() {
        assert!(!can_send("", false, Some("c-1")));
        assert!(!can_send("   \n\t", false, Some("c-1")));
        assert!(can_send("hello", false, Some("c-1")));
    }

    #[test]
    fn test_can_send_rejects_inflight_or_missing_conversation() {
        assert!(!can_send("hello", true, Some("c-1")));
        assert!(!can_send("hello", false, None));
    }

    #[test]
    fn test_new_conversation_goes_first_and_becomes_active() {
        let mut store = store_with(&["old"]);
        let id = store.new_conversation();

        assert_eq!(store.conversations().len(), 2);
        assert_eq!(store.conversations()[0].id, id);
        assert_eq!(store.conversations()[0].title, "New chat");
        assert_eq!(store.active_id(), Some(id.as_str()));
    }

    #[test]
    fn test_select_ignores_unknown_id() {
        let mut store = store_with(&["a", "b"]);
        let active_before = store.active_id().map(str::to_string);

        store.select("nope");
        assert_eq!(store.active_id(), active_before.as_deref());

        let second = store.conversations()[1].id.clone();
        store.select(&second);
        assert_eq!(store.active_id(), Some(second.as_str()));
    }

    #[test]
    fn test_rename_sets_title() {
        let mut store = store_with(&["a"]);
        let id = store.conversations()[0].id.clone();

        store.rename(&id, "groceries");
        assert_eq!(store.get(&id).unwrap().title, "groceries");
    }

    #[test]
    fn test_rename_missing_id_is_noop() {
        let mut store = store_with(&["a", "b"]);
        let before = store.clone();

        store.rename("missing", "anything");
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_active_falls_back_to_first_remaining() {
        let mut store = store_with(&["a", "b", "c"]);
        let first = store.conversations()[0].id.clone();
        let second = store.conversations()[1].id.clone();

        store.select(&second);
        store.delete(&second);

        assert_eq!(store.conversations().len(), 2);
        assert_eq!(store.active_id(), Some(first.as_str()));
    }

    #[test]
    fn test_delete_inactive_keeps_selection() {
        let mut store = store_with(&["a", "b"]);
        let first = store.conversations()[0].id.clone();
        let second = store.conversations()[1].id.clone();

        store.select(&first);
        store.delete(&second);

        assert_eq!(store.active_id(), Some(first.as_str()));
    }

    #[test]
    fn test_delete_last_conversation_clears_selection() {
        let mut store = store_with(&["only"]);
        let id = store.conversations()[0].id.clone();

        store.delete(&id);

        assert!(store.conversations().is_empty());
        assert_eq!(store.active_id(), None);
        assert!(store.active().is_none());
    }

    #[test]
    fn test_first_message_titles_empty_conversation() {
        let mut store = store_with(&["New chat"]);
        let id = store.conversations()[0].id.clone();

        store.push_user_message(&id, "Hello there, how are you today?");

        let convo = store.get(&id).unwrap();
        assert_eq!(convo.title, "Hello there, how are you");
        assert_eq!(convo.messages.len(), 1);
        assert_eq!(convo.messages[0].role, MessageRole::User);
    }

    #[test]
    fn test_later_messages_leave_title_alone() {
        let mut store = store_with(&["New chat"]);
        let id = store.conversations()[0].id.clone();

        store.push_user_message(&id, "first message");
        store.push_user_message(&id, "second message");

        let convo = store.get(&id).unwrap();
        assert_eq!(convo.title, "first message");
        assert_eq!(convo.messages.len(), 2);
    }

    #[test]
    fn test_successful_send_appends_user_then_assistant() {
        let mut store = store_with(&["New chat"]);
        let id = store.conversations()[0].id.clone();

        store.push_user_message(&id, "Hello there, how are you today?");
        store.push_assistant_message(&id, "Doing great, thanks for asking!");

        let convo = store.get(&id).unwrap();
        assert_eq!(convo.messages.len(), 2);
        assert_eq!(convo.messages[0].role, MessageRole::User);
        assert_eq!(convo.messages[1].role, MessageRole::Assistant);
    }

    #[test]
    fn test_failed_send_appends_user_then_apology() {
        let mut store = store_with(&["New chat"]);
        let id = store.conversations()[0].id.clone();

        store.push_user_message(&id, "hello?");
        store.push_assistant_message(&id, APOLOGY_TEXT);

        let convo = store.get(&id).unwrap();
        assert_eq!(convo.messages.len(), 2);
        assert_eq!(convo.messages[1].content, APOLOGY_TEXT);
        assert_eq!(convo.messages[1].role, MessageRole::Assistant);
    }

    #[test]
    fn test_push_to_missing_conversation_changes_nothing() {
        let mut store = store_with(&["a"]);
        let before = store.clone();

        store.push_user_message("missing", "hello");
        store.push_assistant_message("missing", "hi");

        assert_eq!(store, before);
    }

    #[test]
    fn test_push_bumps_updated_at() {
        let mut store = ConversationStore::with_welcome();
        let id = store.conversations()[1].id.clone();
        let stale = store.get(&id).unwrap().updated_at;

        store.push_user_message(&id, "any recipe ideas?");

        assert!(store.get(&id).unwrap().updated_at > stale);
    }

    #[test]
    fn test_welcome_state_shape() {
        let store = ConversationStore::with_welcome();

        assert_eq!(store.conversations().len(), 2);
        assert_eq!(store.conversations()[0].title, "Hello conversation");
        assert_eq!(store.conversations()[0].messages.len(), 1);
        assert_eq!(
            store.conversations()[0].messages[0].role,
            MessageRole::Assistant
        );
        assert_eq!(store.conversations()[1].title, "Recipe ideas");
        assert!(store.conversations()[1].messages.is_empty());
        assert_eq!(store.active_id(), Some(store.conversations()[0].id.as_str()));
    }
}
