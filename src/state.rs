//! Global application state

use leptos::prelude::*;

use crate::store::ConversationStore;

/// Build-time override for the backend location, with a local default.
fn default_api_base() -> String {
    option_env!("MOCHI_API_URL")
        .unwrap_or("http://localhost:8081")
        .to_string()
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// API base URL
    pub api_base: RwSignal<String>,
    /// Conversation collection shown in the chat page
    pub conversations: RwSignal<ConversationStore>,
    /// True while an assistant reply is outstanding. Single guard for
    /// the whole UI: one send at a time.
    pub is_typing: RwSignal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api_base: RwSignal::new(default_api_base()),
            conversations: RwSignal::new(ConversationStore::with_welcome()),
            is_typing: RwSignal::new(false),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
