//! Reusable UI components

pub mod chat_input;
pub mod chat_message;
pub mod dialog;
pub mod footer;
pub mod loading;
pub mod sidebar;

pub use chat_input::ChatInput;
pub use chat_message::ChatMessage;
pub use dialog::ConfirmDialog;
pub use footer::Footer;
pub use loading::{LoadingDots, LoadingSpinner, TypingIndicator};
pub use sidebar::Sidebar;
