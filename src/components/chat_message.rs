//! Chat message bubble

use leptos::prelude::*;

use crate::components::LoadingDots;
use crate::types::{Message, MessageRole};

/// Render a single chat message
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let is_user = message.role == MessageRole::User;

    view! {
        <div class=format!(
            "bubble-row {}",
            if is_user { "bubble-row-user" } else { "bubble-row-assistant" }
        )>
            <div class=format!(
                "bubble {}",
                if is_user { "bubble-user" } else { "bubble-assistant" }
            )>
                {(!is_user).then(|| view! {
                    <div class="bubble-author">"Mochi"</div>
                })}

                {if message.is_typing {
                    view! { <LoadingDots /> }.into_any()
                } else {
                    view! { <p class="bubble-text">{message.content.clone()}</p> }.into_any()
                }}

                <span class="bubble-time">
                    {message.timestamp.format("%H:%M").to_string()}
                </span>
            </div>
        </div>
    }
}
