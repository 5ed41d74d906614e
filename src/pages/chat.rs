//! Chat page: conversation list, message thread and composer

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::api;
use crate::components::{ChatInput, ChatMessage, ConfirmDialog, Footer, Sidebar, TypingIndicator};
use crate::state::AppState;
use crate::store::{can_send, APOLOGY_TEXT};

/// Main chat page
#[component]
pub fn ChatPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let conversations = state.conversations;
    let is_typing = state.is_typing;
    let api_base = state.api_base;

    // Local state
    let input = RwSignal::new(String::new());
    let sidebar_open = RwSignal::new(false);
    let delete_request = RwSignal::new(Option::<String>::None);
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    // Auto-scroll to the newest message
    let scroll_to_bottom = move || {
        if let Some(el) = messages_end_ref.get_untracked() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    // Guarded send: optimistic user message, single-flight typing flag.
    // The reply lands in the conversation that was active at send time,
    // even if the user switches threads while it is in flight.
    let send_message = move || {
        let text = input.get_untracked().trim().to_string();
        let active = conversations.with_untracked(|s| s.active_id().map(str::to_string));
        if !can_send(&text, is_typing.get_untracked(), active.as_deref()) {
            return;
        }
        let Some(convo_id) = active else { return };

        conversations.update(|s| s.push_user_message(&convo_id, &text));
        input.set(String::new());
        is_typing.set(true);
        scroll_to_bottom();

        spawn_local(async move {
            let base = api_base.get_untracked();
            match api::send_message(&base, &text, Some(convo_id.as_str())).await {
                Ok(reply) => {
                    conversations.update(|s| s.push_assistant_message(&convo_id, &reply.text()));
                }
                Err(err) => {
                    tracing::error!(%err, conversation = %convo_id, "send failed");
                    conversations.update(|s| s.push_assistant_message(&convo_id, APOLOGY_TEXT));
                }
            }
            is_typing.set(false);
            scroll_to_bottom();
        });
    };

    let toggle_sidebar = move |_| sidebar_open.update(|v| *v = !*v);

    view! {
        <Title text="Chat | Oh, Mochi" />
        <div class="page chat-layout">
            // Mobile menu button
            <button class="chat-menu-btn" on:click=toggle_sidebar>
                {move || if sidebar_open.get() { "✕" } else { "☰" }}
            </button>

            <Sidebar is_open=sidebar_open delete_request=delete_request />

            // Main chat area
            <main class="thread">
                // Decorative dots
                <div class="deco">
                    <span class="deco-dot deco-pink" style="top: 2.5rem; left: 2rem;"></span>
                    <span class="deco-dot deco-green" style="top: 5rem; right: 4rem;"></span>
                    <span class="deco-dot deco-pink" style="bottom: 8rem; left: 25%;"></span>
                </div>

                // Thread header
                <header class="thread-header">
                    <span class="thread-header-spark">"✨"</span>
                    <h1 class="thread-title">
                        {move || conversations.with(|s| {
                            s.active()
                                .map(|c| c.title.clone())
                                .unwrap_or_else(|| "Select a conversation".to_string())
                        })}
                    </h1>
                    <span class="thread-header-spark">"💚"</span>
                </header>

                // Messages
                <div class="thread-scroll">
                    {move || {
                        let active = conversations.with(|s| s.active().cloned());
                        match active {
                            None => view! {
                                <div class="thread-empty">
                                    <p class="thread-empty-hint">
                                        "Pick a conversation from the sidebar, or start a new one!"
                                    </p>
                                </div>
                            }.into_any(),
                            Some(convo) if convo.messages.is_empty() && !is_typing.get() => {
                                view! { <EmptyThread /> }.into_any()
                            }
                            Some(convo) => view! {
                                <div class="thread-messages">
                                    {convo.messages.into_iter().map(|msg| view! {
                                        <ChatMessage message=msg />
                                    }).collect::<Vec<_>>()}
                                </div>
                            }.into_any(),
                        }
                    }}

                    <Show when=move || is_typing.get()>
                        <TypingIndicator />
                    </Show>

                    // Scroll anchor
                    <div node_ref=messages_end_ref></div>
                </div>

                // Composer
                <div class="thread-composer">
                    <ChatInput
                        value=input
                        on_submit=send_message
                        disabled=Signal::derive(move || is_typing.get())
                    />
                    <Footer />
                </div>
            </main>

            // Delete confirmation
            <ConfirmDialog
                open=Signal::derive(move || delete_request.get().is_some())
                title="Delete Conversation"
                description="Are you sure you want to delete this conversation? This cannot be undone!"
                confirm_label="Delete"
                cancel_label="Keep it"
                on_confirm=move || {
                    if let Some(id) = delete_request.get_untracked() {
                        conversations.update(|s| s.delete(&id));
                    }
                    delete_request.set(None);
                }
                on_cancel=move || delete_request.set(None)
            />
        </div>
    }
}

/// Empty state for a conversation with no messages yet
#[component]
fn EmptyThread() -> impl IntoView {
    view! {
        <div class="thread-empty">
            <div class="float-animation">
                <img src="/assets/logo.svg" alt="Oh, Mochi" class="thread-empty-logo" />
            </div>
            <h2 class="thread-empty-title">"Hii! I'm Oh, Mochi!"</h2>
            <p class="thread-empty-text">
                "Your super friendly AI buddy!"
            </p>
            <p class="thread-empty-hint">
                "Ask me anything and let's have fun together!"
            </p>
            <div class="thread-empty-chips">
                <span class="chip chip-pink">"Chat"</span>
                <span class="chip chip-green">"Create"</span>
                <span class="chip chip-cream">"Learn"</span>
            </div>
        </div>
    }
}
