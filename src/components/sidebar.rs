//! Sidebar with the conversation list and session controls

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::state::AppState;

/// Conversation list sidebar. `delete_request` carries the id of a
/// conversation awaiting delete confirmation on the chat page.
#[component]
pub fn Sidebar(
    /// Whether the sidebar is open (mobile)
    is_open: RwSignal<bool>,
    /// Conversation id pending delete confirmation
    delete_request: RwSignal<Option<String>>,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let auth = use_auth();
    let conversations = state.conversations;
    let api_base = state.api_base;

    // Inline rename buffers
    let editing_id = RwSignal::new(Option::<String>::None);
    let edit_title = RwSignal::new(String::new());

    let commit_rename = move || {
        if let Some(id) = editing_id.get_untracked() {
            let title = edit_title.get_untracked();
            conversations.update(|s| s.rename(&id, title));
            editing_id.set(None);
        }
    };

    let new_chat = move |_| {
        conversations.update(|s| {
            s.new_conversation();
        });
        is_open.set(false);
    };

    let sign_out = {
        let auth = auth.clone();
        move |_| {
            auth.logout(&api_base.get_untracked());
        }
    };

    view! {
        // Overlay for mobile
        <Show when=move || is_open.get()>
            <div
                class="sidebar-overlay"
                on:click=move |_| is_open.set(false)
            ></div>
        </Show>

        <aside class=move || format!(
            "sidebar {}",
            if is_open.get() { "sidebar-open" } else { "" }
        )>
            // Logo
            <div class="sidebar-logo">
                <a href="/">
                    <img src="/assets/logo.svg" alt="Oh, Mochi" class="sidebar-logo-img" />
                </a>
            </div>

            // New chat
            <div class="sidebar-new">
                <button on:click=new_chat class="btn btn-mochi sidebar-new-btn">
                    "✨ New Chat"
                </button>
            </div>

            // Conversation list
            <div class="sidebar-list">
                {move || {
                    let active = conversations.with(|s| s.active_id().map(str::to_string));
                    let items = conversations.with(|s| {
                        s.conversations()
                            .iter()
                            .map(|c| (c.id.clone(), c.title.clone()))
                            .collect::<Vec<_>>()
                    });

                    items.into_iter().map(|(id, title)| {
                        let is_active = active.as_deref() == Some(id.as_str());
                        let is_editing =
                            editing_id.with(|e| e.as_deref() == Some(id.as_str()));
                        let select_id = id.clone();
                        let edit_id = id.clone();
                        let edit_seed = title.clone();
                        let delete_id = id.clone();

                        view! {
                            <div
                                class=format!(
                                    "convo-item {}",
                                    if is_active { "convo-item-active" } else { "" }
                                )
                                on:click=move |_| {
                                    conversations.update(|s| s.select(&select_id));
                                    is_open.set(false);
                                }
                            >
                                <span class="convo-icon">"💬"</span>

                                {if is_editing {
                                    view! {
                                        <input
                                            class="convo-rename"
                                            prop:value=move || edit_title.get()
                                            on:input=move |ev| edit_title.set(event_target_value(&ev))
                                            on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                                if ev.key() == "Enter" {
                                                    commit_rename();
                                                }
                                            }
                                            on:blur=move |_| commit_rename()
                                            autofocus=true
                                        />
                                    }.into_any()
                                } else {
                                    view! {
                                        <span class="convo-title">{title.clone()}</span>
                                    }.into_any()
                                }}

                                <button
                                    class="icon-btn"
                                    title="Rename"
                                    on:click=move |ev: web_sys::MouseEvent| {
                                        ev.stop_propagation();
                                        edit_title.set(edit_seed.clone());
                                        editing_id.set(Some(edit_id.clone()));
                                    }
                                >
                                    "✏️"
                                </button>
                                <button
                                    class="icon-btn icon-btn-danger"
                                    title="Delete"
                                    on:click=move |ev: web_sys::MouseEvent| {
                                        ev.stop_propagation();
                                        delete_request.set(Some(delete_id.clone()));
                                    }
                                >
                                    "🗑"
                                </button>
                            </div>
                        }
                    }).collect::<Vec<_>>()
                }}
            </div>

            // Session section
            <div class="sidebar-session">
                {move || {
                    if auth.loading() {
                        view! {
                            <span class="session-muted">"Checking session..."</span>
                        }.into_any()
                    } else if auth.is_authenticated() {
                        let name = auth
                            .user
                            .get()
                            .and_then(|u| u.name)
                            .unwrap_or_else(|| "Signed in".to_string());
                        let sign_out = sign_out.clone();
                        view! {
                            <div class="session-row">
                                <span class="session-name">{name}</span>
                                <button class="btn btn-ghost" on:click=sign_out>
                                    "Sign Out"
                                </button>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <a href="/auth" class="btn btn-ghost">"Sign In"</a>
                        }.into_any()
                    }
                }}
            </div>
        </aside>
    }
}
