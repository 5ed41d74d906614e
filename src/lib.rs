//! Oh, Mochi chat UI
//!
//! A friendly client-side rendered Leptos frontend for the Mochi
//! assistant backend.

pub mod api;
pub mod auth;
pub mod components;
pub mod pages;
pub mod state;
pub mod store;
pub mod types;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use auth::AuthState;
use pages::{auth::AuthPage, chat::ChatPage, home::HomePage};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize global state
    let app_state = AppState::new();
    let auth_state = AuthState::new();
    provide_context(app_state.clone());
    provide_context(auth_state.clone());

    // Single session check per mount
    let api_base = app_state.api_base;
    Effect::new(move |_| {
        auth_state.refresh(api_base.get_untracked());
    });

    view! {
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/auth") view=AuthPage />
                    <Route path=path!("/chat") view=ChatPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found-card">
                <h1 class="not-found-code">"404"</h1>
                <p class="not-found-text">"This page wandered off somewhere..."</p>
                <a href="/" class="btn btn-mochi">"Go Home"</a>
            </div>
        </div>
    }
}
