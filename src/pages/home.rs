//! Landing page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::api;
use crate::auth::use_auth;
use crate::components::Footer;
use crate::state::AppState;

/// Landing page with the logo, tagline and auth entry points
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let auth = use_auth();
    let api_base = state.api_base;

    // Ping the backend once so reachability problems show up in the
    // console before anyone opens the chat
    Effect::new(move |_| {
        spawn_local(async move {
            match api::check_health(&api_base.get_untracked()).await {
                Ok(payload) => tracing::info!(%payload, "backend health"),
                Err(err) => tracing::error!(%err, "health check failed"),
            }
        });
    });

    view! {
        <Title text="Oh, Mochi" />
        <div class="page landing">
            // Decorative dots
            <div class="deco">
                <span class="deco-dot deco-pink" style="top: 5rem; left: 2.5rem;"></span>
                <span class="deco-dot deco-green" style="top: 8rem; right: 5rem;"></span>
                <span class="deco-dot deco-pink" style="bottom: 10rem; left: 25%;"></span>
                <span class="deco-dot deco-green" style="top: 33%; right: 25%;"></span>
                <span class="deco-dot deco-pink" style="bottom: 25%; right: 2.5rem;"></span>
            </div>

            <main class="landing-main">
                <div class="float-animation">
                    <img
                        src="/assets/logo.svg"
                        alt="Oh, Mochi - Cute chatbot assistant"
                        class="landing-logo"
                    />
                </div>

                <p class="landing-tagline">
                    "Your friendly AI companion, always here to help! ✨"
                </p>

                <div class="landing-actions">
                    <Show
                        when=move || auth.is_authenticated()
                        fallback=|| view! {
                            <a href="/auth?mode=signup" class="btn btn-mochi btn-lg">
                                "SIGN UP"
                            </a>
                            <a href="/auth?mode=login" class="btn btn-green btn-lg">
                                "LOGIN"
                            </a>
                        }
                    >
                        <a href="/chat" class="btn btn-mochi btn-lg">"OPEN CHAT"</a>
                    </Show>
                </div>
            </main>

            <Footer />
        </div>
    }
}
