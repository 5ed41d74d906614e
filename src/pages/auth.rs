//! Auth page: Google OAuth entry plus a local email/password form

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::auth::use_auth;
use crate::components::{Footer, LoadingSpinner};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Signup,
}

/// Login/signup page
#[component]
pub fn AuthPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let auth = use_auth();
    let api_base = state.api_base;
    let query = use_query_map();

    // Initial mode comes from the landing page links (?mode=signup)
    let initial_mode = match query.with_untracked(|q| q.get("mode")).as_deref() {
        Some("signup") => AuthMode::Signup,
        _ => AuthMode::Login,
    };

    // Form state
    let mode = RwSignal::new(initial_mode);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let is_signup = move || mode.get() == AuthMode::Signup;

    // Start the backend-owned OAuth flow
    let on_google = move |_| {
        auth.login(&api_base.get_untracked());
    };

    // Validate, then only log: the email/password endpoints are not
    // wired up yet.
    // TODO: call the backend's email auth endpoints once they exist;
    // only Google OAuth is wired today.
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        if email_val.is_empty() || password_val.is_empty() {
            error.set(Some("Email and password are required".to_string()));
            return;
        }

        let signup = mode.get_untracked() == AuthMode::Signup;
        if signup {
            if name.get_untracked().is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if password_val != confirm_password.get_untracked() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }
            if password_val.chars().count() < 6 {
                error.set(Some("Password must be at least 6 characters".to_string()));
                return;
            }
        }

        is_loading.set(true);
        tracing::info!(email = %email_val, signup, "email auth submitted; backend wiring pending");
        is_loading.set(false);
    };

    view! {
        <Title text="Sign in | Oh, Mochi" />
        <div class="page auth">
            // Decorative dots
            <div class="deco">
                <span class="deco-dot deco-pink" style="top: 5rem; left: 2.5rem;"></span>
                <span class="deco-dot deco-green" style="top: 8rem; right: 5rem;"></span>
                <span class="deco-dot deco-pink" style="bottom: 10rem; left: 25%;"></span>
                <span class="deco-dot deco-green" style="top: 33%; right: 25%;"></span>
            </div>

            <main class="auth-main">
                <a href="/" class="float-animation auth-logo-link">
                    <img src="/assets/logo.svg" alt="Oh, Mochi" class="auth-logo" />
                </a>

                <div class="auth-card">
                    <div class="auth-header">
                        <h1 class="auth-title">
                            {move || if is_signup() { "Join Oh, Mochi!" } else { "Welcome Back!" }}
                        </h1>
                        <p class="auth-subtitle">
                            {move || if is_signup() {
                                "Create an account to get started"
                            } else {
                                "Sign in to continue your conversations"
                            }}
                        </p>
                    </div>

                    // Google OAuth button
                    <button class="btn btn-outline auth-google" on:click=on_google>
                        "Continue with Google"
                    </button>

                    <div class="auth-divider">
                        <span>"or"</span>
                    </div>

                    // Email/password form
                    <form on:submit=on_submit class="auth-form">
                        <Show when=move || error.get().is_some()>
                            <div class="auth-error">
                                {move || error.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <Show when=is_signup>
                            <div class="auth-field">
                                <label class="auth-label">"Name"</label>
                                <input
                                    type="text"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                    placeholder="Your name"
                                    disabled=move || is_loading.get()
                                    class="input"
                                />
                            </div>
                        </Show>

                        <div class="auth-field">
                            <label class="auth-label">"Email"</label>
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                placeholder="hello@example.com"
                                disabled=move || is_loading.get()
                                class="input"
                            />
                        </div>

                        <div class="auth-field">
                            <label class="auth-label">"Password"</label>
                            <input
                                type="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                                placeholder="••••••••"
                                disabled=move || is_loading.get()
                                class="input"
                            />
                        </div>

                        <Show when=is_signup>
                            <div class="auth-field">
                                <label class="auth-label">"Confirm Password"</label>
                                <input
                                    type="password"
                                    prop:value=move || confirm_password.get()
                                    on:input=move |ev| confirm_password.set(event_target_value(&ev))
                                    placeholder="••••••••"
                                    disabled=move || is_loading.get()
                                    class="input"
                                />
                            </div>
                        </Show>

                        <button
                            type="submit"
                            disabled=move || is_loading.get()
                            class=move || format!(
                                "btn btn-lg auth-submit {}",
                                if is_signup() { "btn-mochi" } else { "btn-green" }
                            )
                        >
                            <Show when=move || is_loading.get()>
                                <LoadingSpinner />
                            </Show>
                            {move || if is_loading.get() {
                                "Processing..."
                            } else if is_signup() {
                                "Create Account"
                            } else {
                                "Sign In"
                            }}
                        </button>
                    </form>

                    // Guest mode
                    <div class="auth-divider"></div>
                    <a href="/chat" class="btn btn-ghost auth-guest">
                        "👻 Use as Guest"
                    </a>

                    // Toggle login/signup
                    <p class="auth-toggle">
                        {move || if is_signup() {
                            "Already have an account? "
                        } else {
                            "Don't have an account? "
                        }}
                        <button
                            type="button"
                            class="auth-toggle-link"
                            on:click=move |_| {
                                mode.update(|m| {
                                    *m = match *m {
                                        AuthMode::Login => AuthMode::Signup,
                                        AuthMode::Signup => AuthMode::Login,
                                    }
                                });
                                error.set(None);
                            }
                        >
                            {move || if is_signup() { "Sign in" } else { "Sign up" }}
                        </button>
                    </p>
                </div>
            </main>
            <Footer />
        </div>
    }
}
