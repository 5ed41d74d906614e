//! Session state: one current-user check, resolved once per mount.
//!
//! `login`/`logout` never touch this state directly; they navigate away
//! and the next mount's check (or an explicit `refresh`) reconciles.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::types::User;

/// Lifecycle of the session check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Checking,
    Authenticated,
    Anonymous,
}

/// Next phase and visible user for a finished check. Any failure, and
/// any success that says `authenticated: false`, lands on Anonymous.
fn resolve(result: Result<User, ApiError>) -> (AuthPhase, Option<User>) {
    match result {
        Ok(user) if user.authenticated => (AuthPhase::Authenticated, Some(user)),
        Ok(_) | Err(_) => (AuthPhase::Anonymous, None),
    }
}

/// Auth state shared through context.
#[derive(Clone)]
pub struct AuthState {
    pub phase: RwSignal<AuthPhase>,
    pub user: RwSignal<Option<User>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            phase: RwSignal::new(AuthPhase::Checking),
            user: RwSignal::new(None),
        }
    }

    /// True until the first check completes.
    pub fn loading(&self) -> bool {
        self.phase.get() == AuthPhase::Checking
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase.get() == AuthPhase::Authenticated
    }

    /// Hand the browser to the backend OAuth entry point. Local state
    /// stays as-is; the next mount's check reconciles.
    pub fn login(&self, base_url: &str) {
        api::login(base_url);
    }

    /// Hand the browser to the backend logout endpoint.
    pub fn logout(&self, base_url: &str) {
        api::logout(base_url);
    }

    /// Run the current-user check against the backend and resolve the
    /// phase from its outcome.
    pub fn refresh(&self, base_url: String) {
        let auth = self.clone();
        spawn_local(async move {
            let result = api::current_user(&base_url).await;
            if let Err(err) = &result {
                tracing::warn!(%err, "session check failed, treating as anonymous");
            }
            let (phase, user) = resolve(result);
            auth.user.set(user);
            auth.phase.set(phase);
        });
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

/// Auth state provided by the app root.
pub fn use_auth() -> AuthState {
    expect_context::<AuthState>()
}
