//! Loading indicators

use leptos::prelude::*;

/// Animated loading dots
#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
        <div class="dots">
            <span class="dot dot-1"></span>
            <span class="dot dot-2"></span>
            <span class="dot dot-3"></span>
        </div>
    }
}

/// Spinner for in-flight form submissions
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <svg class="spinner" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
            <circle class="spinner-track" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
            <path
                class="spinner-head"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            ></path>
        </svg>
    }
}

/// Bubble shown while an assistant reply is pending
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="bubble-row bubble-row-assistant">
            <div class="bubble bubble-assistant">
                <div class="bubble-author">"Mochi"</div>
                <LoadingDots />
            </div>
        </div>
    }
}
