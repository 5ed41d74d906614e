//! Composer input for the chat page

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlTextAreaElement;

/// Composer with an auto-resizing textarea. Enter sends, Shift+Enter
/// inserts a newline.
#[component]
pub fn ChatInput(
    /// Current input value
    value: RwSignal<String>,
    /// Called when the user submits
    on_submit: impl Fn() + 'static + Clone,
    /// Whether input is disabled
    #[prop(into)] disabled: Signal<bool>,
    /// Placeholder text
    #[prop(default = "Type something sweet...")]
    placeholder: &'static str,
) -> impl IntoView {
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    // Grow the textarea with its content, up to a cap
    let resize_textarea = move || {
        if let Some(textarea) = textarea_ref.get_untracked() {
            let el: &HtmlTextAreaElement = textarea.as_ref();
            let new_height = el.scroll_height().min(200);
            let _ = el.set_attribute(
                "style",
                &format!("height: {}px; max-height: 200px;", new_height),
            );
        }
    };

    let on_input = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        if let Ok(textarea) = target.dyn_into::<HtmlTextAreaElement>() {
            value.set(textarea.value());
            resize_textarea();
        }
    };

    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                if !value.get_untracked().trim().is_empty() {
                    on_submit();
                }
            }
        }
    };

    let on_button_click = {
        let on_submit = on_submit.clone();
        move |_| {
            if !value.get_untracked().trim().is_empty() {
                on_submit();
            }
        }
    };

    view! {
        <div class="composer">
            <textarea
                node_ref=textarea_ref
                prop:value=move || value.get()
                on:input=on_input
                on:keydown=on_keydown
                placeholder=placeholder
                disabled=move || disabled.get()
                rows="1"
                class="composer-input"
                style="max-height: 200px;"
            ></textarea>

            <button
                on:click=on_button_click
                disabled=move || disabled.get() || value.get().trim().is_empty()
                class="composer-send"
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    class="composer-send-icon"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <line x1="22" y1="2" x2="11" y2="13"></line>
                    <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                </svg>
            </button>
        </div>
    }
}
