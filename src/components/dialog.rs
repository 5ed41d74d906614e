//! Confirmation dialog

use leptos::prelude::*;

/// Modal confirmation with confirm/cancel actions. Clicking the overlay
/// cancels; clicks inside the card stay inside.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    title: &'static str,
    description: &'static str,
    confirm_label: &'static str,
    cancel_label: &'static str,
    on_confirm: impl Fn() + Clone + 'static + Send,
    on_cancel: impl Fn() + Clone + 'static + Send,
) -> impl IntoView {
    view! {
        {move || {
            open.get().then(|| {
                let confirm = on_confirm.clone();
                let cancel = on_cancel.clone();
                let overlay_cancel = on_cancel.clone();
                view! {
                    <div class="dialog-overlay" on:click=move |_| overlay_cancel()>
                        <div
                            class="dialog-card"
                            on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                        >
                            <h2 class="dialog-title">{title}</h2>
                            <p class="dialog-description">{description}</p>
                            <div class="dialog-actions">
                                <button class="btn btn-outline" on:click=move |_| cancel()>
                                    {cancel_label}
                                </button>
                                <button class="btn btn-danger" on:click=move |_| confirm()>
                                    {confirm_label}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
