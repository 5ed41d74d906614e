//! Footer strip shared by the pages

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Made with 🍡 and a sprinkle of sparkles"</p>
        </footer>
    }
}
