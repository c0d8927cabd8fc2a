//! Inline status banner shown under a form.

use leptos::prelude::*;

/// Renders `text` in a banner; hidden while the text is empty.
#[component]
pub fn StatusMessage(text: Signal<String>, #[prop(default = "info")] tone: &'static str) -> impl IntoView {
    view! {
        <Show when=move || !text.get().is_empty()>
            <p class=format!("status-message status-message--{tone}")>{move || text.get()}</p>
        </Show>
    }
}
