//! Floating button that opens the assistant panel on a post page.

use leptos::prelude::*;

#[component]
pub fn ChatCta(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || !open.get()>
            <button class="chat-cta" title="Ask the AI assistant" on:click=move |_| open.set(true)>
                <span class="chat-cta__icon" aria-hidden="true">"💬"</span>
                <span class="chat-cta__label">"Ask AI"</span>
            </button>
        </Show>
    }
}
