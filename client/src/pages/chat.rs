//! Standalone assistant page.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="page chat-page">
            <h1 class="page__title">
                "Legal "
                <span class="accent">"AI Chat"</span>
            </h1>
            <ChatPanel blog=None/>
        </div>
    }
}
