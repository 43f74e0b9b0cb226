//! "AI Assistant" panel.
//!
//! The assistant itself is hosted elsewhere; this panel only frames the
//! conversation and shows a context-aware greeting.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use content::BlogPost;
use leptos::prelude::*;

pub const PANEL_TITLE: &str = "AI Assistant";
pub const UNAVAILABLE_NOTICE: &str = "The assistant is not connected yet. Check back soon.";

/// Opening line shown at the top of the panel.
pub fn chat_greeting(blog: Option<&BlogPost>) -> String {
    match blog {
        Some(post) if !post.title.trim().is_empty() => {
            format!("Have a question about \"{}\"? Ask away.", post.title.trim())
        }
        _ => "Ask a question about Indian law and legal procedure.".to_owned(),
    }
}

#[component]
pub fn ChatPanel(
    blog: Option<BlogPost>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    #[prop(optional)] floating: bool,
) -> impl IntoView {
    let greeting = chat_greeting(blog.as_ref());
    let class = if floating { "chat-panel chat-panel--floating" } else { "chat-panel" };

    view! {
        <section class=class aria-label=PANEL_TITLE>
            <header class="chat-panel__header">
                <h3 class="chat-panel__title">{PANEL_TITLE}</h3>
                {on_close.map(|cb| {
                    view! {
                        <button class="chat-panel__close" aria-label="Close" on:click=move |_| cb.run(())>
                            "✕"
                        </button>
                    }
                })}
            </header>
            <div class="chat-panel__messages">
                <p class="chat-panel__message chat-panel__message--assistant">{greeting}</p>
                <p class="chat-panel__notice">{UNAVAILABLE_NOTICE}</p>
            </div>
            <form class="chat-panel__input" on:submit=|ev| ev.prevent_default()>
                <input type="text" placeholder="Type your question..." disabled=true/>
                <button type="submit" class="btn btn--primary" disabled=true>
                    "Send"
                </button>
            </form>
        </section>
    }
}
