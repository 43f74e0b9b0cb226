//! Landing page.

use content::endpoints::{ROUTE_BLOGS, ROUTE_CHAT};
use leptos::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "📚",
        title: "Community Legal Blogs",
        text: "Read plain-language explainers on rights, procedure and everyday legal questions.",
    },
    Feature {
        icon: "✍",
        title: "Share What You Know",
        text: "Lawyers, students and citizens publish articles and discuss them in the comments.",
    },
    Feature {
        icon: "🤖",
        title: "AI Legal Assistant",
        text: "Ask follow-up questions about a topic and get pointed to the right resources.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <section class="hero">
                <h1 class="hero__title">
                    "Legal help, "
                    <span class="accent">"made simple"</span>
                </h1>
                <p class="hero__subtitle">
                    "NyayaSahayak brings legal knowledge to everyone through community articles and an AI assistant."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href=ROUTE_BLOGS>
                        "Explore Blogs"
                    </a>
                    <a class="btn btn--secondary" href=ROUTE_CHAT>
                        "Start Legal Chat"
                    </a>
                </div>
            </section>
            <section class="features">
                {FEATURES
                    .iter()
                    .map(|f| {
                        view! {
                            <div class="feature">
                                <span class="feature__icon" aria-hidden="true">{f.icon}</span>
                                <h3 class="feature__title">{f.title}</h3>
                                <p class="feature__text">{f.text}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
