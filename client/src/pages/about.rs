//! About page.

use content::endpoints::ROUTE_BLOGS;
use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page about">
            <h1 class="page__title">
                "About "
                <span class="accent">"NyayaSahayak"</span>
            </h1>
            <p>
                "NyayaSahayak is a community platform for understanding Indian law. "
                "Anyone can read articles; signed-in members can write their own and join the discussion."
            </p>
            <h2>"Our mission"</h2>
            <p>
                "Legal information is often locked behind jargon and cost. "
                "We want a first answer to be a click away, written by people who have been there."
            </p>
            <h2>"A note of caution"</h2>
            <p>
                "Articles and assistant replies are general information, not legal advice. "
                "For your specific situation, consult a qualified advocate."
            </p>
            <a class="btn btn--primary" href=ROUTE_BLOGS>
                "Read the Blogs"
            </a>
        </div>
    }
}
