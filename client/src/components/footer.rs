//! Site footer.

use content::endpoints::{ROUTE_ABOUT, ROUTE_BLOGS, ROUTE_CHAT, ROUTE_HOME};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <span class="accent">"Nyaya"</span>
                    "Sahayak"
                    <p class="footer__tagline">"Legal knowledge, shared by the community."</p>
                </div>
                <nav class="footer__links">
                    <a href=ROUTE_HOME>"Home"</a>
                    <a href=ROUTE_BLOGS>"Blogs"</a>
                    <a href=ROUTE_CHAT>"AI Chat"</a>
                    <a href=ROUTE_ABOUT>"About"</a>
                </nav>
                <p class="footer__note">
                    "Articles are community contributions and are not legal advice."
                </p>
            </div>
        </footer>
    }
}
