//! Fixed top navigation with desktop links, a mobile menu and account actions.
//!
//! DESIGN
//! ======
//! Link visibility and highlighting are plain functions over the current
//! path and sign-in state; the component only wires them to signals.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use content::endpoints::{ROUTE_ABOUT, ROUTE_ADD_BLOG, ROUTE_BLOGS, ROUTE_CHAT, ROUTE_HOME, ROUTE_SIGN_IN, ROUTE_SIGN_UP};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;

/// Vertical scroll offset after which the bar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

struct NavItem {
    href: &'static str,
    label: &'static str,
    signed_in_only: bool,
}

const NAV_ITEMS: [NavItem; 5] = [
    NavItem { href: ROUTE_HOME, label: "Home", signed_in_only: false },
    NavItem { href: ROUTE_BLOGS, label: "Blogs", signed_in_only: false },
    NavItem { href: ROUTE_ADD_BLOG, label: "Add Blog", signed_in_only: true },
    NavItem { href: ROUTE_CHAT, label: "AI Chat", signed_in_only: false },
    NavItem { href: ROUTE_ABOUT, label: "About", signed_in_only: false },
];

/// `(href, label)` pairs shown for the given sign-in state, in menu order.
pub fn visible_links(signed_in: bool) -> Vec<(&'static str, &'static str)> {
    NAV_ITEMS
        .iter()
        .filter(|item| signed_in || !item.signed_in_only)
        .map(|item| (item.href, item.label))
        .collect()
}

/// Exact path match highlights a link.
pub fn link_class(current_path: &str, href: &str, mobile: bool) -> String {
    let mut class = String::from("navbar__link");
    if mobile {
        class.push_str(" navbar__link--mobile");
    }
    if current_path == href {
        class.push_str(" navbar__link--active");
    }
    class
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);
    let scrolled = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            scrolled.set(is_scrolled(y));
        });
        on_cleanup(move || handle.remove());
    }

    let on_logout = move |_: leptos::ev::MouseEvent| {
        menu_open.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.set(AuthState::resolved(None));
            crate::util::browser::hard_redirect(ROUTE_HOME);
        });
    };

    let links = move |mobile: bool| {
        let current = pathname.get();
        visible_links(auth.get().is_signed_in())
            .into_iter()
            .map(|(href, label)| {
                view! {
                    <a class=link_class(&current, href, mobile) href=href on:click=move |_| menu_open.set(false)>
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    let account = move || match auth.get().display_name() {
        Some(name) => view! {
            <span class="navbar__user">{name}</span>
            <button class="navbar__link navbar__logout" on:click=on_logout>
                "Logout"
            </button>
        }
        .into_any(),
        None => view! {
            <a class="navbar__link" href=ROUTE_SIGN_IN rel="external">
                "Sign In"
            </a>
            <a class="btn btn--primary" href=ROUTE_SIGN_UP rel="external">
                "Sign Up"
            </a>
        }
        .into_any(),
    };

    view! {
        <nav class=move || if scrolled.get() { "navbar navbar--scrolled" } else { "navbar" }>
            <div class="navbar__inner">
                <a href=ROUTE_HOME class="navbar__brand">
                    <span class="navbar__logo" aria-hidden="true">"⚖"</span>
                    <span class="navbar__name">
                        <span class="accent">"Nyaya"</span>
                        "Sahayak"
                    </span>
                </a>
                <div class="navbar__links">
                    {move || links(false)}
                    <div class="navbar__account">{account}</div>
                </div>
                <button
                    class="navbar__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="navbar__mobile">
                    {move || links(true)}
                    <div class="navbar__account navbar__account--mobile">{account}</div>
                </div>
            </Show>
        </nav>
    }
}
