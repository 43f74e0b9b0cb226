//! Blog list page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Issues one list request on mount. A failed request is logged and the page
//! falls back to the empty state with a notice.

use content::endpoints::ROUTE_CHAT;
use leptos::prelude::*;

use crate::components::blog_card::{BlogCard, BlogCardSkeleton};
use crate::state::auth::AuthState;
use crate::state::blogs::{BlogListView, BlogsState, CallToAction, EMPTY_LIST_MESSAGE, LOAD_FAILED_NOTICE, write_cta};

fn cta_link(cta: CallToAction, class: &'static str) -> impl IntoView {
    view! {
        <a class=class href=cta.href rel=cta.external.then_some("external")>
            {cta.label}
        </a>
    }
}

#[component]
pub fn BlogsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let blogs = RwSignal::new(BlogsState::loading());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_blogs().await;
        if let Err(e) = &result {
            log::error!("blog list request failed: {e}");
        }
        blogs.update(|s| s.apply(result));
    });

    let body = move || match blogs.with(|s| s.view(auth.get().is_signed_in())) {
        BlogListView::Loading { skeletons } => view! {
            <div class="blog-grid">{(0..skeletons).map(|_| view! { <BlogCardSkeleton/> }).collect_view()}</div>
        }
        .into_any(),
        BlogListView::Empty { cta, load_failed } => view! {
            <div class="blogs__empty">
                {load_failed.then(|| view! { <p class="notice notice--error">{LOAD_FAILED_NOTICE}</p> })}
                <p>{EMPTY_LIST_MESSAGE}</p>
                {cta_link(cta, "btn btn--primary")}
            </div>
        }
        .into_any(),
        BlogListView::Cards(posts) => view! {
            <div class="blog-grid">
                {posts.into_iter().map(|post| view! { <BlogCard post=post/> }).collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="page blogs">
            <header class="blogs__header">
                <h1 class="page__title">
                    "Legal "
                    <span class="accent">"Blogs"</span>
                </h1>
                <div class="blogs__actions">
                    {move || cta_link(write_cta(auth.get().is_signed_in()), "btn btn--primary")}
                    <a class="btn btn--secondary" href=ROUTE_CHAT>
                        "Start Legal Chat"
                    </a>
                </div>
            </header>
            {body}
        </div>
    }
}
