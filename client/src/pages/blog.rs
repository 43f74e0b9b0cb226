//! Single post page with comments and the assistant toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the post named by the `id` route param, then lets signed-in
//! visitors append comments. A successful comment is appended locally; the
//! post is never refetched.

use content::endpoints::{ROUTE_BLOGS, ROUTE_SIGN_IN};
use content::format::format_date;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::chat_cta::ChatCta;
use crate::components::chat_panel::ChatPanel;
use crate::components::comment_list::CommentList;
use crate::state::auth::AuthState;
use crate::state::blog_detail::{BlogLoad, CommentStep, begin_comment};
use crate::util::browser::{alert, hard_redirect};

#[component]
pub fn BlogPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let blog_id = move || params.read().get("id");

    let load = RwSignal::new(BlogLoad::Loading);
    let comment = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let chat_open = RwSignal::new(false);

    Effect::new(move || {
        let Some(id) = blog_id() else {
            return;
        };
        load.set(BlogLoad::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_blog(&id).await;
            if let Err(e) = &result {
                log::error!("blog {id} request failed: {e}");
            }
            load.set(BlogLoad::from_result(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let step = load.with_untracked(|current| {
            begin_comment(&auth.get_untracked(), current, &comment.get_untracked(), pending.get_untracked())
        });
        match step {
            CommentStep::Ignored => {}
            CommentStep::RedirectSignIn => hard_redirect(ROUTE_SIGN_IN),
            CommentStep::Alert(message) => alert(message),
            CommentStep::Submit { blog_id, body, author_name } => {
                pending.set(true);
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    use crate::state::blog_detail::{CommentOutcome, finish_comment};

                    let result = crate::net::api::add_comment(&blog_id, &body).await;
                    if let Err(e) = &result {
                        log::error!("comment on {blog_id} failed: {e}");
                    }
                    let outcome = load
                        .try_update(|current| finish_comment(current, result, &author_name))
                        .unwrap_or(CommentOutcome::Appended);
                    pending.set(false);
                    match outcome {
                        CommentOutcome::Appended => comment.set(String::new()),
                        CommentOutcome::RedirectSignIn => hard_redirect(ROUTE_SIGN_IN),
                        CommentOutcome::Alert(message) => alert(&message),
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = (blog_id, body, author_name);
            }
        }
    };

    let comment_form = move || {
        if auth.get().is_signed_in() {
            view! {
                <form class="comment-form" on:submit=on_comment>
                    <textarea
                        class="comment-form__input"
                        rows="3"
                        placeholder="Share your thoughts..."
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Posting..." } else { "Post Comment" }}
                    </button>
                </form>
            }
            .into_any()
        } else {
            view! {
                <p class="comment-form__signed-out">
                    <a href=ROUTE_SIGN_IN rel="external">
                        "Sign in"
                    </a>
                    " to add a comment."
                </p>
            }
            .into_any()
        }
    };

    let body = move || match load.get() {
        BlogLoad::Loading => view! {
            <div class="blog blog--skeleton" aria-hidden="true">
                <div class="skeleton skeleton--title"></div>
                <div class="skeleton skeleton--image"></div>
                <div class="skeleton skeleton--line"></div>
                <div class="skeleton skeleton--line"></div>
            </div>
        }
        .into_any(),
        BlogLoad::Failed(message) => view! {
            <div class="blog blog--missing">
                <h1>{message}</h1>
                <a class="btn btn--primary" href=ROUTE_BLOGS>
                    "Back to Blogs"
                </a>
            </div>
        }
        .into_any(),
        BlogLoad::Loaded(post) => {
            let date = format_date(post.created_at.as_deref());
            let image = post
                .image_url
                .clone()
                .map(|src| view! { <img class="blog__cover" src=src alt=post.title.clone()/> });
            let context = post.clone();
            let comment_count = post.comments.len();
            view! {
                <article class="blog">
                    <a class="blog__back" href=ROUTE_BLOGS>
                        "← Back to Blogs"
                    </a>
                    <h1 class="blog__title">{post.title}</h1>
                    <div class="blog__meta">
                        <span class="blog__author">{post.author.name}</span>
                        <span class="blog__date">{date}</span>
                    </div>
                    {image}
                    <div class="blog__body">{post.body}</div>
                    <section class="comments">
                        <h2>{format!("Comments ({comment_count})")}</h2>
                        {comment_form}
                        <CommentList comments=post.comments/>
                    </section>
                </article>
                <ChatCta open=chat_open/>
                <Show when=move || chat_open.get()>
                    <ChatPanel
                        blog=Some(context.clone())
                        on_close=Callback::new(move |()| chat_open.set(false))
                        floating=true
                    />
                </Show>
            }
            .into_any()
        }
    };

    view! { <div class="page blog-page">{body}</div> }
}
