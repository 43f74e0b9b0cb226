//! Post summary card for the blog list, plus its loading skeleton.

use content::BlogPost;
use content::endpoints::blog_route;
use content::format::{EXCERPT_CHARS, excerpt, format_date};
use leptos::prelude::*;

#[component]
pub fn BlogCard(post: BlogPost) -> impl IntoView {
    let href = blog_route(&post.id);
    let date = format_date(post.created_at.as_deref());
    let summary = excerpt(&post.body, EXCERPT_CHARS);
    let image = post.image_url.clone().map(|src| {
        view! { <img class="blog-card__image" src=src alt=post.title.clone() loading="lazy"/> }
    });

    view! {
        <a class="blog-card" href=href>
            {image}
            <div class="blog-card__content">
                <h3 class="blog-card__title">{post.title}</h3>
                <p class="blog-card__excerpt">{summary}</p>
                <div class="blog-card__meta">
                    <span class="blog-card__author">{post.author.name}</span>
                    <span class="blog-card__date">{date}</span>
                </div>
            </div>
        </a>
    }
}

#[component]
pub fn BlogCardSkeleton() -> impl IntoView {
    view! {
        <div class="blog-card blog-card--skeleton" aria-hidden="true">
            <div class="skeleton skeleton--image"></div>
            <div class="blog-card__content">
                <div class="skeleton skeleton--title"></div>
                <div class="skeleton skeleton--line"></div>
                <div class="skeleton skeleton--line skeleton--short"></div>
            </div>
        </div>
    }
}
