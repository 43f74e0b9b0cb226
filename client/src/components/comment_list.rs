//! Comment thread under a post.

use content::Comment;
use content::format::format_date;
use leptos::prelude::*;

use crate::state::blog_detail::{CommentsView, comments_view};

#[component]
pub fn CommentList(comments: Vec<Comment>) -> impl IntoView {
    match comments_view(&comments) {
        CommentsView::Empty(message) => view! { <p class="comments__empty">{message}</p> }.into_any(),
        CommentsView::List(items) => {
            let rows = items
                .iter()
                .map(|comment| {
                    let date = format_date(comment.created_at.as_deref());
                    view! {
                        <li class="comment">
                            <div class="comment__meta">
                                <span class="comment__author">{comment.author.name.clone()}</span>
                                <span class="comment__date">{date}</span>
                            </div>
                            <p class="comment__body">{comment.body.clone()}</p>
                        </li>
                    }
                })
                .collect_view();
            view! { <ul class="comments__list">{rows}</ul> }.into_any()
        }
    }
}
