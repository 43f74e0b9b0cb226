//! Blog creation form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validates the draft locally, uploads it as multipart and opens the new
//! post. Unauthenticated visitors are sent to sign-in before the form shows.

use content::validate::{ALLOWED_COVER_PHOTO_TYPES, FIELD_BODY, FIELD_COVER_PHOTO, FIELD_TITLE};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::compose::ComposeState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AddBlogPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth);

    let navigate = use_navigate();
    let compose = RwSignal::new(ComposeState::default());
    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        let file = file_input.get_untracked().and_then(|input| input.files()).and_then(|files| files.get(0));
        #[cfg(feature = "hydrate")]
        let photo = file
            .as_ref()
            .map(|f| content::CoverPhoto::new(f.type_(), crate::state::compose::file_byte_len(f.size())));
        #[cfg(not(feature = "hydrate"))]
        let photo: Option<content::CoverPhoto> = None;

        let title_value = title.get_untracked();
        let body_value = body.get_untracked();
        let ready = compose
            .try_update(|s| s.begin_submit(&title_value, &body_value, photo.as_ref()))
            .unwrap_or(false);
        if !ready {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file else {
                return;
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use content::endpoints::ROUTE_SIGN_IN;
                use leptos_router::NavigateOptions;

                use crate::state::compose::ComposeOutcome;
                use crate::util::browser::hard_redirect;

                let result = crate::net::api::create_blog(&title_value, &body_value, &file).await;
                if let Err(e) = &result {
                    log::error!("create blog failed: {e}");
                }
                let outcome = compose.try_update(|s| s.finish_submit(result));
                match outcome {
                    Some(ComposeOutcome::Navigate(path)) => navigate(&path, NavigateOptions::default()),
                    Some(ComposeOutcome::RedirectSignIn) => hard_redirect(ROUTE_SIGN_IN),
                    Some(ComposeOutcome::Stay) | None => {}
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, title_value, body_value);
    };

    let accept = ALLOWED_COVER_PHOTO_TYPES.join(",");

    view! {
        <Show when=move || auth.get().is_signed_in()>
            <div class="page add-blog">
                <h1 class="page__title">
                    "Write a "
                    <span class="accent">"Blog"</span>
                </h1>
                {move || compose.get().error.map(|message| view! { <p class="notice notice--error">{message}</p> })}
                <form class="compose" on:submit=on_submit.clone()>
                    <label class="compose__field">
                        <span>"Title"</span>
                        <input
                            type="text"
                            name=FIELD_TITLE
                            required=true
                            placeholder="Give your article a clear title"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="compose__field">
                        <span>"Content"</span>
                        <textarea
                            name=FIELD_BODY
                            rows="12"
                            required=true
                            placeholder="Explain the topic in plain language..."
                            prop:value=move || body.get()
                            on:input=move |ev| body.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="compose__field">
                        <span>"Cover Photo"</span>
                        <input type="file" name=FIELD_COVER_PHOTO accept=accept.clone() node_ref=file_input/>
                        <small>"JPG, PNG or GIF, up to 5MB."</small>
                    </label>
                    <button type="submit" class="btn btn--primary" disabled=move || compose.get().submitting>
                        {move || compose.get().submit_label()}
                    </button>
                </form>
            </div>
        </Show>
    }
}
