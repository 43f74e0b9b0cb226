//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::{
    about::AboutPage, add_blog::AddBlogPage, blog::BlogPage, blogs::BlogsPage, chat::ChatPage, home::HomePage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the signed-in identity as context and sets up client-side
/// routing. Identity is resolved once per page load from the auth provider.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.set(AuthState::resolved(user));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/nyaya.css"/>
        <Title text="NyayaSahayak"/>

        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <ParentRoute path=StaticSegment("") view=SiteLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("blogs") view=BlogsPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("id")) view=BlogPage/>
                    <Route path=StaticSegment("add-blog") view=AddBlogPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("chat") view=ChatPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Navigation chrome around every page.
///
/// Nothing renders until the auth provider has answered, so signed-in and
/// signed-out affordances never flash.
#[component]
fn SiteLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show when=move || !auth.get().loading>
            <Navbar/>
            <main class="site-main">
                <Outlet/>
            </main>
            <Footer/>
        </Show>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <h1 class="page__title">"Page not found"</h1>
            <a class="btn btn--primary" href=content::endpoints::ROUTE_HOME>"Back to Home"</a>
        </div>
    }
}
