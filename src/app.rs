//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::api::HttpSessionTransport;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::session::SessionStore;
use crate::util::guard::Screen;

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
/// Owns the session store for the lifetime of the mounted app: provides it
/// (and a signal mirroring it) through context, starts the session check in
/// the browser, and tears the store down on unmount.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env();
    let store = SessionStore::new(Arc::new(HttpSessionTransport::new(config.clone())));
    let session = RwSignal::new(store.snapshot());
    let subscription = store.subscribe(move |next| session.set(next.clone()));

    #[cfg(feature = "hydrate")]
    {
        let store = store.clone();
        leptos::task::spawn_local(async move { store.initialize().await });
    }

    let owned = store.clone();
    on_cleanup(move || {
        subscription.unsubscribe();
        owned.teardown();
    });

    provide_context(config);
    provide_context(store);
    provide_context(session);

    view! {
        <Title text="Over the Algorithm"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=Screen::Home.path()/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
