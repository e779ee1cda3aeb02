//! Home page: the signed-in landing screen with a logout control.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading_screen::LoadingScreen;
use crate::net::types::UserProfile;
use crate::state::session::{Session, SessionStore};
use crate::util::guard::{GuardOutcome, Screen, evaluate, install_route_guard};

/// Home page. Redirects to `/login` when there is no session.
///
/// Logout only clears the store; the guard performs the redirect.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<SessionStore>();

    install_route_guard(Screen::Home, session, use_navigate());

    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move { store.logout().await });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &store;
        }
    });

    view! {
        {move || match (session.with(|s| evaluate(Screen::Home, s)), session.with(|s| s.user().cloned())) {
            (GuardOutcome::Stay, Some(user)) => view! { <HomeContent user=user on_logout=on_logout/> }.into_any(),
            _ => view! { <LoadingScreen/> }.into_any(),
        }}
    }
}

#[component]
fn HomeContent(user: UserProfile, on_logout: Callback<()>) -> impl IntoView {
    let label = user.display_label().to_owned();
    let avatar = user.avatar().map(ToOwned::to_owned);

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Over the Algorithm"</h1>
                <div class="home-page__user">
                    {avatar.map(|src| view! { <img class="home-page__avatar" src=src alt=""/> })}
                    <span class="home-page__name">{label}</span>
                    <button class="btn" on:click=move |_| on_logout.run(())>
                        "Log out"
                    </button>
                </div>
            </header>
            <main class="home-page__body">
                <h2>"Welcome!"</h2>
                <p>"Every morning at 7, the hottest context delivered to you."</p>
            </main>
        </div>
    }
}
