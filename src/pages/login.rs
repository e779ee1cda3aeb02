//! Login page: provider sign-in button plus the failure banner.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::loading_screen::LoadingScreen;
use crate::components::provider_login_button::ProviderLoginButton;
use crate::config::ApiConfig;
use crate::state::session::Session;
use crate::util::guard::{GuardOutcome, Screen, evaluate, install_route_guard};

/// Query parameter the provider callback sets when sign-in fails.
pub const ERROR_QUERY_PARAM: &str = "error";

/// Shown for every provider failure; the error code itself is not surfaced.
pub const SIGN_IN_FAILED_MESSAGE: &str = "Sign-in failed. Please try again.";

/// Banner text for the raw `error` query value, if any.
pub fn sign_in_error_banner(error_param: Option<&str>) -> Option<&'static str> {
    error_param.filter(|code| !code.is_empty()).map(|_| SIGN_IN_FAILED_MESSAGE)
}

/// Login page. Redirects home once a session exists.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ApiConfig>();
    let query = use_query_map();

    install_route_guard(Screen::Login, session, use_navigate());

    let banner = move || query.with(|q| sign_in_error_banner(q.get(ERROR_QUERY_PARAM).as_deref()));
    let provider_url = config.provider_login_url();

    view! {
        {move || match session.with(|s| evaluate(Screen::Login, s)) {
            GuardOutcome::ShowLoading | GuardOutcome::RedirectTo(_) => view! { <LoadingScreen/> }.into_any(),
            GuardOutcome::Stay => {
                view! {
                    <div class="login-page">
                        <div class="login-card">
                            <h1>"Over the Algorithm"</h1>
                            <p class="login-card__subtitle">
                                "Beyond the algorithm: the context that matters right now."
                            </p>
                            {move || banner().map(|message| view! { <p class="login-message login-message--error">{message}</p> })}
                            <ProviderLoginButton href=provider_url.clone()/>
                        </div>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
