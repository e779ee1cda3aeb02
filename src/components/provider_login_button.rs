//! Sign-in button that hands the browser over to the identity provider.
//!
//! This is a full-page navigation, not a fetch: the provider flow ends with
//! a redirect back to `/` (session cookie set) or `/login?error=...`.

use leptos::prelude::*;

#[component]
pub fn ProviderLoginButton(
    /// Provider login endpoint to navigate to.
    #[prop(into)]
    href: String,
) -> impl IntoView {
    let target = href.clone();
    view! {
        <a
            href=href
            class="login-button login-button--kakao"
            on:click=move |ev| {
                ev.prevent_default();
                #[cfg(feature = "hydrate")]
                {
                    if let Some(window) = web_sys::window() {
                        if let Err(e) = window.location().set_href(&target) {
                            log::warn!("login: provider redirect failed: {e:?}");
                        }
                    }
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = &target;
                }
            }
        >
            "Sign in with Kakao"
        </a>
    }
}
