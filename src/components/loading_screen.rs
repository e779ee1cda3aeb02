//! Full-page placeholder shown while the session is unknown.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <p class="loading-screen__label">"Loading..."</p>
        </div>
    }
}
