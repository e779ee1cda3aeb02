//! Route guard shared by the login and home pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `evaluate` is a pure projection of the session onto a per-screen outcome.
//! Pages hand the outcome to `install_route_guard`, which performs the
//! navigation; the decision itself never touches the router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

/// Route-level screens the guard knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
}

impl Screen {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
        }
    }
}

/// Session as the guard sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Initializing,
    Authenticated,
    Unauthenticated,
}

impl From<&Session> for GuardState {
    fn from(session: &Session) -> Self {
        match session {
            Session::Initializing => Self::Initializing,
            Session::Authenticated(_) => Self::Authenticated,
            Session::Unauthenticated => Self::Unauthenticated,
        }
    }
}

/// What the current screen should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    ShowLoading,
    Stay,
    RedirectTo(Screen),
}

/// Decide what `screen` does for `session`.
#[must_use]
pub fn evaluate(screen: Screen, session: &Session) -> GuardOutcome {
    let target = match (screen, GuardState::from(session)) {
        (_, GuardState::Initializing) => return GuardOutcome::ShowLoading,
        (Screen::Login, GuardState::Authenticated) => Screen::Home,
        (Screen::Home, GuardState::Unauthenticated) => Screen::Login,
        (Screen::Login, GuardState::Unauthenticated) | (Screen::Home, GuardState::Authenticated) => {
            return GuardOutcome::Stay;
        }
    };
    if target == screen { GuardOutcome::Stay } else { GuardOutcome::RedirectTo(target) }
}

/// Navigate away from `screen` whenever the session says it must.
///
/// The effect re-runs only when `session` changes, so each transition
/// produces at most one navigation. History is replaced so the back button
/// does not bounce between guarded screens.
pub fn install_route_guard<F>(screen: Screen, session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardOutcome::RedirectTo(target) = session.with(|s| evaluate(screen, s)) {
            log::debug!("guard: {} -> {}", screen.path(), target.path());
            navigate(target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
